use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG for a single game session. Computer moves on the random
/// tier and coin flips replay identically for the same seed.
pub struct GameRng {
    rng: StdRng,
    seed: u64,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    pub fn random_bool(&mut self) -> bool {
        self.rng.random()
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.random_range(0..items.len());
        items.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        for _ in 0..32 {
            assert_eq!(a.random_range(0..1000usize), b.random_range(0..1000usize));
        }
    }

    #[test]
    fn test_choose_from_empty_slice() {
        let mut rng = GameRng::new(7);
        let empty: [usize; 0] = [];
        assert_eq!(rng.choose(&empty), None);
    }

    #[test]
    fn test_choose_returns_member() {
        let mut rng = GameRng::new(7);
        let items = [10, 20, 30];
        for _ in 0..16 {
            let picked = *rng.choose(&items).unwrap();
            assert!(items.contains(&picked));
        }
    }
}
