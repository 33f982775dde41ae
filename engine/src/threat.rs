use crate::board::Board;
use crate::rng::GameRng;
use crate::types::Mark;

/// Fixed-priority move policy: complete an own near-win, block the
/// opponent's, take the center, otherwise pick a random open cell. Looks
/// exactly one near-win deep; it does not defend against forks and makes
/// no optimality promise on boards larger than 3x3.
pub fn choose(board: &Board, own_mark: Mark, opponent_mark: Mark, rng: &mut GameRng) -> Option<usize> {
    if let Some(position) = board.find_threatened_position(own_mark) {
        return Some(position);
    }

    if let Some(position) = board.find_threatened_position(opponent_mark) {
        return Some(position);
    }

    let center = board.center_position();
    if board.mark_at(center) == Some(Mark::Empty) {
        return Some(center);
    }

    rng.choose(&board.available_moves()).copied()
}
