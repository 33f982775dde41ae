use crate::board::Board;
use crate::minimax;
use crate::rng::GameRng;
use crate::threat;
use crate::types::{Difficulty, Mark};

/// Picks the computer's move for the given difficulty tier. `Easy` is a
/// uniform random open cell, `Hard` the one-ply threat heuristic,
/// `Impossible` full minimax. Callers should only offer `Impossible` on
/// small boards; the search is exhaustive.
pub fn calculate_move(
    difficulty: Difficulty,
    board: &Board,
    own_mark: Mark,
    opponent_mark: Mark,
    rng: &mut GameRng,
) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => rng.choose(&board.available_moves()).copied(),
        Difficulty::Hard => threat::choose(board, own_mark, opponent_mark, rng),
        Difficulty::Impossible => minimax::best_move(board, own_mark, opponent_mark),
    }
}
