use crate::board::Board;
use crate::types::Mark;

const WIN_SCORE: i32 = 1;
const LOSS_SCORE: i32 = -1;
const DRAW_SCORE: i32 = 0;

/// Exhaustive game-tree search. Enumerates every available move once at
/// the root, scores the resulting position under optimal play by both
/// sides, and returns the move with the highest score. Ties go to the
/// first such move in ascending position order.
///
/// Each explored node is an independent clone; the caller's board is
/// never mutated. Cost grows factorially with the number of empty
/// cells, so callers should restrict this to small boards.
pub fn best_move(board: &Board, maximizing: Mark, minimizing: Mark) -> Option<usize> {
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for position in board.available_moves() {
        let child = match board.clone_with_move(position, maximizing) {
            Ok(child) => child,
            // available_moves only yields empty in-range cells
            Err(_) => continue,
        };

        // Fresh full window per root child keeps every score exact, so
        // the first-in-order tie-break stays deterministic.
        let score = minimax_score(
            &child,
            minimizing,
            maximizing,
            minimizing,
            LOSS_SCORE - 1,
            WIN_SCORE + 1,
        );

        if score > best_score {
            best_score = score;
            best_move = Some(position);
        }
    }

    best_move
}

/// Score of `state` for the maximizing player, with `mover` the mark
/// that places next. The mover is threaded explicitly rather than
/// inferred from depth. Alpha-beta cuts subtrees; with terminal scores
/// of -1/0/+1 it cannot change which score a node reports to an
/// unpruned parent.
fn minimax_score(
    state: &Board,
    mover: Mark,
    maximizing: Mark,
    minimizing: Mark,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if let Some(winner) = state.winner(state.side_length()) {
        if winner == maximizing {
            return WIN_SCORE;
        }
        if winner == minimizing {
            return LOSS_SCORE;
        }
        return DRAW_SCORE;
    }

    if state.is_full() {
        return DRAW_SCORE;
    }

    if mover == maximizing {
        let mut max_score = i32::MIN;
        for position in state.available_moves() {
            let child = match state.clone_with_move(position, mover) {
                Ok(child) => child,
                Err(_) => continue,
            };
            let score = minimax_score(&child, minimizing, maximizing, minimizing, alpha, beta);
            max_score = max_score.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        if max_score == i32::MIN { DRAW_SCORE } else { max_score }
    } else {
        let mut min_score = i32::MAX;
        for position in state.available_moves() {
            let child = match state.clone_with_move(position, mover) {
                Ok(child) => child,
                Err(_) => continue,
            };
            let score = minimax_score(&child, maximizing, maximizing, minimizing, alpha, beta);
            min_score = min_score.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        if min_score == i32::MAX { DRAW_SCORE } else { min_score }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameOutcome;

    fn board_with_marks(marks: &[(usize, Mark)]) -> Board {
        let mut board = Board::new(3).unwrap();
        for &(position, mark) in marks {
            board.place(position, mark).unwrap();
        }
        board
    }

    #[test]
    fn test_takes_immediate_win() {
        let board = board_with_marks(&[
            (1, Mark::X),
            (2, Mark::X),
            (4, Mark::O),
            (5, Mark::O),
        ]);
        assert_eq!(best_move(&board, Mark::X, Mark::O), Some(3));
    }

    #[test]
    fn test_blocks_imminent_loss() {
        // O threatens the top row at 3; X has no win of its own.
        let board = board_with_marks(&[(1, Mark::O), (2, Mark::O), (5, Mark::X)]);
        assert_eq!(best_move(&board, Mark::X, Mark::O), Some(3));
    }

    #[test]
    fn test_tie_break_is_first_position_in_order() {
        // Every opening move on an empty board is a draw under optimal
        // play, so the tie-break must yield position 1.
        let board = Board::new(3).unwrap();
        assert_eq!(best_move(&board, Mark::X, Mark::O), Some(1));
    }

    #[test]
    fn test_tie_break_between_two_immediate_wins() {
        // X can complete either the top or the middle row; the earlier
        // completing position wins the tie.
        let board = board_with_marks(&[
            (1, Mark::X),
            (2, Mark::X),
            (4, Mark::X),
            (5, Mark::X),
            (7, Mark::O),
            (8, Mark::O),
        ]);
        assert_eq!(best_move(&board, Mark::X, Mark::O), Some(3));
    }

    #[test]
    fn test_none_on_full_board() {
        let board = board_with_marks(&[
            (1, Mark::X),
            (2, Mark::O),
            (3, Mark::X),
            (4, Mark::X),
            (5, Mark::O),
            (6, Mark::O),
            (7, Mark::O),
            (8, Mark::X),
            (9, Mark::X),
        ]);
        assert_eq!(best_move(&board, Mark::X, Mark::O), None);
    }

    #[test]
    fn test_does_not_mutate_the_searched_board() {
        let board = board_with_marks(&[(5, Mark::X), (1, Mark::O)]);
        let moves_before = board.available_moves();
        best_move(&board, Mark::X, Mark::O).unwrap();
        assert_eq!(board.available_moves(), moves_before);
    }

    #[test]
    fn test_self_play_from_empty_always_draws() {
        let mut board = Board::new(3).unwrap();
        let mut mover = Mark::X;

        while board.outcome() == GameOutcome::InProgress {
            let opponent = mover.opponent().unwrap();
            let position = best_move(&board, mover, opponent).unwrap();
            board.place(position, mover).unwrap();
            mover = opponent;
        }

        assert_eq!(board.outcome(), GameOutcome::Draw);
    }
}
