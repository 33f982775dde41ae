use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Mark::Empty
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::Empty => write!(f, " "),
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A single board cell. `position` is 1-based and never changes after
/// construction; `mark` only moves from `Empty` to a player mark, and
/// back to `Empty` only through a full board reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    position: usize,
    mark: Mark,
}

impl Cell {
    pub fn new(position: usize) -> Self {
        Self {
            position,
            mark: Mark::Empty,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn is_marked(&self) -> bool {
        self.mark != Mark::Empty
    }

    pub(crate) fn set_mark(&mut self, mark: Mark) {
        self.mark = mark;
    }

    pub(crate) fn clear(&mut self) {
        self.mark = Mark::Empty;
    }
}

/// Derived from live board state on demand, never cached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win(Mark),
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Hard,
    Impossible,
}

impl Difficulty {
    pub fn from_name(name: &str) -> Option<Difficulty> {
        match name {
            "easy" => Some(Difficulty::Easy),
            "hard" => Some(Difficulty::Hard),
            "impossible" => Some(Difficulty::Impossible),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Hard => write!(f, "hard"),
            Difficulty::Impossible => write!(f, "impossible"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardError {
    InvalidSize { side_length: usize },
    OutOfRange { position: usize },
    CellOccupied { position: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidSize { side_length } => {
                write!(f, "Invalid board side length: {}", side_length)
            }
            BoardError::OutOfRange { position } => {
                write!(f, "Position {} is outside the board", position)
            }
            BoardError::CellOccupied { position } => {
                write!(f, "Cell {} is already marked", position)
            }
        }
    }
}

impl std::error::Error for BoardError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_of_each_mark() {
        assert_eq!(Mark::X.opponent(), Some(Mark::O));
        assert_eq!(Mark::O.opponent(), Some(Mark::X));
        assert_eq!(Mark::Empty.opponent(), None);
    }

    #[test]
    fn test_mark_display() {
        assert_eq!(Mark::X.to_string(), "X");
        assert_eq!(Mark::O.to_string(), "O");
        assert_eq!(Mark::Empty.to_string(), " ");
    }

    #[test]
    fn test_difficulty_from_name() {
        assert_eq!(Difficulty::from_name("easy"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_name("hard"), Some(Difficulty::Hard));
        assert_eq!(
            Difficulty::from_name("impossible"),
            Some(Difficulty::Impossible)
        );
        assert_eq!(Difficulty::from_name("medium"), None);
    }

    #[test]
    fn test_board_error_display() {
        let err = BoardError::CellOccupied { position: 4 };
        assert_eq!(err.to_string(), "Cell 4 is already marked");
    }
}
