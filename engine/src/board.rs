use crate::lines::winning_lines;
use crate::types::{BoardError, Cell, GameOutcome, Mark};

pub const MIN_SIDE_LENGTH: usize = 3;

/// A square game board. Owns its cells exclusively; hypothetical boards
/// explored by search are produced through `clone_with_move` and share
/// no mutable state with the live board.
#[derive(Clone, Debug)]
pub struct Board {
    side_length: usize,
    cells: Vec<Cell>,
    winning_lines: Vec<Vec<usize>>,
}

impl Board {
    pub fn new(side_length: usize) -> Result<Self, BoardError> {
        if side_length < MIN_SIDE_LENGTH {
            return Err(BoardError::InvalidSize { side_length });
        }

        let cells = (1..=side_length * side_length).map(Cell::new).collect();

        Ok(Self {
            side_length,
            cells,
            winning_lines: winning_lines(side_length),
        })
    }

    pub fn side_length(&self) -> usize {
        self.side_length
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn winning_lines(&self) -> &[Vec<usize>] {
        &self.winning_lines
    }

    /// Clears every cell. The winning lines are a pure function of the
    /// side length and are left untouched.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
    }

    pub fn place(&mut self, position: usize, mark: Mark) -> Result<(), BoardError> {
        debug_assert!(!mark.is_empty());

        let cell = self
            .cells
            .get_mut(position.wrapping_sub(1))
            .ok_or(BoardError::OutOfRange { position })?;

        if cell.is_marked() {
            return Err(BoardError::CellOccupied { position });
        }

        cell.set_mark(mark);
        Ok(())
    }

    pub fn mark_at(&self, position: usize) -> Option<Mark> {
        self.cells.get(position.wrapping_sub(1)).map(Cell::mark)
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .filter(|cell| !cell.is_marked())
            .map(Cell::position)
            .collect()
    }

    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_marked()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Cell::is_marked)
    }

    pub fn is_empty(&self) -> bool {
        self.marked_count() == 0
    }

    /// The position at index `side_length² / 2` in construction order.
    /// The exact center for odd side lengths (5 on 3x3); middle-right of
    /// center for even ones (9 on 4x4).
    pub fn center_position(&self) -> usize {
        self.cells[self.cells.len() / 2].position()
    }

    /// Scans the winning lines in construction order (rows, columns,
    /// diagonals) and returns the mark of the first line holding exactly
    /// `run_length` identical non-empty marks and nothing else. The scan
    /// order is the tie-break for pathological simultaneous-win states.
    pub fn winner(&self, run_length: usize) -> Option<Mark> {
        for line in &self.winning_lines {
            if let Some(mark) = self.identical_marks(line, run_length) {
                return Some(mark);
            }
        }
        None
    }

    /// The first empty position in the first line where `mark` is one
    /// move away from completion, scanning lines in the same order as
    /// `winner`.
    pub fn find_threatened_position(&self, mark: Mark) -> Option<usize> {
        for line in &self.winning_lines {
            if self.identical_marks(line, self.side_length - 1) != Some(mark) {
                continue;
            }
            return line
                .iter()
                .find(|&&position| self.mark_at(position) == Some(Mark::Empty))
                .copied();
        }
        None
    }

    /// A fully independent copy with one extra mark. Never mutates the
    /// source; fails under the same conditions as `place`.
    pub fn clone_with_move(&self, position: usize, mark: Mark) -> Result<Board, BoardError> {
        let mut next = self.clone();
        next.place(position, mark)?;
        Ok(next)
    }

    pub fn outcome(&self) -> GameOutcome {
        if let Some(mark) = self.winner(self.side_length) {
            return GameOutcome::Win(mark);
        }
        if self.is_full() {
            return GameOutcome::Draw;
        }
        GameOutcome::InProgress
    }

    /// Some(mark) when the line contains exactly `count` cells of one
    /// non-empty mark and every other cell is empty.
    fn identical_marks(&self, line: &[usize], count: usize) -> Option<Mark> {
        let mut found: Option<Mark> = None;
        let mut marked = 0;

        for &position in line {
            let mark = self.cells[position - 1].mark();
            if mark.is_empty() {
                continue;
            }
            match found {
                None => found = Some(mark),
                Some(existing) if existing != mark => return None,
                Some(_) => {}
            }
            marked += 1;
        }

        if marked == count { found } else { None }
    }
}
