use tictactoe_engine::{Board, Cell};

const CELL_WIDTH: usize = 5;

/// Formats the board as text, row-major, one 3-line band per board row.
/// Each cell shows its 1-based position in the top layer and its mark in
/// the middle layer. Read-only over the board's cells.
pub fn render_board(board: &Board) -> String {
    let side_length = board.side_length();
    let mut out = String::new();

    for (index, row) in board.cells().chunks(side_length).enumerate() {
        if index > 0 {
            out.push_str(&border(side_length));
            out.push('\n');
        }
        out.push_str(&render_row(row));
    }

    out
}

fn render_row(cells: &[Cell]) -> String {
    let mut top = String::new();
    let mut middle = String::new();
    let mut bottom = String::new();

    for cell in cells {
        top.push_str(&format!("{:<width$}|", cell.position(), width = CELL_WIDTH));
        middle.push_str(&format!("  {}  |", cell.mark()));
        bottom.push_str(&format!("{}|", " ".repeat(CELL_WIDTH)));
    }

    for layer in [&mut top, &mut middle, &mut bottom] {
        layer.pop();
    }

    format!("{}\n{}\n{}\n", top, middle, bottom)
}

fn border(side_length: usize) -> String {
    format!("{}-----", "-----+".repeat(side_length - 1))
}
