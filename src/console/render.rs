use crate::game::{Board, Cell, COLS, ROWS};

/// Header line numbering the columns 1..=7, aligned with [`render_row`].
pub fn column_header() -> String {
    (1..=COLS).map(|col| format!("  {col} ")).collect()
}

/// One board row, e.g. `| & |   | @ |   |   |   |   |`.
pub fn render_row(board: &Board, row: usize, empty_cell: char) -> String {
    let mut line = String::with_capacity(COLS * 4 + 1);
    for col in 0..COLS {
        let symbol = match board.get(row, col) {
            Cell::Empty => empty_cell,
            Cell::Chip(chip) => chip,
        };
        line.push_str("| ");
        line.push(symbol);
        line.push(' ');
    }
    line.push('|');
    line
}

/// Full board dump: header, then rows top to bottom, then a blank line.
pub fn render_board(board: &Board, empty_cell: char) -> String {
    let mut out = column_header();
    out.push('\n');
    for row in 0..ROWS {
        out.push_str(&render_row(board, row, empty_cell));
        out.push('\n');
    }
    out.push('\n');
    out
}
