use crate::error::GameError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Chips needed on either side of the last placement to complete four in a row.
const RUN_NEEDED: usize = 3;

/// Row/column steps for the four scan axes: horizontal, vertical,
/// diagonal down-right, diagonal down-left.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Chip(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Drop a chip in a column, returns the row where it landed
    pub fn drop_chip(&mut self, col: usize, chip: char) -> Result<usize, GameError> {
        if col >= COLS {
            return Err(GameError::OutOfRange(col));
        }

        // Bottom row first
        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col] == Cell::Empty)
            .ok_or(GameError::ColumnFull(col))?;

        self.cells[row][col] = Cell::Chip(chip);
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Check if the chip at (row, col) completes four in a row along any axis.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let Cell::Chip(chip) = self.get(row, col) else {
            return false;
        };

        AXES.iter().any(|&(dr, dc)| {
            let run = self.count_run(row, col, dr, dc, chip)
                + self.count_run(row, col, -dr, -dc, chip);
            run >= RUN_NEEDED
        })
    }

    /// Count matching chips walking away from (row, col), at most
    /// `RUN_NEEDED` steps. Stops at the first gap or the board edge.
    fn count_run(&self, row: usize, col: usize, dr: isize, dc: isize, chip: char) -> usize {
        (1..=RUN_NEEDED as isize)
            .map_while(|step| {
                let r = row as isize + dr * step;
                let c = col as isize + dc * step;
                self.cell_at(r, c).filter(|&cell| cell == Cell::Chip(chip))
            })
            .count()
    }

    fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.cells.get(row)?.get(col).copied()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
