use std::fmt;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const CELL_COUNT: usize = ROWS * COLS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Player1,
    Player2,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Flat, row-major 6x7 grid. Index 0 is the top-left cell, index 41 the
/// bottom-right one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Flat index of a (row, col) position. Row 0 is the top.
    pub fn index(row: usize, col: usize) -> usize {
        row * COLS + col
    }

    /// Get the cell at a flat index
    pub fn get(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[Self::index(row, col)]
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Number of occupied cells, which is also the number of moves played.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        !self.cells[col].is_empty()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Flat index where a piece dropped into `col` would come to rest, or
    /// `None` if the column is full or out of range.
    pub fn landing_index(&self, col: usize) -> Option<usize> {
        if self.is_column_full(col) {
            return None;
        }

        // Walk down from the top and stop before the first occupied cell.
        let mut landing = col;
        for row in 1..ROWS {
            let below = Self::index(row, col);
            if !self.cells[below].is_empty() {
                break;
            }
            landing = below;
        }
        Some(landing)
    }

    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    pub(crate) fn clear(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            for col in 0..COLS {
                let symbol = match self.at(row, col) {
                    Cell::Empty => '.',
                    Cell::Player1 => '1',
                    Cell::Player2 => '2',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
