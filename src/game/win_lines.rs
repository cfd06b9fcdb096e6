use std::sync::{Arc, LazyLock};

use super::board::{Board, Cell, COLS, ROWS};
use super::player::Player;
use super::state::WinState;

/// Pieces needed in a row to win.
pub const LINE_LEN: usize = 4;

/// Fewest pieces on the board that can contain a completed line.
pub const MIN_PIECES_FOR_WIN: usize = 2 * LINE_LEN - 1;

static SHARED: LazyLock<Arc<WinLineCatalog>> = LazyLock::new(|| Arc::new(WinLineCatalog::compute()));

/// Orientation of a [`WinLine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Bottom-left to top-right, `/`
    DiagonalUp,
    /// Top-left to bottom-right, `\`
    DiagonalDown,
}

/// Four board indices that win the game when all hold the same player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinLine([usize; LINE_LEN]);

impl WinLine {
    pub fn new(indices: [usize; LINE_LEN]) -> Self {
        WinLine(indices)
    }

    pub fn indices(&self) -> [usize; LINE_LEN] {
        self.0
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// Classify the line by the step between its first two cells.
    pub fn direction(&self) -> Direction {
        let (r0, c0) = (self.0[0] / COLS, self.0[0] % COLS);
        let (r1, c1) = (self.0[1] / COLS, self.0[1] % COLS);
        match (r1 as isize - r0 as isize, c1 as isize - c0 as isize) {
            (0, _) => Direction::Horizontal,
            (_, 0) => Direction::Vertical,
            (dr, dc) if dr == -dc => Direction::DiagonalUp,
            _ => Direction::DiagonalDown,
        }
    }

    /// The player owning all four cells, if any.
    pub fn owner(&self, board: &Board) -> Option<Player> {
        let first = board.get(self.0[0]);
        if first == Cell::Empty {
            return None;
        }
        if self.0[1..].iter().all(|&index| board.get(index) == first) {
            Player::from_cell(first)
        } else {
            None
        }
    }
}

impl From<WinLine> for [usize; LINE_LEN] {
    fn from(line: WinLine) -> Self {
        line.0
    }
}

/// Every four-in-a-row on the 6x7 board, in a fixed order: horizontal runs,
/// then vertical, then `/` diagonals, then `\` diagonals.
///
/// When more than one line is complete, [`check_for_win`] reports the first
/// one in this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinLineCatalog {
    lines: Vec<WinLine>,
}

impl WinLineCatalog {
    /// Enumerate all winning lines for the board geometry.
    pub fn compute() -> Self {
        let mut lines = Vec::with_capacity(69);

        for row in 0..ROWS {
            for col in 0..=COLS - LINE_LEN {
                let start = Board::index(row, col);
                lines.push(WinLine([start, start + 1, start + 2, start + 3]));
            }
        }

        for col in 0..COLS {
            for row in 0..=ROWS - LINE_LEN {
                let start = Board::index(row, col);
                lines.push(WinLine([start, start + COLS, start + 2 * COLS, start + 3 * COLS]));
            }
        }

        // "/" runs are anchored at their bottom-left cell and climb one
        // column right per row.
        let up = COLS - 1;
        for col in 0..=COLS - LINE_LEN {
            for row in LINE_LEN - 1..ROWS {
                let start = Board::index(row, col);
                lines.push(WinLine([start, start - up, start - 2 * up, start - 3 * up]));
            }
        }

        let down = COLS + 1;
        for col in 0..=COLS - LINE_LEN {
            for row in 0..=ROWS - LINE_LEN {
                let start = Board::index(row, col);
                lines.push(WinLine([start, start + down, start + 2 * down, start + 3 * down]));
            }
        }

        WinLineCatalog { lines }
    }

    /// Process-wide catalog, computed on first use.
    pub fn shared() -> Arc<WinLineCatalog> {
        Arc::clone(&*SHARED)
    }

    pub fn lines(&self) -> &[WinLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WinLine> {
        self.lines.iter()
    }

    /// Lines passing through a cell.
    pub fn lines_through(&self, index: usize) -> impl Iterator<Item = &WinLine> {
        self.lines.iter().filter(move |line| line.contains(index))
    }
}

/// Evaluate a board against a catalog.
///
/// Returns the outcome and, for a win, the first completed line in catalog
/// order.
pub fn check_for_win(board: &Board, catalog: &WinLineCatalog) -> (WinState, Option<WinLine>) {
    let occupied = board.occupied();
    if occupied < MIN_PIECES_FOR_WIN {
        return (WinState::NoWinner, None);
    }

    for line in catalog.iter() {
        if let Some(player) = line.owner(board) {
            return (WinState::from_winner(player), Some(*line));
        }
    }

    if occupied == board.cells().len() {
        (WinState::Tie, None)
    } else {
        (WinState::NoWinner, None)
    }
}
