//! Core Connect Four rules: board representation, players, the precomputed
//! win-line catalog, and the game state that ties them together.

mod board;
mod player;
mod state;
mod win_lines;

pub use board::{Board, Cell, CELL_COUNT, COLS, ROWS};
pub use player::Player;
pub use state::{GameState, WinState};
pub use win_lines::{
    check_for_win, Direction, WinLine, WinLineCatalog, LINE_LEN, MIN_PIECES_FOR_WIN,
};
