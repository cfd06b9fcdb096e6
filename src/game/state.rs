use std::sync::Arc;

use tracing::{debug, info, warn};

use super::board::{Board, CELL_COUNT, COLS};
use super::player::Player;
use super::win_lines::{self, WinLine, WinLineCatalog, LINE_LEN};
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WinState {
    NoWinner,
    Player1Wins,
    Player2Wins,
    Tie,
}

impl WinState {
    pub fn from_winner(player: Player) -> Self {
        match player {
            Player::One => WinState::Player1Wins,
            Player::Two => WinState::Player2Wins,
        }
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            WinState::Player1Wins => Some(Player::One),
            WinState::Player2Wins => Some(Player::Two),
            WinState::NoWinner | WinState::Tie => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self != WinState::NoWinner
    }
}

/// One game of Connect Four plus the running tally across games.
///
/// Whose turn it is comes from the number of pieces on the board and the
/// starting player; it is never stored. Score counters belong to the caller:
/// the engine reports outcomes but never increments them.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    catalog: Arc<WinLineCatalog>,
    starting_player: Player,
    winning_pieces: Option<WinLine>,
    player1_color: String,
    player2_color: String,
    player1_wins: u32,
    player2_wins: u32,
    ties: u32,
}

impl GameState {
    /// Empty board, player 1 to start, zeroed counters, no colors.
    pub fn new() -> Self {
        Self::with_catalog(WinLineCatalog::shared())
    }

    pub fn with_catalog(catalog: Arc<WinLineCatalog>) -> Self {
        GameState {
            board: Board::new(),
            catalog,
            starting_player: Player::One,
            winning_pieces: None,
            player1_color: String::new(),
            player2_color: String::new(),
            player1_wins: 0,
            player2_wins: 0,
            ties: 0,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn catalog(&self) -> &WinLineCatalog {
        &self.catalog
    }

    /// Pieces played so far in this game
    pub fn current_turn(&self) -> usize {
        self.board.occupied()
    }

    /// The player about to move
    pub fn player_turn(&self) -> Player {
        let offset = self.current_turn() + self.starting_player.number() as usize - 1;
        if offset % 2 == 0 {
            Player::One
        } else {
            Player::Two
        }
    }

    pub fn starting_player(&self) -> Player {
        self.starting_player
    }

    /// Set the starting player by number. 1 means player one; any other
    /// value means player two.
    pub fn set_starting_player(&mut self, number: u8) {
        self.starting_player = Player::from_number(number);
    }

    pub fn alternate_starting_player(&mut self) {
        self.starting_player = self.starting_player.other();
        debug!(starting = self.starting_player.number(), "starting player alternated");
    }

    /// Evaluate the board and record the winning line, if any.
    pub fn check_for_win(&mut self) -> WinState {
        let (state, line) = self.evaluate();
        if let Some(line) = line {
            self.winning_pieces = Some(line);
        }
        state
    }

    /// Same as [`check_for_win`](Self::check_for_win) without recording anything.
    pub fn evaluate(&self) -> (WinState, Option<WinLine>) {
        win_lines::check_for_win(&self.board, &self.catalog)
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.evaluate().0.is_terminal()
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the current player's piece into `column` (0-indexed).
    ///
    /// Returns the 1-indexed row the piece landed in, counted from the top:
    /// a piece on the bottom row returns 6.
    pub fn play_piece(&mut self, column: usize) -> Result<usize, GameError> {
        if self.check_for_win().is_terminal() {
            warn!(column, "move rejected: game is over");
            return Err(GameError::GameOver);
        }

        if column >= COLS {
            warn!(column, "move rejected: no such column");
            return Err(GameError::InvalidColumn { column });
        }

        let Some(landing) = self.board.landing_index(column) else {
            warn!(column, "move rejected: column is full");
            return Err(GameError::ColumnFull { column });
        };

        let player = self.player_turn();
        self.board.set(landing, player.to_cell());

        let row = landing / COLS + 1;
        debug!(
            player = player.number(),
            column,
            row,
            turn = self.current_turn(),
            "piece played"
        );

        let (state, line) = self.evaluate();
        if state.is_terminal() {
            info!(?state, line = ?line.map(|l| l.indices()), "game over");
        }

        Ok(row)
    }

    /// Clear the board and the winning line. Starting player, colors and
    /// counters are kept.
    pub fn reset_board(&mut self) {
        self.board.clear();
        self.winning_pieces = None;
        debug!("board reset");
    }

    /// Last recorded winning line
    pub fn winning_pieces(&self) -> Option<WinLine> {
        self.winning_pieces
    }

    /// Record a winning line. Exactly four in-range board indices are required.
    pub fn set_winning_pieces(&mut self, pieces: &[usize]) -> Result<(), GameError> {
        let indices: [usize; LINE_LEN] = pieces
            .try_into()
            .map_err(|_| GameError::InvalidWinningPieces { len: pieces.len() })?;

        if let Some(&index) = indices.iter().find(|&&index| index >= CELL_COUNT) {
            return Err(GameError::WinningPieceOutOfRange { index });
        }

        self.winning_pieces = Some(WinLine::new(indices));
        Ok(())
    }

    pub fn player1_color(&self) -> &str {
        &self.player1_color
    }

    pub fn set_player1_color(&mut self, color: impl Into<String>) {
        self.player1_color = color.into();
    }

    pub fn player2_color(&self) -> &str {
        &self.player2_color
    }

    pub fn set_player2_color(&mut self, color: impl Into<String>) {
        self.player2_color = color.into();
    }

    pub fn player1_wins(&self) -> u32 {
        self.player1_wins
    }

    pub fn set_player1_wins(&mut self, wins: u32) {
        self.player1_wins = wins;
    }

    pub fn player2_wins(&self) -> u32 {
        self.player2_wins
    }

    pub fn set_player2_wins(&mut self, wins: u32) {
        self.player2_wins = wins;
    }

    pub fn ties(&self) -> u32 {
        self.ties
    }

    pub fn set_ties(&mut self, ties: u32) {
        self.ties = ties;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, ROWS};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn play_all(state: &mut GameState, columns: &[usize]) {
        for &col in columns {
            state.play_piece(col).unwrap();
        }
    }

    /// Column order of a full game that ends with no four-in-a-row.
    const TIE_GAME: [usize; CELL_COUNT] = [
        4, 3, 6, 0, 1, 4, 5, 5, 1, 1, 5, 0, 1, 6, 0, 1, 5, 5, 1, 0, 4, 6, 3, 2, 6, 6, 0, 4,
        6, 5, 2, 0, 4, 2, 4, 2, 2, 2, 3, 3, 3, 3,
    ];

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.player_turn(), Player::One);
        assert_eq!(state.starting_player(), Player::One);
        assert_eq!(state.current_turn(), 0);
        assert_eq!(state.winning_pieces(), None);
        assert_eq!(state.player1_color(), "");
        assert_eq!(state.player2_color(), "");
        assert_eq!((state.player1_wins(), state.player2_wins(), state.ties()), (0, 0, 0));
        assert!(!state.is_terminal());
        assert_eq!(state.legal_columns().len(), 7);
    }

    #[test]
    fn test_play_piece_lands_on_bottom_row() {
        let mut state = GameState::new();
        assert_eq!(state.play_piece(3).unwrap(), 6);
        assert_eq!(state.board().at(5, 3), Cell::Player1);
        assert_eq!(state.player_turn(), Player::Two);

        assert_eq!(state.play_piece(3).unwrap(), 5);
        assert_eq!(state.board().at(4, 3), Cell::Player2);
    }

    #[test]
    fn test_column_fills_to_top_row() {
        let mut state = GameState::new();
        let rows: Vec<usize> = (0..ROWS).map(|_| state.play_piece(2).unwrap()).collect();
        assert_eq!(rows, vec![6, 5, 4, 3, 2, 1]);

        let before = *state.board();
        assert_eq!(state.play_piece(2), Err(GameError::ColumnFull { column: 2 }));
        assert_eq!(*state.board(), before);
        assert_eq!(state.current_turn(), ROWS);
    }

    #[test]
    fn test_invalid_column() {
        let mut state = GameState::new();
        let err = state.play_piece(7).unwrap_err();
        assert_eq!(err, GameError::InvalidColumn { column: 7 });
        assert!(err.is_invalid_argument());
        assert_eq!(state.current_turn(), 0);
    }

    #[test]
    fn test_vertical_win_in_column_zero() {
        let mut state = GameState::new();
        play_all(&mut state, &[0, 1, 0, 1, 0, 1]);
        assert_eq!(state.check_for_win(), WinState::NoWinner);

        state.play_piece(0).unwrap();
        assert_eq!(state.check_for_win(), WinState::Player1Wins);
        assert_eq!(
            state.winning_pieces().map(|line| line.indices()),
            Some([14, 21, 28, 35])
        );
    }

    #[test]
    fn test_horizontal_win_for_player_two() {
        let mut state = GameState::new();
        // Player 1 stacks harmlessly; player 2 builds along the bottom row.
        play_all(&mut state, &[6, 0, 6, 1, 5, 2, 5, 3]);
        assert_eq!(state.check_for_win(), WinState::Player2Wins);
        assert_eq!(
            state.winning_pieces().map(|line| line.indices()),
            Some([35, 36, 37, 38])
        );
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut state = GameState::new();
        play_all(&mut state, &[0, 1, 0, 1, 0, 1, 0]);

        let before = *state.board();
        assert_eq!(state.play_piece(4), Err(GameError::GameOver));
        assert_eq!(*state.board(), before);
        assert!(state.legal_columns().is_empty());
        // The rejected move still records the line that ended the game.
        assert!(state.winning_pieces().is_some());
    }

    #[test]
    fn test_game_over_checked_before_column_bounds() {
        let mut state = GameState::new();
        play_all(&mut state, &[0, 1, 0, 1, 0, 1, 0]);
        assert_eq!(state.play_piece(99), Err(GameError::GameOver));
    }

    #[test]
    fn test_no_winner_below_seven_pieces() {
        let mut state = GameState::new();
        for (moves, &col) in [0, 0, 1, 1, 2, 2].iter().enumerate() {
            assert_eq!(state.check_for_win(), WinState::NoWinner, "after {} moves", moves);
            state.play_piece(col).unwrap();
        }
        assert_eq!(state.check_for_win(), WinState::NoWinner);
    }

    #[test]
    fn test_tie() {
        let mut state = GameState::new();
        for &col in &TIE_GAME {
            assert_eq!(state.check_for_win(), WinState::NoWinner, "{}", state.board());
            state.play_piece(col).unwrap();
        }

        assert!(state.board().is_full());
        assert_eq!(state.check_for_win(), WinState::Tie);
        assert_eq!(state.winning_pieces(), None);
        assert_eq!(state.play_piece(0), Err(GameError::GameOver));
    }

    #[test]
    fn test_engine_never_touches_counters() {
        let mut state = GameState::new();
        play_all(&mut state, &[0, 1, 0, 1, 0, 1, 0]);
        assert_eq!(state.check_for_win(), WinState::Player1Wins);
        assert_eq!((state.player1_wins(), state.player2_wins(), state.ties()), (0, 0, 0));
    }

    #[test]
    fn test_reset_keeps_scores_and_settings() {
        let mut state = GameState::new();
        state.set_player1_color("red");
        state.set_player2_color("#ffcc00");
        state.set_player1_wins(3);
        state.set_player2_wins(2);
        state.set_ties(1);
        state.set_starting_player(2);

        play_all(&mut state, &[0, 1, 0, 1, 0, 1, 0]);
        assert_eq!(state.check_for_win(), WinState::Player2Wins);

        state.reset_board();
        assert_eq!(*state.board(), Board::new());
        assert_eq!(state.current_turn(), 0);
        assert_eq!(state.winning_pieces(), None);
        assert_eq!(state.player1_color(), "red");
        assert_eq!(state.player2_color(), "#ffcc00");
        assert_eq!((state.player1_wins(), state.player2_wins(), state.ties()), (3, 2, 1));
        assert_eq!(state.starting_player(), Player::Two);
        assert_eq!(state.player_turn(), Player::Two);
    }

    #[test]
    fn test_alternate_starting_player() {
        let mut state = GameState::new();
        play_all(&mut state, &[3, 4, 3]);
        let before = *state.board();

        state.alternate_starting_player();
        assert_eq!(state.starting_player(), Player::Two);
        assert_eq!(*state.board(), before);

        state.alternate_starting_player();
        assert_eq!(state.starting_player(), Player::One);
        assert_eq!(*state.board(), before);
    }

    #[test]
    fn test_alternating_mid_game_flips_turn() {
        let mut state = GameState::new();
        play_all(&mut state, &[3]);
        assert_eq!(state.player_turn(), Player::Two);
        state.alternate_starting_player();
        assert_eq!(state.player_turn(), Player::One);
    }

    #[test]
    fn test_set_starting_player_normalizes() {
        let mut state = GameState::new();
        state.set_starting_player(2);
        assert_eq!(state.starting_player(), Player::Two);
        state.set_starting_player(1);
        assert_eq!(state.starting_player(), Player::One);
        state.set_starting_player(0);
        assert_eq!(state.starting_player(), Player::Two);
        state.set_starting_player(42);
        assert_eq!(state.starting_player(), Player::Two);
    }

    #[test]
    fn test_player_two_starts() {
        let mut state = GameState::new();
        state.set_starting_player(2);
        assert_eq!(state.player_turn(), Player::Two);
        state.play_piece(0).unwrap();
        assert_eq!(state.board().at(5, 0), Cell::Player2);
        assert_eq!(state.player_turn(), Player::One);
    }

    #[test]
    fn test_set_winning_pieces() {
        let mut state = GameState::new();
        assert_eq!(
            state.set_winning_pieces(&[1, 2, 3]),
            Err(GameError::InvalidWinningPieces { len: 3 })
        );
        assert_eq!(
            state.set_winning_pieces(&[]),
            Err(GameError::InvalidWinningPieces { len: 0 })
        );
        assert_eq!(
            state.set_winning_pieces(&[1, 2, 3, 4, 5]),
            Err(GameError::InvalidWinningPieces { len: 5 })
        );
        assert_eq!(
            state.set_winning_pieces(&[40, 41, 42, 43]),
            Err(GameError::WinningPieceOutOfRange { index: 42 })
        );
        assert_eq!(state.winning_pieces(), None);

        state.set_winning_pieces(&[9, 16, 23, 30]).unwrap();
        assert_eq!(
            state.winning_pieces().map(|line| line.indices()),
            Some([9, 16, 23, 30])
        );
    }

    #[test]
    fn test_with_shared_catalog() {
        let catalog = WinLineCatalog::shared();
        let a = GameState::with_catalog(Arc::clone(&catalog));
        let b = GameState::new();
        assert!(std::ptr::eq(a.catalog(), b.catalog()));
        assert_eq!(a.catalog().len(), 69);
    }

    #[test]
    fn test_random_playouts_keep_invariants() {
        let mut rng = StdRng::seed_from_u64(0xC4);

        for game in 0..200 {
            let mut state = GameState::new();
            state.set_starting_player(if game % 2 == 0 { 1 } else { 2 });
            let mut expected = state.starting_player();
            let mut moves = 0;

            while !state.check_for_win().is_terminal() {
                assert_eq!(state.current_turn(), moves);
                assert_eq!(state.player_turn(), expected);

                let legal = state.legal_columns();
                let col = legal[rng.random_range(0..legal.len())];
                let target = state.board().landing_index(col).unwrap();

                let row = state.play_piece(col).unwrap();
                assert_eq!(row, target / COLS + 1);
                assert_eq!(state.board().get(target), expected.to_cell());
                // Gravity: the cell below is occupied or this is the bottom row.
                if target + COLS < CELL_COUNT {
                    assert!(!state.board().get(target + COLS).is_empty());
                }

                moves += 1;
                expected = expected.other();
            }

            match state.check_for_win() {
                WinState::Tie => assert!(state.board().is_full()),
                outcome => {
                    let line = state.winning_pieces().unwrap();
                    assert_eq!(line.owner(state.board()), outcome.winner());
                }
            }
        }
    }
}
