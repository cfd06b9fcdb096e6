use crate::error::GameError;
use crate::game::{GameState, WinState, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::info;

const CENTER_COLUMN: usize = COLS / 2;

pub struct App {
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(game_state: GameState) -> Self {
        App {
            game_state,
            selected_column: CENTER_COLUMN,
            should_quit: false,
            message: None,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            if let Err(e) = terminal.draw(|f| self.render(f)) {
                return Err(e.into());
            }

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='7') => {
                self.selected_column = c as usize - '1' as usize;
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char('n') => {
                self.next_game();
            }
            _ => {}
        }
    }

    /// Drop the current player's piece and score the game if it just ended
    fn drop_piece(&mut self, column: usize) {
        match self.game_state.play_piece(column) {
            Ok(_) => {
                let outcome = self.game_state.check_for_win();
                if outcome.is_terminal() {
                    self.record_outcome(outcome);
                }
            }
            Err(GameError::GameOver) => {
                self.message = Some("Game over! Press 'n' for the next game.".to_string());
            }
            Err(GameError::ColumnFull { column }) => {
                self.message = Some(format!("Column {} is full!", column + 1));
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    /// Bump the counter matching a finished game
    fn record_outcome(&mut self, outcome: WinState) {
        let state = &mut self.game_state;
        match outcome {
            WinState::Player1Wins => state.set_player1_wins(state.player1_wins() + 1),
            WinState::Player2Wins => state.set_player2_wins(state.player2_wins() + 1),
            WinState::Tie => state.set_ties(state.ties() + 1),
            WinState::NoWinner => return,
        }

        info!(
            ?outcome,
            player1_wins = state.player1_wins(),
            player2_wins = state.player2_wins(),
            ties = state.ties(),
            "game finished"
        );

        self.message = Some(match outcome.winner() {
            Some(player) => format!("{} wins! Press 'n' for the next game.", player.name()),
            None => "It's a tie! Press 'n' for the next game.".to_string(),
        });
    }

    /// Clear the board and hand the first move to the other player
    fn next_game(&mut self) {
        self.game_state.reset_board();
        self.game_state.alternate_starting_player();
        self.selected_column = CENTER_COLUMN;
        self.message = Some(format!(
            "New game! {} starts.",
            self.game_state.starting_player().name()
        ));
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game_state, self.selected_column, &self.message);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(GameState::new())
    }
}
