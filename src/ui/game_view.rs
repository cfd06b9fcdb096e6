use std::str::FromStr;

use crate::game::{Board, GameState, Player, WinLine, WinState, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(11),  // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, chunks[0]);
    render_board(frame, game_state, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

/// Terminal color for a player, parsed from the configured color string.
/// Unparseable or empty strings fall back to red / yellow.
fn player_color(game_state: &GameState, player: Player) -> Color {
    let (configured, fallback) = match player {
        Player::One => (game_state.player1_color(), Color::Red),
        Player::Two => (game_state.player2_color(), Color::Yellow),
    };
    Color::from_str(configured).unwrap_or(fallback)
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let (outcome, _) = game_state.evaluate();
    let (status, color) = match outcome {
        WinState::NoWinner => {
            let player = game_state.player_turn();
            (
                format!("Current Player: {}", player.name()),
                player_color(game_state, player),
            )
        }
        WinState::Tie => ("Game Over  |  Tie".to_string(), Color::White),
        WinState::Player1Wins | WinState::Player2Wins => {
            let player = outcome.winner().unwrap_or(Player::One);
            (
                format!("Game Over  |  {} wins", player.name()),
                player_color(game_state, player),
            )
        }
    };

    let score = format!(
        "{} {}  |  {} {}  |  Ties {}",
        Player::One.name(),
        game_state.player1_wins(),
        Player::Two.name(),
        game_state.player2_wins(),
        game_state.ties()
    );

    let header = Paragraph::new(vec![
        Line::styled(status, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Line::from(score),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Connect Four"),
    );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, game_state: &GameState, selected_column: usize, area: Rect) {
    let board: &Board = game_state.board();
    let winning: Option<WinLine> = game_state.winning_pieces();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔══════════════════════╗"));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            let index = Board::index(row, col);
            let span = match Player::from_cell(board.get(index)) {
                None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Some(player) => {
                    let mut style = Style::default().fg(player_color(game_state, player));
                    if winning.is_some_and(|line| line.contains(index)) {
                        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                    }
                    Span::styled(" ● ", style)
                }
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚══════════════════════╝"));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == selected_column {
            let marker = if board.is_column_full(col) { " x " } else { " ▲ " };
            indicator_line.push(Span::styled(marker, Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::from(
        "←/→: Move  |  Enter or 1-7: Drop  |  N: Next game  |  Q: Quit",
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Controls"),
    );

    frame.render_widget(controls, area);
}
