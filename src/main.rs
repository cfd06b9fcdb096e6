use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::config::AppConfig;
use connect_four::logging;
use connect_four::ui::App;

/// Play Connect Four against a friend in the terminal.
#[derive(Parser)]
#[command(name = "connect_four", about = "Hot-seat Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override who moves first: 1 or 2
    #[arg(long)]
    starting_player: Option<u8>,

    /// Override player 1's color (name like "red" or hex like "#ff0000")
    #[arg(long)]
    player1_color: Option<String>,

    /// Override player 2's color
    #[arg(long)]
    player2_color: Option<String>,

    /// Print a config file with all default values and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(starting_player) = cli.starting_player {
        config.game.starting_player = starting_player;
    }
    if let Some(color) = cli.player1_color {
        config.game.player1_color = color;
    }
    if let Some(color) = cli.player2_color {
        config.game.player2_color = color;
    }
    config.validate().context("invalid settings")?;

    logging::init(&config.logging).context("setting up logging")?;

    let mut app = App::new(config.new_game());
    run(&mut app).context("terminal UI failed")?;

    let state = app.game_state();
    tracing::info!(
        player1_wins = state.player1_wins(),
        player2_wins = state.player2_wins(),
        ties = state.ties(),
        "session ended"
    );
    Ok(())
}

fn run(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
