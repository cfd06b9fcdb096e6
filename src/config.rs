use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::ConfigError;
use crate::game::GameState;

/// Per-game settings handed to the engine.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Display color for player 1. Opaque to the engine.
    pub player1_color: String,
    /// Display color for player 2. Opaque to the engine.
    pub player2_color: String,
    /// Who moves first in the first game: 1 or 2.
    pub starting_player: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            player1_color: "red".to_string(),
            player2_color: "yellow".to_string(),
            starting_player: 1,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter level; `RUST_LOG` takes precedence when set.
    pub level: String,
    /// Log destination. Logging is disabled when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !matches!(self.game.starting_player, 1 | 2) {
            return Err(ConfigError::Validation(
                "game.starting_player must be 1 or 2".into(),
            ));
        }
        if tracing::Level::from_str(&self.logging.level).is_err() {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not one of trace, debug, info, warn, error",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// A fresh game carrying the configured colors and starting player.
    pub fn new_game(&self) -> GameState {
        let mut state = GameState::new();
        state.set_player1_color(self.game.player1_color.as_str());
        state.set_player2_color(self.game.player2_color.as_str());
        state.set_starting_player(self.game.starting_player);
        state
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
