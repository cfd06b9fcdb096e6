use std::path::PathBuf;

/// Errors returned by the rules engine. All of them mean the caller asked for
/// something illegal; nothing on the board changes when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("column {column} is out of range (expected 0..=6)")]
    InvalidColumn { column: usize },

    #[error("winning pieces must be exactly 4 board indices, got {len}")]
    InvalidWinningPieces { len: usize },

    #[error("winning piece index {index} is off the board")]
    WinningPieceOutOfRange { index: usize },

    #[error("game is over")]
    GameOver,

    #[error("column {column} is full")]
    ColumnFull { column: usize },
}

impl GameError {
    /// Whether the error came from a malformed argument rather than the game
    /// state.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            GameError::InvalidColumn { .. }
                | GameError::InvalidWinningPieces { .. }
                | GameError::WinningPieceOutOfRange { .. }
        )
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },
}
