//! File-backed `tracing` setup for the terminal front end.
//!
//! Events go to a file so they never draw over the UI. With no file
//! configured no subscriber is installed and events are dropped.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::ConfigError;

/// Install the global subscriber. Returns `false` when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<bool, ConfigError> {
    let Some(path) = config.file.as_deref() else {
        return Ok(false);
    };

    let file = open_log_file(path)?;
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(true)
}

fn open_log_file(path: &Path) -> Result<File, ConfigError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| ConfigError::LogFile {
            path: path.to_path_buf(),
            source,
        })
}
