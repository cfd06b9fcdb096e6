//! # Connect Four
//!
//! The rules engine for two-player Connect Four, plus a hot-seat terminal
//! front end built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core rules: board, players, win-line catalog, game state
//! - [`ui`] — Terminal UI: game view and score keeping
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — File-backed tracing subscriber
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
