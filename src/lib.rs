//! Tic Tac Beat terminal front end.
//!
//! Wires the [`tictacbeat_core`] game session to a ratatui/crossterm
//! terminal: keyboard and mouse input, rendering, and a click track that
//! rings the terminal bell on each beat.
//!
//! # Architecture
//!
//! - **CLI**: command-line flags ([`Cli`])
//! - **Config**: TOML settings with defaults ([`AppConfig`])
//! - **TUI**: event loop, input tracking, rendering and the click track

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
pub mod tui;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};
