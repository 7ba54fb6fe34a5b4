//! Tic Tac Beat - terminal entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tictacbeat::{AppConfig, Cli, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)
        .and_then(|config| config.with_overrides(&cli))
        .context("Failed to load configuration")?;

    init_tracing(&config)?;
    info!(
        config = %cli.config.display(),
        tick_rate = config.tick_rate(),
        beatmap = ?config.beatmap(),
        "Starting Tic Tac Beat"
    );

    tui::run(config).await
}

/// Logs to a file so output never lands on the terminal UI.
fn init_tracing(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
