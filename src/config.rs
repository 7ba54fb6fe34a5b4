//! Application configuration loaded from TOML.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictacbeat_core::{BeatmapSource, SessionConfig};
use tracing::{debug, info, instrument};

/// Settings for the terminal front end and the game session.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Game ticks per second.
    #[serde(default = "default_tick_rate")]
    tick_rate: u32,

    /// File the log is written to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// JSON beatmap replacing the built-in one.
    #[serde(default)]
    beatmap: Option<PathBuf>,

    /// Ring the terminal bell on each beat while a round plays.
    #[serde(default = "default_click_bell")]
    click_bell: bool,

    /// Session tuning.
    #[serde(default)]
    session: SessionConfig,
}

#[instrument]
fn default_tick_rate() -> u32 {
    60
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("tictacbeat.log")
}

#[instrument]
fn default_log_filter() -> String {
    "info".to_string()
}

#[instrument]
fn default_click_bell() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_rate: default_tick_rate(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            beatmap: None,
            click_bell: default_click_bell(),
            session: SessionConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(tick_rate = config.tick_rate, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line flags on top of the file settings.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, cli: &Cli) -> Result<Self, ConfigError> {
        if let Some(path) = &cli.beatmap {
            self.beatmap = Some(path.clone());
        }
        if let Some(tick_rate) = cli.tick_rate {
            self.tick_rate = tick_rate;
        }
        if cli.no_bell {
            self.click_bell = false;
        }
        self.validate()?;
        Ok(self)
    }

    /// Where the session reads its beat schedule from.
    pub fn beatmap_source(&self) -> BeatmapSource {
        self.beatmap.clone().into()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate == 0 {
            return Err(ConfigError::new("tick_rate must be at least 1"));
        }
        if *self.session.hold_ticks() == 0 {
            return Err(ConfigError::new("session.hold_ticks must be at least 1"));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
