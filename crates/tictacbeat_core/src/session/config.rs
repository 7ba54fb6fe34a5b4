//! Tunable session settings.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Settings for a [`GameSession`](super::GameSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seconds counted down before a round starts.
    #[serde(default = "default_countdown_secs")]
    countdown_secs: u32,

    /// Ticks a key must be held for the reset and quit commands.
    #[serde(default = "default_hold_ticks")]
    hold_ticks: u32,

    /// Points awarded for completing a line.
    #[serde(default = "default_win_bonus")]
    win_bonus: u32,
}

#[instrument]
fn default_countdown_secs() -> u32 {
    3
}

#[instrument]
fn default_hold_ticks() -> u32 {
    60
}

#[instrument]
fn default_win_bonus() -> u32 {
    250
}

impl SessionConfig {
    /// Creates a configuration.
    #[instrument]
    pub fn new(countdown_secs: u32, hold_ticks: u32, win_bonus: u32) -> Self {
        Self {
            countdown_secs,
            hold_ticks,
            win_bonus,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(
            default_countdown_secs(),
            default_hold_ticks(),
            default_win_bonus(),
        )
    }
}
