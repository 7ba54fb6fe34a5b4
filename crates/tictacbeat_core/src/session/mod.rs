//! The game session: phase transitions, turn handling and scoring.

mod collaborators;
mod config;
mod game;
mod input;
mod state;

pub use collaborators::{AudioPlayer, Clock, InputSource, Renderer, SystemClock, TextRole};
pub use config::SessionConfig;
pub use game::{GameSession, TickOutcome};
pub use input::{KEY_BINDINGS, Key, QUIT_KEY, RESET_KEY, START_KEY};
pub use state::{GameMode, GameState, Outcome, PlayerType};
