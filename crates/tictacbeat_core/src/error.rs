//! Error types for the game core.

use derive_more::{Display, Error};
use tracing::instrument;

/// Beatmap loading error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Beatmap error: {} at {}:{}", message, file, line)]
pub struct BeatmapError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BeatmapError {
    /// Creates a new beatmap error with caller location tracking.
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

impl From<serde_json::Error> for BeatmapError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Malformed beatmap JSON: {}", err))
    }
}

impl From<std::io::Error> for BeatmapError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("Failed to read beatmap: {}", err))
    }
}

/// Failure reported by an audio collaborator.
#[derive(Debug, Clone, Display, Error)]
#[display("Audio error: {} at {}:{}", message, file, line)]
pub struct AudioError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl AudioError {
    /// Creates a new audio error with caller location tracking.
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

/// Rhythm engine misuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum RhythmError {
    /// Scoring was requested before the round's zero time was recorded.
    #[display("Rhythm engine has not been started")]
    NotStarted,
}

/// Error returned by [`GameSession`](crate::GameSession) operations.
///
/// A failed tick leaves the session in the state it was in, so the caller
/// may simply try again on the next tick.
#[derive(Debug, Clone, Display, Error)]
pub enum SessionError {
    /// The audio collaborator failed.
    #[display("{}", _0)]
    Audio(AudioError),
    /// The beat schedule could not be loaded.
    #[display("{}", _0)]
    Beatmap(BeatmapError),
    /// The rhythm engine was used out of order.
    #[display("{}", _0)]
    Rhythm(RhythmError),
}

impl From<AudioError> for SessionError {
    fn from(err: AudioError) -> Self {
        Self::Audio(err)
    }
}

impl From<BeatmapError> for SessionError {
    fn from(err: BeatmapError) -> Self {
        Self::Beatmap(err)
    }
}

impl From<RhythmError> for SessionError {
    fn from(err: RhythmError) -> Self {
        Self::Rhythm(err)
    }
}
