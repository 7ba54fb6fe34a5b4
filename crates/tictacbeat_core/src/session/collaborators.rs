//! Interfaces to the services the session drives but does not implement.
//!
//! Drawing, audio output, input devices and time all live outside the core.
//! Front ends implement these traits and hand them to
//! [`GameSession`](super::GameSession): clock and audio at construction,
//! input and renderer on every tick and frame.

use super::input::Key;
use crate::board::{Coord, Symbol};
use crate::error::AudioError;
use std::time::{Duration, Instant};

/// Source of monotonic time.
pub trait Clock {
    /// Current instant.
    fn now(&self) -> Instant;

    /// Time elapsed since `earlier`, zero if `earlier` is in the future.
    fn elapsed_since(&self, earlier: Instant) -> Duration {
        self.now().saturating_duration_since(earlier)
    }
}

/// [`Clock`] backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// The music track.
pub trait AudioPlayer {
    /// Starts or resumes playback.
    fn play(&mut self) -> Result<(), AudioError>;

    /// Stops playback for good.
    fn stop(&mut self) -> Result<(), AudioError>;

    /// Rewinds to the start and pauses.
    fn restart(&mut self) -> Result<(), AudioError>;
}

/// Per-tick view of the input devices.
pub trait InputSource {
    /// True on the first tick `key` is held.
    fn is_just_pressed(&self, key: Key) -> bool;

    /// Number of consecutive ticks `key` has been held, 0 if released.
    fn press_duration(&self, key: Key) -> u32;

    /// Board cell under a pointer press made this tick.
    ///
    /// The front end resolves screen positions to cells and only reports
    /// presses that land on the board.
    fn pointer_cell(&self) -> Option<Coord>;
}

/// What a piece of text is for; front ends choose placement and style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextRole {
    /// Game title.
    Title,
    /// Section heading.
    Heading,
    /// Selectable menu entry.
    MenuItem {
        /// True for the entry currently chosen.
        selected: bool,
    },
    /// Instruction to the player.
    Prompt,
    /// Large countdown digit.
    Countdown,
    /// Round and turn information.
    Status,
    /// Score line.
    Score,
    /// Timing judgement of the last rhythm placement.
    Judgement,
    /// Game-over banner.
    Banner,
    /// Secondary help text.
    Hint,
}

/// Draw commands issued once per frame.
pub trait Renderer {
    /// Draws the empty grid.
    fn draw_board(&mut self);

    /// Draws `symbol` in the cell at `at`; `highlighted` marks it as next to go.
    fn draw_symbol(&mut self, at: Coord, symbol: Symbol, highlighted: bool);

    /// Draws a piece of text.
    fn draw_text(&mut self, role: TextRole, text: &str);

    /// Draws the beat indicator, lit while `on_beat`.
    fn draw_beat_circle(&mut self, on_beat: bool);

    /// Strikes through the three cells of a winning line.
    fn draw_winning_line(&mut self, cells: [Coord; 3]);
}
