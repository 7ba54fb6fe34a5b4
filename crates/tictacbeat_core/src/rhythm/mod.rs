//! Rhythm mode: beat schedule, timing scores and the three-symbol limit.
//!
//! Each symbol keeps at most three placements on the board. The window
//! tracks the two newest; the third-newest waits in a pending slot, is
//! flagged for the UI, and is cleared when the symbol places again.

mod beatmap;
mod engine;
mod window;

pub use beatmap::{Beat, Beatmap, BeatmapSource};
pub use engine::{BEAT_PULSE, GOOD_WINDOW, Judgement, OK_WINDOW, PERFECT_WINDOW, RhythmEngine};
pub use window::{MoveWindow, WindowUpdate};
