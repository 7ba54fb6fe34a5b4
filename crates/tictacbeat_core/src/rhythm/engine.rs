//! Beat-timing scores and the per-symbol placement windows.

use super::beatmap::Beatmap;
use super::window::{MoveWindow, WindowUpdate};
use crate::board::{Coord, Symbol};
use crate::error::RhythmError;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Largest offset, in seconds, judged [`Judgement::Perfect`].
pub const PERFECT_WINDOW: f64 = 0.1;
/// Largest offset, in seconds, judged [`Judgement::Good`].
pub const GOOD_WINDOW: f64 = 0.25;
/// Largest offset, in seconds, judged [`Judgement::Ok`].
pub const OK_WINDOW: f64 = 0.4;
/// How long the beat indicator stays lit after each beat, in seconds.
pub const BEAT_PULSE: f64 = 0.5;

/// Timing tier of a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Judgement {
    /// Within 0.1 s of a beat.
    Perfect,
    /// Within 0.25 s of a beat.
    Good,
    /// Within 0.4 s of a beat.
    Ok,
    /// Further than that.
    Miss,
}

impl Judgement {
    /// Classifies an absolute offset from the nearest beat, tightest tier first.
    pub fn from_offset(offset: f64) -> Self {
        if offset < PERFECT_WINDOW {
            Self::Perfect
        } else if offset < GOOD_WINDOW {
            Self::Good
        } else if offset < OK_WINDOW {
            Self::Ok
        } else {
            Self::Miss
        }
    }

    /// Points awarded for this tier.
    pub fn points(self) -> u32 {
        match self {
            Self::Perfect => 300,
            Self::Good => 100,
            Self::Ok => 50,
            Self::Miss => 0,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Perfect => "Perfect!",
            Self::Good => "Good",
            Self::Ok => "Ok",
            Self::Miss => "Miss",
        }
    }
}

/// Rhythm-mode state for one round.
#[derive(Debug, Clone)]
pub struct RhythmEngine {
    windows: [MoveWindow; 2],
    beatmap: Beatmap,
    started_at: Option<Instant>,
}

impl RhythmEngine {
    /// Creates an engine over `beatmap` with empty windows.
    pub fn new(beatmap: Beatmap) -> Self {
        Self {
            windows: [MoveWindow::new(), MoveWindow::new()],
            beatmap,
            started_at: None,
        }
    }

    /// Records the round's zero time.
    #[instrument(skip(self, now))]
    pub fn start(&mut self, now: Instant) {
        info!("Rhythm round started");
        self.started_at = Some(now);
    }

    /// True once [`RhythmEngine::start`] has been called.
    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// The beat schedule.
    pub fn beatmap(&self) -> &Beatmap {
        &self.beatmap
    }

    /// The placement window of `symbol`.
    pub fn window(&self, symbol: Symbol) -> &MoveWindow {
        &self.windows[symbol.index()]
    }

    /// Seconds since the round's zero time.
    pub fn elapsed(&self, now: Instant) -> Result<f64, RhythmError> {
        let started_at = self.started_at.ok_or(RhythmError::NotStarted)?;
        Ok(now.saturating_duration_since(started_at).as_secs_f64())
    }

    /// Records a placement by `symbol` and reports what to clear and flag.
    ///
    /// Must be called before the new placement is written to the board.
    #[instrument(skip(self))]
    pub fn update(&mut self, symbol: Symbol, at: Coord) -> WindowUpdate {
        let update = self.windows[symbol.index()].record(at);
        debug!(remove = ?update.remove, highlight = ?update.highlight, "Window updated");
        update
    }

    /// Judges a placement made `elapsed` seconds into the round.
    pub fn judge(&self, elapsed: f64) -> Judgement {
        let beat = self.beatmap.closest(elapsed);
        Judgement::from_offset((beat.time - elapsed).abs())
    }

    /// Judges a placement made at `now`.
    ///
    /// Elapsed time is sampled once and used both to find the nearest beat
    /// and to measure the offset from it.
    #[instrument(skip(self, now))]
    pub fn judge_at(&self, now: Instant) -> Result<Judgement, RhythmError> {
        let elapsed = self.elapsed(now)?;
        let judgement = self.judge(elapsed);
        debug!(elapsed, ?judgement, "Placement judged");
        Ok(judgement)
    }

    /// Points for a placement made at `now`.
    pub fn calculate_score(&self, now: Instant) -> Result<u32, RhythmError> {
        self.judge_at(now).map(Judgement::points)
    }

    /// True within [`BEAT_PULSE`] seconds after any scheduled beat.
    pub fn is_on_beat(&self, elapsed: f64) -> bool {
        self.beatmap
            .beats()
            .iter()
            .any(|beat| elapsed >= beat.time && elapsed < beat.time + BEAT_PULSE)
    }

    /// True once no placement can score any more.
    pub fn is_finished(&self, elapsed: f64) -> bool {
        elapsed > self.beatmap.last_time() + OK_WINDOW
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rhythm::Beat;

    fn engine() -> RhythmEngine {
        let beatmap = Beatmap::from_beats(vec![Beat::new(1.0, 1), Beat::new(2.0, 2)])
            .expect("valid beats");
        RhythmEngine::new(beatmap)
    }

    #[test]
    fn test_tiers_are_strict_upper_bounds() {
        assert_eq!(Judgement::from_offset(0.0), Judgement::Perfect);
        assert_eq!(Judgement::from_offset(0.1), Judgement::Good);
        assert_eq!(Judgement::from_offset(0.25), Judgement::Ok);
        assert_eq!(Judgement::from_offset(0.4), Judgement::Miss);
    }

    #[test]
    fn test_score_before_start_is_an_error() {
        assert_eq!(
            engine().calculate_score(Instant::now()),
            Err(RhythmError::NotStarted)
        );
    }

    #[test]
    fn test_beat_pulse() {
        let engine = engine();
        assert!(!engine.is_on_beat(0.9));
        assert!(engine.is_on_beat(1.0));
        assert!(engine.is_on_beat(1.49));
        assert!(!engine.is_on_beat(1.5));
    }

    #[test]
    fn test_finished_after_last_beat_window() {
        let engine = engine();
        assert!(!engine.is_finished(2.4));
        assert!(engine.is_finished(2.41));
    }
}
