//! Click track: rings the terminal bell on each scheduled beat.

use std::time::{Duration, Instant};
use tictacbeat_core::{AudioError, AudioPlayer, Beatmap};
use tracing::{debug, info, instrument};

/// Stand-in for a music track that follows the beat schedule.
///
/// Playback position advances with the wall clock while playing. The event
/// loop calls [`ClickTrack::pump`] every tick and rings the bell when it
/// reports a beat.
#[derive(Debug, Clone)]
pub struct ClickTrack {
    beats: Vec<Duration>,
    enabled: bool,
    next_beat: usize,
    position: Duration,
    playing_since: Option<Instant>,
    stopped: bool,
}

impl ClickTrack {
    /// Creates a paused track over the beats of `beatmap`.
    pub fn new(beatmap: &Beatmap, enabled: bool) -> Self {
        Self {
            beats: beatmap
                .beats()
                .iter()
                .map(|beat| Duration::from_secs_f64(beat.time.max(0.0)))
                .collect(),
            enabled,
            next_beat: 0,
            position: Duration::ZERO,
            playing_since: None,
            stopped: false,
        }
    }

    /// True while the track is running.
    pub fn is_playing(&self) -> bool {
        self.playing_since.is_some()
    }

    /// Playback position at `now`.
    pub fn position(&self, now: Instant) -> Duration {
        match self.playing_since {
            Some(since) => self.position + now.saturating_duration_since(since),
            None => self.position,
        }
    }

    /// Consumes every beat passed by `now`; true if at least one should click.
    pub fn pump(&mut self, now: Instant) -> bool {
        if !self.is_playing() {
            return false;
        }
        let position = self.position(now);
        let passed = self.beats[self.next_beat..]
            .iter()
            .take_while(|beat| **beat <= position)
            .count();
        self.next_beat += passed;
        passed > 0 && self.enabled
    }

    fn play_at(&mut self, now: Instant) -> Result<(), AudioError> {
        if self.stopped {
            return Err(AudioError::new("Click track has been stopped"));
        }
        if self.playing_since.is_none() {
            self.playing_since = Some(now);
            info!(position = ?self.position, "Click track playing");
        }
        Ok(())
    }

    fn rewind(&mut self) -> Result<(), AudioError> {
        if self.stopped {
            return Err(AudioError::new("Click track has been stopped"));
        }
        self.position = Duration::ZERO;
        self.playing_since = None;
        self.next_beat = 0;
        debug!("Click track rewound");
        Ok(())
    }
}

impl AudioPlayer for ClickTrack {
    #[instrument(skip(self))]
    fn play(&mut self) -> Result<(), AudioError> {
        self.play_at(Instant::now())
    }

    #[instrument(skip(self))]
    fn stop(&mut self) -> Result<(), AudioError> {
        self.position = self.position(Instant::now());
        self.playing_since = None;
        self.stopped = true;
        info!("Click track stopped");
        Ok(())
    }

    #[instrument(skip(self))]
    fn restart(&mut self) -> Result<(), AudioError> {
        self.rewind()
    }
}
