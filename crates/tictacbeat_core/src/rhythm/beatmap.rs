//! Beat schedule loading.

use crate::error::BeatmapError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

const EMBEDDED_BEATMAP: &str = include_str!("../../assets/beatmap.json");

/// One scheduled beat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_new::new)]
pub struct Beat {
    /// Offset from the start of the track, in seconds.
    pub time: f64,
    /// Beat number as written in the source schedule.
    #[serde(rename = "beatNum")]
    pub beat_num: u32,
}

/// Where a beat schedule comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BeatmapSource {
    /// The schedule compiled into the crate.
    #[default]
    Embedded,
    /// A JSON file on disk.
    File(PathBuf),
}

impl From<Option<PathBuf>> for BeatmapSource {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Embedded, Self::File)
    }
}

/// Immutable, non-empty, time-ordered beat schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct Beatmap {
    beats: Vec<Beat>,
}

impl Beatmap {
    /// Wraps an already-thinned schedule.
    ///
    /// Rejects an empty list, non-finite times and times that go backwards.
    pub fn from_beats(beats: Vec<Beat>) -> Result<Self, BeatmapError> {
        if beats.is_empty() {
            return Err(BeatmapError::new("Beatmap has no beats"));
        }
        if let Some(beat) = beats.iter().find(|beat| !beat.time.is_finite()) {
            return Err(BeatmapError::new(format!(
                "Beat {} has a non-finite time",
                beat.beat_num
            )));
        }
        if beats.windows(2).any(|pair| pair[1].time < pair[0].time) {
            return Err(BeatmapError::new("Beat times must not decrease"));
        }
        Ok(Self { beats })
    }

    /// Parses a raw JSON schedule and keeps every second beat.
    ///
    /// Raw entries at even indices (0, 2, 4, ...) are retained, giving the
    /// sparser click track players react to.
    #[instrument(skip(json), fields(bytes = json.len()))]
    pub fn from_json(json: &str) -> Result<Self, BeatmapError> {
        let raw: Vec<Beat> = serde_json::from_str(json)?;
        let raw_len = raw.len();
        let beats: Vec<Beat> = raw.into_iter().step_by(2).collect();
        debug!(raw_len, kept = beats.len(), "Thinned beat schedule");
        Self::from_beats(beats)
    }

    /// Loads the schedule compiled into the crate.
    pub fn embedded() -> Result<Self, BeatmapError> {
        Self::from_json(EMBEDDED_BEATMAP)
    }

    /// Loads a raw JSON schedule from `path`.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BeatmapError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// Loads the schedule named by `source`.
    #[instrument]
    pub fn load(source: &BeatmapSource) -> Result<Self, BeatmapError> {
        let beatmap = match source {
            BeatmapSource::Embedded => Self::embedded()?,
            BeatmapSource::File(path) => Self::from_file(path)?,
        };
        info!(beats = beatmap.len(), last = beatmap.last_time(), "Beatmap loaded");
        Ok(beatmap)
    }

    /// The retained beats.
    pub fn beats(&self) -> &[Beat] {
        &self.beats
    }

    /// Number of retained beats.
    pub fn len(&self) -> usize {
        self.beats.len()
    }

    /// True if the schedule has no beats, which construction rules out.
    pub fn is_empty(&self) -> bool {
        self.beats.is_empty()
    }

    /// Time of the final beat, in seconds.
    pub fn last_time(&self) -> f64 {
        self.beats.last().map_or(0.0, |beat| beat.time)
    }

    /// The beat nearest to `elapsed`.
    ///
    /// Scans the whole schedule; on equal distance the earlier beat wins.
    pub fn closest(&self, elapsed: f64) -> Beat {
        let mut closest = self.beats[0];
        let mut min_difference = f64::MAX;
        for beat in &self.beats {
            let difference = (beat.time - elapsed).abs();
            if difference < min_difference {
                min_difference = difference;
                closest = *beat;
            }
        }
        closest
    }
}
