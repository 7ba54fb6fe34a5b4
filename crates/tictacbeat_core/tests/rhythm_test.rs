//! Rhythm scoring and the three-symbol window.

use std::time::{Duration, Instant};
use tictacbeat_core::rhythm::{BEAT_PULSE, OK_WINDOW};
use tictacbeat_core::{
    Beat, Beatmap, BeatmapError, Coord, Judgement, MoveWindow, RhythmEngine, RhythmError, Symbol,
};

fn one_beat_engine() -> RhythmEngine {
    let beatmap = Beatmap::from_beats(vec![Beat::new(1.0, 1)]).expect("valid beats");
    RhythmEngine::new(beatmap)
}

#[test]
fn test_window_trace() {
    let mut window = MoveWindow::new();

    let first = window.record(Coord::new(1, 1));
    assert_eq!((first.remove, first.highlight), (None, None));

    let second = window.record(Coord::new(2, 2));
    assert_eq!((second.remove, second.highlight), (None, None));

    let third = window.record(Coord::new(3, 3));
    assert_eq!(third.remove, None);
    assert_eq!(third.highlight, Some(Coord::new(1, 1)));

    let fourth = window.record(Coord::new(1, 2));
    assert_eq!(fourth.remove, Some(Coord::new(1, 1)));
    assert_eq!(fourth.highlight, Some(Coord::new(2, 2)));
}

#[test]
fn test_windows_are_per_symbol() {
    let mut engine = one_beat_engine();
    engine.update(Symbol::O, Coord::new(0, 0));
    engine.update(Symbol::O, Coord::new(0, 1));
    engine.update(Symbol::X, Coord::new(2, 2));

    assert_eq!(engine.window(Symbol::O).len(), 2);
    assert_eq!(engine.window(Symbol::X).len(), 1);

    let update = engine.update(Symbol::X, Coord::new(2, 1));
    assert!(!update.should_highlight());
}

#[test]
fn test_score_tiers_around_a_beat() {
    let engine = one_beat_engine();
    assert_eq!(engine.judge(1.0).points(), 300);
    assert_eq!(engine.judge(1.2).points(), 100);
    assert_eq!(engine.judge(1.35).points(), 50);
    assert_eq!(engine.judge(2.0).points(), 0);
    assert_eq!(engine.judge(0.8), Judgement::Good);
}

#[test]
fn test_score_needs_a_start_time() {
    let engine = one_beat_engine();
    assert_eq!(
        engine.calculate_score(Instant::now()),
        Err(RhythmError::NotStarted)
    );
}

#[test]
fn test_score_from_clock() {
    let mut engine = one_beat_engine();
    let start = Instant::now();
    engine.start(start);
    assert_eq!(
        engine.calculate_score(start + Duration::from_millis(1050)),
        Ok(300)
    );
    assert_eq!(
        engine.calculate_score(start + Duration::from_millis(1300)),
        Ok(50)
    );
}

#[test]
fn test_beat_pulse_and_track_end() {
    let engine = one_beat_engine();
    assert!(!engine.is_on_beat(0.99));
    assert!(engine.is_on_beat(1.0));
    assert!(!engine.is_on_beat(1.0 + BEAT_PULSE));

    assert!(!engine.is_finished(1.0 + OK_WINDOW));
    assert!(engine.is_finished(1.0 + OK_WINDOW + 0.01));
}

#[test]
fn test_embedded_schedule_is_thinned() {
    let beatmap = Beatmap::embedded().expect("embedded asset parses");
    assert_eq!(beatmap.len(), 160);
    assert_eq!(beatmap.beats()[0].time, 0.534);
    assert_eq!(beatmap.beats()[1].time, 1.4715);
}

#[test]
fn test_schedule_from_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("beats.json");
    std::fs::write(
        &path,
        r#"[{"time":0.5,"beatNum":1},{"time":1.0,"beatNum":2},{"time":1.5,"beatNum":3}]"#,
    )
    .expect("write beatmap");

    let beatmap = Beatmap::from_file(&path).expect("valid file");
    assert_eq!(
        beatmap.beats(),
        &[Beat::new(0.5, 1), Beat::new(1.5, 3)]
    );
}

#[test]
fn test_bad_schedules_are_rejected() {
    let missing: Result<Beatmap, BeatmapError> = Beatmap::from_file("/nonexistent/beats.json");
    assert!(missing.is_err());
    assert!(Beatmap::from_json("not json").is_err());
    assert!(Beatmap::from_json("[]").is_err());
    assert!(
        Beatmap::from_beats(vec![Beat::new(2.0, 1), Beat::new(1.0, 2)]).is_err()
    );
}
