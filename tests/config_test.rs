//! Configuration loading and command-line overrides.

use clap::Parser;
use std::path::PathBuf;
use tictacbeat::{AppConfig, Cli};
use tictacbeat_core::BeatmapSource;

fn write_config(dir: &tempfile::TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("tictacbeat.toml");
    std::fs::write(&path, body).expect("write config");
    path
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = AppConfig::load(dir.path().join("absent.toml")).expect("defaults");

    assert_eq!(config, AppConfig::default());
    assert_eq!(*config.tick_rate(), 60);
    assert_eq!(config.log_filter(), "info");
    assert!(*config.click_bell());
    assert_eq!(*config.session().countdown_secs(), 3);
    assert_eq!(*config.session().hold_ticks(), 60);
    assert_eq!(*config.session().win_bonus(), 250);
    assert_eq!(config.beatmap_source(), BeatmapSource::Embedded);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_config(
        &dir,
        r#"
tick_rate = 30
beatmap = "songs/track.json"

[session]
win_bonus = 500
"#,
    );

    let config = AppConfig::load(&path).expect("valid config");
    assert_eq!(*config.tick_rate(), 30);
    assert_eq!(
        config.beatmap_source(),
        BeatmapSource::File(PathBuf::from("songs/track.json"))
    );
    assert_eq!(*config.session().win_bonus(), 500);
    assert_eq!(*config.session().countdown_secs(), 3);
    assert_eq!(config.log_file(), &PathBuf::from("tictacbeat.log"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_config(&dir, "tick_rate = \"fast\"");

    let err = AppConfig::load(&path).expect_err("bad type");
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_zero_tick_rate_is_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_config(&dir, "tick_rate = 0");
    assert!(AppConfig::load(&path).is_err());
}

#[test]
fn test_cli_flags_override_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_config(&dir, "tick_rate = 30\nclick_bell = true");

    let cli = Cli::parse_from([
        "tictacbeat",
        "--config",
        path.to_str().expect("utf-8 path"),
        "--tick-rate",
        "120",
        "--beatmap",
        "other.json",
        "--no-bell",
    ]);
    let config = AppConfig::load(&cli.config)
        .and_then(|config| config.with_overrides(&cli))
        .expect("valid config");

    assert_eq!(*config.tick_rate(), 120);
    assert!(!*config.click_bell());
    assert_eq!(config.beatmap(), &Some(PathBuf::from("other.json")));
}

#[test]
fn test_cli_defaults() {
    let cli = Cli::parse_from(["tictacbeat"]);
    assert_eq!(cli.config, PathBuf::from("tictacbeat.toml"));
    assert_eq!(cli.beatmap, None);
    assert_eq!(cli.tick_rate, None);
    assert!(!cli.no_bell);
}
