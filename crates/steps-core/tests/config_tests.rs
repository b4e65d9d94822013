//! Config file tests for steps-core

use std::fs;

use steps_core::chart::{ChartSet, Layout};
use steps_core::config::ChartConfig;
use steps_core::notes::{NoteData, TapNote};
use steps_core::score::{Grade, HighScore};
use steps_core::{Chart, Error};
use tempfile::TempDir;

#[test]
fn test_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("charts.json");

    let config = ChartConfig {
        ranking_lines: 3,
        compress_on_detach: false,
    };
    config.save(&path).unwrap();

    assert_eq!(ChartConfig::load(&path).unwrap(), config);
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = ChartConfig::load(dir.path().join("missing.json"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_load_empty_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("charts.json");
    fs::write(&path, "").unwrap();

    assert_eq!(ChartConfig::load(&path).unwrap(), ChartConfig::default());
}

#[test]
fn test_load_rejects_zero_ranking_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("charts.json");
    fs::write(&path, r#"{ "ranking_lines": 0 }"#).unwrap();

    assert!(matches!(
        ChartConfig::load(&path),
        Err(Error::ConfigParseError(_))
    ));
}

#[test]
fn test_loaded_config_applies_to_set() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("charts.json");
    fs::write(
        &path,
        r#"{ "ranking_lines": 2, "compress_on_detach": false }"#,
    )
    .unwrap();

    let mut set = ChartSet::with_config(ChartConfig::load(&path).unwrap());

    let mut doubles = Chart::new(Layout::DanceDouble);
    let mut notes = NoteData::new(8);
    notes.set_tap_note(4, 0, TapNote::Tap);
    doubles.set_notes(notes).unwrap();
    let source = set.add(doubles);

    for score in [10, 30, 20] {
        set.add_high_score(source, HighScore::new("P1", Grade::C, score, 0.5))
            .unwrap();
    }
    let kept: Vec<i32> = set
        .get(source)
        .unwrap()
        .high_scores()
        .iter()
        .map(|hs| hs.score)
        .collect();
    assert_eq!(kept, vec![30, 20]);

    let single = set.add_autogen(source, Layout::DanceSingle).unwrap();
    set.detach(single).unwrap();
    assert!(set.get(single).unwrap().is_decompressed());
}
