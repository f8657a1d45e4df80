//! High-score persistence tests (engines backed by real files in a temp dir)

use std::fs;

use brick_game::core::{Engine, GameConfig, HighScoreStore, SnakeEngine, TetrisEngine};
use brick_game::types::{Action, SNAKE_HIGH_SCORE_FILE, TETRIS_HIGH_SCORE_FILE};
use tempfile::tempdir;

fn config_in(dir: &std::path::Path) -> GameConfig {
    GameConfig {
        seed: 11,
        data_dir: dir.to_path_buf(),
        ..GameConfig::default()
    }
}

#[test]
fn test_store_round_trip_across_instances() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(TETRIS_HIGH_SCORE_FILE);

    let mut store = HighScoreStore::open(&path);
    store.record(1500);
    drop(store);

    let mut reopened = HighScoreStore::open(&path);
    assert_eq!(reopened.high_score(), 1500);

    // A smaller score never overwrites the record.
    reopened.record(300);
    assert_eq!(HighScoreStore::open(&path).high_score(), 1500);
}

#[test]
fn test_engines_create_their_files() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());

    let _tetris = TetrisEngine::from_config(&config);
    let _snake = SnakeEngine::from_config(&config);

    assert!(dir.path().join(TETRIS_HIGH_SCORE_FILE).exists());
    assert!(dir.path().join(SNAKE_HIGH_SCORE_FILE).exists());
}

#[test]
fn test_snake_score_persists_to_disk() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());

    let mut engine = SnakeEngine::from_config(&config);
    let (hx, hy) = engine.snake().head();
    if engine.apple() != (hx, hy - 1) {
        assert!(engine.place_apple(hx, hy - 1));
    }
    engine.tick();
    engine.apply_action(Action::Terminate);

    let bytes = fs::read(config.snake_high_score_path()).unwrap();
    assert_eq!(bytes, 1i32.to_ne_bytes());
    assert_eq!(SnakeEngine::from_config(&config).high_score(), 1);
}

#[test]
fn test_existing_record_is_loaded() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());
    fs::write(config.tetris_high_score_path(), 4200i32.to_ne_bytes()).unwrap();

    let engine = TetrisEngine::from_config(&config);
    assert_eq!(engine.high_score(), 4200);
    assert_eq!(engine.snapshot().high_score, 4200);
}
