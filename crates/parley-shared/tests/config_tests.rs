//! Config file load/save against a real filesystem.

use parley_shared::{ParleyConfig, ParleyError, ResponseSpeed};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = ParleyConfig::load(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, ParleyConfig::default());
}

#[test]
fn test_save_creates_parents_and_reloads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("parley").join("config.toml");

    let mut config = ParleyConfig::default();
    config.chat.bot_name = "Parley".to_string();
    config.chat.response_speed = ResponseSpeed::Fast;
    config.chat.show_typing_indicator = false;
    config.save(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("response_speed = \"fast\""));
    assert_eq!(ParleyConfig::load(&path).unwrap(), config);
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[chat\nbot_name = ").unwrap();

    assert!(matches!(
        ParleyConfig::load(&path),
        Err(ParleyError::ConfigParse(_))
    ));
}

#[test]
fn test_invalid_values_are_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[pipeline.search]\ntimeout_secs = 0\n").unwrap();

    assert!(matches!(ParleyConfig::load(&path), Err(ParleyError::Config(_))));
}
