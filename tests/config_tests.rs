// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for configuration module

use filtercam::config::{self, Config};
use filtercam::errors::AppError;
use std::time::Duration;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.save_folder_name, "filtercam");
    assert!(config.prefer_back_camera, "Back camera should be preferred by default");
    assert_eq!(config.filter_panel_animation(), Duration::from_millis(300));
    assert!(config.virtual_camera.front_camera && config.virtual_camera.back_camera);
    assert!(config.virtual_camera.flash_on_back);
    assert!(!config.virtual_camera.flash_on_front);
}

#[test]
fn test_photo_directory_ends_with_folder_name() {
    let config = Config {
        save_folder_name: "shots".to_string(),
        ..Config::default()
    };
    assert!(config.photo_directory().ends_with("shots"));
}

#[test]
fn test_config_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.filter_panel_animation_ms = 120;
    config.virtual_camera.back_camera = false;
    config::save_to_path(&config, &path).unwrap();

    assert_eq!(config::load_from_path(&path).unwrap(), config);
}

#[test]
fn test_missing_config_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = config::load_from_path(&dir.path().join("absent.json")).unwrap();
    assert_eq!(loaded, Config::default());
}

#[test]
fn test_partial_config_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "prefer_back_camera": false }"#).unwrap();

    let loaded = config::load_from_path(&path).unwrap();
    assert!(!loaded.prefer_back_camera);
    assert_eq!(loaded.save_folder_name, "filtercam");
}

#[test]
fn test_malformed_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        config::load_from_path(&path),
        Err(AppError::Config(_))
    ));
}
