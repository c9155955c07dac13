// SPDX-License-Identifier: GPL-3.0-only

//! User configuration
//!
//! Stored as JSON at `<config_dir>/filtercam/config.json`. A missing file yields
//! the defaults; a malformed one is reported as [`AppError::Config`].

use crate::constants::timing;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

const APP_DIR: &str = "filtercam";
const CONFIG_FILE: &str = "config.json";

/// Shape of the simulated camera used when no real session is wired in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VirtualCameraConfig {
    pub front_camera: bool,
    pub back_camera: bool,
    pub flash_on_front: bool,
    pub flash_on_back: bool,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
}

impl Default for VirtualCameraConfig {
    fn default() -> Self {
        Self {
            front_camera: true,
            back_camera: true,
            flash_on_front: false,
            flash_on_back: true,
            width: 640,
            height: 480,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Folder under the user's pictures directory holding the photo library
    pub save_folder_name: String,
    /// Start on the back camera when one is present
    pub prefer_back_camera: bool,
    /// Filter panel slide duration in milliseconds
    pub filter_panel_animation_ms: u64,
    pub virtual_camera: VirtualCameraConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            save_folder_name: "filtercam".to_string(),
            prefer_back_camera: true,
            filter_panel_animation_ms: timing::FILTER_PANEL_ANIMATION.as_millis() as u64,
            virtual_camera: VirtualCameraConfig::default(),
        }
    }
}

impl Config {
    pub fn filter_panel_animation(&self) -> Duration {
        Duration::from_millis(self.filter_panel_animation_ms)
    }

    /// Photo library directory (`~/Pictures/<save_folder_name>`)
    pub fn photo_directory(&self) -> PathBuf {
        dirs::picture_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join("Pictures")))
            .unwrap_or_else(|| PathBuf::from("."))
            .join(&self.save_folder_name)
    }
}

/// Default config file location
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Load the config from its default location
pub fn load() -> AppResult<Config> {
    match default_config_path() {
        Some(path) => load_from_path(&path),
        None => Ok(Config::default()),
    }
}

/// Save the config to its default location
pub fn save(config: &Config) -> AppResult<()> {
    match default_config_path() {
        Some(path) => save_to_path(config, &path),
        None => Ok(()),
    }
}

pub fn load_from_path(path: &Path) -> AppResult<Config> {
    if !path.exists() {
        debug!(path = %path.display(), "No config file, using defaults");
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path)?;
    let config = serde_json::from_str(&contents)
        .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
    info!(path = %path.display(), "Loaded config");
    Ok(config)
}

pub fn save_to_path(config: &Config, path: &Path) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    info!(path = %path.display(), "Saved config");
    Ok(())
}
