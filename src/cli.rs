// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for the camera screen
//!
//! This module provides command-line functionality for:
//! - Listing the filter presets
//! - Capturing a single photo to a file

use filtercam::config::Config;
use filtercam::filters::FilterType;
use filtercam::terminal::{self, HandOff};
use std::path::PathBuf;

/// List all filter presets offered by the filter strip
pub fn list_presets() -> Result<(), Box<dyn std::error::Error>> {
    println!("Filter presets:");
    println!();
    for (index, filter) in FilterType::ALL.iter().enumerate() {
        let effect = filter.effect();
        match effect.response_name() {
            Some(response) => println!("  [{}] {} (response: {})", index, effect.display_name(), response),
            None => println!("  [{}] {}", index, effect.display_name()),
        }
    }
    Ok(())
}

/// Run the screen until a photo is taken or picked, then write it to `output`
pub fn capture(config: Config, output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    match terminal::run(config, HandOff::WriteTo(output))? {
        Some(path) => println!("Photo saved: {}", path.display()),
        None => println!("No photo taken."),
    }
    Ok(())
}
