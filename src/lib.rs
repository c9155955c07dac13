// SPDX-License-Identifier: GPL-3.0-only

//! filtercam - a camera screen with a filter strip
//!
//! This library provides the camera screen controller: capture session
//! wiring, the shared control gate, the animated filter panel, the filter
//! strip and the hand-off of captured or picked photos to an editor.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`app`]: Screen state, messages and handlers
//! - [`backends`]: Capture session contract and the virtual session
//! - [`filters`]: Filter presets, including [`filters::TenderFilter`]
//! - [`assets`]: Icon lookup
//! - [`config`]: User configuration handling
//! - [`storage`]: Photo library and thumbnail loading
//! - [`terminal`]: Terminal front-end
//!
//! # Example
//!
//! ```ignore
//! // Runs in a terminal, typically via:
//! // filtercam
//! ```

pub mod app;
pub mod assets;
pub mod backends;
pub mod config;
pub mod constants;
pub mod errors;
pub mod filters;
pub mod i18n;
pub mod storage;
pub mod terminal;

// Re-export commonly used types
pub use app::{CameraScreen, Collaborators, Message, Task};
pub use config::Config;
pub use filters::{FilterType, TenderFilter};
