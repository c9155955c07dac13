// SPDX-License-Identifier: GPL-3.0-only

//! Shared types for the capture session contract

use crate::errors::CaptureError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Result type alias for capture operations
pub type CaptureResult<T> = Result<T, CaptureError>;

/// A captured still image
pub type Photo = Arc<image::DynamicImage>;

/// Channel the session uses to report its events
pub type EventSender = tokio::sync::mpsc::UnboundedSender<CaptureEvent>;

/// Physical camera facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CameraPosition {
    Front,
    Back,
}

impl CameraPosition {
    /// The camera on the other side of the device
    pub fn opposite(self) -> Self {
        match self {
            CameraPosition::Front => CameraPosition::Back,
            CameraPosition::Back => CameraPosition::Front,
        }
    }
}

/// Flash operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlashMode {
    /// Flash fires when the scene is dark
    #[default]
    Auto,
    /// Flash always fires
    On,
    /// Flash never fires
    Off,
}

impl FlashMode {
    /// Cycle to the next mode: Auto -> On -> Off -> Auto
    pub fn next(self) -> Self {
        match self {
            FlashMode::Auto => FlashMode::On,
            FlashMode::On => FlashMode::Off,
            FlashMode::Off => FlashMode::Auto,
        }
    }
}

/// Events a capture session reports, possibly from a non-UI thread
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureEvent {
    SessionStarted,
    SessionStopped,
    WillToggleCamera,
    DidToggleCamera,
    DidSetFlashMode(FlashMode),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_mode_cycle_returns_to_start() {
        let mut mode = FlashMode::Auto;
        let mut seen = Vec::new();
        for _ in 0..3 {
            mode = mode.next();
            seen.push(mode);
        }
        assert_eq!(seen, vec![FlashMode::On, FlashMode::Off, FlashMode::Auto]);
    }

    #[test]
    fn test_position_opposite() {
        assert_eq!(CameraPosition::Front.opposite(), CameraPosition::Back);
        assert_eq!(CameraPosition::Back.opposite(), CameraPosition::Front);
    }
}
