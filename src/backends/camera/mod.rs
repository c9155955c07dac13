// SPDX-License-Identifier: GPL-3.0-only

//! Capture session abstraction
//!
//! The screen drives the camera only through [`CaptureSession`]. Sessions do their
//! work on their own threads and report back through [`CaptureEvent`]s sent over a
//! channel; the screen runtime forwards those onto the UI context.
//!
//! ```text
//! ┌─────────────────────┐   calls    ┌──────────────────────┐
//! │    CameraScreen     │ ─────────► │ CaptureSession trait │
//! └─────────────────────┘            └──────────┬───────────┘
//!            ▲                                  │
//!            │ Message::Session(event)          ▼
//! ┌─────────────────────┐  events   ┌──────────────────────┐
//! │   UI message loop   │ ◄──────── │ VirtualCaptureSession│
//! └─────────────────────┘           └──────────────────────┘
//! ```

pub mod types;
pub mod virtual_session;

pub use types::*;
pub use virtual_session::VirtualCaptureSession;

use crate::filters::FilterType;
use futures::future::BoxFuture;
use image::RgbaImage;
use std::sync::Arc;

/// Camera capture session contract
pub trait CaptureSession: Send + Sync {
    // ===== Device queries =====

    fn is_camera_present(&self, position: CameraPosition) -> bool;

    fn is_more_than_one_camera_present(&self) -> bool;

    /// Whether the active camera has a flash unit
    fn is_flash_present(&self) -> bool;

    // ===== Lifecycle =====

    /// Configure the session for a camera
    ///
    /// Failure is silent: the session simply never starts and no preview appears.
    fn setup(&self, position: CameraPosition);

    /// Start the session; reports [`CaptureEvent::SessionStarted`] once running
    fn start_capture_session(&self);

    /// Stop the session; reports [`CaptureEvent::SessionStopped`]
    fn stop_capture_session(&self);

    // ===== Operations =====

    /// Advance the flash mode; reports [`CaptureEvent::DidSetFlashMode`]
    fn select_next_flash_mode(&self);

    /// Switch to the opposite camera
    ///
    /// Reports [`CaptureEvent::WillToggleCamera`] and [`CaptureEvent::DidToggleCamera`]
    /// around the switch.
    fn toggle_camera_position(&self);

    /// Capture a still image; the future resolves exactly once
    fn take_photo(&self) -> BoxFuture<'static, CaptureResult<Photo>>;

    // ===== Live filter =====

    /// Preset currently applied to the live preview
    fn effect_filter(&self) -> FilterType;

    fn set_effect_filter(&self, filter: FilterType);

    /// Most recent preview frame, for composers that draw the preview themselves
    fn latest_preview(&self) -> Option<Arc<RgbaImage>> {
        None
    }
}
