// SPDX-License-Identifier: GPL-3.0-only

//! Message update handling
//!
//! `update()` routes every message to a focused handler method. The handlers
//! live in the `handlers` submodules, grouped by functional domain.
//!
//! # Handler Modules
//!
//! - `handlers::camera`: session lifecycle, camera switching, flash
//! - `handlers::capture`: shutter, captured photos, photo hand-off
//! - `handlers::system`: camera roll, editor results, saving, thumbnails
//! - `handlers::ui`: filter panel and filter strip

use crate::app::state::{CameraScreen, Message};
use crate::app::task::Task;
use tracing::debug;

impl CameraScreen {
    /// Main message handler. Must be called on the UI context.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // ===== Lifecycle =====
            Message::Appeared => self.handle_appeared(),

            // ===== Gestures =====
            Message::ChangeFlash => self.handle_change_flash(),
            Message::SwitchCamera => self.handle_switch_camera(),
            Message::ShowCameraRoll => self.handle_show_camera_roll(),
            Message::TakePhoto => self.handle_take_photo(),
            Message::ToggleFilters => self.handle_toggle_filters(),
            Message::MoveFilterCursor(delta) => self.handle_move_filter_cursor(delta),
            Message::SelectFilter(filter) => self.handle_select_filter(filter),

            // ===== Session =====
            Message::Session(event) => self.handle_session_event(event),

            // ===== Results =====
            Message::PhotoCaptured(result) => self.handle_photo_captured(result),
            Message::CameraRollFinished(outcome) => self.handle_camera_roll_finished(outcome),
            Message::EditorFinished(outcome) => self.handle_editor_finished(outcome),
            Message::PhotoSaved(result) => self.handle_photo_saved(result),
            Message::ThumbnailLoaded(thumbnail) => self.handle_thumbnail_loaded(thumbnail),

            Message::Noop => {
                debug!("Noop");
                Task::none()
            }
        }
    }
}
