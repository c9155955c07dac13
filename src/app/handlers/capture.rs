// SPDX-License-Identifier: GPL-3.0-only

//! Photo capture handlers
//!
//! Handles the shutter, the captured photo, and handing a photo off to either
//! the completion callback or the editor.

use crate::app::editor::EditorRequest;
use crate::app::state::{CameraScreen, Control, Message, Presentation, StatusMessage};
use crate::app::task::Task;
use crate::backends::camera::{CaptureResult, Photo};
use std::time::Instant;
use tracing::{debug, error, info, warn};

impl CameraScreen {
    // =========================================================================
    // Capture Operations Handlers
    // =========================================================================

    pub(crate) fn handle_take_photo(&mut self) -> Task<Message> {
        if !self.controls.accepts_input(Control::Shutter) || self.is_capturing {
            info!("Shutter ignored");
            return Task::none();
        }
        // Nothing would re-enable the controls if the session never starts
        if !self.session_state.is_running() {
            debug!(state = ?self.session_state, "Shutter needs a running session");
            return Task::none();
        }
        let Some(session) = self.collaborators.session.clone() else {
            return Task::none();
        };

        self.set_controls_enabled(false);
        self.is_capturing = true;
        self.status = None;
        self.shutter.start(Instant::now());

        info!("Capturing photo...");
        Task::perform(session.take_photo(), Message::PhotoCaptured)
    }

    pub(crate) fn handle_photo_captured(&mut self, result: CaptureResult<Photo>) -> Task<Message> {
        self.is_capturing = false;

        match result {
            Ok(photo) => {
                info!(
                    width = photo.width(),
                    height = photo.height(),
                    "Photo captured"
                );
                if self.handed_off {
                    warn!("Photo already handed off for this presentation, dropping");
                    return Task::none();
                }
                self.stop_session();
                self.hand_off(photo)
            }
            Err(e) => {
                error!(error = %e, "Photo capture failed");
                self.status = Some(StatusMessage::CaptureFailed(e.to_string()));
                if self.session_state.is_running() {
                    self.set_controls_enabled(true);
                }
                Task::none()
            }
        }
    }

    /// Give `photo` to the completion callback, or open the editor when there is none
    pub(crate) fn hand_off(&mut self, photo: Photo) -> Task<Message> {
        if self.handed_off {
            warn!("Photo already handed off for this presentation, dropping");
            return Task::none();
        }
        self.handed_off = true;

        if let Some(completion) = self.completion.as_mut() {
            info!("Handing photo to completion callback");
            completion(Some(photo));
            return Task::none();
        }

        let initial_filter = self.filter_strip.active();
        info!(?initial_filter, "Presenting editor");
        self.presentation = Presentation::Editor { initial_filter };
        let request = EditorRequest {
            image: photo,
            initial_filter,
        };
        Task::perform(
            self.collaborators.editor.present(request),
            Message::EditorFinished,
        )
    }
}
