// SPDX-License-Identifier: GPL-3.0-only

//! Capture session handlers
//!
//! Session lifecycle on appear, camera switching, flash cycling, and the
//! events the session reports back.

use crate::app::state::{CameraScreen, Control, Message};
use crate::app::task::Task;
use crate::backends::camera::CaptureEvent;
use tracing::{debug, info};

impl CameraScreen {
    // =========================================================================
    // Session Lifecycle
    // =========================================================================

    /// Screen became visible: refresh the camera roll button and start the session
    pub(crate) fn handle_appeared(&mut self) -> Task<Message> {
        self.handed_off = false;
        self.start_session();
        self.refresh_thumbnail()
    }

    pub(crate) fn start_session(&mut self) {
        let Some(session) = &self.collaborators.session else {
            debug!("No capture session, nothing to start");
            return;
        };
        info!("Starting capture session");
        session.start_capture_session();
        self.session_state = self.session_state.on_start_requested();
    }

    pub(crate) fn stop_session(&mut self) {
        let Some(session) = &self.collaborators.session else {
            return;
        };
        info!("Stopping capture session");
        session.stop_capture_session();
        self.session_state = self.session_state.on_stop_requested();
    }

    // =========================================================================
    // Camera Controls
    // =========================================================================

    pub(crate) fn handle_switch_camera(&mut self) -> Task<Message> {
        if !self.controls.accepts_input(Control::SwitchCamera) {
            debug!("Switch camera ignored");
            return Task::none();
        }
        if !self.session_state.is_running() {
            debug!(state = ?self.session_state, "Switch camera needs a running session");
            return Task::none();
        }
        let Some(session) = self.collaborators.session.clone() else {
            return Task::none();
        };

        // Disabled until the session reports it started on the new camera
        self.set_controls_enabled(false);
        self.session_state = self.session_state.on_toggle_requested();
        info!(from = ?self.camera_position, "Switching camera");
        session.toggle_camera_position();
        Task::none()
    }

    pub(crate) fn handle_change_flash(&mut self) -> Task<Message> {
        if !self.controls.accepts_input(Control::Flash) {
            debug!("Flash change ignored");
            return Task::none();
        }
        if let Some(session) = &self.collaborators.session {
            session.select_next_flash_mode();
        }
        // The icon follows DidSetFlashMode
        Task::none()
    }

    // =========================================================================
    // Session Events
    // =========================================================================

    pub(crate) fn handle_session_event(&mut self, event: CaptureEvent) -> Task<Message> {
        let previous = self.session_state;
        self.session_state = previous.on_event(event);
        debug!(?event, ?previous, state = ?self.session_state, "Session event");

        match event {
            CaptureEvent::SessionStarted => {
                if self.is_capturing {
                    debug!("Session started during capture, controls stay disabled");
                } else {
                    self.set_controls_enabled(true);
                }
            }
            CaptureEvent::SessionStopped => {}
            CaptureEvent::WillToggleCamera => {
                self.set_controls_enabled(false);
            }
            CaptureEvent::DidToggleCamera => {
                self.camera_position = self.camera_position.opposite();
                let flash_present = self
                    .collaborators
                    .session
                    .as_ref()
                    .is_some_and(|session| session.is_flash_present());
                self.controls.set_flash_hidden(!flash_present);
                info!(position = ?self.camera_position, flash_present, "Camera switched");
            }
            CaptureEvent::DidSetFlashMode(mode) => {
                info!(?mode, "Flash mode changed");
                self.controls.set_flash_mode(mode);
            }
        }
        Task::none()
    }
}
