// SPDX-License-Identifier: GPL-3.0-only

//! Camera roll, editor and photo library handlers

use crate::app::editor::{EditorOutcome, EditorResult};
use crate::app::picker::{PickerOutcome, PickerRequest};
use crate::app::state::{CameraScreen, Control, Message, Presentation, StatusMessage};
use crate::app::task::Task;
use crate::constants::ui;
use crate::storage::Thumbnail;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

impl CameraScreen {
    // =========================================================================
    // Camera Roll
    // =========================================================================

    pub(crate) fn handle_show_camera_roll(&mut self) -> Task<Message> {
        if !self.controls.accepts_input(Control::CameraRoll) {
            debug!("Camera roll ignored");
            return Task::none();
        }

        self.stop_session();
        self.presentation = Presentation::CameraRoll;
        info!("Opening camera roll");
        Task::perform(
            self.collaborators.picker.pick_image(PickerRequest::default()),
            Message::CameraRollFinished,
        )
    }

    pub(crate) fn handle_camera_roll_finished(&mut self, outcome: PickerOutcome) -> Task<Message> {
        self.presentation = Presentation::None;
        match outcome {
            PickerOutcome::Picked(photo) => self.hand_off(photo),
            PickerOutcome::Cancelled => {
                info!("Camera roll dismissed");
                self.handle_appeared()
            }
        }
    }

    // =========================================================================
    // Editor
    // =========================================================================

    pub(crate) fn handle_editor_finished(&mut self, outcome: EditorOutcome) -> Task<Message> {
        self.presentation = Presentation::None;

        let save = match (outcome.result, outcome.image) {
            (EditorResult::Done, Some(image)) => {
                info!("Saving edited photo");
                Task::perform(self.collaborators.library.save(image), |result| {
                    Message::PhotoSaved(result.map_err(|e| e.to_string()))
                })
            }
            (EditorResult::Done, None) => {
                warn!("Editor finished without an image");
                Task::none()
            }
            (EditorResult::Cancelled, _) => {
                info!("Editor cancelled");
                Task::none()
            }
        };

        Task::batch([save, self.handle_appeared()])
    }

    // =========================================================================
    // Photo Library
    // =========================================================================

    pub(crate) fn handle_photo_saved(&mut self, result: Result<PathBuf, String>) -> Task<Message> {
        match result {
            Ok(path) => {
                info!(path = %path.display(), "Photo saved");
                self.status = Some(StatusMessage::Saved(path));
                self.refresh_thumbnail()
            }
            Err(e) => {
                error!(error = %e, "Failed to save photo");
                Task::none()
            }
        }
    }

    pub(crate) fn handle_thumbnail_loaded(&mut self, thumbnail: Option<Thumbnail>) -> Task<Message> {
        match &thumbnail {
            Some(thumb) => debug!(source = %thumb.source.display(), "Camera roll thumbnail loaded"),
            None => debug!("Photo library empty, keeping placeholder"),
        }
        self.camera_roll_thumbnail = thumbnail;
        Task::none()
    }

    /// Load the newest library photo for the camera roll button
    pub(crate) fn refresh_thumbnail(&self) -> Task<Message> {
        let target = ui::THUMBNAIL_TARGET_SIZE;
        Task::perform(
            self.collaborators.library.latest_thumbnail(target),
            |result| match result {
                Ok(thumbnail) => Message::ThumbnailLoaded(thumbnail),
                Err(e) => {
                    // Keep whatever the button shows now
                    warn!(error = %e, "Failed to load camera roll thumbnail");
                    Message::Noop
                }
            },
        )
    }
}
