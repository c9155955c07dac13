// SPDX-License-Identifier: GPL-3.0-only

//! Camera screen
//!
//! This module contains the screen state, message handling, and the pieces the
//! screen is composed of.
//!
//! # Architecture
//!
//! - `state`: Screen state types (CameraScreen, Message, SessionState, etc.)
//! - `update`: Message dispatch
//! - `handlers`: Message handlers by functional domain
//! - `task`: Asynchronous work returned from `update`
//! - `filter_panel`: Animated filter panel toggle
//! - `filter_strip`: Filter selection strip and preset provider
//! - `shutter`: Shutter button animation
//! - `picker`: Camera roll picker collaborator
//! - `editor`: Editor collaborator
//!
//! # Main Types
//!
//! - `CameraScreen`: Screen state with its collaborators
//! - `Message`: All user gestures, session events and task results

pub mod editor;
pub mod filter_panel;
pub mod filter_strip;
mod handlers;
pub mod picker;
pub mod shutter;
mod state;
pub mod task;
mod update;

pub use state::{
    CameraScreen, Collaborators, CompletionHandler, Control, Controls, Message, Presentation,
    SessionState, StatusMessage,
};
pub use task::Task;

use crate::assets::AssetResolver;
use crate::backends::camera::{CameraPosition, CaptureSession};
use crate::config::Config;
use crate::constants::ui;
use filter_panel::FilterPanel;
use filter_strip::{FilterStrip, SessionPresetProvider};
use shutter::ShutterAnimation;
use std::sync::Arc;
use tracing::{info, warn};

impl CameraScreen {
    /// Build the screen and set up the capture session
    ///
    /// Chooses the preferred camera when present, otherwise the other one, and
    /// hides the switch and flash buttons the hardware cannot back.
    pub fn new(config: Config, collaborators: Collaborators) -> Self {
        let provider = SessionPresetProvider::new(collaborators.session.clone());
        let filter_panel = FilterPanel::new(
            ui::FILTER_SELECTION_HEIGHT,
            config.filter_panel_animation(),
        );
        let camera_position = if config.prefer_back_camera {
            CameraPosition::Back
        } else {
            CameraPosition::Front
        };

        let mut screen = Self {
            config,
            collaborators,
            completion: None,
            handed_off: false,
            session_state: SessionState::default(),
            camera_position,
            controls: Controls::default(),
            filter_panel,
            filter_strip: FilterStrip::new(Box::new(provider)),
            shutter: ShutterAnimation::default(),
            is_capturing: false,
            presentation: Presentation::None,
            camera_roll_thumbnail: None,
            status: None,
        };
        screen.initialize();
        screen
    }

    /// Hand photos to `completion` instead of presenting the editor
    pub fn with_completion(mut self, completion: CompletionHandler) -> Self {
        self.completion = Some(completion);
        self
    }

    fn initialize(&mut self) {
        let Some(session) = self.collaborators.session.clone() else {
            warn!("No capture session available");
            self.controls.set_switch_camera_hidden(true);
            self.controls.set_flash_hidden(true);
            return;
        };

        let preferred = self.camera_position;
        let position = if session.is_camera_present(preferred) {
            preferred
        } else if session.is_camera_present(preferred.opposite()) {
            preferred.opposite()
        } else {
            warn!("No camera found");
            self.controls.set_switch_camera_hidden(true);
            self.controls.set_flash_hidden(true);
            return;
        };

        session.setup(position);
        self.camera_position = position;
        self.controls
            .set_switch_camera_hidden(!session.is_more_than_one_camera_present());
        self.controls.set_flash_hidden(!session.is_flash_present());

        info!(
            ?position,
            switch_hidden = self.controls.is_hidden(Control::SwitchCamera),
            flash_hidden = self.controls.is_hidden(Control::Flash),
            "Camera screen initialized"
        );
    }

    /// Work to run each time the screen becomes visible
    pub fn on_appear(&mut self) -> Task<Message> {
        self.update(Message::Appeared)
    }

    /// Enable or disable every gated control, the filter strip included
    pub(crate) fn set_controls_enabled(&mut self, enabled: bool) {
        self.controls.set_enabled(enabled);
        self.filter_strip.set_interaction_enabled(enabled);
    }

    pub fn session(&self) -> Option<&Arc<dyn CaptureSession>> {
        self.collaborators.session.as_ref()
    }

    pub fn assets(&self) -> &Arc<dyn AssetResolver> {
        &self.collaborators.assets
    }
}
