// SPDX-License-Identifier: GPL-3.0-only

//! Camera screen state

use crate::app::editor::{Editor, EditorOutcome};
use crate::app::filter_panel::FilterPanel;
use crate::app::filter_strip::FilterStrip;
use crate::app::picker::{MediaPicker, PickerOutcome};
use crate::app::shutter::ShutterAnimation;
use crate::assets::AssetResolver;
use crate::backends::camera::{
    CameraPosition, CaptureEvent, CaptureResult, CaptureSession, FlashMode, Photo,
};
use crate::config::Config;
use crate::constants::icons;
use crate::filters::FilterType;
use crate::storage::{PhotoLibrary, Thumbnail};
use std::path::PathBuf;
use std::sync::Arc;

/// Receives the captured or picked photo instead of the editor
pub type CompletionHandler = Box<dyn FnMut(Option<Photo>) + Send>;

/// The screen's view of the capture session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Starting,
    Running,
    /// Between a toggle request and `DidToggleCamera`
    Toggling,
    Stopped,
}

impl SessionState {
    pub fn on_start_requested(self) -> Self {
        match self {
            SessionState::Idle | SessionState::Stopped => SessionState::Starting,
            other => other,
        }
    }

    pub fn on_stop_requested(self) -> Self {
        SessionState::Stopped
    }

    pub fn on_toggle_requested(self) -> Self {
        match self {
            SessionState::Running => SessionState::Toggling,
            other => other,
        }
    }

    /// Apply a session event
    ///
    /// A stop reported inside the toggle window belongs to the toggle and does
    /// not end it.
    pub fn on_event(self, event: CaptureEvent) -> Self {
        use CaptureEvent::*;
        use SessionState::*;

        match (self, event) {
            (_, SessionStarted) => Running,
            (Toggling, SessionStopped) => Toggling,
            (_, SessionStopped) => Stopped,
            (Running | Toggling, WillToggleCamera) => Toggling,
            (Toggling, DidToggleCamera) => Running,
            (state, WillToggleCamera | DidToggleCamera | DidSetFlashMode(_)) => state,
        }
    }

    pub fn is_running(self) -> bool {
        self == SessionState::Running
    }
}

/// Buttons gated by the shared enablement flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Flash,
    SwitchCamera,
    CameraRoll,
    Shutter,
    FilterToggle,
}

impl Control {
    pub const ALL: [Control; 5] = [
        Control::Flash,
        Control::SwitchCamera,
        Control::CameraRoll,
        Control::Shutter,
        Control::FilterToggle,
    ];
}

/// Enablement, visibility and icon state of the screen's buttons
///
/// A single flag enables or disables every control at once.
#[derive(Debug, Clone)]
pub struct Controls {
    enabled: bool,
    flash_hidden: bool,
    switch_camera_hidden: bool,
    flash_mode: FlashMode,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            enabled: true,
            flash_hidden: false,
            switch_camera_hidden: false,
            flash_mode: FlashMode::Auto,
        }
    }
}

impl Controls {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_hidden(&self, control: Control) -> bool {
        match control {
            Control::Flash => self.flash_hidden,
            Control::SwitchCamera => self.switch_camera_hidden,
            Control::CameraRoll | Control::Shutter | Control::FilterToggle => false,
        }
    }

    /// Whether a tap on `control` would be acted on
    pub fn accepts_input(&self, control: Control) -> bool {
        self.enabled && !self.is_hidden(control)
    }

    pub(crate) fn set_flash_hidden(&mut self, hidden: bool) {
        self.flash_hidden = hidden;
    }

    pub(crate) fn set_switch_camera_hidden(&mut self, hidden: bool) {
        self.switch_camera_hidden = hidden;
    }

    pub fn flash_mode(&self) -> FlashMode {
        self.flash_mode
    }

    pub(crate) fn set_flash_mode(&mut self, mode: FlashMode) {
        self.flash_mode = mode;
    }

    pub fn flash_icon(&self) -> &'static str {
        match self.flash_mode {
            FlashMode::Auto => icons::FLASH_AUTO,
            FlashMode::On => icons::FLASH_ON,
            FlashMode::Off => icons::FLASH_OFF,
        }
    }
}

/// What currently covers the camera screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presentation {
    #[default]
    None,
    /// The camera roll picker is open
    CameraRoll,
    /// The editor is open with this initial preset
    Editor { initial_filter: FilterType },
}

/// Collaborators the screen talks to
#[derive(Clone)]
pub struct Collaborators {
    pub session: Option<Arc<dyn CaptureSession>>,
    pub library: Arc<dyn PhotoLibrary>,
    pub picker: Arc<dyn MediaPicker>,
    pub editor: Arc<dyn Editor>,
    pub assets: Arc<dyn AssetResolver>,
}

/// The camera screen model
pub struct CameraScreen {
    pub config: Config,
    pub(crate) collaborators: Collaborators,
    /// Caller-supplied hand-off; when unset photos go to the editor
    pub(crate) completion: Option<CompletionHandler>,
    /// Set once a photo has left the screen for this presentation
    pub(crate) handed_off: bool,
    pub session_state: SessionState,
    pub camera_position: CameraPosition,
    pub controls: Controls,
    pub filter_panel: FilterPanel,
    pub filter_strip: FilterStrip,
    pub shutter: ShutterAnimation,
    /// Whether a photo capture is in flight
    pub is_capturing: bool,
    pub presentation: Presentation,
    /// Newest library photo for the camera roll button
    pub camera_roll_thumbnail: Option<Thumbnail>,
    /// Status line for the composer (errors, save confirmations)
    pub status: Option<StatusMessage>,
}

/// Short-lived notice shown by the composer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    CaptureFailed(String),
    Saved(PathBuf),
}

/// Messages emitted by user gestures, the capture session, and finished tasks.
///
/// - **Lifecycle**: the screen became visible
/// - **Gestures**: taps on the screen's controls and the filter strip
/// - **Session**: events reported by the capture session
/// - **Results**: outputs of asynchronous tasks
#[derive(Debug, Clone)]
pub enum Message {
    // ===== Lifecycle =====
    /// Screen became visible (first show or after a dismissal)
    Appeared,

    // ===== Gestures =====
    ChangeFlash,
    SwitchCamera,
    ShowCameraRoll,
    TakePhoto,
    ToggleFilters,
    /// Move the filter strip cursor
    MoveFilterCursor(isize),
    SelectFilter(FilterType),

    // ===== Session =====
    Session(CaptureEvent),

    // ===== Results =====
    PhotoCaptured(CaptureResult<Photo>),
    CameraRollFinished(PickerOutcome),
    EditorFinished(EditorOutcome),
    PhotoSaved(Result<PathBuf, String>),
    ThumbnailLoaded(Option<Thumbnail>),

    Noop,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_lifecycle() {
        let state = SessionState::Idle.on_start_requested();
        assert_eq!(state, SessionState::Starting);
        let state = state.on_event(CaptureEvent::SessionStarted);
        assert!(state.is_running());
        assert_eq!(state.on_stop_requested(), SessionState::Stopped);
    }

    #[test]
    fn test_toggle_window() {
        let state = SessionState::Running.on_toggle_requested();
        assert_eq!(state, SessionState::Toggling);

        let state = state
            .on_event(CaptureEvent::WillToggleCamera)
            .on_event(CaptureEvent::SessionStopped);
        assert_eq!(state, SessionState::Toggling);

        let state = state.on_event(CaptureEvent::DidToggleCamera);
        assert_eq!(state, SessionState::Running);
    }

    #[test]
    fn test_stop_outside_toggle() {
        let state = SessionState::Running.on_event(CaptureEvent::SessionStopped);
        assert_eq!(state, SessionState::Stopped);
        assert_eq!(state.on_start_requested(), SessionState::Starting);
    }

    #[test]
    fn test_flash_event_keeps_state() {
        let state = SessionState::Starting.on_event(CaptureEvent::DidSetFlashMode(FlashMode::On));
        assert_eq!(state, SessionState::Starting);
    }

    #[test]
    fn test_hidden_control_never_accepts_input() {
        let mut controls = Controls::default();
        controls.set_flash_hidden(true);
        assert!(!controls.accepts_input(Control::Flash));
        assert!(controls.accepts_input(Control::Shutter));

        controls.set_enabled(false);
        assert!(Control::ALL.iter().all(|c| !controls.accepts_input(*c)));
    }

    #[test]
    fn test_flash_icon_follows_mode() {
        let mut controls = Controls::default();
        assert_eq!(controls.flash_icon(), icons::FLASH_AUTO);
        controls.set_flash_mode(FlashMode::On);
        assert_eq!(controls.flash_icon(), icons::FLASH_ON);
        controls.set_flash_mode(FlashMode::Off);
        assert_eq!(controls.flash_icon(), icons::FLASH_OFF);
    }
}
