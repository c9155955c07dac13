// SPDX-License-Identifier: GPL-3.0-only

//! Virtual capture session
//!
//! Simulates a device with a configurable set of cameras and flash units. Frames
//! are generated test patterns; latencies run as tokio tasks so events arrive
//! asynchronously, the way a hardware session reports them.

use super::types::*;
use super::CaptureSession;
use crate::config::VirtualCameraConfig;
use crate::constants::timing;
use crate::errors::{AppError, AppResult, CaptureError};
use crate::filters::FilterType;
use futures::FutureExt;
use futures::future::BoxFuture;
use image::{DynamicImage, Rgba, RgbaImage};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::runtime::Handle;
use tracing::{debug, info, warn};

/// Preview frames are rendered small; composers scale them anyway
const PREVIEW_SIZE: (u32, u32) = (160, 120);

#[derive(Debug, Default)]
struct SessionInner {
    /// Configured camera, `None` until a successful setup
    position: Option<CameraPosition>,
    running: bool,
    starting: bool,
    toggling: bool,
    capturing: bool,
    flash_mode: FlashMode,
    effect_filter: FilterType,
    /// Bumped on stop so a pending start or toggle does not resurrect the session
    generation: u64,
    /// Advances per preview frame to animate the pattern
    tick: u32,
}

/// Simulated [`CaptureSession`]
#[derive(Clone)]
pub struct VirtualCaptureSession {
    config: VirtualCameraConfig,
    events: EventSender,
    inner: Arc<Mutex<SessionInner>>,
    runtime: Handle,
}

impl VirtualCaptureSession {
    /// Create a session reporting to `events`
    ///
    /// Must be called from within a tokio runtime; the session schedules its
    /// latencies on that runtime.
    pub fn new(config: VirtualCameraConfig, events: EventSender) -> AppResult<Self> {
        let runtime = Handle::try_current()
            .map_err(|e| AppError::Other(format!("virtual camera needs a tokio runtime: {}", e)))?;
        info!(
            front = config.front_camera,
            back = config.back_camera,
            "Creating virtual capture session"
        );
        Ok(Self {
            config,
            events,
            inner: Arc::new(Mutex::new(SessionInner::default())),
            runtime,
        })
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(events: &EventSender, event: CaptureEvent) {
        debug!(?event, "Virtual session event");
        if events.send(event).is_err() {
            debug!("Event receiver dropped");
        }
    }

    fn has_flash(&self, position: CameraPosition) -> bool {
        match position {
            CameraPosition::Front => self.config.flash_on_front,
            CameraPosition::Back => self.config.flash_on_back,
        }
    }
}

impl CaptureSession for VirtualCaptureSession {
    fn is_camera_present(&self, position: CameraPosition) -> bool {
        match position {
            CameraPosition::Front => self.config.front_camera,
            CameraPosition::Back => self.config.back_camera,
        }
    }

    fn is_more_than_one_camera_present(&self) -> bool {
        self.config.front_camera && self.config.back_camera
    }

    fn is_flash_present(&self) -> bool {
        self.lock()
            .position
            .is_some_and(|position| self.has_flash(position))
    }

    fn setup(&self, position: CameraPosition) {
        if !self.is_camera_present(position) {
            warn!(?position, "No camera at requested position, setup skipped");
            return;
        }
        info!(?position, "Virtual camera configured");
        self.lock().position = Some(position);
    }

    fn start_capture_session(&self) {
        let generation = {
            let mut inner = self.lock();
            if inner.position.is_none() || inner.running || inner.starting {
                return;
            }
            inner.starting = true;
            inner.generation
        };

        let inner = Arc::clone(&self.inner);
        let events = self.events.clone();
        self.runtime.spawn(async move {
            tokio::time::sleep(timing::VIRTUAL_START_LATENCY).await;
            {
                let mut inner = inner.lock().unwrap_or_else(PoisonError::into_inner);
                if inner.generation != generation {
                    return;
                }
                inner.starting = false;
                inner.running = true;
            }
            Self::emit(&events, CaptureEvent::SessionStarted);
        });
    }

    fn stop_capture_session(&self) {
        let was_active = {
            let mut inner = self.lock();
            let was_active = inner.running || inner.starting || inner.toggling;
            inner.running = false;
            inner.starting = false;
            inner.toggling = false;
            inner.generation += 1;
            was_active
        };
        if was_active {
            Self::emit(&self.events, CaptureEvent::SessionStopped);
        }
    }

    fn select_next_flash_mode(&self) {
        if !self.is_flash_present() {
            return;
        }
        let mode = {
            let mut inner = self.lock();
            inner.flash_mode = inner.flash_mode.next();
            inner.flash_mode
        };
        Self::emit(&self.events, CaptureEvent::DidSetFlashMode(mode));
    }

    fn toggle_camera_position(&self) {
        let (next, generation) = {
            let mut inner = self.lock();
            let Some(current) = inner.position else {
                return;
            };
            if !inner.running || inner.toggling {
                return;
            }
            let next = current.opposite();
            if !self.is_camera_present(next) {
                return;
            }
            inner.toggling = true;
            (next, inner.generation)
        };

        Self::emit(&self.events, CaptureEvent::WillToggleCamera);

        let inner = Arc::clone(&self.inner);
        let events = self.events.clone();
        self.runtime.spawn(async move {
            tokio::time::sleep(timing::VIRTUAL_TOGGLE_LATENCY).await;
            {
                let mut inner = inner.lock().unwrap_or_else(PoisonError::into_inner);
                if inner.generation != generation {
                    return;
                }
                inner.position = Some(next);
                inner.toggling = false;
                inner.running = true;
            }
            info!(position = ?next, "Virtual camera toggled");
            Self::emit(&events, CaptureEvent::DidToggleCamera);
            Self::emit(&events, CaptureEvent::SessionStarted);
        });
    }

    fn take_photo(&self) -> BoxFuture<'static, CaptureResult<Photo>> {
        let snapshot = {
            let mut inner = self.lock();
            let position = inner.position;
            match position {
                _ if inner.capturing => Err(CaptureError::Busy),
                Some(position) if inner.running => {
                    inner.capturing = true;
                    Ok((position, inner.tick))
                }
                _ => Err(CaptureError::SessionNotRunning),
            }
        };

        let (position, tick) = match snapshot {
            Ok(snapshot) => snapshot,
            Err(err) => return futures::future::ready(Err(err)).boxed(),
        };

        let inner = Arc::clone(&self.inner);
        let (width, height) = (self.config.width, self.config.height);
        async move {
            tokio::time::sleep(timing::VIRTUAL_CAPTURE_LATENCY).await;
            let image = tokio::task::spawn_blocking(move || {
                render_test_pattern(width, height, position, tick)
            })
            .await
            .map_err(|e| CaptureError::CaptureFailed(e.to_string()));

            inner
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .capturing = false;

            let image = image?;
            info!(?position, width, height, "Virtual photo captured");
            Ok(Arc::new(DynamicImage::ImageRgba8(image)))
        }
        .boxed()
    }

    fn effect_filter(&self) -> FilterType {
        self.lock().effect_filter
    }

    fn set_effect_filter(&self, filter: FilterType) {
        debug!(?filter, "Virtual session filter set");
        self.lock().effect_filter = filter;
    }

    fn latest_preview(&self) -> Option<Arc<RgbaImage>> {
        let (position, tick) = {
            let mut inner = self.lock();
            if !inner.running {
                return None;
            }
            inner.tick = inner.tick.wrapping_add(1);
            (inner.position?, inner.tick)
        };
        let (width, height) = PREVIEW_SIZE;
        Some(Arc::new(render_test_pattern(width, height, position, tick)))
    }
}

/// Diagonal gradient that drifts with `tick`; the back camera renders cool, the front warm
fn render_test_pattern(width: u32, height: u32, position: CameraPosition, tick: u32) -> RgbaImage {
    let shift = tick % 256;
    RgbaImage::from_fn(width, height, |x, y| {
        let u = (x * 255 / width.max(1) + shift) % 256;
        let v = y * 255 / height.max(1);
        let (r, g, b) = match position {
            CameraPosition::Back => (v / 3, (u + v) / 2, u),
            CameraPosition::Front => (u, (u + v) / 2, v / 3),
        };
        Rgba([r as u8, g as u8, b as u8, 255])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn session(config: VirtualCameraConfig) -> (VirtualCaptureSession, mpsc::UnboundedReceiver<CaptureEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (VirtualCaptureSession::new(config, tx).unwrap(), rx)
    }

    #[tokio::test]
    async fn test_start_reports_session_started() {
        let (session, mut rx) = session(VirtualCameraConfig::default());
        session.setup(CameraPosition::Back);
        session.start_capture_session();
        assert_eq!(rx.recv().await, Some(CaptureEvent::SessionStarted));
    }

    #[tokio::test]
    async fn test_start_without_setup_is_silent() {
        let (session, mut rx) = session(VirtualCameraConfig::default());
        session.start_capture_session();
        tokio::time::sleep(timing::VIRTUAL_START_LATENCY * 2).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_toggle_event_order() {
        let (session, mut rx) = session(VirtualCameraConfig::default());
        session.setup(CameraPosition::Back);
        session.start_capture_session();
        assert_eq!(rx.recv().await, Some(CaptureEvent::SessionStarted));

        session.toggle_camera_position();
        assert_eq!(rx.recv().await, Some(CaptureEvent::WillToggleCamera));
        assert_eq!(rx.recv().await, Some(CaptureEvent::DidToggleCamera));
        assert_eq!(rx.recv().await, Some(CaptureEvent::SessionStarted));
        // Front camera has no flash in the default config
        assert!(!session.is_flash_present());
    }

    #[tokio::test]
    async fn test_take_photo_requires_running_session() {
        let (session, _rx) = session(VirtualCameraConfig::default());
        session.setup(CameraPosition::Back);
        let result = session.take_photo().await;
        assert_eq!(result.err(), Some(CaptureError::SessionNotRunning));
    }

    #[tokio::test]
    async fn test_take_photo_uses_configured_size() {
        let config = VirtualCameraConfig {
            width: 32,
            height: 24,
            ..Default::default()
        };
        let (session, mut rx) = session(config);
        session.setup(CameraPosition::Back);
        session.start_capture_session();
        rx.recv().await;

        let photo = session.take_photo().await.unwrap();
        assert_eq!((photo.width(), photo.height()), (32, 24));
    }

    #[tokio::test]
    async fn test_flash_cycle_only_with_flash() {
        let config = VirtualCameraConfig {
            flash_on_back: false,
            ..Default::default()
        };
        let (session, mut rx) = session(config);
        session.setup(CameraPosition::Back);
        session.select_next_flash_mode();
        assert!(rx.try_recv().is_err());
    }
}
