// SPDX-License-Identifier: GPL-3.0-only

//! Camera roll picker collaborator

use crate::backends::camera::Photo;
use crate::constants::file_formats::IMAGE_EXTENSIONS;
use futures::FutureExt;
use futures::future::BoxFuture;
use std::sync::Arc;
use tracing::{info, warn};

/// What the picker is allowed to return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerRequest {
    /// Only still images are offered
    pub images_only: bool,
    /// The picker must not crop or edit the selection
    pub allows_editing: bool,
}

impl Default for PickerRequest {
    fn default() -> Self {
        Self {
            images_only: true,
            allows_editing: false,
        }
    }
}

#[derive(Debug, Clone)]
pub enum PickerOutcome {
    Picked(Photo),
    Cancelled,
}

/// Presents a media picker and resolves once the user picks or cancels
pub trait MediaPicker: Send + Sync {
    fn pick_image(&self, request: PickerRequest) -> BoxFuture<'static, PickerOutcome>;
}

/// Picker backed by the desktop file dialog
#[derive(Debug, Clone, Default)]
pub struct FileDialogPicker {
    start_dir: Option<std::path::PathBuf>,
}

impl FileDialogPicker {
    pub fn new(start_dir: Option<std::path::PathBuf>) -> Self {
        Self { start_dir }
    }
}

impl MediaPicker for FileDialogPicker {
    fn pick_image(&self, request: PickerRequest) -> BoxFuture<'static, PickerOutcome> {
        let start_dir = self.start_dir.clone();
        async move {
            let mut dialog = rfd::AsyncFileDialog::new();
            if request.images_only {
                dialog = dialog.add_filter("Images", IMAGE_EXTENSIONS);
            }
            if let Some(dir) = start_dir {
                dialog = dialog.set_directory(dir);
            }

            let Some(handle) = dialog.pick_file().await else {
                info!("Camera roll picker cancelled");
                return PickerOutcome::Cancelled;
            };

            let path = handle.path().to_path_buf();
            match tokio::task::spawn_blocking(move || image::open(&path)).await {
                Ok(Ok(image)) => PickerOutcome::Picked(Arc::new(image)),
                Ok(Err(e)) => {
                    warn!(error = %e, "Picked file is not a readable image");
                    PickerOutcome::Cancelled
                }
                Err(e) => {
                    warn!(error = %e, "Image decode task failed");
                    PickerOutcome::Cancelled
                }
            }
        }
        .boxed()
    }
}
