// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

use std::time::Duration;

/// Screen layout constants
pub mod ui {
    /// Height of the filter selection strip, also the panel's full offset
    pub const FILTER_SELECTION_HEIGHT: f32 = 100.0;

    /// Side length of the square bottom-bar controls (camera roll, filter toggle)
    pub const BOTTOM_CONTROL_SIZE: u32 = 47;

    /// Camera roll thumbnails are fetched at twice the control size
    pub const THUMBNAIL_TARGET_SIZE: (u32, u32) = (BOTTOM_CONTROL_SIZE * 2, BOTTOM_CONTROL_SIZE * 2);

    /// Rotation of the filter toggle icon while the panel is collapsed
    pub const COLLAPSED_ICON_ROTATION: f32 = std::f32::consts::PI;

    /// Terminal rows used by the filter strip when fully expanded
    pub const TERMINAL_STRIP_ROWS: u16 = 3;
}

/// Icon asset names
pub mod icons {
    pub const FLASH_AUTO: &str = "flash_auto";
    pub const FLASH_ON: &str = "flash_on";
    pub const FLASH_OFF: &str = "flash_off";
    pub const SWITCH_CAMERA: &str = "cam_switch";
    pub const CAMERA_ROLL_PLACEHOLDER: &str = "nonePreview";
    pub const SHOW_FILTER: &str = "show_filter";

    /// Prefix of the shutter animation frames, followed by a 5-digit index
    pub const SHUTTER_FRAME_PREFIX: &str = "LensAperture_ShapeLayer_";

    /// Number of frames in the shutter animation
    pub const SHUTTER_FRAME_COUNT: usize = 10;

    /// Asset name of a shutter animation frame
    pub fn shutter_frame(index: usize) -> String {
        format!("{}{:05}", SHUTTER_FRAME_PREFIX, index)
    }
}

/// Timing constants
pub mod timing {
    use super::Duration;

    /// Default duration of the filter panel slide
    pub const FILTER_PANEL_ANIMATION: Duration = Duration::from_millis(300);

    /// Duration of one shutter animation playthrough
    pub const SHUTTER_ANIMATION: Duration = Duration::from_millis(400);

    /// Terminal input poll interval (~60 fps)
    pub const INPUT_POLL: Duration = Duration::from_millis(16);

    /// Simulated latency before the virtual session reports it started
    pub const VIRTUAL_START_LATENCY: Duration = Duration::from_millis(120);

    /// Simulated latency of a virtual camera toggle
    pub const VIRTUAL_TOGGLE_LATENCY: Duration = Duration::from_millis(250);

    /// Simulated exposure time of a virtual photo
    pub const VIRTUAL_CAPTURE_LATENCY: Duration = Duration::from_millis(200);
}

/// Supported image file formats in the photo library
pub mod file_formats {
    pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

    /// Check if a file extension is a library image extension (case-insensitive)
    pub fn is_image_extension(ext: &str) -> bool {
        IMAGE_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}
