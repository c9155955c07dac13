// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the camera screen

use std::fmt;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for photo library operations
pub type LibraryResult<T> = Result<T, LibraryError>;

/// Main application error type
#[derive(Debug, Clone)]
pub enum AppError {
    /// Capture session errors
    Capture(CaptureError),
    /// Photo library errors
    Library(LibraryError),
    /// Configuration errors
    Config(String),
    /// Storage/filesystem errors
    Storage(String),
    /// Generic error with message
    Other(String),
}

/// Capture session errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// No camera at any position
    NoCameraFound,
    /// Photo requested while the session is not running
    SessionNotRunning,
    /// Another capture is still in flight
    Busy,
    /// The device reported a failure
    CaptureFailed(String),
}

/// Photo library errors
#[derive(Debug, Clone)]
pub enum LibraryError {
    /// Reading or writing the library directory failed
    Io(String),
    /// An image in the library could not be decoded
    Decode(String),
    /// A photo could not be encoded for saving
    Encode(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Capture(e) => write!(f, "Capture error: {}", e),
            AppError::Library(e) => write!(f, "Photo library error: {}", e),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Storage(msg) => write!(f, "Storage error: {}", msg),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::NoCameraFound => write!(f, "No camera found"),
            CaptureError::SessionNotRunning => write!(f, "Capture session is not running"),
            CaptureError::Busy => write!(f, "A capture is already in progress"),
            CaptureError::CaptureFailed(msg) => write!(f, "Capture failed: {}", msg),
        }
    }
}

impl fmt::Display for LibraryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Io(msg) => write!(f, "I/O error: {}", msg),
            LibraryError::Decode(msg) => write!(f, "Decoding failed: {}", msg),
            LibraryError::Encode(msg) => write!(f, "Encoding failed: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for CaptureError {}
impl std::error::Error for LibraryError {}

impl From<CaptureError> for AppError {
    fn from(err: CaptureError) -> Self {
        AppError::Capture(err)
    }
}

impl From<LibraryError> for AppError {
    fn from(err: LibraryError) -> Self {
        AppError::Library(err)
    }
}

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Other(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Other(msg.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::Io(err.to_string())
    }
}

impl From<image::ImageError> for LibraryError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::Encoding(e) => LibraryError::Encode(e.to_string()),
            image::ImageError::IoError(e) => LibraryError::Io(e.to_string()),
            other => LibraryError::Decode(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_error_wraps_into_app_error() {
        let err: AppError = CaptureError::SessionNotRunning.into();
        assert_eq!(
            err.to_string(),
            "Capture error: Capture session is not running"
        );
    }

    #[test]
    fn test_io_error_maps_to_library_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: LibraryError = io.into();
        assert!(matches!(err, LibraryError::Io(_)));
    }
}
