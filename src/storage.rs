// SPDX-License-Identifier: GPL-3.0-only

//! Photo library
//!
//! The screen reads the newest photo for the camera roll button and writes
//! edited photos back. [`DirectoryPhotoLibrary`] keeps the library as a plain
//! folder of JPEG/PNG files.

use crate::constants::file_formats;
use crate::errors::{LibraryError, LibraryResult};
use futures::FutureExt;
use futures::future::BoxFuture;
use image::{DynamicImage, RgbaImage};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;
use tracing::{debug, info};

/// Downscaled preview of a library photo
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub image: Arc<RgbaImage>,
    /// File the thumbnail was generated from
    pub source: PathBuf,
}

/// Photo library contract
pub trait PhotoLibrary: Send + Sync {
    /// Newest photo scaled to fill `target` (width, height), `None` for an empty library
    fn latest_thumbnail(
        &self,
        target: (u32, u32),
    ) -> BoxFuture<'static, LibraryResult<Option<Thumbnail>>>;

    /// Persist a photo, returning where it was written
    fn save(&self, image: Arc<DynamicImage>) -> BoxFuture<'static, LibraryResult<PathBuf>>;
}

/// Photo library backed by a directory
#[derive(Debug, Clone)]
pub struct DirectoryPhotoLibrary {
    dir: PathBuf,
}

impl DirectoryPhotoLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl PhotoLibrary for DirectoryPhotoLibrary {
    fn latest_thumbnail(
        &self,
        target: (u32, u32),
    ) -> BoxFuture<'static, LibraryResult<Option<Thumbnail>>> {
        let dir = self.dir.clone();
        async move {
            tokio::task::spawn_blocking(move || load_latest_thumbnail(&dir, target))
                .await
                .map_err(|e| LibraryError::Io(e.to_string()))?
        }
        .boxed()
    }

    fn save(&self, image: Arc<DynamicImage>) -> BoxFuture<'static, LibraryResult<PathBuf>> {
        let dir = self.dir.clone();
        async move {
            tokio::task::spawn_blocking(move || save_photo(&dir, &image))
                .await
                .map_err(|e| LibraryError::Io(e.to_string()))?
        }
        .boxed()
    }
}

/// Most recently modified library image, ties broken by file name
pub fn latest_photo(dir: &Path) -> LibraryResult<Option<PathBuf>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let latest = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(file_formats::is_image_extension)
        })
        .map(|path| {
            let modified = std::fs::metadata(&path)
                .and_then(|m| m.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            (modified, path)
        })
        .max();

    Ok(latest.map(|(_, path)| path))
}

fn load_latest_thumbnail(dir: &Path, target: (u32, u32)) -> LibraryResult<Option<Thumbnail>> {
    let Some(path) = latest_photo(dir)? else {
        debug!(dir = %dir.display(), "Photo library is empty");
        return Ok(None);
    };

    debug!(path = %path.display(), "Loading latest thumbnail");
    let image = image::open(&path)?;
    let (width, height) = target;
    let thumbnail = image
        .resize_to_fill(width, height, image::imageops::FilterType::Triangle)
        .to_rgba8();

    Ok(Some(Thumbnail {
        image: Arc::new(thumbnail),
        source: path,
    }))
}

fn save_photo(dir: &Path, image: &DynamicImage) -> LibraryResult<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S_%3f");
    let mut path = dir.join(format!("IMG_{}.jpg", timestamp));
    let mut suffix = 1;
    while path.exists() {
        path = dir.join(format!("IMG_{}_{}.jpg", timestamp, suffix));
        suffix += 1;
    }

    image
        .to_rgb8()
        .save_with_format(&path, image::ImageFormat::Jpeg)?;
    info!(path = %path.display(), "Photo saved to library");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32) -> Arc<DynamicImage> {
        Arc::new(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            image::Rgba([200, 40, 40, 255]),
        )))
    }

    #[tokio::test]
    async fn test_empty_library_has_no_thumbnail() {
        let dir = tempfile::tempdir().unwrap();
        let library = DirectoryPhotoLibrary::new(dir.path().join("missing"));
        assert!(library.latest_thumbnail((94, 94)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_saved_photo_becomes_thumbnail() {
        let dir = tempfile::tempdir().unwrap();
        let library = DirectoryPhotoLibrary::new(dir.path());

        let saved = library.save(solid(300, 200)).await.unwrap();
        let thumbnail = library.latest_thumbnail((94, 94)).await.unwrap().unwrap();

        assert_eq!(thumbnail.source, saved);
        assert_eq!(thumbnail.image.dimensions(), (94, 94));
    }

    #[test]
    fn test_latest_photo_ignores_other_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"hello").unwrap();
        assert!(latest_photo(dir.path()).unwrap().is_none());
    }
}
