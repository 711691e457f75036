//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the four operations every backend must
//! support: identify, load, resize, and save.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests use the recording `MockBackend` below so pipeline logic can be
//! exercised without touching the filesystem.

use super::params::{ResizeParams, SaveParams};
use image::DynamicImage;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure of a single pipeline stage.
///
/// Each variant corresponds to exactly one stage: `Load` to the loader,
/// `InvalidDimension` to the resizer, `Write` to the saver.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Unable to load image from the path: {path} ({reason})")]
    Load { path: PathBuf, reason: String },
    #[error("Scale factor {scale} gives unusable dimensions for a {width}x{height} image")]
    InvalidDimension { width: u32, height: u32, scale: f64 },
    #[error("Unable to write image to {path} ({reason})")]
    Write { path: PathBuf, reason: String },
}

impl BackendError {
    pub(crate) fn load(path: &Path, reason: impl ToString) -> Self {
        Self::Load {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn write(path: &Path, reason: impl ToString) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}

/// Width and height of an image in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn of(image: &DynamicImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
        }
    }
}

/// Dimensions plus channel depth, as reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageInfo {
    #[serde(flatten)]
    pub dimensions: Dimensions,
    pub channels: u8,
}

impl ImageInfo {
    pub fn of(image: &DynamicImage) -> Self {
        Self {
            dimensions: Dimensions::of(image),
            channels: image.color().channel_count(),
        }
    }
}

/// Trait for image processing backends.
pub trait ImageBackend {
    /// Read image dimensions from the file header without a full decode.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Decode an image file into memory.
    fn load(&self, path: &Path) -> Result<DynamicImage, BackendError>;

    /// Resample `image` to exactly the dimensions in `params`.
    fn resize(
        &self,
        image: &DynamicImage,
        params: &ResizeParams,
    ) -> Result<DynamicImage, BackendError>;

    /// Encode and write `image`, format chosen by the output extension.
    fn save(&self, image: &DynamicImage, params: &SaveParams) -> Result<(), BackendError>;
}
