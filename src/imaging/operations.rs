//! High-level image operations.
//!
//! These functions combine calculations with backend execution. They are the
//! four pipeline stages: load, interpolate, verify, and save.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::calculations::{buffer_bytes, matches_scaled, scaled_dimensions};
use super::params::{Quality, ResizeParams, SaveParams, ScaleFactor};
use image::{DynamicImage, Limits};
use std::path::Path;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Load an image from disk.
pub fn load_image(backend: &impl ImageBackend, path: &Path) -> Result<DynamicImage> {
    backend.load(path)
}

/// Plan a resize without executing it.
///
/// Fails with [`BackendError::InvalidDimension`] when the scale cannot be
/// applied, truncates either side to zero, or the output buffer would exceed
/// the `image` crate's default allocation limit.
pub fn plan_resize(
    source: Dimensions,
    bytes_per_pixel: u8,
    scale: ScaleFactor,
) -> Result<ResizeParams> {
    let invalid = || BackendError::InvalidDimension {
        width: source.width,
        height: source.height,
        scale: scale.value(),
    };

    let target = scaled_dimensions(source, scale.value()).ok_or_else(invalid)?;
    if target.width == 0 || target.height == 0 {
        return Err(invalid());
    }

    let max_alloc = Limits::default().max_alloc.unwrap_or(u64::MAX);
    match buffer_bytes(target, bytes_per_pixel) {
        Some(bytes) if bytes <= max_alloc => {}
        _ => return Err(invalid()),
    }

    Ok(ResizeParams {
        width: target.width,
        height: target.height,
    })
}

/// Upsample (or downsample) an image by `scale` with bilinear interpolation.
///
/// The result is `floor(side × scale)` on each side, with the same channel layout.
pub fn interpolate_image(
    backend: &impl ImageBackend,
    image: &DynamicImage,
    scale: ScaleFactor,
) -> Result<DynamicImage> {
    let params = plan_resize(
        Dimensions::of(image),
        image.color().bytes_per_pixel(),
        scale,
    )?;
    backend.resize(image, &params)
}

/// Check that `resized` has the dimensions `original` scaled by `scale` should have.
///
/// Only dimensions are compared, never pixel content.
pub fn verify_interpolation(
    original: &DynamicImage,
    resized: &DynamicImage,
    scale: ScaleFactor,
) -> bool {
    matches_scaled(
        Dimensions::of(original),
        Dimensions::of(resized),
        scale.value(),
    )
}

/// Same check as [`verify_interpolation`], for two files on disk.
///
/// Reads only the image headers.
pub fn verify_files(
    backend: &impl ImageBackend,
    original: &Path,
    resized: &Path,
    scale: ScaleFactor,
) -> Result<bool> {
    let original_dims = backend.identify(original)?;
    let resized_dims = backend.identify(resized)?;
    Ok(matches_scaled(original_dims, resized_dims, scale.value()))
}

/// Write an image to `output`, format chosen by extension.
pub fn save_image(
    backend: &impl ImageBackend,
    image: &DynamicImage,
    output: &Path,
    quality: Quality,
) -> Result<()> {
    backend.save(
        image,
        &SaveParams {
            output: output.to_path_buf(),
            quality,
        },
    )
}
