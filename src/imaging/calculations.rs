//! Pure calculation functions for scaled dimensions.
//!
//! All functions here are pure and testable without any I/O or images. The
//! resizer and the verifier both go through [`scaled_dimensions`], so the two
//! can never disagree on the truncation rule.

use super::backend::Dimensions;

/// Scale one dimension, truncating toward zero.
///
/// Returns `None` when the product is not a finite, non-negative value that
/// fits in a `u32`.
pub fn scale_dimension(original: u32, scale: f64) -> Option<u32> {
    let scaled = f64::from(original) * scale;
    if !scaled.is_finite() || scaled < 0.0 || scaled >= f64::from(u32::MAX) + 1.0 {
        return None;
    }
    Some(scaled.trunc() as u32)
}

/// Scale both dimensions by the same factor.
///
/// # Arguments
/// * `source` - Original image dimensions
/// * `scale` - Uniform scale factor
///
/// # Returns
/// * `Some(dims)` - `floor(source × scale)` for each side (may contain zeros)
/// * `None` - the scale cannot be applied at all (NaN, infinite, negative, overflow)
pub fn scaled_dimensions(source: Dimensions, scale: f64) -> Option<Dimensions> {
    Some(Dimensions {
        width: scale_dimension(source.width, scale)?,
        height: scale_dimension(source.height, scale)?,
    })
}

/// Size in bytes of a pixel buffer with the given dimensions.
///
/// Returns `None` if the product overflows a `u64`.
pub fn buffer_bytes(dims: Dimensions, bytes_per_pixel: u8) -> Option<u64> {
    u64::from(dims.width)
        .checked_mul(u64::from(dims.height))?
        .checked_mul(u64::from(bytes_per_pixel))
}

/// Whether `resized` has exactly the dimensions `source` scaled by `scale` should have.
pub fn matches_scaled(source: Dimensions, resized: Dimensions, scale: f64) -> bool {
    scaled_dimensions(source, scale) == Some(resized)
}
