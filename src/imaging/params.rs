//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the high-level [`operations`](super::operations) module
//! (which decides the target size and output) and the
//! [`backend`](super::backend) (which does the actual pixel work).
//!
//! ## Types
//!
//! - [`ScaleFactor`]: Uniform multiplier for both dimensions (default 2).
//! - [`Quality`]: Lossy encoding quality (1–100, default 90). Clamped on construction.
//! - [`ResizeParams`]: Exact target dimensions for a resample.
//! - [`SaveParams`]: Output path and encoding quality.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Multiplier applied identically to width and height.
///
/// Not validated on construction: unusable values are rejected by the resizer
/// once the source dimensions are known.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct ScaleFactor(pub f64);

impl ScaleFactor {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self(2.0)
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(90)
    }
}

/// Parameters for a resample to exact dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeParams {
    pub width: u32,
    pub height: u32,
}

/// Parameters for writing an image to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveParams {
    pub output: PathBuf,
    /// Only used by lossy encoders (JPEG).
    pub quality: Quality,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_clamps_to_valid_range() {
        assert_eq!(Quality::new(0).value(), 1);
        assert_eq!(Quality::new(50).value(), 50);
        assert_eq!(Quality::new(150).value(), 100);
    }

    #[test]
    fn quality_default_is_90() {
        assert_eq!(Quality::default().value(), 90);
    }

    #[test]
    fn scale_factor_default_is_two() {
        assert_eq!(ScaleFactor::default().value(), 2.0);
    }

    #[test]
    fn scale_factor_displays_like_a_plain_number() {
        assert_eq!(ScaleFactor::new(4.0).to_string(), "4");
        assert_eq!(ScaleFactor::new(1.5).to_string(), "1.5");
    }

    #[test]
    fn scale_factor_is_not_validated_on_construction() {
        assert_eq!(ScaleFactor::new(-1.0).value(), -1.0);
        assert!(ScaleFactor::new(f64::NAN).value().is_nan());
    }
}
