//! # image-interpolate
//!
//! Upscale a raster image with bilinear interpolation, check that the result
//! has exactly the expected size, and save it.
//!
//! # Architecture: One Linear Pipeline
//!
//! ```text
//! 1. Load         path      →  DynamicImage
//! 2. Interpolate  image × s →  DynamicImage   (floor(side × s), bilinear)
//! 3. Verify       both + s  →  bool           (dimensions only)
//! 4. Save         image     →  file           (only if verified)
//! ```
//!
//! Each stage returns an explicit `Result`; see [`pipeline`] for how the
//! failures map to [`pipeline::PipelineError`].
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Backend trait, `image`-crate backend, dimension math, the four stages |
//! | [`pipeline`] | Orchestration, progress events, run summary |
//! | [`display`] | `Displayable` capability: headless or console |
//! | [`output`] | CLI output formatting |
//! | [`report`] | JSON run report |
//!
//! # Design Decisions
//!
//! ## Truncate, Don't Round
//!
//! Target sizes are `floor(side × scale)`. A 3px edge at 1.9x becomes 5px.
//! The resizer and the verifier share one function for this, so a
//! verification failure always means the backend produced the wrong size.
//!
//! ## Library Resampling
//!
//! Interpolation is the `image` crate's `Triangle` filter, which is bilinear
//! when upscaling. There is no custom kernel.
//!
//! # Example
//!
//! ```no_run
//! use image_interpolate::display::Headless;
//! use image_interpolate::imaging::{Quality, RustBackend, ScaleFactor};
//! use image_interpolate::pipeline::{self, PipelineRequest};
//!
//! let request = PipelineRequest {
//!     input: "photo.png".into(),
//!     output: "interpolated_image.png".into(),
//!     scale: ScaleFactor::new(4.0),
//!     quality: Quality::default(),
//! };
//! let summary = pipeline::run(&RustBackend::new(), &Headless, &request, |_| {})?;
//! assert!(summary.verified);
//! # Ok::<(), image_interpolate::pipeline::PipelineError>(())
//! ```

pub mod display;
pub mod imaging;
pub mod output;
pub mod pipeline;
pub mod report;

#[cfg(test)]
pub(crate) mod test_helpers;
