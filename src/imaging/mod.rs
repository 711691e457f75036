//! Image processing in pure Rust via the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `ImageReader::into_dimensions` |
//! | **Load** | `ImageReader` with content sniffing |
//! | **Interpolate** | `resize_exact` + `FilterType::Triangle` (bilinear) |
//! | **Save** | extension-driven encoder, JPEG quality configurable |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend, ImageInfo};
pub use operations::{
    interpolate_image, load_image, plan_resize, save_image, verify_files, verify_interpolation,
};
pub use params::{Quality, ResizeParams, SaveParams, ScaleFactor};
pub use rust_backend::{RustBackend, supported_extensions};
