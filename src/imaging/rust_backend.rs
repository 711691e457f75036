//! Pure Rust image processing backend built on the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::ImageReader::into_dimensions` (header only) |
//! | Decode (PNG, JPEG, BMP, TIFF, WebP) | `image::ImageReader` with content sniffing |
//! | Resize | `DynamicImage::resize_exact` with `FilterType::Triangle` (bilinear) |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` with configurable quality |
//! | Encode → others | `DynamicImage::save_with_format` |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::{ResizeParams, SaveParams};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::path::Path;
use std::sync::LazyLock;

const FORMAT_CANDIDATES: &[(&str, ImageFormat)] = &[
    ("png", ImageFormat::Png),
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    ("bmp", ImageFormat::Bmp),
    ("tif", ImageFormat::Tiff),
    ("tiff", ImageFormat::Tiff),
    ("webp", ImageFormat::WebP),
];

static SUPPORTED_EXTENSIONS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    FORMAT_CANDIDATES
        .iter()
        .filter(|(_, fmt)| fmt.reading_enabled() && fmt.writing_enabled())
        .map(|(ext, _)| *ext)
        .collect()
});

/// Returns the file extensions that can be both decoded and encoded.
pub fn supported_extensions() -> &'static [&'static str] {
    &SUPPORTED_EXTENSIONS
}

/// Bilinear backend using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Open a file and detect its format from content rather than extension.
fn open_reader(
    path: &Path,
) -> Result<ImageReader<std::io::BufReader<std::fs::File>>, BackendError> {
    ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| BackendError::load(path, e))
}

/// Resolve the output format from the path's extension.
fn output_format(path: &Path) -> Result<ImageFormat, BackendError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    FORMAT_CANDIDATES
        .iter()
        .find(|(candidate, fmt)| *candidate == ext && fmt.writing_enabled())
        .map(|(_, fmt)| *fmt)
        .ok_or_else(|| {
            BackendError::write(
                path,
                format!(
                    "Unsupported output format: '{}' (supported: {})",
                    ext,
                    supported_extensions().join(", ")
                ),
            )
        })
}

/// Narrow to a layout the JPEG encoder accepts: 8-bit gray or 8-bit RGB.
///
/// Alpha is dropped and 16-bit or float samples are reduced to 8 bits.
fn jpeg_compatible(img: &DynamicImage) -> DynamicImage {
    match img {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageLuma8(_) => img.clone(),
        DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageLumaA16(_) => DynamicImage::ImageLuma8(img.to_luma8()),
        _ => DynamicImage::ImageRgb8(img.to_rgb8()),
    }
}

/// Encode as JPEG at the given quality.
fn save_jpeg(img: &DynamicImage, path: &Path, quality: u32) -> Result<(), BackendError> {
    let encodable = jpeg_compatible(img);
    let file = std::fs::File::create(path).map_err(|e| BackendError::write(path, e))?;
    let writer = std::io::BufWriter::new(file);
    let encoder = JpegEncoder::new_with_quality(writer, quality as u8);
    encodable
        .write_with_encoder(encoder)
        .map_err(|e| BackendError::write(path, format!("JPEG encode failed: {}", e)))
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = open_reader(path)?
            .into_dimensions()
            .map_err(|e| BackendError::load(path, format!("Failed to read dimensions: {}", e)))?;
        Ok(Dimensions { width, height })
    }

    fn load(&self, path: &Path) -> Result<DynamicImage, BackendError> {
        open_reader(path)?
            .decode()
            .map_err(|e| BackendError::load(path, format!("Failed to decode: {}", e)))
    }

    fn resize(
        &self,
        image: &DynamicImage,
        params: &ResizeParams,
    ) -> Result<DynamicImage, BackendError> {
        Ok(image.resize_exact(params.width, params.height, FilterType::Triangle))
    }

    fn save(&self, image: &DynamicImage, params: &SaveParams) -> Result<(), BackendError> {
        let path = params.output.as_path();
        match output_format(path)? {
            ImageFormat::Jpeg => save_jpeg(image, path, params.quality.value()),
            format => image
                .save_with_format(path, format)
                .map_err(|e| BackendError::write(path, e)),
        }
    }
}
