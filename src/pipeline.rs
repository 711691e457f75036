//! The load → interpolate → verify → save pipeline.
//!
//! ```text
//! Load ──► Interpolate ──► Verify ──┬─ pass ──► Save ──► Display
//!                                   └─ fail ──► (stop, nothing written)
//! ```
//!
//! Every stage returns an explicit result. A failed load, an unusable scale
//! factor, or a failed write each map to one [`PipelineError`] variant and
//! stop the run. A failed verification is not an error: the run ends normally
//! with [`RunSummary::output`] set to `None`.
//!
//! Progress is reported through a caller-supplied callback so the library
//! never prints on its own. The CLI formats events with
//! [`output::format_pipeline_event`](crate::output::format_pipeline_event).

use crate::display::Displayable;
use crate::imaging::{
    BackendError, ImageBackend, ImageInfo, Quality, ScaleFactor, interpolate_image, load_image,
    save_image, verify_interpolation,
};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("{0}")]
    Load(BackendError),
    #[error("{0}")]
    InvalidDimension(BackendError),
    #[error("{0}")]
    Write(BackendError),
}

impl From<BackendError> for PipelineError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Load { .. } => Self::Load(err),
            BackendError::InvalidDimension { .. } => Self::InvalidDimension(err),
            BackendError::Write { .. } => Self::Write(err),
        }
    }
}

/// What to run: input, output, and how to scale and encode.
#[derive(Debug, Clone)]
pub struct PipelineRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub scale: ScaleFactor,
    pub quality: Quality,
}

/// Progress notices emitted as each stage completes.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    Loaded { info: ImageInfo },
    Interpolated { info: ImageInfo },
    Verified { scale: ScaleFactor, passed: bool },
    Saved { path: PathBuf },
}

/// Result of a run that did not fail.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub input: PathBuf,
    /// `None` when verification failed and nothing was written.
    pub output: Option<PathBuf>,
    pub scale_factor: ScaleFactor,
    pub original: ImageInfo,
    pub interpolated: ImageInfo,
    pub verified: bool,
}

/// Run the full pipeline.
///
/// `display` is only invoked after a successful save.
pub fn run(
    backend: &impl ImageBackend,
    display: &dyn Displayable,
    request: &PipelineRequest,
    mut on_event: impl FnMut(&PipelineEvent),
) -> Result<RunSummary, PipelineError> {
    let original = load_image(backend, &request.input)?;
    let original_info = ImageInfo::of(&original);
    on_event(&PipelineEvent::Loaded {
        info: original_info,
    });

    let interpolated = interpolate_image(backend, &original, request.scale)?;
    let interpolated_info = ImageInfo::of(&interpolated);
    on_event(&PipelineEvent::Interpolated {
        info: interpolated_info,
    });

    let verified = verify_interpolation(&original, &interpolated, request.scale);
    on_event(&PipelineEvent::Verified {
        scale: request.scale,
        passed: verified,
    });

    let output = if verified {
        save_image(backend, &interpolated, &request.output, request.quality)?;
        on_event(&PipelineEvent::Saved {
            path: request.output.clone(),
        });
        display.show("Original Image", &original);
        display.show("Interpolated Image", &interpolated);
        Some(request.output.clone())
    } else {
        None
    };

    Ok(RunSummary {
        input: request.input.clone(),
        output,
        scale_factor: request.scale,
        original: original_info,
        interpolated: interpolated_info,
        verified,
    })
}
