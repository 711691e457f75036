//! JSON run report.
//!
//! Written by `run --report <PATH>` after a run that did not fail, whether or
//! not verification passed:
//!
//! ```json
//! {
//!   "input": "photo.png",
//!   "output": "interpolated_image.png",
//!   "scale_factor": 4.0,
//!   "original": { "width": 200, "height": 100, "channels": 3 },
//!   "interpolated": { "width": 800, "height": 400, "channels": 3 },
//!   "verified": true
//! }
//! ```

use crate::pipeline::RunSummary;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn render_report(summary: &RunSummary) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(summary)?)
}

pub fn write_report(summary: &RunSummary, path: &Path) -> Result<(), ReportError> {
    let json = render_report(summary)?;
    std::fs::write(path, json)?;
    Ok(())
}
