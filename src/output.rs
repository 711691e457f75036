//! CLI output formatting.
//!
//! Each message has a `format_*` function (returns `Vec<String>` or `String`)
//! for testability and, where the CLI needs it, a `print_*` wrapper that
//! writes to stdout. Format functions are pure: no I/O, no side effects.
//!
//! # Output Format
//!
//! ## Run
//!
//! ```text
//! Original Image Dimensions: Height = 100, Width = 200
//! Interpolated Image Dimensions: Height = 400, Width = 800
//! The image has been successfully interpolated (scaled by 4x).
//! Image saved successfully at: interpolated_image.png
//! ```
//!
//! ## Errors
//!
//! ```text
//! Error: Unable to load image from the path: missing.png (No such file or directory (os error 2))
//! ```

use crate::imaging::{ImageInfo, ScaleFactor};
use crate::pipeline::PipelineEvent;
use std::fmt::Display;
use std::path::Path;

/// Format one pipeline progress notice.
pub fn format_pipeline_event(event: &PipelineEvent) -> Vec<String> {
    match event {
        PipelineEvent::Loaded { info } => {
            vec![dimensions_line("Original Image Dimensions", info)]
        }
        PipelineEvent::Interpolated { info } => {
            vec![dimensions_line("Interpolated Image Dimensions", info)]
        }
        PipelineEvent::Verified { scale, passed } => vec![verification_line(*scale, *passed)],
        PipelineEvent::Saved { path } => {
            vec![format!("Image saved successfully at: {}", path.display())]
        }
    }
}

pub fn print_pipeline_event(event: &PipelineEvent) {
    for line in format_pipeline_event(event) {
        println!("{}", line);
    }
}

/// Format the outcome of the standalone `verify` command.
pub fn format_verify_output(
    original: &Path,
    resized: &Path,
    scale: ScaleFactor,
    passed: bool,
) -> Vec<String> {
    vec![
        format!("Original:     {}", original.display()),
        format!("Interpolated: {}", resized.display()),
        verification_line(scale, passed),
    ]
}

pub fn print_verify_output(original: &Path, resized: &Path, scale: ScaleFactor, passed: bool) {
    for line in format_verify_output(original, resized, scale, passed) {
        println!("{}", line);
    }
}

/// Format the single line every failure is reported with.
pub fn format_error(err: &dyn Display) -> String {
    format!("Error: {}", err)
}

/// Format the line printed by [`ConsoleDisplay`](crate::display::ConsoleDisplay).
pub fn format_display_line(title: &str, info: &ImageInfo) -> String {
    format!(
        "{}: {}x{}, {} {}",
        title,
        info.dimensions.width,
        info.dimensions.height,
        info.channels,
        if info.channels == 1 { "channel" } else { "channels" }
    )
}

fn dimensions_line(label: &str, info: &ImageInfo) -> String {
    format!(
        "{}: Height = {}, Width = {}",
        label, info.dimensions.height, info.dimensions.width
    )
}

fn verification_line(scale: ScaleFactor, passed: bool) -> String {
    if passed {
        format!(
            "The image has been successfully interpolated (scaled by {}x).",
            scale
        )
    } else {
        "The image has not been interpolated correctly.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::Dimensions;
    use std::path::PathBuf;

    fn info(width: u32, height: u32, channels: u8) -> ImageInfo {
        ImageInfo {
            dimensions: Dimensions { width, height },
            channels,
        }
    }

    #[test]
    fn loaded_reports_height_first() {
        let lines = format_pipeline_event(&PipelineEvent::Loaded {
            info: info(200, 100, 3),
        });
        assert_eq!(
            lines,
            vec!["Original Image Dimensions: Height = 100, Width = 200"]
        );
    }

    #[test]
    fn interpolated_line() {
        let lines = format_pipeline_event(&PipelineEvent::Interpolated {
            info: info(800, 400, 3),
        });
        assert_eq!(
            lines,
            vec!["Interpolated Image Dimensions: Height = 400, Width = 800"]
        );
    }

    #[test]
    fn verified_pass_shows_scale() {
        let lines = format_pipeline_event(&PipelineEvent::Verified {
            scale: ScaleFactor::new(4.0),
            passed: true,
        });
        assert_eq!(
            lines,
            vec!["The image has been successfully interpolated (scaled by 4x)."]
        );
    }

    #[test]
    fn verified_fractional_scale() {
        let lines = format_pipeline_event(&PipelineEvent::Verified {
            scale: ScaleFactor::new(1.5),
            passed: true,
        });
        assert!(lines[0].contains("scaled by 1.5x"));
    }

    #[test]
    fn verified_fail() {
        let lines = format_pipeline_event(&PipelineEvent::Verified {
            scale: ScaleFactor::new(2.0),
            passed: false,
        });
        assert_eq!(lines, vec!["The image has not been interpolated correctly."]);
    }

    #[test]
    fn saved_line() {
        let lines = format_pipeline_event(&PipelineEvent::Saved {
            path: PathBuf::from("interpolated_image.png"),
        });
        assert_eq!(
            lines,
            vec!["Image saved successfully at: interpolated_image.png"]
        );
    }

    #[test]
    fn verify_output_lists_both_files() {
        let lines = format_verify_output(
            Path::new("a.png"),
            Path::new("b.png"),
            ScaleFactor::new(2.0),
            false,
        );
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Original:     a.png");
        assert_eq!(lines[1], "Interpolated: b.png");
        assert_eq!(lines[2], "The image has not been interpolated correctly.");
    }

    #[test]
    fn error_prefix() {
        assert_eq!(format_error(&"boom"), "Error: boom");
    }

    #[test]
    fn display_line_pluralizes_channels() {
        assert_eq!(
            format_display_line("Original Image", &info(4, 2, 3)),
            "Original Image: 4x2, 3 channels"
        );
        assert_eq!(
            format_display_line("Mask", &info(1, 1, 1)),
            "Mask: 1x1, 1 channel"
        );
    }
}
