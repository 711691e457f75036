use clap::{Parser, Subcommand};
use image_interpolate::display::{ConsoleDisplay, Displayable, Headless};
use image_interpolate::imaging::{Quality, RustBackend, ScaleFactor, verify_files};
use image_interpolate::pipeline::{self, PipelineRequest};
use image_interpolate::{output, report};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "image-interpolate")]
#[command(about = "Upscale an image with bilinear interpolation")]
#[command(long_about = "\
Upscale an image with bilinear interpolation

Loads an image, resizes it by a uniform scale factor, checks that the new
size is exactly floor(original × scale) on both sides, and saves it. Nothing
is written if the check fails.

Errors are printed as a single 'Error: ...' line; the exit status stays 0.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load, interpolate, verify, and save an image
    Run {
        /// Image to upscale
        input: PathBuf,
        /// Output path; the extension picks the format
        #[arg(short, long, default_value = "interpolated_image.png")]
        output: PathBuf,
        /// Uniform scale factor for width and height
        #[arg(short, long, default_value_t = 4.0, allow_negative_numbers = true)]
        scale: f64,
        /// JPEG quality (1-100)
        #[arg(short, long, default_value_t = 90)]
        quality: u32,
        /// Describe both images after saving
        #[arg(long)]
        display: bool,
        /// Write a JSON run report to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Check that an existing file is another one scaled by a factor
    Verify {
        original: PathBuf,
        interpolated: PathBuf,
        /// Scale factor the interpolated file should reflect
        #[arg(short, long, default_value_t = 4.0, allow_negative_numbers = true)]
        scale: f64,
    },
}

fn main() {
    let cli = Cli::parse();

    // Failures are reported, not signalled: the process still exits 0.
    if let Err(err) = execute(cli) {
        println!("{}", output::format_error(&err));
    }
}

fn execute(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Run {
            input,
            output: output_path,
            scale,
            quality,
            display,
            report: report_path,
        } => {
            let request = PipelineRequest {
                input,
                output: output_path,
                scale: ScaleFactor::new(scale),
                quality: Quality::new(quality),
            };
            let display: &dyn Displayable = if display {
                &ConsoleDisplay
            } else {
                &Headless
            };

            let summary = pipeline::run(
                &RustBackend::new(),
                display,
                &request,
                output::print_pipeline_event,
            )?;

            if let Some(path) = report_path {
                report::write_report(&summary, &path)?;
            }
        }
        Command::Verify {
            original,
            interpolated,
            scale,
        } => {
            let scale = ScaleFactor::new(scale);
            let passed = verify_files(&RustBackend::new(), &original, &interpolated, scale)?;
            output::print_verify_output(&original, &interpolated, scale, passed);
        }
    }

    Ok(())
}
