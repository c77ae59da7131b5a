//! # Average Color
//!
//! Computes the mean color of a PNG or JPEG image and renders it as a
//! terminal swatch with RGB and hex text.
//!
//! The pipeline is:
//! - Resolve a [`DecodeStrategy`] from the path extension or a `--format` override
//! - Open and decode the file with exactly that strategy
//! - Sum every pixel channel by channel and divide by the pixel count
//! - Render a [`ColorReport`]
//!
//! ## Example
//!
//! ```rust,no_run
//! use average_color::{average_color_of_file, ColorReport, RunConfig};
//!
//! if let Some(config) = RunConfig::from_args(&["photo.png"])? {
//!     let pixel = average_color_of_file(&config)?;
//!     print!("{}", ColorReport::new(pixel));
//! }
//! # Ok::<(), average_color::AnalysisError>(())
//! ```

use std::ffi::OsStr;
use std::io::{self, Write};

use tracing::debug;

pub mod error;
pub mod constants;
pub mod config;
pub mod image_loader;
pub mod color;
pub mod report;

pub use color::{ColorAccumulator, ColorAnalyzer, Pixel};
pub use config::{Flags, RunConfig};
pub use error::{AnalysisError, Result};
pub use image_loader::{DecodeStrategy, ImageFormat};
pub use report::ColorReport;

/// What a run produced on success
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// No arguments were given; the caller prints usage
    Usage,
    /// The image was analyzed
    Report(ColorReport),
}

/// Decode the configured image and compute its average color
///
/// # Errors
///
/// Returns `AnalysisError` if:
/// - The file cannot be opened
/// - The bytes cannot be decoded with the configured strategy
/// - The decoded image has zero area
pub fn average_color_of_file(config: &RunConfig) -> Result<Pixel> {
    let image = image_loader::load_image(&config.image_path, config.strategy)?;
    ColorAnalyzer::new().average_color(&image)
}

/// Run the whole program over an argument list (program name excluded)
///
/// Arguments are OS strings; paths and flag values need not be UTF-8.
pub fn run<S: AsRef<OsStr>>(args: &[S]) -> Result<RunOutcome> {
    let Some(config) = RunConfig::from_args(args)? else {
        return Ok(RunOutcome::Usage);
    };
    let pixel = average_color_of_file(&config).inspect_err(|e| {
        debug!(error = %e, path = %config.image_path.display(), "analysis failed");
    })?;
    debug!(?pixel, "average color");
    Ok(RunOutcome::Report(ColorReport::new(pixel)))
}

/// Usage line for the given program name
pub fn usage(program: &str) -> String {
    format!("Usage: {program} <image> [flags]")
}

/// Write a successful outcome: usage line or the colored report.
///
/// Output is flushed before returning so a closed stream surfaces here as
/// an error instead of a panic.
pub fn write_outcome<W: Write>(out: &mut W, outcome: &RunOutcome, program: &str) -> io::Result<()> {
    match outcome {
        RunOutcome::Usage => writeln!(out, "{}", usage(program))?,
        RunOutcome::Report(report) => write!(out, "{}", report)?,
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn test_no_args_is_usage() {
        let args: [&str; 0] = [];
        assert_eq!(run(&args).unwrap(), RunOutcome::Usage);
    }

    #[test]
    fn test_usage_text() {
        assert_eq!(usage("avgcolor"), "Usage: avgcolor <image> [flags]");
    }

    #[test]
    fn test_format_error_before_open() {
        // Extension checks run before the file is opened, so a missing file
        // still reports the format problem.
        let err = run(&["missing.gif"]).unwrap_err();
        assert_eq!(err.user_message(), "error: unknown gif format");
    }

    #[test]
    fn test_open_error() {
        let err = run(&["missing-file-for-test.png"]).unwrap_err();
        assert!(matches!(err, AnalysisError::FileOpen { .. }));
    }

    #[test]
    fn test_write_outcome_layouts() {
        let mut out = Vec::new();
        write_outcome(&mut out, &RunOutcome::Usage, "avgcolor").unwrap();
        assert_eq!(out, b"Usage: avgcolor <image> [flags]\n");

        let report = ColorReport::new(Pixel::new(1, 2, 3, 255));
        let mut out = Vec::new();
        write_outcome(&mut out, &RunOutcome::Report(report.clone()), "avgcolor").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), report.render());
    }

    #[test]
    fn test_write_outcome_closed_stream_is_error() {
        let report = ColorReport::new(Pixel::new(1, 2, 3, 255));
        let err = write_outcome(&mut ClosedPipe, &RunOutcome::Report(report), "avgcolor")
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(write_outcome(&mut ClosedPipe, &RunOutcome::Usage, "avgcolor").is_err());
    }

    #[test]
    fn test_color_result_serialization() {
        let report = ColorReport::new(Pixel::new(51, 102, 204, 255));
        let json = serde_json::to_string(&report).unwrap();
        let deserialized: ColorReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, deserialized);
        assert_eq!(deserialized.hex, "#3366cc");
    }
}
