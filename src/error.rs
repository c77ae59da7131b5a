//! Error types for the average_color library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for average_color operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Every way a run can fail after the usage check
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The path has no extension and no format override was given
    #[error("unknown image format")]
    UnknownImageFormat,

    /// The path carries an extension outside png/jpg/jpeg
    #[error("unknown {extension} format")]
    UnsupportedExtension { extension: String },

    /// Image file could not be opened
    #[error("open {}: {}", .path.display(), os_message(.source))]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Image bytes could not be decoded with the selected strategy
    #[error("failed to decode image: {source}")]
    Decode {
        #[source]
        source: image::ImageError,
    },

    /// Decoded image has zero area
    #[error("invalid image size: {width}x{height}")]
    InvalidImageSize { width: u32, height: u32 },
}

/// OS error text without std's ` (os error N)` suffix, first letter lowered
/// (`no such file or directory`).
fn os_message(error: &std::io::Error) -> String {
    let text = error.to_string();
    let text = match error.raw_os_error() {
        Some(code) => text
            .strip_suffix(&format!(" (os error {code})"))
            .unwrap_or(&text)
            .to_string(),
        None => text,
    };
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => text,
    }
}

impl AnalysisError {
    /// Create a file open error with context
    pub fn file_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a decode error with context
    pub fn decode(source: image::ImageError) -> Self {
        Self::Decode { source }
    }

    /// True for failures raised while turning bytes into pixels
    pub fn is_decode_failure(&self) -> bool {
        matches!(
            self,
            AnalysisError::Decode { .. } | AnalysisError::InvalidImageSize { .. }
        )
    }

    /// One-line message shown to the user on stderr.
    ///
    /// Decode and geometry failures collapse into a single generic message;
    /// the specific cause is only available through `Display` and `source()`.
    pub fn user_message(&self) -> String {
        if self.is_decode_failure() {
            "error: image could not be decoded".to_string()
        } else {
            format!("error: {}", self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_format_messages() {
        assert_eq!(
            AnalysisError::UnknownImageFormat.user_message(),
            "error: unknown image format"
        );
        let err = AnalysisError::UnsupportedExtension {
            extension: "gif".to_string(),
        };
        assert_eq!(err.user_message(), "error: unknown gif format");
    }

    #[test]
    fn test_open_message_passes_io_text_through() {
        let source = io::Error::new(io::ErrorKind::NotFound, "no such file or directory");
        let err = AnalysisError::file_open("missing.png", source);
        assert_eq!(
            err.user_message(),
            "error: open missing.png: no such file or directory"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[cfg(unix)]
    #[test]
    fn test_open_message_drops_os_error_code() {
        let err = AnalysisError::file_open("gone.png", io::Error::from_raw_os_error(2));
        assert_eq!(
            err.user_message(),
            "error: open gone.png: no such file or directory"
        );
    }

    #[test]
    fn test_decode_failures_share_generic_message() {
        let size = AnalysisError::InvalidImageSize {
            width: 0,
            height: 4,
        };
        assert!(size.is_decode_failure());
        assert_eq!(size.user_message(), "error: image could not be decoded");
        assert_eq!(size.to_string(), "invalid image size: 0x4");

        let decode = AnalysisError::decode(image::ImageError::IoError(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "truncated",
        )));
        assert!(decode.is_decode_failure());
        assert_eq!(decode.user_message(), "error: image could not be decoded");
    }

    #[test]
    fn test_format_errors_are_not_decode_failures() {
        assert!(!AnalysisError::UnknownImageFormat.is_decode_failure());
    }
}
