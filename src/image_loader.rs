//! Image loading with an explicit decoder choice
//!
//! The decoder is picked once, up front, as a [`DecodeStrategy`] and passed
//! into [`decode_image`]; nothing is registered globally.
//!
//! ## Supported Formats
//!
//! - PNG (`.png`)
//! - JPEG / JFIF (`.jpg`, `.jpeg`)
//!
//! Without an override the format comes from the file extension. With an
//! override, `png`, `jpg` and `jpeg` select a decoder and any other value
//! falls back to detection from the file signature.

use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::{self, Path};

use image::{DynamicImage, ImageError, ImageReader};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AnalysisError, Result};

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    /// PNG image
    Png,
    /// JPEG image
    Jpeg,
}

impl ImageFormat {
    /// Parse a format name (`png`, `jpg`, `jpeg`), ignoring case
    pub fn from_name(name: &str) -> Option<ImageFormat> {
        match name.to_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            _ => None,
        }
    }

    /// Detect format from file extension
    ///
    /// The extension is everything from the last `.` of the final path
    /// component, so `.png` counts as a PNG and `photo.` has the extension
    /// `.` with an empty name.
    ///
    /// # Errors
    ///
    /// - `UnknownImageFormat` if the final component contains no `.`
    /// - `UnsupportedExtension` if the name after the dot is not png/jpg/jpeg
    pub fn from_extension(path: &Path) -> Result<ImageFormat> {
        let ext = dotted_extension(path).to_lowercase();
        let Some(name) = ext.strip_prefix('.') else {
            return Err(AnalysisError::UnknownImageFormat);
        };
        ImageFormat::from_name(name).ok_or_else(|| AnalysisError::UnsupportedExtension {
            extension: name.to_string(),
        })
    }

    /// Codec identifier in the `image` crate
    pub fn codec(self) -> image::ImageFormat {
        match self {
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
        }
    }
}

/// Which decoder to run over the file contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecodeStrategy {
    /// Decode strictly as the given format
    Explicit(ImageFormat),
    /// Guess the format from the leading bytes
    Auto,
}

impl DecodeStrategy {
    /// Choose a decoder from the path and optional format override
    ///
    /// # Arguments
    ///
    /// * `path` - Image path, consulted only when there is no override
    /// * `format_override` - Value given with `-f` / `--format`
    ///
    /// # Errors
    ///
    /// Only extension-based detection can fail; see
    /// [`ImageFormat::from_extension`]. An override never fails.
    pub fn resolve(path: &Path, format_override: Option<&OsStr>) -> Result<DecodeStrategy> {
        let strategy = match format_override {
            None => DecodeStrategy::Explicit(ImageFormat::from_extension(path)?),
            Some(name) => match ImageFormat::from_name(&name.to_string_lossy()) {
                Some(format) => DecodeStrategy::Explicit(format),
                None => {
                    debug!(format = ?name, "unrecognized format override, detecting from content");
                    DecodeStrategy::Auto
                }
            },
        };
        debug!(?strategy, path = %path.display(), "decode strategy selected");
        Ok(strategy)
    }
}

/// Suffix of the final path component starting at its last `.`, or empty
fn dotted_extension(path: &Path) -> String {
    let full = path.as_os_str().to_string_lossy();
    let name = full.rsplit(path::is_separator).next().unwrap_or_default();
    name.rfind('.')
        .map(|dot| name[dot..].to_string())
        .unwrap_or_default()
}

/// Open an image file for reading
pub fn open_image_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| AnalysisError::file_open(path, e))
}

/// Decode an image from a reader using the selected strategy
///
/// # Errors
///
/// Returns `AnalysisError::Decode` if the bytes are not a valid image of the
/// selected format, or, for [`DecodeStrategy::Auto`], if the signature is not
/// one of the supported formats.
pub fn decode_image<R: BufRead + Seek>(reader: R, strategy: DecodeStrategy) -> Result<DynamicImage> {
    let image = match strategy {
        DecodeStrategy::Explicit(format) => image::load(reader, format.codec()),
        DecodeStrategy::Auto => decode_guessed(reader),
    };
    image.map_err(AnalysisError::decode)
}

fn decode_guessed<R: BufRead + Seek>(reader: R) -> std::result::Result<DynamicImage, ImageError> {
    let reader = ImageReader::new(reader).with_guessed_format()?;
    debug!(guessed = ?reader.format(), "content signature");
    reader.decode()
}

/// Open and decode the image at `path`
///
/// The file handle lives only for the duration of this call.
pub fn load_image(path: &Path, strategy: DecodeStrategy) -> Result<DynamicImage> {
    let file = open_image_file(path)?;
    decode_image(BufReader::new(file), strategy)
}
