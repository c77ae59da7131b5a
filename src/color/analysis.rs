//! Average color extraction
//!
//! Sums every pixel of a decoded image channel by channel and divides by the
//! pixel count. Both the per-pixel narrowing and the final division truncate;
//! the output is reproducible bit for bit across runs and platforms.

use image::DynamicImage;
use tracing::{debug, trace};

use crate::color::Pixel;
use crate::{AnalysisError, Result};

/// Running per-channel sums over a set of pixels
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorAccumulator {
    sum_r: u64,
    sum_g: u64,
    sum_b: u64,
    sum_a: u64,
    count: u64,
}

impl ColorAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one pixel to the running sums
    pub fn add(&mut self, pixel: Pixel) {
        self.sum_r += u64::from(pixel.r);
        self.sum_g += u64::from(pixel.g);
        self.sum_b += u64::from(pixel.b);
        self.sum_a += u64::from(pixel.a);
        self.count += 1;
    }

    /// Number of pixels added so far
    pub fn pixel_count(&self) -> u64 {
        self.count
    }

    /// Per-channel mean with truncating division, `None` when empty
    pub fn average(&self) -> Option<Pixel> {
        if self.count == 0 {
            return None;
        }
        // Each sum is at most 255 * count, so every quotient fits in u8
        Some(Pixel::new(
            (self.sum_r / self.count) as u8,
            (self.sum_g / self.count) as u8,
            (self.sum_b / self.count) as u8,
            (self.sum_a / self.count) as u8,
        ))
    }
}

impl Extend<Pixel> for ColorAccumulator {
    fn extend<I: IntoIterator<Item = Pixel>>(&mut self, iter: I) {
        for pixel in iter {
            self.add(pixel);
        }
    }
}

impl FromIterator<Pixel> for ColorAccumulator {
    fn from_iter<I: IntoIterator<Item = Pixel>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

/// Computes the average color of decoded images
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorAnalyzer;

impl ColorAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Average every pixel of `image`
    ///
    /// # Arguments
    ///
    /// * `image` - Decoded image in any color model
    ///
    /// # Returns
    ///
    /// The mean color, each channel in [0, 255]
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidImageSize` if the image has zero width
    /// or zero height.
    pub fn average_color(&self, image: &DynamicImage) -> Result<Pixel> {
        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            return Err(AnalysisError::InvalidImageSize { width, height });
        }
        debug!(width, height, color = ?image.color(), "averaging image");

        let samples = image.to_rgba16();
        let mut acc = ColorAccumulator::new();
        for y in 0..height {
            for x in 0..width {
                acc.add(Pixel::from_straight_rgba16(samples.get_pixel(x, y).0));
            }
        }
        trace!(pixels = acc.pixel_count(), "accumulated");

        acc.average()
            .ok_or(AnalysisError::InvalidImageSize { width, height })
    }
}
