//! Color analysis and conversion module
//!
//! This module handles narrowing decoded samples to 8-bit pixels and
//! averaging them into a single representative color.

pub mod conversion;
pub mod analysis;

pub use conversion::Pixel;
pub use analysis::{ColorAccumulator, ColorAnalyzer};
