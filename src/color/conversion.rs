//! Pixel representation and channel conversions
//!
//! Decoded images are read at 16 bits per channel and narrowed to the 8-bit
//! [`Pixel`] used for averaging and display:
//! - 16-bit straight RGBA to alpha-premultiplied 16-bit
//! - 16-bit to 8-bit by truncating division
//! - 8-bit pixel to sRGB and hex

use palette::{Srgb, Srgba};
use serde::{Deserialize, Serialize};

use crate::constants::channel::{DOWNSAMPLE_DIVISOR, MAX_16};

/// An 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Narrow premultiplied 16-bit channels to 8 bits.
    ///
    /// Each channel is divided by 257 with truncation, so 65535 maps to 255
    /// and 65534 maps to 254.
    pub fn from_rgba16(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self {
            r: downsample(r),
            g: downsample(g),
            b: downsample(b),
            a: downsample(a),
        }
    }

    /// Convert a straight (non-premultiplied) 16-bit RGBA sample to a pixel.
    ///
    /// Color channels are scaled by alpha before narrowing, which is how the
    /// decode layer reports translucent colors. Opaque samples pass through
    /// unchanged.
    pub fn from_straight_rgba16(channels: [u16; 4]) -> Self {
        let [r, g, b, a] = channels;
        Self::from_rgba16(
            premultiply(r, a),
            premultiply(g, a),
            premultiply(b, a),
            a,
        )
    }

    /// The color channels as an sRGB triple
    pub fn to_srgb(self) -> Srgb<u8> {
        Srgb::new(self.r, self.g, self.b)
    }

    /// All four channels as an sRGB color with alpha
    pub fn to_srgba(self) -> Srgba<u8> {
        Srgba::new(self.r, self.g, self.b, self.a)
    }

    /// Lower-case `#rrggbb`; alpha is not included
    pub fn hex(self) -> String {
        format!("#{:x}", self.to_srgb())
    }
}

impl From<Srgba<u8>> for Pixel {
    fn from(color: Srgba<u8>) -> Self {
        Self::new(color.red, color.green, color.blue, color.alpha)
    }
}

fn premultiply(channel: u16, alpha: u16) -> u16 {
    // channel * alpha <= 65535^2 fits in u32
    (u32::from(channel) * u32::from(alpha) / MAX_16) as u16
}

fn downsample(channel: u16) -> u8 {
    (u32::from(channel) / DOWNSAMPLE_DIVISOR) as u8
}
