//! Numeric contracts and terminal layout constants
//!
//! Values here define the exact output format of the report and the integer
//! arithmetic used while averaging, so they are shared by the analysis code,
//! the renderer and the tests.

/// Channel downsampling
pub mod channel {
    /// Divisor mapping a 16-bit channel (0..=65535) onto 8 bits (0..=255).
    ///
    /// 257 * 255 == 65535, so the mapping is exact for values that were
    /// widened from 8 bits and truncates everything in between.
    pub const DOWNSAMPLE_DIVISOR: u32 = 257;

    /// Largest 16-bit channel value
    pub const MAX_16: u32 = 0xffff;
}

/// ANSI terminal escapes used by the report
pub mod terminal {
    /// Prefix of a 24-bit background color escape; followed by `R;G;Bm`
    pub const TRUE_COLOR_BACKGROUND: &str = "\x1b[48;2;";

    /// Attribute reset
    pub const RESET: &str = "\x1b[0m";

    /// Width of the colored swatch, in terminal cells
    pub const SWATCH_WIDTH: usize = 8;

    /// Separator between swatch and label
    pub const LABEL_SEPARATOR: &str = "\t\t";
}

/// Command-line surface
pub mod cli {
    /// Short flag selecting the decoder, also the key it is stored under
    pub const FORMAT_FLAG: &str = "-f";

    /// Long spelling of [`FORMAT_FLAG`]
    pub const FORMAT_FLAG_LONG: &str = "--format";
}
