//! Terminal report for an averaged color
//!
//! The layout is fixed: a blank line, three rows of swatch plus label, and a
//! trailing blank line. Each swatch is a run of spaces painted with a 24-bit
//! background escape.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Pixel;
use crate::constants::terminal::{LABEL_SEPARATOR, RESET, SWATCH_WIDTH, TRUE_COLOR_BACKGROUND};

/// Averaged color with its display representations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorReport {
    /// Averaged color including alpha
    pub pixel: Pixel,
    /// Decimal `R, G, B`
    pub rgb: String,
    /// Lower-case `#rrggbb`
    pub hex: String,
}

impl ColorReport {
    pub fn new(pixel: Pixel) -> Self {
        Self {
            pixel,
            rgb: format!("{}, {}, {}", pixel.r, pixel.g, pixel.b),
            hex: pixel.hex(),
        }
    }

    /// Labels printed next to each swatch row
    pub fn labels(&self) -> [String; 3] {
        [
            "Average color".to_string(),
            format!("RGB: {}", self.rgb),
            format!("HEX: {}", self.hex),
        ]
    }

    /// Render the full report, including leading and trailing newlines
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    fn swatch(&self) -> String {
        let Pixel { r, g, b, .. } = self.pixel;
        format!(
            "{TRUE_COLOR_BACKGROUND}{r};{g};{b}m{:width$}{RESET}",
            "",
            width = SWATCH_WIDTH
        )
    }
}

impl fmt::Display for ColorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let swatch = self.swatch();
        writeln!(f)?;
        for label in self.labels() {
            writeln!(f, " {swatch}{LABEL_SEPARATOR}{label}")?;
        }
        writeln!(f)
    }
}

impl From<Pixel> for ColorReport {
    fn from(pixel: Pixel) -> Self {
        Self::new(pixel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_layout() {
        let report = ColorReport::new(Pixel::new(200, 100, 50, 255));
        let sw = "\x1b[48;2;200;100;50m        \x1b[0m";
        let expected = format!(
            "\n {sw}\t\tAverage color\n {sw}\t\tRGB: 200, 100, 50\n {sw}\t\tHEX: #c86432\n\n"
        );
        assert_eq!(report.render(), expected);
    }

    #[test]
    fn test_alpha_not_displayed() {
        let opaque = ColorReport::new(Pixel::new(10, 20, 30, 255)).render();
        let clear = ColorReport::new(Pixel::new(10, 20, 30, 0)).render();
        assert_eq!(opaque, clear);
        assert!(opaque.contains("RGB: 10, 20, 30"));
        assert!(opaque.contains("HEX: #0a141e"));
    }

    #[test]
    fn test_json_contains_hex() {
        let report = ColorReport::from(Pixel::new(0, 0, 0, 0));
        let json = report.to_json().unwrap();
        assert!(json.contains("\"hex\": \"#000000\""));
        let back: ColorReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
