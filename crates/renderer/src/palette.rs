//! Colour handling and the fixed route palette.

use route_common::{ChartError, ChartResult};
use serde::{Deserialize, Serialize};

/// An RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to a tiny-skia colour for path painting.
    pub fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }

    /// Convert to an image crate pixel.
    pub fn to_rgba_pixel(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, self.a])
    }
}

/// Fixed palette for distinguishing route alternatives on one chart:
/// darkred, gold, seagreen, peachpuff, darkviolet.
pub const ROUTE_PALETTE: [Colour; 5] = [
    Colour::rgb(139, 0, 0),
    Colour::rgb(255, 215, 0),
    Colour::rgb(46, 139, 87),
    Colour::rgb(255, 218, 185),
    Colour::rgb(148, 0, 211),
];

/// Colour assigned to the i-th route overlay.
///
/// At most five routes can be distinguished on a single chart; higher
/// indices are an error rather than a wrapped colour.
pub fn route_colour(i: usize) -> ChartResult<Colour> {
    ROUTE_PALETTE
        .get(i)
        .copied()
        .ok_or(ChartError::PaletteExhausted {
            index: i,
            available: ROUTE_PALETTE.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_colour_is_deterministic() {
        for i in 0..5 {
            assert_eq!(route_colour(i).unwrap(), ROUTE_PALETTE[i]);
        }
    }

    #[test]
    fn test_route_colour_overflow() {
        assert!(route_colour(5).is_err());
    }
}
