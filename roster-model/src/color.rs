//! Display colors and paints attached to catalog items.

use crate::error::{ModelError, Result};
use std::fmt;
use std::str::FromStr;

/// 8-bit sRGB color, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(into = "String", try_from = "String")
)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
    /// Used when an image has no opaque pixels to vote with.
    pub const NEUTRAL_GRAY: Rgb = Rgb::new(0x80, 0x80, 0x80);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Channels scaled to `0.0..=1.0`.
    pub fn to_unit(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ModelError;

    fn from_str(raw: &str) -> Result<Self> {
        let invalid = || ModelError::InvalidHex(raw.to_string());
        let hex = raw.trim().strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for Rgb {
    type Error = ModelError;

    fn try_from(raw: String) -> Result<Self> {
        raw.parse()
    }
}

/// Background treatment for an item card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Paint {
    Solid { color: Rgb },
    /// Two-stop top-to-bottom gradient.
    VerticalGradient { top: Rgb, bottom: Rgb },
}

impl Paint {
    pub const fn solid(color: Rgb) -> Self {
        Paint::Solid { color }
    }

    pub const fn vertical(top: Rgb, bottom: Rgb) -> Self {
        Paint::VerticalGradient { top, bottom }
    }

    /// Color of the first stop, or the flat color.
    pub fn primary(&self) -> Rgb {
        match *self {
            Paint::Solid { color } => color,
            Paint::VerticalGradient { top, .. } => top,
        }
    }
}

/// Renders the CSS form: `#rrggbb` or
/// `linear-gradient(180deg, #top 0%, #bottom 100%)`.
impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Paint::Solid { color } => write!(f, "{color}"),
            Paint::VerticalGradient { top, bottom } => {
                write!(f, "linear-gradient(180deg, {top} 0%, {bottom} 100%)")
            }
        }
    }
}

/// Background and foreground pair for an item. Both halves always travel
/// together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStyle {
    pub background: Paint,
    pub text_color: Rgb,
}

impl ItemStyle {
    pub const fn new(background: Paint, text_color: Rgb) -> Self {
        Self {
            background,
            text_color,
        }
    }

    /// White-to-light-gray card with black text, shown until (or instead of)
    /// an extracted style.
    pub const fn fallback() -> Self {
        Self {
            background: Paint::vertical(Rgb::WHITE, Rgb::new(0xe0, 0xe0, 0xe0)),
            text_color: Rgb::BLACK,
        }
    }
}

impl Default for ItemStyle {
    fn default() -> Self {
        Self::fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trips_lowercase() {
        let color: Rgb = "#1A2b3C".parse().unwrap();
        assert_eq!(color, Rgb::new(0x1a, 0x2b, 0x3c));
        assert_eq!(color.to_hex(), "#1a2b3c");
    }

    #[test]
    fn rejects_malformed_hex() {
        for raw in ["", "123456", "#12345", "#1234567", "#gg0000", "#ééé", "#+f+f+f"] {
            assert!(raw.parse::<Rgb>().is_err(), "{raw} should not parse");
        }
    }

    #[test]
    fn fallback_renders_light_gradient() {
        let style = ItemStyle::fallback();
        assert_eq!(
            style.background.to_string(),
            "linear-gradient(180deg, #ffffff 0%, #e0e0e0 100%)"
        );
        assert_eq!(style.text_color, Rgb::BLACK);
    }

    #[test]
    fn solid_paint_renders_hex() {
        assert_eq!(Paint::solid(Rgb::NEUTRAL_GRAY).to_string(), "#808080");
    }
}
