//! Configuration enum types.

use crate::draw::{Color, color::*};
use log::warn;
use serde::{Deserialize, Serialize};

/// Status bar position on screen.
///
/// Controls where the status bar appears relative to the canvas edges.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum StatusPosition {
    /// Top-left corner
    TopLeft,
    /// Top-right corner
    TopRight,
    /// Bottom-left corner
    BottomLeft,
    /// Bottom-right corner
    BottomRight,
}

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// pen_color = "black"
///
/// # Custom RGB color (0-255 per component)
/// background = [240, 240, 235]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, yellow, orange, pink, white, black
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Named colors are mapped to predefined RGBA values using
    /// `util::name_to_color()`. Unknown color names default to black with a
    /// warning. RGB arrays are converted from 0-255 range to 0.0-1.0 range
    /// with full opacity.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using black", name);
                BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb_u8(*r, *g, *b),
        }
    }

    /// Converts the specification to an optional color.
    ///
    /// The name `none` maps to `None` (no outline for a pen, unfilled for a
    /// brush); everything else resolves like [`ColorSpec::to_color`].
    pub fn to_optional_color(&self) -> Option<Color> {
        match self {
            ColorSpec::Name(name) if name.eq_ignore_ascii_case("none") => None,
            other => Some(other.to_color()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_spec_resolves_to_palette_color() {
        assert_eq!(ColorSpec::Name("red".into()).to_color(), RED);
        assert_eq!(ColorSpec::Name("WHITE".into()).to_color(), WHITE);
    }

    #[test]
    fn unknown_name_falls_back_to_black() {
        assert_eq!(ColorSpec::Name("plaid".into()).to_color(), BLACK);
    }

    #[test]
    fn rgb_spec_scales_components() {
        let color = ColorSpec::Rgb([255, 0, 0]).to_color();
        assert!((color.r - 1.0).abs() < 1e-9);
        assert!(color.g.abs() < 1e-9);
        assert!(color.b.abs() < 1e-9);
        assert!((color.a - 1.0).abs() < 1e-9);
    }

    #[test]
    fn none_token_resolves_to_no_color() {
        assert_eq!(ColorSpec::Name("none".into()).to_optional_color(), None);
        assert_eq!(
            ColorSpec::Name("blue".into()).to_optional_color(),
            Some(BLUE)
        );
    }
}
