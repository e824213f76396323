//! Utility functions for color name resolution and geometry.
//!
//! This module provides:
//! - Name-to-color mapping shared by the config loader and the console
//! - Integer radius computation for two-click circles
//! - The axis-aligned rectangle used for dirty region tracking

use crate::draw::{Color, Point, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system and the console color prompts.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Parses a user-entered color token.
///
/// Accepts the named palette, `#rrggbb` hex, and `none` for "no color"
/// (unfilled brush / invisible pen).
///
/// # Returns
/// - `Some(Some(color))` for a recognized color
/// - `Some(None)` for the `none` token
/// - `None` if the token cannot be parsed
pub fn parse_color(token: &str) -> Option<Option<Color>> {
    let token = token.trim();
    if token.eq_ignore_ascii_case("none") {
        return Some(None);
    }
    if let Some(color) = name_to_color(token) {
        return Some(Some(color));
    }
    if let Some(hex) = token.strip_prefix('#') {
        if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Some(Color::from_rgb_u8(r, g, b)));
        }
    }
    None
}

/// Maps a Color value to its human-readable name.
///
/// Uses approximate matching (threshold-based) to identify colors.
/// Used by the UI status bar to display the current color name.
///
/// # Returns
/// A static string with the color name, or "Custom" if the color doesn't
/// match any predefined color.
pub fn color_to_name(color: &Color) -> &'static str {
    // Match colors approximately with 0.1 tolerance
    if color.r > 0.9 && color.g < 0.1 && color.b < 0.1 {
        "Red"
    } else if color.r < 0.1 && color.g > 0.9 && color.b < 0.1 {
        "Green"
    } else if color.r < 0.1 && color.g < 0.1 && color.b > 0.9 {
        "Blue"
    } else if color.r > 0.9 && color.g > 0.9 && color.b < 0.1 {
        "Yellow"
    } else if color.r > 0.9 && (0.4..=0.6).contains(&color.g) && color.b < 0.1 {
        "Orange"
    } else if color.r > 0.9 && color.g < 0.1 && color.b > 0.9 {
        "Pink"
    } else if color.r > 0.9 && color.g > 0.9 && color.b > 0.9 {
        "White"
    } else if color.r < 0.1 && color.g < 0.1 && color.b < 0.1 {
        "Black"
    } else {
        "Custom"
    }
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Integer radius of the circle through `rim` centered at `center`.
///
/// Truncates (floors) the Euclidean distance rather than rounding; two-click
/// circle sizing depends on this exact behavior.
pub fn integer_radius(center: Point, rim: Point) -> i32 {
    let dx = (rim.x - center.x) as f64;
    let dy = (rim.y - center.y) as f64;
    (dx * dx + dy * dy).sqrt() as i32
}

/// Axis-aligned rectangle helper used for dirty region tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        let width = max_x - min_x;
        let height = max_y - min_y;
        Self::new(min_x, min_y, width, height)
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, RED, WHITE};

    #[test]
    fn name_color_mapping_covers_palette() {
        assert_eq!(name_to_color("white").unwrap(), WHITE);
        assert_eq!(name_to_color("BLACK").unwrap(), BLACK);
        assert!(name_to_color("chartreuse").is_none());
    }

    #[test]
    fn parse_color_handles_names_hex_and_none() {
        assert_eq!(parse_color("red"), Some(Some(RED)));
        assert_eq!(parse_color("none"), Some(None));
        assert_eq!(parse_color("  black "), Some(Some(BLACK)));
        assert!(parse_color("#12zz34").is_none());
        assert!(parse_color("mauve-ish").is_none());

        let parsed = parse_color("#ff0000").unwrap().unwrap();
        assert!((parsed.r - 1.0).abs() < 1e-9);
        assert!(parsed.g.abs() < 1e-9);
        assert!(parsed.b.abs() < 1e-9);
    }

    #[test]
    fn color_to_name_matches_known_colors() {
        assert_eq!(color_to_name(&RED), "Red");
        assert_eq!(color_to_name(&BLACK), "Black");
        assert_eq!(
            color_to_name(&Color {
                r: 0.42,
                g: 0.42,
                b: 0.42,
                a: 1.0
            }),
            "Custom"
        );
    }

    #[test]
    fn integer_radius_truncates_distance() {
        let center = Point::new(0, 0);
        assert_eq!(integer_radius(center, Point::new(3, 4)), 5);
        // sqrt(2) ~= 1.414 floors to 1
        assert_eq!(integer_radius(center, Point::new(1, 1)), 1);
        // sqrt(8) ~= 2.828 floors to 2
        assert_eq!(integer_radius(center, Point::new(2, 2)), 2);
        assert_eq!(integer_radius(Point::new(10, 10), Point::new(10, 10)), 0);
    }
}
