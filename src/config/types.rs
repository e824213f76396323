//! Configuration type definitions.

use super::enums::{ColorSpec, StatusPosition};
use crate::draw::{Color, MarkerStyle};
use serde::{Deserialize, Serialize};

/// Canvas window settings.
///
/// The sketch pad opens one fixed-size surface; the compositor centers it
/// since the surface is unanchored.
#[derive(Debug, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Surface width in pixels (valid range: 100 - 7680)
    #[serde(default = "default_width")]
    pub width: u32,

    /// Surface height in pixels (valid range: 100 - 7680)
    #[serde(default = "default_height")]
    pub height: u32,

    /// Opaque canvas background - a named color or an `[r, g, b]` array
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
        }
    }
}

/// Drawing-related settings.
///
/// Controls the colors and geometry defaults in effect when the sketch pad
/// starts. Pen and brush can be changed at runtime through the console.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Starting pen (outline) color; `"none"` draws shapes without outlines
    #[serde(default = "default_pen_color")]
    pub pen_color: ColorSpec,

    /// Starting brush (fill) color; omit or use `"none"` for unfilled shapes
    #[serde(default)]
    pub brush_color: Option<ColorSpec>,

    /// Color of the click-feedback markers
    #[serde(default = "default_marker_color")]
    pub marker_color: ColorSpec,

    /// Radius of the click-feedback markers in pixels (valid range: 1 - 16)
    #[serde(default = "default_marker_radius")]
    pub marker_radius: i32,

    /// Outline thickness for committed shapes in pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_line_width")]
    pub line_width: f64,

    /// Drawing mode active at startup (`polygon` or `circle`)
    #[serde(default = "default_mode")]
    pub default_mode: String,
}

impl DrawingConfig {
    /// Starting pen color with the `none` token resolved.
    pub fn effective_pen(&self) -> Option<Color> {
        self.pen_color.to_optional_color()
    }

    /// Starting brush color; an absent field means unfilled shapes.
    pub fn effective_brush(&self) -> Option<Color> {
        self.brush_color
            .as_ref()
            .and_then(ColorSpec::to_optional_color)
    }

    /// Marker appearance for the shape builders.
    pub fn marker_style(&self) -> MarkerStyle {
        MarkerStyle {
            color: self.marker_color.to_color(),
            radius: self.marker_radius,
        }
    }
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            pen_color: default_pen_color(),
            brush_color: None,
            marker_color: default_marker_color(),
            marker_radius: default_marker_radius(),
            line_width: default_line_width(),
            default_mode: default_mode(),
        }
    }
}

/// Console command loop settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Read commands from stdin; disable when running without a terminal
    #[serde(default = "default_console_enabled")]
    pub enabled: bool,

    /// Clear the terminal when the canvas `c` key refocuses the console
    #[serde(default = "default_clear_on_focus")]
    pub clear_on_focus: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: default_console_enabled(),
            clear_on_focus: default_clear_on_focus(),
        }
    }
}

/// UI display preferences.
#[derive(Debug, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the status bar with the active mode and pen/brush swatches
    #[serde(default = "default_show_status")]
    pub show_status_bar: bool,

    /// Status bar corner (top-left, top-right, bottom-left, bottom-right)
    #[serde(default = "default_status_position")]
    pub status_position: StatusPosition,

    /// Status bar font size in points (valid range: 8.0 - 72.0)
    #[serde(default = "default_status_font_size")]
    pub font_size: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_status_bar: default_show_status(),
            status_position: default_status_position(),
            font_size: default_status_font_size(),
        }
    }
}

/// Performance tuning options.
///
/// These settings control rendering performance and smoothness. Most users
/// won't need to change these from their defaults.
#[derive(Debug, Serialize, Deserialize)]
pub struct PerformanceConfig {
    /// Number of buffers for buffering (valid range: 2 - 4)
    /// - 2 = double buffering (lower memory, potential tearing)
    /// - 3 = triple buffering (balanced, recommended)
    /// - 4 = quad buffering (highest memory, smoothest)
    #[serde(default = "default_buffer_count")]
    pub buffer_count: u32,

    /// Enable vsync frame synchronization to prevent tearing
    /// Set to false for lower latency at the cost of potential screen tearing
    #[serde(default = "default_enable_vsync")]
    pub enable_vsync: bool,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            buffer_count: default_buffer_count(),
            enable_vsync: default_enable_vsync(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    600
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_pen_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_marker_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_marker_radius() -> i32 {
    2
}

fn default_line_width() -> f64 {
    2.0
}

fn default_mode() -> String {
    "polygon".to_string()
}

fn default_console_enabled() -> bool {
    true
}

fn default_clear_on_focus() -> bool {
    true
}

fn default_show_status() -> bool {
    true
}

fn default_status_position() -> StatusPosition {
    StatusPosition::BottomLeft
}

fn default_status_font_size() -> f64 {
    14.0
}

fn default_buffer_count() -> u32 {
    3
}

fn default_enable_vsync() -> bool {
    true
}
