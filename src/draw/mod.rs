//! Rendering primitives and canvas state (Cairo-based).
//!
//! This module defines the core drawing types for the sketch pad:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Point`] / [`Shape`]: committed geometry (polygons, circles)
//! - [`Frame`]: container for all committed shapes
//! - [`Canvas`]: the drawing contract consumed by shape builders, with
//!   [`CanvasState`] as the retained production implementation
//! - [`DirtyTracker`]: damage accumulation for incremental rendering
//! - Rendering functions for Cairo-based output

pub mod canvas;
pub mod color;
pub mod dirty;
pub mod frame;
pub mod render;
pub mod shape;

// Re-export commonly used types at module level
pub use canvas::{Canvas, CanvasState, ColorScope, MarkerStyle, draw_marker};
pub use color::Color;
pub use dirty::DirtyTracker;
pub use frame::Frame;
pub use render::{render_background, render_shape, render_shapes};
pub use shape::{Point, Shape};

// Re-export color constants for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
