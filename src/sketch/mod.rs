//! Click-to-shape state machines and session orchestration.
//!
//! This is the heart of the sketch pad: shape builders accumulate mouse
//! clicks into geometry ([`builder`]), the mode registry binds exactly one
//! builder to the click stream at a time ([`registry`]), and [`SketchState`]
//! ties builders, canvas, and console together for the backend.

pub mod builder;
pub mod events;
pub mod registry;
pub mod state;


// Re-export commonly used types at module level
pub use builder::{CircleBuilder, PolygonBuilder, ShapeBuilder};
pub use events::{ClickButton, ClickEvent, Key};
pub use registry::{DEFAULT_MODE, ModeRegistry};
pub use state::SketchState;
