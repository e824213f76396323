//! Generic input event types for cross-backend compatibility.

use crate::draw::Point;

/// The two mouse buttons the sketch pad recognizes.
///
/// Primary (left) accumulates geometry, Secondary (right) finishes the
/// current shape. Other buttons are dropped at the backend boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickButton {
    /// Left mouse button: add a point / fix a center or radius
    Primary,
    /// Right mouse button: close and commit the shape in progress
    Secondary,
}

/// A mouse click delivered to the active shape builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    pub button: ClickButton,
    pub position: Point,
}

impl ClickEvent {
    pub fn new(button: ClickButton, position: Point) -> Self {
        Self { button, position }
    }
}

/// Generic key representation for cross-backend compatibility.
///
/// Backend implementations map their native key codes to these generic
/// key values for unified input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Escape key
    Escape,
    /// Unmapped or unrecognized key
    Unknown,
}
