//! Frame container for committed shapes.

use super::shape::Shape;

/// Container for all shapes committed during the current session.
///
/// Shapes accumulate in commit order (first = bottom layer, last = top layer)
/// and stay until the process exits; there is no undo or erase.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// Vector of all shapes in draw order
    pub shapes: Vec<Shape>,
}

impl Frame {
    /// Creates a new empty frame with no shapes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new shape on top of existing shapes.
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Number of committed shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns true when nothing has been committed yet.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Point, color::BLACK};

    #[test]
    fn shapes_accumulate_in_commit_order() {
        let mut frame = Frame::new();
        assert!(frame.is_empty());

        frame.add_shape(Shape::Circle {
            center: Point::new(1, 1),
            radius: 2,
            pen: Some(BLACK),
            brush: Some(BLACK),
            width: 1.0,
        });
        frame.add_shape(Shape::Circle {
            center: Point::new(9, 9),
            radius: 5,
            pen: Some(BLACK),
            brush: None,
            width: 1.0,
        });

        assert_eq!(frame.len(), 2);
        match &frame.shapes[0] {
            Shape::Circle { radius, .. } => assert_eq!(*radius, 2),
            other => panic!("unexpected first shape: {other:?}"),
        }
    }
}
