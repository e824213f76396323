//! Dirty region tracking for incremental rendering.
//!
//! Collects axis-aligned rectangles that need repainting between frames.

use super::Shape;
use crate::util::Rect;

/// Tracks dirty rectangles accumulated between renders.
#[derive(Debug, Default)]
pub struct DirtyTracker {
    regions: Vec<Rect>,
    force_full: bool,
}

impl DirtyTracker {
    /// Creates a new, empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the entire surface as dirty. Clears any accumulated rectangles.
    pub fn mark_full(&mut self) {
        self.force_full = true;
        self.regions.clear();
    }

    /// Adds a dirty rectangle if the tracker is not already full.
    pub fn mark_rect(&mut self, rect: Rect) {
        if !rect.is_valid() || self.force_full {
            return;
        }
        self.regions.push(rect);
    }

    /// Adds the bounding box for the given shape, or full damage if none is available.
    pub fn mark_shape(&mut self, shape: &Shape) {
        match shape.bounding_box() {
            Some(rect) => self.mark_rect(rect),
            None => self.mark_full(),
        }
    }

    /// Returns true when at least one region (or the full surface) is pending.
    pub fn is_dirty(&self) -> bool {
        self.force_full || !self.regions.is_empty()
    }

    /// Drains the dirty regions gathered so far.
    ///
    /// When the full surface is marked, returns a single rectangle covering the
    /// entire surface; otherwise returns accumulated rectangles.
    pub fn take_regions(&mut self, width: i32, height: i32) -> Vec<Rect> {
        if self.force_full {
            self.force_full = false;
            self.regions.clear();
            if width > 0 && height > 0 {
                if let Some(full) = Rect::new(0, 0, width, height) {
                    return vec![full];
                }
            }
            Vec::new()
        } else {
            self.regions.drain(..).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Point, Shape, color::BLACK};

    fn dot(x: i32, y: i32) -> Shape {
        Shape::Circle {
            center: Point::new(x, y),
            radius: 2,
            pen: Some(BLACK),
            brush: Some(BLACK),
            width: 1.0,
        }
    }

    #[test]
    fn mark_shape_records_rectangles() {
        let mut tracker = DirtyTracker::new();
        tracker.mark_shape(&dot(5, 5));

        assert!(tracker.is_dirty());
        let rects = tracker.take_regions(100, 100);
        assert_eq!(rects.len(), 1);
        assert!(rects[0].width > 0);
        assert!(rects[0].height > 0);
        assert!(!tracker.is_dirty());
    }

    #[test]
    fn mark_full_takes_precedence() {
        let mut tracker = DirtyTracker::new();
        tracker.mark_shape(&dot(5, 5));
        tracker.mark_full();
        tracker.mark_shape(&dot(20, 20));

        let rects = tracker.take_regions(200, 100);
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0], Rect::new(0, 0, 200, 100).unwrap());
    }

    #[test]
    fn empty_polygon_marks_full_surface() {
        let mut tracker = DirtyTracker::new();
        tracker.mark_shape(&Shape::Polygon {
            points: vec![],
            pen: Some(BLACK),
            brush: None,
            width: 2.0,
        });

        let rects = tracker.take_regions(50, 50);
        assert_eq!(rects, vec![Rect::new(0, 0, 50, 50).unwrap()]);
    }
}
