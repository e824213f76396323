//! Geometry committed to the sketch canvas.

use super::color::Color;
use crate::util::Rect;

/// Integer screen coordinates, immutable once captured from a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A committed shape with the colors it was drawn under.
///
/// Shapes capture the pen (outline) and brush (fill) colors in effect at
/// commit time; later color changes never restyle already-committed geometry.
/// `None` for the pen means no outline, `None` for the brush means unfilled.
#[derive(Clone, Debug)]
pub enum Shape {
    /// Closed polygon through `points` in insertion order. The caller is
    /// responsible for appending the closing vertex; degenerate inputs
    /// (one or two distinct points) are rendered as-is.
    Polygon {
        points: Vec<Point>,
        pen: Option<Color>,
        brush: Option<Color>,
        /// Outline thickness in pixels
        width: f64,
    },
    /// Circle with integer center and radius.
    Circle {
        center: Point,
        radius: i32,
        pen: Option<Color>,
        brush: Option<Color>,
        /// Outline thickness in pixels
        width: f64,
    },
}

impl Shape {
    /// Returns the axis-aligned bounding box for this shape, expanded to cover stroke width.
    ///
    /// The returned rectangle is suitable for dirty region tracking and damage hints.
    /// Returns `None` only when the shape has no drawable area (e.g., no points).
    pub fn bounding_box(&self) -> Option<Rect> {
        match self {
            Shape::Polygon { points, width, .. } => bounding_box_for_points(points, *width),
            Shape::Circle {
                center,
                radius,
                width,
                ..
            } => bounding_box_for_circle(*center, *radius, *width),
        }
    }
}

fn stroke_padding(width: f64) -> i32 {
    let padding = (width / 2.0).ceil() as i32;
    padding.max(1)
}

pub(crate) fn bounding_box_for_points(points: &[Point], width: f64) -> Option<Rect> {
    if points.is_empty() {
        return None;
    }
    let mut min_x = points[0].x;
    let mut max_x = points[0].x;
    let mut min_y = points[0].y;
    let mut max_y = points[0].y;

    for p in &points[1..] {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    let padding = stroke_padding(width);
    min_x -= padding;
    max_x += padding;
    min_y -= padding;
    max_y += padding;

    ensure_positive_rect(min_x, min_y, max_x, max_y)
}

pub(crate) fn bounding_box_for_circle(center: Point, radius: i32, width: f64) -> Option<Rect> {
    let radius = radius.max(0);
    let padding = stroke_padding(width);
    let min_x = (center.x - radius) - padding;
    let max_x = (center.x + radius) + padding;
    let min_y = (center.y - radius) - padding;
    let max_y = (center.y + radius) + padding;

    ensure_positive_rect(min_x, min_y, max_x, max_y)
}

fn ensure_positive_rect(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Rect> {
    let (min_x, max_x) = if min_x == max_x {
        (min_x, max_x + 1)
    } else {
        (min_x, max_x)
    };
    let (min_y, max_y) = if min_y == max_y {
        (min_y, max_y + 1)
    } else {
        (min_y, max_y)
    };
    Rect::from_min_max(min_x, min_y, max_x, max_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BLACK;

    #[test]
    fn polygon_bounding_box_expands_with_stroke_width() {
        let shape = Shape::Polygon {
            points: vec![Point::new(10, 20), Point::new(30, 40), Point::new(10, 20)],
            pen: Some(BLACK),
            brush: None,
            width: 6.0,
        };

        let rect = shape.bounding_box().expect("polygon should have bounds");
        assert_eq!(rect.x, 7);
        assert_eq!(rect.y, 17);
        assert_eq!(rect.width, 26);
        assert_eq!(rect.height, 26);
    }

    #[test]
    fn empty_polygon_has_no_bounds() {
        let shape = Shape::Polygon {
            points: vec![],
            pen: Some(BLACK),
            brush: None,
            width: 2.0,
        };
        assert!(shape.bounding_box().is_none());
    }

    #[test]
    fn circle_bounding_box_covers_radius_and_stroke() {
        let shape = Shape::Circle {
            center: Point::new(200, 150),
            radius: 40,
            pen: Some(BLACK),
            brush: None,
            width: 2.0,
        };

        let rect = shape.bounding_box().expect("circle should have bounds");
        assert_eq!(rect.x, 159);
        assert_eq!(rect.y, 109);
        assert_eq!(rect.width, 82);
        assert_eq!(rect.height, 82);
    }

    #[test]
    fn zero_radius_circle_still_produces_area() {
        let shape = Shape::Circle {
            center: Point::new(5, 5),
            radius: 0,
            pen: Some(BLACK),
            brush: Some(BLACK),
            width: 1.0,
        };

        let rect = shape.bounding_box().expect("marker dot should have bounds");
        assert!(rect.is_valid());
    }
}
