//! The drawing contract consumed by shape builders.
//!
//! [`Canvas`] is the seam between click-driven geometry accumulation and the
//! actual rendering backend: builders commit finished geometry through it and
//! read/write the current pen and brush colors, nothing more. [`CanvasState`]
//! is the retained production implementation; tests substitute a recording
//! double.

use super::color::Color;
use super::dirty::DirtyTracker;
use super::frame::Frame;
use super::shape::{Point, Shape};
use crate::util::Rect;

/// Drawing surface contract.
///
/// `circle` and `polygon` commit geometry immediately under the canvas's
/// current colors. A `None` pen draws no outline; a `None` brush leaves the
/// shape unfilled.
pub trait Canvas {
    /// Commits a circle centered at `center` with integer `radius`.
    fn circle(&mut self, center: Point, radius: i32);

    /// Commits a polygon through `points` in order. The slice is expected to
    /// already contain the closing vertex; degenerate inputs are committed
    /// as-is.
    fn polygon(&mut self, points: &[Point]);

    /// Current outline color.
    fn pen_color(&self) -> Option<Color>;

    /// Sets the outline color for subsequent commits.
    fn set_pen_color(&mut self, color: Option<Color>);

    /// Current fill color.
    fn brush_color(&self) -> Option<Color>;

    /// Sets the fill color for subsequent commits.
    fn set_brush_color(&mut self, color: Option<Color>);
}

/// Scoped pen/brush override that restores the previous colors on drop.
///
/// Restoring on drop covers every exit path, so a panic or early return inside
/// the scope can never leak the override into later user-visible commits.
pub struct ColorScope<'a> {
    canvas: &'a mut dyn Canvas,
    saved_pen: Option<Color>,
    saved_brush: Option<Color>,
}

impl<'a> ColorScope<'a> {
    /// Captures the canvas's current colors, then installs the overrides.
    pub fn new(canvas: &'a mut dyn Canvas, pen: Option<Color>, brush: Option<Color>) -> Self {
        let saved_pen = canvas.pen_color();
        let saved_brush = canvas.brush_color();
        canvas.set_pen_color(pen);
        canvas.set_brush_color(brush);
        Self {
            canvas,
            saved_pen,
            saved_brush,
        }
    }

    /// The canvas with the override colors in effect.
    pub fn canvas(&mut self) -> &mut dyn Canvas {
        &mut *self.canvas
    }
}

impl Drop for ColorScope<'_> {
    fn drop(&mut self) {
        self.canvas.set_pen_color(self.saved_pen);
        self.canvas.set_brush_color(self.saved_brush);
    }
}

/// Appearance of the click-feedback marker dot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerStyle {
    pub color: Color,
    pub radius: i32,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            color: super::color::BLACK,
            radius: 2,
        }
    }
}

/// Draws the small filled feedback dot shown for each accumulated click.
///
/// Pen and brush are both forced to the marker color for exactly one circle
/// commit; the caller's colors are back in place when this returns.
pub fn draw_marker(canvas: &mut dyn Canvas, at: Point, style: MarkerStyle) {
    let mut scope = ColorScope::new(canvas, Some(style.color), Some(style.color));
    scope.canvas().circle(at, style.radius);
}

/// Retained canvas backed by a [`Frame`] of committed shapes.
///
/// Commits capture the colors in effect at commit time and record dirty
/// regions so the backend can damage only what changed.
#[derive(Debug)]
pub struct CanvasState {
    frame: Frame,
    pen: Option<Color>,
    brush: Option<Color>,
    line_width: f64,
    dirty: DirtyTracker,
}

impl CanvasState {
    pub fn new(pen: Option<Color>, brush: Option<Color>, line_width: f64) -> Self {
        Self {
            frame: Frame::new(),
            pen,
            brush,
            line_width,
            dirty: DirtyTracker::new(),
        }
    }

    /// All committed shapes in commit order.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Returns true when regions are waiting to be repainted.
    pub fn has_pending_damage(&self) -> bool {
        self.dirty.is_dirty()
    }

    /// Marks a non-shape region (e.g., the status bar) for repaint.
    pub fn mark_dirty_rect(&mut self, rect: Rect) {
        self.dirty.mark_rect(rect);
    }

    /// Marks the whole surface for repaint.
    pub fn mark_all_dirty(&mut self) {
        self.dirty.mark_full();
    }

    /// Drains pending damage, clamped to the surface size.
    pub fn take_damage(&mut self, width: i32, height: i32) -> Vec<Rect> {
        self.dirty.take_regions(width, height)
    }

    fn commit(&mut self, shape: Shape) {
        self.dirty.mark_shape(&shape);
        self.frame.add_shape(shape);
    }
}

impl Canvas for CanvasState {
    fn circle(&mut self, center: Point, radius: i32) {
        self.commit(Shape::Circle {
            center,
            radius,
            pen: self.pen,
            brush: self.brush,
            width: self.line_width,
        });
    }

    fn polygon(&mut self, points: &[Point]) {
        self.commit(Shape::Polygon {
            points: points.to_vec(),
            pen: self.pen,
            brush: self.brush,
            width: self.line_width,
        });
    }

    fn pen_color(&self) -> Option<Color> {
        self.pen
    }

    fn set_pen_color(&mut self, color: Option<Color>) {
        self.pen = color;
    }

    fn brush_color(&self) -> Option<Color> {
        self.brush
    }

    fn set_brush_color(&mut self, color: Option<Color>) {
        self.brush = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, BLUE, RED};

    #[test]
    fn commits_capture_colors_at_commit_time() {
        let mut canvas = CanvasState::new(Some(RED), None, 2.0);
        canvas.circle(Point::new(10, 10), 5);
        canvas.set_pen_color(Some(BLUE));
        canvas.set_brush_color(Some(BLUE));
        canvas.circle(Point::new(20, 20), 5);

        let shapes = &canvas.frame().shapes;
        assert_eq!(shapes.len(), 2);
        match &shapes[0] {
            Shape::Circle { pen, brush, .. } => {
                assert_eq!(*pen, Some(RED));
                assert_eq!(*brush, None);
            }
            other => panic!("unexpected shape: {other:?}"),
        }
        match &shapes[1] {
            Shape::Circle { pen, brush, .. } => {
                assert_eq!(*pen, Some(BLUE));
                assert_eq!(*brush, Some(BLUE));
            }
            other => panic!("unexpected shape: {other:?}"),
        }
    }

    #[test]
    fn color_scope_restores_on_drop() {
        let mut canvas = CanvasState::new(Some(RED), Some(BLUE), 2.0);
        {
            let mut scope = ColorScope::new(&mut canvas, Some(BLACK), None);
            assert_eq!(scope.canvas().pen_color(), Some(BLACK));
            assert_eq!(scope.canvas().brush_color(), None);
        }
        assert_eq!(canvas.pen_color(), Some(RED));
        assert_eq!(canvas.brush_color(), Some(BLUE));
    }

    #[test]
    fn marker_commits_filled_dot_without_leaking_color() {
        let mut canvas = CanvasState::new(Some(RED), None, 2.0);
        draw_marker(&mut canvas, Point::new(7, 9), MarkerStyle::default());

        assert_eq!(canvas.pen_color(), Some(RED));
        assert_eq!(canvas.brush_color(), None);
        match &canvas.frame().shapes[0] {
            Shape::Circle {
                center,
                radius,
                pen,
                brush,
                ..
            } => {
                assert_eq!(*center, Point::new(7, 9));
                assert_eq!(*radius, 2);
                assert_eq!(*pen, Some(BLACK));
                assert_eq!(*brush, Some(BLACK));
            }
            other => panic!("unexpected shape: {other:?}"),
        }
    }

    #[test]
    fn commits_accumulate_damage() {
        let mut canvas = CanvasState::new(Some(BLACK), None, 2.0);
        assert!(!canvas.has_pending_damage());

        canvas.circle(Point::new(50, 50), 10);
        assert!(canvas.has_pending_damage());

        let damage = canvas.take_damage(800, 600);
        assert_eq!(damage.len(), 1);
        assert!(!canvas.has_pending_damage());
    }
}
