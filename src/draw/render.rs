//! Cairo-based rendering functions for shapes.

use super::color::Color;
use super::shape::{Point, Shape};

/// Fills the entire canvas with the configured background color.
///
/// Should be called after clearing the surface but before rendering shapes.
pub fn render_background(ctx: &cairo::Context, color: Color) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    let _ = ctx.paint(); // Ignore errors - worst case the previous frame shows through
}

/// Renders all shapes in a collection to a Cairo context.
///
/// Shapes are drawn in the order they appear (first shape = bottom layer).
pub fn render_shapes(ctx: &cairo::Context, shapes: &[Shape]) {
    for shape in shapes {
        render_shape(ctx, shape);
    }
}

/// Renders a single shape to a Cairo context.
pub fn render_shape(ctx: &cairo::Context, shape: &Shape) {
    match shape {
        Shape::Polygon {
            points,
            pen,
            brush,
            width,
        } => {
            render_polygon(ctx, points, *pen, *brush, *width);
        }
        Shape::Circle {
            center,
            radius,
            pen,
            brush,
            width,
        } => {
            render_circle(ctx, *center, *radius, *pen, *brush, *width);
        }
    }
}

/// Render a closed polygon through the given points.
///
/// The committed point list normally ends with a copy of the first vertex;
/// closing the path regardless keeps the final joint mitered and makes the
/// fill well-defined for degenerate input.
fn render_polygon(
    ctx: &cairo::Context,
    points: &[Point],
    pen: Option<Color>,
    brush: Option<Color>,
    width: f64,
) {
    if points.is_empty() {
        return;
    }

    ctx.set_line_width(width);
    ctx.set_line_join(cairo::LineJoin::Miter);
    ctx.set_line_cap(cairo::LineCap::Round);

    ctx.move_to(points[0].x as f64, points[0].y as f64);
    for p in &points[1..] {
        ctx.line_to(p.x as f64, p.y as f64);
    }
    ctx.close_path();

    paint_current_path(ctx, pen, brush);
}

/// Render a circle via Cairo's arc.
fn render_circle(
    ctx: &cairo::Context,
    center: Point,
    radius: i32,
    pen: Option<Color>,
    brush: Option<Color>,
    width: f64,
) {
    if radius < 0 {
        return;
    }

    ctx.set_line_width(width);
    ctx.arc(
        center.x as f64,
        center.y as f64,
        radius as f64,
        0.0,
        2.0 * std::f64::consts::PI,
    );

    paint_current_path(ctx, pen, brush);
}

/// Fills then strokes the current path with the given brush/pen pair.
///
/// A `None` brush leaves the shape unfilled, a `None` pen draws no outline.
/// The path is always consumed so settings cannot leak into the next shape.
fn paint_current_path(ctx: &cairo::Context, pen: Option<Color>, brush: Option<Color>) {
    if let Some(brush) = brush {
        ctx.set_source_rgba(brush.r, brush.g, brush.b, brush.a);
        if pen.is_some() {
            let _ = ctx.fill_preserve();
        } else {
            let _ = ctx.fill();
        }
    }

    if let Some(pen) = pen {
        ctx.set_source_rgba(pen.r, pen.g, pen.b, pen.a);
        let _ = ctx.stroke();
    }

    if pen.is_none() && brush.is_none() {
        ctx.new_path();
    }
}
