//! Shape builders: the click-to-geometry state machines.
//!
//! A builder consumes clicks while a shape is under construction and commits
//! the finished geometry through the [`Canvas`] contract. The variant set is
//! closed: every mode the registry can activate is one of the enum arms below,
//! sharing the same two-method capability (primary click, secondary click).

use log::debug;

use crate::draw::{Canvas, MarkerStyle, Point, draw_marker};
use crate::util;

/// Accumulates polygon vertices click by click.
///
/// Primary clicks append vertices (with a feedback marker); a secondary click
/// closes the loop by re-appending the first vertex, commits the polygon, and
/// empties the builder. A secondary click with no vertices is ignored.
#[derive(Debug)]
pub struct PolygonBuilder {
    vertices: Vec<Point>,
    marker: MarkerStyle,
}

impl PolygonBuilder {
    pub fn new(marker: MarkerStyle) -> Self {
        Self {
            vertices: Vec::new(),
            marker,
        }
    }

    /// Vertices accumulated so far (the closing vertex is never stored
    /// between clicks, only appended at commit).
    pub fn pending_vertices(&self) -> usize {
        self.vertices.len()
    }

    fn primary_click(&mut self, p: Point, canvas: &mut dyn Canvas) {
        draw_marker(canvas, p, self.marker);
        self.vertices.push(p);
        debug!(
            "Polygon vertex {} at ({}, {})",
            self.vertices.len(),
            p.x,
            p.y
        );
    }

    fn secondary_click(&mut self, canvas: &mut dyn Canvas) {
        if self.vertices.is_empty() {
            return;
        }
        // Close the loop through the first vertex, exactly once, at commit.
        self.vertices.push(self.vertices[0]);
        canvas.polygon(&self.vertices);
        debug!("Committed polygon with {} vertices", self.vertices.len());
        self.vertices.clear();
    }
}

/// Captures a circle as center click + rim click.
///
/// The first primary click fixes the center (with a feedback marker); the
/// second commits a circle whose radius is the truncated Euclidean distance
/// between the two clicks. Secondary clicks never do anything here.
#[derive(Debug)]
pub struct CircleBuilder {
    center: Option<Point>,
    marker: MarkerStyle,
}

impl CircleBuilder {
    pub fn new(marker: MarkerStyle) -> Self {
        Self {
            center: None,
            marker,
        }
    }

    /// The center awaiting its rim click, if the first click has happened.
    pub fn pending_center(&self) -> Option<Point> {
        self.center
    }

    fn primary_click(&mut self, p: Point, canvas: &mut dyn Canvas) {
        match self.center {
            None => {
                draw_marker(canvas, p, self.marker);
                self.center = Some(p);
                debug!("Circle center at ({}, {})", p.x, p.y);
            }
            Some(center) => {
                let radius = util::integer_radius(center, p);
                canvas.circle(center, radius);
                debug!(
                    "Committed circle at ({}, {}) radius {}",
                    center.x, center.y, radius
                );
                self.center = None;
            }
        }
    }
}

/// Closed set of shape builders behind a common two-method capability.
#[derive(Debug)]
pub enum ShapeBuilder {
    Polygon(PolygonBuilder),
    Circle(CircleBuilder),
}

impl ShapeBuilder {
    pub fn polygon(marker: MarkerStyle) -> Self {
        Self::Polygon(PolygonBuilder::new(marker))
    }

    pub fn circle(marker: MarkerStyle) -> Self {
        Self::Circle(CircleBuilder::new(marker))
    }

    /// Handles a Primary (left) click at `p`.
    pub fn handle_primary_click(&mut self, p: Point, canvas: &mut dyn Canvas) {
        match self {
            Self::Polygon(builder) => builder.primary_click(p, canvas),
            Self::Circle(builder) => builder.primary_click(p, canvas),
        }
    }

    /// Handles a Secondary (right) click.
    ///
    /// The click position is irrelevant to both current builders: polygons
    /// close through their first vertex and circles ignore the button
    /// entirely.
    pub fn handle_secondary_click(&mut self, _p: Point, canvas: &mut dyn Canvas) {
        match self {
            Self::Polygon(builder) => builder.secondary_click(canvas),
            Self::Circle(_) => {}
        }
    }

    /// Short human-readable description of the in-progress shape, for the
    /// status bar. `None` when the builder is at rest.
    pub fn progress_label(&self) -> Option<String> {
        match self {
            Self::Polygon(builder) => {
                let n = builder.pending_vertices();
                if n == 0 {
                    None
                } else {
                    Some(format!("{n} pt{}", if n == 1 { "" } else { "s" }))
                }
            }
            Self::Circle(builder) => builder.pending_center().map(|_| "center set".to_string()),
        }
    }
}
