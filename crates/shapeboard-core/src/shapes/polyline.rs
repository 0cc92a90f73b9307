//! Polyline shape.

use crate::collision::{HANDLE_RADIUS, point_near_vertices};
use crate::geometry::Bounds;
use crate::style;
use kurbo::{Point, Vec2};
use peniko::Color;

/// An open polyline: a start point followed by any number of further vertices.
#[derive(Debug, Clone)]
pub struct Polyline {
    /// Start point (the anchor).
    pub start: Point,
    /// Vertices after the start, in drawing order.
    pub points: Vec<Point>,
    /// Stroke color when not hovered.
    pub color: Color,
}

impl Polyline {
    /// Create a polyline from a start point and the vertices that follow it.
    pub fn new(start: Point, points: Vec<Point>) -> Self {
        Self {
            start,
            points,
            color: style::POLYLINE,
        }
    }

    /// A single segment.
    pub fn segment(start: Point, end: Point) -> Self {
        Self::new(start, vec![end])
    }

    /// Set the stroke color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Get all points including the start.
    pub fn all_points(&self) -> Vec<Point> {
        let mut pts = vec![self.start];
        pts.extend(&self.points);
        pts
    }

    pub(crate) fn bounds(&self) -> Bounds {
        let points = std::iter::once(self.start).chain(self.points.iter().copied());
        Bounds::from_points(points).unwrap_or_else(|| Bounds::at(self.start))
    }

    pub(crate) fn contains(&self, point: Point) -> bool {
        point_near_vertices(point, &self.all_points(), HANDLE_RADIUS)
    }

    pub(crate) fn translate(&mut self, delta: Vec2) {
        self.start += delta;
        for p in &mut self.points {
            *p += delta;
        }
    }
}
