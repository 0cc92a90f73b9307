//! Regular polygons generated from a side count.
//!
//! Vertices sit on a circle of radius [`RegularPolygon::edge_length`] around the
//! center. The first vertex is placed at a per-side-count starting angle chosen
//! so each supported polygon sits upright; unsupported side counts start at 0°.
//!
//! The vertex list is derived state. Moving a polygon regenerates it around the
//! new center instead of translating the stored vertices.

use crate::collision::point_in_rect;
use crate::geometry::Bounds;
use kurbo::{Point, Vec2};
use std::f64::consts::TAU;

/// Default distance from the center to each vertex.
pub const DEFAULT_EDGE_LENGTH: f64 = 100.0;

/// Side counts with a tuned starting angle.
pub const SUPPORTED_SIDE_COUNTS: [usize; 9] = [3, 4, 5, 6, 7, 8, 9, 10, 11];

/// Starting angle in degrees, indexed like [`SUPPORTED_SIDE_COUNTS`].
const START_ANGLES_DEG: [f64; 9] = [30.0, 45.0, 198.0, 30.0, 13.0, 22.0, 30.0, 36.0, 41.0];

/// Whether `side_count` has an entry in the starting-angle table.
pub fn is_supported(side_count: usize) -> bool {
    SUPPORTED_SIDE_COUNTS.contains(&side_count)
}

/// Starting angle in degrees for `side_count`, or 0 when it is not in the table.
pub fn start_angle_degrees(side_count: usize) -> f64 {
    SUPPORTED_SIDE_COUNTS
        .iter()
        .position(|&n| n == side_count)
        .map_or(0.0, |i| START_ANGLES_DEG[i])
}

/// Generate `side_count` vertices around `center`.
pub fn generate_vertices(center: Point, side_count: usize, edge_length: f64) -> Vec<Point> {
    let step = TAU / side_count as f64;
    let mut angle = start_angle_degrees(side_count).to_radians();
    let mut vertices = Vec::with_capacity(side_count);
    for _ in 0..side_count {
        vertices.push(Point::new(
            center.x + edge_length * angle.cos(),
            center.y + edge_length * angle.sin(),
        ));
        angle += step;
    }
    vertices
}

/// A regular polygon anchored at its center.
#[derive(Debug, Clone, PartialEq)]
pub struct RegularPolygon {
    center: Point,
    side_count: usize,
    edge_length: f64,
    vertices: Vec<Point>,
}

impl RegularPolygon {
    /// Create a polygon with the default edge length.
    pub fn new(center: Point, side_count: usize) -> Self {
        Self::with_edge_length(center, side_count, DEFAULT_EDGE_LENGTH)
    }

    /// Create a polygon with an explicit edge length.
    pub fn with_edge_length(center: Point, side_count: usize, edge_length: f64) -> Self {
        if !is_supported(side_count) {
            log::warn!("Unsupported polygon side count {side_count}, starting angle falls back to 0");
        }
        Self {
            center,
            side_count,
            edge_length,
            vertices: generate_vertices(center, side_count, edge_length),
        }
    }

    /// Center point (the anchor).
    pub fn center(&self) -> Point {
        self.center
    }

    /// Number of sides.
    pub fn side_count(&self) -> usize {
        self.side_count
    }

    /// Distance from the center to each vertex.
    pub fn edge_length(&self) -> f64 {
        self.edge_length
    }

    /// Current vertices in world coordinates.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Extent of the generated vertices; degenerate at the center when there are none.
    pub(crate) fn bounds(&self) -> Bounds {
        Bounds::from_points(self.vertices.iter().copied()).unwrap_or_else(|| Bounds::at(self.center))
    }

    pub(crate) fn contains(&self, point: Point) -> bool {
        let bounds = self.bounds();
        point_in_rect(point, bounds.p0, bounds.p1)
    }

    pub(crate) fn translate(&mut self, delta: Vec2) {
        self.center += delta;
        self.regenerate();
    }

    pub(crate) fn set_side_count(&mut self, side_count: usize) {
        if !is_supported(side_count) {
            log::warn!("Unsupported polygon side count {side_count}, starting angle falls back to 0");
        }
        self.side_count = side_count;
        self.regenerate();
    }

    fn regenerate(&mut self) {
        self.vertices = generate_vertices(self.center, self.side_count, self.edge_length);
    }
}
