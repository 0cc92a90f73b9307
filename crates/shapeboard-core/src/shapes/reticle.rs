//! Crosshair reticle built from two polyline children.

use super::{Polyline, ShapeNode};
use crate::geometry::Bounds;
use crate::style;
use kurbo::{Point, Vec2};

/// A crosshair marker. It has no geometry of its own: its extent and movement
/// come from its two polyline children.
#[derive(Debug, Clone, PartialEq)]
pub struct Reticle {
    /// Crossing point of the two arms.
    pub center: Point,
}

impl Reticle {
    /// Create a reticle at `center`.
    pub fn new(center: Point) -> Self {
        Self { center }
    }

    /// The horizontal and vertical arms, each `2 * arm` long.
    pub(crate) fn arms(center: Point, arm: f64) -> [ShapeNode; 2] {
        let horizontal = Polyline::segment(
            Point::new(center.x - arm, center.y),
            Point::new(center.x + arm, center.y),
        )
        .with_color(style::RETICLE);
        let vertical = Polyline::segment(
            Point::new(center.x, center.y - arm),
            Point::new(center.x, center.y + arm),
        )
        .with_color(style::RETICLE);
        [ShapeNode::from_polyline(horizontal), ShapeNode::from_polyline(vertical)]
    }

    pub(crate) fn bounds(&self, children: &[ShapeNode]) -> Bounds {
        children
            .iter()
            .map(ShapeNode::bounds)
            .reduce(|acc, b| acc.union(&b))
            .unwrap_or_else(|| Bounds::at(self.center))
    }

    pub(crate) fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }
}
