//! Circle shape.

use crate::collision::point_in_circle;
use crate::geometry::Bounds;
use kurbo::{Point, Vec2};

/// A circle anchored at its center.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    /// Center point.
    pub center: Point,
    /// Radius.
    pub radius: f64,
}

impl Circle {
    /// Create a new circle.
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    pub(crate) fn bounds(&self) -> Bounds {
        Bounds::new(
            Point::new(self.center.x - self.radius, self.center.y - self.radius),
            Point::new(self.center.x + self.radius, self.center.y + self.radius),
        )
    }

    pub(crate) fn contains(&self, point: Point) -> bool {
        point_in_circle(point, self.center, self.radius)
    }

    pub(crate) fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }
}
