//! Two-corner bounding boxes.

use crate::collision::in_range;
use kurbo::{Point, Rect};

/// Axis-aligned extent of a node, stored as the two corners its geometry produced.
///
/// The corners are kept exactly as computed and are not required to be sorted:
/// a rectangle with a negative width stores its anchor as `p0` even though it is
/// the right-hand edge. Every query here normalizes internally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// First corner (usually the minimum).
    pub p0: Point,
    /// Second corner (usually the maximum).
    pub p1: Point,
}

impl Bounds {
    /// Create bounds from two corners.
    pub fn new(p0: Point, p1: Point) -> Self {
        Self { p0, p1 }
    }

    /// Zero-size bounds at a single point.
    pub fn at(point: Point) -> Self {
        Self::new(point, point)
    }

    /// Tight bounds over a set of points, or `None` when the iterator is empty.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Some(Self::new(min, max))
    }

    /// Both corners, in storage order.
    pub fn corners(&self) -> [Point; 2] {
        [self.p0, self.p1]
    }

    /// Normalized kurbo rectangle.
    pub fn to_rect(&self) -> Rect {
        Rect::from_points(self.p0, self.p1)
    }

    /// Inclusive containment on both axes, independent of corner order.
    pub fn contains(&self, point: Point) -> bool {
        in_range(point.x, self.p0.x, self.p1.x) && in_range(point.y, self.p0.y, self.p1.y)
    }

    /// Smallest bounds covering both boxes (result is normalized).
    pub fn union(&self, other: &Bounds) -> Bounds {
        let rect = self.to_rect().union(other.to_rect());
        Bounds::new(Point::new(rect.x0, rect.y0), Point::new(rect.x1, rect.y1))
    }
}
