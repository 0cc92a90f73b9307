//! Rectangle geometry, shared by plain rectangles, selection overlays and the screen background.

use crate::collision::point_in_rect;
use crate::geometry::Bounds;
use kurbo::{Point, Rect, Vec2};

/// An axis-aligned rectangle anchored at a corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    /// Anchor corner (top-left for positive sizes).
    pub position: Point,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            position,
            width,
            height,
        }
    }

    /// Corner opposite the anchor.
    pub fn far_corner(&self) -> Point {
        Point::new(self.position.x + self.width, self.position.y + self.height)
    }

    /// Get the rectangle as a normalized kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::from_points(self.position, self.far_corner())
    }

    pub(crate) fn bounds(&self) -> Bounds {
        Bounds::new(self.position, self.far_corner())
    }

    pub(crate) fn contains(&self, point: Point) -> bool {
        point_in_rect(point, self.position, self.far_corner())
    }

    pub(crate) fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Replace the size; only positive values are taken.
    pub(crate) fn resize(&mut self, width: Option<f64>, height: Option<f64>) {
        if let Some(width) = width.filter(|w| *w > 0.0) {
            self.width = width;
        }
        if let Some(height) = height.filter(|h| *h > 0.0) {
            self.height = height;
        }
    }
}
