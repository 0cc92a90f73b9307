//! Pure geometric collision predicates.
//!
//! These are the building blocks behind [`ShapeNode::check_collision`](crate::ShapeNode::check_collision).
//! None of them allocate or have side effects.

use kurbo::Point;

/// Proximity threshold for polyline vertex hits.
pub const HANDLE_RADIUS: f64 = 10.0;

/// Inclusive range membership, independent of bound order.
pub fn in_range(value: f64, a: f64, b: f64) -> bool {
    value >= a.min(b) && value <= a.max(b)
}

/// True if the closed intervals `[a0, a1]` and `[b0, b1]` overlap (bound order is irrelevant).
pub fn range_intersect(a0: f64, a1: f64, b0: f64, b1: f64) -> bool {
    a0.max(a1) >= b0.min(b1) && a0.min(a1) <= b0.max(b1)
}

/// Point inside the rectangle spanned by two opposite corners, edges included.
pub fn point_in_rect(point: Point, corner_a: Point, corner_b: Point) -> bool {
    in_range(point.x, corner_a.x, corner_b.x) && in_range(point.y, corner_a.y, corner_b.y)
}

/// Point strictly inside a circle; the boundary itself does not collide.
pub fn point_in_circle(point: Point, center: Point, radius: f64) -> bool {
    point.distance(center) < radius
}

/// Point within `threshold` of any vertex.
///
/// Segments between the vertices are not tested: a point halfway along a long
/// edge misses.
pub fn point_near_vertices(point: Point, vertices: &[Point], threshold: f64) -> bool {
    vertices.iter().any(|v| point.distance(*v) < threshold)
}

/// Rectangle-rectangle overlap, each rectangle given by two opposite corners.
pub fn rect_rect_intersect(a0: Point, a1: Point, b0: Point, b1: Point) -> bool {
    range_intersect(a0.x, a1.x, b0.x, b1.x) && range_intersect(a0.y, a1.y, b0.y, b1.y)
}

/// Two circles touch or overlap.
pub fn circle_circle_intersect(c0: Point, r0: f64, c1: Point, r1: f64) -> bool {
    c0.distance(c1) <= r0 + r1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_order_independent() {
        assert!(in_range(5.0, 0.0, 10.0));
        assert!(in_range(5.0, 10.0, 0.0));
        assert!(in_range(0.0, 10.0, 0.0));
        assert!(!in_range(-0.1, 0.0, 10.0));
    }

    #[test]
    fn test_point_in_rect_any_corner_order() {
        let p = Point::new(3.0, 7.0);
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 10.0);
        let c = Point::new(10.0, 0.0);
        let d = Point::new(0.0, 10.0);
        assert!(point_in_rect(p, a, b));
        assert!(point_in_rect(p, b, a));
        assert!(point_in_rect(p, c, d));
        assert!(point_in_rect(p, d, c));
        assert!(!point_in_rect(Point::new(11.0, 7.0), b, a));
    }

    #[test]
    fn test_point_in_circle_excludes_boundary() {
        let center = Point::new(0.0, 0.0);
        assert!(point_in_circle(center, center, 5.0));
        assert!(!point_in_circle(Point::new(5.0, 0.0), center, 5.0));
        assert!(!point_in_circle(Point::new(3.0, 4.0), center, 5.0));
        assert!(point_in_circle(Point::new(3.0, 3.9), center, 5.0));
    }

    #[test]
    fn test_point_near_vertices_ignores_segments() {
        let vertices = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
        assert!(point_near_vertices(Point::new(100.0, 1.0), &vertices, HANDLE_RADIUS));
        assert!(point_near_vertices(Point::new(2.0, 2.0), &vertices, HANDLE_RADIUS));
        assert!(!point_near_vertices(Point::new(50.0, 1.0), &vertices, HANDLE_RADIUS));
    }

    #[test]
    fn test_range_intersect() {
        assert!(range_intersect(0.0, 10.0, 5.0, 15.0));
        assert!(range_intersect(10.0, 0.0, 15.0, 10.0));
        assert!(!range_intersect(0.0, 10.0, 10.5, 20.0));
    }

    #[test]
    fn test_rect_rect_intersect() {
        let a0 = Point::new(0.0, 0.0);
        let a1 = Point::new(10.0, 10.0);
        assert!(rect_rect_intersect(a0, a1, Point::new(5.0, 5.0), Point::new(20.0, 20.0)));
        // Overlapping on x only.
        assert!(!rect_rect_intersect(a0, a1, Point::new(5.0, 20.0), Point::new(8.0, 30.0)));
    }

    #[test]
    fn test_circle_circle_intersect() {
        let a = Point::new(0.0, 0.0);
        assert!(circle_circle_intersect(a, 5.0, Point::new(10.0, 0.0), 5.0));
        assert!(!circle_circle_intersect(a, 5.0, Point::new(10.1, 0.0), 5.0));
    }
}
