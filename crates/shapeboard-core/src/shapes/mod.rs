//! Shape nodes: the unit of the scene tree.

mod circle;
mod polygon;
mod polyline;
mod rectangle;
mod reticle;

pub use circle::Circle;
pub use polygon::{
    DEFAULT_EDGE_LENGTH, RegularPolygon, SUPPORTED_SIDE_COUNTS, generate_vertices, is_supported,
    start_angle_degrees,
};
pub use polyline::Polyline;
pub use rectangle::Rectangle;
pub use reticle::Reticle;

use crate::geometry::Bounds;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for nodes.
pub type NodeId = Uuid;

/// Discriminant of a node's geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    SelectOverlay,
    ScreenBackground,
    Circle,
    Polyline,
    RegularPolygon,
    Reticle,
}

impl ShapeKind {
    /// Whether a node of this kind can be picked up and dragged.
    ///
    /// The screen background and the selection overlay never can.
    pub fn is_draggable(self) -> bool {
        !matches!(self, ShapeKind::ScreenBackground | ShapeKind::SelectOverlay)
    }

    /// Whether a node of this kind takes part in selection bounds.
    pub fn contributes_to_selection(self) -> bool {
        self.is_draggable()
    }
}

/// Geometry payload of a node, one variant per kind.
#[derive(Debug, Clone)]
pub enum Geometry {
    Rectangle(Rectangle),
    SelectOverlay(Rectangle),
    ScreenBackground(Rectangle),
    Circle(Circle),
    Polyline(Polyline),
    RegularPolygon(RegularPolygon),
    Reticle(Reticle),
}

impl Geometry {
    /// Kind tag for this payload.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Geometry::Rectangle(_) => ShapeKind::Rectangle,
            Geometry::SelectOverlay(_) => ShapeKind::SelectOverlay,
            Geometry::ScreenBackground(_) => ShapeKind::ScreenBackground,
            Geometry::Circle(_) => ShapeKind::Circle,
            Geometry::Polyline(_) => ShapeKind::Polyline,
            Geometry::RegularPolygon(_) => ShapeKind::RegularPolygon,
            Geometry::Reticle(_) => ShapeKind::Reticle,
        }
    }

    /// Reference origin: rectangle corner, circle/polygon/reticle center, polyline start.
    pub fn anchor(&self) -> Point {
        match self {
            Geometry::Rectangle(r) | Geometry::SelectOverlay(r) | Geometry::ScreenBackground(r) => {
                r.position
            }
            Geometry::Circle(c) => c.center,
            Geometry::Polyline(l) => l.start,
            Geometry::RegularPolygon(p) => p.center(),
            Geometry::Reticle(r) => r.center,
        }
    }

    fn bounds(&self, children: &[ShapeNode]) -> Bounds {
        match self {
            Geometry::Rectangle(r) | Geometry::SelectOverlay(r) | Geometry::ScreenBackground(r) => {
                r.bounds()
            }
            Geometry::Circle(c) => c.bounds(),
            Geometry::Polyline(l) => l.bounds(),
            Geometry::RegularPolygon(p) => p.bounds(),
            Geometry::Reticle(r) => r.bounds(children),
        }
    }
}

/// A node in the scene tree.
///
/// A node exclusively owns its children; they are dropped with it. The bounding
/// box is recomputed by every method that changes geometry, so [`ShapeNode::bounds`]
/// never lags behind the shape. Nodes are not `Clone`; ids stay unique within a tree.
#[derive(Debug)]
pub struct ShapeNode {
    id: NodeId,
    geometry: Geometry,
    bounds: Bounds,
    children: Vec<ShapeNode>,
    selected: bool,
}

impl ShapeNode {
    /// Create a node from a geometry payload.
    pub fn new(geometry: Geometry) -> Self {
        let bounds = geometry.bounds(&[]);
        Self {
            id: Uuid::new_v4(),
            geometry,
            bounds,
            children: Vec::new(),
            selected: false,
        }
    }

    /// A plain rectangle.
    pub fn rectangle(position: Point, width: f64, height: f64) -> Self {
        Self::new(Geometry::Rectangle(Rectangle::new(position, width, height)))
    }

    /// A selection overlay rectangle.
    pub fn select_overlay(position: Point, width: f64, height: f64) -> Self {
        Self::new(Geometry::SelectOverlay(Rectangle::new(position, width, height)))
    }

    /// The screen background, usually the root of a scene.
    pub fn screen_background(position: Point, width: f64, height: f64) -> Self {
        Self::new(Geometry::ScreenBackground(Rectangle::new(position, width, height)))
    }

    /// A circle.
    pub fn circle(center: Point, radius: f64) -> Self {
        Self::new(Geometry::Circle(Circle::new(center, radius)))
    }

    /// A polyline from `start` through `points`.
    pub fn polyline(start: Point, points: Vec<Point>) -> Self {
        Self::from_polyline(Polyline::new(start, points))
    }

    /// A single line segment.
    pub fn line(start: Point, end: Point) -> Self {
        Self::from_polyline(Polyline::segment(start, end))
    }

    pub(crate) fn from_polyline(polyline: Polyline) -> Self {
        Self::new(Geometry::Polyline(polyline))
    }

    /// A regular polygon with the default edge length.
    pub fn regular_polygon(center: Point, side_count: usize) -> Self {
        Self::new(Geometry::RegularPolygon(RegularPolygon::new(center, side_count)))
    }

    /// A crosshair at `center` whose arms reach `arm` units in each direction.
    pub fn reticle(center: Point, arm: f64) -> Self {
        let mut node = Self::new(Geometry::Reticle(Reticle::new(center)));
        for child in Reticle::arms(center, arm) {
            node.add_child(child);
        }
        node
    }

    /// Stable identifier assigned at construction.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Kind of this node's geometry.
    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    /// Kind-specific geometry payload.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Reference origin of the geometry (see [`Geometry::anchor`]).
    pub fn anchor(&self) -> Point {
        self.geometry.anchor()
    }

    /// Current bounding box.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Direct children in draw order, back to front.
    pub fn children(&self) -> &[ShapeNode] {
        &self.children
    }

    /// Whether the last resolved click left this node selected.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Set the selection flag.
    pub fn select(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Append a child; it is drawn above its earlier siblings.
    pub fn add_child(&mut self, child: ShapeNode) {
        self.children.push(child);
        self.refresh_bounds();
    }

    /// Remove the direct child with `id`.
    ///
    /// Returns the removed node, or `None` (and leaves the children untouched)
    /// when no child has that id.
    pub fn remove_child(&mut self, id: NodeId) -> Option<ShapeNode> {
        let Some(index) = self.children.iter().position(|c| c.id == id) else {
            log::warn!("remove_child: {id} is not a child of {}", self.id);
            return None;
        };
        let removed = self.children.remove(index);
        self.refresh_bounds();
        Some(removed)
    }

    /// Point containment, per kind.
    ///
    /// Rectangles test inclusive corner ranges, circles exclude their boundary,
    /// polylines test vertex proximity, and polygons and reticles fall back to
    /// their bounding box.
    pub fn check_collision(&self, point: Point) -> bool {
        match &self.geometry {
            Geometry::Rectangle(r) | Geometry::SelectOverlay(r) | Geometry::ScreenBackground(r) => {
                r.contains(point)
            }
            Geometry::Circle(c) => c.contains(point),
            Geometry::Polyline(l) => l.contains(point),
            Geometry::RegularPolygon(p) => p.contains(point),
            Geometry::Reticle(_) => self.bounds.contains(point),
        }
    }

    /// Move the node by `delta`.
    ///
    /// Polygons regenerate their vertices around the moved center; reticles move
    /// their arms. Children of other kinds stay where they are.
    pub fn translate(&mut self, delta: Vec2) {
        match &mut self.geometry {
            Geometry::Rectangle(r) | Geometry::SelectOverlay(r) | Geometry::ScreenBackground(r) => {
                r.translate(delta)
            }
            Geometry::Circle(c) => c.translate(delta),
            Geometry::Polyline(l) => l.translate(delta),
            Geometry::RegularPolygon(p) => p.translate(delta),
            Geometry::Reticle(r) => {
                r.translate(delta);
                for child in &mut self.children {
                    child.translate(delta);
                }
            }
        }
        self.refresh_bounds();
    }

    /// Resize a rectangle-like node. Non-positive values keep the current size.
    ///
    /// Returns `false` for kinds without a width and height.
    pub fn resize(&mut self, width: Option<f64>, height: Option<f64>) -> bool {
        match &mut self.geometry {
            Geometry::Rectangle(r) | Geometry::SelectOverlay(r) | Geometry::ScreenBackground(r) => {
                r.resize(width, height)
            }
            _ => return false,
        }
        self.refresh_bounds();
        true
    }

    /// Change a circle's radius. Returns `false` for other kinds.
    pub fn set_radius(&mut self, radius: f64) -> bool {
        let Geometry::Circle(c) = &mut self.geometry else {
            return false;
        };
        c.radius = radius;
        self.refresh_bounds();
        true
    }

    /// Change a polygon's side count. Returns `false` for other kinds.
    pub fn set_side_count(&mut self, side_count: usize) -> bool {
        let Geometry::RegularPolygon(p) = &mut self.geometry else {
            return false;
        };
        p.set_side_count(side_count);
        self.refresh_bounds();
        true
    }

    /// Find a node by id in this subtree, this node included.
    pub fn find(&self, id: NodeId) -> Option<&ShapeNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Translate the node with `id` somewhere in this subtree.
    ///
    /// Every ancestor on the way back up refreshes its bounds, which keeps
    /// composite boxes current. Returns `false` when the id is not in the subtree.
    pub fn translate_node(&mut self, id: NodeId, delta: Vec2) -> bool {
        if self.id == id {
            self.translate(delta);
            return true;
        }
        let moved = self
            .children
            .iter_mut()
            .any(|child| child.translate_node(id, delta));
        if moved {
            self.refresh_bounds();
        }
        moved
    }

    pub(crate) fn children_mut(&mut self) -> &mut [ShapeNode] {
        &mut self.children
    }

    fn refresh_bounds(&mut self) {
        self.bounds = self.geometry.bounds(&self.children);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_point(actual: Point, x: f64, y: f64) {
        assert!((actual.x - x).abs() < 1e-9, "x: {} != {}", actual.x, x);
        assert!((actual.y - y).abs() < 1e-9, "y: {} != {}", actual.y, y);
    }

    #[test]
    fn test_rectangle_bounds_and_collision() {
        let rect = ShapeNode::rectangle(Point::new(10.0, 20.0), 100.0, 50.0);
        assert_eq!(rect.kind(), ShapeKind::Rectangle);
        assert_point(rect.bounds().p0, 10.0, 20.0);
        assert_point(rect.bounds().p1, 110.0, 70.0);
        assert!(rect.check_collision(Point::new(10.0, 20.0)));
        assert!(rect.check_collision(Point::new(110.0, 70.0)));
        assert!(!rect.check_collision(Point::new(110.1, 70.0)));
    }

    #[test]
    fn test_rectangle_collision_matches_range_membership() {
        let rects = [
            ShapeNode::rectangle(Point::new(0.0, 0.0), 10.0, 10.0),
            ShapeNode::rectangle(Point::new(10.0, 10.0), -10.0, -10.0),
            ShapeNode::rectangle(Point::new(10.0, 0.0), -10.0, 10.0),
        ];
        for x in [-1.0, 0.0, 5.0, 10.0, 11.0] {
            for y in [-1.0, 0.0, 5.0, 10.0, 11.0] {
                let expected = (0.0..=10.0).contains(&x) && (0.0..=10.0).contains(&y);
                for rect in &rects {
                    assert_eq!(rect.check_collision(Point::new(x, y)), expected, "({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn test_circle_boundary_excluded() {
        let circle = ShapeNode::circle(Point::new(3.0, 4.0), 5.0);
        assert!(circle.check_collision(Point::new(3.0, 4.0)));
        assert!(!circle.check_collision(Point::new(8.0, 4.0)));
        assert!(!circle.check_collision(Point::new(3.0, -1.0)));
    }

    #[test]
    fn test_polyline_scenario() {
        let line = ShapeNode::line(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!(line.check_collision(Point::new(100.0, 1.0)));
        assert!(!line.check_collision(Point::new(50.0, 1.0)));
    }

    #[test]
    fn test_add_and_remove_child() {
        let mut root = ShapeNode::screen_background(Point::ZERO, 800.0, 600.0);
        let a = ShapeNode::rectangle(Point::ZERO, 10.0, 10.0);
        let b = ShapeNode::circle(Point::ZERO, 10.0);
        let (a_id, b_id) = (a.id(), b.id());
        root.add_child(a);
        root.add_child(b);
        assert_eq!(root.children().len(), 2);
        assert_eq!(root.children()[1].id(), b_id);

        let removed = root.remove_child(a_id).unwrap();
        assert_eq!(removed.id(), a_id);
        assert_eq!(root.children().len(), 1);
        assert_eq!(root.children()[0].id(), b_id);
    }

    #[test]
    fn test_remove_absent_child_is_noop() {
        let mut root = ShapeNode::screen_background(Point::ZERO, 800.0, 600.0);
        let ids: Vec<NodeId> = (0..3)
            .map(|i| {
                let node = ShapeNode::rectangle(Point::new(i as f64, 0.0), 1.0, 1.0);
                let id = node.id();
                root.add_child(node);
                id
            })
            .collect();

        assert!(root.remove_child(Uuid::new_v4()).is_none());
        let remaining: Vec<NodeId> = root.children().iter().map(ShapeNode::id).collect();
        assert_eq!(remaining, ids);
    }

    #[test]
    fn test_translate_rectangle() {
        let mut rect = ShapeNode::rectangle(Point::new(10.0, 10.0), 20.0, 30.0);
        rect.translate(Vec2::new(5.0, -5.0));
        assert_point(rect.anchor(), 15.0, 5.0);
        assert_point(rect.bounds().p0, 15.0, 5.0);
        assert_point(rect.bounds().p1, 35.0, 35.0);
    }

    #[test]
    fn test_translate_circle() {
        let mut circle = ShapeNode::circle(Point::new(0.0, 0.0), 5.0);
        circle.translate(Vec2::new(10.0, 20.0));
        assert_point(circle.anchor(), 10.0, 20.0);
        assert_point(circle.bounds().p0, 5.0, 15.0);
        assert_point(circle.bounds().p1, 15.0, 25.0);
    }

    #[test]
    fn test_translate_is_additive() {
        let d1 = Vec2::new(3.5, -2.0);
        let d2 = Vec2::new(-10.25, 7.0);
        let builders: [fn() -> ShapeNode; 6] = [
            || ShapeNode::rectangle(Point::new(1.0, 2.0), 30.0, 40.0),
            || ShapeNode::screen_background(Point::new(0.0, 0.0), 300.0, 200.0),
            || ShapeNode::select_overlay(Point::new(-5.0, 5.0), 10.0, 10.0),
            || ShapeNode::circle(Point::new(7.0, 7.0), 3.0),
            || ShapeNode::polyline(Point::new(0.0, 0.0), vec![Point::new(4.0, 4.0), Point::new(8.0, 0.0)]),
            || ShapeNode::reticle(Point::new(50.0, 50.0), 20.0),
        ];
        for build in builders {
            let mut stepwise = build();
            stepwise.translate(d1);
            stepwise.translate(d2);
            let mut once = build();
            once.translate(d1 + d2);
            assert_point(stepwise.anchor(), once.anchor().x, once.anchor().y);
            assert_point(stepwise.bounds().p0, once.bounds().p0.x, once.bounds().p0.y);
            assert_point(stepwise.bounds().p1, once.bounds().p1.x, once.bounds().p1.y);
        }
    }

    #[test]
    fn test_polygon_translate_matches_regeneration() {
        let mut polygon = ShapeNode::regular_polygon(Point::new(0.0, 0.0), 6);
        polygon.translate(Vec2::new(10.0, 0.0));
        polygon.translate(Vec2::new(0.0, 25.0));
        let Geometry::RegularPolygon(p) = polygon.geometry() else {
            panic!("expected polygon");
        };
        let expected = generate_vertices(Point::new(10.0, 25.0), 6, DEFAULT_EDGE_LENGTH);
        for (v, e) in p.vertices().iter().zip(&expected) {
            assert_point(*v, e.x, e.y);
        }
        let extent = Bounds::from_points(expected).unwrap();
        assert_point(polygon.bounds().p0, extent.p0.x, extent.p0.y);
        assert_point(polygon.bounds().p1, extent.p1.x, extent.p1.y);
    }

    #[test]
    fn test_polygon_collision_uses_bounds() {
        let polygon = ShapeNode::regular_polygon(Point::new(0.0, 0.0), 3);
        // The lower-left corner of the triangle's box lies outside the triangle
        // itself but still collides.
        let corner = polygon.bounds().p0;
        assert!(polygon.check_collision(corner));
        assert!(!polygon.check_collision(Point::new(corner.x - 1.0, corner.y)));
    }

    #[test]
    fn test_set_side_count_regenerates() {
        let mut polygon = ShapeNode::regular_polygon(Point::ZERO, 3);
        assert!(polygon.set_side_count(8));
        let Geometry::RegularPolygon(p) = polygon.geometry() else {
            panic!("expected polygon");
        };
        assert_eq!(p.vertices().len(), 8);
        assert_eq!(polygon.bounds(), Bounds::from_points(p.vertices().iter().copied()).unwrap());
        assert!(!ShapeNode::circle(Point::ZERO, 1.0).set_side_count(4));
    }

    #[test]
    fn test_resize_and_set_radius_refresh_bounds() {
        let mut rect = ShapeNode::rectangle(Point::new(0.0, 0.0), 10.0, 10.0);
        assert!(rect.resize(Some(40.0), None));
        assert_point(rect.bounds().p1, 40.0, 10.0);

        let mut circle = ShapeNode::circle(Point::new(0.0, 0.0), 10.0);
        assert!(circle.set_radius(2.0));
        assert_point(circle.bounds().p0, -2.0, -2.0);
        assert!(!circle.resize(Some(1.0), Some(1.0)));
    }

    #[test]
    fn test_reticle_moves_with_children() {
        let mut reticle = ShapeNode::reticle(Point::new(100.0, 100.0), 10.0);
        assert_eq!(reticle.kind(), ShapeKind::Reticle);
        assert_eq!(reticle.children().len(), 2);
        assert_point(reticle.bounds().p0, 90.0, 90.0);
        assert_point(reticle.bounds().p1, 110.0, 110.0);

        reticle.translate(Vec2::new(-50.0, 25.0));
        assert_point(reticle.anchor(), 50.0, 125.0);
        assert_point(reticle.children()[0].anchor(), 40.0, 125.0);
        assert_point(reticle.children()[1].anchor(), 50.0, 115.0);
        assert_point(reticle.bounds().p0, 40.0, 115.0);
        assert!(reticle.check_collision(Point::new(45.0, 120.0)));
    }

    #[test]
    fn test_translate_node_refreshes_ancestors() {
        let mut root = ShapeNode::screen_background(Point::ZERO, 800.0, 600.0);
        let reticle = ShapeNode::reticle(Point::new(100.0, 100.0), 10.0);
        let reticle_id = reticle.id();
        let arm_id = reticle.children()[0].id();
        root.add_child(reticle);

        assert!(root.translate_node(arm_id, Vec2::new(0.0, 50.0)));
        let reticle = root.find(reticle_id).unwrap();
        assert_point(reticle.bounds().p1, 110.0, 150.0);
        assert!(!root.translate_node(Uuid::new_v4(), Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn test_find() {
        let mut root = ShapeNode::screen_background(Point::ZERO, 800.0, 600.0);
        let reticle = ShapeNode::reticle(Point::new(100.0, 100.0), 10.0);
        let arm_id = reticle.children()[1].id();
        root.add_child(reticle);
        assert_eq!(root.find(arm_id).map(ShapeNode::kind), Some(ShapeKind::Polyline));
        assert_eq!(root.find(root.id()).map(ShapeNode::id), Some(root.id()));
        assert!(root.find(Uuid::new_v4()).is_none());
    }
}
