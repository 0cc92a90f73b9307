//! Selection bounds and manipulation handle geometry.

use crate::geometry::Bounds;
use crate::node_set::NodeSet;
use crate::shapes::ShapeNode;
use kurbo::{Point, Rect};

/// Default handle square size.
pub const HANDLE_SIZE: f64 = 10.0;

/// Build the overlay rectangle covering every member of a selection.
///
/// Screen backgrounds and overlays are skipped. Both corners of each member's
/// bounding box feed the running minimum and maximum, so boxes with unsorted
/// corners are covered too. Returns `None` when nothing is left to cover.
///
/// The overlay is a fresh node that is meant to be drawn and dropped, not added
/// to the tree.
pub fn selection_overlay<'a>(members: impl IntoIterator<Item = &'a ShapeNode>) -> Option<ShapeNode> {
    let corners = members
        .into_iter()
        .filter(|node| node.kind().contributes_to_selection())
        .flat_map(|node| node.bounds().corners());
    let extent = Bounds::from_points(corners)?;
    Some(ShapeNode::select_overlay(
        extent.p0,
        extent.p1.x - extent.p0.x,
        extent.p1.y - extent.p0.y,
    ))
}

impl ShapeNode {
    /// Overlay covering the members of `selection` found in this subtree.
    ///
    /// Ids that are not in the subtree are ignored.
    pub fn selection_overlay(&self, selection: &NodeSet) -> Option<ShapeNode> {
        selection_overlay(selection.iter().filter_map(|id| self.find(id)))
    }
}

/// The eight handle squares around a bounding box: corners, then edge midpoints.
pub fn handle_rects(bounds: &Bounds, size: f64) -> [Rect; 8] {
    let [a, b] = bounds.corners();
    let mid_x = (a.x + b.x) / 2.0;
    let mid_y = (a.y + b.y) / 2.0;
    let centers = [
        Point::new(a.x, a.y),
        Point::new(b.x, a.y),
        Point::new(a.x, b.y),
        Point::new(b.x, b.y),
        Point::new(a.x, mid_y),
        Point::new(b.x, mid_y),
        Point::new(mid_x, a.y),
        Point::new(mid_x, b.y),
    ];
    centers.map(|c| Rect::from_center_size(c, (size, size)))
}
