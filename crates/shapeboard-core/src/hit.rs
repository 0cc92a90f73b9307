//! Point hit testing over a node's children.
//!
//! Two passes are available:
//!
//! - [`HitMode::TopOnly`] looks at direct children only, front to back. The
//!   first child under the pointer becomes the single colliding node, and the
//!   first child under the click toggles its selection membership. Nothing
//!   else in the selection changes; narrowing a plain click down to one node
//!   is the caller's job (see [`crate::Interaction::pointer_up`]).
//! - [`HitMode::Deep`] walks the whole subtree, descendants before their parent,
//!   and accumulates every hit. Clicks only ever add to the selection in this mode.
//!
//! [`ShapeNode::pick_draggable`] is the separate single-hit query used to start a drag.

use crate::node_set::NodeSet;
use crate::shapes::{NodeId, ShapeNode};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Pointer state for one hit-test pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerInput {
    /// Current pointer position.
    pub position: Point,
    /// Position of a click to resolve, if any.
    pub click: Option<Point>,
    /// Whether the primary button is held.
    pub mouse_down: bool,
}

impl PointerInput {
    /// Hover only: no click to resolve.
    pub fn hover(position: Point) -> Self {
        Self {
            position,
            click: None,
            mouse_down: false,
        }
    }

    /// A completed click at `at` (button already released).
    pub fn click(at: Point) -> Self {
        Self {
            position: at,
            click: Some(at),
            mouse_down: false,
        }
    }

    /// Set the button-held flag.
    pub fn with_mouse_down(mut self, mouse_down: bool) -> Self {
        self.mouse_down = mouse_down;
        self
    }

    /// The click point, unless the button is still held.
    fn released_click(&self) -> Option<Point> {
        self.click.filter(|_| !self.mouse_down)
    }
}

/// Traversal strategy for [`ShapeNode::hit_test`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HitMode {
    /// Direct children only, topmost first, toggling selection.
    #[default]
    TopOnly,
    /// Whole subtree, accumulating hits.
    Deep,
}

/// Result of a hit-test pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitResult {
    /// Nodes under the pointer position.
    pub colliding: NodeSet,
    /// Selection after the click was applied.
    pub selecting: NodeSet,
}

/// A node picked up for dragging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragTarget {
    /// The node being dragged.
    pub id: NodeId,
    /// Click position relative to the node's anchor.
    pub grab_offset: Vec2,
}

impl DragTarget {
    /// Anchor position that keeps the grab point under `pointer`.
    pub fn anchor_for(&self, pointer: Point) -> Point {
        pointer - self.grab_offset
    }
}

impl ShapeNode {
    /// Hit-test this node's children.
    ///
    /// `selecting` is the selection before the pass; the updated selection is
    /// returned in [`HitResult::selecting`]. Node `selected` flags are updated
    /// to match whenever a click is resolved.
    pub fn hit_test(&mut self, input: &PointerInput, mode: HitMode, selecting: NodeSet) -> HitResult {
        let mut result = HitResult {
            colliding: NodeSet::new(),
            selecting,
        };
        match mode {
            HitMode::TopOnly => self.hit_top_only(input, &mut result),
            HitMode::Deep => self.hit_deep(input, &mut result),
        }
        log::debug!(
            "hit_test {:?}: {} colliding, {} selecting",
            mode,
            result.colliding.len(),
            result.selecting.len()
        );
        result
    }

    fn hit_top_only(&mut self, input: &PointerInput, result: &mut HitResult) {
        let click = input.released_click();
        let mut clicked = None;
        // Pointer and click may land on different children; stop once both are resolved.
        for child in self.children().iter().rev() {
            if result.colliding.is_empty() && child.check_collision(input.position) {
                result.colliding.insert(child.id());
            }
            if clicked.is_none() && click.is_some_and(|click| child.check_collision(click)) {
                clicked = Some(child.id());
            }
            if !result.colliding.is_empty() && (click.is_none() || clicked.is_some()) {
                break;
            }
        }

        if click.is_none() {
            return;
        }
        if let Some(id) = clicked {
            result.selecting.toggle(id);
        }
        self.sync_selected(&result.selecting);
    }

    /// The topmost direct child under `point`, by collision alone.
    pub fn topmost_at(&self, point: Point) -> Option<NodeId> {
        self.children()
            .iter()
            .rev()
            .find(|child| child.check_collision(point))
            .map(ShapeNode::id)
    }

    fn hit_deep(&mut self, input: &PointerInput, result: &mut HitResult) {
        let click = input.released_click();
        for child in self.children_mut() {
            child.hit_deep(input, result);
            if child.check_collision(input.position) {
                result.colliding.insert(child.id());
            }
            if click.is_some_and(|click| child.check_collision(click)) && result.selecting.insert(child.id()) {
                child.select(true);
            }
        }
    }

    /// Make every `selected` flag in the subtree mirror membership in `selection`.
    fn sync_selected(&mut self, selection: &NodeSet) {
        for child in self.children_mut() {
            child.select(selection.contains(child.id()));
            child.sync_selected(selection);
        }
    }

    /// The topmost direct child under `click` that can be dragged.
    ///
    /// Screen backgrounds and selection overlays are skipped even when they are
    /// drawn on top. The returned offset is measured from the node's anchor.
    pub fn pick_draggable(&self, click: Point) -> Option<DragTarget> {
        self.children()
            .iter()
            .rev()
            .find(|child| child.kind().is_draggable() && child.check_collision(click))
            .map(|child| DragTarget {
                id: child.id(),
                grab_offset: click - child.anchor(),
            })
    }
}
