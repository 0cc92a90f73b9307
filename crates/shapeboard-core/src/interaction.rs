//! Pointer interaction: hover, click-to-select and drag.

use crate::hit::{DragTarget, HitMode, PointerInput};
use crate::node_set::NodeSet;
use crate::render::{RenderConfig, RenderContext};
use crate::shapes::ShapeNode;
use kurbo::Point;

/// Distance the pointer must travel while pressed before a drag starts.
pub const DRAG_THRESHOLD: f64 = 3.0;

/// Where the pointer is in the press/drag cycle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    /// Button up.
    #[default]
    Idle,
    /// Button down, not yet a drag. Releasing here is a click.
    Pressed {
        origin: Point,
        target: Option<DragTarget>,
    },
    /// Moving `target` with the pointer.
    Dragging { target: DragTarget },
}

/// Per-tree interaction state: the press/drag cycle plus the hover and
/// selection sets it maintains.
#[derive(Debug, Clone, Default)]
pub struct Interaction {
    state: InteractionState,
    colliding: NodeSet,
    selecting: NodeSet,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Nodes under the pointer as of the last hover pass.
    pub fn colliding(&self) -> &NodeSet {
        &self.colliding
    }

    /// Current selection.
    pub fn selecting(&self) -> &NodeSet {
        &self.selecting
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, InteractionState::Dragging { .. })
    }

    /// A render context carrying the current hover and selection sets.
    pub fn render_context<'a>(&'a self, config: &'a RenderConfig) -> RenderContext<'a> {
        RenderContext::new(&self.colliding, &self.selecting, config)
    }

    /// Button pressed at `point`.
    pub fn pointer_down(&mut self, root: &ShapeNode, point: Point) {
        if self.state != InteractionState::Idle {
            log::debug!("pointer_down ignored in {:?}", self.state);
            return;
        }
        let target = root.pick_draggable(point);
        log::debug!("pressed at ({}, {}), drag target {:?}", point.x, point.y, target.map(|t| t.id));
        self.state = InteractionState::Pressed { origin: point, target };
    }

    /// Pointer moved to `point`.
    pub fn pointer_move(&mut self, root: &mut ShapeNode, point: Point) {
        match self.state {
            InteractionState::Idle => self.hover(root, point),
            InteractionState::Pressed { origin, target } => {
                self.hover(root, point);
                if let Some(target) = target {
                    if (point - origin).hypot() > DRAG_THRESHOLD {
                        log::debug!("drag started on {}", target.id);
                        self.state = InteractionState::Dragging { target };
                        self.drag(root, target, point);
                    }
                }
            }
            InteractionState::Dragging { target } => self.drag(root, target, point),
        }
    }

    /// Button released at `point`.
    ///
    /// A release without a drag is a click: it toggles the topmost node under
    /// `point`. Without `multi_select` the rest of the selection is dropped
    /// first, and a click on empty space clears it.
    pub fn pointer_up(&mut self, root: &mut ShapeNode, point: Point, multi_select: bool) {
        match self.state {
            InteractionState::Idle => {
                log::debug!("pointer_up ignored in Idle");
                return;
            }
            InteractionState::Pressed { .. } => {
                if !multi_select {
                    match root.topmost_at(point) {
                        Some(id) => self.selecting.retain(|&member| member == id),
                        None => self.selecting.clear(),
                    }
                }
                let input = PointerInput::click(point);
                let result = root.hit_test(&input, HitMode::TopOnly, std::mem::take(&mut self.selecting));
                self.colliding = result.colliding;
                self.selecting = result.selecting;
            }
            InteractionState::Dragging { target } => {
                log::debug!("drag ended on {}", target.id);
            }
        }
        self.state = InteractionState::Idle;
    }

    fn hover(&mut self, root: &mut ShapeNode, point: Point) {
        let result = root.hit_test(&PointerInput::hover(point), HitMode::TopOnly, self.selecting.clone());
        self.colliding = result.colliding;
    }

    fn drag(&mut self, root: &mut ShapeNode, target: DragTarget, point: Point) {
        let Some(anchor) = root.find(target.id).map(ShapeNode::anchor) else {
            log::warn!("drag target {} is no longer in the tree", target.id);
            self.state = InteractionState::Idle;
            return;
        };
        root.translate_node(target.id, target.anchor_for(point) - anchor);
    }
}
