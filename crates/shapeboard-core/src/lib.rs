//! Shapeboard Core Library
//!
//! Retained-mode shape tree for interactive 2D scenes: shape nodes and their
//! geometry, point hit testing, selection bounds and pointer interaction.
//! Drawing goes through the [`DrawingSurface`] trait; implementations live in
//! `shapeboard-render`.

pub mod collision;
pub mod geometry;
pub mod hit;
pub mod interaction;
pub mod node_set;
pub mod render;
pub mod selection;
pub mod shapes;
pub mod style;
pub mod surface;

pub use collision::HANDLE_RADIUS;
pub use geometry::Bounds;
pub use hit::{DragTarget, HitMode, HitResult, PointerInput};
pub use interaction::{DRAG_THRESHOLD, Interaction, InteractionState};
pub use node_set::NodeSet;
pub use render::{RenderConfig, RenderContext};
pub use selection::{HANDLE_SIZE, handle_rects, selection_overlay};
pub use shapes::{Geometry, NodeId, ShapeKind, ShapeNode};
pub use surface::DrawingSurface;
