//! Composing a full frame: the tree, then the selection overlay.

use shapeboard_core::{DrawingSurface, RenderContext, ShapeNode};

/// Render `root` and, when more than one node is selected, the overlay
/// spanning the selection on top of it.
///
/// A single selected node is highlighted by its own render call instead.
/// The overlay only lives for the duration of this call.
pub fn render_frame(surface: &mut dyn DrawingSurface, root: &ShapeNode, ctx: &RenderContext<'_>) {
    root.render(surface, ctx);
    if ctx.selecting.len() <= 1 {
        return;
    }
    if let Some(overlay) = root.selection_overlay(ctx.selecting) {
        log::debug!("drawing selection overlay for {} nodes", ctx.selecting.len());
        overlay.render(surface, ctx);
    }
}
