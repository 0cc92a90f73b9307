//! Palette used when drawing nodes.

use peniko::Color;

/// Default outline.
pub const STROKE: Color = Color::from_rgba8(0, 0, 0, 255);
/// Rectangle fill (fully transparent).
pub const RECT_FILL: Color = Color::from_rgba8(255, 255, 255, 0);
/// Outline of the single selected node, bounding outlines and handles.
pub const HIGHLIGHT: Color = Color::from_rgba8(0, 0, 255, 255);
/// Selection overlay outline.
pub const OVERLAY_STROKE: Color = Color::from_rgba8(21, 69, 250, 255);
/// Selection overlay fill (half transparent).
pub const OVERLAY_FILL: Color = Color::from_rgba8(121, 169, 250, 128);
/// Screen background fill.
pub const SCREEN_FILL: Color = Color::from_rgba8(242, 242, 242, 255);
/// Default polyline stroke.
pub const POLYLINE: Color = Color::from_rgba8(255, 0, 0, 255);
/// Polyline stroke while under the pointer.
pub const POLYLINE_HOVER: Color = Color::from_rgba8(255, 255, 255, 255);
/// Reticle arms.
pub const RETICLE: Color = Color::from_rgba8(255, 255, 255, 255);

/// Default line width.
pub const LINE_WIDTH: f64 = 1.0;
/// Line width for bounding outlines, handles and hovered polylines.
pub const EMPHASIS_LINE_WIDTH: f64 = 2.0;
