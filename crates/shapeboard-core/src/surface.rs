//! The drawing surface nodes render into.

use kurbo::{Point, Rect};
use peniko::Color;

/// Immediate-mode 2D drawing target, modelled on a canvas 2D context.
///
/// Path calls build up a current path which `stroke` or `fill` paints using the
/// current style. Rectangle calls paint directly. Implementations never report
/// errors back to the scene; a surface that can fail records the failure itself.
pub trait DrawingSurface {
    /// Start a new, empty path.
    fn begin_path(&mut self);

    /// Close the current subpath back to its start.
    fn close_path(&mut self);

    fn move_to(&mut self, point: Point);

    fn line_to(&mut self, point: Point);

    /// Add a clockwise arc around `center`, angles in radians.
    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64);

    /// Paint the current path's outline.
    fn stroke(&mut self);

    /// Paint the current path's interior.
    fn fill(&mut self);

    fn fill_rect(&mut self, rect: Rect);

    fn stroke_rect(&mut self, rect: Rect);

    fn set_stroke_color(&mut self, color: Color);

    fn set_fill_color(&mut self, color: Color);

    fn set_line_width(&mut self, width: f64);
}
