//! Drawing shape nodes onto a [`DrawingSurface`].

use crate::geometry::Bounds;
use crate::node_set::NodeSet;
use crate::selection::{HANDLE_SIZE, handle_rects};
use crate::shapes::{Geometry, Rectangle, ShapeNode};
use crate::style;
use crate::surface::DrawingSurface;
use kurbo::{Point, Rect, Vec2};
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Decoration switches passed into every render call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Draw the eight handle squares around rectangles, circles and polygons.
    pub draw_handles: bool,
    /// Draw the bounding outline of rectangles and circles.
    pub draw_bounds: bool,
    /// Side length of a handle square.
    pub handle_size: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            draw_handles: true,
            draw_bounds: true,
            handle_size: HANDLE_SIZE,
        }
    }
}

impl RenderConfig {
    /// No handles, no bounding outlines.
    pub fn plain() -> Self {
        Self {
            draw_handles: false,
            draw_bounds: false,
            ..Self::default()
        }
    }
}

/// Context for a single render pass.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Shift applied to every coordinate before drawing.
    pub offset: Vec2,
    /// Nodes under the pointer.
    pub colliding: &'a NodeSet,
    /// Current selection.
    pub selecting: &'a NodeSet,
    /// Decoration switches.
    pub config: &'a RenderConfig,
}

impl<'a> RenderContext<'a> {
    /// Create a context with no offset.
    pub fn new(colliding: &'a NodeSet, selecting: &'a NodeSet, config: &'a RenderConfig) -> Self {
        Self {
            offset: Vec2::ZERO,
            colliding,
            selecting,
            config,
        }
    }

    /// Set the drawing offset.
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Set the colliding set.
    pub fn with_colliding(mut self, colliding: &'a NodeSet) -> Self {
        self.colliding = colliding;
        self
    }

    /// Set the selecting set.
    pub fn with_selecting(mut self, selecting: &'a NodeSet) -> Self {
        self.selecting = selecting;
        self
    }

    /// Set the render configuration.
    pub fn with_config(mut self, config: &'a RenderConfig) -> Self {
        self.config = config;
        self
    }

    fn point(&self, p: Point) -> Point {
        p + self.offset
    }

    fn rect(&self, rect: Rect) -> Rect {
        rect + self.offset
    }

    fn stroke_or_highlight(&self, node: &ShapeNode) -> Color {
        if self.selecting.is_only(node.id()) {
            style::HIGHLIGHT
        } else {
            style::STROKE
        }
    }
}

impl ShapeNode {
    /// Draw this node, then its children in insertion order.
    pub fn render(&self, surface: &mut dyn DrawingSurface, ctx: &RenderContext<'_>) {
        match self.geometry() {
            Geometry::Rectangle(r) => self.render_rectangle(r, surface, ctx),
            Geometry::SelectOverlay(r) => {
                let rect = ctx.rect(r.as_rect());
                surface.set_line_width(style::LINE_WIDTH);
                surface.set_stroke_color(style::OVERLAY_STROKE);
                surface.set_fill_color(style::OVERLAY_FILL);
                surface.fill_rect(rect);
                surface.stroke_rect(rect);
            }
            Geometry::ScreenBackground(r) => {
                surface.set_fill_color(style::SCREEN_FILL);
                surface.fill_rect(ctx.rect(r.as_rect()));
            }
            Geometry::Circle(c) => {
                surface.begin_path();
                surface.arc(ctx.point(c.center), c.radius, 0.0, TAU);
                surface.set_line_width(style::LINE_WIDTH);
                surface.set_stroke_color(ctx.stroke_or_highlight(self));
                surface.stroke();
                self.render_decorations(surface, ctx);
            }
            Geometry::Polyline(l) => {
                let colliding = ctx.colliding.contains(self.id());
                surface.begin_path();
                if colliding {
                    surface.set_stroke_color(style::POLYLINE_HOVER);
                    surface.set_line_width(style::EMPHASIS_LINE_WIDTH);
                } else {
                    surface.set_stroke_color(l.color);
                    surface.set_line_width(style::LINE_WIDTH);
                }
                surface.move_to(ctx.point(l.start));
                for &p in &l.points {
                    surface.line_to(ctx.point(p));
                }
                surface.stroke();
            }
            Geometry::RegularPolygon(p) => {
                surface.begin_path();
                surface.arc(ctx.point(p.center()), 1.0, 0.0, TAU);
                if let Some((first, rest)) = p.vertices().split_first() {
                    surface.move_to(ctx.point(*first));
                    for &v in rest {
                        surface.line_to(ctx.point(v));
                    }
                }
                surface.close_path();
                surface.set_line_width(style::LINE_WIDTH);
                surface.set_stroke_color(ctx.stroke_or_highlight(self));
                surface.stroke();
                if ctx.config.draw_handles {
                    render_handles(&self.bounds(), surface, ctx);
                }
            }
            Geometry::Reticle(_) => surface.set_stroke_color(style::RETICLE),
        }

        for child in self.children() {
            child.render(surface, ctx);
        }
    }

    fn render_rectangle(&self, r: &Rectangle, surface: &mut dyn DrawingSurface, ctx: &RenderContext<'_>) {
        let rect = ctx.rect(r.as_rect());
        surface.set_line_width(style::LINE_WIDTH);
        surface.set_stroke_color(ctx.stroke_or_highlight(self));
        surface.set_fill_color(style::RECT_FILL);
        surface.fill_rect(rect);
        surface.stroke_rect(rect);
        self.render_decorations(surface, ctx);
    }

    /// Bounding outline and handles, each when enabled.
    fn render_decorations(&self, surface: &mut dyn DrawingSurface, ctx: &RenderContext<'_>) {
        let bounds = self.bounds();
        if ctx.config.draw_bounds {
            surface.set_line_width(style::EMPHASIS_LINE_WIDTH);
            surface.set_stroke_color(style::HIGHLIGHT);
            surface.stroke_rect(ctx.rect(bounds.to_rect()));
        }
        if ctx.config.draw_handles {
            render_handles(&bounds, surface, ctx);
        }
    }

    /// Handle squares around this node's bounding box.
    pub fn handles(&self, size: f64) -> [Rect; 8] {
        handle_rects(&self.bounds(), size)
    }
}

fn render_handles(bounds: &Bounds, surface: &mut dyn DrawingSurface, ctx: &RenderContext<'_>) {
    surface.set_line_width(style::EMPHASIS_LINE_WIDTH);
    surface.set_stroke_color(style::HIGHLIGHT);
    for handle in handle_rects(bounds, ctx.config.handle_size) {
        surface.stroke_rect(ctx.rect(handle));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts calls by name; enough to check ordering and style choices.
    #[derive(Default)]
    struct Log {
        calls: Vec<String>,
    }

    impl DrawingSurface for Log {
        fn begin_path(&mut self) {
            self.calls.push("begin_path".into());
        }
        fn close_path(&mut self) {
            self.calls.push("close_path".into());
        }
        fn move_to(&mut self, p: Point) {
            self.calls.push(format!("move_to {} {}", p.x, p.y));
        }
        fn line_to(&mut self, p: Point) {
            self.calls.push(format!("line_to {} {}", p.x, p.y));
        }
        fn arc(&mut self, center: Point, radius: f64, _start: f64, _end: f64) {
            self.calls.push(format!("arc {} {} {}", center.x, center.y, radius));
        }
        fn stroke(&mut self) {
            self.calls.push("stroke".into());
        }
        fn fill(&mut self) {
            self.calls.push("fill".into());
        }
        fn fill_rect(&mut self, r: Rect) {
            self.calls.push(format!("fill_rect {} {} {} {}", r.x0, r.y0, r.width(), r.height()));
        }
        fn stroke_rect(&mut self, r: Rect) {
            self.calls.push(format!("stroke_rect {} {} {} {}", r.x0, r.y0, r.width(), r.height()));
        }
        fn set_stroke_color(&mut self, color: Color) {
            let highlight = color.components == style::HIGHLIGHT.components;
            self.calls.push(format!("stroke_color highlight={highlight}"));
        }
        fn set_fill_color(&mut self, _color: Color) {
            self.calls.push("fill_color".into());
        }
        fn set_line_width(&mut self, width: f64) {
            self.calls.push(format!("line_width {width}"));
        }
    }

    fn render(node: &ShapeNode, colliding: &NodeSet, selecting: &NodeSet, config: &RenderConfig) -> Vec<String> {
        let mut log = Log::default();
        node.render(&mut log, &RenderContext::new(colliding, selecting, config));
        log.calls
    }

    #[test]
    fn test_rectangle_plain() {
        let rect = ShapeNode::rectangle(Point::new(10.0, 20.0), 30.0, 40.0);
        let calls = render(&rect, &NodeSet::new(), &NodeSet::new(), &RenderConfig::plain());
        assert_eq!(
            calls,
            vec![
                "line_width 1",
                "stroke_color highlight=false",
                "fill_color",
                "fill_rect 10 20 30 40",
                "stroke_rect 10 20 30 40",
            ]
        );
    }

    #[test]
    fn test_highlight_only_for_single_selection() {
        let rect = ShapeNode::rectangle(Point::ZERO, 10.0, 10.0);
        let other = ShapeNode::circle(Point::ZERO, 1.0);
        let config = RenderConfig::plain();

        let single: NodeSet = [rect.id()].into_iter().collect();
        let calls = render(&rect, &NodeSet::new(), &single, &config);
        assert!(calls.contains(&"stroke_color highlight=true".to_string()));

        let multi: NodeSet = [rect.id(), other.id()].into_iter().collect();
        let calls = render(&rect, &NodeSet::new(), &multi, &config);
        assert!(!calls.contains(&"stroke_color highlight=true".to_string()));
    }

    #[test]
    fn test_decorations_follow_config() {
        let circle = ShapeNode::circle(Point::new(50.0, 50.0), 10.0);
        let calls = render(&circle, &NodeSet::new(), &NodeSet::new(), &RenderConfig::default());
        let stroke_rects = calls.iter().filter(|c| c.starts_with("stroke_rect")).count();
        // One bounding outline plus eight handles.
        assert_eq!(stroke_rects, 9);
        assert!(calls.contains(&"stroke_rect 40 40 20 20".to_string()));
        assert!(calls.contains(&"stroke_rect 35 35 10 10".to_string()));

        let calls = render(&circle, &NodeSet::new(), &NodeSet::new(), &RenderConfig::plain());
        assert!(!calls.iter().any(|c| c.starts_with("stroke_rect")));
    }

    #[test]
    fn test_polyline_hover_style() {
        let line = ShapeNode::line(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        let hovered: NodeSet = [line.id()].into_iter().collect();
        let calls = render(&line, &hovered, &NodeSet::new(), &RenderConfig::default());
        assert!(calls.contains(&"line_width 2".to_string()));
        assert_eq!(calls.last().map(String::as_str), Some("stroke"));

        let calls = render(&line, &NodeSet::new(), &NodeSet::new(), &RenderConfig::default());
        assert!(calls.contains(&"line_width 1".to_string()));
        assert!(calls.contains(&"line_to 100 0".to_string()));
    }

    #[test]
    fn test_offset_applies_to_all_coordinates() {
        let rect = ShapeNode::rectangle(Point::new(0.0, 0.0), 10.0, 10.0);
        let (colliding, selecting, config) = (NodeSet::new(), NodeSet::new(), RenderConfig::plain());
        let ctx = RenderContext::new(&colliding, &selecting, &config).with_offset(Vec2::new(5.0, 7.0));
        let mut log = Log::default();
        rect.render(&mut log, &ctx);
        assert!(log.calls.contains(&"fill_rect 5 7 10 10".to_string()));
    }

    #[test]
    fn test_children_render_after_parent_in_order() {
        let mut root = ShapeNode::screen_background(Point::ZERO, 100.0, 100.0);
        root.add_child(ShapeNode::rectangle(Point::new(1.0, 1.0), 2.0, 2.0));
        root.add_child(ShapeNode::reticle(Point::new(50.0, 50.0), 5.0));
        let calls = render(&root, &NodeSet::new(), &NodeSet::new(), &RenderConfig::plain());

        assert_eq!(calls[0], "fill_color");
        assert_eq!(calls[1], "fill_rect 0 0 100 100");
        let rect_at = calls.iter().position(|c| c == "fill_rect 1 1 2 2").unwrap();
        let arm_at = calls.iter().position(|c| c == "move_to 45 50").unwrap();
        let vertical_at = calls.iter().position(|c| c == "move_to 50 45").unwrap();
        assert!(rect_at < arm_at && arm_at < vertical_at);
    }

    #[test]
    fn test_polygon_path_is_closed() {
        let polygon = ShapeNode::regular_polygon(Point::new(0.0, 0.0), 5);
        let calls = render(&polygon, &NodeSet::new(), &NodeSet::new(), &RenderConfig::plain());
        assert_eq!(calls[0], "begin_path");
        assert_eq!(calls[1], "arc 0 0 1");
        assert_eq!(calls.iter().filter(|c| c.starts_with("line_to")).count(), 4);
        assert!(calls.contains(&"close_path".to_string()));
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: RenderConfig = serde_json::from_str(r#"{"draw_handles": false}"#).unwrap();
        assert!(!config.draw_handles);
        assert!(config.draw_bounds);
        assert!((config.handle_size - 10.0).abs() < f64::EPSILON);
    }
}
