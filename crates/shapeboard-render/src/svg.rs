//! SVG output surface.
//!
//! Follows canvas 2D path semantics: path calls build a current path that
//! survives `stroke`/`fill` until the next `begin_path`, and `arc` connects to
//! the current point with a straight segment.

use crate::error::RenderResult;
use kurbo::{Point, Rect};
use peniko::Color;
use shapeboard_core::{DrawingSurface, style};
use std::f64::consts::{PI, TAU};
use std::fmt::Write;
use std::path::Path;

/// Builds an SVG document from draw calls.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    body: String,
    path: String,
    stroke_color: Color,
    fill_color: Color,
    line_width: f64,
    error: Option<std::fmt::Error>,
}

/// Rounds to three decimals; `Display` drops the trailing zeros.
fn num(v: f64) -> f64 {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// `rgb(...)` plus opacity for a color.
fn paint(color: Color) -> (String, f64) {
    let rgba = color.to_rgba8();
    let opacity = (f64::from(rgba.a) / 255.0 * 1000.0).round() / 1000.0;
    (format!("rgb({},{},{})", rgba.r, rgba.g, rgba.b), opacity)
}

impl SvgSurface {
    /// Create an empty document of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
            path: String::new(),
            stroke_color: style::STROKE,
            fill_color: style::STROKE,
            line_width: style::LINE_WIDTH,
            error: None,
        }
    }

    /// The complete SVG document.
    pub fn finish(&self) -> RenderResult<String> {
        if let Some(err) = self.error {
            return Err(err.into());
        }
        let mut out = String::new();
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = num(self.width),
            h = num(self.height)
        )?;
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        Ok(out)
    }

    /// Write the document to `path`.
    pub fn write_to(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        let svg = self.finish()?;
        std::fs::write(path.as_ref(), svg)?;
        log::info!("Wrote {} bytes of SVG to {}", self.body.len(), path.as_ref().display());
        Ok(())
    }

    fn record(&mut self, result: std::fmt::Result) {
        if let Err(err) = result {
            self.error.get_or_insert(err);
        }
    }

    fn path_op(&mut self, op: char, p: Point) {
        let result = write!(self.path, "{op}{} {} ", num(p.x), num(p.y));
        self.record(result);
    }

    fn stroke_attrs(&self) -> String {
        let (color, opacity) = paint(self.stroke_color);
        format!(
            r#"stroke="{color}" stroke-opacity="{opacity}" stroke-width="{}""#,
            num(self.line_width)
        )
    }

    fn fill_attrs(&self) -> String {
        let (color, opacity) = paint(self.fill_color);
        format!(r#"fill="{color}" fill-opacity="{opacity}""#)
    }

    fn rect_element(&mut self, rect: Rect, attrs: String) {
        let rect = rect.abs();
        let result = writeln!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}" {attrs}/>"#,
            num(rect.x0),
            num(rect.y0),
            num(rect.width()),
            num(rect.height())
        );
        self.record(result);
    }
}

impl DrawingSurface for SvgSurface {
    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn close_path(&mut self) {
        self.path.push_str("Z ");
    }

    fn move_to(&mut self, point: Point) {
        self.path_op('M', point);
    }

    fn line_to(&mut self, point: Point) {
        if self.path.is_empty() {
            self.path_op('M', point);
        } else {
            self.path_op('L', point);
        }
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
        let at = |angle: f64| Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin());
        let start = at(start_angle);
        self.line_to(start);

        let sweep = end_angle - start_angle;
        let r = num(radius);
        let result = if sweep >= TAU {
            // A single SVG arc cannot start and end on the same point.
            let opposite = at(start_angle + PI);
            write!(
                self.path,
                "A{r} {r} 0 1 1 {} {} A{r} {r} 0 1 1 {} {} ",
                num(opposite.x),
                num(opposite.y),
                num(start.x),
                num(start.y)
            )
        } else {
            let end = at(end_angle);
            let large_arc = u8::from(sweep.rem_euclid(TAU) > PI);
            write!(self.path, "A{r} {r} 0 {large_arc} 1 {} {} ", num(end.x), num(end.y))
        };
        self.record(result);
    }

    fn stroke(&mut self) {
        if self.path.is_empty() {
            return;
        }
        let attrs = self.stroke_attrs();
        let result = writeln!(self.body, r#"<path d="{}" fill="none" {attrs}/>"#, self.path.trim_end());
        self.record(result);
    }

    fn fill(&mut self) {
        if self.path.is_empty() {
            return;
        }
        let attrs = self.fill_attrs();
        let result = writeln!(self.body, r#"<path d="{}" stroke="none" {attrs}/>"#, self.path.trim_end());
        self.record(result);
    }

    fn fill_rect(&mut self, rect: Rect) {
        let attrs = format!(r#"{} stroke="none""#, self.fill_attrs());
        self.rect_element(rect, attrs);
    }

    fn stroke_rect(&mut self, rect: Rect) {
        let attrs = format!(r#"fill="none" {}"#, self.stroke_attrs());
        self.rect_element(rect, attrs);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }
}
