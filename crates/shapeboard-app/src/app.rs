//! The demo application: a scene, an interaction and a script to drive it.

use crate::config::{AppConfig, AppError, ScriptEvent};
use kurbo::Point;
use shapeboard_core::{Interaction, NodeSet, ShapeNode};
use shapeboard_render::{RecordingSurface, RenderResult, SvgSurface, render_frame};
use std::path::PathBuf;

/// Outcome of [`run`].
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub events: usize,
    pub selected: usize,
    pub output: PathBuf,
}

/// Build the demo scene: a screen background holding two rectangles, a circle,
/// four regular polygons, a polyline and a reticle.
pub fn demo_scene(width: f64, height: f64) -> ShapeNode {
    let mut root = ShapeNode::screen_background(Point::ZERO, width, height);
    root.add_child(ShapeNode::rectangle(Point::new(80.0, 80.0), 160.0, 100.0));
    root.add_child(ShapeNode::rectangle(Point::new(300.0, 120.0), 120.0, 120.0));
    root.add_child(ShapeNode::circle(Point::new(560.0, 160.0), 60.0));
    for (i, sides) in (3..=6).enumerate() {
        let x = 120.0 + 160.0 * i as f64;
        root.add_child(ShapeNode::regular_polygon(Point::new(x, 420.0), sides));
    }
    root.add_child(ShapeNode::polyline(
        Point::new(60.0, 560.0),
        vec![Point::new(160.0, 540.0), Point::new(260.0, 575.0), Point::new(360.0, 550.0)],
    ));
    root.add_child(ShapeNode::reticle(Point::new(700.0, 530.0), 30.0));
    root
}

/// Application state.
pub struct App {
    config: AppConfig,
    root: ShapeNode,
    interaction: Interaction,
}

impl App {
    /// Create the app with the demo scene sized to the canvas.
    pub fn new(config: AppConfig) -> Self {
        let root = demo_scene(config.canvas_width, config.canvas_height);
        Self {
            config,
            root,
            interaction: Interaction::new(),
        }
    }

    pub fn root(&self) -> &ShapeNode {
        &self.root
    }

    pub fn selecting(&self) -> &NodeSet {
        self.interaction.selecting()
    }

    /// Feed one pointer event through the interaction.
    pub fn apply(&mut self, event: &ScriptEvent) {
        let point = event.point();
        match *event {
            ScriptEvent::Down { .. } => self.interaction.pointer_down(&self.root, point),
            ScriptEvent::Move { .. } => self.interaction.pointer_move(&mut self.root, point),
            ScriptEvent::Up { multi_select, .. } => {
                self.interaction.pointer_up(&mut self.root, point, multi_select)
            }
        }
    }

    /// Replay every configured event in order.
    pub fn run_script(&mut self) {
        let events = std::mem::take(&mut self.config.events);
        for event in &events {
            self.apply(event);
        }
        log::info!(
            "Replayed {} events: {} selected, {} under pointer",
            events.len(),
            self.interaction.selecting().len(),
            self.interaction.colliding().len()
        );
        self.config.events = events;
    }

    /// Render the current frame as an SVG document.
    pub fn render_svg(&self) -> RenderResult<String> {
        let mut surface = SvgSurface::new(self.config.canvas_width, self.config.canvas_height);
        render_frame(&mut surface, &self.root, &self.interaction.render_context(&self.config.render));
        surface.finish()
    }

    /// Record the current frame's draw calls.
    pub fn record(&self) -> RecordingSurface {
        let mut surface = RecordingSurface::new();
        render_frame(&mut surface, &self.root, &self.interaction.render_context(&self.config.render));
        surface
    }
}

/// Build the scene, replay the script and write the final frame.
pub fn run(config: AppConfig) -> Result<RunSummary, AppError> {
    let mut app = App::new(config);
    app.run_script();

    let svg = app.render_svg()?;
    std::fs::write(&app.config.output, svg)?;
    log::info!("Wrote frame to {}", app.config.output.display());

    if let Some(path) = &app.config.commands_output {
        let json = app.record().to_json()?;
        std::fs::write(path, json)?;
        log::info!("Wrote draw commands to {}", path.display());
    }

    Ok(RunSummary {
        events: app.config.events.len(),
        selected: app.selecting().len(),
        output: app.config.output.clone(),
    })
}
