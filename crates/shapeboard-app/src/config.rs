//! Application configuration and errors.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use shapeboard_core::RenderConfig;
use shapeboard_render::RenderError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("Render failed: {0}")]
    Render(#[from] RenderError),
}

/// One scripted pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up {
        x: f64,
        y: f64,
        #[serde(default)]
        multi_select: bool,
    },
}

impl ScriptEvent {
    pub fn point(&self) -> Point {
        match *self {
            ScriptEvent::Down { x, y } | ScriptEvent::Move { x, y } | ScriptEvent::Up { x, y, .. } => {
                Point::new(x, y)
            }
        }
    }
}

/// Application configuration, read from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Where the final frame is written as SVG.
    pub output: PathBuf,
    /// Optional dump of the final frame's draw calls as JSON.
    pub commands_output: Option<PathBuf>,
    pub render: RenderConfig,
    pub events: Vec<ScriptEvent>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 600.0,
            output: PathBuf::from("shapeboard.svg"),
            commands_output: None,
            render: RenderConfig::default(),
            events: demo_script(),
        }
    }
}

impl AppConfig {
    /// Load a configuration file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = serde_json::from_str(&text)?;
        log::info!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }
}

/// Pointer script run when the configuration does not supply one.
///
/// Hovers the first rectangle, selects it, adds the circle to the selection,
/// drags the second rectangle and ends hovering the reticle.
pub fn demo_script() -> Vec<ScriptEvent> {
    use ScriptEvent::*;
    vec![
        Move { x: 150.0, y: 120.0 },
        Down { x: 150.0, y: 120.0 },
        Up { x: 150.0, y: 120.0, multi_select: false },
        Down { x: 560.0, y: 160.0 },
        Up { x: 560.0, y: 160.0, multi_select: true },
        Down { x: 360.0, y: 180.0 },
        Move { x: 380.0, y: 200.0 },
        Move { x: 420.0, y: 260.0 },
        Up { x: 420.0, y: 260.0, multi_select: false },
        Move { x: 700.0, y: 520.0 },
    ]
}
