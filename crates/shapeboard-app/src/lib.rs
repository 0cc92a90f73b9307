//! Shapeboard Application
//!
//! Demo shell wiring the shape tree, pointer interaction and SVG output
//! together.

mod app;
mod config;

pub use app::{App, RunSummary, demo_scene, run};
pub use config::{AppConfig, AppError, ScriptEvent, demo_script};
