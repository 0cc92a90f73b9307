//! Shapeboard Render Library
//!
//! Drawing surface implementations and frame composition for Shapeboard.
//! [`SvgSurface`] produces an SVG document; [`RecordingSurface`] captures
//! draw calls for inspection and tests.

mod error;
mod frame;
pub mod recording;
pub mod svg;

pub use error::{RenderError, RenderResult};
pub use frame::render_frame;
pub use recording::{DrawCommand, RecordingSurface, SerializableColor};
pub use svg::SvgSurface;
