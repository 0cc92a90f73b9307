//! Render errors.

use thiserror::Error;

/// Errors from producing or writing rendered output.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to format output: {0}")]
    Format(#[from] std::fmt::Error),
    #[error("Failed to serialize draw commands: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
