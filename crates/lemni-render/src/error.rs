//! Error types for lemni-render.

use thiserror::Error;

/// Errors that can occur when emitting a frame.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, RenderError>`.
pub type RenderResult<T> = Result<T, RenderError>;
