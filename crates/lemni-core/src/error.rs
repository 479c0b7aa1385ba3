//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `From`.

use thiserror::Error;

/// Errors raised by `lemni-core`.  The only failure class at this level is a
/// configuration that cannot describe a runnable simulation.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `lemni-core`.
pub type CoreResult<T> = Result<T, CoreError>;
