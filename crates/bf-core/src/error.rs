//! Framework error type.
//!
//! Sub-crates define their own error enums; `bf-round` wraps them together
//! with `BfError` so callers see one type per layer.

use thiserror::Error;

/// Configuration-level errors shared by every `bf-*` crate.
#[derive(Debug, Error)]
pub enum BfError {
    /// A round parameter is outside its configured bounds.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `bf-core`.
pub type BfResult<T> = Result<T, BfError>;
