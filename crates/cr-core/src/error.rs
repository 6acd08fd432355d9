//! Core error type.
//!
//! `cr-graph` defines its own `GraphError`; `CoreError` covers the parsing
//! and configuration failures of the shared primitives.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `cr-core`.
pub type CoreResult<T> = Result<T, CoreError>;
