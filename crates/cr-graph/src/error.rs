//! Graph-subsystem error type.

use thiserror::Error;

/// Errors produced by `cr-graph`.
///
/// An unreachable target is not an error: routing returns `Ok(None)`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("location {0:?} already exists")]
    DuplicateLocation(String),

    #[error("location {0:?} not found in graph")]
    UnknownLocation(String),

    #[error("source {0:?} not found in graph")]
    UnknownSource(String),

    #[error("road {u:?} -> {v:?}: {field} must be finite and non-negative, got {value}")]
    InvalidWeight {
        u:     String,
        v:     String,
        field: &'static str,
        value: f64,
    },

    #[error("graph is full: {0} locations is the most a NodeId can address")]
    CapacityExceeded(usize),

    #[error(transparent)]
    Config(#[from] cr_core::CoreError),

    #[error("CSV parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
