//! Error types
//!
//! The measurement engine itself never fails; these cover parsing user and
//! wire input at the edges.

use thiserror::Error;

/// Freezer Door error types
#[derive(Debug, Error)]
pub enum FreezerError {
    #[error("Unknown unit: {0} (expected ml or oz)")]
    UnknownUnit(String),

    #[error("Unknown volume mode: {0} (expected volume or drinks)")]
    UnknownMode(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Calculation service error: {0}")]
    Service(String),

    #[error("Recipe not ready: {0}")]
    Incomplete(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for fallible edge operations
pub type FreezerResult<T> = Result<T, FreezerError>;
