//! Error types for ccsort.

use thiserror::Error;

/// Top-level error type for matrix construction, loading and persistence.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// An operation was called with an argument outside its accepted range.
    /// The matrix the operation would have touched is left unchanged.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Supplied CCS arrays violate a structural invariant. The message names
    /// the invariant that failed; no partially-built matrix is ever produced.
    #[error("malformed matrix: {0}")]
    MalformedMatrix(String),

    /// A persisted matrix could not be parsed (missing line, non-numeric
    /// field). Distinct from `MalformedMatrix`, which means the fields parsed
    /// but are mutually inconsistent.
    #[error("parse error: {0}")]
    ParseError(String),

    /// Underlying read/write failure. Surfaced verbatim, single attempt.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for matrix operations.
pub type Result<T> = std::result::Result<T, MatrixError>;
