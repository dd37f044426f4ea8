//! Error types for styleframe-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in styleframe-core
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid column letters
    #[error("Invalid column: {0}")]
    InvalidColumn(String),

    /// Invalid column range format
    #[error("Invalid column range: {0}")]
    InvalidColumnRange(String),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u16, u16),
}
