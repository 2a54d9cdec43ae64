//! Error types for board module
//!
//! Only the strict parsing paths produce these; the lenient codec used for
//! rendering never fails.

use thiserror::Error;

/// Errors that can occur while interpreting board notation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Square name outside a1..h8
    #[error("Invalid square: '{name}'")]
    InvalidSquare { name: String },

    /// Character that is not one of pnbrqk / PNBRQK
    #[error("Invalid piece code: '{code}'")]
    InvalidPiece { code: char },

    /// Placement field does not describe exactly 8 ranks of 8 files
    #[error("Malformed placement field: {message}")]
    MalformedPlacement { message: String },
}

/// Result type alias for board operations
pub type BoardResult<T> = Result<T, BoardError>;
