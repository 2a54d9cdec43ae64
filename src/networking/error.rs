//! Error types for the move-authority protocol
//!
//! Invalid moves and finished games are results, not errors; everything here
//! means the exchange itself failed.

use thiserror::Error;

/// Failures talking to the move authority
#[derive(Error, Debug)]
pub enum AuthorityError {
    /// Request could not be sent or the response could not be read
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authority answered with a non-success status
    #[error("{operation} failed with status {status}: {body}")]
    Status {
        operation: &'static str,
        status: u16,
        body: String,
    },

    /// Reply outside the result grammar for this operation
    #[error("Protocol violation in {operation}: unexpected reply '{reply}'")]
    ProtocolViolation {
        operation: &'static str,
        reply: String,
    },

    /// Token that does not match `<from><to>[qrbn]`
    #[error("Malformed move token: '{token}'")]
    MalformedToken { token: String },

    /// Failure reported by a non-HTTP transport
    #[error("Transport error: {message}")]
    Transport { message: String },
}

/// Result type alias for move-authority operations
pub type AuthorityResult<T> = Result<T, AuthorityError>;
