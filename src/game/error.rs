//! Error types for game module
//!
//! Failures of a move turn. Rejections by the authority are not errors; they
//! come back as [`TurnOutcome::Invalid`](crate::game::TurnOutcome::Invalid).

use crate::networking::AuthorityError;

/// Errors that can occur while running a turn
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// A previous submission has not finished yet
    #[error("A move submission is already in flight")]
    SubmissionInFlight,

    /// The move authority could not be reached or answered out of protocol
    #[error(transparent)]
    Authority(#[from] AuthorityError),
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
