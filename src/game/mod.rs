//! Game module - session state and the turn loop
//!
//! # Module Organization
//!
//! - `session` - [`SessionState`] shared with the front end, turn phase, submission guard
//! - `coordinator` - [`MoveCoordinator`] running submit, verdict, refresh, opponent reply
//! - `error` - [`GameError`]
//!
//! The client never decides legality. It forwards move tokens and draws
//! whatever position the authority reports back.

pub mod coordinator;
pub mod error;
pub mod session;

pub use coordinator::{MoveCoordinator, TurnOutcome};
pub use error::{GameError, GameResult};
pub use session::{SessionState, SharedSession, SubmissionGuard, TurnPhase};
