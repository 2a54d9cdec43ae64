//! Client-side session state
//!
//! Everything a front end draws lives in one [`SessionState`] behind a
//! `parking_lot` mutex ([`SharedSession`]). The coordinator locks it only for
//! short synchronous updates, never across an authority round-trip.

use crate::board::{BoardSurface, Position};
use crate::input::Selection;
use crate::ui::{MoveListView, StatsPanel, StatusMessage};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

/// Where the session is within the current turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TurnPhase {
    /// Waiting for the user to enter a move
    #[default]
    WaitingForInput,
    /// Human move sent, waiting for the verdict
    Submitting,
    /// Opponent move requested
    OpponentThinking,
    /// Authority declared the game over; a reset starts a new one
    GameOver,
}

impl TurnPhase {
    /// A turn is in progress and new input must wait
    pub fn is_pending(&self) -> bool {
        matches!(self, TurnPhase::Submitting | TurnPhase::OpponentThinking)
    }
}

#[derive(Debug)]
pub struct SessionState {
    pub surface: BoardSurface,
    position: Position,
    pub selection: Selection,
    phase: TurnPhase,
    pub status: StatusMessage,
    pub move_list: MoveListView,
    pub stats: StatsPanel,
}

pub type SharedSession = Arc<Mutex<SessionState>>;

impl Default for SessionState {
    fn default() -> Self {
        Self::new(BoardSurface::default())
    }
}

impl SessionState {
    pub fn new(surface: BoardSurface) -> Self {
        Self {
            surface,
            position: Position::empty(),
            selection: Selection::default(),
            phase: TurnPhase::default(),
            status: StatusMessage::default(),
            move_list: MoveListView::default(),
            stats: StatsPanel::default(),
        }
    }

    pub fn shared(self) -> SharedSession {
        Arc::new(Mutex::new(self))
    }

    /// Last position received from the authority
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Store `position` and repaint the surface from it
    pub fn apply_position(&mut self, position: Position) {
        self.surface.render(&position);
        self.position = position;
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub(crate) fn set_phase(&mut self, phase: TurnPhase) {
        debug!("[SESSION] {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    pub fn is_busy(&self) -> bool {
        self.phase.is_pending()
    }
}

/// Marks a submission in flight for as long as it is alive
///
/// Dropping the guard ends the pending phase on every path out of a turn,
/// including early returns on transport errors. It must not be dropped while
/// the session lock is held by the same task.
pub struct SubmissionGuard {
    session: SharedSession,
}

impl SubmissionGuard {
    /// Enter [`TurnPhase::Submitting`]; `None` if a turn is already pending
    pub fn acquire(session: &SharedSession) -> Option<Self> {
        let mut state = session.lock();
        if state.is_busy() {
            return None;
        }
        state.set_phase(TurnPhase::Submitting);
        Some(Self {
            session: Arc::clone(session),
        })
    }
}

impl Drop for SubmissionGuard {
    fn drop(&mut self) {
        let mut state = self.session.lock();
        if state.phase.is_pending() {
            state.set_phase(TurnPhase::WaitingForInput);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_guard_request() {
        let session = SessionState::default().shared();
        let guard = SubmissionGuard::acquire(&session).unwrap();
        assert!(session.lock().is_busy());
        assert!(SubmissionGuard::acquire(&session).is_none());

        drop(guard);
        assert_eq!(session.lock().phase(), TurnPhase::WaitingForInput);
        assert!(SubmissionGuard::acquire(&session).is_some());
    }

    #[test]
    fn test_guard_keeps_game_over() {
        let session = SessionState::default().shared();
        let guard = SubmissionGuard::acquire(&session).unwrap();
        session.lock().set_phase(TurnPhase::GameOver);
        drop(guard);
        assert_eq!(session.lock().phase(), TurnPhase::GameOver);
        assert!(!session.lock().is_busy());
    }
}
