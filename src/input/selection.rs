//! Click-click move entry
//!
//! The first click arms a square, the second click turns the armed square and
//! the clicked square into a [`MoveRequest`]. The slot holds at most one
//! square and is always empty again once a request has been produced.

use crate::board::Square;
use crate::game::SessionState;
use crate::networking::MoveRequest;
use crate::ui::StatusMessage;
use tracing::debug;

/// Armed origin square for click-click entry
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    armed: Option<Square>,
}

impl Selection {
    pub fn clear(&mut self) {
        self.armed = None;
    }

    pub fn is_selected(&self) -> bool {
        self.armed.is_some()
    }

    pub fn armed(&self) -> Option<Square> {
        self.armed
    }

    pub fn arm(&mut self, square: Square) {
        self.armed = Some(square);
    }

    pub fn take(&mut self) -> Option<Square> {
        self.armed.take()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    Armed(Square),
    Move(MoveRequest),
}

pub struct SelectionController;

impl SelectionController {
    /// Feed one click on `square` into the selection slot
    pub fn click(session: &mut SessionState, square: Square) -> SelectionOutcome {
        match session.selection.take() {
            None => {
                session.selection.arm(square);
                session.status = StatusMessage::Selected(square);
                debug!("[SELECTION] Armed {}", square);
                SelectionOutcome::Armed(square)
            }
            Some(origin) => {
                debug!("[SELECTION] {} -> {}", origin, square);
                SelectionOutcome::Move(MoveRequest::new(origin, square))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::parse(name).unwrap()
    }

    #[test]
    fn test_first_click_arms() {
        let mut session = SessionState::default();
        assert_eq!(
            SelectionController::click(&mut session, sq("e2")),
            SelectionOutcome::Armed(sq("e2"))
        );
        assert_eq!(session.selection.armed(), Some(sq("e2")));
        assert_eq!(session.status.to_string(), "Selected e2");
    }

    #[test]
    fn test_second_click_produces_move_and_empties_slot() {
        let mut session = SessionState::default();
        SelectionController::click(&mut session, sq("e2"));
        assert_eq!(
            SelectionController::click(&mut session, sq("e4")),
            SelectionOutcome::Move(MoveRequest::new(sq("e2"), sq("e4")))
        );
        assert!(!session.selection.is_selected());
    }

    #[test]
    fn test_clicking_armed_square_again_still_produces_move() {
        let mut session = SessionState::default();
        SelectionController::click(&mut session, sq("b1"));
        assert_eq!(
            SelectionController::click(&mut session, sq("b1")),
            SelectionOutcome::Move(MoveRequest::new(sq("b1"), sq("b1")))
        );
        assert!(!session.selection.is_selected());
    }

    #[test]
    fn test_empty_origin_still_produces_move() {
        // Legality is the authority's call
        let mut session = SessionState::default();
        SelectionController::click(&mut session, sq("e4"));
        assert_eq!(
            SelectionController::click(&mut session, sq("e5")),
            SelectionOutcome::Move(MoveRequest::new(sq("e4"), sq("e5")))
        );
    }
}
