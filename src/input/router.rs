//! Pointer event routing
//!
//! Front ends report raw pointer events; the router feeds them to the drag
//! controller and the click selection so that one user gesture yields at most
//! one [`MoveRequest`].
//!
//! Platforms deliver a click after a press/release on the same element. The
//! router therefore swallows the click that follows a drag which already
//! consumed the gesture (dropped on another square, or cancelled). A release
//! on the origin square consumes nothing, so its click reaches the selection
//! and a tap on a piece arms it.
//!
//! While a submission is in flight, presses and clicks are ignored.

use crate::game::SessionState;
use crate::input::{DragOutcome, GestureController, SelectionController, SelectionOutcome};
use crate::networking::MoveRequest;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp { x: f32, y: f32 },
    /// Platform aborted the gesture (focus loss, touch cancel)
    PointerCancel,
    Click { x: f32, y: f32 },
}

#[derive(Debug, Default)]
pub struct InputRouter {
    gesture: GestureController,
    swallow_click: bool,
}

impl InputRouter {
    pub fn gesture(&self) -> &GestureController {
        &self.gesture
    }

    pub fn handle(&mut self, session: &mut SessionState, event: InputEvent) -> Option<MoveRequest> {
        match event {
            InputEvent::PointerDown { x, y } => {
                self.swallow_click = false;
                if session.is_busy() {
                    debug!("[INPUT] Press ignored while a move is pending");
                    return None;
                }
                self.gesture.pointer_down(&mut session.surface, x, y);
                None
            }
            InputEvent::PointerMove { x, y } => {
                self.gesture.pointer_move(x, y);
                None
            }
            InputEvent::PointerUp { x, y } => self.release(session, x, y),
            InputEvent::PointerCancel => {
                if self.gesture.cancel(&mut session.surface) {
                    self.swallow_click = true;
                }
                None
            }
            InputEvent::Click { x, y } => self.click(session, x, y),
        }
    }

    /// Drop any drag in progress, showing its token again
    pub fn cancel_drag(&mut self, session: &mut SessionState) {
        if self.gesture.cancel(&mut session.surface) {
            self.swallow_click = true;
        }
    }

    fn release(&mut self, session: &mut SessionState, x: f32, y: f32) -> Option<MoveRequest> {
        match self.gesture.pointer_up(&mut session.surface, x, y)? {
            DragOutcome::Unmoved => None,
            DragOutcome::Cancelled => {
                self.swallow_click = true;
                None
            }
            DragOutcome::Dropped(request) => {
                self.swallow_click = true;
                if session.is_busy() {
                    debug!("[INPUT] Drop ignored while a move is pending");
                    session.surface.restore(request.origin);
                    return None;
                }
                session.selection.clear();
                Some(request)
            }
        }
    }

    fn click(&mut self, session: &mut SessionState, x: f32, y: f32) -> Option<MoveRequest> {
        if std::mem::take(&mut self.swallow_click) {
            debug!("[INPUT] Click after drag swallowed");
            return None;
        }
        if session.is_busy() || self.gesture.is_dragging() {
            return None;
        }
        let square = session.surface.square_at(x, y)?;
        match SelectionController::click(session, square) {
            SelectionOutcome::Move(request) => Some(request),
            SelectionOutcome::Armed(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PositionCodec, Square, START_POSITION};
    use crate::game::TurnPhase;

    fn sq(name: &str) -> Square {
        Square::parse(name).unwrap()
    }

    fn session() -> SessionState {
        let mut session = SessionState::default();
        session.apply_position(PositionCodec::parse(START_POSITION));
        session
    }

    fn at(session: &SessionState, name: &str) -> (f32, f32) {
        session.surface.square_rect(sq(name)).center()
    }

    fn tap(router: &mut InputRouter, session: &mut SessionState, name: &str) -> Option<MoveRequest> {
        let (x, y) = at(session, name);
        let mut produced = router.handle(session, InputEvent::PointerDown { x, y });
        produced = produced.or(router.handle(session, InputEvent::PointerUp { x, y }));
        produced.or(router.handle(session, InputEvent::Click { x, y }))
    }

    #[test]
    fn test_tap_tap_produces_one_move() {
        let mut session = session();
        let mut router = InputRouter::default();

        assert_eq!(tap(&mut router, &mut session, "e2"), None);
        assert_eq!(session.selection.armed(), Some(sq("e2")));
        assert!(session.surface.token(sq("e2")).unwrap().visible);

        assert_eq!(
            tap(&mut router, &mut session, "e4"),
            Some(MoveRequest::new(sq("e2"), sq("e4")))
        );
        assert!(!session.selection.is_selected());
    }

    #[test]
    fn test_drag_produces_one_move_and_swallows_click() {
        let mut session = session();
        let mut router = InputRouter::default();
        let (x, y) = at(&session, "g1");
        let (dx, dy) = at(&session, "f3");

        assert_eq!(router.handle(&mut session, InputEvent::PointerDown { x, y }), None);
        assert_eq!(router.handle(&mut session, InputEvent::PointerMove { x: dx, y: dy }), None);
        assert_eq!(
            router.handle(&mut session, InputEvent::PointerUp { x: dx, y: dy }),
            Some(MoveRequest::new(sq("g1"), sq("f3")))
        );
        assert_eq!(router.handle(&mut session, InputEvent::Click { x: dx, y: dy }), None);
        assert!(!session.selection.is_selected());
    }

    #[test]
    fn test_cancelled_drag_leaves_selection_untouched() {
        let mut session = session();
        let mut router = InputRouter::default();
        let (x, y) = at(&session, "b1");

        router.handle(&mut session, InputEvent::PointerDown { x, y });
        assert_eq!(router.handle(&mut session, InputEvent::PointerUp { x: -10.0, y: -10.0 }), None);
        assert_eq!(router.handle(&mut session, InputEvent::Click { x: -10.0, y: -10.0 }), None);
        assert!(session.surface.token(sq("b1")).unwrap().visible);
        assert!(!session.selection.is_selected());

        router.handle(&mut session, InputEvent::PointerDown { x, y });
        router.handle(&mut session, InputEvent::PointerCancel);
        assert!(session.surface.token(sq("b1")).unwrap().visible);
        assert!(!router.gesture().is_dragging());
    }

    #[test]
    fn test_double_tap_on_one_square_produces_a_move() {
        let mut session = session();
        let mut router = InputRouter::default();

        assert_eq!(tap(&mut router, &mut session, "e2"), None);
        assert_eq!(
            tap(&mut router, &mut session, "e2"),
            Some(MoveRequest::new(sq("e2"), sq("e2")))
        );
        assert!(!session.selection.is_selected());
    }

    #[test]
    fn test_input_ignored_while_busy() {
        let mut session = session();
        let mut router = InputRouter::default();
        session.set_phase(TurnPhase::Submitting);

        assert_eq!(tap(&mut router, &mut session, "e2"), None);
        assert!(!router.gesture().is_dragging());
        assert!(!session.selection.is_selected());
        assert!(session.surface.token(sq("e2")).unwrap().visible);
    }
}
