//! Drag-and-drop gesture controller
//!
//! Two states: idle, or dragging exactly one [`DragSession`].
//!
//! | From     | Event                  | To       | Effect                                   |
//! |----------|------------------------|----------|------------------------------------------|
//! | Idle     | pointer down on piece  | Dragging | ghost spawned, board token hidden        |
//! | Dragging | pointer move           | Dragging | ghost follows pointer minus grab offset  |
//! | Dragging | pointer up, no square  | Idle     | cancel: token shown again, no move       |
//! | Dragging | pointer up on origin   | Idle     | no-op: token shown again, no move        |
//! | Dragging | pointer up elsewhere   | Idle     | candidate move; token stays hidden       |
//! | Dragging | pointer down           | Dragging | ignored                                  |
//!
//! A dropped token stays hidden until the coordinator either repaints the
//! board (accepted) or restores it (invalid, transport failure).

use crate::board::{BoardSurface, Piece, Square};
use crate::networking::MoveRequest;
use tracing::debug;

/// Copy of the dragged token that follows the pointer
#[derive(Debug, Clone, PartialEq)]
pub struct GhostToken {
    pub piece: Piece,
    pub asset: String,
    /// Top-left corner in pointer coordinates
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub origin: Square,
    pub piece: Piece,
    pub ghost: GhostToken,
    /// Pointer position relative to the token's top-left corner at grab time
    pub offset: (f32, f32),
}

impl DragSession {
    fn track(&mut self, x: f32, y: f32) {
        self.ghost.x = x - self.offset.0;
        self.ghost.y = y - self.offset.1;
    }
}

/// How a drag ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// Released outside the board or cancelled by the platform
    Cancelled,
    /// Released on the origin square
    Unmoved,
    Dropped(MoveRequest),
}

#[derive(Debug, Default)]
pub struct GestureController {
    active: Option<DragSession>,
}

impl GestureController {
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.active.as_ref()
    }

    /// Start a drag if the pointer is over a piece; false otherwise
    pub fn pointer_down(&mut self, surface: &mut BoardSurface, x: f32, y: f32) -> bool {
        if self.active.is_some() {
            debug!("[GESTURE] Pointer down ignored: drag already in progress");
            return false;
        }
        let Some(origin) = surface.square_at(x, y) else {
            return false;
        };
        let Some(token) = surface.token(origin) else {
            return false;
        };

        let piece = token.piece;
        let asset = token.asset.clone();
        let rect = surface.square_rect(origin);
        let offset = (x - rect.x, y - rect.y);
        surface.suppress(origin);

        let mut session = DragSession {
            origin,
            piece,
            ghost: GhostToken {
                piece,
                asset,
                x: rect.x,
                y: rect.y,
                size: rect.width,
            },
            offset,
        };
        session.track(x, y);
        debug!("[GESTURE] Drag start {} from {}", piece, origin);
        self.active = Some(session);
        true
    }

    /// Move the ghost; false when idle
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        match self.active.as_mut() {
            Some(session) => {
                session.track(x, y);
                true
            }
            None => false,
        }
    }

    /// Finish the drag; `None` when idle
    pub fn pointer_up(&mut self, surface: &mut BoardSurface, x: f32, y: f32) -> Option<DragOutcome> {
        let session = self.active.take()?;
        let outcome = match surface.square_at(x, y) {
            None => DragOutcome::Cancelled,
            Some(dest) if dest == session.origin => DragOutcome::Unmoved,
            Some(dest) => DragOutcome::Dropped(MoveRequest::new(session.origin, dest)),
        };

        if !matches!(outcome, DragOutcome::Dropped(_)) {
            surface.restore(session.origin);
        }
        debug!("[GESTURE] Drag from {} ended: {:?}", session.origin, outcome);
        Some(outcome)
    }

    /// Abort the drag and show the token again; false when idle
    pub fn cancel(&mut self, surface: &mut BoardSurface) -> bool {
        match self.active.take() {
            Some(session) => {
                surface.restore(session.origin);
                debug!("[GESTURE] Drag from {} cancelled", session.origin);
                true
            }
            None => false,
        }
    }
}
