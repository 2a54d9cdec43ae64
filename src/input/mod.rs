//! Input module - pointer gestures to move requests
//!
//! # Architecture
//!
//! - `gesture` - drag-and-drop state machine with a ghost token
//! - `selection` - click-click entry through a one-square slot
//! - `router` - raw pointer events in, at most one [`MoveRequest`] per gesture out
//!
//! Both entry modes work on the shared [`SessionState`](crate::game::SessionState)
//! so the coordinator and the front end see the same selection and token
//! visibility.
//!
//! [`MoveRequest`]: crate::networking::MoveRequest

pub mod gesture;
pub mod router;
pub mod selection;

pub use gesture::{DragOutcome, DragSession, GestureController, GhostToken};
pub use router::{InputEvent, InputRouter};
pub use selection::{Selection, SelectionController, SelectionOutcome};
