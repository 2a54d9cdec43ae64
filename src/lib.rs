//! xfboard - interactive chess board client
//!
//! Headless engine behind a board front end: it turns pointer gestures into
//! move tokens, resolves pawn promotion, submits moves to a remote move
//! authority and repaints the board from the authoritative position after
//! every request.
//!
//! # Module Organization
//!
//! - `core` - settings, logging and core error types
//! - `board` - squares, pieces, the position codec and the board surface
//! - `input` - drag gestures, click-click selection and the input router
//! - `ui` - promotion picker, status line, move list and statistics views
//! - `networking` - the move-authority protocol, client and HTTP transport
//! - `game` - shared session state and the move coordinator

pub mod board;
pub mod core;
pub mod game;
pub mod input;
pub mod networking;
pub mod ui;

pub use board::{BoardSurface, Piece, PieceColor, PieceType, Position, PositionCodec, Square};
pub use game::{MoveCoordinator, SessionState, SharedSession, TurnOutcome};
pub use input::{GestureController, InputEvent, InputRouter, SelectionController};
pub use networking::{MoveAuthority, MoveAuthorityClient, MoveRequest, MoveResult, MoveToken};
pub use ui::{needs_promotion, PromotionChoice, PromotionResolver};
