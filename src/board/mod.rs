//! Board module - squares, pieces, positions and the rendered surface
//!
//! - `square` - the 64 square identifiers and their light/dark shade
//! - `piece` - piece codes, colors, kinds and asset addressing
//! - `position` - [`Position`] and the [`PositionCodec`] for placement fields
//! - `layout` - pointer-space geometry and hit-testing
//! - `surface` - [`BoardSurface`], the scene model front ends draw

pub mod error;
pub mod layout;
pub mod piece;
pub mod position;
pub mod square;
pub mod surface;

pub use error::{BoardError, BoardResult};
pub use layout::{BoardLayout, Rect};
pub use piece::{asset_address, Piece, PieceColor, PieceType, PromotionChoice};
pub use position::{Position, PositionCodec, START_POSITION};
pub use square::{Shade, Square, FILES};
pub use surface::{BoardSurface, PieceToken, SquareCell};
