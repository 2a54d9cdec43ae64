//! UI module - front-end facing views
//!
//! Nothing here draws; each type is the data a front end renders:
//! - `promotion` - the promotion picker and [`needs_promotion`]
//! - `status` - the status line
//! - `history` - the two-column move list
//! - `stats` - the statistics panel

pub mod history;
pub mod promotion;
pub mod stats;
pub mod status;

pub use crate::board::PromotionChoice;
pub use history::{MoveListView, MoveRow};
pub use promotion::{needs_promotion, PromotionClick, PromotionModal, PromotionOption, PromotionResolver};
pub use stats::{format_recent_game, StatsPanel};
pub use status::StatusMessage;
