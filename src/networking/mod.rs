//! Networking module - the move-authority protocol
//!
//! - `protocol` - move requests, move tokens, reply grammar, statistics
//! - `authority` - the [`MoveAuthority`] transport trait
//! - `client` - [`MoveAuthorityClient`], typed wrapper over any transport
//! - `http` - [`HttpMoveAuthority`], the JSON-over-HTTP transport
//!
//! The client never retries and sets no deadlines of its own; timeouts, if
//! any, belong to the transport.

pub mod authority;
pub mod client;
pub mod error;
pub mod http;
pub mod protocol;

pub use authority::MoveAuthority;
pub use client::MoveAuthorityClient;
pub use error::{AuthorityError, AuthorityResult};
pub use http::HttpMoveAuthority;
pub use protocol::{MoveRequest, MoveResult, MoveToken, RecentGame, StatCounts, Statistics};
