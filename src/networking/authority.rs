//! Transport abstraction for the move authority
//!
//! Implementors move raw strings; interpretation of replies happens in
//! [`crate::networking::MoveAuthorityClient`].

use crate::networking::{AuthorityResult, Statistics};
use async_trait::async_trait;
use std::sync::Arc;

/// Request/response channel to the service that validates and applies moves
#[async_trait]
pub trait MoveAuthority: Send + Sync {
    /// Submit a move token; returns the raw result string
    async fn submit_human_move(&self, token: &str) -> AuthorityResult<String>;

    /// Ask the opponent to play; returns the raw result string
    async fn request_opponent_move(&self) -> AuthorityResult<String>;

    /// Full position description (placement field plus metadata)
    async fn fetch_position(&self) -> AuthorityResult<String>;

    /// Move notations, one per ply, white first
    async fn fetch_move_history(&self) -> AuthorityResult<Vec<String>>;

    async fn fetch_statistics(&self) -> AuthorityResult<Statistics>;

    async fn reset_game(&self) -> AuthorityResult<()>;
}

#[async_trait]
impl<T: MoveAuthority + ?Sized> MoveAuthority for Arc<T> {
    async fn submit_human_move(&self, token: &str) -> AuthorityResult<String> {
        (**self).submit_human_move(token).await
    }

    async fn request_opponent_move(&self) -> AuthorityResult<String> {
        (**self).request_opponent_move().await
    }

    async fn fetch_position(&self) -> AuthorityResult<String> {
        (**self).fetch_position().await
    }

    async fn fetch_move_history(&self) -> AuthorityResult<Vec<String>> {
        (**self).fetch_move_history().await
    }

    async fn fetch_statistics(&self) -> AuthorityResult<Statistics> {
        (**self).fetch_statistics().await
    }

    async fn reset_game(&self) -> AuthorityResult<()> {
        (**self).reset_game().await
    }
}
