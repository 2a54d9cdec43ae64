//! Typed client over a [`MoveAuthority`] transport
//!
//! Parses result strings into [`MoveResult`] exactly once. No retries, no
//! timeouts: a failed call is reported to the caller as-is.

use crate::networking::{AuthorityResult, MoveAuthority, MoveResult, MoveToken, Statistics};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct MoveAuthorityClient<A: ?Sized> {
    transport: Arc<A>,
}

impl<A: ?Sized> Clone for MoveAuthorityClient<A> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<A: MoveAuthority + ?Sized> MoveAuthorityClient<A> {
    pub fn new(transport: Arc<A>) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &Arc<A> {
        &self.transport
    }

    pub async fn submit_human_move(&self, token: &MoveToken) -> AuthorityResult<MoveResult> {
        debug!("[AUTHORITY] Submitting {}", token);
        let reply = self
            .transport
            .submit_human_move(token.as_str())
            .await
            .inspect_err(|e| warn!("[AUTHORITY] submit {} failed: {}", token, e))?;
        debug!("[AUTHORITY] Reply to {}: {}", token, reply);
        MoveResult::from_human_reply(&reply)
    }

    pub async fn request_opponent_move(&self) -> AuthorityResult<MoveResult> {
        let reply = self
            .transport
            .request_opponent_move()
            .await
            .inspect_err(|e| warn!("[AUTHORITY] opponent move failed: {}", e))?;
        debug!("[AUTHORITY] Opponent reply: {}", reply);
        MoveResult::from_opponent_reply(&reply)
    }

    pub async fn fetch_position(&self) -> AuthorityResult<String> {
        self.transport.fetch_position().await
    }

    pub async fn fetch_move_history(&self) -> AuthorityResult<Vec<String>> {
        self.transport.fetch_move_history().await
    }

    pub async fn fetch_statistics(&self) -> AuthorityResult<Statistics> {
        self.transport.fetch_statistics().await
    }

    pub async fn reset_game(&self) -> AuthorityResult<()> {
        debug!("[AUTHORITY] Resetting game");
        self.transport.reset_game().await
    }
}
