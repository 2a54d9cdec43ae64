//! Move coordinator - one turn against the move authority
//!
//! # Turn Flow
//!
//! 1. Take the submission guard; a second submission while one is pending
//!    fails with [`GameError::SubmissionInFlight`].
//! 2. If a pawn lands on its last rank, await the promotion picker.
//! 3. Submit the token and interpret the verdict:
//!    - `Invalid`: show the origin token again, nothing else changes
//!    - `GameOver`: report it, then refresh once; no opponent request
//!    - `Accepted`: refresh, then request the opponent move and refresh again
//!
//! A refresh fetches the position and repaints the board in full, then
//! updates the move list and the statistics panel.
//!
//! A transport failure at any step shows the origin token again and reports
//! the error; the board keeps the last position the authority confirmed.
//!
//! The session lock is only taken between awaits.

use crate::board::PositionCodec;
use crate::game::{GameError, GameResult, SessionState, SharedSession, SubmissionGuard, TurnPhase};
use crate::input::{InputEvent, InputRouter};
use crate::networking::{AuthorityError, MoveAuthority, MoveAuthorityClient, MoveRequest, MoveResult};
use crate::ui::{needs_promotion, PromotionResolver, StatusMessage};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{error, info, warn};

/// How a submitted turn ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Authority rejected the move; position unchanged
    Invalid,
    /// Game ended, on the human move or on the opponent reply
    GameOver { reason: String, after_opponent: bool },
    /// Human move accepted and the opponent answered
    OpponentMoved(String),
}

pub struct MoveCoordinator<A: MoveAuthority + ?Sized> {
    client: MoveAuthorityClient<A>,
    session: SharedSession,
    promotion: PromotionResolver,
    router: Arc<Mutex<InputRouter>>,
}

impl<A: MoveAuthority + ?Sized> Clone for MoveCoordinator<A> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            session: Arc::clone(&self.session),
            promotion: self.promotion.clone(),
            router: Arc::clone(&self.router),
        }
    }
}

impl<A: MoveAuthority + ?Sized> MoveCoordinator<A> {
    pub fn new(client: MoveAuthorityClient<A>, session: SharedSession, promotion: PromotionResolver) -> Self {
        Self {
            client,
            session,
            promotion,
            router: Arc::new(Mutex::new(InputRouter::default())),
        }
    }

    /// Build a coordinator around a fresh session
    pub fn with_session(client: MoveAuthorityClient<A>, session: SessionState, promotion: PromotionResolver) -> Self {
        Self::new(client, session.shared(), promotion)
    }

    pub fn session(&self) -> &SharedSession {
        &self.session
    }

    pub fn promotion(&self) -> &PromotionResolver {
        &self.promotion
    }

    pub fn client(&self) -> &MoveAuthorityClient<A> {
        &self.client
    }

    /// Load the current game from the authority
    pub async fn start(&self) -> GameResult<()> {
        info!("[GAME] Starting session");
        if let Err(e) = self.refresh().await {
            self.report_error(&e);
            return Err(e);
        }
        self.session.lock().status = StatusMessage::YourMove;
        Ok(())
    }

    /// Route one pointer event; runs a full turn if it completes a move
    pub async fn handle_event(&self, event: InputEvent) -> GameResult<Option<TurnOutcome>> {
        let request = {
            let mut session = self.session.lock();
            self.router.lock().handle(&mut session, event)
        };
        match request {
            Some(request) => self.submit(request).await.map(Some),
            None => Ok(None),
        }
    }

    /// Run one turn for `request`
    pub async fn submit(&self, request: MoveRequest) -> GameResult<TurnOutcome> {
        let Some(_guard) = SubmissionGuard::acquire(&self.session) else {
            warn!("[GAME] Rejecting {}: a submission is already in flight", request.token());
            self.session.lock().status = StatusMessage::Busy;
            return Err(GameError::SubmissionInFlight);
        };

        let request = self.complete_promotion(request).await;
        let token = request.token();
        self.session.lock().status = StatusMessage::Trying(token.clone());

        let verdict = match self.client.submit_human_move(&token).await {
            Ok(verdict) => verdict,
            Err(e) => return Err(self.fail_turn(request, e.into())),
        };

        match verdict {
            MoveResult::Invalid => {
                let mut session = self.session.lock();
                session.surface.restore(request.origin);
                session.status = StatusMessage::InvalidMove;
                Ok(TurnOutcome::Invalid)
            }
            MoveResult::GameOver(reason) => {
                self.finish_game(&reason);
                if let Err(e) = self.refresh().await {
                    return Err(self.fail_turn(request, e));
                }
                Ok(TurnOutcome::GameOver {
                    reason,
                    after_opponent: false,
                })
            }
            MoveResult::Accepted => {
                if let Err(e) = self.refresh().await {
                    return Err(self.fail_turn(request, e));
                }
                self.opponent_turn().await
            }
            other => {
                let e = AuthorityError::ProtocolViolation {
                    operation: "submit human move",
                    reply: format!("{:?}", other),
                };
                Err(self.fail_turn(request, e.into()))
            }
        }
    }

    /// Fetch position, move list and statistics and repaint
    ///
    /// Only the position is required; a failed move list or statistics fetch
    /// keeps the previous view and is logged.
    pub async fn refresh(&self) -> GameResult<()> {
        let description = self.client.fetch_position().await?;
        let position = PositionCodec::parse(&description);
        {
            let mut session = self.session.lock();
            session.apply_position(position);
            session.surface.pulse();
        }

        match self.client.fetch_move_history().await {
            Ok(notations) => self.session.lock().move_list.update(&notations),
            Err(e) => warn!("[GAME] Keeping previous move list: {}", e),
        }
        match self.client.fetch_statistics().await {
            Ok(stats) => self.session.lock().stats.update(&stats),
            Err(e) => warn!("[GAME] Keeping previous statistics: {}", e),
        }
        Ok(())
    }

    /// Start a new game on the authority and reload it
    pub async fn reset(&self) -> GameResult<()> {
        let Some(_guard) = SubmissionGuard::acquire(&self.session) else {
            self.session.lock().status = StatusMessage::Busy;
            return Err(GameError::SubmissionInFlight);
        };
        {
            let mut session = self.session.lock();
            session.selection.clear();
            self.router.lock().cancel_drag(&mut session);
        }

        let result = match self.client.reset_game().await {
            Ok(()) => self.refresh().await,
            Err(e) => Err(e.into()),
        };
        if let Err(e) = result {
            self.report_error(&e);
            return Err(e);
        }

        let mut session = self.session.lock();
        session.set_phase(TurnPhase::WaitingForInput);
        session.status = StatusMessage::GameReset;
        info!("[GAME] Game reset");
        Ok(())
    }

    async fn complete_promotion(&self, request: MoveRequest) -> MoveRequest {
        if request.promotion.is_some() {
            return request;
        }
        let piece = self.session.lock().position().piece_at(request.origin);
        match piece {
            Some(piece) if needs_promotion(piece, request.dest) => {
                let choice = self.promotion.resolve(piece.color()).await;
                request.with_promotion(choice)
            }
            _ => request,
        }
    }

    async fn opponent_turn(&self) -> GameResult<TurnOutcome> {
        self.session.lock().set_phase(TurnPhase::OpponentThinking);
        let reply = match self.client.request_opponent_move().await {
            Ok(reply) => reply,
            Err(e) => {
                let e = GameError::from(e);
                self.report_error(&e);
                return Err(e);
            }
        };

        let outcome = match reply {
            MoveResult::OpponentMove(notation) => {
                self.session.lock().status = StatusMessage::OpponentPlayed(notation.clone());
                TurnOutcome::OpponentMoved(notation)
            }
            MoveResult::GameOverAfterOpponent(reason) => {
                self.finish_game(&reason);
                TurnOutcome::GameOver {
                    reason,
                    after_opponent: true,
                }
            }
            other => {
                let e = GameError::from(AuthorityError::ProtocolViolation {
                    operation: "request opponent move",
                    reply: format!("{:?}", other),
                });
                self.report_error(&e);
                return Err(e);
            }
        };

        if let Err(e) = self.refresh().await {
            self.report_error(&e);
            return Err(e);
        }
        Ok(outcome)
    }

    fn finish_game(&self, reason: &str) {
        info!("[GAME] Game over: {}", reason);
        let mut session = self.session.lock();
        session.set_phase(TurnPhase::GameOver);
        session.status = StatusMessage::GameOver(reason.to_string());
    }

    /// Show the origin token again and report `e`
    fn fail_turn(&self, request: MoveRequest, e: GameError) -> GameError {
        self.session.lock().surface.restore(request.origin);
        self.report_error(&e);
        e
    }

    fn report_error(&self, e: &GameError) {
        error!("[GAME] {}", e);
        self.session.lock().status = StatusMessage::Error(e.to_string());
    }
}
