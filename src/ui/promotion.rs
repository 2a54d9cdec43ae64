//! Pawn promotion picker
//!
//! When a pawn reaches its last rank the coordinator awaits
//! [`PromotionResolver::resolve`]. That call opens a modal (four choices with
//! their piece images) and suspends until the front end answers through
//! [`PromotionResolver::choose`] or [`PromotionResolver::dismiss`].
//!
//! Every invocation resolves exactly once:
//! - clicking a choice resolves with that choice
//! - clicking outside the choices resolves with the queen
//! - a modal torn down without an answer also resolves with the queen
//!
//! The modal is removed from the resolver the moment it resolves.

use crate::board::{asset_address, Piece, PieceColor, PromotionChoice, Square};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::{info, warn};

/// True iff `piece` is a pawn and `dest` is the far rank for its color
pub fn needs_promotion(piece: Piece, dest: Square) -> bool {
    piece.is_pawn() && dest.rank() == piece.color().promotion_rank()
}

/// One button of the picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromotionOption {
    pub choice: PromotionChoice,
    pub label: &'static str,
    pub asset: String,
}

/// What the front end draws while a promotion is pending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromotionModal {
    pub color: PieceColor,
    pub options: Vec<PromotionOption>,
}

/// Where the user clicked while the modal was open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionClick {
    Option(PromotionChoice),
    Outside,
}

struct PendingPromotion {
    modal: PromotionModal,
    responder: oneshot::Sender<PromotionChoice>,
}

/// Shared handle: the coordinator awaits on one clone, the UI answers on another
#[derive(Clone)]
pub struct PromotionResolver {
    pending: Arc<Mutex<Option<PendingPromotion>>>,
    asset_root: Arc<str>,
}

impl Default for PromotionResolver {
    fn default() -> Self {
        Self::new("assets/pieces")
    }
}

impl PromotionResolver {
    pub fn new(asset_root: &str) -> Self {
        Self {
            pending: Arc::new(Mutex::new(None)),
            asset_root: Arc::from(asset_root),
        }
    }

    /// Open the picker for `color` and wait for the answer
    pub async fn resolve(&self, color: PieceColor) -> PromotionChoice {
        let (responder, answer) = oneshot::channel();
        let modal = PromotionModal {
            color,
            options: PromotionChoice::ALL
                .iter()
                .map(|&choice| PromotionOption {
                    choice,
                    label: choice.label(),
                    asset: asset_address(&self.asset_root, color, choice.letter()),
                })
                .collect(),
        };

        if let Some(stale) = self.pending.lock().replace(PendingPromotion { modal, responder }) {
            warn!("[PROMOTION] Replacing an unanswered picker; defaulting it to queen");
            let _ = stale.responder.send(PromotionChoice::default());
        }
        info!("[PROMOTION] Waiting for {:?} promotion choice", color);

        match answer.await {
            Ok(choice) => choice,
            Err(_) => {
                warn!("[PROMOTION] Picker closed without an answer; using queen");
                PromotionChoice::default()
            }
        }
    }

    /// Snapshot of the open modal, if any
    pub fn modal(&self) -> Option<PromotionModal> {
        self.pending.lock().as_ref().map(|p| p.modal.clone())
    }

    pub fn is_active(&self) -> bool {
        self.pending.lock().is_some()
    }

    /// Resolve with `choice`; false if no picker is open
    pub fn choose(&self, choice: PromotionChoice) -> bool {
        self.click(PromotionClick::Option(choice))
    }

    /// Outside click: resolve with the queen
    pub fn dismiss(&self) -> bool {
        self.click(PromotionClick::Outside)
    }

    pub fn click(&self, target: PromotionClick) -> bool {
        let Some(pending) = self.pending.lock().take() else {
            return false;
        };
        let choice = match target {
            PromotionClick::Option(choice) => choice,
            PromotionClick::Outside => PromotionChoice::default(),
        };
        info!("[PROMOTION] Resolved to {:?}", choice);
        if pending.responder.send(choice).is_err() {
            warn!("[PROMOTION] Nobody is waiting for the promotion choice any more");
        }
        true
    }

    /// Tear the picker down without an answer; the waiter gets the queen
    pub fn close(&self) {
        if self.pending.lock().take().is_some() {
            info!("[PROMOTION] Picker closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn sq(name: &str) -> Square {
        Square::parse(name).unwrap()
    }

    fn piece(code: char) -> Piece {
        Piece::from_code(code).unwrap()
    }

    async fn wait_for_modal(resolver: &PromotionResolver) {
        for _ in 0..100 {
            if resolver.is_active() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("promotion picker never opened");
    }

    #[test]
    fn test_needs_promotion() {
        assert!(needs_promotion(piece('P'), sq("e8")));
        assert!(needs_promotion(piece('p'), sq("a1")));
        assert!(!needs_promotion(piece('P'), sq("e1")));
        assert!(!needs_promotion(piece('p'), sq("h8")));
        assert!(!needs_promotion(piece('P'), sq("e7")));
        assert!(!needs_promotion(piece('Q'), sq("d8")));
        assert!(!needs_promotion(piece('r'), sq("a1")));
    }

    #[tokio::test]
    async fn test_choice_resolves_with_that_choice() {
        let resolver = PromotionResolver::new("assets/pieces");
        let waiter = tokio::spawn({
            let resolver = resolver.clone();
            async move { resolver.resolve(PieceColor::White).await }
        });
        wait_for_modal(&resolver).await;

        let modal = resolver.modal().unwrap();
        let labels: Vec<&str> = modal.options.iter().map(|o| o.label).collect();
        assert_eq!(labels, ["Queen", "Rook", "Bishop", "Knight"]);
        assert_eq!(modal.options[3].asset, "assets/pieces/wn.png");

        assert!(resolver.choose(PromotionChoice::Knight));
        assert_eq!(waiter.await.unwrap(), PromotionChoice::Knight);
        assert!(!resolver.is_active());
    }

    #[tokio::test]
    async fn test_outside_click_defaults_to_queen() {
        let resolver = PromotionResolver::default();
        let waiter = tokio::spawn({
            let resolver = resolver.clone();
            async move { resolver.resolve(PieceColor::Black).await }
        });
        wait_for_modal(&resolver).await;
        assert_eq!(resolver.modal().unwrap().options[0].asset, "assets/pieces/bq.png");

        assert!(resolver.dismiss());
        assert_eq!(waiter.await.unwrap(), PromotionChoice::Queen);
    }

    #[tokio::test]
    async fn test_exactly_one_resolution() {
        let resolver = PromotionResolver::default();
        let waiter = tokio::spawn({
            let resolver = resolver.clone();
            async move { resolver.resolve(PieceColor::White).await }
        });
        wait_for_modal(&resolver).await;

        assert!(resolver.choose(PromotionChoice::Rook));
        assert!(!resolver.choose(PromotionChoice::Bishop));
        assert!(!resolver.dismiss());
        assert_eq!(waiter.await.unwrap(), PromotionChoice::Rook);
    }

    #[tokio::test]
    async fn test_closed_picker_defaults_to_queen() {
        let resolver = PromotionResolver::default();
        let waiter = tokio::spawn({
            let resolver = resolver.clone();
            async move { resolver.resolve(PieceColor::White).await }
        });
        wait_for_modal(&resolver).await;

        resolver.close();
        assert_eq!(waiter.await.unwrap(), PromotionChoice::Queen);
    }
}
