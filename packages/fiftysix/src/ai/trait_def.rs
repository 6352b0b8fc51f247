//! Agent trait for automated seats.

use thiserror::Error;

use crate::domain::bidding::BidAction;
use crate::domain::cards_types::{Card, Suit};
use crate::domain::player_view::PlayerView;

/// Errors that can occur during agent decision-making.
#[derive(Debug, Error)]
pub enum AiError {
    #[error("AI internal error: {0}")]
    Internal(String),
    #[error("AI invalid move: {0}")]
    InvalidMove(String),
}

/// Trait for automated players.
///
/// Implementations receive the slice of game state visible to their seat
/// and must choose a legal action. Query `view.legal_bids()` and
/// `view.legal_plays` rather than reasoning from the raw hand.
pub trait AiPlayer: Send + Sync {
    /// Choose a bid or pass during the auction.
    fn choose_bid(&self, view: &PlayerView) -> Result<BidAction, AiError>;

    /// Choose the trump suit after winning the auction.
    fn choose_trump(&self, view: &PlayerView) -> Result<Suit, AiError>;

    /// Choose a card to play into the current trick.
    fn choose_play(&self, view: &PlayerView) -> Result<Card, AiError>;
}
