//! Random agent: uniform choice among legal moves, seedable for tests.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use super::trait_def::{AiError, AiPlayer};
use crate::domain::bidding::BidAction;
use crate::domain::cards_types::{Card, Suit};
use crate::domain::player_view::PlayerView;

/// Baseline agent choosing uniformly among legal moves.
///
/// The RNG sits behind a `Mutex` because trait methods take `&self`.
/// An explicit seed makes the agent fully reproducible.
pub struct RandomPlayer {
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";

    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn rng(&self) -> Result<std::sync::MutexGuard<'_, StdRng>, AiError> {
        self.rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_bid(&self, view: &PlayerView) -> Result<BidAction, AiError> {
        let legal = view.legal_bids();
        if legal.is_empty() {
            return Err(AiError::InvalidMove("No legal bids available".into()));
        }
        let mut rng = self.rng()?;
        legal
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::Internal("Failed to choose random bid".into()))
    }

    fn choose_trump(&self, view: &PlayerView) -> Result<Suit, AiError> {
        // Any suit is a legal trump; pick among suits actually held so a
        // random declarer is not hopeless.
        let mut held: Vec<Suit> = view.hand.iter().map(|c| c.suit).collect();
        held.sort();
        held.dedup();
        let options: &[Suit] = if held.is_empty() { &Suit::ALL } else { &held };

        let mut rng = self.rng()?;
        options
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::Internal("Failed to choose random trump".into()))
    }

    fn choose_play(&self, view: &PlayerView) -> Result<Card, AiError> {
        if view.legal_plays.is_empty() {
            return Err(AiError::InvalidMove("No legal plays available".into()));
        }
        let mut rng = self.rng()?;
        view.legal_plays
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::Internal("Failed to choose random card".into()))
    }
}
