//! Deterministic double-deck construction and dealing.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Two copies of each of the 24 (suit, rank) combinations.
pub const DECK_SIZE: usize = 48;
/// Cards dealt to each of the 4 seats, consuming the deck exactly.
pub const HAND_SIZE: usize = 12;

/// Generate the full 48-card double deck in standard order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for _ in 0..2 {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                deck.push(Card { suit, rank });
            }
        }
    }
    deck
}

/// Fisher-Yates shuffle driven by a seeded ChaCha8 stream, so the same
/// seed always produces the same deal.
fn shuffle_with_seed(deck: &mut [Card], seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);
}

/// Split an already-shuffled deck into 4 sorted hands of 12, consuming it.
///
/// Fails with `InsufficientCards` unless the deck holds exactly 48 cards.
pub fn deal_deck(mut deck: Vec<Card>) -> Result<[Vec<Card>; 4], DomainError> {
    if deck.len() != DECK_SIZE {
        return Err(DomainError::validation(
            ValidationKind::InsufficientCards,
            format!("Deck must hold {DECK_SIZE} cards, got {}", deck.len()),
        ));
    }

    let mut hands: [Vec<Card>; 4] = Default::default();
    for hand_slot in hands.iter_mut().rev() {
        let mut hand: Vec<Card> = deck.split_off(deck.len() - HAND_SIZE);
        hand.sort();
        *hand_slot = hand;
    }
    debug_assert!(deck.is_empty());
    Ok(hands)
}

/// Deal hands deterministically for a round given an RNG seed.
///
/// Returns 4 hands indexed by seat, each sorted for convenience.
pub fn deal_hands(seed: u64) -> Result<[Vec<Card>; 4], DomainError> {
    let mut deck = full_deck();
    shuffle_with_seed(&mut deck, seed);
    deal_deck(deck)
}
