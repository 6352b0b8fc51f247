//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod player_view;
pub mod scoring;
pub mod seats;
pub mod seed_derivation;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_prelude;

#[cfg(test)]
mod tests_props_tricks;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use cards_logic::{card_beats, card_points, hand_has_suit, hand_points, DECK_POINTS};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit};
pub use dealing::deal_hands;
pub use seats::{Seat, TeamId};
pub use seed_derivation::derive_dealing_seed;
