#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Rules engine for "56", the South Asian partnership trick-taking game:
//! a 48-card double deck, bids from 28 to 56, trump declared by the
//! winning bidder, and 56 card points at stake every round.
//!
//! The engine is pure and single-threaded; callers (a CLI, a web layer,
//! or the bundled simulator) drive it one move at a time and render the
//! state however they like.

pub mod ai;
pub mod domain;
pub mod errors;
pub mod game;

// Re-exports for public API
pub use domain::cards_logic::{card_points, hand_points, DECK_POINTS};
pub use domain::cards_types::{Card, Rank, Suit};
pub use domain::seats::{Seat, TeamId};
pub use errors::domain::{DomainError, ValidationKind};
pub use game::{Game, GameConfig, GameSummary};
