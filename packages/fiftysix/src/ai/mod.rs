//! Automated players: the agent trait plus baseline implementations.

mod heuristic;
mod random;
mod trait_def;

pub use heuristic::Heuristic;
pub use random::RandomPlayer;
pub use trait_def::{AiError, AiPlayer};

/// Create an agent from a type string.
///
/// Supports "random" (optionally seeded) and "heuristic". Returns None
/// for anything unrecognized.
pub fn create_ai(ai_type: &str, seed: Option<u64>) -> Option<Box<dyn AiPlayer>> {
    match ai_type {
        "random" => Some(Box::new(RandomPlayer::new(seed))),
        "heuristic" => Some(Box::new(Heuristic::new())),
        _ => None,
    }
}
