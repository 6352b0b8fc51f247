//! RNG seed derivation for deterministic dealing.
//!
//! A game carries one base seed; each round (and each redeal attempt
//! within a round, after an all-pass) gets its own derived seed so that
//! replaying a game from the base seed reproduces every deal.

/// Derive the dealing seed for a round.
///
/// `attempt` is 0 for the first deal of a round and increments on each
/// redeal after an all-pass auction.
pub fn derive_dealing_seed(game_seed: u64, round_no: u16, attempt: u16) -> u64 {
    // Distinct multipliers keep (round, attempt) combinations from
    // colliding for any realistic game length.
    game_seed
        .wrapping_add((round_no as u64).wrapping_mul(1_000_000))
        .wrapping_add((attempt as u64).wrapping_mul(1_000))
        .wrapping_add(2)
}
