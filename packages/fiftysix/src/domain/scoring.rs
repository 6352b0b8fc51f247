//! Round scoring: contract success or failure, score deltas, game end.

use serde::{Deserialize, Serialize};

use super::cards_logic::DECK_POINTS;
use super::cards_types::Suit;
use super::seats::TeamId;
use super::state::{require_contract, require_trump, GameState, Phase};
use crate::errors::domain::{DomainError, ValidationKind};

/// Scoring knobs the rule text leaves to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    /// Points awarded to the defending team when the contract fails.
    /// The bidding team scores nothing in that case.
    pub defender_award_on_failure: u16,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        // Classic rule: a failed contract hands the defenders the whole deck.
        Self {
            defender_award_on_failure: DECK_POINTS,
        }
    }
}

/// Terminal record of one scored round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round_no: u16,
    pub bidding_team: TeamId,
    pub bid_amount: u8,
    pub trump: Suit,
    /// Trick points captured per team; always sums to 56.
    pub points: [u16; 2],
    /// Whether the bidding team met its contract.
    pub success: bool,
    /// Score awarded to each team this round.
    pub score_delta: [u16; 2],
}

/// Apply per-round scoring, update cumulative team scores, and advance
/// to Complete (or GameOver once a team reaches `target_score`).
pub fn apply_round_scoring(
    state: &mut GameState,
    policy: ScoringPolicy,
    target_score: u16,
) -> Result<RoundSummary, DomainError> {
    if state.phase != Phase::Scoring {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Round is not ready to score",
        ));
    }
    let contract = require_contract(state, "apply_round_scoring")?;
    let trump = require_trump(state, "apply_round_scoring")?;
    let round_no = state
        .round_no
        .ok_or_else(|| DomainError::invariant("round_no must be set (apply_round_scoring)"))?;

    let bidders = contract.team;
    let defenders = bidders.opponent();
    let points = state.round.points_won;
    let success = points[bidders.index()] >= contract.amount as u16;

    let mut score_delta = [0u16; 2];
    if success {
        score_delta[bidders.index()] = contract.amount as u16;
        score_delta[defenders.index()] = DECK_POINTS - contract.amount as u16;
    } else {
        score_delta[defenders.index()] = policy.defender_award_on_failure;
    }

    for team in TeamId::ALL {
        state.scores_total[team.index()] += score_delta[team.index()];
    }

    state.phase = if state.scores_total.iter().any(|&s| s >= target_score) {
        Phase::GameOver
    } else {
        Phase::Complete
    };

    Ok(RoundSummary {
        round_no,
        bidding_team: bidders,
        bid_amount: contract.amount,
        trump,
        points,
        success,
        score_delta,
    })
}
