//! Trick engine: legal-move computation, card play, trick resolution.

use super::cards_logic::{card_beats, card_points, hand_has_suit};
use super::cards_types::{Card, Suit};
use super::seats::Seat;
use super::state::{
    require_trick_no, require_trump, require_turn, GameState, Phase, RoundState,
    TRICKS_PER_ROUND,
};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    /// Whether a trick was completed (4 cards played).
    pub trick_completed: bool,
    /// Winner of the completed trick, if one was completed.
    pub trick_winner: Option<Seat>,
    /// Card points credited to the winner's team for the completed trick.
    pub trick_points: u16,
    /// Trick number after this play (incremented when a trick completed).
    pub trick_no_after: u8,
    /// Phase transitioned to, if any (None means still in Trick phase).
    pub phase_transitioned: Option<Phase>,
}

/// Compute legal cards the seat may play, independent of turn enforcement.
///
/// Follow-suit rule: the lead suit must be followed when held; a seat
/// void in the lead suit may play anything, trump included but never
/// mandatory. The leader is unrestricted.
pub fn legal_moves(state: &GameState, who: Seat) -> Vec<Card> {
    let Phase::Trick { .. } = state.phase else {
        return Vec::new();
    };

    let hand = state.hand(who);
    if hand.is_empty() {
        return Vec::new();
    }

    if let Some(lead) = state.round.trick_lead {
        if hand_has_suit(hand, lead) {
            let mut v: Vec<Card> = hand.iter().copied().filter(|c| c.suit == lead).collect();
            v.sort();
            return v;
        }
    }

    let mut any = hand.to_vec();
    any.sort();
    any
}

/// Play a card into the current trick, enforcing phase, turn, card
/// ownership, and suit-following. State is unchanged on any error.
pub fn play_card(
    state: &mut GameState,
    who: Seat,
    card: Card,
) -> Result<PlayCardResult, DomainError> {
    let trick_no_before = match state.phase {
        Phase::Trick { trick_no } => trick_no,
        // The round exists but has not reached play yet.
        Phase::Bidding | Phase::TrumpSelect => {
            return Err(DomainError::validation(
                ValidationKind::RoundNotReady,
                "Cannot play a card before trump is declared",
            ))
        }
        _ => {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "No trick in progress",
            ))
        }
    };

    if require_trick_no(state, "play_card")? != trick_no_before {
        return Err(DomainError::invariant(
            "state.trick_no must match Phase::Trick.trick_no",
        ));
    }

    let turn = require_turn(state, "play_card")?;
    if turn != who {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            format!("It is {turn}'s turn to play"),
        ));
    }

    // Card in hand (immutable check first to avoid borrow conflicts)
    let pos_opt = state.hands[who.index()].iter().position(|&c| c == card);
    let Some(pos) = pos_opt else {
        return Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            format!("{card} is not in {who}'s hand"),
        ));
    };

    // Suit-following check using an immutable borrow only
    let legal = legal_moves(state, who);
    if !legal.contains(&card) {
        return Err(DomainError::validation(
            ValidationKind::MustFollowSuit,
            format!("{who} must follow {}", state.round.trick_lead.map(|s| s.to_string()).unwrap_or_default()),
        ));
    }

    // On first play, fix the lead and remember the leader
    if state.round.trick_plays.is_empty() {
        state.round.trick_lead = Some(card.suit);
        state.leader = Some(who);
    }

    let removed = state.hands[who.index()].remove(pos);
    state.round.trick_plays.push((who, removed));
    state.turn = Some(who.next());

    let trick_completed = state.round.trick_plays.len() == 4;
    let mut result = PlayCardResult {
        trick_completed,
        trick_winner: None,
        trick_points: 0,
        trick_no_after: trick_no_before,
        phase_transitioned: None,
    };

    if !trick_completed {
        return Ok(result);
    }

    // Resolve the completed trick
    let trump = require_trump(state, "play_card resolve")?;
    let (winner, points) = resolve_current_trick(&state.round, trump)
        .ok_or_else(|| DomainError::invariant("completed trick must resolve to a winner"))?;
    state.round.tricks_won[winner.index()] += 1;
    state.round.points_won[winner.team().index()] += points;
    state.leader = Some(winner);
    state.turn = Some(winner);
    result.trick_winner = Some(winner);
    result.trick_points = points;

    // Prepare the next trick
    state.round.last_trick = Some(std::mem::take(&mut state.round.trick_plays));
    state.round.trick_lead = None;

    let next_trick_no = trick_no_before.saturating_add(1);
    result.trick_no_after = next_trick_no;

    if next_trick_no > TRICKS_PER_ROUND {
        state.phase = Phase::Scoring;
        state.turn = None;
        state.leader = None;
        state.trick_no = None;
        result.phase_transitioned = Some(Phase::Scoring);
        return Ok(result);
    }

    state.trick_no = Some(next_trick_no);
    state.phase = Phase::Trick {
        trick_no: next_trick_no,
    };

    Ok(result)
}

/// Resolve the current trick if complete: winner plus the card points at
/// stake. Pairwise comparison against the best card so far, carrying
/// trump and lead context.
pub fn resolve_current_trick(round: &RoundState, trump: Suit) -> Option<(Seat, u16)> {
    if round.trick_plays.len() < 4 {
        return None;
    }
    let lead = round.trick_lead?;

    let mut best_idx = 0usize;
    for i in 1..4 {
        let (_, card_i) = round.trick_plays[i];
        let (_, card_best) = round.trick_plays[best_idx];
        if card_beats(card_i, card_best, lead, trump) {
            best_idx = i;
        }
    }
    let points = round
        .trick_plays
        .iter()
        .map(|&(_, c)| card_points(c) as u16)
        .sum();
    Some((round.trick_plays[best_idx].0, points))
}
