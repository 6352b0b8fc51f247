//! Phase and state containers for one game of 56.

use serde::{Deserialize, Serialize};

use super::bidding::BiddingState;
use super::cards_types::{Card, Suit};
use super::seats::{Seat, TeamId};
use crate::errors::domain::DomainError;

/// Tricks per round: 4 hands of 12 cards, consumed one card per trick.
pub const TRICKS_PER_ROUND: u8 = 12;

/// Overall game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    /// Game created but no round started.
    Init,
    /// Seats bid or pass in fixed turn order.
    Bidding,
    /// Winning bidder declares the trump suit.
    TrumpSelect,
    /// Playing tricks within the round; `trick_no` is 1-based.
    Trick { trick_no: u8 },
    /// Tally round points against the contract.
    Scoring,
    /// Round complete; next round may start.
    Complete,
    /// A team reached the target score.
    GameOver,
}

/// The obligation produced by the auction: the winning bidder's team must
/// take at least `amount` trick points with `trump` as trumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub bidder: Seat,
    pub team: TeamId,
    pub amount: u8,
    /// Declared after the auction; None only during TrumpSelect.
    pub trump: Option<Suit>,
}

/// Per-round state relevant during bidding, trump selection, and play.
#[derive(Debug, Clone)]
pub struct RoundState {
    /// Auction in progress (Bidding phase only).
    pub bidding: Option<BiddingState>,
    /// Set once the auction ends with a winner.
    pub contract: Option<Contract>,
    /// Ordered plays for the current trick (who, card).
    pub trick_plays: Vec<(Seat, Card)>,
    /// Lead suit for the current trick.
    pub trick_lead: Option<Suit>,
    /// Tricks won per seat this round.
    pub tricks_won: [u8; 4],
    /// Card points captured per team this round; sums to 56 after trick 12.
    pub points_won: [u16; 2],
    /// Last completed trick, for display.
    pub last_trick: Option<Vec<(Seat, Card)>>,
}

impl RoundState {
    pub fn empty() -> Self {
        Self {
            bidding: None,
            contract: None,
            trick_plays: Vec::with_capacity(4),
            trick_lead: None,
            tricks_won: [0; 4],
            points_won: [0; 2],
            last_trick: None,
        }
    }
}

/// Entire game container, sufficient for pure engine operations.
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: Phase,
    /// Round number (1-based) once a round has started.
    pub round_no: Option<u16>,
    /// Players' hands, indexed by seat.
    pub hands: [Vec<Card>; 4],
    /// Dealer seat for the current round.
    pub dealer: Option<Seat>,
    /// Seat expected to act; None when nobody can act.
    pub turn: Option<Seat>,
    /// Seat leading the current trick (Trick phase only).
    pub leader: Option<Seat>,
    /// Current trick number, mirroring `Phase::Trick` (Trick phase only).
    pub trick_no: Option<u8>,
    /// Cumulative scores per team across rounds.
    pub scores_total: [u16; 2],
    pub round: RoundState,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Init,
            round_no: None,
            hands: Default::default(),
            dealer: None,
            turn: None,
            leader: None,
            trick_no: None,
            scores_total: [0; 2],
            round: RoundState::empty(),
        }
    }

    pub fn hand(&self, seat: Seat) -> &[Card] {
        &self.hands[seat.index()]
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn require_turn(state: &GameState, ctx: &'static str) -> Result<Seat, DomainError> {
    state
        .turn
        .ok_or_else(|| DomainError::invariant(format!("turn must be set ({ctx})")))
}

pub fn require_trick_no(state: &GameState, ctx: &'static str) -> Result<u8, DomainError> {
    state
        .trick_no
        .ok_or_else(|| DomainError::invariant(format!("trick_no must be set ({ctx})")))
}

pub fn require_contract(state: &GameState, ctx: &'static str) -> Result<Contract, DomainError> {
    state
        .round
        .contract
        .ok_or_else(|| DomainError::invariant(format!("contract must be set ({ctx})")))
}

pub fn require_trump(state: &GameState, ctx: &'static str) -> Result<Suit, DomainError> {
    require_contract(state, ctx)?
        .trump
        .ok_or_else(|| DomainError::invariant(format!("trump must be declared ({ctx})")))
}
