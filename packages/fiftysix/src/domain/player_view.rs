//! Per-seat visible slice of the game state, for agents and renderers.
//!
//! A view never exposes another seat's hand; everything else in it is
//! public table information.

use super::bidding::BidAction;
use super::cards_logic::hand_points;
use super::cards_types::{Card, Suit};
use super::seats::Seat;
use super::state::{Contract, GameState, Phase};
use super::tricks::legal_moves;

#[derive(Debug, Clone)]
pub struct PlayerView {
    pub seat: Seat,
    pub phase: Phase,
    pub hand: Vec<Card>,
    pub contract: Option<Contract>,
    pub trump: Option<Suit>,
    /// Plays in the trick currently on the table, in order.
    pub trick_plays: Vec<(Seat, Card)>,
    pub trick_lead: Option<Suit>,
    /// Smallest amount a bid must reach, while the auction runs.
    pub min_next_bid: Option<u8>,
    /// Cards this seat may legally play right now (empty outside Trick).
    pub legal_plays: Vec<Card>,
    pub tricks_won: [u8; 4],
    pub points_won: [u16; 2],
    pub scores_total: [u16; 2],
}

impl PlayerView {
    pub fn from_state(state: &GameState, seat: Seat) -> Self {
        Self {
            seat,
            phase: state.phase,
            hand: state.hand(seat).to_vec(),
            contract: state.round.contract,
            trump: state.round.contract.and_then(|c| c.trump),
            trick_plays: state.round.trick_plays.clone(),
            trick_lead: state.round.trick_lead,
            min_next_bid: state.round.bidding.as_ref().map(|b| b.min_next_bid()),
            legal_plays: legal_moves(state, seat),
            tricks_won: state.round.tricks_won,
            points_won: state.round.points_won,
            scores_total: state.scores_total,
        }
    }

    /// Bid amounts this seat could submit right now; passing is always an
    /// option while the seat is still in the auction.
    pub fn legal_bids(&self) -> Vec<BidAction> {
        let Some(min) = self.min_next_bid else {
            return Vec::new();
        };
        let mut actions = vec![BidAction::Pass];
        actions.extend((min..=super::bidding::MAX_BID).map(BidAction::Bid));
        actions
    }

    pub fn hand_points(&self) -> u16 {
        hand_points(&self.hand)
    }
}
