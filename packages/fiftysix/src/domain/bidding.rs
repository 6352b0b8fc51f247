//! Bidding protocol: a turn-based auction producing a contract.
//!
//! Seats act in clockwise rotation starting left of the dealer. A seat
//! may raise the standing high bid (within [28, 56]) or pass; passing
//! removes the seat from the auction for the rest of the round. The
//! auction ends when the holder of the high bid is the only seat left
//! in it, or when all four seats pass without any bid.

use serde::{Deserialize, Serialize};

use super::seats::Seat;
use crate::errors::domain::{DomainError, ValidationKind};

/// Lowest legal opening bid: more than half the deck's 56 points.
pub const MIN_BID: u8 = 28;
/// Highest legal bid: the whole deck.
pub const MAX_BID: u8 = 56;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum BidAction {
    Bid(u8),
    Pass,
}

/// Terminal result of an auction.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BiddingOutcome {
    /// One bidder remains; they owe `amount` trick points this round.
    ContractSet { bidder: Seat, amount: u8 },
    /// All four seats passed before any bid.
    AllPassed,
}

/// Auction state between moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiddingState {
    turn: Seat,
    active: [bool; 4],
    high_bid: Option<(Seat, u8)>,
    history: Vec<(Seat, BidAction)>,
}

impl BiddingState {
    pub fn new(opening: Seat) -> Self {
        Self {
            turn: opening,
            active: [true; 4],
            high_bid: None,
            history: Vec::new(),
        }
    }

    /// Seat expected to act next. Meaningless once an outcome has been
    /// returned from `submit`.
    pub fn turn(&self) -> Seat {
        self.turn
    }

    pub fn is_active(&self, seat: Seat) -> bool {
        self.active[seat.index()]
    }

    /// Standing high bid, if any bid has been made.
    pub fn high_bid(&self) -> Option<(Seat, u8)> {
        self.high_bid
    }

    /// Every action taken so far, in order.
    pub fn history(&self) -> &[(Seat, BidAction)] {
        &self.history
    }

    /// Smallest amount the next bid must reach.
    pub fn min_next_bid(&self) -> u8 {
        match self.high_bid {
            Some((_, amount)) => amount.saturating_add(1),
            None => MIN_BID,
        }
    }

    /// Amounts the given seat could legally bid right now (it may always
    /// pass instead). Empty when the high bid already sits at 56.
    pub fn legal_bids(&self) -> Vec<u8> {
        (self.min_next_bid()..=MAX_BID).collect()
    }

    /// Apply one bid or pass. Returns `Some(outcome)` when the auction
    /// terminates, `None` while it continues. State is untouched on error.
    pub fn submit(
        &mut self,
        seat: Seat,
        action: BidAction,
    ) -> Result<Option<BiddingOutcome>, DomainError> {
        if !self.active[seat.index()] {
            return Err(DomainError::validation(
                ValidationKind::IllegalBid,
                format!("{seat} has already passed"),
            ));
        }
        if seat != self.turn {
            return Err(DomainError::validation(
                ValidationKind::OutOfTurn,
                format!("It is {}'s turn to bid", self.turn),
            ));
        }

        match action {
            BidAction::Bid(amount) => {
                if !(MIN_BID..=MAX_BID).contains(&amount) {
                    return Err(DomainError::validation(
                        ValidationKind::IllegalBid,
                        format!("Bid {amount} outside [{MIN_BID}, {MAX_BID}]"),
                    ));
                }
                if let Some((_, high)) = self.high_bid {
                    if amount <= high {
                        return Err(DomainError::validation(
                            ValidationKind::IllegalBid,
                            format!("Bid {amount} does not raise {high}"),
                        ));
                    }
                }
                self.high_bid = Some((seat, amount));
            }
            BidAction::Pass => {
                self.active[seat.index()] = false;
            }
        }
        self.history.push((seat, action));

        if let Some(outcome) = self.outcome() {
            return Ok(Some(outcome));
        }
        self.turn = self
            .next_active_after(seat)
            .ok_or_else(|| DomainError::invariant("auction continues with no active seat"))?;
        Ok(None)
    }

    fn outcome(&self) -> Option<BiddingOutcome> {
        let actives = self.active.iter().filter(|&&a| a).count();
        match self.high_bid {
            Some((bidder, amount)) => {
                // Terminal once nobody but the high bidder can still act.
                let others_out = Seat::ALL
                    .iter()
                    .all(|&s| s == bidder || !self.active[s.index()]);
                others_out.then_some(BiddingOutcome::ContractSet { bidder, amount })
            }
            None => (actives == 0).then_some(BiddingOutcome::AllPassed),
        }
    }

    fn next_active_after(&self, seat: Seat) -> Option<Seat> {
        let mut next = seat.next();
        for _ in 0..3 {
            if self.active[next.index()] {
                return Some(next);
            }
            next = next.next();
        }
        None
    }
}
