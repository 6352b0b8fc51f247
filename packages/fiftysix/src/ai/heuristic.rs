//! Heuristic agent: a deterministic baseline stronger than random play.
//!
//! Bidding keys off raw hand points: 20 or more of the deck's 56 card
//! points in hand is worth pushing the auction, mid-strength hands take
//! the minimum, weak hands pass. Trump is the suit where the hand holds
//! the most points, with length as a tiebreak. Card play wins tricks
//! cheaply when an opponent currently holds them and sheds low cards
//! otherwise.

use super::trait_def::{AiError, AiPlayer};
use crate::domain::bidding::{BidAction, MAX_BID};
use crate::domain::cards_logic::{card_beats, card_points};
use crate::domain::cards_types::{Card, Suit};
use crate::domain::player_view::PlayerView;
use crate::domain::seats::Seat;

#[derive(Debug, Clone, Copy, Default)]
pub struct Heuristic;

impl Heuristic {
    pub const NAME: &'static str = "Heuristic";

    pub fn new() -> Self {
        Self
    }

    fn lowest(cards: &[Card]) -> Option<Card> {
        cards.iter().copied().min()
    }

    /// Points held in a suit, doubled, plus card count. Orders suits the
    /// same way as points + count/2 without leaving integers.
    fn suit_score(hand: &[Card], suit: Suit) -> u32 {
        let mut points = 0u32;
        let mut count = 0u32;
        for c in hand.iter().filter(|c| c.suit == suit) {
            points += u32::from(card_points(*c));
            count += 1;
        }
        points * 2 + count
    }

    /// The seat currently winning the trick on the table, with its card.
    fn current_winner(
        plays: &[(Seat, Card)],
        lead: Suit,
        trump: Suit,
    ) -> Option<(Seat, Card)> {
        let mut best = *plays.first()?;
        for &(seat, card) in &plays[1..] {
            if card_beats(card, best.1, lead, trump) {
                best = (seat, card);
            }
        }
        Some(best)
    }
}

impl AiPlayer for Heuristic {
    fn choose_bid(&self, view: &PlayerView) -> Result<BidAction, AiError> {
        let min = view
            .min_next_bid
            .ok_or_else(|| AiError::InvalidMove("No auction in progress".into()))?;
        let points = view.hand_points();

        // Threshold ladder: strong hands raise past the minimum, decent
        // hands take it, anything under 12 points passes.
        let action = if points >= 18 && min <= 40 {
            BidAction::Bid((min + 2).min(MAX_BID))
        } else if points >= 15 && min <= 35 {
            BidAction::Bid(min)
        } else if points >= 12 && min <= 30 {
            BidAction::Bid(min)
        } else {
            BidAction::Pass
        };
        Ok(action)
    }

    fn choose_trump(&self, view: &PlayerView) -> Result<Suit, AiError> {
        let mut best: Option<(u32, Suit)> = None;
        for suit in Suit::ALL {
            let score = Self::suit_score(&view.hand, suit);
            if best.map_or(true, |(bs, _)| score > bs) {
                best = Some((score, suit));
            }
        }
        best.map(|(_, s)| s)
            .ok_or_else(|| AiError::Internal("Suit evaluation produced no candidate".into()))
    }

    fn choose_play(&self, view: &PlayerView) -> Result<Card, AiError> {
        let legal = &view.legal_plays;
        if legal.is_empty() {
            return Err(AiError::InvalidMove("No legal plays available".into()));
        }

        // On lead: low card from the strongest suit we can lead, keeping
        // trump and top cards back for later tricks.
        let Some(lead) = view.trick_lead else {
            let lead_suit = Suit::ALL
                .into_iter()
                .filter(|&s| legal.iter().any(|c| c.suit == s))
                .max_by_key(|&s| Self::suit_score(&view.hand, s));
            let choice = lead_suit
                .and_then(|s| legal.iter().copied().filter(|c| c.suit == s).min())
                .or_else(|| Self::lowest(legal));
            return choice.ok_or_else(|| AiError::Internal("Empty lead candidates".into()));
        };

        let trump = view
            .trump
            .ok_or_else(|| AiError::InvalidMove("Trump not declared yet".into()))?;

        // Following: take the trick with the cheapest winner when an
        // opponent holds it, otherwise shed our lowest legal card.
        if let Some((winner_seat, winner_card)) =
            Self::current_winner(&view.trick_plays, lead, trump)
        {
            if winner_seat.team() != view.seat.team() {
                let cheapest_winner = legal
                    .iter()
                    .copied()
                    .filter(|&c| card_beats(c, winner_card, lead, trump))
                    .min();
                if let Some(card) = cheapest_winner {
                    return Ok(card);
                }
            }
        }

        Self::lowest(legal).ok_or_else(|| AiError::Internal("Empty legal plays".into()))
    }
}
