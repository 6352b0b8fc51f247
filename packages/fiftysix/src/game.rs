//! Game orchestration: deal → bid → trump → 12 tricks → score, round
//! after round until a team reaches the target score.
//!
//! `Game` is the engine's external interface. Every operation either
//! succeeds or returns a typed `DomainError` leaving state untouched.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::bidding::{BidAction, BiddingOutcome, BiddingState};
use crate::domain::cards_types::{Card, Suit};
use crate::domain::dealing::deal_hands;
use crate::domain::player_view::PlayerView;
use crate::domain::scoring::{apply_round_scoring, RoundSummary, ScoringPolicy};
use crate::domain::seats::{dealer_for_round, round_start_seat, Seat, TeamId};
use crate::domain::seed_derivation::derive_dealing_seed;
use crate::domain::state::{require_contract, Contract, GameState, Phase, RoundState};
use crate::domain::tricks::{self, PlayCardResult};
use crate::errors::domain::{DomainError, ValidationKind};

/// What happens when all four seats pass without a bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllPassedPolicy {
    /// Reshuffle and redeal the same round (classic table rule).
    Redeal,
    /// Discard the round unscored; the deal passes on.
    Void,
}

/// Who leads the first trick of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadRule {
    /// Seat after the winning bidder.
    AfterBidder,
    /// Seat left of the dealer, regardless of the auction.
    LeftOfDealer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cumulative team score that ends the game.
    pub target_score: u16,
    pub scoring: ScoringPolicy,
    pub all_passed: AllPassedPolicy,
    pub lead_rule: LeadRule,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_score: 500,
            scoring: ScoringPolicy::default(),
            all_passed: AllPassedPolicy::Redeal,
            lead_rule: LeadRule::AfterBidder,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    /// Cumulative scores, indexed by `TeamId::index()`.
    pub scores: [u16; 2],
    /// Scored rounds so far (voided rounds excluded).
    pub rounds_played: u16,
    /// None until a team reaches the target score.
    pub winner: Option<TeamId>,
}

/// One table of 56: four named seats, two fixed partnerships, an
/// injectable base seed for reproducible deals.
pub struct Game {
    config: GameConfig,
    player_names: [String; 4],
    seed: u64,
    state: GameState,
    /// Redeal counter within the current round (all-pass redeals).
    deal_attempt: u16,
    rounds_played: u16,
    last_round: Option<RoundSummary>,
}

impl Game {
    pub fn new(player_names: [String; 4], config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            player_names,
            seed,
            state: GameState::new(),
            deal_attempt: 0,
            rounds_played: 0,
            last_round: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player_name(&self, seat: Seat) -> &str {
        &self.player_names[seat.index()]
    }

    pub fn player_view(&self, seat: Seat) -> PlayerView {
        PlayerView::from_state(&self.state, seat)
    }

    pub fn legal_moves(&self, seat: Seat) -> Vec<Card> {
        tricks::legal_moves(&self.state, seat)
    }

    /// Deal the next round and open the bidding left of the dealer.
    pub fn start_round(&mut self) -> Result<(), DomainError> {
        match self.state.phase {
            Phase::Init | Phase::Complete => {}
            _ => {
                return Err(DomainError::validation(
                    ValidationKind::PhaseMismatch,
                    "A round is already in progress or the game is over",
                ))
            }
        }

        let round_no = self.state.round_no.map_or(1, |n| n + 1);
        self.deal_attempt = 0;
        self.deal_round(round_no)
    }

    fn deal_round(&mut self, round_no: u16) -> Result<(), DomainError> {
        let dealer = dealer_for_round(Seat::North, round_no);
        let seed = derive_dealing_seed(self.seed, round_no, self.deal_attempt);
        let hands = deal_hands(seed)?;
        let opening = round_start_seat(dealer);

        self.state.round_no = Some(round_no);
        self.state.dealer = Some(dealer);
        self.state.hands = hands;
        self.state.round = RoundState::empty();
        self.state.round.bidding = Some(BiddingState::new(opening));
        self.state.phase = Phase::Bidding;
        self.state.turn = Some(opening);
        self.state.leader = None;
        self.state.trick_no = None;

        debug!(round_no, %dealer, %opening, "round dealt, bidding opens");
        Ok(())
    }

    /// Submit a bid or pass for the seat. Returns the auction outcome
    /// when this action ends it.
    pub fn submit_bid(
        &mut self,
        seat: Seat,
        action: BidAction,
    ) -> Result<Option<BiddingOutcome>, DomainError> {
        if self.state.phase != Phase::Bidding {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "No auction in progress",
            ));
        }
        let bidding = self
            .state
            .round
            .bidding
            .as_mut()
            .ok_or_else(|| DomainError::invariant("Bidding phase without auction state"))?;

        let outcome = bidding.submit(seat, action)?;
        match outcome {
            None => {
                self.state.turn = Some(bidding.turn());
            }
            Some(BiddingOutcome::ContractSet { bidder, amount }) => {
                self.state.round.bidding = None;
                self.state.round.contract = Some(Contract {
                    bidder,
                    team: bidder.team(),
                    amount,
                    trump: None,
                });
                self.state.phase = Phase::TrumpSelect;
                self.state.turn = Some(bidder);
                debug!(%bidder, amount, "contract set, awaiting trump");
            }
            Some(BiddingOutcome::AllPassed) => {
                let round_no = self
                    .state
                    .round_no
                    .ok_or_else(|| DomainError::invariant("Bidding phase without round_no"))?;
                match self.config.all_passed {
                    AllPassedPolicy::Redeal => {
                        self.deal_attempt += 1;
                        debug!(round_no, attempt = self.deal_attempt, "all passed, redealing");
                        self.deal_round(round_no)?;
                    }
                    AllPassedPolicy::Void => {
                        debug!(round_no, "all passed, round voided");
                        self.state.round = RoundState::empty();
                        self.state.hands = Default::default();
                        self.state.phase = Phase::Complete;
                        self.state.turn = None;
                    }
                }
            }
        }
        Ok(outcome)
    }

    /// The winning bidder's single-shot trump declaration. Moves the
    /// round into trick play.
    pub fn declare_trump(&mut self, seat: Seat, suit: Suit) -> Result<(), DomainError> {
        match self.state.phase {
            Phase::TrumpSelect => {}
            Phase::Bidding => {
                return Err(DomainError::validation(
                    ValidationKind::RoundNotReady,
                    "Trump is declared after the auction ends",
                ))
            }
            _ => {
                return Err(DomainError::validation(
                    ValidationKind::PhaseMismatch,
                    "No trump declaration pending",
                ))
            }
        }
        let contract = require_contract(&self.state, "declare_trump")?;
        if seat != contract.bidder {
            return Err(DomainError::validation(
                ValidationKind::OutOfTurn,
                format!("Only {} may declare trump", contract.bidder),
            ));
        }

        let dealer = self
            .state
            .dealer
            .ok_or_else(|| DomainError::invariant("TrumpSelect phase without dealer"))?;
        let leader = match self.config.lead_rule {
            LeadRule::AfterBidder => contract.bidder.next(),
            LeadRule::LeftOfDealer => round_start_seat(dealer),
        };

        self.state.round.contract = Some(Contract {
            trump: Some(suit),
            ..contract
        });
        self.state.phase = Phase::Trick { trick_no: 1 };
        self.state.trick_no = Some(1);
        self.state.leader = Some(leader);
        self.state.turn = Some(leader);

        debug!(%seat, trump = %suit, %leader, "trump declared, play begins");
        Ok(())
    }

    /// Play a card for the seat. When the 12th trick completes, the round
    /// is scored immediately and the returned result's
    /// `phase_transitioned` reflects the post-scoring phase.
    pub fn play_card(&mut self, seat: Seat, card: Card) -> Result<PlayCardResult, DomainError> {
        let mut result = tricks::play_card(&mut self.state, seat, card)?;

        if result.phase_transitioned == Some(Phase::Scoring) {
            let summary =
                apply_round_scoring(&mut self.state, self.config.scoring, self.config.target_score)?;
            self.rounds_played += 1;
            self.last_round = Some(summary);
            result.phase_transitioned = Some(self.state.phase);
            debug!(
                round_no = summary.round_no,
                bidding_team = %summary.bidding_team,
                bid = summary.bid_amount,
                success = summary.success,
                "round scored"
            );
        }
        Ok(result)
    }

    /// Summary of the most recently scored round, if any.
    pub fn round_summary(&self) -> Option<&RoundSummary> {
        self.last_round.as_ref()
    }

    /// Cumulative standings. Pure read; calling it twice without
    /// intervening moves returns identical results.
    pub fn game_summary(&self) -> GameSummary {
        let scores = self.state.scores_total;
        let winner = if self.state.phase == Phase::GameOver {
            Some(self.leading_team())
        } else {
            None
        };
        GameSummary {
            scores,
            rounds_played: self.rounds_played,
            winner,
        }
    }

    fn leading_team(&self) -> TeamId {
        let [ns, ew] = self.state.scores_total;
        if ns != ew {
            if ns > ew {
                TeamId::NorthSouth
            } else {
                TeamId::EastWest
            }
        } else {
            // Both teams can cross the target on the same successful
            // contract; the side that bid the round takes the game.
            self.last_round
                .map(|r| r.bidding_team)
                .unwrap_or(TeamId::NorthSouth)
        }
    }
}
