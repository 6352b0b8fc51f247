//! In-memory game runner for agent evaluation.
//!
//! Drives the engine with one agent per seat, move by move, until a
//! team reaches the target score. No I/O, no persistence.

use fiftysix::ai::{AiError, AiPlayer};
use fiftysix::domain::state::Phase;
use fiftysix::game::{Game, GameConfig};
use fiftysix::{DomainError, TeamId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("engine rejected a move: {0}")]
    Engine(#[from] DomainError),
    #[error("agent failed: {0}")]
    Agent(#[from] AiError),
    #[error("game did not finish within {0} steps")]
    Stalled(u64),
}

/// Result of simulating a complete game.
#[derive(Debug, Clone, Copy)]
pub struct GameResult {
    /// Final cumulative scores, indexed by `TeamId::index()`.
    pub final_scores: [u16; 2],
    pub rounds_played: u16,
    pub winner: TeamId,
}

/// One game driven entirely by agents.
pub struct Simulator {
    game: Game,
}

impl Simulator {
    pub fn new(config: GameConfig, game_seed: u64) -> Self {
        let names = ["North", "East", "South", "West"].map(String::from);
        Self {
            game: Game::new(names, config, game_seed),
        }
    }

    /// Run the game to completion with the given agents.
    pub fn simulate_game(
        mut self,
        agents: &[Box<dyn AiPlayer>; 4],
    ) -> Result<GameResult, SimulatorError> {
        // A scored round always moves at least 28 points toward the
        // target, so well-behaved games finish far below this bound.
        const MAX_STEPS: u64 = 1_000_000;

        for _ in 0..MAX_STEPS {
            match self.game.state().phase {
                Phase::Init | Phase::Complete => self.game.start_round()?,
                Phase::Bidding => {
                    let seat = expect_turn(&self.game)?;
                    let action = agents[seat.index()].choose_bid(&self.game.player_view(seat))?;
                    self.game.submit_bid(seat, action)?;
                }
                Phase::TrumpSelect => {
                    let bidder = self
                        .game
                        .state()
                        .round
                        .contract
                        .ok_or_else(|| DomainError::invariant("TrumpSelect without contract"))?
                        .bidder;
                    let suit =
                        agents[bidder.index()].choose_trump(&self.game.player_view(bidder))?;
                    self.game.declare_trump(bidder, suit)?;
                }
                Phase::Trick { .. } => {
                    let seat = expect_turn(&self.game)?;
                    let card = agents[seat.index()].choose_play(&self.game.player_view(seat))?;
                    self.game.play_card(seat, card)?;
                }
                Phase::Scoring => {
                    return Err(DomainError::invariant(
                        "Scoring phase leaked out of play_card",
                    )
                    .into())
                }
                Phase::GameOver => {
                    let summary = self.game.game_summary();
                    let winner = summary
                        .winner
                        .ok_or_else(|| DomainError::invariant("GameOver without winner"))?;
                    return Ok(GameResult {
                        final_scores: summary.scores,
                        rounds_played: summary.rounds_played,
                        winner,
                    });
                }
            }
        }
        Err(SimulatorError::Stalled(MAX_STEPS))
    }
}

fn expect_turn(game: &Game) -> Result<fiftysix::Seat, DomainError> {
    game.state()
        .turn
        .ok_or_else(|| DomainError::invariant("active phase without a turn seat"))
}
