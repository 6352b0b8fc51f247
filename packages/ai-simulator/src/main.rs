//! Agent simulator CLI: fast in-memory games of 56 for evaluating
//! automated players, with no persistence or network in the loop.

mod simulator;

use std::time::Instant;

use clap::{Parser, ValueEnum};
use fiftysix::ai::{create_ai, AiPlayer};
use fiftysix::game::GameConfig;
use fiftysix::TeamId;
use rand::Rng;
use simulator::{GameResult, Simulator};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "Fast in-memory 56 simulator for agent evaluation")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Agent type for all seats (shortcut to set all 4 seats at once)
    #[arg(long, conflicts_with_all = ["north", "east", "south", "west"])]
    seats: Option<AiType>,

    /// Agent type for North
    #[arg(long, default_value = "heuristic")]
    north: AiType,

    /// Agent type for East
    #[arg(long, default_value = "heuristic")]
    east: AiType,

    /// Agent type for South
    #[arg(long, default_value = "heuristic")]
    south: AiType,

    /// Agent type for West
    #[arg(long, default_value = "heuristic")]
    west: AiType,

    /// Game seed (for deterministic deals); random per game if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Cumulative score a team needs to win
    #[arg(long, default_value = "500")]
    target_score: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show the end-of-run summary
    #[arg(long)]
    show_output: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AiType {
    Heuristic,
    Random,
}

impl AiType {
    fn name(self) -> &'static str {
        match self {
            AiType::Heuristic => "heuristic",
            AiType::Random => "random",
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default; warnings and errors only.
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let seat_types = match args.seats {
        Some(t) => [t; 4],
        None => [args.north, args.east, args.south, args.west],
    };

    if args.show_output {
        info!("Starting simulator: {} games", args.games);
        info!(
            "Agents: north={:?}, east={:?}, south={:?}, west={:?}",
            seat_types[0], seat_types[1], seat_types[2], seat_types[3]
        );
    }

    let mut rng = rand::rng();
    let agents: [Box<dyn AiPlayer>; 4] = [
        make_agent(seat_types[0], &mut rng)?,
        make_agent(seat_types[1], &mut rng)?,
        make_agent(seat_types[2], &mut rng)?,
        make_agent(seat_types[3], &mut rng)?,
    ];

    let config = GameConfig {
        target_score: args.target_score,
        ..GameConfig::default()
    };

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0u32;

    for game_num in 1..=args.games {
        let game_seed = args.seed.unwrap_or_else(|| rng.random());
        let sim = Simulator::new(config, game_seed);
        match sim.simulate_game(&agents) {
            Ok(result) => {
                if args.verbose {
                    info!(
                        game_num,
                        game_seed,
                        rounds = result.rounds_played,
                        scores = ?result.final_scores,
                        winner = %result.winner,
                        "game completed"
                    );
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!(game_num, game_seed, "game failed: {e}");
            }
        }
    }

    if args.show_output {
        print_summary(&results, errors, start.elapsed(), args.games);
    }

    Ok(())
}

fn make_agent(
    ai_type: AiType,
    rng: &mut impl Rng,
) -> Result<Box<dyn AiPlayer>, Box<dyn std::error::Error>> {
    // Fresh seed per agent so random seats behave independently.
    let seed = Some(rng.random::<u64>());
    create_ai(ai_type.name(), seed).ok_or_else(|| format!("Unknown agent: {ai_type:?}").into())
}

fn print_summary(results: &[GameResult], errors: u32, elapsed: std::time::Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {errors}");
    }
    println!("Total time: {elapsed:?}");
    if results.is_empty() {
        return;
    }
    println!("Average time per game: {:?}", elapsed / results.len() as u32);

    let mut wins = [0u32; 2];
    let mut total_scores = [0u64; 2];
    let mut total_rounds = 0u64;
    for result in results {
        wins[result.winner.index()] += 1;
        for team in TeamId::ALL {
            total_scores[team.index()] += u64::from(result.final_scores[team.index()]);
        }
        total_rounds += u64::from(result.rounds_played);
    }

    println!("\n=== Results by Team ===");
    let n = results.len() as f64;
    for team in TeamId::ALL {
        let avg = total_scores[team.index()] as f64 / n;
        let win_rate = f64::from(wins[team.index()]) / n * 100.0;
        println!(
            "{team}: avg score={avg:.1}, wins={} ({win_rate:.1}%)",
            wins[team.index()]
        );
    }
    println!("Average rounds per game: {:.1}", total_rounds as f64 / n);
}
