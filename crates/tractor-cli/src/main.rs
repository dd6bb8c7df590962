#![deny(warnings)]

mod report;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tractor_bot::{BasicAgent, GreedyAgent};
use tractor_core::agent::Agent;
use tractor_core::game::{EngineConfig, GameEngine};

/// Round simulator for the Tractor engine.
#[derive(Debug, Parser)]
#[command(
    name = "tractor",
    author,
    version,
    about = "Deterministic Tractor round simulator"
)]
struct Cli {
    /// Number of seats at the table (at least 4).
    #[arg(long, value_name = "COUNT", default_value_t = 4)]
    players: usize,

    /// Seats below this count play the greedy strategy, the rest basic.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    greedy: usize,

    /// RNG seed for the deals.
    #[arg(long, value_name = "SEED", default_value_t = 0)]
    seed: u64,

    /// Number of consecutive rounds to play.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    rounds: u32,

    /// Illegal answers tolerated per decision before aborting the round.
    #[arg(long, value_name = "COUNT")]
    max_retries: Option<usize>,

    /// Emit each round as pretty-printed JSON instead of the table report.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let agents: Vec<Box<dyn Agent>> = (0..cli.players)
        .map(|seat| {
            if seat < cli.greedy {
                Box::new(GreedyAgent::new(seat)) as Box<dyn Agent>
            } else {
                Box::new(BasicAgent::new(seat)) as Box<dyn Agent>
            }
        })
        .collect();

    let mut engine = GameEngine::new(
        agents,
        EngineConfig {
            seed: cli.seed,
            max_retries: cli.max_retries,
        },
    )?;
    info!(
        players = engine.num_players(),
        decks = engine.num_decks(),
        seed = cli.seed,
        "table ready"
    );

    for _ in 0..cli.rounds {
        let summary = engine.play_round()?;
        if cli.json {
            println!("{}", summary.to_json()?);
        } else {
            report::print_round(&summary);
        }
    }

    Ok(())
}
