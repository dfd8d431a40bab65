use std::process::ExitCode;

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use sueca::{choose_random, legal_moves, Card, PlayError, Snapshot};
use sueca_bot_utils::{initialize_logging, Bot};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
struct Args {
    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    let args = Args::parse();
    initialize_logging(args.log_level);

    let seed = args.seed.unwrap_or_else(rand::random);
    debug!(seed);
    let rng = StdRng::seed_from_u64(seed);

    RandomBot { rng }.run()
}

/// Plays a uniformly random legal card.
struct RandomBot {
    rng: StdRng,
}

impl Bot for RandomBot {
    fn play(&mut self, snapshot: &Snapshot) -> Result<Card, PlayError> {
        let candidates = legal_moves(snapshot);
        debug!(
            candidates = ?candidates.iter().map(Card::to_string).collect::<Vec<_>>(),
            "Legal cards"
        );
        choose_random(&candidates, &mut self.rng)
    }
}
