//! Starting point for a bot with an actual strategy.
//!
//! The input is already parsed and the legal cards are computed; only the
//! decision in [`TemplateBot::play()`] is missing. Until then, the bot exits
//! with status 3.

use std::process::ExitCode;

use clap::Parser;
use sueca::{legal_moves, Card, PlayError, Snapshot};
use sueca_bot_utils::{initialize_logging, Bot};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
struct Args {
    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    let args = Args::parse();
    initialize_logging(args.log_level);
    TemplateBot {}.run()
}

struct TemplateBot {}

impl Bot for TemplateBot {
    fn play(&mut self, snapshot: &Snapshot) -> Result<Card, PlayError> {
        let candidates = legal_moves(snapshot);
        let trick = &snapshot.current_trick;
        debug!(
            trump = %snapshot.trump_suit(),
            own_points = snapshot.own_points(),
            trick_empty = trick.is_empty(),
            played = ?trick.played_cards().map(|card| card.to_string()).collect::<Vec<_>>(),
            num_candidates = candidates.len(),
            "Legal cards"
        );
        Err(PlayError::NotImplemented)
    }
}
