mod logging;
pub use logging::*;

use std::io::{Read, Write};
use std::process::ExitCode;

use anyhow::Context;
use sueca::{parse_snapshot_bytes, Card, ParseError, PlayError, Snapshot};
use tracing::{debug, error, trace, Level};

/// Exit status when stdin or stdout failed.
pub const EXIT_IO_ERROR: u8 = 1;
/// Exit status for input that does not describe a valid game state.
pub const EXIT_INVALID_INPUT: u8 = 2;
/// Exit status for a bot without a strategy.
pub const EXIT_NOT_IMPLEMENTED: u8 = 3;
/// Exit status when the bot had no card to choose from.
pub const EXIT_NO_LEGAL_MOVES: u8 = 4;

/// A trait to simplify writing bots.
pub trait Bot {
    /// Chooses the card to play.
    fn play(&mut self, snapshot: &Snapshot) -> Result<Card, PlayError>;

    /// Reads the whole game state from `input` and writes the chosen card
    /// to `output`, followed by a newline.
    fn respond<R: Read, W: Write>(&mut self, mut input: R, mut output: W) -> anyhow::Result<Card>
    where
        Self: Sized,
    {
        let mut buf = Vec::new();
        input
            .read_to_end(&mut buf)
            .context("Could not read the game state")?;

        let snapshot = parse_snapshot_bytes(&buf).context("Invalid game state")?;
        if tracing::enabled!(Level::TRACE) {
            let snapshot_json = serde_json::to_string(&snapshot)?;
            trace!(snapshot = %snapshot_json, "Parsed game state");
        }

        let card = self.play(&snapshot)?;
        debug!(%card, "Chose card");

        writeln!(output, "{}", card).context("Could not write the chosen card")?;
        output.flush()?;
        Ok(card)
    }

    /// Plays one card, communicating through stdin/stdout.
    ///
    /// Stderr is used for logging.
    fn run(&mut self) -> ExitCode
    where
        Self: Sized,
    {
        let stdin = std::io::stdin().lock();
        let stdout = std::io::stdout().lock();
        match self.respond(stdin, stdout) {
            Ok(_) => ExitCode::SUCCESS,
            Err(err) => {
                for cause in err.chain() {
                    error!("{}", cause);
                }
                ExitCode::from(exit_status(&err))
            }
        }
    }
}

/// Maps an error from [`Bot::respond()`] to the process exit status.
pub fn exit_status(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<ParseError>().is_some() {
        return EXIT_INVALID_INPUT;
    }
    match err.downcast_ref::<PlayError>() {
        Some(PlayError::NotImplemented) => EXIT_NOT_IMPLEMENTED,
        Some(PlayError::NoLegalMoves) => EXIT_NO_LEGAL_MOVES,
        None => EXIT_IO_ERROR,
    }
}
