use serde::{Deserialize, Serialize};

use crate::{Card, CompletedTrick, Seat, Suit, Trick};

/// Everything a bot is told before it has to play a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The seat of the bot.
    pub current_player: Seat,
    /// The hand of the bot, in the order it was received.
    pub hand: Vec<Card>,
    /// The seat that turned up the trump card.
    pub trump_player: Seat,
    pub trump_card: Card,
    pub current_trick: Trick,
    /// Tricks already played in this round, oldest first.
    pub previous_tricks: Vec<CompletedTrick>,
    /// Points per team, see [`Seat::team()`].
    pub points: [u32; 2],
}

impl Snapshot {
    /// Whether the bot leads the current trick.
    pub fn is_leading(&self) -> bool {
        self.current_player == self.current_trick.leader
    }

    pub fn trump_suit(&self) -> Suit {
        self.trump_card.suit
    }

    pub fn own_points(&self) -> u32 {
        self.points[self.current_player.team()]
    }
}

fn write_card_slot(f: &mut std::fmt::Formatter<'_>, slot: Option<Card>) -> std::fmt::Result {
    match slot {
        Some(card) => write!(f, " {}", card),
        None => write!(f, " X"),
    }
}

/// Writes the snapshot in the input format that [`parse_snapshot()`](crate::parse_snapshot)
/// reads, one section per line.
impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.current_player)?;

        write!(f, "{}", self.hand.len())?;
        for card in &self.hand {
            write!(f, " {}", card)?;
        }
        writeln!(f)?;

        writeln!(f, "{}", self.trump_player)?;
        writeln!(f, "{}", self.trump_card)?;

        write!(f, "{}", self.current_trick.leader)?;
        for slot in self.current_trick.cards {
            write_card_slot(f, slot)?;
        }
        writeln!(f)?;
        match self.current_trick.suit() {
            Some(suit) => writeln!(f, "{}", suit)?,
            None => writeln!(f, "X")?,
        }

        write!(f, "{}", self.previous_tricks.len())?;
        for trick in &self.previous_tricks {
            write!(f, " {}", trick.leader)?;
            for card in trick.cards {
                write!(f, " {}", card)?;
            }
        }
        writeln!(f)?;

        writeln!(f, "{} {}", self.points[0], self.points[1])
    }
}
