use crate::{Card, Seat, Suit};

/// The place in the input where parsing failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputField {
    CurrentPlayer,
    HandSize,
    HandCard { card_idx: usize },
    TrumpPlayer,
    TrumpCard,
    TrickLeader,
    TrickCard { seat: Seat },
    TrickSuit,
    PreviousTrickCount,
    PreviousTrickLeader { trick_idx: usize },
    PreviousTrickCard { trick_idx: usize, seat: Seat },
    Points { team: usize },
    EndOfInput,
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputField::CurrentPlayer => write!(f, "the current player"),
            InputField::HandSize => write!(f, "the number of cards in hand"),
            InputField::HandCard { card_idx } => write!(f, "card #{} in hand", card_idx + 1),
            InputField::TrumpPlayer => write!(f, "the trump player"),
            InputField::TrumpCard => write!(f, "the trump card"),
            InputField::TrickLeader => write!(f, "the leader of the current trick"),
            InputField::TrickCard { seat } => {
                write!(f, "the card of seat {} in the current trick", seat)
            }
            InputField::TrickSuit => write!(f, "the suit of the current trick"),
            InputField::PreviousTrickCount => write!(f, "the number of previous tricks"),
            InputField::PreviousTrickLeader { trick_idx } => {
                write!(f, "the leader of previous trick #{}", trick_idx + 1)
            }
            InputField::PreviousTrickCard { trick_idx, seat } => write!(
                f,
                "the card of seat {} in previous trick #{}",
                seat,
                trick_idx + 1
            ),
            InputField::Points { team } => write!(f, "the points of team {}", team),
            InputField::EndOfInput => write!(f, "the end of the input"),
        }
    }
}

/// What went wrong while parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    UnexpectedEnd,
    InvalidInteger { token: String },
    InvalidRank { found: char },
    InvalidSuit { found: char },
    SeatOutOfRange { seat: u64 },
    CountTooLarge { count: usize, max: usize },
    DuplicateCard { card: Card },
    SuitMismatch {
        declared: Option<Suit>,
        leader_card: Option<Card>,
    },
    TrailingInput { token: String },
    InvalidUtf8 { offset: usize },
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseErrorKind::UnexpectedEnd => write!(f, "Input ended unexpectedly"),
            ParseErrorKind::InvalidInteger { token } => {
                write!(f, "Expected a non-negative integer, found {:?}", token)
            }
            ParseErrorKind::InvalidRank { found } => write!(f, "Unknown rank {:?}", found),
            ParseErrorKind::InvalidSuit { found } => write!(f, "Unknown suit {:?}", found),
            ParseErrorKind::SeatOutOfRange { seat } => {
                write!(f, "Seat {} does not exist, seats are 0 to {}", seat, Seat::COUNT - 1)
            }
            ParseErrorKind::CountTooLarge { count, max } => {
                write!(f, "Count {} exceeds the maximum of {}", count, max)
            }
            ParseErrorKind::DuplicateCard { card } => {
                write!(f, "Card {} appears more than once", card)
            }
            ParseErrorKind::SuitMismatch {
                declared,
                leader_card,
            } => {
                let declared = declared.map_or('X', Suit::to_char);
                match leader_card {
                    Some(card) => write!(
                        f,
                        "Declared suit {} differs from the leader's card {}",
                        declared, card
                    ),
                    None => write!(
                        f,
                        "Declared suit {} although the leader has not played yet",
                        declared
                    ),
                }
            }
            ParseErrorKind::TrailingInput { token } => {
                write!(f, "Unexpected input {:?} after the points", token)
            }
            ParseErrorKind::InvalidUtf8 { offset } => {
                write!(f, "Input is not valid UTF-8 at byte {}", offset)
            }
        }
    }
}

/// The error type for [`parse_snapshot()`](crate::parse_snapshot) and
/// [`parse_snapshot_bytes()`](crate::parse_snapshot_bytes).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub field: InputField,
    pub kind: ParseErrorKind,
}

impl std::error::Error for ParseError {}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} while reading {}", self.kind, self.field)
    }
}

/// The error type for choosing a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayError {
    /// The bot has no strategy yet.
    NotImplemented,
    /// There was no card to choose from. Cannot happen with a non-empty hand.
    NoLegalMoves,
}

impl std::error::Error for PlayError {}

impl std::fmt::Display for PlayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayError::NotImplemented => write!(f, "No strategy has been implemented for this bot"),
            PlayError::NoLegalMoves => write!(f, "There is no legal card to play"),
        }
    }
}
