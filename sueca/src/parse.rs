use std::str::FromStr;

use crate::{
    Card, CompletedTrick, InputField, ParseError, ParseErrorKind, Rank, Seat, Snapshot, Suit,
    Trick,
};

/// Upper bound for the number of cards in a hand.
pub const MAX_HAND_SIZE: usize = 13;
/// Upper bound for the number of previous tricks in a round.
pub const MAX_PREVIOUS_TRICKS: usize = 13;

/// The character that stands for "no card" in the input.
const ABSENT: char = 'X';

/// Reads whitespace-separated integers and single characters.
///
/// Characters are read one at a time, so the two characters of a card may be
/// written together (`7S`) or apart (`7 S`).
struct Scanner<'a> {
    rest: &'a str,
    field: InputField,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            rest: input,
            field: InputField::CurrentPlayer,
        }
    }

    fn err(&self, kind: ParseErrorKind) -> ParseError {
        ParseError {
            field: self.field,
            kind,
        }
    }

    fn at(&mut self, field: InputField) -> &mut Self {
        self.field = field;
        self
    }

    fn next_token(&mut self) -> Option<&'a str> {
        let rest: &'a str = self.rest;
        let trimmed = rest.trim_start();
        if trimmed.is_empty() {
            self.rest = trimmed;
            return None;
        }
        let end = trimmed
            .find(char::is_whitespace)
            .unwrap_or(trimmed.len());
        let (token, rest) = trimmed.split_at(end);
        self.rest = rest;
        Some(token)
    }

    fn next_char(&mut self) -> Result<char, ParseError> {
        let rest: &'a str = self.rest.trim_start();
        self.rest = rest;
        let mut chars = rest.chars();
        let c = chars
            .next()
            .ok_or_else(|| self.err(ParseErrorKind::UnexpectedEnd))?;
        self.rest = chars.as_str();
        Ok(c)
    }

    fn next_integer<T: FromStr>(&mut self) -> Result<T, ParseError> {
        let token = self
            .next_token()
            .ok_or_else(|| self.err(ParseErrorKind::UnexpectedEnd))?;
        token.parse::<T>().map_err(|_| {
            self.err(ParseErrorKind::InvalidInteger {
                token: String::from(token),
            })
        })
    }

    fn next_seat(&mut self) -> Result<Seat, ParseError> {
        let id = self.next_integer::<u64>()?;
        u8::try_from(id)
            .ok()
            .and_then(Seat::new)
            .ok_or_else(|| self.err(ParseErrorKind::SeatOutOfRange { seat: id }))
    }

    fn next_count(&mut self, max: usize) -> Result<usize, ParseError> {
        let count = self.next_integer::<usize>()?;
        if count > max {
            return Err(self.err(ParseErrorKind::CountTooLarge { count, max }));
        }
        Ok(count)
    }

    fn rank(&self, c: char) -> Result<Rank, ParseError> {
        Rank::from_char(c).ok_or_else(|| self.err(ParseErrorKind::InvalidRank { found: c }))
    }

    fn next_suit(&mut self) -> Result<Suit, ParseError> {
        let c = self.next_char()?;
        Suit::from_char(c).ok_or_else(|| self.err(ParseErrorKind::InvalidSuit { found: c }))
    }

    fn next_card(&mut self) -> Result<Card, ParseError> {
        let c = self.next_char()?;
        let rank = self.rank(c)?;
        let suit = self.next_suit()?;
        Ok(Card { rank, suit })
    }

    /// A card, or a lone `X` for an empty slot.
    fn next_card_slot(&mut self) -> Result<Option<Card>, ParseError> {
        let c = self.next_char()?;
        if c == ABSENT {
            return Ok(None);
        }
        let rank = self.rank(c)?;
        let suit = self.next_suit()?;
        Ok(Some(Card { rank, suit }))
    }

    /// A suit, or `X` if there is none.
    fn next_suit_slot(&mut self) -> Result<Option<Suit>, ParseError> {
        let c = self.next_char()?;
        if c == ABSENT {
            return Ok(None);
        }
        Suit::from_char(c)
            .map(Some)
            .ok_or_else(|| self.err(ParseErrorKind::InvalidSuit { found: c }))
    }

    fn finish(&mut self) -> Result<(), ParseError> {
        self.at(InputField::EndOfInput);
        match self.next_token() {
            Some(token) => Err(self.err(ParseErrorKind::TrailingInput {
                token: String::from(token),
            })),
            None => Ok(()),
        }
    }
}

fn all_seats() -> impl Iterator<Item = Seat> {
    (0..Seat::COUNT as u8).filter_map(Seat::new)
}

fn parse_hand(scanner: &mut Scanner) -> Result<Vec<Card>, ParseError> {
    let hand_size = scanner.at(InputField::HandSize).next_count(MAX_HAND_SIZE)?;
    let mut hand: Vec<Card> = Vec::with_capacity(hand_size);
    for card_idx in 0..hand_size {
        let card = scanner.at(InputField::HandCard { card_idx }).next_card()?;
        if hand.contains(&card) {
            return Err(scanner.err(ParseErrorKind::DuplicateCard { card }));
        }
        hand.push(card);
    }
    Ok(hand)
}

fn parse_current_trick(scanner: &mut Scanner) -> Result<Trick, ParseError> {
    let leader = scanner.at(InputField::TrickLeader).next_seat()?;
    let mut cards = [None; Seat::COUNT];
    for seat in all_seats() {
        cards[seat.index()] = scanner.at(InputField::TrickCard { seat }).next_card_slot()?;
    }
    let trick = Trick { leader, cards };

    let declared = scanner.at(InputField::TrickSuit).next_suit_slot()?;
    if declared != trick.suit() {
        return Err(scanner.err(ParseErrorKind::SuitMismatch {
            declared,
            leader_card: trick.card_of(leader),
        }));
    }
    Ok(trick)
}

fn parse_previous_tricks(scanner: &mut Scanner) -> Result<Vec<CompletedTrick>, ParseError> {
    let count = scanner
        .at(InputField::PreviousTrickCount)
        .next_count(MAX_PREVIOUS_TRICKS)?;
    let mut tricks = Vec::with_capacity(count);
    for trick_idx in 0..count {
        let leader = scanner
            .at(InputField::PreviousTrickLeader { trick_idx })
            .next_seat()?;
        // Every slot is overwritten below
        let mut cards = [Card {
            suit: Suit::Diamond,
            rank: Rank::Two,
        }; Seat::COUNT];
        for seat in all_seats() {
            cards[seat.index()] = scanner
                .at(InputField::PreviousTrickCard { trick_idx, seat })
                .next_card()?;
        }
        tricks.push(CompletedTrick { leader, cards });
    }
    Ok(tricks)
}

/// Parses the textual game state a bot receives on stdin.
///
/// The fields are, in order and separated by whitespace:
/// the current player, the hand size followed by the cards in hand, the
/// trump player, the trump card, the leader of the current trick followed
/// by one card or `X` per seat, the suit of the current trick (or `X`), the
/// number of previous tricks followed by each trick's leader and four cards,
/// and the points of both teams.
///
/// ```
/// # use sueca::{card, parse_snapshot};
/// let snapshot = parse_snapshot("1\n2 7S AC\n0\n2D\n1 X X X X\nX\n0\n0 0\n").unwrap();
/// assert_eq!(snapshot.hand, vec![card!("7S"), card!("AC")]);
/// assert!(snapshot.is_leading());
/// ```
pub fn parse_snapshot(input: &str) -> Result<Snapshot, ParseError> {
    let mut scanner = Scanner::new(input);

    let current_player = scanner.at(InputField::CurrentPlayer).next_seat()?;
    let hand = parse_hand(&mut scanner)?;
    let trump_player = scanner.at(InputField::TrumpPlayer).next_seat()?;
    let trump_card = scanner.at(InputField::TrumpCard).next_card()?;
    let current_trick = parse_current_trick(&mut scanner)?;
    let previous_tricks = parse_previous_tricks(&mut scanner)?;
    let mut points = [0u32; 2];
    for (team, team_points) in points.iter_mut().enumerate() {
        *team_points = scanner.at(InputField::Points { team }).next_integer()?;
    }
    scanner.finish()?;

    Ok(Snapshot {
        current_player,
        hand,
        trump_player,
        trump_card,
        current_trick,
        previous_tricks,
        points,
    })
}

impl FromStr for Snapshot {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_snapshot(s)
    }
}

/// Like [`parse_snapshot()`], but for raw bytes as read from stdin.
///
/// Bytes that are not UTF-8 are reported as [`ParseErrorKind::InvalidUtf8`],
/// located at the field they appear in.
pub fn parse_snapshot_bytes(input: &[u8]) -> Result<Snapshot, ParseError> {
    let utf8_err = match std::str::from_utf8(input) {
        Ok(text) => return parse_snapshot(text),
        Err(utf8_err) => utf8_err,
    };
    let offset = utf8_err.valid_up_to();
    let valid_prefix = std::str::from_utf8(&input[..offset]).unwrap_or_default();
    let field = match parse_snapshot(valid_prefix) {
        // An error before the invalid bytes is the first problem with the input
        Err(err) if err.kind != ParseErrorKind::UnexpectedEnd => return Err(err),
        Err(err) => err.field,
        Ok(_) => InputField::EndOfInput,
    };
    Err(ParseError {
        field,
        kind: ParseErrorKind::InvalidUtf8 { offset },
    })
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::card;

    const SAMPLE: &str = "1\n9 2D 3H 4H 5H 6H 7H 7S KS QC\n1\n2D\n1 X X X X\nX\n1 3 KC AC 2C QC\n0 17\n";

    fn seat(id: u8) -> Seat {
        Seat::new(id).unwrap()
    }

    quickcheck! {
        fn encoding_parses_back(snapshot: Snapshot) -> bool {
            parse_snapshot(&snapshot.to_string()) == Ok(snapshot)
        }
    }

    #[test]
    fn parse_sample() {
        let snapshot = parse_snapshot(SAMPLE).unwrap();
        assert_eq!(snapshot.current_player, seat(1));
        assert_eq!(snapshot.hand.len(), 9);
        assert_eq!(snapshot.hand[8], card!("QC"));
        assert_eq!(snapshot.trump_player, seat(1));
        assert_eq!(snapshot.trump_card, card!("2D"));
        assert_eq!(snapshot.current_trick.leader, seat(1));
        assert!(snapshot.current_trick.is_empty());
        assert_eq!(snapshot.previous_tricks.len(), 1);
        assert_eq!(snapshot.previous_tricks[0].leader, seat(3));
        assert_eq!(snapshot.previous_tricks[0].suit(), Suit::Club);
        assert_eq!(snapshot.points, [0, 17]);
        assert_eq!(snapshot.to_string(), SAMPLE);
    }

    #[test]
    fn card_characters_may_be_separated() {
        let joined = "2 2 7S AC 0 2D 1 X AC X X C 0 5 6";
        let split = "2 2 7 S A C 0 2 D 1 X A C X X C 0 5 6";
        let snapshot = parse_snapshot(split).unwrap();
        assert_eq!(parse_snapshot(joined).unwrap(), snapshot);
        assert_eq!(snapshot.current_trick.card_of(seat(1)), Some(card!("AC")));
        assert_eq!(snapshot.current_trick.suit(), Some(Suit::Club));
    }

    #[test]
    fn truncated_input() {
        let err = parse_snapshot("1\n9 2D 3H").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedEnd);
        assert_eq!(err.field, InputField::HandCard { card_idx: 2 });

        let err = parse_snapshot("").unwrap_err();
        assert_eq!(err.field, InputField::CurrentPlayer);

        let without_points = &SAMPLE[..SAMPLE.len() - "0 17\n".len()];
        let err = parse_snapshot(without_points).unwrap_err();
        assert_eq!(err.field, InputField::Points { team: 0 });
        assert_eq!(err.kind, ParseErrorKind::UnexpectedEnd);
    }

    #[test]
    fn rejects_bad_counts() {
        let err = parse_snapshot("0 -1").unwrap_err();
        assert_eq!(err.field, InputField::HandSize);
        assert_eq!(
            err.kind,
            ParseErrorKind::InvalidInteger {
                token: String::from("-1")
            }
        );

        let err = parse_snapshot("0 4000000000").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::CountTooLarge {
                count: 4000000000,
                max: MAX_HAND_SIZE
            }
        );

        let err = parse_snapshot("0 1 7S 0 2D 0 X X X X X 99").unwrap_err();
        assert_eq!(err.field, InputField::PreviousTrickCount);
        assert_eq!(
            err.kind,
            ParseErrorKind::CountTooLarge {
                count: 99,
                max: MAX_PREVIOUS_TRICKS
            }
        );
    }

    /// A hand of `hand_size` spades, leading, with `num_previous` tricks of hearts.
    fn snapshot_of_size(hand_size: usize, num_previous: usize) -> String {
        let ranks = "23456789TJQKA";
        let mut input = format!("0\n{}", hand_size);
        for rank in ranks.chars().cycle().take(hand_size) {
            input.push_str(&format!(" {}S", rank));
        }
        input.push_str("\n0\n2D\n0 X X X X\nX\n");
        input.push_str(&num_previous.to_string());
        for _ in 0..num_previous {
            input.push_str(" 1 2H 3H 4H 5H");
        }
        input.push_str("\n0 0\n");
        input
    }

    #[test]
    fn counts_at_the_limit() {
        let input = snapshot_of_size(MAX_HAND_SIZE, MAX_PREVIOUS_TRICKS);
        let snapshot = parse_snapshot(&input).unwrap();
        assert_eq!(snapshot.hand.len(), 13);
        assert_eq!(snapshot.previous_tricks.len(), 13);
        assert_eq!(snapshot.to_string(), input);
    }

    #[test]
    fn counts_one_over_the_limit() {
        // The 14th spade would repeat the deuce, but the count is checked first
        let err = parse_snapshot(&snapshot_of_size(MAX_HAND_SIZE + 1, 0)).unwrap_err();
        assert_eq!(err.field, InputField::HandSize);
        assert_eq!(err.kind, ParseErrorKind::CountTooLarge { count: 14, max: 13 });

        let err = parse_snapshot(&snapshot_of_size(1, MAX_PREVIOUS_TRICKS + 1)).unwrap_err();
        assert_eq!(err.field, InputField::PreviousTrickCount);
        assert_eq!(err.kind, ParseErrorKind::CountTooLarge { count: 14, max: 13 });
    }

    #[test]
    fn invalid_utf8_is_located() {
        let err = parse_snapshot_bytes(b"0\n2 7S \xffC\n1\n2D\n0 X X X X\nX\n0\n0 0\n").unwrap_err();
        assert_eq!(err.field, InputField::HandCard { card_idx: 1 });
        assert_eq!(err.kind, ParseErrorKind::InvalidUtf8 { offset: 7 });

        let err = parse_snapshot_bytes(b"0 1 7S 0 2D 0 X X X X X 0 0 0 \xfe").unwrap_err();
        assert_eq!(err.field, InputField::EndOfInput);

        // An earlier problem is reported instead
        let err = parse_snapshot_bytes(b"5 \xff").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::SeatOutOfRange { seat: 5 });

        assert_eq!(
            parse_snapshot_bytes(SAMPLE.as_bytes()),
            parse_snapshot(SAMPLE)
        );
    }

    #[test]
    fn rejects_bad_seats() {
        let err = parse_snapshot("4 1 7S").unwrap_err();
        assert_eq!(err.field, InputField::CurrentPlayer);
        assert_eq!(err.kind, ParseErrorKind::SeatOutOfRange { seat: 4 });

        let err = parse_snapshot("0 1 7S 0 2D 300").unwrap_err();
        assert_eq!(err.field, InputField::TrickLeader);
        assert_eq!(err.kind, ParseErrorKind::SeatOutOfRange { seat: 300 });
    }

    #[test]
    fn rejects_bad_cards() {
        let err = parse_snapshot("0 2 7S 1S").unwrap_err();
        assert_eq!(err.field, InputField::HandCard { card_idx: 1 });
        assert_eq!(err.kind, ParseErrorKind::InvalidRank { found: '1' });

        let err = parse_snapshot("0 1 7Z").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidSuit { found: 'Z' });

        // X is only allowed in the current trick
        let err = parse_snapshot("0 1 X").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidRank { found: 'X' });

        let err = parse_snapshot("0 1 7S 0 2D 0 X X X X X 1 0 KC AC X QC").unwrap_err();
        assert_eq!(
            err.field,
            InputField::PreviousTrickCard {
                trick_idx: 0,
                seat: seat(2)
            }
        );
        assert_eq!(err.kind, ParseErrorKind::InvalidRank { found: 'X' });
    }

    #[test]
    fn rejects_duplicate_cards_in_hand() {
        let err = parse_snapshot("0 3 7S AC 7S").unwrap_err();
        assert_eq!(err.field, InputField::HandCard { card_idx: 2 });
        assert_eq!(err.kind, ParseErrorKind::DuplicateCard { card: card!("7S") });
    }

    #[test]
    fn rejects_inconsistent_trick_suit() {
        let err = parse_snapshot("0 1 7S 0 2D 1 X AC X X S 0 0 0").unwrap_err();
        assert_eq!(err.field, InputField::TrickSuit);
        assert_eq!(
            err.kind,
            ParseErrorKind::SuitMismatch {
                declared: Some(Suit::Spade),
                leader_card: Some(card!("AC"))
            }
        );

        let err = parse_snapshot("0 1 7S 0 2D 1 X X X X C 0 0 0").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::SuitMismatch {
                declared: Some(Suit::Club),
                leader_card: None
            }
        );
    }

    #[test]
    fn rejects_trailing_input() {
        let err = parse_snapshot("0 1 7S 0 2D 0 X X X X X 0 0 0 7").unwrap_err();
        assert_eq!(err.field, InputField::EndOfInput);
        assert_eq!(
            err.kind,
            ParseErrorKind::TrailingInput {
                token: String::from("7")
            }
        );
    }

    #[test]
    fn error_message_names_the_field() {
        let err = parse_snapshot("0 2 7S").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Input ended unexpectedly while reading card #2 in hand"
        );
    }
}
