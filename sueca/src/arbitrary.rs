use quickcheck::{Arbitrary, Gen};

use crate::{Card, CompletedTrick, Rank, Seat, Snapshot, Suit, Trick};

/// Takes a random card out of `deck`, so that no card is dealt twice.
fn draw(g: &mut Gen, deck: &mut Vec<Card>) -> Card {
    let idx = usize::arbitrary(g) % deck.len();
    deck.swap_remove(idx)
}

impl Arbitrary for Snapshot {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut deck: Vec<Card> = Card::deck().collect();

        let hand_size = usize::arbitrary(g) % 11;
        let hand = (0..hand_size).map(|_| draw(g, &mut deck)).collect();

        // The current trick is played in seat order, starting at the leader
        let leader = Seat::arbitrary(g);
        let num_played = usize::arbitrary(g) % 4;
        let mut cards = [None; 4];
        let mut seat = leader;
        for _ in 0..num_played {
            cards[seat.index()] = Some(draw(g, &mut deck));
            seat = seat.next();
        }

        let num_previous = usize::arbitrary(g) % 4;
        let mut previous_tricks = Vec::with_capacity(num_previous);
        for _ in 0..num_previous {
            let leader = Seat::arbitrary(g);
            let mut cards = Vec::with_capacity(4);
            for _ in 0..4 {
                cards.push(draw(g, &mut deck));
            }
            previous_tricks.push(CompletedTrick {
                leader,
                cards: [cards[0], cards[1], cards[2], cards[3]],
            });
        }

        Snapshot {
            current_player: Seat::arbitrary(g),
            hand,
            trump_player: Seat::arbitrary(g),
            trump_card: Card::arbitrary(g),
            current_trick: Trick { leader, cards },
            previous_tricks,
            points: [u32::from(u8::arbitrary(g)), u32::from(u8::arbitrary(g))],
        }
    }
}

impl Arbitrary for Seat {
    fn arbitrary(g: &mut Gen) -> Self {
        Seat::new(u8::arbitrary(g) % Seat::COUNT as u8).unwrap()
    }
}

impl Arbitrary for Suit {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Suit::ALL).unwrap()
    }
}

impl Arbitrary for Rank {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Rank::ALL).unwrap()
    }
}

impl Arbitrary for Card {
    fn arbitrary(g: &mut Gen) -> Self {
        Self {
            rank: Rank::arbitrary(g),
            suit: Suit::arbitrary(g),
        }
    }
}
