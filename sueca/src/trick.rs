use serde::{Deserialize, Serialize};

use crate::{Card, Seat, Suit};

/// The trick that is currently being played.
///
/// Slots are indexed by [`Seat`]; a slot is `None` while that seat has not
/// played yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    pub leader: Seat,
    pub cards: [Option<Card>; 4],
}

impl Trick {
    /// The suit that has to be followed, i.e. the suit of the leader's card.
    ///
    /// `None` if the leader has not played yet.
    pub fn suit(&self) -> Option<Suit> {
        self.cards[self.leader.index()].map(|card| card.suit)
    }

    pub fn card_of(&self, seat: Seat) -> Option<Card> {
        self.cards[seat.index()]
    }

    /// The cards played so far, in seat order.
    pub fn played_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().flatten().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.iter().all(Option::is_none)
    }
}

/// A trick from the history of the round. All four seats have played.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedTrick {
    pub leader: Seat,
    pub cards: [Card; 4],
}

impl CompletedTrick {
    pub fn suit(&self) -> Suit {
        self.cards[self.leader.index()].suit
    }
}
