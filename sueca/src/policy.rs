use rand::seq::SliceRandom;
use rand::Rng;

use crate::{Card, PlayError, Snapshot};

/// The cards in hand that may be played now, in hand order.
///
/// The leader may play anything. Everyone else has to follow the suit of the
/// trick, unless they have no card of that suit, in which case any card may
/// be played. Trumps get no special treatment.
pub fn legal_moves(snapshot: &Snapshot) -> Vec<Card> {
    if snapshot.is_leading() {
        return snapshot.hand.clone();
    }
    let following: Vec<Card> = match snapshot.current_trick.suit() {
        Some(suit) => snapshot
            .hand
            .iter()
            .copied()
            .filter(|card| card.suit == suit)
            .collect(),
        None => Vec::new(),
    };
    if following.is_empty() {
        snapshot.hand.clone()
    } else {
        following
    }
}

/// Picks one of the candidates uniformly at random.
pub fn choose_random<R: Rng + ?Sized>(candidates: &[Card], rng: &mut R) -> Result<Card, PlayError> {
    candidates
        .choose(rng)
        .copied()
        .ok_or(PlayError::NoLegalMoves)
}
