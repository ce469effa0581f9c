//! Hands and hand totals.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;

/// Highest total that does not bust.
pub const LIMIT: u32 = 21;

/// Total of `cards`.
///
/// Aces count 11 and drop to 1, one at a time, only while the total is
/// over the limit.
#[must_use]
pub fn hand_total(cards: &[Card]) -> u32 {
    let mut total: u32 = cards.iter().map(|card| card.rank.value()).sum();
    let mut aces = cards.iter().filter(|card| card.rank.is_ace()).count();

    while total > LIMIT && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    total
}

#[must_use]
pub const fn is_bust(total: u32) -> bool {
    total > LIMIT
}

/// Cards held by one side, in the order dealt.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; 8]>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        hand_total(&self.cards)
    }

    #[must_use]
    pub fn is_bust(&self) -> bool {
        is_bust(self.total())
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
