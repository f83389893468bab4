use serde::{Deserialize, Serialize};
use std::fmt;

use super::cards::{Card, Suit};

/// Cards of one suit from a hand, highest rank first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuitGroup {
    pub suit: Suit,
    pub cards: Vec<Card>,
}

impl fmt::Display for SuitGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suit)?;
        for card in &self.cards {
            write!(f, " {}", card.rank)?;
        }
        Ok(())
    }
}

/// Orders a hand by suit precedence (♠ ♥ ♣ ♦), then rank from ace down.
pub fn sort_hand(cards: &[Card]) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort();
    sorted
}

/// Groups a hand by suit for display. Suits absent from the hand get no group.
pub fn group_by_suit(cards: &[Card]) -> Vec<SuitGroup> {
    let mut groups: Vec<SuitGroup> = Vec::new();
    for card in sort_hand(cards) {
        match groups.last_mut() {
            Some(group) if group.suit == card.suit => group.cards.push(card),
            _ => groups.push(SuitGroup {
                suit: card.suit,
                cards: vec![card],
            }),
        }
    }
    groups
}
