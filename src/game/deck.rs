use rand::Rng;
use strum::IntoEnumIterator;

use super::cards::{Card, CardImages, Rank, Suit};

pub const DECK_SIZE: usize = 32;

/// The 32-card Preferans deck. Built fresh for every deal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Canonical order: suits as declared (S, H, D, C), ranks A down to 7 within each.
    pub fn build(images: &CardImages) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::iter() {
            for rank in Rank::iter() {
                cards.push(Card::new(rank, suit, images));
            }
        }
        Self { cards }
    }

    /// Wraps an arbitrary card sequence; `dealer::deal` validates its size.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn shuffled<R: Rng + ?Sized>(images: &CardImages, rng: &mut R) -> Self {
        let mut deck = Self::build(images);
        deck.shuffle_in_place(rng);
        deck
    }

    pub fn shuffle_in_place<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        shuffle(&mut self.cards, rng);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub(crate) fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

/// Fisher–Yates: walk `i` from the end down to 1, swapping with a uniform `j` in `[0, i]`.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
