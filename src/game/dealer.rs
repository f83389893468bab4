use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::ops::Range;
use strum_macros::EnumIter;

use super::cards::Card;
use super::deck::{Deck, DECK_SIZE};

/// Compass position of a seat on the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    North,
    East,
    South,
    West,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Position::North => "north",
                Position::East => "east",
                Position::South => "south",
                Position::West => "west",
            }
        )
    }
}

/// Fixed seat: id, display name, position and the slice of the shuffled deck it receives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    pub id: u8,
    pub name: &'static str,
    pub position: Position,
    pub range: Range<usize>,
}

/// Number of cards in each of the three real hands
pub const HAND_SIZE: usize = 10;
/// Number of cards set aside as the widow
pub const WIDOW_SIZE: usize = 2;

/// The four seats in dealing order. The west seat holds the widow.
pub fn seats() -> [Seat; 4] {
    [
        Seat {
            id: 1,
            name: "Трус",
            position: Position::North,
            range: 0..HAND_SIZE,
        },
        Seat {
            id: 2,
            name: "Балбес",
            position: Position::East,
            range: HAND_SIZE..2 * HAND_SIZE,
        },
        Seat {
            id: 3,
            name: "Бывалый",
            position: Position::South,
            range: 2 * HAND_SIZE..3 * HAND_SIZE,
        },
        Seat {
            id: 4,
            name: "Прикуп",
            position: Position::West,
            range: 3 * HAND_SIZE..3 * HAND_SIZE + WIDOW_SIZE,
        },
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: u8,
    pub name: String,
    pub position: Position,
    pub cards: Vec<Card>,
}

impl Player {
    pub fn is_widow(&self) -> bool {
        self.position == Position::West
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DealError {
    #[error("Deck must hold {expected} cards, got {actual}")]
    DeckSize { expected: usize, actual: usize },
    #[error("Expected {expected} seats, found {actual}")]
    SeatCount { expected: usize, actual: usize },
    #[error("Seat {index} should be {expected_id} at {expected}, found {actual_id} at {actual}")]
    SeatOrder {
        index: usize,
        expected_id: u8,
        expected: Position,
        actual_id: u8,
        actual: Position,
    },
    #[error("Seat at {position} should hold {expected} cards, holds {actual}")]
    HandSize {
        position: Position,
        expected: usize,
        actual: usize,
    },
    #[error("Card {0} is dealt more than once")]
    DuplicateCard(String),
}

/// Splits a shuffled deck into the four fixed seats by contiguous index ranges.
pub fn deal(deck: Deck) -> Result<[Player; 4], DealError> {
    if deck.len() != DECK_SIZE {
        return Err(DealError::DeckSize {
            expected: DECK_SIZE,
            actual: deck.len(),
        });
    }

    let cards = deck.into_cards();
    Ok(seats().map(|seat| Player {
        id: seat.id,
        name: seat.name.to_string(),
        position: seat.position,
        cards: cards[seat.range].to_vec(),
    }))
}

/// Checks that `players` is a complete deal: the fixed seats in order, hand
/// sizes matching the seat ranges, and every card of the deck exactly once.
pub fn check_table(players: &[Player]) -> Result<(), DealError> {
    let seats = seats();
    if players.len() != seats.len() {
        return Err(DealError::SeatCount {
            expected: seats.len(),
            actual: players.len(),
        });
    }

    let mut seen = HashSet::with_capacity(DECK_SIZE);
    for (index, (seat, player)) in seats.iter().zip(players).enumerate() {
        if player.id != seat.id || player.position != seat.position {
            return Err(DealError::SeatOrder {
                index,
                expected_id: seat.id,
                expected: seat.position,
                actual_id: player.id,
                actual: player.position,
            });
        }
        if player.cards.len() != seat.range.len() {
            return Err(DealError::HandSize {
                position: seat.position,
                expected: seat.range.len(),
                actual: player.cards.len(),
            });
        }
        for card in &player.cards {
            if !seen.insert(card) {
                return Err(DealError::DuplicateCard(card.to_string()));
            }
        }
    }

    // 32 distinct cards drawn from 32 possible ones is the whole deck
    Ok(())
}
