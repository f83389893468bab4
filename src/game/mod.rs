// Public API
pub use cards::{Card, CardError, CardImages, Rank, Suit, DEFAULT_IMAGE_BASE};
pub use dealer::{check_table, deal, seats, DealError, Player, Position, Seat, HAND_SIZE, WIDOW_SIZE};
pub use deck::{shuffle, Deck, DECK_SIZE};
pub use presenter::{group_by_suit, sort_hand, SuitGroup};

// Internal modules
pub mod cards;
mod dealer;
mod deck;
mod presenter;
