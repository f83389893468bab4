pub mod basic;

pub use basic::{Card, CardError, CardImages, Rank, Suit, DEFAULT_IMAGE_BASE};
