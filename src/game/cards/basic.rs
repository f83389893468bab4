use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// Image host used when no base URL is configured
pub const DEFAULT_IMAGE_BASE: &str = "https://www.deckofcardsapi.com/static/img";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    #[error("Unknown suit symbol: {0}")]
    UnknownSuitSymbol(String),
    #[error("Unknown suit code: {0}")]
    UnknownSuitCode(String),
    #[error("Unknown rank: {0}")]
    UnknownRank(String),
}

/// Suits in deck-building order. Serialized as the display symbol and read
/// back through [`Suit::from_symbol`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(try_from = "String", into = "String")]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// Single-letter code used in card image names
    pub fn code(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    /// Position of the suit when a hand is laid out: spades, hearts, clubs, diamonds.
    pub fn display_precedence(self) -> u8 {
        match self {
            Suit::Spades => 0,
            Suit::Hearts => 1,
            Suit::Clubs => 2,
            Suit::Diamonds => 3,
        }
    }

    pub fn from_symbol(s: &str) -> Result<Self, CardError> {
        Suit::iter()
            .find(|suit| s.chars().eq(std::iter::once(suit.symbol())))
            .ok_or_else(|| CardError::UnknownSuitSymbol(s.to_string()))
    }

    pub fn from_code(s: &str) -> Result<Self, CardError> {
        match s {
            "S" => Ok(Suit::Spades),
            "H" => Ok(Suit::Hearts),
            "D" => Ok(Suit::Diamonds),
            "C" => Ok(Suit::Clubs),
            _ => Err(CardError::UnknownSuitCode(s.to_string())),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<String> for Suit {
    type Error = CardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Suit::from_symbol(&s)
    }
}

impl From<Suit> for String {
    fn from(suit: Suit) -> Self {
        suit.symbol().to_string()
    }
}

/// Ranks of the 32-card deck, highest first. Serialized as the display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Rank {
    #[serde(rename = "A")]
    Ace,
    #[serde(rename = "K")]
    King,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "7")]
    Seven,
}

impl Rank {
    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::King => "K",
            Rank::Queen => "Q",
            Rank::Jack => "J",
            Rank::Ten => "10",
            Rank::Nine => "9",
            Rank::Eight => "8",
            Rank::Seven => "7",
        }
    }

    /// Single-character code used in card image names; ten is "0"
    pub fn image_code(self) -> char {
        match self {
            Rank::Ten => '0',
            other => other.label().chars().next().unwrap_or('?'),
        }
    }

    /// 0 for the ace down to 7 for the seven
    pub fn precedence(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<&str> for Rank {
    type Error = CardError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Rank::iter()
            .find(|rank| rank.label() == s)
            .ok_or_else(|| CardError::UnknownRank(s.to_string()))
    }
}

/// Builds image URLs of the form `{base}/{rankCode}{suitCode}.png`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardImages {
    base: String,
}

impl Default for CardImages {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_BASE)
    }
}

impl CardImages {
    pub fn new(base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, rank: Rank, suit: Suit) -> String {
        format!("{}/{}{}.png", self.base, rank.image_code(), suit.code())
    }
}

/// A playing card. Equality, hashing and ordering only look at rank and suit;
/// `image` is a display locator carried along for the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
    pub image: String,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit, images: &CardImages) -> Self {
        Self {
            rank,
            suit,
            image: images.url(rank, suit),
        }
    }

    /// Parses the short form "AS", "10H", "7C" (rank label then suit code)
    pub fn from_string(s: &str, images: &CardImages) -> Result<Self, CardError> {
        let split = s
            .char_indices()
            .last()
            .map(|(idx, _)| idx)
            .ok_or_else(|| CardError::UnknownRank(s.to_string()))?;
        let rank = Rank::try_from(&s[..split])?;
        let suit = Suit::from_code(&s[split..])?;
        Ok(Self::new(rank, suit, images))
    }

    fn display_key(&self) -> (u8, u8) {
        (self.suit.display_precedence(), self.rank.precedence())
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
        self.suit.hash(state);
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.display_key().cmp(&other.display_key())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_card_ordering() {
        let images = CardImages::default();
        let ace_spades = Card::new(Rank::Ace, Suit::Spades, &images);
        let seven_spades = Card::new(Rank::Seven, Suit::Spades, &images);
        let ace_clubs = Card::new(Rank::Ace, Suit::Clubs, &images);
        let ace_diamonds = Card::new(Rank::Ace, Suit::Diamonds, &images);

        assert!(ace_spades < seven_spades); // Higher rank sorts first
        assert!(seven_spades < ace_clubs); // Suit outranks rank
        assert!(ace_clubs < ace_diamonds); // Clubs before diamonds
    }

    #[test]
    fn test_card_identity_ignores_image() {
        let a = Card::new(Rank::King, Suit::Hearts, &CardImages::new("http://a"));
        let b = Card::new(Rank::King, Suit::Hearts, &CardImages::new("http://b"));
        assert_ne!(a.image, b.image);
        assert_eq!(a, b);
    }

    #[rstest]
    #[case(Rank::Ace, Suit::Spades, "https://img.test/AS.png")]
    #[case(Rank::Ten, Suit::Hearts, "https://img.test/0H.png")]
    #[case(Rank::Seven, Suit::Clubs, "https://img.test/7C.png")]
    #[case(Rank::Jack, Suit::Diamonds, "https://img.test/JD.png")]
    fn test_image_url(#[case] rank: Rank, #[case] suit: Suit, #[case] expected: &str) {
        let images = CardImages::new("https://img.test/");
        assert_eq!(images.url(rank, suit), expected);
    }

    #[rstest]
    #[case("♠", Suit::Spades)]
    #[case("♥", Suit::Hearts)]
    #[case("♦", Suit::Diamonds)]
    #[case("♣", Suit::Clubs)]
    fn test_suit_from_symbol(#[case] symbol: &str, #[case] expected: Suit) {
        assert_eq!(Suit::from_symbol(symbol), Ok(expected));
    }

    #[test]
    fn test_unknown_suit_symbol_is_an_error() {
        assert_eq!(
            Suit::from_symbol("★"),
            Err(CardError::UnknownSuitSymbol("★".to_string()))
        );
        assert!(Suit::from_symbol("").is_err());
        assert!(Suit::from_code("X").is_err());
    }

    #[test]
    fn test_suit_codes_are_bijective() {
        for suit in Suit::iter() {
            assert_eq!(Suit::from_code(&suit.code().to_string()), Ok(suit));
            assert_eq!(Suit::from_symbol(&suit.symbol().to_string()), Ok(suit));
        }
    }

    #[test]
    fn test_rank_try_from() {
        assert_eq!(Rank::try_from("A"), Ok(Rank::Ace));
        assert_eq!(Rank::try_from("10"), Ok(Rank::Ten));
        assert_eq!(Rank::try_from("7"), Ok(Rank::Seven));

        assert!(Rank::try_from("0").is_err());
        assert!(Rank::try_from("6").is_err());
        assert!(Rank::try_from("T").is_err());
        assert!(Rank::try_from("").is_err());
    }

    #[test]
    fn test_rank_codes() {
        let codes: String = Rank::iter().map(Rank::image_code).collect();
        assert_eq!(codes, "AKQJ0987");
        let precedences: Vec<u8> = Rank::iter().map(Rank::precedence).collect();
        assert_eq!(precedences, (0..8).collect::<Vec<u8>>());
    }

    #[test]
    fn test_card_from_string() {
        let images = CardImages::default();
        let ten_hearts = Card::from_string("10H", &images).unwrap();
        assert_eq!(ten_hearts.rank, Rank::Ten);
        assert_eq!(ten_hearts.suit, Suit::Hearts);
        assert!(ten_hearts.image.ends_with("/0H.png"));

        assert!(Card::from_string("", &images).is_err());
        assert!(Card::from_string("ZH", &images).is_err());
        assert!(Card::from_string("KX", &images).is_err());
        assert!(Card::from_string("2S", &images).is_err());
    }

    #[test]
    fn test_card_display() {
        let images = CardImages::default();
        assert_eq!(Card::new(Rank::Ten, Suit::Spades, &images).to_string(), "10♠");
        assert_eq!(Card::new(Rank::Queen, Suit::Diamonds, &images).to_string(), "Q♦");
    }

    #[test]
    fn test_card_serializes_like_stored_blob() {
        let card = Card::new(Rank::Ten, Suit::Clubs, &CardImages::new("https://img.test"));
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"rank": "10", "suit": "♣", "image": "https://img.test/0C.png"})
        );
    }

    #[rstest]
    #[case("?")]
    #[case("S")]
    #[case("Spades")]
    fn test_unknown_suit_symbol_fails_to_deserialize(#[case] suit: &str) {
        let raw = serde_json::json!({"rank": "A", "suit": suit, "image": "x"}).to_string();
        let err = serde_json::from_str::<Card>(&raw).unwrap_err();
        assert!(
            err.to_string()
                .contains(&format!("Unknown suit symbol: {suit}")),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_suit_reads_back_its_symbol() {
        for suit in Suit::iter() {
            let json = serde_json::to_string(&suit).unwrap();
            assert_eq!(json, format!("\"{}\"", suit.symbol()));
            assert_eq!(serde_json::from_str::<Suit>(&json).unwrap(), suit);
        }
    }
}
