//! Card types and the identifier codec.
//!
//! A card is identified by an integer in `0..52`. The suit is `id / 13` and
//! the face value is `id % 13 + 2`, so `0` is the Two of Hearts and `51` is
//! the Ace of Spades.

use core::fmt;
use core::str::FromStr;

use crate::error::{CardError, CardParseError};

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of cards in each suit.
pub const SUIT_SIZE: u8 = 13;

/// Card suit, in identifier order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Hearts (identifiers 0-12).
    Hearts,
    /// Diamonds (identifiers 13-25).
    Diamonds,
    /// Clubs (identifiers 26-38).
    Clubs,
    /// Spades (identifiers 39-51).
    Spades,
}

impl Suit {
    /// All suits in identifier order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Position of the suit in [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The suit's display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        Self::ALL
            .into_iter()
            .find(|suit| suit.name().eq_ignore_ascii_case(t))
            .ok_or(CardParseError::Suit)
    }
}

/// A playing card, stored as its identifier in `0..52`.
///
/// ```
/// use tricard::{Card, Suit};
///
/// let card = Card::new(12).unwrap();
/// assert_eq!(card.suit(), Suit::Hearts);
/// assert_eq!(card.to_string(), "Ace of Hearts");
/// assert_eq!(card.game_value(), 11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card(u8);

impl Card {
    /// Creates a card from its identifier, or `None` if `id >= 52`.
    #[must_use]
    pub const fn new(id: u8) -> Option<Self> {
        if (id as usize) < DECK_SIZE {
            Some(Self(id))
        } else {
            None
        }
    }

    /// Creates a card from a suit and a face value in `2..=14`.
    #[must_use]
    pub const fn from_parts(suit: Suit, face_value: u8) -> Option<Self> {
        if face_value < 2 || face_value > 14 {
            return None;
        }
        Some(Self(suit as u8 * SUIT_SIZE + face_value - 2))
    }

    /// The card identifier.
    #[must_use]
    pub const fn id(self) -> u8 {
        self.0
    }

    /// The card's suit.
    #[must_use]
    pub const fn suit(self) -> Suit {
        Suit::ALL[(self.0 / SUIT_SIZE) as usize]
    }

    /// The face value, 2 through 14 (Jack = 11, Queen = 12, King = 13, Ace = 14).
    #[must_use]
    pub const fn face_value(self) -> u8 {
        self.0 % SUIT_SIZE + 2
    }

    /// The rank as displayed: a numeral for 2-10, otherwise the face name.
    #[must_use]
    pub const fn rank_name(self) -> &'static str {
        match self.face_value() {
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "Jack",
            12 => "Queen",
            13 => "King",
            _ => "Ace",
        }
    }

    /// Scoring weight: Ace is 11, Jack/Queen/King are 10, numerals are their face value.
    #[must_use]
    pub const fn game_value(self) -> u8 {
        match self.face_value() {
            14 => 11,
            11..=13 => 10,
            v => v,
        }
    }

    /// Every card in identifier order.
    pub fn full_deck() -> impl Iterator<Item = Self> {
        (0..DECK_SIZE as u8).map(Self)
    }
}

impl TryFrom<u8> for Card {
    type Error = CardError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::new(id).ok_or(CardError::OutOfRange(id))
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank_name(), self.suit())
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Parses the display form, e.g. `"10 of Clubs"` or `"queen of hearts"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut words = t.split_whitespace();
        let (Some(rank), Some(of), Some(suit), None) =
            (words.next(), words.next(), words.next(), words.next())
        else {
            return Err(CardParseError::Format);
        };
        if !of.eq_ignore_ascii_case("of") {
            return Err(CardParseError::Format);
        }

        let face_value = match rank.to_ascii_lowercase().as_str() {
            "jack" => 11,
            "queen" => 12,
            "king" => 13,
            "ace" => 14,
            numeral => numeral
                .parse::<u8>()
                .ok()
                .filter(|v| (2..=10).contains(v))
                .ok_or(CardParseError::Rank)?,
        };
        let suit = suit.parse::<Suit>()?;

        Self::from_parts(suit, face_value).ok_or(CardParseError::Rank)
    }
}

/// Returns the suit of `card`.
#[must_use]
pub const fn suit_of(card: Card) -> Suit {
    card.suit()
}

/// Returns the display name of `card`, e.g. `"King of Spades"`.
#[must_use]
pub fn display_name(card: Card) -> alloc::string::String {
    alloc::format!("{card}")
}

/// Returns the scoring weight of `card`.
#[must_use]
pub const fn game_value(card: Card) -> u8 {
    card.game_value()
}
