//! Card types and deck utilities.

use alloc::vec::Vec;
use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Clubs, Self::Diamonds, Self::Hearts];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Spades => "Spades",
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
        };
        f.write_str(name)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (2-10, 11 = Jack, 12 = Queen, 13 = King, 14 = Ace).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside
    /// [`LOWEST_RANK`]..=[`HIGHEST_RANK`] still compare by their numeric value.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the face name for court cards and aces, `None` for pip cards.
    #[must_use]
    pub const fn face_name(&self) -> Option<&'static str> {
        match self.rank {
            11 => Some("Jack"),
            12 => Some("Queen"),
            13 => Some("King"),
            14 => Some("Ace"),
            _ => None,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.face_name() {
            Some(name) => write!(f, "{name} of {}", self.suit),
            None => write!(f, "{} of {}", self.rank, self.suit),
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Lowest rank in a deck (the two).
pub const LOWEST_RANK: u8 = 2;

/// Highest rank in a deck (the ace).
pub const HIGHEST_RANK: u8 = 14;

/// Builds the canonical unshuffled deck: every suit paired with every rank
/// from two through ace, exactly once.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in LOWEST_RANK..=HIGHEST_RANK {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}
