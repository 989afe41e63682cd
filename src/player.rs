//! Players and the cards they put on the table.

use alloc::string::String;

use crate::card::Card;
use crate::hand::Hand;

/// A participant in a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Display name supplied at match start.
    pub name: String,
    /// Stable seat index, used to correlate plays back to players.
    pub index: usize,
    /// The player's cards.
    pub hand: Hand,
    /// Number of turns this player has won.
    pub games_won: usize,
}

impl Player {
    /// Creates a new player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index,
            hand: Hand::new(),
            games_won: 0,
        }
    }

    /// Creates a player holding the given hand.
    #[must_use]
    pub fn with_hand(name: impl Into<String>, index: usize, hand: Hand) -> Self {
        Self {
            hand,
            ..Self::new(name, index)
        }
    }
}

/// One play attempt within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedCard {
    /// Index of the player who was asked to play.
    pub player_index: usize,
    /// The card played, or `None` if the player had run out of cards.
    pub card: Option<Card>,
    /// War nesting level: 0 for the opening play, 1 for the first war, and so on.
    pub depth: usize,
}
