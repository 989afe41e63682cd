//! Turn result types.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::player::PlayedCard;

/// Outcome of a single turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnResult {
    /// One-based turn number.
    pub turn: usize,
    /// Every play made this turn, wars included, in play order.
    pub played: Vec<PlayedCard>,
    /// Number of wars fought this turn.
    pub wars: usize,
    /// The player who took the cards.
    pub winner: Option<usize>,
    /// Players eliminated at the end of this turn.
    pub eliminated: Vec<usize>,
    /// Set when this turn ended the match.
    pub match_winner: Option<usize>,
}

impl TurnResult {
    /// Returns the number of cards won this turn.
    #[must_use]
    pub fn cards_won(&self) -> usize {
        self.played.iter().filter(|played| played.card.is_some()).count()
    }
}

/// Snapshot of a player's standing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSummary {
    /// The player's index.
    pub index: usize,
    /// The player's name.
    pub name: String,
    /// Number of turns won.
    pub games_won: usize,
    /// Cards currently held across both hand segments.
    pub cards: usize,
}
