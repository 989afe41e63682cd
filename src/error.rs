//! Error types for match operations.

use thiserror::Error;

/// Errors that can occur while setting up a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// The match has already been started.
    #[error("match has already been started")]
    InvalidState,
    /// Fewer than two players.
    #[error("a match needs at least two players")]
    TooFewPlayers,
    /// More players than cards in the deck.
    #[error("more players than cards in the deck")]
    TooManyPlayers,
    /// Two players share the same index.
    #[error("player index {0} is used more than once")]
    DuplicatePlayerIndex(usize),
    /// A player index falls outside the roster.
    #[error("player index {0} is outside the roster")]
    PlayerIndexOutOfRange(usize),
}

/// Errors that can occur while progressing a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The match is not in progress.
    #[error("match is not in progress")]
    InvalidState,
}
