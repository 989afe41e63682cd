//! Match configuration options.

/// Configuration options for a War match.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use warrs::GameOptions;
///
/// let options = GameOptions::default().with_players(2);
/// assert_eq!(options.players, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of players seated at the start of the match.
    pub players: usize,
}

/// Number of players in a standard match.
pub const DEFAULT_PLAYERS: usize = 2;

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            players: DEFAULT_PLAYERS,
        }
    }
}

impl GameOptions {
    /// Sets the number of players.
    ///
    /// The value is validated when the match starts: fewer than two players,
    /// or more players than cards in the deck, is rejected.
    #[must_use]
    pub const fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }
}
