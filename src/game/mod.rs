//! Match controller and state management.

use core::sync::atomic::{AtomicUsize, Ordering};

use alloc::string::String;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::sync::Mutex;

use crate::options::GameOptions;
use crate::player::Player;
use crate::result::PlayerSummary;

mod setup;
pub mod state;
mod turn;

pub use state::GameState;

/// A War match between a fixed set of players.
///
/// The match owns every player's hand and the random source used for the
/// initial shuffle and for recycling won cards. Drive it by calling
/// [`Game::start`] once and then [`Game::progress_turn`] until
/// [`Game::has_ended`] returns `true`.
pub struct Game {
    /// Match options.
    pub options: GameOptions,
    /// Current match state.
    pub state: Mutex<GameState>,
    /// All seated players, ordered by index. Eliminated players stay here.
    pub players: Mutex<Vec<Player>>,
    /// Indices of players still holding cards.
    pub active: Mutex<Vec<usize>>,
    /// Informational turn pointer into the active roster.
    current_player: Mutex<usize>,
    /// Index of the overall winner once the match has ended.
    winner: Mutex<Option<usize>>,
    /// Number of turns played.
    turns: AtomicUsize,
    /// Cards in play across all hands, fixed once dealt.
    expected_cards: AtomicUsize,
    /// Random number generator.
    rng: Mutex<ChaCha20Rng>,
}

impl Game {
    /// Creates a new match with the given seed.
    ///
    /// The same seed and names always replay the same match.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::NotStarted);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha20Rng::seed_from_u64(seed))
    }

    /// Creates a new match seeded from the operating system's entropy source.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_os_rng(options: GameOptions) -> Self {
        Self::with_rng(options, ChaCha20Rng::from_os_rng())
    }

    fn with_rng(options: GameOptions, rng: ChaCha20Rng) -> Self {
        Self {
            options,
            state: Mutex::new(GameState::NotStarted),
            players: Mutex::new(Vec::new()),
            active: Mutex::new(Vec::new()),
            current_player: Mutex::new(0),
            winner: Mutex::new(None),
            turns: AtomicUsize::new(0),
            expected_cards: AtomicUsize::new(0),
            rng: Mutex::new(rng),
        }
    }

    /// Returns the current match state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns whether the match has ended.
    pub fn has_ended(&self) -> bool {
        self.state() == GameState::Ended
    }

    /// Returns the turn pointer into the active roster.
    ///
    /// The pointer advances after every turn but does not decide who plays:
    /// every active player plays each turn.
    pub fn current_player(&self) -> usize {
        *self.current_player.lock()
    }

    /// Returns the number of turns played so far.
    pub fn turns(&self) -> usize {
        self.turns.load(Ordering::SeqCst)
    }

    /// Returns the indices of players still in the match.
    pub fn active_players(&self) -> Vec<usize> {
        self.active.lock().clone()
    }

    /// Returns the number of seated players, eliminated ones included.
    pub fn player_count(&self) -> usize {
        self.players.lock().len()
    }

    /// Returns the name of the player at `index`.
    pub fn player_name(&self, index: usize) -> Option<String> {
        self.players
            .lock()
            .get(index)
            .map(|player| player.name.clone())
    }

    /// Returns a summary of the player at `index`.
    pub fn player(&self, index: usize) -> Option<PlayerSummary> {
        self.players.lock().get(index).map(summarize)
    }

    /// Returns a summary of every seated player.
    pub fn standings(&self) -> Vec<PlayerSummary> {
        self.players.lock().iter().map(summarize).collect()
    }

    /// Returns the overall winner once the match has ended.
    pub fn winner(&self) -> Option<PlayerSummary> {
        let winner = (*self.winner.lock())?;
        self.player(winner)
    }

    /// Returns the number of cards held across all hands.
    pub fn total_cards(&self) -> usize {
        self.players
            .lock()
            .iter()
            .map(|player| player.hand.len())
            .sum()
    }
}

fn summarize(player: &Player) -> PlayerSummary {
    PlayerSummary {
        index: player.index,
        name: player.name.clone(),
        games_won: player.games_won,
        cards: player.hand.len(),
    }
}
