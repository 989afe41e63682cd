use core::sync::atomic::Ordering;

use alloc::string::String;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::{DECK_SIZE, standard_deck};
use crate::error::SetupError;
use crate::names::NameSource;
use crate::options::GameOptions;
use crate::player::Player;
use crate::shuffle::shuffle;

use super::{Game, GameState};

const fn check_player_count(count: usize) -> Result<(), SetupError> {
    if count < 2 {
        return Err(SetupError::TooFewPlayers);
    }
    if count > DECK_SIZE {
        return Err(SetupError::TooManyPlayers);
    }
    Ok(())
}

impl Game {
    /// Starts the match.
    ///
    /// Builds and shuffles a fresh deck, seats the configured number of
    /// players (asking `names` for each name in seat order), and deals the
    /// deck one card at a time around the table into each player's pending
    /// cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the match has already started or the configured
    /// player count is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 7);
    /// game.start(&mut ["Ada", "Grace"][..]).unwrap();
    /// assert_eq!(game.state(), GameState::InProgress);
    /// assert_eq!(game.total_cards(), 52);
    /// ```
    pub fn start<N: NameSource + ?Sized>(&self, names: &mut N) -> Result<(), SetupError> {
        if self.state() != GameState::NotStarted {
            return Err(SetupError::InvalidState);
        }

        let count = self.options.players;
        check_player_count(count)?;

        // No engine lock is held while the name source runs; it may query the match.
        let seat_names: Vec<String> = (0..count).map(|index| names.player_name(index)).collect();

        let mut deck = standard_deck();
        shuffle(&mut deck, &mut *self.rng.lock());

        let mut players: Vec<Player> = seat_names
            .into_iter()
            .enumerate()
            .map(|(index, name)| Player::new(name, index))
            .collect();

        for (position, card) in deck.into_iter().enumerate() {
            players[position % count].hand.receive_card(card);
        }

        let mut state = self.state.lock();
        if *state != GameState::NotStarted {
            return Err(SetupError::InvalidState);
        }

        log::debug!("dealt {DECK_SIZE} cards to {count} players");

        *self.players.lock() = players;
        *self.active.lock() = (0..count).collect();
        *self.current_player.lock() = 0;
        self.expected_cards.store(DECK_SIZE, Ordering::SeqCst);
        *state = GameState::InProgress;

        Ok(())
    }

    /// Creates a match already in progress from a prepared roster.
    ///
    /// Useful for replaying a known position. Player indices must cover
    /// `0..players.len()` exactly once; the hands are used as given.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster has fewer than two players, more
    /// players than cards in a deck, or an index that is repeated or outside
    /// the roster.
    pub fn with_players(
        options: GameOptions,
        seed: u64,
        mut players: Vec<Player>,
    ) -> Result<Self, SetupError> {
        let count = players.len();
        check_player_count(count)?;

        let mut seen = HashSet::with_capacity(count);
        for player in &players {
            if player.index >= count {
                return Err(SetupError::PlayerIndexOutOfRange(player.index));
            }
            if !seen.insert(player.index) {
                return Err(SetupError::DuplicatePlayerIndex(player.index));
            }
        }
        players.sort_by_key(|player| player.index);

        let cards = players.iter().map(|player| player.hand.len()).sum();
        let game = Self::new(options.with_players(count), seed);

        *game.players.lock() = players;
        *game.active.lock() = (0..count).collect();
        game.expected_cards.store(cards, Ordering::SeqCst);
        *game.state.lock() = GameState::InProgress;

        Ok(game)
    }
}
