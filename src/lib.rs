//! A War card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs a match to completion: it
//! deals a shuffled deck, resolves each turn (including wars between tied
//! players), routes won cards to the winner, and eliminates players who run
//! out of cards. The engine never prints; every turn returns a
//! [`TurnResult`] that a front end can narrate.
//!
//! # Example
//!
//! ```
//! use warrs::{Game, GameOptions};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.start(&mut ["Ada", "Grace"][..]).unwrap();
//! while !game.has_ended() {
//!     game.progress_turn().unwrap();
//! }
//! assert_eq!(game.winner().unwrap().cards, 52);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod names;
pub mod options;
pub mod player;
pub mod result;
pub mod round;
pub mod shuffle;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, HIGHEST_RANK, LOWEST_RANK, Suit, standard_deck};
pub use error::{SetupError, TurnError};
pub use game::{Game, GameState};
pub use hand::Hand;
pub use names::NameSource;
pub use options::GameOptions;
pub use player::{PlayedCard, Player};
pub use result::{PlayerSummary, TurnResult};
pub use round::{RoundOutcome, resolve_round};
