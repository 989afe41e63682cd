//! Round resolution, including wars between tied players.

use alloc::vec::Vec;

use rand::RngCore;

use crate::card::Card;
use crate::player::{PlayedCard, Player};

/// Result of resolving one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Every play made during the round, wars included, in play order.
    pub played: Vec<PlayedCard>,
    /// Index of the player who takes the cards, `None` if nobody could play.
    pub winner: Option<usize>,
    /// Number of wars fought to settle the round.
    pub wars: usize,
}

impl RoundOutcome {
    /// Returns the cards actually put on the table, skipping empty plays.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.played.iter().filter_map(|played| played.card)
    }
}

/// Resolves a round between the players whose indices are in `participants`.
///
/// Each participant plays the top card of their hand. The highest rank wins;
/// when several players share the highest rank they go to war, which is
/// another round among just those players. The eventual winner of the
/// deepest war takes every card played at every level.
///
/// # Panics
///
/// Panics if a participant index does not match any player in `players`.
pub fn resolve_round<R: RngCore + ?Sized>(
    players: &mut [Player],
    participants: &[usize],
    rng: &mut R,
) -> RoundOutcome {
    let mut outcome = RoundOutcome {
        played: Vec::new(),
        winner: None,
        wars: 0,
    };
    resolve_at_depth(players, participants, rng, 0, &mut outcome);
    outcome
}

fn resolve_at_depth<R: RngCore + ?Sized>(
    players: &mut [Player],
    participants: &[usize],
    rng: &mut R,
    depth: usize,
    outcome: &mut RoundOutcome,
) {
    let start = outcome.played.len();

    for &index in participants {
        let Some(player) = players.iter_mut().find(|player| player.index == index) else {
            panic!("player index {index} is not in the roster");
        };
        outcome.played.push(PlayedCard {
            player_index: index,
            card: player.hand.play_card(rng),
            depth,
        });
    }

    let mut best: Option<Card> = None;
    let mut tied: Vec<usize> = Vec::new();

    for played in &outcome.played[start..] {
        let Some(card) = played.card else {
            continue;
        };

        match best {
            Some(high) if card.rank < high.rank => {}
            Some(high) if card.rank == high.rank => tied.push(played.player_index),
            _ => {
                best = Some(card);
                tied.clear();
                tied.push(played.player_index);
                outcome.winner = Some(played.player_index);
            }
        }
    }

    if tied.len() > 1 {
        log::trace!("war at depth {} between players {:?}", depth + 1, tied);
        outcome.wars += 1;
        resolve_at_depth(players, &tied, rng, depth + 1, outcome);
    }
}
