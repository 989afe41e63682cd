use core::sync::atomic::Ordering;

use alloc::vec::Vec;

use crate::error::TurnError;
use crate::result::TurnResult;
use crate::round::resolve_round;

use super::{Game, GameState};

impl Game {
    /// Plays one turn.
    ///
    /// Every active player plays a card, ties are settled by war, and the
    /// winner receives every card played into their pending cards. Players
    /// left without cards are eliminated; when a single player remains the
    /// match ends with that player as the winner.
    ///
    /// # Errors
    ///
    /// Returns an error if the match is not in progress.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if cards were created or lost during the turn.
    pub fn progress_turn(&self) -> Result<TurnResult, TurnError> {
        let mut state = self.state.lock();
        if *state != GameState::InProgress {
            return Err(TurnError::InvalidState);
        }

        let mut rng = self.rng.lock();
        let mut players = self.players.lock();
        let mut active = self.active.lock();

        let outcome = resolve_round(&mut players, &active, &mut *rng);
        drop(rng);

        if let Some(winner) = outcome.winner.and_then(|index| players.get_mut(index)) {
            for card in outcome.cards() {
                winner.hand.receive_card(card);
            }
            winner.games_won += 1;
        }

        let mut eliminated = Vec::new();
        active.retain(|&index| {
            let keep = players
                .get(index)
                .is_some_and(|player| player.hand.has_cards());
            if !keep {
                eliminated.push(index);
            }
            keep
        });
        for index in &eliminated {
            log::debug!("player {index} is out of cards");
        }

        debug_assert_eq!(
            players.iter().map(|player| player.hand.len()).sum::<usize>(),
            self.expected_cards.load(Ordering::SeqCst),
            "cards were created or lost during the turn"
        );

        let turn = self.turns.fetch_add(1, Ordering::SeqCst) + 1;

        let match_winner = match active.as_slice() {
            [last] => Some(*last),
            _ => None,
        };
        if active.len() <= 1 {
            *state = GameState::Ended;
            *self.winner.lock() = match_winner;
            log::debug!("match ended after {turn} turns, winner {match_winner:?}");
        } else {
            let mut current = self.current_player.lock();
            *current = (*current + 1) % active.len();
        }

        Ok(TurnResult {
            turn,
            played: outcome.played,
            wars: outcome.wars,
            winner: outcome.winner,
            eliminated,
            match_winner,
        })
    }
}
