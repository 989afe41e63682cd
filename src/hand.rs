//! Per-player card storage.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::RngCore;

use crate::card::Card;
use crate::shuffle::shuffle;

/// A player's hand.
///
/// Cards live in one of two segments. The active segment is the draw queue
/// the player plays from, in a fixed order. The pending segment collects
/// dealt and won cards; it only becomes playable once the active queue runs
/// dry, at which point it is shuffled and moved over wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards ready to be played, front first.
    active: VecDeque<Card>,
    /// Cards received but not yet playable.
    pending: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: VecDeque::new(),
            pending: Vec::new(),
        }
    }

    /// Creates a hand whose active queue plays `cards` in the given order.
    #[must_use]
    pub fn from_active<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        Self {
            active: cards.into_iter().collect(),
            pending: Vec::new(),
        }
    }

    /// Adds a card to the pending segment.
    pub fn receive_card(&mut self, card: Card) {
        self.pending.push(card);
    }

    /// Plays the card at the front of the active queue.
    ///
    /// When the active queue is empty the pending cards are shuffled and
    /// become the new active queue first. Returns `None` if the hand holds no
    /// cards at all.
    pub fn play_card<R: RngCore + ?Sized>(&mut self, rng: &mut R) -> Option<Card> {
        if self.active.is_empty() {
            self.recycle(rng);
        }

        self.active.pop_front()
    }

    fn recycle<R: RngCore + ?Sized>(&mut self, rng: &mut R) {
        shuffle(&mut self.pending, rng);
        self.active.extend(self.pending.drain(..));
    }

    /// Returns whether the hand holds any card in either segment.
    #[must_use]
    pub fn has_cards(&self) -> bool {
        !self.active.is_empty() || !self.pending.is_empty()
    }

    /// Returns the total number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len() + self.pending.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.has_cards()
    }

    /// Returns the number of cards in the active queue.
    #[must_use]
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    /// Returns the number of cards awaiting recycling.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Returns the active queue in play order.
    pub fn active(&self) -> impl Iterator<Item = &Card> {
        self.active.iter()
    }

    /// Returns the pending cards.
    #[must_use]
    pub fn pending(&self) -> &[Card] {
        &self.pending
    }
}
