//! Match state types.

/// Match state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Created but not yet dealt.
    NotStarted,
    /// Turns are being played.
    InProgress,
    /// One player holds every card.
    Ended,
}
