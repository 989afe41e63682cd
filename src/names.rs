//! Player naming at match start.

use alloc::string::{String, ToString};

/// Supplies a display name for each seat when a match starts.
///
/// The engine asks once per seat, in seat order, and uses the answer as-is.
pub trait NameSource {
    /// Returns the name for the player at `index`.
    fn player_name(&mut self, index: usize) -> String;
}

/// Fixed names, one per seat. Seats past the end get a numbered default.
impl<S: AsRef<str>> NameSource for [S] {
    fn player_name(&mut self, index: usize) -> String {
        self.get(index)
            .map_or_else(|| default_name(index), |name| name.as_ref().to_string())
    }
}

/// A [`NameSource`] backed by a closure, see [`from_fn`].
#[derive(Debug, Clone)]
pub struct FromFn<F>(F);

impl<F: FnMut(usize) -> String> NameSource for FromFn<F> {
    fn player_name(&mut self, index: usize) -> String {
        (self.0)(index)
    }
}

/// Wraps a closure, such as a console prompt, as a [`NameSource`].
///
/// ```
/// use warrs::names::{NameSource, from_fn};
///
/// let mut names = from_fn(|index| format!("Seat {index}"));
/// assert_eq!(names.player_name(1), "Seat 1");
/// ```
pub const fn from_fn<F: FnMut(usize) -> String>(f: F) -> FromFn<F> {
    FromFn(f)
}

/// Returns the fallback name for a seat, e.g. `"Player 1"` for index 0.
#[must_use]
pub fn default_name(index: usize) -> String {
    alloc::format!("Player {}", index + 1)
}
