//! Error types for play-grid mutation.

use derive_more::{Display, Error};

/// An error raised while mutating a [`PlayGrid`].
///
/// [`PlayGrid`]: crate::PlayGrid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The target cell is a given (clue) cell, which never changes during
    /// play.
    #[display("cannot modify a given cell")]
    CannotModifyGivenCell,
    /// The entered value lies outside `1..=size`.
    #[display("value {value} is out of range 1..={max}")]
    ValueOutOfRange {
        /// The rejected value.
        value: u8,
        /// The largest allowed value.
        max: u8,
    },
}
