//! Whole-board state reporting.

use std::ops::Index;

/// Per-value occupancy counts across the whole board.
///
/// Indexable by value: `used[5]` is the number of cells currently holding
/// a 5, counted regardless of validity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsedNumbers(pub(crate) Vec<usize>);

impl UsedNumbers {
    /// Returns the number of cells currently holding `value`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in `1..=size`.
    #[must_use]
    pub fn count(&self, value: u8) -> usize {
        assert!(
            (1..self.0.len()).contains(&usize::from(value)),
            "value {value} is out of range 1..={}",
            self.0.len() - 1
        );
        self.0[usize::from(value)]
    }
}

impl Index<u8> for UsedNumbers {
    type Output = usize;

    fn index(&self, value: u8) -> &usize {
        &self.0[usize::from(value)]
    }
}

/// A snapshot of the board state computed by [`PlayGrid::check_state`].
///
/// [`PlayGrid::check_state`]: crate::PlayGrid::check_state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    /// Every row, column, and box is a permutation of `1..=size`.
    pub is_complete: bool,
    /// No cell carries an error flag from the last [`mark_errors`] run.
    ///
    /// The two calls are not auto-synchronized: this reflects the flags as
    /// last computed, so call [`mark_errors`] first for a current answer.
    ///
    /// [`mark_errors`]: crate::PlayGrid::mark_errors
    pub is_valid: bool,
    /// Per-value occupancy counts.
    pub used_numbers: UsedNumbers,
}
