//! The UI-facing cell.

/// A single cell of a [`PlayGrid`].
///
/// `is_given` is fixed when the grid is built and never changes. `value`
/// is mutated through the play grid's API for non-given cells. `has_error`
/// is derived state: [`PlayGrid::mark_errors`] is its only writer and
/// recomputes it wholesale on every call.
///
/// [`PlayGrid`]: crate::PlayGrid
/// [`PlayGrid::mark_errors`]: crate::PlayGrid::mark_errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub(crate) value: Option<u8>,
    pub(crate) is_given: bool,
    pub(crate) has_error: bool,
}

impl Cell {
    pub(crate) const fn empty() -> Self {
        Self {
            value: None,
            is_given: false,
            has_error: false,
        }
    }

    pub(crate) const fn given(value: u8) -> Self {
        Self {
            value: Some(value),
            is_given: true,
            has_error: false,
        }
    }

    /// Returns the entered or given value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<u8> {
        self.value
    }

    /// Returns `true` for a clue cell presented to the player as fixed.
    #[must_use]
    pub const fn is_given(&self) -> bool {
        self.is_given
    }

    /// Returns `true` when the last error marking flagged this cell as
    /// violating row, column, or box uniqueness.
    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.has_error
    }
}
