//! Board position (x, y) coordinate type.

use std::fmt::{self, Display};

/// A cell coordinate on a square board.
///
/// `x` is the zero-based column index and `y` the zero-based row index,
/// both counted from the top-left corner. Positions carry no board size of
/// their own; bounds are enforced where a position meets a concrete grid.
///
/// # Examples
///
/// ```
/// use gridoku_core::Position;
///
/// let pos = Position::new(4, 2);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Creates a position from column `x` and row `y`.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Returns the zero-based column index.
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the zero-based row index.
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
