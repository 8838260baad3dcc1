//! Rows, columns, and boxes — the three uniqueness constraints.

use crate::{GridSize, Position};

/// A board house: a row, a column, or an aligned box.
///
/// Boxes are numbered left to right, top to bottom, so box `index` has its
/// top-left corner at column `(index % box_size) * box_size` and row
/// `(index / box_size) * box_size`. The boxes partition the board exactly.
///
/// # Examples
///
/// ```
/// use gridoku_core::{GridSize, House, Position};
///
/// let house = House::Box { index: 4 };
/// let positions: Vec<_> = house.positions(GridSize::Nine).collect();
/// assert_eq!(positions[0], Position::new(3, 3));
/// assert_eq!(positions.len(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum House {
    /// A row identified by its y coordinate.
    Row {
        /// Row index (`0..size`).
        y: u8,
    },
    /// A column identified by its x coordinate.
    Column {
        /// Column index (`0..size`).
        x: u8,
    },
    /// An aligned box identified by its index.
    Box {
        /// Box index (`0..size`, left to right, top to bottom).
        index: u8,
    },
}

impl House {
    /// Returns all rows of a board.
    pub fn rows(size: GridSize) -> impl Iterator<Item = Self> {
        (0..size.size()).map(|y| Self::Row { y })
    }

    /// Returns all columns of a board.
    pub fn columns(size: GridSize) -> impl Iterator<Item = Self> {
        (0..size.size()).map(|x| Self::Column { x })
    }

    /// Returns all boxes of a board.
    pub fn boxes(size: GridSize) -> impl Iterator<Item = Self> {
        (0..size.size()).map(|index| Self::Box { index })
    }

    /// Returns all `3 * size` houses in row, column, box order.
    pub fn all(size: GridSize) -> impl Iterator<Item = Self> {
        Self::rows(size)
            .chain(Self::columns(size))
            .chain(Self::boxes(size))
    }

    /// Converts a cell index within the house (`0..size`) into an absolute
    /// [`Position`] on a board of the given size.
    ///
    /// # Panics
    ///
    /// Panics if `i` or the house coordinate is not in `0..size`.
    #[must_use]
    pub fn position(self, size: GridSize, i: u8) -> Position {
        let dimension = size.size();
        assert!(i < dimension, "cell index {i} is out of range 0..{dimension}");
        match self {
            Self::Row { y } => {
                assert!(y < dimension);
                Position::new(i, y)
            }
            Self::Column { x } => {
                assert!(x < dimension);
                Position::new(x, i)
            }
            Self::Box { index } => {
                assert!(index < dimension);
                let box_size = size.box_size();
                let x = (index % box_size) * box_size + i % box_size;
                let y = (index / box_size) * box_size + i / box_size;
                Position::new(x, y)
            }
        }
    }

    /// Returns all positions contained in this house, in reading order.
    pub fn positions(self, size: GridSize) -> impl Iterator<Item = Position> {
        (0..size.size()).map(move |i| self.position(size, i))
    }
}
