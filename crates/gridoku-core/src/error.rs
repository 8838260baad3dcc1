//! Error types for board construction and parsing.

use derive_more::{Display, Error};

/// An error raised while constructing or parsing a board.
///
/// The variants fall into two groups: configuration errors
/// ([`UnsupportedSize`], [`BoxSizeMismatch`]) and malformed input
/// ([`RowCount`], [`RowLength`], [`MalformedCell`], [`ValueOutOfRange`]).
///
/// [`UnsupportedSize`]: GridError::UnsupportedSize
/// [`BoxSizeMismatch`]: GridError::BoxSizeMismatch
/// [`RowCount`]: GridError::RowCount
/// [`RowLength`]: GridError::RowLength
/// [`MalformedCell`]: GridError::MalformedCell
/// [`ValueOutOfRange`]: GridError::ValueOutOfRange
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// The requested grid size is not supported (only 9 and 16 are).
    #[display("unsupported grid size {size}, expected 9 or 16")]
    UnsupportedSize {
        /// The rejected size.
        size: usize,
    },
    /// The caller-supplied box size does not partition the grid.
    #[display("box size {box_size} is inconsistent with grid size {size}")]
    BoxSizeMismatch {
        /// The grid size.
        size: usize,
        /// The rejected box size.
        box_size: usize,
    },
    /// The board has the wrong number of rows.
    #[display("expected {expected} rows, found {found}")]
    RowCount {
        /// The expected row count.
        expected: usize,
        /// The actual row count.
        found: usize,
    },
    /// A board text has the wrong total number of cells.
    #[display("expected {expected} cells, found {found}")]
    CellCount {
        /// The expected cell count.
        expected: usize,
        /// The actual cell count.
        found: usize,
    },
    /// A row has the wrong number of cells.
    #[display("row {y} has {found} cells, expected {expected}")]
    RowLength {
        /// The zero-based row index.
        y: usize,
        /// The expected cell count.
        expected: usize,
        /// The actual cell count.
        found: usize,
    },
    /// A cell holds text that is neither the empty sentinel nor an integer.
    #[display("cell ({x}, {y}) holds malformed value {text:?}")]
    MalformedCell {
        /// The zero-based column index.
        x: usize,
        /// The zero-based row index.
        y: usize,
        /// The offending cell text.
        text: String,
    },
    /// A cell holds an integer outside the range `1..=size`.
    #[display("cell ({x}, {y}) value {value} is out of range 1..={max}")]
    ValueOutOfRange {
        /// The zero-based column index.
        x: usize,
        /// The zero-based row index.
        y: usize,
        /// The rejected value.
        value: u32,
        /// The largest allowed value.
        max: u8,
    },
}
