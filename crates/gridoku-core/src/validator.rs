//! Duplicate detection over rows, columns, and boxes.
//!
//! The validator answers one question: does any house currently contain the
//! same filled value twice? It does not check completeness (a partially
//! filled board can be valid) and it does not check solvability.

use crate::{Grid, GridError, House};

// Counting buffer capacity; values are indexed directly, 16 is the largest
// supported dimension.
const COUNT_CAPACITY: usize = 17;

/// Returns `true` iff no row, column, or box of `grid` contains a duplicate
/// filled value.
///
/// Each house is checked with its own fixed-capacity counting buffer and
/// the scan short-circuits on the first count that exceeds 1.
///
/// # Examples
///
/// ```
/// use gridoku_core::{CellValue, Grid, GridSize, Position, validator};
///
/// let mut grid = Grid::new(GridSize::Nine);
/// grid.set(Position::new(0, 0), CellValue::Filled(5));
/// grid.set(Position::new(4, 0), CellValue::Filled(7));
/// assert!(validator::is_valid(&grid));
///
/// // A second 5 in the same row is a violation.
/// grid.set(Position::new(8, 0), CellValue::Filled(5));
/// assert!(!validator::is_valid(&grid));
/// ```
#[must_use]
pub fn is_valid(grid: &Grid) -> bool {
    let size = grid.size();
    for house in House::all(size) {
        let mut counts = [0u8; COUNT_CAPACITY];
        for pos in house.positions(size) {
            if let Some(value) = grid.get(pos).digit() {
                counts[usize::from(value)] += 1;
                if counts[usize::from(value)] > 1 {
                    return false;
                }
            }
        }
    }
    true
}

/// Checks a stringly-typed board for duplicates: the original
/// `isValid(board, size, boxSize)` contract.
///
/// The board is parsed strictly before any counting happens, so malformed
/// cells surface as errors instead of corrupting the duplicate check.
///
/// # Errors
///
/// Returns any [`GridError`] produced by [`Grid::parse_cells`].
///
/// # Examples
///
/// ```
/// use gridoku_core::validator;
///
/// let mut rows = vec![vec!["."; 9]; 9];
/// rows[0][..5].copy_from_slice(&["5", "3", ".", ".", "7"]);
/// assert!(validator::is_valid_cells(&rows, 9, 3)?);
///
/// rows[0][8] = "5";
/// assert!(!validator::is_valid_cells(&rows, 9, 3)?);
/// # Ok::<(), gridoku_core::GridError>(())
/// ```
pub fn is_valid_cells<R, S>(rows: &[R], size: usize, box_size: usize) -> Result<bool, GridError>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let grid = Grid::parse_cells(rows, size, box_size)?;
    Ok(is_valid(&grid))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;
    use crate::{CellValue, GridSize, Position};

    const SOLVED: &str = "185362947793148526246795183564239871931874265827516394318427659672951438459683712";

    fn solved_grid() -> Grid {
        Grid::from_text(GridSize::Nine, SOLVED).unwrap()
    }

    /// Independent reference check built on hash sets instead of counting
    /// buffers.
    fn reference_is_valid(grid: &Grid) -> bool {
        let size = grid.size();
        House::all(size).all(|house| {
            let mut seen = HashSet::new();
            house
                .positions(size)
                .filter_map(|pos| grid.get(pos).digit())
                .all(|value| seen.insert(value))
        })
    }

    #[test]
    fn test_empty_grid_is_valid() {
        for size in GridSize::ALL {
            assert!(is_valid(&Grid::new(size)));
        }
    }

    #[test]
    fn test_solved_grid_is_valid() {
        assert!(is_valid(&solved_grid()));
    }

    #[test]
    fn test_duplicate_in_row_column_and_box() {
        let mut grid = Grid::new(GridSize::Nine);
        grid.set(Position::new(0, 0), CellValue::Filled(5));
        grid.set(Position::new(8, 0), CellValue::Filled(5));
        assert!(!is_valid(&grid));

        let mut grid = Grid::new(GridSize::Nine);
        grid.set(Position::new(3, 0), CellValue::Filled(2));
        grid.set(Position::new(3, 8), CellValue::Filled(2));
        assert!(!is_valid(&grid));

        // Same box, different row and column.
        let mut grid = Grid::new(GridSize::Nine);
        grid.set(Position::new(0, 0), CellValue::Filled(9));
        grid.set(Position::new(2, 2), CellValue::Filled(9));
        assert!(!is_valid(&grid));
    }

    #[test]
    fn test_partial_row_duplicate() {
        // [5,3,.,.,7,.,.,.,.] is valid; appending a second 5 is not.
        let mut rows = vec![vec!["."; 9]; 9];
        rows[0] = vec!["5", "3", ".", ".", "7", ".", ".", ".", "."];
        assert_eq!(is_valid_cells(&rows, 9, 3), Ok(true));

        rows[0][8] = "5";
        assert_eq!(is_valid_cells(&rows, 9, 3), Ok(false));
    }

    #[test]
    fn test_is_valid_cells_rejects_malformed_board() {
        let mut rows = vec![vec!["."; 9]; 9];
        rows[4][4] = "5x";
        assert_eq!(
            is_valid_cells(&rows, 9, 3),
            Err(GridError::MalformedCell {
                x: 4,
                y: 4,
                text: "5x".to_owned()
            })
        );

        assert_eq!(
            is_valid_cells(&vec![vec!["."; 9]; 9], 9, 4),
            Err(GridError::BoxSizeMismatch {
                size: 9,
                box_size: 4
            })
        );
    }

    #[test]
    fn test_corrupting_a_solved_grid_invalidates_it() {
        let solved = solved_grid();
        // Copying any cell's value over its row neighbour introduces a
        // duplicate.
        for y in 0..9 {
            let mut grid = solved.clone();
            let value = grid.get(Position::new(0, y));
            grid.set(Position::new(1, y), value);
            assert!(!is_valid(&grid), "row {y} duplicate not detected");
        }
    }

    proptest! {
        #[test]
        fn prop_matches_reference_check(
            placements in prop::collection::vec((0..16u8, 0..16u8, 1..=16u8), 0..64),
            size in prop::sample::select(vec![GridSize::Nine, GridSize::Sixteen]),
        ) {
            let mut grid = Grid::new(size);
            let dimension = size.size();
            for (x, y, value) in placements {
                if x < dimension && y < dimension && value <= dimension {
                    grid.set(Position::new(x, y), CellValue::Filled(value));
                }
            }
            prop_assert_eq!(is_valid(&grid), reference_is_valid(&grid));
        }
    }
}
