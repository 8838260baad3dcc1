//! The UI-facing play grid and its live error checker.

use gridoku_core::{Grid, GridSize, House, Position};
use gridoku_generator::{GeneratedPuzzle, PuzzleGenerator};

use crate::{BoardState, Cell, GameError, state::UsedNumbers};

/// A Sudoku board as the UI sees it: per-cell value, given flag, and error
/// flag.
///
/// The play grid exclusively owns its cells. Values of non-given cells are
/// mutated through [`set_value`] / [`clear_value`]; [`mark_errors`] is the
/// only writer of the error flags and recomputes them wholesale, so the
/// caller decides when feedback refreshes.
///
/// [`set_value`]: PlayGrid::set_value
/// [`clear_value`]: PlayGrid::clear_value
/// [`mark_errors`]: PlayGrid::mark_errors
///
/// # Examples
///
/// ```
/// use gridoku_core::GridSize;
/// use gridoku_game::PlayGrid;
///
/// let mut grid = PlayGrid::generate(GridSize::Nine, 1500);
///
/// // Find a cell left open for the player.
/// let open = grid
///     .positions()
///     .find(|&pos| !grid.cell(pos).is_given())
///     .expect("puzzle has open cells");
/// grid.set_value(open, 5)?;
///
/// grid.mark_errors();
/// let state = grid.check_state();
/// assert!(!state.is_complete);
/// # Ok::<(), gridoku_game::GameError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayGrid {
    size: GridSize,
    cells: Vec<Cell>,
}

impl PlayGrid {
    /// Builds a play grid from a problem grid: filled cells become givens,
    /// empty cells stay open for the player.
    #[must_use]
    pub fn from_grid(problem: &Grid) -> Self {
        let size = problem.size();
        let cells = problem
            .positions()
            .map(|pos| match problem.get(pos).digit() {
                Some(value) => Cell::given(value),
                None => Cell::empty(),
            })
            .collect();
        Self { size, cells }
    }

    /// Builds a play grid from a generated puzzle's problem grid.
    #[must_use]
    pub fn from_puzzle(puzzle: &GeneratedPuzzle) -> Self {
        Self::from_grid(&puzzle.problem)
    }

    /// Generates a fresh puzzle and wraps it in a play grid.
    ///
    /// This runs the full generation pipeline (randomized fill, then cell
    /// removal at the ELO-derived clue count) rather than serving a canned
    /// board.
    #[must_use]
    pub fn generate(size: GridSize, elo: i32) -> Self {
        let puzzle = PuzzleGenerator::new().generate(size, elo);
        Self::from_puzzle(&puzzle)
    }

    /// Returns the board size.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the board.
    #[must_use]
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[self.index(pos)]
    }

    /// Returns all board positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size.size();
        (0..size).flat_map(move |y| (0..size).map(move |x| Position::new(x, y)))
    }

    /// Enters `value` at `pos`, replacing any previous player value.
    ///
    /// Error flags are not recomputed here; call [`PlayGrid::mark_errors`]
    /// when feedback should refresh.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] for given cells and
    /// [`GameError::ValueOutOfRange`] for values outside `1..=size`.
    pub fn set_value(&mut self, pos: Position, value: u8) -> Result<(), GameError> {
        let max = self.size.size();
        if !(1..=max).contains(&value) {
            return Err(GameError::ValueOutOfRange { value, max });
        }
        let index = self.index(pos);
        let cell = &mut self.cells[index];
        if cell.is_given {
            return Err(GameError::CannotModifyGivenCell);
        }
        cell.value = Some(value);
        Ok(())
    }

    /// Clears the player value at `pos`. Clearing an already-empty cell is
    /// a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] for given cells.
    pub fn clear_value(&mut self, pos: Position) -> Result<(), GameError> {
        let index = self.index(pos);
        let cell = &mut self.cells[index];
        if cell.is_given {
            return Err(GameError::CannotModifyGivenCell);
        }
        cell.value = None;
        Ok(())
    }

    /// Recomputes every cell's error flag from scratch.
    ///
    /// For each row, column, and box, filled cell positions are grouped by
    /// value; every value held by two or more positions marks *all* those
    /// positions. Marking is cumulative across the three passes — a cell
    /// flagged by its row stays flagged even if its box is clean. The
    /// operation is idempotent.
    pub fn mark_errors(&mut self) {
        for cell in &mut self.cells {
            cell.has_error = false;
        }

        let size = self.size;
        let mut positions_by_value: Vec<Vec<Position>> =
            vec![Vec::new(); usize::from(size.size()) + 1];
        for house in House::all(size) {
            for group in &mut positions_by_value {
                group.clear();
            }
            for pos in house.positions(size) {
                if let Some(value) = self.cell(pos).value() {
                    positions_by_value[usize::from(value)].push(pos);
                }
            }
            for group in &positions_by_value {
                if group.len() < 2 {
                    continue;
                }
                for &pos in group {
                    let index = self.index(pos);
                    self.cells[index].has_error = true;
                }
            }
        }
    }

    /// Reports completeness, validity, and per-value usage.
    ///
    /// - `is_complete`: every row, column, and box is a permutation of
    ///   `1..=size`, checked in that order with a short-circuit on the
    ///   first empty cell or duplicate.
    /// - `is_valid`: no cell carries an error flag from the last
    ///   [`PlayGrid::mark_errors`] run.
    /// - `used_numbers`: how many cells hold each value, valid or not.
    #[must_use]
    pub fn check_state(&self) -> BoardState {
        let size = self.size;
        let is_complete = House::all(size).all(|house| self.house_is_permutation(house));
        let is_valid = !self.cells.iter().any(Cell::has_error);

        let mut used = vec![0usize; usize::from(size.size()) + 1];
        for cell in &self.cells {
            if let Some(value) = cell.value() {
                used[usize::from(value)] += 1;
            }
        }

        BoardState {
            is_complete,
            is_valid,
            used_numbers: UsedNumbers(used),
        }
    }

    /// Returns `true` iff the house holds each of `1..=size` exactly once.
    fn house_is_permutation(&self, house: House) -> bool {
        let mut seen = [false; 17];
        for pos in house.positions(self.size) {
            match self.cell(pos).value() {
                Some(value) if value >= 1 && value <= self.size.size() => {
                    if seen[usize::from(value)] {
                        return false;
                    }
                    seen[usize::from(value)] = true;
                }
                _ => return false,
            }
        }
        true
    }

    fn index(&self, pos: Position) -> usize {
        let size = self.size.size();
        assert!(
            pos.x() < size && pos.y() < size,
            "position {pos} is outside a {size}x{size} board"
        );
        usize::from(pos.y()) * usize::from(size) + usize::from(pos.x())
    }
}

#[cfg(test)]
mod tests {
    use gridoku_core::CellValue;
    use gridoku_generator::PuzzleGenerator;

    use super::*;

    const SOLVED: &str = "185362947793148526246795183564239871931874265827516394318427659672951438459683712";

    fn solved_play_grid() -> PlayGrid {
        PlayGrid::from_grid(&Grid::from_text(GridSize::Nine, SOLVED).unwrap())
    }

    fn empty_play_grid() -> PlayGrid {
        PlayGrid::from_grid(&Grid::new(GridSize::Nine))
    }

    #[test]
    fn test_from_puzzle_preserves_structure() {
        let puzzle = PuzzleGenerator::with_seed(42).generate(GridSize::Nine, 1500);
        let grid = PlayGrid::from_puzzle(&puzzle);

        for pos in grid.positions() {
            match puzzle.problem.get(pos).digit() {
                Some(value) => {
                    assert_eq!(grid.cell(pos).value(), Some(value));
                    assert!(grid.cell(pos).is_given());
                }
                None => {
                    assert_eq!(grid.cell(pos).value(), None);
                    assert!(!grid.cell(pos).is_given());
                }
            }
            assert!(!grid.cell(pos).has_error());
        }
    }

    #[test]
    fn test_generate_wires_the_pipeline_through() {
        let grid = PlayGrid::generate(GridSize::Nine, 1000);
        let givens = grid
            .positions()
            .filter(|&pos| grid.cell(pos).is_given())
            .count();
        assert_eq!(givens, 40);
    }

    #[test]
    fn test_set_value_rules() {
        let mut grid = solved_play_grid();
        // Every cell of a from_grid board is a given.
        assert_eq!(
            grid.set_value(Position::new(0, 0), 5),
            Err(GameError::CannotModifyGivenCell)
        );
        assert_eq!(
            grid.clear_value(Position::new(0, 0)),
            Err(GameError::CannotModifyGivenCell)
        );

        let mut grid = empty_play_grid();
        assert_eq!(
            grid.set_value(Position::new(0, 0), 0),
            Err(GameError::ValueOutOfRange { value: 0, max: 9 })
        );
        assert_eq!(
            grid.set_value(Position::new(0, 0), 10),
            Err(GameError::ValueOutOfRange { value: 10, max: 9 })
        );

        grid.set_value(Position::new(0, 0), 5).unwrap();
        assert_eq!(grid.cell(Position::new(0, 0)).value(), Some(5));

        // Replacing and clearing player values is allowed.
        grid.set_value(Position::new(0, 0), 7).unwrap();
        assert_eq!(grid.cell(Position::new(0, 0)).value(), Some(7));
        grid.clear_value(Position::new(0, 0)).unwrap();
        assert_eq!(grid.cell(Position::new(0, 0)).value(), None);
        grid.clear_value(Position::new(0, 0)).unwrap();
    }

    #[test]
    fn test_mark_errors_flags_row_duplicates() {
        let mut grid = empty_play_grid();
        grid.set_value(Position::new(1, 4), 5).unwrap();
        grid.set_value(Position::new(7, 4), 5).unwrap();
        grid.set_value(Position::new(3, 4), 2).unwrap();

        grid.mark_errors();

        assert!(grid.cell(Position::new(1, 4)).has_error());
        assert!(grid.cell(Position::new(7, 4)).has_error());
        assert!(!grid.cell(Position::new(3, 4)).has_error());
        let flagged = grid
            .positions()
            .filter(|&pos| grid.cell(pos).has_error())
            .count();
        assert_eq!(flagged, 2);
    }

    #[test]
    fn test_mark_errors_is_cumulative_across_passes() {
        // (0, 0) and (8, 0) collide in their row; (0, 0) and (1, 1)
        // collide in their box. All three cells end up flagged.
        let mut grid = empty_play_grid();
        grid.set_value(Position::new(0, 0), 9).unwrap();
        grid.set_value(Position::new(8, 0), 9).unwrap();
        grid.set_value(Position::new(1, 1), 9).unwrap();

        grid.mark_errors();

        assert!(grid.cell(Position::new(0, 0)).has_error());
        assert!(grid.cell(Position::new(8, 0)).has_error());
        assert!(grid.cell(Position::new(1, 1)).has_error());
    }

    #[test]
    fn test_mark_errors_is_idempotent_and_clears_stale_flags() {
        let mut grid = empty_play_grid();
        grid.set_value(Position::new(0, 0), 5).unwrap();
        grid.set_value(Position::new(8, 0), 5).unwrap();

        grid.mark_errors();
        let first: Vec<bool> = grid
            .positions()
            .map(|pos| grid.cell(pos).has_error())
            .collect();

        grid.mark_errors();
        let second: Vec<bool> = grid
            .positions()
            .map(|pos| grid.cell(pos).has_error())
            .collect();
        assert_eq!(first, second);

        // Fixing the duplicate clears the flags on the next pass.
        grid.set_value(Position::new(8, 0), 6).unwrap();
        grid.mark_errors();
        assert!(grid.positions().all(|pos| !grid.cell(pos).has_error()));
    }

    #[test]
    fn test_check_state_on_solved_grid() {
        let grid = solved_play_grid();
        let state = grid.check_state();

        assert!(state.is_complete);
        assert!(state.is_valid);
        for value in 1..=9 {
            assert_eq!(state.used_numbers.count(value), 9);
        }
    }

    #[test]
    fn test_check_state_with_row_duplicate() {
        let mut grid = empty_play_grid();
        grid.set_value(Position::new(2, 3), 5).unwrap();
        grid.set_value(Position::new(6, 3), 5).unwrap();

        let state = grid.check_state();
        assert!(!state.is_complete);
        // Error flags have not been computed yet, so the board still
        // reads as valid.
        assert!(state.is_valid);
        assert_eq!(state.used_numbers.count(5), 2);

        grid.mark_errors();
        let state = grid.check_state();
        assert!(!state.is_valid);
        let flagged: Vec<Position> = grid
            .positions()
            .filter(|&pos| grid.cell(pos).has_error())
            .collect();
        assert_eq!(flagged, vec![Position::new(2, 3), Position::new(6, 3)]);
    }

    #[test]
    fn test_check_state_incomplete_without_duplicates() {
        // A single missing cell breaks completeness even though nothing
        // conflicts.
        let solution = Grid::from_text(GridSize::Nine, SOLVED).unwrap();
        let mut problem = solution.clone();
        problem.set(Position::new(4, 4), CellValue::Empty);

        let mut grid = PlayGrid::from_grid(&problem);
        grid.mark_errors();
        let state = grid.check_state();

        assert!(!state.is_complete);
        assert!(state.is_valid);
    }

    #[test]
    fn test_used_numbers_counts_givens_and_player_values() {
        let puzzle = PuzzleGenerator::with_seed(9).generate(GridSize::Nine, 1500);
        let mut grid = PlayGrid::from_puzzle(&puzzle);

        let before = grid.check_state().used_numbers.count(3);
        let open = grid
            .positions()
            .find(|&pos| !grid.cell(pos).is_given())
            .expect("puzzle has open cells");
        grid.set_value(open, 3).unwrap();

        assert_eq!(grid.check_state().used_numbers.count(3), before + 1);
    }

    #[test]
    fn test_sixteen_by_sixteen_board() {
        let mut grid = PlayGrid::from_grid(&Grid::new(GridSize::Sixteen));
        grid.set_value(Position::new(0, 0), 16).unwrap();
        grid.set_value(Position::new(3, 3), 16).unwrap();

        // Same 4x4 box.
        grid.mark_errors();
        assert!(grid.cell(Position::new(0, 0)).has_error());
        assert!(grid.cell(Position::new(3, 3)).has_error());

        let state = grid.check_state();
        assert!(!state.is_complete);
        assert_eq!(state.used_numbers.count(16), 2);
    }
}
