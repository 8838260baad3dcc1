//! Randomized puzzle generation: fill, then carve.

use gridoku_core::{CellValue, Grid, GridSize, Position, validator};
use rand::{RngExt as _, SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64Mcg;

use crate::{clues, solver};

/// The output of one generation run.
///
/// The full solution is retained alongside the carved problem so the game
/// layer can build a session without re-solving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The clue grid presented to the player.
    pub problem: Grid,
    /// The filled grid the problem was carved from.
    pub solution: Grid,
    /// The number of filled cells in `problem`.
    pub clue_count: usize,
}

/// A Sudoku puzzle generator.
///
/// Generation has two phases: a backtracking fill with per-cell shuffled
/// candidate order (so successive runs produce different boards), then
/// random cell removal down to an ELO-derived clue count. The generator
/// guarantees the clue *count*, not unique solvability — puzzle quality is
/// out of scope.
///
/// The RNG is a seedable PCG; [`PuzzleGenerator::with_seed`] reproduces a
/// run exactly.
///
/// # Examples
///
/// ```
/// use gridoku_core::{GridSize, validator};
/// use gridoku_generator::PuzzleGenerator;
///
/// let mut generator = PuzzleGenerator::with_seed(42);
/// let puzzle = generator.generate(GridSize::Nine, 1500);
///
/// assert_eq!(puzzle.problem.filled_count(), puzzle.clue_count);
/// assert!(puzzle.solution.is_full());
/// assert!(validator::is_valid(&puzzle.solution));
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    rng: Pcg64Mcg,
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleGenerator {
    /// Creates a generator seeded from the thread RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Creates a generator with a fixed seed for reproducible output.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Generates a puzzle of the given size and difficulty.
    ///
    /// `elo` is clamped to `[1000, 2000]`; see [`clues::clue_count`].
    pub fn generate(&mut self, size: GridSize, elo: i32) -> GeneratedPuzzle {
        let clue_count = clues::clue_count(size, elo);
        let solution = self.fill_grid(size);
        debug_assert!(solution.is_full() && validator::is_valid(&solution));

        let problem = self.remove_cells(&solution, clue_count);
        log::debug!(
            "generated {size}x{size} puzzle with {clue_count} clues (elo {elo})",
            size = size.size(),
        );
        GeneratedPuzzle {
            problem,
            solution,
            clue_count,
        }
    }

    /// Produces a complete valid grid by randomized backtracking.
    fn fill_grid(&mut self, size: GridSize) -> Grid {
        let mut grid = Grid::new(size);
        let filled = self.fill_in_place(&mut grid);
        debug_assert!(filled, "an empty board is always fillable");
        grid
    }

    fn fill_in_place(&mut self, grid: &mut Grid) -> bool {
        let Some(pos) = solver::first_empty(grid) else {
            return true;
        };
        let mut candidates: Vec<u8> = (1..=grid.size().size()).collect();
        candidates.shuffle(&mut self.rng);
        for value in candidates {
            if solver::is_safe(grid, pos, value) {
                grid.set(pos, CellValue::Filled(value));
                if self.fill_in_place(grid) {
                    return true;
                }
                grid.set(pos, CellValue::Empty);
            }
        }
        false
    }

    /// Clears uniformly random cells until exactly `clue_count` remain.
    ///
    /// Already-empty picks are redrawn; the loop terminates because the
    /// removal budget never exceeds the filled-cell count.
    fn remove_cells(&mut self, solution: &Grid, clue_count: usize) -> Grid {
        let mut grid = solution.clone();
        let dimension = solution.size().size();
        let mut budget = solution.size().cell_count() - clue_count.min(solution.filled_count());
        while budget > 0 {
            let x = self.rng.random_range(0..dimension);
            let y = self.rng.random_range(0..dimension);
            let pos = Position::new(x, y);
            if !grid.get(pos).is_empty() {
                grid.set(pos, CellValue::Empty);
                budget -= 1;
            }
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_same_seed_reproduces_puzzle() {
        let first = PuzzleGenerator::with_seed(42).generate(GridSize::Nine, 1500);
        let second = PuzzleGenerator::with_seed(42).generate(GridSize::Nine, 1500);
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_vary_output() {
        let first = PuzzleGenerator::with_seed(1).generate(GridSize::Nine, 1500);
        let second = PuzzleGenerator::with_seed(2).generate(GridSize::Nine, 1500);
        assert_ne!(first.solution, second.solution);
    }

    #[test]
    fn test_problem_agrees_with_solution() {
        let puzzle = PuzzleGenerator::with_seed(7).generate(GridSize::Nine, 1200);

        for pos in puzzle.problem.positions() {
            if let Some(value) = puzzle.problem.get(pos).digit() {
                assert_eq!(puzzle.solution.get(pos).digit(), Some(value));
            }
        }
    }

    #[test]
    fn test_clue_count_matches_elo() {
        let mut generator = PuzzleGenerator::with_seed(3);

        let easiest = generator.generate(GridSize::Nine, 1000);
        assert_eq!(easiest.clue_count, 40);
        assert_eq!(easiest.problem.filled_count(), 40);

        let hardest = generator.generate(GridSize::Nine, 2000);
        assert_eq!(hardest.clue_count, 16);
        assert_eq!(hardest.problem.filled_count(), 16);
    }

    #[test]
    fn test_sixteen_generation() {
        let puzzle = PuzzleGenerator::with_seed(5).generate(GridSize::Sixteen, 1500);

        assert!(puzzle.solution.is_full());
        assert!(validator::is_valid(&puzzle.solution));
        assert_eq!(puzzle.clue_count, 89);
        assert_eq!(puzzle.problem.filled_count(), 89);
    }

    #[test]
    fn test_problem_is_valid_board() {
        // Carving cells out of a valid solution cannot introduce
        // duplicates.
        let puzzle = PuzzleGenerator::with_seed(11).generate(GridSize::Nine, 1800);
        assert!(validator::is_valid(&puzzle.problem));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_generation_invariants(seed in any::<u64>(), elo in -500..3000i32) {
            let puzzle = PuzzleGenerator::with_seed(seed).generate(GridSize::Nine, elo);

            prop_assert!(puzzle.solution.is_full());
            prop_assert!(validator::is_valid(&puzzle.solution));
            prop_assert_eq!(puzzle.clue_count, clues::clue_count(GridSize::Nine, elo));
            prop_assert_eq!(puzzle.problem.filled_count(), puzzle.clue_count);
        }
    }
}
