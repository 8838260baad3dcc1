//! Sudoku puzzle generation for 9×9 and 16×16 boards.
//!
//! Generation runs in two phases:
//!
//! 1. [`PuzzleGenerator`] fills an empty board by backtracking with
//!    per-cell shuffled candidate order, producing a different complete
//!    grid on every run.
//! 2. Cells are removed at uniformly random positions until an ELO-derived
//!    clue count remains ([`clue_count`]).
//!
//! A deterministic exhaustive solver ([`solver::solve`]) is exposed
//! alongside, with ascending candidate order for reproducible results.
//!
//! The generator guarantees the clue count exactly; it does not guarantee
//! that the carved puzzle has a unique solution.
//!
//! # Examples
//!
//! ```
//! use gridoku_core::GridSize;
//! use gridoku_generator::PuzzleGenerator;
//!
//! let mut generator = PuzzleGenerator::new();
//! let puzzle = generator.generate(GridSize::Nine, 1500);
//!
//! assert_eq!(puzzle.problem.filled_count(), puzzle.clue_count);
//! ```

pub mod clues;
pub mod generator;
pub mod solver;

// Re-export commonly used items
pub use self::{
    clues::clue_count,
    generator::{GeneratedPuzzle, PuzzleGenerator},
};
