//! The UI-facing Sudoku play grid.
//!
//! This crate wraps a generated puzzle in a [`PlayGrid`]: each cell
//! carries an optional value, a given flag fixed at creation, and a
//! derived error flag. It provides the live feedback loop a Sudoku UI
//! needs:
//!
//! - [`PlayGrid::mark_errors`] recomputes which cells currently violate
//!   row, column, or box uniqueness.
//! - [`PlayGrid::check_state`] reports completeness, validity, and
//!   per-value usage counts.
//!
//! Rendering and input handling stay outside this crate: the play grid is
//! a pure data structure mutated through its API.
//!
//! # Examples
//!
//! ```
//! use gridoku_core::GridSize;
//! use gridoku_game::PlayGrid;
//!
//! let mut grid = PlayGrid::generate(GridSize::Nine, 1500);
//! grid.mark_errors();
//!
//! let state = grid.check_state();
//! assert!(state.is_valid);
//! assert!(!state.is_complete);
//! ```

pub mod cell;
pub mod error;
pub mod play_grid;
pub mod state;

// Re-export commonly used types
pub use self::{
    cell::Cell,
    error::GameError,
    play_grid::PlayGrid,
    state::{BoardState, UsedNumbers},
};
