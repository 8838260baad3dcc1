//! Core data structures for Sudoku play grids.
//!
//! This crate provides the board data model shared by the generator and
//! game layers, for both 9×9 and 16×16 boards.
//!
//! # Overview
//!
//! The crate is organized around three concepts:
//!
//! 1. **Board model** — owned, heap-allocated boards
//!    - [`grid`]: [`GridSize`], the tagged [`CellValue`], and the owned
//!      [`Grid`] with strict stringly-board parsing
//!    - [`position`]: the [`Position`] coordinate type
//! 2. **Constraint structure** — the three uniqueness constraints
//!    - [`house`]: [`House`] (rows, columns, aligned boxes) and house
//!      position iteration
//! 3. **Validation** — duplicate detection
//!    - [`validator`]: [`validator::is_valid`] over a [`Grid`] and
//!      [`validator::is_valid_cells`] over the original stringly board
//!
//! # Examples
//!
//! ```
//! use gridoku_core::{CellValue, Grid, GridSize, Position, validator};
//!
//! let mut grid = Grid::new(GridSize::Nine);
//! grid.set(Position::new(0, 0), CellValue::Filled(5));
//! grid.set(Position::new(1, 0), CellValue::Filled(3));
//!
//! assert!(validator::is_valid(&grid));
//! ```

pub mod error;
pub mod grid;
pub mod house;
pub mod position;
pub mod validator;

// Re-export commonly used types
pub use self::{
    error::GridError,
    grid::{CellValue, Grid, GridSize},
    house::House,
    position::Position,
};
