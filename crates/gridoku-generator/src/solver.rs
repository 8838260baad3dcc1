//! Exhaustive backtracking solver.

use gridoku_core::{CellValue, Grid, Position};

/// Solves `grid` by exhaustive backtracking, returning the first solution
/// found or `None` when the board admits none.
///
/// Empty cells are visited in row-major order and candidate values tried in
/// ascending order, so the result is deterministic: the same input always
/// yields the same solution. Randomized candidate ordering lives in the
/// generator, which needs variety; this entry point stays deterministic for
/// testing and reproduction.
///
/// # Examples
///
/// ```
/// use gridoku_core::{Grid, GridSize};
/// use gridoku_generator::solver;
///
/// let empty = Grid::new(GridSize::Nine);
/// let solved = solver::solve(&empty).expect("an empty board is solvable");
/// assert!(solved.is_full());
/// ```
#[must_use]
pub fn solve(grid: &Grid) -> Option<Grid> {
    let mut work = grid.clone();
    solve_in_place(&mut work).then_some(work)
}

fn solve_in_place(grid: &mut Grid) -> bool {
    let Some(pos) = first_empty(grid) else {
        return true;
    };
    for value in 1..=grid.size().size() {
        if is_safe(grid, pos, value) {
            grid.set(pos, CellValue::Filled(value));
            if solve_in_place(grid) {
                return true;
            }
            grid.set(pos, CellValue::Empty);
        }
    }
    false
}

/// Returns the first empty cell in row-major order.
pub(crate) fn first_empty(grid: &Grid) -> Option<Position> {
    grid.positions().find(|&pos| grid.get(pos).is_empty())
}

/// Returns `true` iff `value` does not already appear in the row, column,
/// or box containing `pos`.
pub(crate) fn is_safe(grid: &Grid, pos: Position, value: u8) -> bool {
    let size = grid.size();
    for i in 0..size.size() {
        if grid.get(Position::new(i, pos.y())).digit() == Some(value)
            || grid.get(Position::new(pos.x(), i)).digit() == Some(value)
        {
            return false;
        }
    }
    let box_size = size.box_size();
    let x0 = pos.x() / box_size * box_size;
    let y0 = pos.y() / box_size * box_size;
    for y in y0..y0 + box_size {
        for x in x0..x0 + box_size {
            if grid.get(Position::new(x, y)).digit() == Some(value) {
                return false;
            }
        }
    }
    true
}
