//! ELO-derived clue counts.
//!
//! The ELO value is a linear difficulty knob in `[1000, 2000]`, not a true
//! skill rating: it only scales how many clues survive cell removal, never
//! how hard the puzzle is to reason about.

use gridoku_core::GridSize;

/// Returns the number of clues a puzzle of the given size keeps at the
/// given ELO.
///
/// With `total = size²`, the count interpolates linearly between
/// `floor(0.5 · total)` at ELO 1000 and `floor(0.2 · total)` at ELO 2000,
/// clamping outside that range. Higher ELO means fewer clues.
///
/// # Examples
///
/// ```
/// use gridoku_core::GridSize;
/// use gridoku_generator::clue_count;
///
/// assert_eq!(clue_count(GridSize::Nine, 1000), 40);
/// assert_eq!(clue_count(GridSize::Nine, 2000), 16);
/// assert_eq!(clue_count(GridSize::Nine, 500), 40);
/// ```
#[must_use]
pub fn clue_count(size: GridSize, elo: i32) -> usize {
    #[expect(clippy::cast_precision_loss)]
    let total = size.cell_count() as f64;
    let max_clues = (0.5 * total).floor();
    let min_clues = (0.2 * total).floor();
    let difficulty = f64::from((elo - 1000).clamp(0, 1000)) / 1000.0;
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let clues = (max_clues - (max_clues - min_clues) * difficulty).floor() as usize;
    clues
}
