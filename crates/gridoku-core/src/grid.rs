//! Board sizes, cell values, and the owned grid type.

use std::fmt::{self, Display};

use crate::{GridError, Position};

/// The supported board dimensions.
///
/// Boxes are only well-defined when the dimension is a perfect square, so
/// the library restricts boards to 9×9 (3×3 boxes) and 16×16 (4×4 boxes).
///
/// # Examples
///
/// ```
/// use gridoku_core::GridSize;
///
/// let size = GridSize::Nine;
/// assert_eq!(size.size(), 9);
/// assert_eq!(size.box_size(), 3);
/// assert_eq!(size.cell_count(), 81);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridSize {
    /// A 9×9 board with 3×3 boxes.
    Nine,
    /// A 16×16 board with 4×4 boxes.
    Sixteen,
}

impl GridSize {
    /// Array containing both supported sizes.
    pub const ALL: [Self; 2] = [Self::Nine, Self::Sixteen];

    /// Returns the board dimension (9 or 16).
    #[must_use]
    pub const fn size(self) -> u8 {
        match self {
            Self::Nine => 9,
            Self::Sixteen => 16,
        }
    }

    /// Returns the box dimension (3 or 4).
    #[must_use]
    pub const fn box_size(self) -> u8 {
        match self {
            Self::Nine => 3,
            Self::Sixteen => 4,
        }
    }

    /// Returns the total number of cells (81 or 256).
    #[must_use]
    pub const fn cell_count(self) -> usize {
        let size = self.size() as usize;
        size * size
    }

    /// Creates a grid size from a raw dimension.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnsupportedSize`] for any dimension other than
    /// 9 or 16.
    pub fn try_from_size(size: usize) -> Result<Self, GridError> {
        match size {
            9 => Ok(Self::Nine),
            16 => Ok(Self::Sixteen),
            _ => Err(GridError::UnsupportedSize { size }),
        }
    }

    /// Creates a grid size from a raw dimension and a caller-supplied box
    /// dimension.
    ///
    /// The original stringly-typed board contract takes the box size from
    /// the caller rather than deriving it, so inconsistent pairs must be
    /// rejected here before any house arithmetic runs.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnsupportedSize`] for any dimension other than
    /// 9 or 16, and [`GridError::BoxSizeMismatch`] when
    /// `box_size * box_size != size`.
    pub fn try_from_parts(size: usize, box_size: usize) -> Result<Self, GridError> {
        let grid_size = Self::try_from_size(size)?;
        if box_size != usize::from(grid_size.box_size()) {
            return Err(GridError::BoxSizeMismatch { size, box_size });
        }
        Ok(grid_size)
    }
}

/// The content of a single board cell.
///
/// This tagged variant replaces the stringly-typed cells of the original
/// board contract (`"."` as the empty sentinel), so parse failures cannot
/// reach the rule-checking code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellValue {
    /// An unfilled cell.
    #[default]
    Empty,
    /// A cell holding a value in `1..=size`.
    Filled(u8),
}

impl CellValue {
    /// Returns the filled value, or `None` for an empty cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridoku_core::CellValue;
    ///
    /// assert_eq!(CellValue::Filled(5).digit(), Some(5));
    /// assert_eq!(CellValue::Empty.digit(), None);
    /// ```
    #[must_use]
    pub const fn digit(self) -> Option<u8> {
        match self {
            Self::Empty => None,
            Self::Filled(value) => Some(value),
        }
    }

    /// Returns `true` for the empty cell.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// An owned square board of [`CellValue`]s.
///
/// Cells are stored row-major. The grid enforces its shape and value-range
/// invariants at every mutation: positions must lie on the board and filled
/// values in `1..=size`.
///
/// # Examples
///
/// ```
/// use gridoku_core::{CellValue, Grid, GridSize, Position};
///
/// let mut grid = Grid::new(GridSize::Nine);
/// grid.set(Position::new(0, 0), CellValue::Filled(5));
///
/// assert_eq!(grid.get(Position::new(0, 0)).digit(), Some(5));
/// assert_eq!(grid.filled_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: GridSize,
    cells: Vec<CellValue>,
}

impl Grid {
    /// Creates an empty grid of the given size.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![CellValue::Empty; size.cell_count()],
        }
    }

    /// Returns the board size.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the value at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> CellValue {
        self.cells[self.index(pos)]
    }

    /// Sets the value at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the board or if a filled value is
    /// outside `1..=size`.
    pub fn set(&mut self, pos: Position, value: CellValue) {
        if let CellValue::Filled(digit) = value {
            assert!(
                (1..=self.size.size()).contains(&digit),
                "value {digit} is out of range 1..={}",
                self.size.size()
            );
        }
        let index = self.index(pos);
        self.cells[index] = value;
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Returns `true` when every cell is filled.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Returns all board positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size.size();
        (0..size).flat_map(move |y| (0..size).map(move |x| Position::new(x, y)))
    }

    /// Parses a stringly-typed board: one string per cell, `"."` for empty,
    /// decimal integers otherwise.
    ///
    /// This is the strict replacement for the original `isValid(board,
    /// size, boxSize)` input contract: every shape or value defect is
    /// reported as an error instead of corrupting downstream counts.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnsupportedSize`] or
    /// [`GridError::BoxSizeMismatch`] for bad `(size, box_size)` pairs,
    /// [`GridError::RowCount`] / [`GridError::RowLength`] for misshapen
    /// boards, and [`GridError::MalformedCell`] /
    /// [`GridError::ValueOutOfRange`] for bad cell text.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridoku_core::{Grid, GridError};
    ///
    /// let rows = vec![vec!["5"; 9]; 8];
    /// let err = Grid::parse_cells(&rows, 9, 3).unwrap_err();
    /// assert_eq!(err, GridError::RowCount { expected: 9, found: 8 });
    /// ```
    pub fn parse_cells<R, S>(rows: &[R], size: usize, box_size: usize) -> Result<Self, GridError>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let grid_size = GridSize::try_from_parts(size, box_size)?;
        if rows.len() != size {
            return Err(GridError::RowCount {
                expected: size,
                found: rows.len(),
            });
        }

        let mut grid = Self::new(grid_size);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(GridError::RowLength {
                    y,
                    expected: size,
                    found: row.len(),
                });
            }
            for (x, text) in row.iter().enumerate() {
                let value = parse_cell(text.as_ref(), grid_size, x, y)?;
                #[expect(clippy::cast_possible_truncation)]
                grid.set(Position::new(x as u8, y as u8), value);
            }
        }
        Ok(grid)
    }

    /// Parses a whitespace-separated board text.
    ///
    /// Each token is one cell (`.` or `0` for empty, a decimal value
    /// otherwise). As a convenience for 9×9 fixtures, a text whose
    /// non-whitespace characters number exactly `cell_count` is read one
    /// character per cell instead.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CellCount`] when the cell count does not match
    /// the board, and the same cell-level errors as [`Grid::parse_cells`].
    ///
    /// # Examples
    ///
    /// ```
    /// use gridoku_core::{Grid, GridSize, Position};
    ///
    /// let grid = Grid::from_text(
    ///     GridSize::Nine,
    ///     "53..7....
    ///      6..195...
    ///      .98....6.
    ///      8...6...3
    ///      4..8.3..1
    ///      7...2...6
    ///      .6....28.
    ///      ...419..5
    ///      ....8..79",
    /// )?;
    /// assert_eq!(grid.get(Position::new(0, 0)).digit(), Some(5));
    /// # Ok::<(), gridoku_core::GridError>(())
    /// ```
    pub fn from_text(size: GridSize, text: &str) -> Result<Self, GridError> {
        let cell_count = size.cell_count();
        let tokens: Vec<&str> = text.split_whitespace().collect();

        let cells: Vec<String> = if tokens.len() == cell_count {
            tokens.iter().map(|&token| token.to_owned()).collect()
        } else {
            let chars: Vec<String> = text
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(String::from)
                .collect();
            if chars.len() != cell_count {
                return Err(GridError::CellCount {
                    expected: cell_count,
                    found: chars.len(),
                });
            }
            chars
        };

        let dimension = usize::from(size.size());
        let rows: Vec<&[String]> = cells.chunks(dimension).collect();
        Self::parse_cells(&rows, dimension, usize::from(size.box_size()))
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

fn parse_cell(text: &str, size: GridSize, x: usize, y: usize) -> Result<CellValue, GridError> {
    if text == "." || text == "0" {
        return Ok(CellValue::Empty);
    }
    let value: u32 = text
        .parse()
        .map_err(|_| GridError::MalformedCell {
            x,
            y,
            text: text.to_owned(),
        })?;
    if value < 1 || value > u32::from(size.size()) {
        return Err(GridError::ValueOutOfRange {
            x,
            y,
            value,
            max: size.size(),
        });
    }
    #[expect(clippy::cast_possible_truncation)]
    Ok(CellValue::Filled(value as u8))
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size.size();
        for y in 0..size {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..size {
                if x > 0 {
                    write!(f, " ")?;
                }
                match self.get(Position::new(x, y)) {
                    CellValue::Empty => write!(f, ".")?,
                    CellValue::Filled(value) => write!(f, "{value}")?,
                }
            }
        }
        Ok(())
    }
}
