//! Grid coordinates.

use std::fmt::{self, Display};

use crate::Direction;

/// A cell coordinate, `row` first.
///
/// Positions order row-major (by row, then column), which is the reading
/// order used for clue numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from a row and a column.
    #[must_use]
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row index.
    #[must_use]
    #[inline]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column index.
    #[must_use]
    #[inline]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns the position `n` cells further along `direction`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cruciform_core::{Direction, Position};
    ///
    /// let pos = Position::new(2, 3);
    /// assert_eq!(pos.forward(Direction::Across, 2), Position::new(2, 5));
    /// assert_eq!(pos.forward(Direction::Down, 1), Position::new(3, 3));
    /// ```
    #[must_use]
    #[inline]
    pub const fn forward(self, direction: Direction, n: usize) -> Self {
        match direction {
            Direction::Across => Self::new(self.row, self.col + n),
            Direction::Down => Self::new(self.row + n, self.col),
        }
    }

    /// Returns the position `n` cells back along `direction`, or `None` if
    /// that would leave the non-negative quadrant.
    #[must_use]
    #[inline]
    pub const fn backward(self, direction: Direction, n: usize) -> Option<Self> {
        match direction {
            Direction::Across => match self.col.checked_sub(n) {
                Some(col) => Some(Self::new(self.row, col)),
                None => None,
            },
            Direction::Down => match self.row.checked_sub(n) {
                Some(row) => Some(Self::new(row, self.col)),
                None => None,
            },
        }
    }

    /// Returns the two neighbours orthogonal to `direction`.
    ///
    /// For an across word these are the cells above and below; for a down
    /// word, left and right. The first element is `None` on the top or left
    /// edge of the coordinate space.
    #[must_use]
    pub fn side_neighbors(self, direction: Direction) -> [Option<Self>; 2] {
        let side = direction.perpendicular();
        [self.backward(side, 1), Some(self.forward(side, 1))]
    }

    /// Translates the position so that `origin` becomes `(0, 0)`.
    ///
    /// Returns `None` if the position lies above or left of `origin`.
    #[must_use]
    pub fn relative_to(self, origin: Self) -> Option<Self> {
        Some(Self::new(
            self.row.checked_sub(origin.row)?,
            self.col.checked_sub(origin.col)?,
        ))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
