//! Symmetric black-square patterns for bounded grids.

use std::collections::BTreeSet;

use cruciform_core::{Grid, Position};

/// A row or column index expressed relative to the grid size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// `k` cells from the top or left edge.
    Start(usize),
    /// The middle index, `size / 2`.
    Middle,
    /// `k` cells from the bottom or right edge.
    End(usize),
}

impl Anchor {
    /// Resolves the anchor against a dimension of `size` cells.
    ///
    /// Returns `None` if the index would fall outside the grid.
    #[must_use]
    pub fn resolve(self, size: usize) -> Option<usize> {
        match self {
            Self::Start(k) => (k < size).then_some(k),
            Self::Middle => (size > 0).then_some(size / 2),
            Self::End(k) => size.checked_sub(k + 1),
        }
    }
}

/// A named set of black squares, mirrored under 180° rotation when applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlackPattern {
    name: &'static str,
    squares: &'static [(Anchor, Anchor)],
}

impl BlackPattern {
    /// No black squares at all.
    pub const OPEN: Self = Self::new("open", &[]);

    /// The built-in catalog, in a fixed order.
    pub const ALL: [Self; 7] = [
        Self::new("corner", &[(Anchor::Start(0), Anchor::End(0))]),
        Self::new(
            "four corners",
            &[
                (Anchor::Start(0), Anchor::End(0)),
                (Anchor::Start(0), Anchor::Start(0)),
            ],
        ),
        Self::new(
            "notch",
            &[
                (Anchor::Start(0), Anchor::End(0)),
                (Anchor::Start(1), Anchor::End(0)),
            ],
        ),
        Self::new("center", &[(Anchor::Middle, Anchor::Middle)]),
        Self::OPEN,
        Self::new(
            "staircase",
            &[
                (Anchor::Start(0), Anchor::End(0)),
                (Anchor::Start(1), Anchor::End(1)),
            ],
        ),
        Self::new("side bars", &[(Anchor::Middle, Anchor::Start(0))]),
    ];

    /// Creates a pattern from its base squares.
    ///
    /// Only one square of each symmetric pair needs to be listed.
    #[must_use]
    pub const fn new(name: &'static str, squares: &'static [(Anchor, Anchor)]) -> Self {
        Self { name, squares }
    }

    /// Picks a catalog entry by index, wrapping around.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Returns the pattern name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the black squares for a `rows`×`cols` grid, including the
    /// rotated partner of each base square.
    ///
    /// Squares whose anchors fall outside the grid are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use cruciform_core::Position;
    /// use cruciform_generator::BlackPattern;
    ///
    /// let corner = BlackPattern::from_index(0);
    /// let squares: Vec<_> = corner.squares(5, 5).into_iter().collect();
    /// assert_eq!(squares, [Position::new(0, 4), Position::new(4, 0)]);
    /// ```
    #[must_use]
    pub fn squares(&self, rows: usize, cols: usize) -> BTreeSet<Position> {
        let mut squares = BTreeSet::new();
        for &(row, col) in self.squares {
            let (Some(row), Some(col)) = (row.resolve(rows), col.resolve(cols)) else {
                continue;
            };
            squares.insert(Position::new(row, col));
            squares.insert(Position::new(rows - 1 - row, cols - 1 - col));
        }
        squares
    }

    /// Blacks out the pattern's squares on `grid`.
    ///
    /// Meant for fresh grids; squares that already hold a letter are left
    /// white.
    pub fn apply(&self, grid: &mut Grid) {
        for pos in self.squares(grid.rows(), grid.cols()) {
            grid.set_black(pos);
        }
    }
}

impl std::fmt::Display for BlackPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}
