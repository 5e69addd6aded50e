//! Words committed to a grid.

use crate::{Direction, Position, Word};

/// A word placed on a [`Grid`](crate::Grid), with its clue and number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    pub(crate) word: Word,
    pub(crate) clue: String,
    pub(crate) start: Position,
    pub(crate) direction: Direction,
    pub(crate) number: u32,
}

impl PlacedWord {
    /// Returns the answer word.
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// Returns the clue text (possibly a `[WORD]` placeholder).
    #[must_use]
    pub fn clue(&self) -> &str {
        &self.clue
    }

    /// Returns the first cell of the word.
    #[must_use]
    pub fn start(&self) -> Position {
        self.start
    }

    /// Returns the orientation.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the clue number.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Returns the number of cells covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    /// Always `false`; placed words are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Returns the last cell of the word.
    ///
    /// # Examples
    ///
    /// ```
    /// use cruciform_core::{Direction, Grid, Position, Word};
    ///
    /// let mut grid = Grid::new(5, 5);
    /// let placed = grid.place(&Word::new("NUR")?, "Light", Position::new(1, 0), Direction::Down)?;
    /// assert_eq!(placed.end(), Position::new(3, 0));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn end(&self) -> Position {
        self.start.forward(self.direction, self.len() - 1)
    }

    /// Iterates over the covered cells in reading order.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.len()).map(|i| self.start.forward(self.direction, i))
    }

    /// Iterates over `(position, letter)` pairs for every covered cell.
    pub fn letter_cells(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.cells().zip(self.word.letters().iter().copied())
    }

    /// Returns `true` if the word covers `pos`.
    #[must_use]
    pub fn covers(&self, pos: Position) -> bool {
        let (start, end) = (self.start, self.end());
        match self.direction {
            Direction::Across => {
                pos.row() == start.row() && (start.col()..=end.col()).contains(&pos.col())
            }
            Direction::Down => {
                pos.col() == start.col() && (start.row()..=end.row()).contains(&pos.row())
            }
        }
    }
}
