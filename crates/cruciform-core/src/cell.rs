//! Grid cells.

/// A single square of the grid.
///
/// A cell is either black (blocked), empty, or holds a letter. Black cells
/// never hold letters. A numbered cell is the start of at least one placed
/// word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    pub(crate) letter: Option<char>,
    pub(crate) black: bool,
    pub(crate) number: Option<u32>,
}

impl Cell {
    /// Returns the letter in this cell, if any.
    #[must_use]
    #[inline]
    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    /// Returns `true` if the cell is blocked.
    #[must_use]
    #[inline]
    pub fn is_black(&self) -> bool {
        self.black
    }

    /// Returns the clue number stamped on this cell, if any.
    #[must_use]
    #[inline]
    pub fn number(&self) -> Option<u32> {
        self.number
    }

    /// Returns `true` for a white cell with no letter.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.letter.is_none() && !self.black
    }

    /// Returns `true` if the cell holds a letter.
    #[must_use]
    #[inline]
    pub fn is_filled(&self) -> bool {
        self.letter.is_some()
    }
}
