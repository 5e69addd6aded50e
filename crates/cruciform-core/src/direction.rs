//! Word orientation.

use std::fmt::{self, Display};

/// The orientation of a placed word.
///
/// Crosswords only ever run left-to-right or top-to-bottom, so this is a
/// closed two-valued type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// Left to right along a row.
    Across,
    /// Top to bottom along a column.
    Down,
}

impl Direction {
    /// Both directions, across first.
    pub const ALL: [Self; 2] = [Self::Across, Self::Down];

    /// Returns the other direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use cruciform_core::Direction;
    ///
    /// assert_eq!(Direction::Across.perpendicular(), Direction::Down);
    /// assert_eq!(Direction::Down.perpendicular(), Direction::Across);
    /// ```
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }

    /// Returns `true` for [`Direction::Across`].
    #[must_use]
    pub const fn is_across(self) -> bool {
        matches!(self, Self::Across)
    }

    /// Returns `true` for [`Direction::Down`].
    #[must_use]
    pub const fn is_down(self) -> bool {
        matches!(self, Self::Down)
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Across => "across",
            Self::Down => "down",
        };
        f.write_str(name)
    }
}
