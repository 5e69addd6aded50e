//! The crossword grid and its legality rules.

use std::{
    collections::{BTreeSet, HashMap},
    fmt::{self, Display},
};

use crate::{Cell, Direction, PlacedWord, Position, Word};

/// A candidate placement offered by [`Grid::find_intersections`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    /// First cell of the word.
    pub start: Position,
    /// Orientation of the word.
    pub direction: Direction,
    /// Number of covered cells that already hold the matching letter.
    pub overlap: usize,
}

/// The inclusive bounding box of the letter-bearing cells of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// Topmost row holding a letter.
    pub min_row: usize,
    /// Leftmost column holding a letter.
    pub min_col: usize,
    /// Bottommost row holding a letter.
    pub max_row: usize,
    /// Rightmost column holding a letter.
    pub max_col: usize,
}

impl Bounds {
    /// Returns the top-left corner.
    #[must_use]
    pub fn top_left(&self) -> Position {
        Position::new(self.min_row, self.min_col)
    }

    /// Returns the number of rows spanned.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.max_row - self.min_row + 1
    }

    /// Returns the number of columns spanned.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.max_col - self.min_col + 1
    }
}

/// Why a word cannot go where it was asked to.
///
/// Variants are reported in checking order: bounds, letters and
/// same-direction sharing first, then side adjacency, then run-ons at
/// either end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlacementError {
    /// A covered cell lies outside the grid.
    #[display("cell {pos} is outside the grid")]
    OutOfBounds {
        /// The offending cell.
        pos: Position,
    },
    /// A covered cell is black.
    #[display("cell {pos} is black")]
    BlackCell {
        /// The offending cell.
        pos: Position,
    },
    /// A covered cell already holds a different letter.
    #[display("cell {pos} holds {existing:?}, not {letter:?}")]
    LetterConflict {
        /// The offending cell.
        pos: Position,
        /// Letter already in the cell.
        existing: char,
        /// Letter the word needs there.
        letter: char,
    },
    /// A covered cell already belongs to a word running the same way, so
    /// the new word would extend or repeat it.
    #[display("cell {pos} already belongs to a word running the same way")]
    AlreadyCovered {
        /// The shared cell.
        pos: Position,
    },
    /// A newly lettered cell would touch a letter on its side, forming an
    /// unintended word.
    #[display("new letter at {pos} would touch a parallel word")]
    IllegalAdjacency {
        /// The newly lettered cell.
        pos: Position,
    },
    /// The cell just before or after the word holds a letter.
    #[display("word would run on into the letter at {pos}")]
    RunOn {
        /// The lettered cell beyond the word's end.
        pos: Position,
    },
}

/// A rectangular crossword grid.
///
/// The grid exclusively owns its cells and placed words and is only ever
/// mutated through [`Grid::place`] (plus [`Grid::set_black`] while it is
/// still empty). Every successful placement keeps these invariants:
///
/// - each covered cell of each placed word holds that word's letter;
/// - a newly lettered cell never touches a letter on its sides (so letters
///   used by a single word have no orthogonal neighbours);
/// - the cells just before and after every word are empty or off-grid;
/// - two words running the same way never share a cell;
/// - clue numbers run 1, 2, 3, ... in row-major order of start cells, and an
///   across and a down word sharing a start cell share its number.
///
/// # Examples
///
/// ```
/// use cruciform_core::{Direction, Grid, Position, Word};
///
/// let mut grid = Grid::new(9, 9);
/// grid.place(&Word::new("SALAH")?, "Prayer", Position::new(4, 2), Direction::Across)?;
///
/// let zakat = Word::new("ZAKAT")?;
/// let best = grid
///     .find_intersections(&zakat)
///     .into_iter()
///     .max_by_key(|p| p.overlap)
///     .unwrap();
/// grid.place(&zakat, "Almsgiving", best.start, best.direction)?;
///
/// let compact = grid.compact();
/// assert_eq!(compact.word_count(), 2);
/// assert_eq!(compact.bounds().unwrap().top_left().row(), 0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    words: Vec<PlacedWord>,
    // Letter-bearing cells in row-major order.
    filled: BTreeSet<Position>,
    next_number: u32,
}

impl Grid {
    /// Creates an empty grid of `rows` by `cols` white cells.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::default(); rows * cols],
            words: Vec::new(),
            filled: BTreeSet::new(),
            next_number: 1,
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row() < self.rows && pos.col() < self.cols
    }

    #[inline]
    fn offset(&self, pos: Position) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.row() * self.cols + pos.col())
    }

    /// Returns the cell at `pos`, or `None` if out of bounds.
    #[must_use]
    #[inline]
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.offset(pos).map(|i| &self.cells[i])
    }

    fn cell_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        self.offset(pos).map(|i| &mut self.cells[i])
    }

    /// Returns the letter at `pos`; `None` if empty, black or out of bounds.
    #[must_use]
    #[inline]
    pub fn letter(&self, pos: Position) -> Option<char> {
        self.cell(pos).and_then(Cell::letter)
    }

    fn has_letter(&self, pos: Option<Position>) -> bool {
        pos.is_some_and(|pos| self.letter(pos).is_some())
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> {
        let cols = self.cols.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Position::new(i / cols, i % cols), cell))
    }

    /// Blocks the cell at `pos`.
    ///
    /// Returns `false` (and changes nothing) if `pos` is out of bounds or the
    /// cell already holds a letter.
    pub fn set_black(&mut self, pos: Position) -> bool {
        match self.cell_mut(pos) {
            Some(cell) if cell.letter.is_none() => {
                cell.black = true;
                true
            }
            _ => false,
        }
    }

    /// Returns the placed words in placement order.
    #[must_use]
    pub fn words(&self) -> &[PlacedWord] {
        &self.words
    }

    /// Returns the number of placed words.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Returns the across words sorted by clue number.
    #[must_use]
    pub fn across_words(&self) -> Vec<&PlacedWord> {
        self.words_in(Direction::Across)
    }

    /// Returns the down words sorted by clue number.
    #[must_use]
    pub fn down_words(&self) -> Vec<&PlacedWord> {
        self.words_in(Direction::Down)
    }

    fn words_in(&self, direction: Direction) -> Vec<&PlacedWord> {
        let mut words: Vec<_> = self
            .words
            .iter()
            .filter(|word| word.direction == direction)
            .collect();
        words.sort_by_key(|word| word.number);
        words
    }

    /// Returns the number of letter-bearing cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.filled.len()
    }

    /// Returns the number of cells shared by two or more placed words.
    #[must_use]
    pub fn crossing_count(&self) -> usize {
        let mut usage: HashMap<Position, usize> = HashMap::new();
        for pos in self.words.iter().flat_map(PlacedWord::cells) {
            *usage.entry(pos).or_default() += 1;
        }
        usage.values().filter(|&&count| count > 1).count()
    }

    /// Checks whether `word` may be placed at `start` running `direction`.
    ///
    /// Has no side effects.
    ///
    /// # Errors
    ///
    /// Returns the first [`PlacementError`] describing a broken rule.
    pub fn check_placement(
        &self,
        word: &Word,
        start: Position,
        direction: Direction,
    ) -> Result<(), PlacementError> {
        for (i, &letter) in word.letters().iter().enumerate() {
            let pos = start.forward(direction, i);
            let cell = self.cell(pos).ok_or(PlacementError::OutOfBounds { pos })?;
            if cell.black {
                return Err(PlacementError::BlackCell { pos });
            }
            match cell.letter {
                Some(existing) if existing != letter => {
                    return Err(PlacementError::LetterConflict {
                        pos,
                        existing,
                        letter,
                    });
                }
                Some(_) if self.covered_along(pos, direction) => {
                    return Err(PlacementError::AlreadyCovered { pos });
                }
                _ => {}
            }
        }

        // Only cells that gain a letter are checked; existing letters are
        // crossings with a perpendicular word.
        for i in 0..word.len() {
            let pos = start.forward(direction, i);
            if self.letter(pos).is_none()
                && pos
                    .side_neighbors(direction)
                    .into_iter()
                    .any(|side| self.has_letter(side))
            {
                return Err(PlacementError::IllegalAdjacency { pos });
            }
        }

        let before = start.backward(direction, 1);
        let after = Some(start.forward(direction, word.len()));
        for pos in [before, after].into_iter().flatten() {
            if self.letter(pos).is_some() {
                return Err(PlacementError::RunOn { pos });
            }
        }

        Ok(())
    }

    // Whether a placed word running `direction` already covers `pos`.
    fn covered_along(&self, pos: Position, direction: Direction) -> bool {
        self.words
            .iter()
            .any(|word| word.direction == direction && word.covers(pos))
    }

    /// Returns `true` if `word` may be placed at `start` running `direction`.
    #[must_use]
    pub fn can_place(&self, word: &Word, start: Position, direction: Direction) -> bool {
        self.check_placement(word, start, direction).is_ok()
    }

    /// Places `word` on the grid and returns its record.
    ///
    /// The start cell keeps its number if it already has one (a co-starting
    /// word); otherwise the next number is allocated. Numbers are then
    /// re-sequenced in row-major order, so the returned record carries the
    /// number in force right after this placement.
    ///
    /// # Errors
    ///
    /// Returns the [`PlacementError`] from [`Grid::check_placement`]; the grid
    /// is left untouched.
    pub fn place(
        &mut self,
        word: &Word,
        clue: impl Into<String>,
        start: Position,
        direction: Direction,
    ) -> Result<PlacedWord, PlacementError> {
        self.check_placement(word, start, direction)?;

        let next_number = self.next_number;
        let Some(start_cell) = self.cell_mut(start) else {
            return Err(PlacementError::OutOfBounds { pos: start });
        };
        let number = match start_cell.number {
            Some(number) => number,
            None => {
                start_cell.number = Some(next_number);
                self.next_number += 1;
                next_number
            }
        };

        for (i, &letter) in word.letters().iter().enumerate() {
            let pos = start.forward(direction, i);
            if let Some(cell) = self.cell_mut(pos) {
                cell.letter = Some(letter);
            }
            self.filled.insert(pos);
        }

        let index = self.words.len();
        self.words.push(PlacedWord {
            word: word.clone(),
            clue: clue.into(),
            start,
            direction,
            number,
        });
        self.resequence();

        Ok(self.words[index].clone())
    }

    // Renumbers start cells 1.. in row-major order.
    fn resequence(&mut self) {
        let starts: BTreeSet<Position> = self.words.iter().map(|word| word.start).collect();

        for cell in &mut self.cells {
            cell.number = None;
        }
        let mut numbers = HashMap::with_capacity(starts.len());
        for (number, &pos) in (1..).zip(&starts) {
            if let Some(cell) = self.cell_mut(pos) {
                cell.number = Some(number);
            }
            numbers.insert(pos, number);
        }
        for word in &mut self.words {
            word.number = numbers[&word.start];
        }

        #[expect(clippy::cast_possible_truncation)]
        let count = starts.len() as u32;
        self.next_number = count + 1;
    }

    /// Finds every legal placement of `word` that crosses an existing letter.
    ///
    /// For each lettered cell (row-major) and each index at which `word` has
    /// that letter, the across and the down alignment through that cell are
    /// tried in that order. Legal ones are reported with their overlap: the
    /// number of covered cells that already hold the right letter. The same
    /// placement can be reported once per shared letter.
    #[must_use]
    pub fn find_intersections(&self, word: &Word) -> Vec<Placement> {
        let mut placements = Vec::new();
        for &pos in &self.filled {
            let Some(letter) = self.letter(pos) else {
                continue;
            };
            for (i, _) in word
                .letters()
                .iter()
                .enumerate()
                .filter(|&(_, &ch)| ch == letter)
            {
                for direction in Direction::ALL {
                    let Some(start) = pos.backward(direction, i) else {
                        continue;
                    };
                    if self.can_place(word, start, direction) {
                        placements.push(Placement {
                            start,
                            direction,
                            overlap: self.overlap(word, start, direction),
                        });
                    }
                }
            }
        }
        placements
    }

    fn overlap(&self, word: &Word, start: Position, direction: Direction) -> usize {
        (0..word.len())
            .filter(|&i| self.letter(start.forward(direction, i)).is_some())
            .count()
    }

    /// Returns the bounding box of the lettered cells, or `None` if there
    /// are none.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        let first = self.filled.first()?;
        let last = self.filled.last()?;
        let (min_col, max_col) = self
            .filled
            .iter()
            .fold((usize::MAX, 0), |(min, max), pos| {
                (min.min(pos.col()), max.max(pos.col()))
            });
        Some(Bounds {
            min_row: first.row(),
            min_col,
            max_row: last.row(),
            max_col,
        })
    }

    /// Returns a copy cropped to [`Grid::bounds`], re-based to the origin.
    ///
    /// Letters, black cells inside the box, numbers and the placed-word list
    /// are preserved exactly, translated by the same offset. A grid without
    /// letters compacts to a 0×0 grid.
    #[must_use]
    pub fn compact(&self) -> Self {
        let Some(bounds) = self.bounds() else {
            return Self::new(0, 0);
        };
        let origin = bounds.top_left();
        let shift = |pos: Position| {
            Position::new(pos.row() - origin.row(), pos.col() - origin.col())
        };

        let mut grid = Self::new(bounds.rows(), bounds.cols());
        for (pos, cell) in self.cells() {
            if let Some(target) = pos.relative_to(origin).and_then(|rel| grid.cell_mut(rel)) {
                *target = *cell;
            }
        }
        grid.filled = self.filled.iter().map(|&pos| shift(pos)).collect();
        grid.words = self
            .words
            .iter()
            .map(|word| PlacedWord {
                start: shift(word.start),
                ..word.clone()
            })
            .collect();
        grid.next_number = self.next_number;
        grid
    }
}

impl Display for Grid {
    /// Renders one text line per row: letters, `.` for empty cells and `#`
    /// for black cells, separated by spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols {
                if col > 0 {
                    f.write_str(" ")?;
                }
                let ch = match self.cell(Position::new(row, col)) {
                    Some(Cell {
                        letter: Some(letter),
                        ..
                    }) => *letter,
                    Some(Cell { black: true, .. }) => '#',
                    _ => '.',
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::testing::assert_grid_invariants;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn place(grid: &mut Grid, text: &str, row: usize, col: usize, direction: Direction) {
        grid.place(&word(text), format!("[{text}]"), Position::new(row, col), direction)
            .unwrap();
    }

    #[test]
    fn test_can_place_in_empty_grid() {
        let grid = Grid::new(5, 5);
        let cat = word("CAT");
        assert!(grid.can_place(&cat, Position::new(0, 0), Direction::Across));
        assert!(grid.can_place(&cat, Position::new(2, 4), Direction::Down));
        assert_eq!(
            grid.check_placement(&cat, Position::new(0, 3), Direction::Across),
            Err(PlacementError::OutOfBounds {
                pos: Position::new(0, 5)
            })
        );
        assert!(!grid.can_place(&cat, Position::new(3, 0), Direction::Down));
    }

    #[test]
    fn test_black_cells_block_placement() {
        let mut grid = Grid::new(5, 5);
        assert!(grid.set_black(Position::new(0, 2)));
        assert!(!grid.set_black(Position::new(5, 0)));
        assert_eq!(
            grid.check_placement(&word("CAT"), Position::new(0, 0), Direction::Across),
            Err(PlacementError::BlackCell {
                pos: Position::new(0, 2)
            })
        );
        assert!(grid.can_place(&word("CAT"), Position::new(1, 0), Direction::Across));
    }

    #[test]
    fn test_set_black_refuses_lettered_cell() {
        let mut grid = Grid::new(5, 5);
        place(&mut grid, "CAT", 0, 0, Direction::Across);
        assert!(!grid.set_black(Position::new(0, 1)));
        assert_eq!(grid.letter(Position::new(0, 1)), Some('A'));
    }

    #[test]
    fn test_letter_conflict_and_crossing() {
        let mut grid = Grid::new(5, 5);
        place(&mut grid, "CAT", 1, 0, Direction::Across);
        assert_eq!(
            grid.check_placement(&word("DOG"), Position::new(0, 1), Direction::Down),
            Err(PlacementError::LetterConflict {
                pos: Position::new(1, 1),
                existing: 'A',
                letter: 'O',
            })
        );
        assert!(grid.can_place(&word("BAR"), Position::new(0, 1), Direction::Down));
    }

    #[test]
    fn test_adjacent_parallel_word_is_rejected() {
        let mut grid = Grid::new(6, 6);
        place(&mut grid, "CAT", 2, 1, Direction::Across);
        assert_eq!(
            grid.check_placement(&word("DOG"), Position::new(3, 1), Direction::Across),
            Err(PlacementError::IllegalAdjacency {
                pos: Position::new(3, 1)
            })
        );
        assert_eq!(
            grid.check_placement(&word("ODD"), Position::new(0, 0), Direction::Down),
            Err(PlacementError::IllegalAdjacency {
                pos: Position::new(2, 0)
            })
        );
        // Diagonal contact is fine.
        assert!(grid.can_place(&word("ODD"), Position::new(3, 0), Direction::Down));
        assert!(grid.can_place(&word("OX"), Position::new(3, 4), Direction::Across));
    }

    #[test]
    fn test_run_on_is_rejected() {
        let mut grid = Grid::new(3, 9);
        place(&mut grid, "CAT", 1, 3, Direction::Across);
        assert_eq!(
            grid.check_placement(&word("DOG"), Position::new(1, 0), Direction::Across),
            Err(PlacementError::RunOn {
                pos: Position::new(1, 3)
            })
        );
        assert_eq!(
            grid.check_placement(&word("DOG"), Position::new(1, 6), Direction::Across),
            Err(PlacementError::RunOn {
                pos: Position::new(1, 5)
            })
        );
        assert!(!grid.can_place(&word("DOG"), Position::new(1, 7), Direction::Across));
        assert!(grid.can_place(&word("OX"), Position::new(1, 7), Direction::Across));
    }

    #[test]
    fn test_word_cannot_extend_same_direction_word() {
        let mut grid = Grid::new(12, 12);
        place(&mut grid, "CRATE", 7, 5, Direction::Across);
        place(&mut grid, "TAR", 7, 8, Direction::Down);
        let before = grid.clone();

        // STAR down would swallow TAR.
        assert_eq!(
            grid.place(&word("STAR"), "Sun", Position::new(6, 8), Direction::Down),
            Err(PlacementError::AlreadyCovered {
                pos: Position::new(7, 8)
            })
        );
        // ATE across lies inside CRATE.
        assert_eq!(
            grid.check_placement(&word("ATE"), Position::new(7, 7), Direction::Across),
            Err(PlacementError::AlreadyCovered {
                pos: Position::new(7, 7)
            })
        );
        assert_eq!(grid, before);
        assert_eq!(grid.letter(Position::new(6, 8)), None);
        assert_grid_invariants(&grid);
    }

    #[test]
    fn test_word_cannot_repeat_same_span() {
        let mut grid = Grid::new(12, 12);
        place(&mut grid, "CRATE", 7, 5, Direction::Across);
        assert_eq!(
            grid.check_placement(&word("CRATE"), Position::new(7, 5), Direction::Across),
            Err(PlacementError::AlreadyCovered {
                pos: Position::new(7, 5)
            })
        );
        assert!(!grid.can_place(&word("CRATE"), Position::new(7, 5), Direction::Across));
        assert_eq!(grid.word_count(), 1);
        assert_grid_invariants(&grid);
    }

    #[test]
    fn test_failed_place_leaves_grid_untouched() {
        let mut grid = Grid::new(5, 5);
        place(&mut grid, "CAT", 0, 0, Direction::Across);
        let before = grid.clone();
        let err = grid
            .place(&word("CAR"), "Vehicle", Position::new(0, 0), Direction::Across)
            .unwrap_err();
        assert!(matches!(err, PlacementError::LetterConflict { .. }));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_co_starting_words_share_number() {
        let mut grid = Grid::new(5, 5);
        let cat = grid
            .place(&word("CAT"), "Feline", Position::new(0, 0), Direction::Across)
            .unwrap();
        let car = grid
            .place(&word("CAR"), "Vehicle", Position::new(0, 0), Direction::Down)
            .unwrap();
        assert_eq!(cat.number(), 1);
        assert_eq!(car.number(), 1);
        assert_eq!(grid.cell(Position::new(0, 0)).unwrap().number(), Some(1));
        assert_eq!(grid.crossing_count(), 1);
        assert_grid_invariants(&grid);
    }

    #[test]
    fn test_numbers_follow_reading_order() {
        let mut grid = Grid::new(9, 9);
        place(&mut grid, "SALAH", 4, 2, Direction::Across);
        // A later word starting higher up takes number 1.
        place(&mut grid, "HAJJ", 3, 3, Direction::Down);
        let numbers: Vec<_> = grid
            .words()
            .iter()
            .map(|w| (w.word().as_str(), w.number()))
            .collect();
        assert_eq!(numbers, [("SALAH", 2), ("HAJJ", 1)]);
        assert_eq!(grid.down_words()[0].word().as_str(), "HAJJ");
        assert_eq!(grid.across_words()[0].number(), 2);
        assert_eq!(grid.cell(Position::new(3, 3)).unwrap().number(), Some(1));
        assert_grid_invariants(&grid);
    }

    #[test]
    fn test_find_intersections_single_crossing() {
        let mut grid = Grid::new(7, 7);
        place(&mut grid, "CAT", 1, 1, Direction::Across);
        assert_eq!(
            grid.find_intersections(&word("TEA")),
            [Placement {
                start: Position::new(1, 3),
                direction: Direction::Down,
                overlap: 1,
            }]
        );
        assert!(grid.find_intersections(&word("OX")).is_empty());
    }

    #[test]
    fn test_find_intersections_counts_all_overlaps() {
        let mut grid = Grid::new(7, 7);
        place(&mut grid, "CAT", 1, 1, Direction::Across);
        place(&mut grid, "TEA", 1, 3, Direction::Down);
        place(&mut grid, "COT", 1, 1, Direction::Down);
        // Row 3 now reads T.A; TWA fits across both letters and is found
        // once through each of them.
        let expected = Placement {
            start: Position::new(3, 1),
            direction: Direction::Across,
            overlap: 2,
        };
        assert_eq!(grid.find_intersections(&word("TWA")), [expected, expected]);
    }

    #[test]
    fn test_bounds_and_compact() {
        let mut grid = Grid::new(20, 20);
        assert_eq!(grid.bounds(), None);
        assert_eq!(grid.compact(), Grid::new(0, 0));

        place(&mut grid, "SALAH", 10, 8, Direction::Across);
        place(&mut grid, "HAJJ", 10, 12, Direction::Down);
        let bounds = grid.bounds().unwrap();
        assert_eq!(
            bounds,
            Bounds {
                min_row: 10,
                min_col: 8,
                max_row: 13,
                max_col: 12,
            }
        );

        let compact = grid.compact();
        assert_eq!((compact.rows(), compact.cols()), (4, 5));
        assert_eq!(compact.words()[0].start(), Position::new(0, 0));
        assert_eq!(compact.words()[1].start(), Position::new(0, 4));
        assert_eq!(compact.letter(Position::new(3, 4)), Some('J'));
        assert_eq!(compact.to_string(), "S A L A H\n. . . . A\n. . . . J\n. . . . J");
        assert_eq!(compact.compact(), compact);
        assert_grid_invariants(&compact);
    }

    #[test]
    fn test_display_marks_black_cells() {
        let mut grid = Grid::new(2, 3);
        grid.set_black(Position::new(1, 2));
        place(&mut grid, "OX", 0, 0, Direction::Across);
        assert_eq!(grid.to_string(), "O X .\n. . #");
    }

    const WORDS: &[&str] = &[
        "CAT", "CAR", "ART", "TAR", "RAT", "ARC", "CART", "STAR", "RATS", "ACTS", "SCAT", "TRACT",
        "CRATE", "REACT", "TRACE", "ASTER",
    ];

    fn arb_moves() -> impl Strategy<Value = Vec<(usize, usize, usize, bool)>> {
        prop::collection::vec(
            (0..WORDS.len(), 0_usize..12, 0_usize..12, any::<bool>()),
            1..80,
        )
    }

    fn direction(across: bool) -> Direction {
        if across {
            Direction::Across
        } else {
            Direction::Down
        }
    }

    proptest! {
        #[test]
        fn test_arbitrary_placements_keep_invariants(moves in arb_moves()) {
            let mut grid = Grid::new(12, 12);
            for (w, row, col, across) in moves {
                let _ = grid.place(&word(WORDS[w]), "", Position::new(row, col), direction(across));
            }
            assert_grid_invariants(&grid);

            let compact = grid.compact();
            assert_grid_invariants(&compact);
            prop_assert_eq!(compact.compact(), compact.clone());
            prop_assert_eq!(compact.word_count(), grid.word_count());
            if let Some(bounds) = grid.bounds() {
                let origin = bounds.top_left();
                for (pos, cell) in grid.cells() {
                    if let Some(letter) = cell.letter() {
                        let moved = pos.relative_to(origin).unwrap();
                        prop_assert_eq!(compact.letter(moved), Some(letter));
                    }
                }
                let inner = compact.bounds().unwrap();
                prop_assert_eq!(inner.top_left(), Position::new(0, 0));
                prop_assert_eq!((inner.rows(), inner.cols()), (compact.rows(), compact.cols()));
            }
        }

        #[test]
        fn test_intersection_driven_fill_keeps_invariants(
            picks in prop::collection::vec((0..WORDS.len(), any::<prop::sample::Index>()), 1..40)
        ) {
            let mut grid = Grid::new(15, 15);
            place(&mut grid, "CRATE", 7, 5, Direction::Across);
            for (w, index) in picks {
                let candidate = word(WORDS[w]);
                let spots = grid.find_intersections(&candidate);
                if spots.is_empty() {
                    continue;
                }
                let spot = spots[index.index(spots.len())];
                prop_assert!(spot.overlap >= 1);
                grid.place(&candidate, "", spot.start, spot.direction).unwrap();
            }
            assert_grid_invariants(&grid);
        }
    }
}
