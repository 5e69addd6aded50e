//! Test utilities for code that builds grids.
//!
//! [`assert_grid_invariants`] checks the structural guarantees a [`Grid`]
//! makes to its consumers. Generators run it over their output.
//!
//! # Example
//!
//! ```
//! use cruciform_core::{Direction, Grid, Position, Word, testing::assert_grid_invariants};
//!
//! let mut grid = Grid::new(7, 7);
//! grid.place(&Word::new("CRATE")?, "Box", Position::new(3, 1), Direction::Across)?;
//! grid.place(&Word::new("TAR")?, "Pitch", Position::new(3, 4), Direction::Down)?;
//! assert_grid_invariants(&grid);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::collections::{BTreeSet, HashMap};

use crate::{Cell, Grid, PlacedWord, Position};

/// Panics unless `grid` satisfies every structural invariant:
///
/// - each covered cell holds its word's letter and every letter is covered;
/// - black cells hold no letters;
/// - no word runs on into a letter at either end;
/// - two words running the same way never share a cell;
/// - a cell used by a single word has no lettered side neighbours;
/// - clue numbers run 1, 2, 3, ... over start cells in row-major order.
///
/// # Panics
///
/// Panics with a message naming the first broken invariant.
#[track_caller]
pub fn assert_grid_invariants(grid: &Grid) {
    let has_letter = |pos: Option<Position>| pos.and_then(|pos| grid.letter(pos)).is_some();

    let mut coverage: HashMap<Position, Vec<&PlacedWord>> = HashMap::new();
    for placed in grid.words() {
        for (pos, letter) in placed.letter_cells() {
            assert_eq!(grid.letter(pos), Some(letter), "letter mismatch at {pos}");
            coverage.entry(pos).or_default().push(placed);
        }
        let before = placed.start().backward(placed.direction(), 1);
        let after = Some(placed.end().forward(placed.direction(), 1));
        assert!(!has_letter(before), "run-on before {}", placed.word());
        assert!(!has_letter(after), "run-on after {}", placed.word());
    }

    for (pos, cell) in grid.cells() {
        assert!(
            !(cell.is_black() && cell.is_filled()),
            "black cell {pos} holds a letter"
        );
        assert_eq!(
            cell.is_filled(),
            coverage.contains_key(&pos),
            "stray letter at {pos}"
        );
    }

    for (pos, words) in &coverage {
        match words.as_slice() {
            [only] => {
                for side in pos.side_neighbors(only.direction()) {
                    assert!(!has_letter(side), "{pos} touches a parallel letter");
                }
            }
            [first, second] => assert_ne!(
                first.direction(),
                second.direction(),
                "{} and {} share {pos} running the same way",
                first.word(),
                second.word()
            ),
            _ => panic!("{pos} is covered by {} words", words.len()),
        }
    }

    let starts: BTreeSet<Position> = grid.words().iter().map(PlacedWord::start).collect();
    for (expected, &start) in (1..).zip(&starts) {
        assert_eq!(
            grid.cell(start).and_then(Cell::number),
            Some(expected),
            "wrong number at {start}"
        );
    }
    for placed in grid.words() {
        assert_eq!(
            grid.cell(placed.start()).and_then(Cell::number),
            Some(placed.number()),
            "{} carries a stale number",
            placed.word()
        );
    }
    let numbered = grid
        .cells()
        .filter(|(_, cell)| cell.number().is_some())
        .count();
    assert_eq!(numbered, starts.len(), "numbered cells without a word");
}
