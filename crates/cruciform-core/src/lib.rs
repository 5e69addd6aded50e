//! Core data structures for crossword construction.
//!
//! This crate holds the puzzle state that generators mutate and that
//! downstream consumers (exporters, trackers, front ends) read. It has no
//! randomness and performs no I/O.
//!
//! # Overview
//!
//! 1. **Coordinates** - [`Position`] and the closed two-valued [`Direction`].
//! 2. **Words** - [`Word`] (validated uppercase letters), [`CatalogEntry`]
//!    (a word with optional clue and score), and the [`WordCatalog`]
//!    capability with its in-memory implementation [`WordList`].
//! 3. **Grid** - [`Grid`] owns every [`Cell`] and [`PlacedWord`] and enforces
//!    crossword legality: no letter conflicts, no accidental adjacency, no
//!    run-ons, no parallel words sharing a cell, and row-major clue
//!    numbering.
//! 4. **Testing** - [`testing::assert_grid_invariants`] checks all of these
//!    on any grid, for use in downstream tests.
//!
//! # Examples
//!
//! ```
//! use cruciform_core::{Direction, Grid, Position, Word};
//!
//! let mut grid = Grid::new(7, 7);
//! let cat = Word::new("cat")?;
//! grid.place(&cat, "Feline", Position::new(3, 2), Direction::Across)?;
//!
//! // CAR can hang down from the C of CAT.
//! let car = Word::new("CAR")?;
//! let spots = grid.find_intersections(&car);
//! assert!(spots.iter().any(|p| p.direction == Direction::Down));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod catalog;
pub mod cell;
pub mod direction;
pub mod grid;
pub mod placed_word;
pub mod position;
pub mod testing;
pub mod word;

pub use self::{
    catalog::{CatalogEntry, WordCatalog, WordList},
    cell::Cell,
    direction::Direction,
    grid::{Bounds, Grid, Placement, PlacementError},
    placed_word::PlacedWord,
    position::Position,
    word::{Word, WordError},
};
