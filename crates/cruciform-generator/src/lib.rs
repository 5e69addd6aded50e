//! Crossword puzzle generation.
//!
//! Generators repeatedly build a fresh [`Grid`](cruciform_core::Grid), anchor
//! it with a seed word and greedily add words that cross the letters already
//! placed, keeping the best attempt within a retry budget.
//!
//! - [`FreeformGenerator`] works on a large scratch grid and returns the
//!   result compacted to its bounding box. The first attempt that reaches the
//!   target word count wins.
//! - [`BoundedGenerator`] fills an exact N×N grid shaped by a symmetric
//!   [`BlackPattern`] and keeps the highest-[scoring](score_grid) attempt.
//!
//! A [`Theme`] narrows a [`WordList`](cruciform_core::WordList) to one
//! subject before it is handed to a generator.
//!
//! Every source of randomness is an explicit [`PuzzleRng`]. Seeding one from
//! a [`PuzzleSeed`] makes generation fully reproducible.
//!
//! # Examples
//!
//! ```
//! use cruciform_core::{CatalogEntry, WordList};
//! use cruciform_generator::{FreeformConfig, FreeformGenerator, PuzzleSeed};
//!
//! let words: WordList = [("CAT", "Feline"), ("CAR", "Vehicle"), ("ART", "Craft")]
//!     .into_iter()
//!     .map(|(word, clue)| CatalogEntry::from_text(word).map(|e| e.with_clue(clue)))
//!     .collect::<Result<_, _>>()?;
//!
//! let config = FreeformConfig::default()
//!     .with_target_words(3)
//!     .with_length_range(3, 3);
//! let generator = FreeformGenerator::with_config(&words, config);
//! let seed = PuzzleSeed::from_bytes([7; 32]);
//!
//! let first = generator.generate_with_seed(None, seed)?;
//! let again = generator.generate_with_seed(None, seed)?;
//! assert_eq!(first.puzzle.grid, again.puzzle.grid);
//! assert!(first.puzzle.grid.word_count() >= 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    bounded::{BoundedConfig, BoundedGenerator, BoundedPuzzle},
    freeform::{FreeformConfig, FreeformGenerator, FreeformPuzzle},
    pattern::{Anchor, BlackPattern},
    score::{MAX_SCORE, score_grid},
    seed::{PuzzleRng, PuzzleSeed, PuzzleSeedParseError},
    theme::{MIN_THEMED_WORDS, Theme, ThemeParseError},
};

mod bounded;
mod fill;
mod freeform;
mod pattern;
mod pool;
mod score;
mod seed;
mod theme;

/// Errors reported by the generators.
///
/// All of these are recoverable: callers typically relax the target or
/// the length range and try again.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GenerateError {
    /// Fewer usable words than the target after length filtering.
    #[display("only {available} candidate words available for a target of {target}")]
    InsufficientCandidates {
        /// Candidates left after filtering.
        available: usize,
        /// Requested word count.
        target: usize,
    },
    /// The requested seed word is not among the filtered candidates.
    #[display("seed word {word:?} is not among the candidates")]
    SeedNotFound {
        /// The requested seed, uppercased.
        word: String,
    },
    /// No attempt managed to place even the seed word.
    #[display("no placement possible in {attempts} attempts")]
    NoPlacementPossible {
        /// Attempts run.
        attempts: usize,
    },
    /// Attempts were seeded but none produced an acceptable grid.
    #[display("no acceptable grid after {attempts} attempts")]
    AttemptsExhausted {
        /// Attempts run.
        attempts: usize,
    },
}

/// Whether a generated puzzle met its target word count.
///
/// An under-target puzzle is still a valid, usable result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Completion {
    /// The target word count was reached.
    Complete,
    /// The attempt budget ran out first; this is the best attempt found.
    UnderTarget,
}

/// A generated puzzle together with the seed that reproduces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle<P> {
    /// The puzzle.
    pub puzzle: P,
    /// Seed that regenerates `puzzle` from the same catalog and config.
    pub seed: PuzzleSeed,
}
