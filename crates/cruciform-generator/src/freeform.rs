//! Freeform generation on a scratch grid.

use std::{collections::HashSet, ops::RangeInclusive};

use cruciform_core::{CatalogEntry, Direction, Grid, Position, WordCatalog};
use log::{debug, info, trace};
use rand::seq::IndexedRandom as _;

use crate::{
    Completion, GenerateError, GeneratedPuzzle, PuzzleRng, PuzzleSeed,
    fill::{FillStop, Filler},
    pool,
};

/// Seed lengths preferred when no seed word is requested.
const PREFERRED_SEED_LENGTHS: RangeInclusive<usize> = 5..=8;

/// Tuning knobs for [`FreeformGenerator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeformConfig {
    /// Number of words to place.
    pub target_words: usize,
    /// Shortest candidate length.
    pub min_len: usize,
    /// Longest candidate length.
    pub max_len: usize,
    /// Side of the square scratch grid.
    pub grid_size: usize,
    /// Fresh attempts before giving up.
    pub max_attempts: usize,
    /// Consecutive fruitless passes that end an attempt.
    pub stuck_limit: usize,
}

impl Default for FreeformConfig {
    fn default() -> Self {
        Self {
            target_words: 7,
            min_len: 3,
            max_len: 10,
            grid_size: 20,
            max_attempts: 100,
            stuck_limit: 20,
        }
    }
}

impl FreeformConfig {
    /// Sets the target word count.
    #[must_use]
    pub fn with_target_words(mut self, target_words: usize) -> Self {
        self.target_words = target_words;
        self
    }

    /// Sets the inclusive candidate length range.
    #[must_use]
    pub fn with_length_range(mut self, min_len: usize, max_len: usize) -> Self {
        self.min_len = min_len;
        self.max_len = max_len;
        self
    }

    /// Sets the scratch grid size.
    #[must_use]
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Sets the attempt budget.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets the stuck limit.
    #[must_use]
    pub fn with_stuck_limit(mut self, stuck_limit: usize) -> Self {
        self.stuck_limit = stuck_limit;
        self
    }
}

/// A freeform puzzle, compacted to the bounding box of its letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeformPuzzle {
    /// The compacted grid.
    pub grid: Grid,
    /// Whether the target word count was reached.
    pub completion: Completion,
    /// Attempts spent.
    pub attempts: usize,
}

/// Generates compact freeform crosswords from a [`WordCatalog`].
///
/// Each attempt centres a seed word across the middle of an empty scratch
/// grid and greedily crosses words into it. The first attempt that reaches
/// the target wins; otherwise the attempt with the most words is returned
/// as [`Completion::UnderTarget`].
#[derive(Debug)]
pub struct FreeformGenerator<'a, C: ?Sized> {
    catalog: &'a C,
    config: FreeformConfig,
}

impl<'a, C> FreeformGenerator<'a, C>
where
    C: WordCatalog + ?Sized,
{
    /// Creates a generator with the default configuration.
    #[must_use]
    pub fn new(catalog: &'a C) -> Self {
        Self::with_config(catalog, FreeformConfig::default())
    }

    /// Creates a generator with a custom configuration.
    #[must_use]
    pub fn with_config(catalog: &'a C, config: FreeformConfig) -> Self {
        Self { catalog, config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &FreeformConfig {
        &self.config
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// `seed_word`, when given, anchors every attempt and must be among the
    /// filtered candidates (case-insensitive).
    ///
    /// # Errors
    ///
    /// See [`FreeformGenerator::generate_with_rng`].
    pub fn generate(
        &self,
        seed_word: Option<&str>,
    ) -> Result<GeneratedPuzzle<FreeformPuzzle>, GenerateError> {
        self.generate_with_seed(seed_word, PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// # Errors
    ///
    /// See [`FreeformGenerator::generate_with_rng`].
    pub fn generate_with_seed(
        &self,
        seed_word: Option<&str>,
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle<FreeformPuzzle>, GenerateError> {
        let puzzle = self.generate_with_rng(seed_word, &mut seed.rng())?;
        Ok(GeneratedPuzzle { puzzle, seed })
    }

    /// Generates a puzzle drawing all randomness from `rng`.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::InsufficientCandidates`] if fewer words than the
    ///   target fall within the length range.
    /// - [`GenerateError::SeedNotFound`] if `seed_word` is not a candidate.
    /// - [`GenerateError::NoPlacementPossible`] if no attempt could even
    ///   place its seed word.
    pub fn generate_with_rng(
        &self,
        seed_word: Option<&str>,
        rng: &mut PuzzleRng,
    ) -> Result<FreeformPuzzle, GenerateError> {
        let config = &self.config;
        let pool = pool::candidate_pool(
            self.catalog,
            config.min_len..=config.max_len,
            config.target_words,
        )?;
        let fixed_seed = seed_word
            .map(|text| pool::find_seed(&pool, text))
            .transpose()?;
        let filler = Filler::new(&pool, config.target_words, config.stuck_limit);

        let mut best: Option<Grid> = None;
        for attempt in 1..=config.max_attempts {
            let Some((grid, stop)) = self.attempt(&pool, fixed_seed, &filler, rng) else {
                debug!("attempt {attempt}: seed word did not fit");
                continue;
            };
            debug!("attempt {attempt}: placed {} words", grid.word_count());

            if stop == FillStop::TargetReached {
                info!(
                    "generated {} words after {attempt} attempts",
                    grid.word_count()
                );
                return Ok(FreeformPuzzle {
                    grid: grid.compact(),
                    completion: Completion::Complete,
                    attempts: attempt,
                });
            }
            if best
                .as_ref()
                .is_none_or(|best| grid.word_count() > best.word_count())
            {
                best = Some(grid);
            }
        }

        let attempts = config.max_attempts;
        let grid = best.ok_or(GenerateError::NoPlacementPossible { attempts })?;
        info!(
            "best attempt placed {} of {} words",
            grid.word_count(),
            config.target_words
        );
        Ok(FreeformPuzzle {
            grid: grid.compact(),
            completion: Completion::UnderTarget,
            attempts,
        })
    }

    /// Generates `count` puzzles, the `i`-th from `seed.derive(i)`.
    ///
    /// `seed_words[i]`, when present, anchors the `i`-th puzzle. Failed
    /// generations are logged and skipped, so fewer than `count` puzzles
    /// may be returned.
    pub fn generate_batch(
        &self,
        count: usize,
        seed_words: &[&str],
        seed: PuzzleSeed,
    ) -> Vec<GeneratedPuzzle<FreeformPuzzle>> {
        (0..count)
            .zip(0_u64..)
            .filter_map(|(i, index)| {
                let seed_word = seed_words.get(i).copied();
                match self.generate_with_seed(seed_word, seed.derive(index)) {
                    Ok(puzzle) => Some(puzzle),
                    Err(err) => {
                        info!("puzzle {} of {count} skipped: {err}", i + 1);
                        None
                    }
                }
            })
            .collect()
    }

    // Returns `None` if the seed word does not fit the scratch grid.
    fn attempt(
        &self,
        pool: &[&CatalogEntry],
        fixed_seed: Option<&CatalogEntry>,
        filler: &Filler<'_, '_>,
        rng: &mut PuzzleRng,
    ) -> Option<(Grid, FillStop)> {
        let size = self.config.grid_size;
        let seed = match fixed_seed {
            Some(entry) => entry,
            None => {
                let preferred: Vec<&CatalogEntry> = pool
                    .iter()
                    .copied()
                    .filter(|entry| PREFERRED_SEED_LENGTHS.contains(&entry.len()))
                    .collect();
                let choices = if preferred.is_empty() {
                    pool
                } else {
                    preferred.as_slice()
                };
                choices.choose(rng).copied()?
            }
        };

        let mut grid = Grid::new(size, size);
        let center = size / 2;
        let start = Position::new(center, center.checked_sub(seed.len() / 2)?);
        if let Err(err) = grid.place(
            seed.word(),
            seed.clue_or_placeholder(),
            start,
            Direction::Across,
        ) {
            trace!("seed {} rejected: {err}", seed.word());
            return None;
        }

        let mut used = HashSet::from([seed.word().clone()]);
        let stop = filler.fill(&mut grid, &mut used, rng, |_, _| true);
        Some((grid, stop))
    }
}
