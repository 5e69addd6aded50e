//! Bounded generation into an exact N×N grid.

use std::{collections::HashSet, ops::RangeInclusive};

use cruciform_core::{CatalogEntry, Direction, Grid, Placement, Position, Word, WordCatalog};
use log::{debug, info, trace};
use rand::seq::IndexedRandom as _;

use crate::{
    BlackPattern, Completion, GenerateError, GeneratedPuzzle, PuzzleRng, PuzzleSeed,
    fill::Filler, pool, score::score_grid,
};

/// Tuning knobs for [`BoundedGenerator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedConfig {
    /// Side of the square grid.
    pub size: usize,
    /// Number of words to place.
    pub target_words: usize,
    /// Shortest candidate length.
    pub min_len: usize,
    /// Longest candidate length; `None` means `size`. Always clamped to
    /// `size`.
    pub max_len: Option<usize>,
    /// Fresh attempts before giving up.
    pub max_attempts: usize,
    /// Consecutive fruitless passes that end an attempt.
    pub stuck_limit: usize,
    /// A qualifying attempt scoring at least this ends the search early.
    pub good_enough_score: u32,
    /// Attempts with fewer words are discarded.
    pub min_words: usize,
    /// Fixed catalog index into [`BlackPattern::ALL`]; random when `None`.
    pub pattern: Option<usize>,
}

impl Default for BoundedConfig {
    fn default() -> Self {
        Self {
            size: 5,
            target_words: 6,
            min_len: 2,
            max_len: None,
            max_attempts: 200,
            stuck_limit: 30,
            good_enough_score: 80,
            min_words: 3,
            pattern: None,
        }
    }
}

impl BoundedConfig {
    /// Sets the grid size. An explicit `max_len` is kept, and clamped to
    /// the new size when candidates are drawn.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

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
        self.max_len = Some(max_len);
        self
    }

    /// Returns the candidate lengths actually drawn: `min_len` up to
    /// `max_len`, never past `size`.
    #[must_use]
    pub fn length_range(&self) -> RangeInclusive<usize> {
        let max_len = self.max_len.unwrap_or(self.size).min(self.size);
        self.min_len..=max_len
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

    /// Sets the early-exit score.
    #[must_use]
    pub fn with_good_enough_score(mut self, score: u32) -> Self {
        self.good_enough_score = score;
        self
    }

    /// Sets the minimum word count of a usable attempt.
    #[must_use]
    pub fn with_min_words(mut self, min_words: usize) -> Self {
        self.min_words = min_words;
        self
    }

    /// Fixes the black-square pattern by catalog index.
    #[must_use]
    pub fn with_pattern(mut self, pattern: Option<usize>) -> Self {
        self.pattern = pattern;
        self
    }
}

/// A bounded puzzle. The grid keeps its full N×N shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedPuzzle {
    /// The grid, black squares included.
    pub grid: Grid,
    /// Quality score, see [`score_grid`].
    pub score: u32,
    /// The black-square pattern the grid was built on.
    pub pattern: BlackPattern,
    /// Whether the target word count was reached.
    pub completion: Completion,
    /// Attempts spent.
    pub attempts: usize,
}

/// Generates exact-size crosswords from a [`WordCatalog`].
///
/// Each attempt applies a symmetric [`BlackPattern`], places a seed word in
/// the top row and greedily crosses words into the grid. Attempts reaching
/// the target compete on [`score_grid`]; one short of the target is kept
/// as a fallback.
#[derive(Debug)]
pub struct BoundedGenerator<'a, C: ?Sized> {
    catalog: &'a C,
    config: BoundedConfig,
}

// Why a bounded attempt produced no grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    Unseeded,
    TooFewWords,
}

impl<'a, C> BoundedGenerator<'a, C>
where
    C: WordCatalog + ?Sized,
{
    /// Creates a generator with the default configuration.
    #[must_use]
    pub fn new(catalog: &'a C) -> Self {
        Self::with_config(catalog, BoundedConfig::default())
    }

    /// Creates a generator with a custom configuration.
    #[must_use]
    pub fn with_config(catalog: &'a C, config: BoundedConfig) -> Self {
        Self { catalog, config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &BoundedConfig {
        &self.config
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// # Errors
    ///
    /// See [`BoundedGenerator::generate_with_rng`].
    pub fn generate(
        &self,
        seed_word: Option<&str>,
    ) -> Result<GeneratedPuzzle<BoundedPuzzle>, GenerateError> {
        self.generate_with_seed(seed_word, PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// # Errors
    ///
    /// See [`BoundedGenerator::generate_with_rng`].
    pub fn generate_with_seed(
        &self,
        seed_word: Option<&str>,
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle<BoundedPuzzle>, GenerateError> {
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
    /// - [`GenerateError::NoPlacementPossible`] if no attempt could place a
    ///   seed word.
    /// - [`GenerateError::AttemptsExhausted`] if seeded attempts never came
    ///   within one word of the target.
    pub fn generate_with_rng(
        &self,
        seed_word: Option<&str>,
        rng: &mut PuzzleRng,
    ) -> Result<BoundedPuzzle, GenerateError> {
        let config = &self.config;
        let pool = pool::candidate_pool(self.catalog, config.length_range(), config.target_words)?;
        let fixed_seed = seed_word
            .map(|text| pool::find_seed(&pool, text))
            .transpose()?;
        let filler = Filler::new(&pool, config.target_words, config.stuck_limit);

        let mut best: Option<(Grid, u32, BlackPattern)> = None;
        let mut seeded = false;
        let mut attempts = 0;
        for attempt in 1..=config.max_attempts {
            attempts = attempt;
            let pattern = self.pick_pattern(rng);
            let grid = match self.attempt(&pool, fixed_seed, pattern, &filler, rng) {
                Ok(grid) => grid,
                Err(rejection) => {
                    seeded |= rejection == Rejection::TooFewWords;
                    debug!("attempt {attempt} ({pattern}): {rejection:?}");
                    continue;
                }
            };
            seeded = true;

            let words = grid.word_count();
            let score = score_grid(&grid);
            debug!("attempt {attempt} ({pattern}): {words} words, score {score}");

            let best_score = best.as_ref().map_or(0, |(_, score, _)| *score);
            if score <= best_score || words + 1 < config.target_words {
                continue;
            }
            let complete = words >= config.target_words;
            best = Some((grid, score, pattern));
            if complete && score >= config.good_enough_score {
                break;
            }
        }

        let Some((grid, score, pattern)) = best else {
            return Err(if seeded {
                GenerateError::AttemptsExhausted { attempts }
            } else {
                GenerateError::NoPlacementPossible { attempts }
            });
        };
        let completion = if grid.word_count() >= config.target_words {
            Completion::Complete
        } else {
            Completion::UnderTarget
        };
        info!(
            "generated {}x{} grid with {} words, score {score} ({pattern})",
            config.size,
            config.size,
            grid.word_count()
        );
        Ok(BoundedPuzzle {
            grid,
            score,
            pattern,
            completion,
            attempts,
        })
    }

    fn pick_pattern(&self, rng: &mut PuzzleRng) -> BlackPattern {
        match self.config.pattern {
            Some(index) => BlackPattern::from_index(index),
            None => BlackPattern::ALL
                .choose(rng)
                .copied()
                .unwrap_or(BlackPattern::OPEN),
        }
    }

    fn attempt(
        &self,
        pool: &[&CatalogEntry],
        fixed_seed: Option<&CatalogEntry>,
        pattern: BlackPattern,
        filler: &Filler<'_, '_>,
        rng: &mut PuzzleRng,
    ) -> Result<Grid, Rejection> {
        let size = self.config.size;
        let mut grid = Grid::new(size, size);
        pattern.apply(&mut grid);

        let seed = match fixed_seed {
            Some(entry) => entry,
            None => choose_seed(pool, size, rng).ok_or(Rejection::Unseeded)?,
        };
        place_seed(&mut grid, seed).ok_or(Rejection::Unseeded)?;

        let mut used = HashSet::from([seed.word().clone()]);
        filler.fill(&mut grid, &mut used, rng, |word, spot| {
            fits_within(size, word, spot)
        });

        if grid.word_count() < self.config.min_words {
            return Err(Rejection::TooFewWords);
        }
        Ok(grid)
    }
}

// Prefers seeds spanning the whole row, then one letter shorter.
fn choose_seed<'a>(
    pool: &[&'a CatalogEntry],
    size: usize,
    rng: &mut PuzzleRng,
) -> Option<&'a CatalogEntry> {
    for len in [size, size.saturating_sub(1)] {
        let sized: Vec<&CatalogEntry> = pool
            .iter()
            .copied()
            .filter(|entry| entry.len() == len)
            .collect();
        if let Some(entry) = sized.choose(rng) {
            return Some(entry);
        }
    }
    pool.choose(rng).copied()
}

// Places the seed across the top row, at the leftmost column that works.
fn place_seed(grid: &mut Grid, seed: &CatalogEntry) -> Option<()> {
    let last_col = grid.cols().checked_sub(seed.len())?;
    let placed = (0..=last_col).find_map(|col| {
        grid.place(
            seed.word(),
            seed.clue_or_placeholder(),
            Position::new(0, col),
            Direction::Across,
        )
        .ok()
    })?;
    trace!("seed {} at {}", placed.word(), placed.start());
    Some(())
}

fn fits_within(size: usize, word: &Word, spot: &Placement) -> bool {
    let (row, col) = (spot.start.row(), spot.start.col());
    match spot.direction {
        Direction::Across => row < size && col + word.len() <= size,
        Direction::Down => col < size && row + word.len() <= size,
    }
}

#[cfg(test)]
mod tests {
    use cruciform_core::{WordList, testing::assert_grid_invariants};
    use rand::SeedableRng as _;

    use super::*;
    use crate::MAX_SCORE;

    fn words(words: &[&str]) -> WordList {
        words
            .iter()
            .map(|w| CatalogEntry::from_text(w).unwrap().with_clue(format!("clue for {w}")))
            .collect()
    }

    fn islamic_terms() -> WordList {
        words(&[
            "SALAH", "ZAKAT", "SAWM", "HAJJ", "IMAN", "DUA", "SABR", "NUR", "ADAM", "NUH", "MUSA",
            "ISA", "HUD", "AMAL", "HALAL", "JANNAH", "ILM", "DIN", "ALLAH", "SURAH", "AYAH",
            "MASJID", "WUDU", "QIBLA", "SUNNAH",
        ])
    }

    #[test]
    fn test_grid_has_exact_size_and_symmetric_blacks() {
        let list = islamic_terms();
        let config = BoundedConfig::default().with_target_words(4);
        let generator = BoundedGenerator::with_config(&list, config);
        let puzzle = generator
            .generate_with_rng(None, &mut PuzzleRng::seed_from_u64(21))
            .unwrap();

        let grid = &puzzle.grid;
        assert_grid_invariants(grid);
        assert_eq!((grid.rows(), grid.cols()), (5, 5));
        assert!(grid.word_count() >= 3);
        assert!(puzzle.score <= MAX_SCORE);
        assert_eq!(puzzle.score, score_grid(grid));
        for (pos, cell) in grid.cells() {
            if cell.is_black() {
                let partner = Position::new(4 - pos.row(), 4 - pos.col());
                assert!(grid.cell(partner).unwrap().is_black());
            }
        }
        for word in grid.words() {
            assert!(word.cells().all(|pos| grid.contains(pos)));
        }
    }

    #[test]
    fn test_seed_word_sits_in_top_row() {
        let list = islamic_terms();
        let config = BoundedConfig::default()
            .with_target_words(3)
            .with_pattern(Some(4));
        let generator = BoundedGenerator::with_config(&list, config);
        let puzzle = generator
            .generate_with_rng(Some("salah"), &mut PuzzleRng::seed_from_u64(8))
            .unwrap();

        assert_eq!(puzzle.pattern, BlackPattern::OPEN);
        let seed = puzzle
            .grid
            .words()
            .iter()
            .find(|w| w.word().as_str() == "SALAH")
            .unwrap();
        assert_eq!(seed.start(), Position::new(0, 0));
        assert_eq!(seed.direction(), Direction::Across);
    }

    #[test]
    fn test_words_longer_than_grid_are_filtered() {
        let list = words(&["SALAH", "ZAKAT", "HALAL"]);
        let config = BoundedConfig::default()
            .with_target_words(3)
            .with_length_range(5, 5)
            .with_size(4)
            .with_max_attempts(5);
        let generator = BoundedGenerator::with_config(&list, config);
        assert_eq!(
            generator.generate_with_rng(None, &mut PuzzleRng::seed_from_u64(0)),
            Err(GenerateError::InsufficientCandidates {
                available: 0,
                target: 3
            })
        );
    }

    #[test]
    fn test_attempts_exhausted_when_words_never_cross() {
        let list = words(&["CAT", "DOG", "OX"]);
        let config = BoundedConfig::default()
            .with_target_words(3)
            .with_min_words(1)
            .with_pattern(Some(4))
            .with_max_attempts(3)
            .with_stuck_limit(2);
        let generator = BoundedGenerator::with_config(&list, config);
        assert_eq!(
            generator.generate_with_rng(Some("CAT"), &mut PuzzleRng::seed_from_u64(4)),
            Err(GenerateError::AttemptsExhausted { attempts: 3 })
        );
    }

    #[test]
    fn test_length_range_ignores_setter_order() {
        assert_eq!(BoundedConfig::default().length_range(), 2..=5);
        assert_eq!(BoundedConfig::default().with_size(7).length_range(), 2..=7);

        let range_first = BoundedConfig::default()
            .with_length_range(2, 4)
            .with_size(6);
        let size_first = BoundedConfig::default()
            .with_size(6)
            .with_length_range(2, 4);
        assert_eq!(range_first, size_first);
        assert_eq!(range_first.length_range(), 2..=4);

        let shrunk = BoundedConfig::default()
            .with_length_range(3, 6)
            .with_size(4);
        assert_eq!(shrunk.length_range(), 3..=4);
    }

    #[test]
    fn test_nested_words_keep_grid_invariants() {
        let list = words(&[
            "CRATE", "TAR", "STAR", "ART", "CART", "RAT", "RATS", "ACT", "ACTS",
        ]);
        let config = BoundedConfig::default()
            .with_target_words(5)
            .with_min_words(1)
            .with_max_attempts(8);
        let generator = BoundedGenerator::with_config(&list, config);

        for seed in 0..60 {
            let Ok(puzzle) = generator.generate_with_rng(None, &mut PuzzleRng::seed_from_u64(seed))
            else {
                continue;
            };
            let grid = &puzzle.grid;
            assert_grid_invariants(grid);
            let placed: HashSet<_> = grid.words().iter().map(|w| w.word()).collect();
            assert_eq!(placed.len(), grid.word_count(), "seed {seed} repeats a word");
        }
    }

    #[test]
    fn test_fits_within() {
        let word = Word::new("SABR").unwrap();
        let spot = |row, col, direction| Placement {
            start: Position::new(row, col),
            direction,
            overlap: 1,
        };
        assert!(fits_within(5, &word, &spot(0, 1, Direction::Across)));
        assert!(!fits_within(5, &word, &spot(0, 2, Direction::Across)));
        assert!(fits_within(5, &word, &spot(1, 4, Direction::Down)));
        assert!(!fits_within(5, &word, &spot(1, 5, Direction::Down)));
    }

    #[test]
    fn test_choose_seed_prefers_full_rows() {
        let list = words(&["DUA", "SABR", "SALAH", "NUR"]);
        let pool: Vec<_> = list.iter().collect();
        let mut rng = PuzzleRng::seed_from_u64(0);
        for _ in 0..10 {
            assert_eq!(choose_seed(&pool, 5, &mut rng).unwrap().word().as_str(), "SALAH");
            assert_eq!(choose_seed(&pool, 6, &mut rng).unwrap().word().as_str(), "SALAH");
        }
        assert!(choose_seed(&pool, 8, &mut rng).is_some());
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let list = islamic_terms();
        let config = BoundedConfig::default().with_target_words(4);
        let generator = BoundedGenerator::with_config(&list, config);
        let seed = PuzzleSeed::from_bytes([9; 32]);
        assert_eq!(
            generator.generate_with_seed(None, seed),
            generator.generate_with_seed(None, seed)
        );
    }
}
