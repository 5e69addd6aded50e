//! The greedy fill loop shared by both generators.

use std::{cmp::Reverse, collections::HashSet};

use cruciform_core::{CatalogEntry, Grid, PlacedWord, Placement, Word};
use log::trace;
use rand::seq::SliceRandom as _;

use crate::PuzzleRng;

/// Best-overlap placements tried for each candidate word.
const TOP_PLACEMENTS: usize = 5;

/// Why a fill loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FillStop {
    TargetReached,
    Stuck,
}

/// Greedily adds crossing words to a seeded grid.
#[derive(Debug)]
pub(crate) struct Filler<'p, 'a> {
    pool: &'p [&'a CatalogEntry],
    target: usize,
    stuck_limit: usize,
}

impl<'p, 'a> Filler<'p, 'a> {
    pub(crate) fn new(pool: &'p [&'a CatalogEntry], target: usize, stuck_limit: usize) -> Self {
        Self {
            pool,
            target,
            stuck_limit,
        }
    }

    /// Places words until the grid holds `target` words or `stuck_limit`
    /// consecutive passes add nothing.
    ///
    /// `used` holds the words already on the grid and is kept up to date.
    /// `accept` can veto placements before they are tried.
    pub(crate) fn fill<F>(
        &self,
        grid: &mut Grid,
        used: &mut HashSet<Word>,
        rng: &mut PuzzleRng,
        accept: F,
    ) -> FillStop
    where
        F: Fn(&Word, &Placement) -> bool,
    {
        let mut stuck = 0;
        loop {
            if grid.word_count() >= self.target {
                return FillStop::TargetReached;
            }
            if stuck >= self.stuck_limit {
                return FillStop::Stuck;
            }
            match self.place_next(grid, used, rng, &accept) {
                Some(placed) => {
                    trace!(
                        "placed {} {} at {} as {}",
                        placed.word(),
                        placed.direction(),
                        placed.start(),
                        placed.number()
                    );
                    used.insert(placed.word().clone());
                    stuck = 0;
                }
                None => stuck += 1,
            }
        }
    }

    // One pass: the first unused word (in shuffled order) that can be placed
    // anywhere is placed at its highest-overlap spot.
    fn place_next<F>(
        &self,
        grid: &mut Grid,
        used: &HashSet<Word>,
        rng: &mut PuzzleRng,
        accept: &F,
    ) -> Option<PlacedWord>
    where
        F: Fn(&Word, &Placement) -> bool,
    {
        let mut remaining: Vec<&CatalogEntry> = self
            .pool
            .iter()
            .copied()
            .filter(|entry| !used.contains(entry.word()))
            .collect();
        remaining.shuffle(rng);

        for entry in remaining {
            let word = entry.word();
            let mut spots: Vec<Placement> = grid
                .find_intersections(word)
                .into_iter()
                .filter(|spot| accept(word, spot))
                .collect();
            // stable, so equal overlaps keep scan order
            spots.sort_by_key(|spot| Reverse(spot.overlap));
            for spot in spots.iter().take(TOP_PLACEMENTS) {
                if let Ok(placed) =
                    grid.place(word, entry.clue_or_placeholder(), spot.start, spot.direction)
                {
                    return Some(placed);
                }
            }
        }
        None
    }
}
