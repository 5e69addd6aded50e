//! Candidate pool selection shared by the generators.

use std::ops::RangeInclusive;

use cruciform_core::{CatalogEntry, WordCatalog};
use log::warn;

use crate::GenerateError;

/// Collects the candidates a generator will draw from.
///
/// Clued words are preferred. When too few of them fall within `lengths`
/// to reach `target`, every word in range is used instead and the unclued
/// ones get placeholder clues.
pub(crate) fn candidate_pool<'a, C>(
    catalog: &'a C,
    lengths: RangeInclusive<usize>,
    target: usize,
) -> Result<Vec<&'a CatalogEntry>, GenerateError>
where
    C: WordCatalog + ?Sized,
{
    let clued = catalog.candidates_with_clues(lengths.clone());
    let pool = if clued.len() >= target {
        clued
    } else {
        let all = catalog.all_candidates(lengths);
        if all.len() > clued.len() {
            warn!(
                "only {} clued words for a target of {target}, falling back to all {} candidates",
                clued.len(),
                all.len()
            );
        }
        all
    };
    if pool.len() < target {
        return Err(GenerateError::InsufficientCandidates {
            available: pool.len(),
            target,
        });
    }
    Ok(pool)
}

/// Looks up a requested seed word in the pool, ignoring case.
pub(crate) fn find_seed<'a>(
    pool: &[&'a CatalogEntry],
    text: &str,
) -> Result<&'a CatalogEntry, GenerateError> {
    pool.iter()
        .copied()
        .find(|entry| entry.word().matches_text(text))
        .ok_or_else(|| GenerateError::SeedNotFound {
            word: text.trim().to_uppercase(),
        })
}

#[cfg(test)]
mod tests {
    use cruciform_core::WordList;

    use super::*;

    fn list(words: &[(&str, Option<&str>)]) -> WordList {
        words
            .iter()
            .map(|&(word, clue)| {
                let entry = CatalogEntry::from_text(word).unwrap();
                match clue {
                    Some(clue) => entry.with_clue(clue),
                    None => entry,
                }
            })
            .collect()
    }

    fn texts(pool: &[&CatalogEntry]) -> Vec<String> {
        pool.iter().map(|e| e.word().to_string()).collect()
    }

    #[test]
    fn test_prefers_clued_words() {
        let words = list(&[("CAT", Some("Feline")), ("CAR", None), ("ART", Some("Craft"))]);
        let pool = candidate_pool(&words, 3..=3, 2).unwrap();
        assert_eq!(texts(&pool), ["CAT", "ART"]);
    }

    #[test]
    fn test_falls_back_to_unclued_words() {
        let words = list(&[("CAT", Some("Feline")), ("CAR", None), ("ART", None)]);
        let pool = candidate_pool(&words, 3..=3, 3).unwrap();
        assert_eq!(texts(&pool), ["CAT", "CAR", "ART"]);
    }

    #[test]
    fn test_insufficient_candidates() {
        let words = list(&[("CAT", None), ("CAR", None), ("HORSE", None)]);
        assert_eq!(
            candidate_pool(&words, 3..=4, 3),
            Err(GenerateError::InsufficientCandidates {
                available: 2,
                target: 3
            })
        );
    }

    #[test]
    fn test_find_seed_ignores_case() {
        let words = list(&[("CAT", None), ("CAR", None)]);
        let pool = candidate_pool(&words, 3..=3, 1).unwrap();
        assert_eq!(find_seed(&pool, " car ").unwrap().word().as_str(), "CAR");
        assert_eq!(
            find_seed(&pool, "dog"),
            Err(GenerateError::SeedNotFound {
                word: "DOG".to_owned()
            })
        );
    }
}
