//! Candidate word catalogs.
//!
//! A [`WordCatalog`] is the pool of answer words (with optional clues) that a
//! generator draws from. Loading catalogs from files is left to callers;
//! [`WordList`] is the in-memory implementation they fill.

use std::{collections::BTreeMap, ops::RangeInclusive};

use crate::{Word, WordError};

/// Score given to entries that do not specify one.
pub const DEFAULT_SCORE: i32 = 50;

/// A candidate word with its optional clue and a quality score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    word: Word,
    clue: Option<String>,
    score: i32,
}

impl CatalogEntry {
    /// Creates an unclued entry with [`DEFAULT_SCORE`].
    #[must_use]
    pub fn new(word: Word) -> Self {
        Self {
            word,
            clue: None,
            score: DEFAULT_SCORE,
        }
    }

    /// Validates `text` as a word and wraps it in an entry.
    ///
    /// # Errors
    ///
    /// Returns a [`WordError`] if `text` is not a valid word. This is where
    /// non-alphabetic catalog entries are turned away.
    pub fn from_text(text: &str) -> Result<Self, WordError> {
        Word::new(text).map(Self::new)
    }

    /// Attaches a clue. Blank clues are treated as absent.
    #[must_use]
    pub fn with_clue(mut self, clue: impl Into<String>) -> Self {
        let clue = clue.into();
        let clue = clue.trim();
        self.clue = (!clue.is_empty()).then(|| clue.to_owned());
        self
    }

    /// Overrides the score.
    #[must_use]
    pub fn with_score(mut self, score: i32) -> Self {
        self.score = score;
        self
    }

    /// Returns the answer word.
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// Returns the clue, if any.
    #[must_use]
    pub fn clue(&self) -> Option<&str> {
        self.clue.as_deref()
    }

    /// Returns the clue, or a `[WORD]` placeholder when there is none.
    #[must_use]
    pub fn clue_or_placeholder(&self) -> String {
        match &self.clue {
            Some(clue) => clue.clone(),
            None => format!("[{}]", self.word),
        }
    }

    /// Returns `true` if the entry carries clue text.
    #[must_use]
    pub fn has_clue(&self) -> bool {
        self.clue.is_some()
    }

    /// Returns the quality score.
    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Returns the word length in letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    /// Always `false`; see [`Word::is_empty`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

/// A source of candidate words for puzzle generation.
///
/// Both queries take an inclusive letter-count range. Implementations must
/// only ever yield valid [`Word`]s, which the type already guarantees.
pub trait WordCatalog {
    /// Returns every candidate whose length lies in `lengths`.
    fn all_candidates(&self, lengths: RangeInclusive<usize>) -> Vec<&CatalogEntry>;

    /// Returns the candidates in `lengths` that carry clue text.
    fn candidates_with_clues(&self, lengths: RangeInclusive<usize>) -> Vec<&CatalogEntry> {
        self.all_candidates(lengths)
            .into_iter()
            .filter(|entry| entry.has_clue())
            .collect()
    }
}

/// An in-memory, insertion-ordered word catalog indexed by length.
///
/// Range queries yield entries grouped by ascending length, and in
/// insertion order within a length.
///
/// # Examples
///
/// ```
/// use cruciform_core::{CatalogEntry, WordCatalog, WordList};
///
/// let mut list = WordList::new();
/// list.push(CatalogEntry::from_text("adam")?.with_clue("First prophet"));
/// list.push(CatalogEntry::from_text("NUH")?);
/// list.push(CatalogEntry::from_text("Musa")?);
///
/// assert_eq!(list.all_candidates(3..=4).len(), 3);
/// assert_eq!(list.candidates_with_clues(3..=4).len(), 1);
/// assert_eq!(list.get_by_length(4).count(), 2);
/// # Ok::<(), cruciform_core::WordError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct WordList {
    entries: Vec<CatalogEntry>,
    by_length: BTreeMap<usize, Vec<usize>>,
}

impl WordList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: CatalogEntry) {
        self.by_length
            .entry(entry.len())
            .or_default()
            .push(self.entries.len());
        self.entries.push(entry);
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the list holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    /// Iterates over the entries of exactly `length` letters.
    pub fn get_by_length(&self, length: usize) -> impl Iterator<Item = &CatalogEntry> {
        self.by_length
            .get(&length)
            .into_iter()
            .flatten()
            .map(|&i| &self.entries[i])
    }

    /// Iterates over the entries whose length lies in `lengths`.
    ///
    /// An inverted range yields nothing.
    pub fn words_in_range(
        &self,
        lengths: RangeInclusive<usize>,
    ) -> impl Iterator<Item = &CatalogEntry> {
        let lengths = (!lengths.is_empty()).then(|| self.by_length.range(lengths));
        lengths
            .into_iter()
            .flatten()
            .flat_map(|(_, indices)| indices)
            .map(|&i| &self.entries[i])
    }

    /// Returns a new list with the entries matching `predicate`.
    ///
    /// Useful for carving themed sub-catalogs out of a larger list.
    #[must_use]
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&CatalogEntry) -> bool,
    {
        self.entries
            .iter()
            .filter(|entry| predicate(entry))
            .cloned()
            .collect()
    }

    /// Returns a new list with only the clued entries.
    #[must_use]
    pub fn filter_with_clues(&self) -> Self {
        self.filter(CatalogEntry::has_clue)
    }

    /// Returns a new list with only the entries scoring at least `min_score`.
    #[must_use]
    pub fn filter_by_score(&self, min_score: i32) -> Self {
        self.filter(|entry| entry.score() >= min_score)
    }
}

impl WordCatalog for WordList {
    fn all_candidates(&self, lengths: RangeInclusive<usize>) -> Vec<&CatalogEntry> {
        self.words_in_range(lengths).collect()
    }
}

impl FromIterator<CatalogEntry> for WordList {
    fn from_iter<T: IntoIterator<Item = CatalogEntry>>(iter: T) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl Extend<CatalogEntry> for WordList {
    fn extend<T: IntoIterator<Item = CatalogEntry>>(&mut self, iter: T) {
        for entry in iter {
            self.push(entry);
        }
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str, clue: Option<&str>, score: i32) -> CatalogEntry {
        let entry = CatalogEntry::from_text(word).unwrap().with_score(score);
        match clue {
            Some(clue) => entry.with_clue(clue),
            None => entry,
        }
    }

    fn sample() -> WordList {
        [
            entry("SALAH", Some("Daily prayer"), 90),
            entry("ZAKAT", None, 70),
            entry("HAJJ", Some("Pilgrimage"), 80),
            entry("SAWM", None, 40),
            entry("IMAN", Some("Faith"), 60),
            entry("DUA", Some("Supplication"), 55),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_range_query_groups_by_length() {
        let list = sample();
        let words: Vec<_> = list
            .words_in_range(3..=5)
            .map(|e| e.word().as_str())
            .collect();
        assert_eq!(words, ["DUA", "HAJJ", "SAWM", "IMAN", "SALAH", "ZAKAT"]);
        assert_eq!(list.all_candidates(4..=4).len(), 3);
        assert!(list.all_candidates(6..=9).is_empty());
    }

    #[test]
    fn test_candidates_with_clues() {
        let list = sample();
        let clued: Vec<_> = list
            .candidates_with_clues(4..=5)
            .into_iter()
            .map(|e| e.word().as_str())
            .collect();
        assert_eq!(clued, ["HAJJ", "IMAN", "SALAH"]);
    }

    #[test]
    fn test_filters() {
        let list = sample();
        assert_eq!(list.filter_with_clues().len(), 4);
        assert_eq!(list.filter_by_score(70).len(), 3);
        let themed = list.filter(|e| e.word().as_str().starts_with('S'));
        assert_eq!(themed.len(), 2);
        assert_eq!(themed.get_by_length(4).count(), 1);
    }

    #[test]
    fn test_blank_clue_is_absent() {
        let entry = CatalogEntry::from_text("Sabr").unwrap().with_clue("  ");
        assert!(!entry.has_clue());
        assert_eq!(entry.clue_or_placeholder(), "[SABR]");
        assert_eq!(entry.score(), DEFAULT_SCORE);
    }
}
