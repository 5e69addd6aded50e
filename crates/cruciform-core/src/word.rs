//! Validated answer words.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// An answer word: one or more uppercase ASCII letters.
///
/// Construction uppercases the input and rejects anything outside `A`-`Z`,
/// so every `Word` that reaches a [`Grid`](crate::Grid) is already in
/// canonical form. Caseless scripts are rejected as well, since they have
/// no uppercase form to compare against.
///
/// # Examples
///
/// ```
/// use cruciform_core::{Word, WordError};
///
/// let word = Word::new(" Quran ")?;
/// assert_eq!(word.as_str(), "QURAN");
/// assert_eq!(word.len(), 5);
///
/// assert!(matches!(Word::new("AL-AMIN"), Err(WordError::NonAlphabetic { .. })));
/// # Ok::<(), WordError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
    letters: Box<[char]>,
}

impl Word {
    /// Normalizes and validates `text` as a word.
    ///
    /// Surrounding whitespace is trimmed and letters are uppercased.
    ///
    /// # Errors
    ///
    /// Returns [`WordError::Empty`] for blank input and
    /// [`WordError::NonAlphabetic`] when any character is not an ASCII
    /// letter.
    pub fn new(text: &str) -> Result<Self, WordError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(WordError::Empty);
        }
        if let Some(ch) = text.chars().find(|ch| !ch.is_ascii_alphabetic()) {
            return Err(WordError::NonAlphabetic {
                word: text.to_uppercase(),
                ch,
            });
        }
        let text = text.to_ascii_uppercase();
        let letters = text.chars().collect();
        Ok(Self { text, letters })
    }

    /// Returns the word as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the letters of the word in order.
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Returns the number of letters (cells the word occupies).
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always `false`; a word has at least one letter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Case-insensitive comparison against arbitrary user text.
    #[must_use]
    pub fn matches_text(&self, text: &str) -> bool {
        self.text == text.trim().to_uppercase()
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Errors raised when text cannot be used as a [`Word`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WordError {
    /// The text was empty after trimming.
    #[display("word is empty")]
    Empty,
    /// The text contained a character outside `A`-`Z` and `a`-`z`.
    #[display("word {word:?} contains {ch:?}, which is not an ASCII letter")]
    NonAlphabetic {
        /// The offending (uppercased) text.
        word: String,
        /// The first non-alphabetic character.
        ch: char,
    },
}
