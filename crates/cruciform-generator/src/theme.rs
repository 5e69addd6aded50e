use std::{borrow::Cow, fmt, str::FromStr};

use cruciform_core::{CatalogEntry, WordList};
use log::{info, warn};

/// Fewest matching words a theme needs before it replaces the full list.
pub const MIN_THEMED_WORDS: usize = 7;

/// Clue phrases that mark one of the Names of Allah.
const NAME_PHRASES: &[&str] = &[
    "the all",
    "the most",
    "the ever",
    "from the root",
    "attribute",
    "name of allah",
    "99 names",
];

/// Prophets named in the Quran.
const PROPHETS: &[&str] = &[
    "ADAM", "NUH", "IBRAHIM", "MUSA", "ISA", "MUHAMMAD", "YUSUF", "DAWUD", "SULAIMAN", "AYYUB",
    "YUNUS", "IDRIS", "HUD", "SALIH", "SHUAIB", "HARUN", "YAHYA", "ZAKARIYA", "ISMAIL", "ISHAQ",
    "YAQUB", "ILYAS", "ALYASA", "DHULKIFL", "LUQMAN", "UZAYR",
];

/// Clue words that point at a prophet's story.
const STORY_WORDS: &[&str] = &["prophet", "messenger", "revelation", "miracle"];

/// A word theme that narrows a catalog before generation.
///
/// Themes are parsed from and displayed as `all`, `prophets` and `names`.
///
/// # Examples
///
/// ```
/// use cruciform_core::{CatalogEntry, WordList};
/// use cruciform_generator::Theme;
///
/// let words: WordList = [("ADAM", "First man"), ("ZAKAT", "Almsgiving")]
///     .into_iter()
///     .map(|(word, clue)| CatalogEntry::from_text(word).map(|e| e.with_clue(clue)))
///     .collect::<Result<_, _>>()?;
///
/// let theme: Theme = "prophets".parse()?;
/// assert!(theme.matches(words.iter().next().unwrap()));
/// // Too few prophets: the whole list is kept.
/// assert_eq!(theme.select(&words).len(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Every word in the catalog.
    #[default]
    General,
    /// Prophet names and words whose clues tell their stories.
    Prophets,
    /// Words clued as one of the Names of Allah.
    Names,
}

impl Theme {
    /// All themes, in display order.
    pub const ALL: [Self; 3] = [Self::General, Self::Prophets, Self::Names];

    /// Returns `true` if `entry` belongs to this theme.
    #[must_use]
    pub fn matches(self, entry: &CatalogEntry) -> bool {
        let clue = entry.clue().map(str::to_lowercase);
        match self {
            Self::General => true,
            Self::Names => {
                clue.is_some_and(|clue| NAME_PHRASES.iter().any(|phrase| clue.contains(phrase)))
            }
            Self::Prophets => {
                PROPHETS.contains(&entry.word().as_str())
                    || clue.is_some_and(|clue| {
                        clue.split(|c: char| !c.is_ascii_alphabetic())
                            .any(|token| is_prophet_name(token) || STORY_WORDS.contains(&token))
                    })
            }
        }
    }

    /// Returns the entries of `list` in this theme, or all of `list` when
    /// fewer than [`MIN_THEMED_WORDS`] match.
    #[must_use]
    pub fn select(self, list: &WordList) -> Cow<'_, WordList> {
        if self == Self::General {
            return Cow::Borrowed(list);
        }
        let themed: WordList = list.iter().filter(|e| self.matches(e)).cloned().collect();
        if themed.len() < MIN_THEMED_WORDS {
            warn!(
                "only {} words match theme {self}, using all {} words",
                themed.len(),
                list.len()
            );
            return Cow::Borrowed(list);
        }
        info!("theme {self} selected {} of {} words", themed.len(), list.len());
        Cow::Owned(themed)
    }
}

fn is_prophet_name(token: &str) -> bool {
    PROPHETS
        .iter()
        .any(|name| name.eq_ignore_ascii_case(token))
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::General => "all",
            Self::Prophets => "prophets",
            Self::Names => "names",
        })
    }
}

/// Error returned when parsing a [`Theme`] fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown theme {name:?}, expected one of: all, prophets, names")]
pub struct ThemeParseError {
    /// The rejected input.
    pub name: String,
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|theme| theme.to_string().eq_ignore_ascii_case(name))
            .ok_or_else(|| ThemeParseError {
                name: name.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str, clue: &str) -> CatalogEntry {
        CatalogEntry::from_text(word).unwrap().with_clue(clue)
    }

    fn list(entries: &[(&str, &str)]) -> WordList {
        entries.iter().map(|&(word, clue)| entry(word, clue)).collect()
    }

    #[test]
    fn test_parse_and_display() {
        for theme in Theme::ALL {
            assert_eq!(theme.to_string().parse::<Theme>(), Ok(theme));
        }
        assert_eq!(" Prophets ".parse::<Theme>(), Ok(Theme::Prophets));
        assert_eq!(
            "stories".parse::<Theme>(),
            Err(ThemeParseError {
                name: "stories".to_owned()
            })
        );
    }

    #[test]
    fn test_names_match_on_clue_phrases() {
        assert!(Theme::Names.matches(&entry("RAHMAN", "The Most Gracious")));
        assert!(Theme::Names.matches(&entry("ALIM", "The All-Knowing")));
        assert!(!Theme::Names.matches(&entry("SABR", "Patience in hardship")));
        assert!(!Theme::Names.matches(&CatalogEntry::from_text("RAHIM").unwrap()));
    }

    #[test]
    fn test_prophets_match_on_name_or_story() {
        assert!(Theme::Prophets.matches(&CatalogEntry::from_text("yunus").unwrap()));
        assert!(Theme::Prophets.matches(&entry("ARK", "Vessel built by Nuh")));
        assert!(Theme::Prophets.matches(&entry("WAHY", "Divine revelation")));
        // Names only count as whole words.
        assert!(!Theme::Prophets.matches(&entry("SALAH", "Disadvantage of haste")));
        assert!(!Theme::Prophets.matches(&entry("HALAL", "Permissible")));
    }

    #[test]
    fn test_select_keeps_only_themed_words() {
        let words = list(&[
            ("ADAM", "First man"),
            ("NUH", "Built the ark"),
            ("MUSA", "Parted the sea"),
            ("ISA", "Born to Maryam"),
            ("HUD", "Sent to Ad"),
            ("YUNUS", "In the whale"),
            ("YUSUF", "Sold by his brothers"),
            ("ZAKAT", "Almsgiving"),
            ("HALAL", "Permissible"),
        ]);
        let themed = Theme::Prophets.select(&words);
        assert!(matches!(themed, Cow::Owned(_)));
        assert_eq!(themed.len(), 7);
        assert!(themed.iter().all(|e| Theme::Prophets.matches(e)));
        assert!(matches!(Theme::General.select(&words), Cow::Borrowed(_)));
    }

    #[test]
    fn test_select_falls_back_below_minimum() {
        let words = list(&[
            ("RAHMAN", "The Most Gracious"),
            ("ALIM", "The All-Knowing"),
            ("ZAKAT", "Almsgiving"),
        ]);
        let selected = Theme::Names.select(&words);
        assert!(matches!(selected, Cow::Borrowed(_)));
        assert_eq!(selected.len(), 3);
    }
}
