//! Word lists for the command line.

use cruciform_core::{CatalogEntry, WordError, WordList};

/// Built-in answers and clues used when no words are given.
const DEMO_WORDS: &[(&str, &str)] = &[
    ("SALAH", "The five daily prayers"),
    ("ZAKAT", "Obligatory annual charity"),
    ("SAWM", "Fasting from dawn to sunset"),
    ("HAJJ", "Pilgrimage to Makkah"),
    ("IMAN", "Faith"),
    ("DUA", "Personal supplication"),
    ("SABR", "Patience in hardship"),
    ("NUR", "Light"),
    ("ADAM", "The first prophet"),
    ("NUH", "Prophet who built the ark"),
    ("MUSA", "Prophet who parted the sea"),
    ("ISA", "Prophet born to Maryam"),
    ("HUD", "Prophet sent to the people of Ad"),
    ("YUNUS", "Prophet swallowed by a whale"),
    ("YUSUF", "Prophet sold by his brothers"),
    ("IBRAHIM", "Prophet who raised the Kaaba"),
    ("AMAL", "Deeds"),
    ("HALAL", "Permissible"),
    ("JANNAH", "Paradise"),
    ("ILM", "Knowledge"),
    ("DIN", "Way of life"),
    ("SURAH", "Chapter of the Quran"),
    ("AYAH", "Verse of the Quran"),
    ("MASJID", "Place of prostration"),
    ("WUDU", "Ablution before prayer"),
    ("QIBLA", "Direction faced in prayer"),
    ("SUNNAH", "Prophetic tradition"),
    ("IFTAR", "Meal that breaks the fast"),
    ("SUHOOR", "Meal before dawn"),
    ("RAMADAN", "Month of fasting"),
    ("TAQWA", "God-consciousness"),
    ("HIJRA", "Migration to Madinah"),
    ("KAABA", "Cube-shaped house in Makkah"),
    ("ADHAN", "Call to prayer"),
    ("IMAM", "Prayer leader"),
    ("UMMAH", "Worldwide community of believers"),
    ("SADAQAH", "Voluntary charity"),
    ("DHIKR", "Remembrance of Allah"),
    ("RAHMAN", "The Most Gracious"),
    ("RAHIM", "The Most Merciful"),
    ("WADUD", "The Most Loving"),
    ("ALIM", "The All-Knowing"),
    ("BASIR", "The All-Seeing"),
    ("SAMI", "The All-Hearing"),
    ("HAKIM", "The All-Wise"),
    ("GHAFUR", "The Ever-Forgiving"),
];

/// Returns the built-in word list.
pub fn demo_words() -> WordList {
    DEMO_WORDS
        .iter()
        .filter_map(|&(word, clue)| {
            CatalogEntry::from_text(word)
                .ok()
                .map(|entry| entry.with_clue(clue))
        })
        .collect()
}

/// Parses a `WORD` or `WORD:clue` argument.
pub fn parse_entry(arg: &str) -> Result<CatalogEntry, WordError> {
    match arg.split_once(':') {
        Some((word, clue)) => Ok(CatalogEntry::from_text(word)?.with_clue(clue)),
        None => CatalogEntry::from_text(arg),
    }
}

/// Builds the word list from arguments, or the demo list if there are none.
pub fn build_word_list(args: &[String]) -> Result<WordList, WordError> {
    if args.is_empty() {
        return Ok(demo_words());
    }
    args.iter().map(|arg| parse_entry(arg)).collect()
}
