//! Cruciform command-line crossword generator.
//!
//! Builds freeform or fixed-size crossword puzzles from the words given on
//! the command line, or from a built-in demo list, and prints each grid with
//! its clues.
//!
//! # Usage
//!
//! ```sh
//! cruciform                                   # one puzzle from the demo list
//! cruciform --count 5                         # five puzzles, generated in parallel
//! cruciform --words 10 --seed-word ramadan    # ten words around a fixed seed word
//! cruciform --bounded 5 --pattern 3           # a 5x5 grid with a centre block
//! cruciform --theme prophets                  # only prophet-story words
//! cruciform CAT:Feline CAR:Vehicle ART:Craft  # a custom word list
//! ```
//!
//! Every puzzle prints the seed it was generated from. Passing it back with
//! `--seed` reproduces the puzzle. Set `RUST_LOG=debug` to follow the search.

use std::process;

use clap::Parser;
use cruciform_core::WordList;
use cruciform_generator::{
    BoundedConfig, BoundedGenerator, FreeformConfig, FreeformGenerator, GenerateError,
    GeneratedPuzzle, PuzzleSeed, Theme,
};
use rayon::prelude::*;

mod render;
mod words;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Answer words as `WORD` or `WORD:clue`. Uses the demo list when empty.
    #[arg(value_name = "WORD[:CLUE]")]
    entries: Vec<String>,

    /// Word theme: all, prophets or names. Falls back to every word when
    /// too few match.
    #[arg(short = 't', long, value_name = "THEME", default_value_t = Theme::General)]
    theme: Theme,

    /// Target number of words per puzzle.
    #[arg(short = 'w', long = "words", value_name = "COUNT")]
    target_words: Option<usize>,

    /// Shortest word length to use.
    #[arg(long, value_name = "LEN")]
    min_length: Option<usize>,

    /// Longest word length to use.
    #[arg(long, value_name = "LEN")]
    max_length: Option<usize>,

    /// Attempts per puzzle before settling for the best one.
    #[arg(long, value_name = "COUNT")]
    attempts: Option<usize>,

    /// Word every puzzle starts from (case-insensitive).
    #[arg(short = 's', long, value_name = "WORD")]
    seed_word: Option<String>,

    /// Hex seed to reproduce a puzzle or batch.
    #[arg(long, value_name = "HEX")]
    seed: Option<PuzzleSeed>,

    /// Number of puzzles to generate.
    #[arg(short = 'n', long, value_name = "COUNT", default_value_t = 1)]
    count: usize,

    /// Build exact N×N grids with symmetric black squares.
    #[arg(long, value_name = "N")]
    bounded: Option<usize>,

    /// Black-square pattern index for bounded grids; random when omitted.
    #[arg(long, value_name = "INDEX", requires = "bounded")]
    pattern: Option<usize>,
}

impl Args {
    fn freeform_config(&self) -> FreeformConfig {
        let mut config = FreeformConfig::default();
        if let Some(target) = self.target_words {
            config = config.with_target_words(target);
        }
        let (min_len, max_len) = (config.min_len, config.max_len);
        config = config.with_length_range(
            self.min_length.unwrap_or(min_len),
            self.max_length.unwrap_or(max_len),
        );
        if let Some(attempts) = self.attempts {
            config = config.with_max_attempts(attempts);
        }
        config
    }

    fn bounded_config(&self, size: usize) -> BoundedConfig {
        let mut config = BoundedConfig::default()
            .with_size(size)
            .with_pattern(self.pattern);
        if let Some(target) = self.target_words {
            config = config.with_target_words(target);
        }
        if self.min_length.is_some() || self.max_length.is_some() {
            let lengths = config.length_range();
            config = config.with_length_range(
                self.min_length.unwrap_or(*lengths.start()),
                self.max_length.unwrap_or(*lengths.end()),
            );
        }
        if let Some(attempts) = self.attempts {
            config = config.with_max_attempts(attempts);
        }
        config
    }

    // A single puzzle uses the seed itself so that it can be passed back.
    fn puzzle_seeds(&self) -> Vec<PuzzleSeed> {
        let seed = self.seed.unwrap_or_else(PuzzleSeed::random);
        if self.count == 1 {
            return vec![seed];
        }
        (0_u64..)
            .take(self.count)
            .map(|index| seed.derive(index))
            .collect()
    }
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if args.count == 0 {
        eprintln!("--count must be at least 1.");
        process::exit(1);
    }
    if args.bounded == Some(0) {
        eprintln!("--bounded must be at least 1.");
        process::exit(1);
    }

    let words = match words::build_word_list(&args.entries) {
        Ok(words) => words,
        Err(err) => {
            eprintln!("Invalid word: {err}");
            process::exit(2);
        }
    };
    let words = args.theme.select(&words);
    log::info!("using {} candidate words ({} theme)", words.len(), args.theme);

    let seeds = args.puzzle_seeds();
    let generated = match args.bounded {
        Some(size) => run_bounded(&args, &words, size, &seeds),
        None => run_freeform(&args, &words, &seeds),
    };

    if generated == 0 {
        process::exit(1);
    }
}

fn run_freeform(args: &Args, words: &WordList, seeds: &[PuzzleSeed]) -> usize {
    let config = args.freeform_config();
    let target = config.target_words;
    let generator = FreeformGenerator::with_config(words, config);
    let seed_word = args.seed_word.as_deref();

    let results = generate_all(seeds, |seed| {
        generator.generate_with_seed(seed_word, seed)
    });
    report(&results, |number, puzzle| {
        render::print_freeform(number, target, puzzle);
    })
}

fn run_bounded(args: &Args, words: &WordList, size: usize, seeds: &[PuzzleSeed]) -> usize {
    let config = args.bounded_config(size);
    let target = config.target_words;
    let generator = BoundedGenerator::with_config(words, config);
    let seed_word = args.seed_word.as_deref();

    let results = generate_all(seeds, |seed| {
        generator.generate_with_seed(seed_word, seed)
    });
    report(&results, |number, puzzle| {
        render::print_bounded(number, target, puzzle);
    })
}

fn generate_all<P, F>(
    seeds: &[PuzzleSeed],
    generate: F,
) -> Vec<Result<GeneratedPuzzle<P>, GenerateError>>
where
    P: Send,
    F: Fn(PuzzleSeed) -> Result<GeneratedPuzzle<P>, GenerateError> + Sync,
{
    seeds.par_iter().map(|&seed| generate(seed)).collect()
}

// Prints each result in order and returns how many succeeded.
fn report<P, F>(results: &[Result<GeneratedPuzzle<P>, GenerateError>], print: F) -> usize
where
    F: Fn(usize, &GeneratedPuzzle<P>),
{
    let mut generated = 0;
    for (i, result) in results.iter().enumerate() {
        let number = i + 1;
        match result {
            Ok(puzzle) => {
                print(number, puzzle);
                generated += 1;
            }
            Err(err) => eprintln!("Failed to generate puzzle {number}: {err}"),
        }
    }
    generated
}
