//! Terminal output.

use cruciform_core::{Grid, PlacedWord};
use cruciform_generator::{BoundedPuzzle, Completion, FreeformPuzzle, GeneratedPuzzle};

const RULE_WIDTH: usize = 50;

pub fn print_freeform(number: usize, target: usize, generated: &GeneratedPuzzle<FreeformPuzzle>) {
    let puzzle = &generated.puzzle;
    print_header(number, &puzzle.grid, target, puzzle.completion);
    println!("Seed: {}", generated.seed);
    println!("Attempts: {}", puzzle.attempts);
    print_body(&puzzle.grid);
}

pub fn print_bounded(number: usize, target: usize, generated: &GeneratedPuzzle<BoundedPuzzle>) {
    let puzzle = &generated.puzzle;
    print_header(number, &puzzle.grid, target, puzzle.completion);
    println!("Seed: {}", generated.seed);
    println!("Attempts: {}", puzzle.attempts);
    println!("Pattern: {}", puzzle.pattern);
    println!("Score: {}", puzzle.score);
    print_body(&puzzle.grid);
}

fn print_header(number: usize, grid: &Grid, target: usize, completion: Completion) {
    let status = match completion {
        Completion::Complete => "complete",
        Completion::UnderTarget => "under target",
    };
    println!();
    println!("{}", "=".repeat(RULE_WIDTH));
    println!(
        "Puzzle {number}: {} of {target} words, {}x{} ({status})",
        grid.word_count(),
        grid.rows(),
        grid.cols()
    );
    println!("{}", "=".repeat(RULE_WIDTH));
}

fn print_body(grid: &Grid) {
    println!();
    println!("{grid}");
    print_clues("ACROSS", &grid.across_words());
    print_clues("DOWN", &grid.down_words());
}

fn print_clues(heading: &str, words: &[&PlacedWord]) {
    if words.is_empty() {
        return;
    }
    println!();
    println!("{heading}:");
    for word in words {
        println!("  {}. {} ({})", word.number(), word.clue(), word.len());
    }
}
