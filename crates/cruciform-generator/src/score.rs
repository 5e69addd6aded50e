//! Quality scoring for bounded grids.

use cruciform_core::Grid;

/// Highest score [`score_grid`] can return.
pub const MAX_SCORE: u32 = 100;

const WORDS_WEIGHT: usize = 6;
const WORDS_CAP: usize = 40;
const CROSSINGS_WEIGHT: usize = 5;
const CROSSINGS_CAP: usize = 30;
const FILL_CAP: usize = 20;
const BALANCE_CAP: usize = 10;

/// Rates a grid from 0 to [`MAX_SCORE`].
///
/// The score adds up four capped parts:
///
/// - word count, 6 points per word up to 40,
/// - crossings (cells shared by two words), 5 points each up to 30,
/// - letter coverage of the whole grid, up to 20,
/// - across/down balance, up to 10, and only when both directions occur.
///
/// # Examples
///
/// ```
/// use cruciform_core::{Direction, Grid, Position, Word};
/// use cruciform_generator::score_grid;
///
/// let mut grid = Grid::new(5, 5);
/// grid.place(&Word::new("SALAH")?, "Prayer", Position::new(0, 0), Direction::Across)?;
/// // 6 for one word, 5 letters of 25 cells give 4, no crossings or balance
/// assert_eq!(score_grid(&grid), 10);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn score_grid(grid: &Grid) -> u32 {
    let words = (grid.word_count() * WORDS_WEIGHT).min(WORDS_CAP);
    let crossings = (grid.crossing_count() * CROSSINGS_WEIGHT).min(CROSSINGS_CAP);

    let area = grid.rows() * grid.cols();
    let fill = if area == 0 {
        0
    } else {
        grid.filled_count() * FILL_CAP / area
    };

    let across = grid.across_words().len();
    let down = grid.down_words().len();
    let balance = if across > 0 && down > 0 {
        across.min(down) * BALANCE_CAP / across.max(down)
    } else {
        0
    };

    let total = words + crossings + fill + balance;
    u32::try_from(total).map_or(MAX_SCORE, |total| total.min(MAX_SCORE))
}
