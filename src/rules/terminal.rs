//! Win and loss detection.
//!
//! Both checks are read-only: direction probes run on disposable clones,
//! so the caller's grid is never mutated.

use smallvec::SmallVec;

use crate::grid::Grid;

use super::direction::Direction;
use super::swipe::would_change;

/// Directions that would change `grid`.
#[must_use]
pub fn legal_directions(grid: &Grid) -> SmallVec<[Direction; 4]> {
    Direction::ALL
        .into_iter()
        .filter(|&direction| would_change(grid, direction))
        .collect()
}

/// True iff the board is full and no direction changes it.
#[must_use]
pub fn is_game_over(grid: &Grid) -> bool {
    if grid.has_empty_cell() {
        return false;
    }
    !Direction::ALL
        .into_iter()
        .any(|direction| would_change(grid, direction))
}

/// True iff some tile has reached `threshold`.
#[must_use]
pub fn has_won(grid: &Grid, threshold: u64) -> bool {
    grid.tiles().any(|tile| tile.value >= threshold)
}
