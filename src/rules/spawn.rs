//! Tile spawning.

use crate::core::{GameError, GameRng, Result, Tile};
use crate::grid::Grid;

/// Value of an ordinary spawn.
pub const SPAWN_VALUE: u64 = 2;

/// Value of the rare spawn.
pub const RARE_SPAWN_VALUE: u64 = 4;

/// Place a new tile in a uniformly chosen empty cell.
///
/// The tile is a 4 with probability `four_probability`, otherwise a 2.
/// Fails with [`GameError::BoardFull`] when no cell is empty; the grid is
/// then left untouched.
pub fn spawn_tile(grid: &mut Grid, rng: &mut GameRng, four_probability: f64) -> Result<Tile> {
    let empty = grid.empty_cells();
    let coord = *rng.choose(&empty).ok_or(GameError::BoardFull)?;
    let value = if rng.gen_bool(four_probability) {
        RARE_SPAWN_VALUE
    } else {
        SPAWN_VALUE
    };

    let tile = Tile::new(grid.alloc_tile_id(), value, coord);
    grid.place_tile(tile)?;
    Ok(tile)
}
