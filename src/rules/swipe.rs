//! The move engine: slide and merge every line toward one edge.
//!
//! ## Algorithm
//!
//! Each line (a row for Left/Right, a column for Up/Down) is swept
//! independently, starting at the destination edge. Tiles are packed toward
//! that edge in order. A tile merges into the previously packed tile when
//! both have the same value and the packed tile is not itself the product
//! of a merge in this sweep. That marker is an explicit set of merged
//! cells, reset for every line, so `[2, 2, 2, 2]` becomes `[4, 4, _, _]`
//! and never `[8, _, _, _]`.
//!
//! Merges retire both parents and create a new tile with a fresh id.
//! Tiles that only slide keep their id.
//!
//! ```
//! use merge_grid::grid::Grid;
//! use merge_grid::rules::{swipe, Direction};
//!
//! let mut grid = Grid::from_values(4, &[
//!     2, 2, 2, 2,
//!     0, 0, 0, 0,
//!     0, 0, 0, 0,
//!     0, 0, 0, 0,
//! ]).unwrap();
//!
//! let outcome = swipe(&mut grid, Direction::Left);
//! assert!(outcome.changed);
//! assert_eq!(&grid.values()[..4], &[4, 4, 0, 0]);
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Coord, Tile, TileId};
use crate::grid::Grid;

use super::direction::Direction;

/// One merge performed during a swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Merge {
    /// Cell the merged tile ends up in.
    pub at: Coord,
    /// The two retired tiles, the one nearer the destination edge first.
    pub parents: [TileId; 2],
    /// Id of the new tile.
    pub result: TileId,
    /// Value of the new tile.
    pub value: u64,
}

/// Movement of a tile that existed before the swipe.
///
/// For a tile consumed by a merge, `to` is the merge cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileMotion {
    pub id: TileId,
    pub from: Coord,
    pub to: Coord,
}

/// What a swipe did to the board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwipeOutcome {
    /// True iff at least one tile moved or merged.
    pub changed: bool,
    pub merges: Vec<Merge>,
    /// Tiles whose cell changed; tiles that stayed put are not listed.
    pub motions: Vec<TileMotion>,
}

impl SwipeOutcome {
    /// Sum of the values created by merges.
    #[must_use]
    pub fn merged_total(&self) -> u64 {
        self.merges.iter().map(|m| m.value).sum()
    }
}

/// Slide and merge every line of `grid` toward `direction`, in place.
///
/// Total over all boards: an empty or settled board yields
/// `changed == false` and is left untouched.
pub fn swipe(grid: &mut Grid, direction: Direction) -> SwipeOutcome {
    let mut outcome = SwipeOutcome::default();
    let mut merged: FxHashSet<Coord> = FxHashSet::default();

    for line in direction.lines(grid.size()) {
        merged.clear();
        sweep_line(grid, &line, &mut merged, &mut outcome);
    }

    outcome.changed = !outcome.motions.is_empty() || !outcome.merges.is_empty();
    outcome
}

/// Whether swiping `direction` would change `grid`. Probes a clone.
#[must_use]
pub fn would_change(grid: &Grid, direction: Direction) -> bool {
    let mut probe = grid.clone();
    swipe(&mut probe, direction).changed
}

fn sweep_line(
    grid: &mut Grid,
    line: &[Coord],
    merged: &mut FxHashSet<Coord>,
    outcome: &mut SwipeOutcome,
) {
    let tiles: SmallVec<[Tile; 8]> = line
        .iter()
        .filter_map(|&coord| grid.tile_at(coord).copied())
        .collect();
    if tiles.is_empty() {
        return;
    }

    // Packed tiles: `packed[i]` sits at `line[i]`.
    let mut packed: SmallVec<[Tile; 8]> = SmallVec::new();

    for tile in tiles {
        if let Some(last) = packed.last_mut() {
            let at = last.position;
            if last.value == tile.value && !merged.contains(&at) {
                // A pair whose sum would overflow simply does not merge
                if let Some(value) = last.merged_value() {
                    let result = grid.alloc_tile_id();
                    outcome.merges.push(Merge {
                        at,
                        parents: [last.id, tile.id],
                        result,
                        value,
                    });
                    outcome.motions.push(TileMotion {
                        id: tile.id,
                        from: tile.position,
                        to: at,
                    });
                    *last = Tile::new(result, value, at);
                    merged.insert(at);
                    continue;
                }
            }
        }

        let slot = line[packed.len()];
        if tile.position != slot {
            outcome.motions.push(TileMotion {
                id: tile.id,
                from: tile.position,
                to: slot,
            });
        }
        packed.push(tile.moved_to(slot));
    }

    for (i, &coord) in line.iter().enumerate() {
        grid.set_cell(coord, packed.get(i).copied());
    }
}
