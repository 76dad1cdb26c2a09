//! Read-only board view for renderers.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, TileId};

use super::Grid;

/// One rendered tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileView {
    pub coord: Coord,
    pub value: u64,
    pub id: TileId,
}

/// Everything a renderer needs to draw the board.
///
/// Tiles are listed row-major; empty cells are omitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub size: usize,
    pub tiles: Vec<TileView>,
}

impl BoardSnapshot {
    /// Capture the current contents of `grid`.
    #[must_use]
    pub fn of(grid: &Grid) -> Self {
        Self {
            size: grid.size(),
            tiles: grid
                .tiles()
                .map(|tile| TileView {
                    coord: tile.position,
                    value: tile.value,
                    id: tile.id,
                })
                .collect(),
        }
    }

    /// Value at `coord`, if a tile is there.
    #[must_use]
    pub fn value_at(&self, coord: Coord) -> Option<u64> {
        self.tiles.iter().find(|view| view.coord == coord).map(|view| view.value)
    }
}

impl From<&Grid> for BoardSnapshot {
    fn from(grid: &Grid) -> Self {
        Self::of(grid)
    }
}
