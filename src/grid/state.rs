//! The N×N board.
//!
//! ## Grid
//!
//! A mapping from [`Coord`] to an optional [`Tile`], stored row-major in an
//! `im::Vector` so a full-board snapshot is an O(1) clone. The grid also
//! owns the tile-id allocator, which means a snapshot restores identities
//! exactly.
//!
//! ## Invariants
//!
//! - at most one tile per cell
//! - every stored tile's `position` equals its cell
//! - every stored tile's id is below `next_tile_id`

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, Coord, GameError, Result, Tile, TileId, MIN_SIZE};

/// Board state: cells plus the id allocator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vector<Option<Tile>>,
    next_tile_id: u64,
}

impl Grid {
    /// Create an empty `size`×`size` grid.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size >= MIN_SIZE, "Grid must be at least {MIN_SIZE}x{MIN_SIZE}");

        Self {
            size,
            cells: Vector::from(vec![None; size * size]),
            next_tile_id: 0,
        }
    }

    /// Build a grid from row-major values, `0` meaning an empty cell.
    ///
    /// Tiles get ids in row-major order.
    ///
    /// ```
    /// use merge_grid::core::Coord;
    /// use merge_grid::grid::Grid;
    ///
    /// let grid = Grid::from_values(2, &[2, 0, 0, 4]).unwrap();
    /// assert_eq!(grid.tile_at(Coord::new(1, 1)).map(|t| t.value), Some(4));
    /// assert_eq!(grid.empty_count(), 2);
    /// ```
    pub fn from_values(size: usize, values: &[u64]) -> Result<Self> {
        if size < MIN_SIZE {
            return Err(ConfigError::InvalidSize {
                got: size,
                min: MIN_SIZE,
            }
            .into());
        }
        let expected = size.checked_mul(size).ok_or(ConfigError::SizeOverflow(size))?;
        if values.len() != expected {
            return Err(ConfigError::PresetSize {
                got: values.len(),
                expected,
            }
            .into());
        }

        let mut grid = Self::new(size);
        for (index, &value) in values.iter().enumerate() {
            if value == 0 {
                continue;
            }
            if !Tile::is_valid_value(value) {
                return Err(GameError::InvalidTileValue(value));
            }
            let id = grid.alloc_tile_id();
            grid.place_tile(Tile::new(id, value, Coord::from_index(index, size)))?;
        }
        Ok(grid)
    }

    /// Grid dimension N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `coord` lies on this board.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.in_bounds(self.size)
    }

    // === Queries ===

    /// Tile at `coord`, or `None` if empty or out of bounds.
    #[must_use]
    pub fn tile_at(&self, coord: Coord) -> Option<&Tile> {
        if !self.contains(coord) {
            return None;
        }
        self.cells.get(coord.index(self.size)).and_then(Option::as_ref)
    }

    /// Whether at least one cell is empty.
    #[must_use]
    pub fn has_empty_cell(&self) -> bool {
        self.cells.iter().any(Option::is_none)
    }

    /// Empty coordinates, row-major.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| Coord::from_index(index, self.size))
            .collect()
    }

    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// All tiles, row-major.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.cells.iter().filter_map(Option::as_ref)
    }

    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles().count()
    }

    /// Largest tile value on the board.
    #[must_use]
    pub fn max_value(&self) -> Option<u64> {
        self.tiles().map(|tile| tile.value).max()
    }

    /// Row-major values, `0` for empty cells.
    #[must_use]
    pub fn values(&self) -> Vec<u64> {
        self.cells
            .iter()
            .map(|cell| cell.map_or(0, |tile| tile.value))
            .collect()
    }

    // === Mutations ===

    /// Place `tile` at its own `position`.
    ///
    /// Fails with [`GameError::OccupiedCell`] if the cell holds a tile.
    pub fn place_tile(&mut self, tile: Tile) -> Result<()> {
        let coord = tile.position;
        let index = self.checked_index(coord)?;
        if self.cells[index].is_some() {
            return Err(GameError::OccupiedCell { coord });
        }

        self.cells.set(index, Some(tile));
        self.next_tile_id = self.next_tile_id.max(tile.id.raw().saturating_add(1));
        Ok(())
    }

    /// Remove and return the tile at `coord`, if any.
    pub fn remove_tile(&mut self, coord: Coord) -> Result<Option<Tile>> {
        let index = self.checked_index(coord)?;
        Ok(self.cells.set(index, None))
    }

    /// Overwrite one cell without occupancy checks.
    ///
    /// `coord` must be in bounds and `tile`, if any, must sit at `coord`
    /// with an id obtained from this grid.
    pub(crate) fn set_cell(&mut self, coord: Coord, tile: Option<Tile>) {
        debug_assert!(self.contains(coord));
        debug_assert!(tile.map_or(true, |t| t.position == coord && t.id.raw() < self.next_tile_id));
        let index = coord.index(self.size);
        self.cells.set(index, tile);
    }

    /// Remove every tile. Ids already handed out are not reused.
    pub fn clear(&mut self) {
        self.cells = Vector::from(vec![None; self.size * self.size]);
    }

    // === Identity ===

    /// Allocate a fresh tile id.
    pub fn alloc_tile_id(&mut self) -> TileId {
        let id = TileId(self.next_tile_id);
        self.next_tile_id += 1;
        id
    }

    /// The id the next allocation will return.
    #[must_use]
    pub fn next_tile_id(&self) -> TileId {
        TileId(self.next_tile_id)
    }

    fn checked_index(&self, coord: Coord) -> Result<usize> {
        if self.contains(coord) {
            Ok(coord.index(self.size))
        } else {
            Err(GameError::OutOfBounds {
                coord,
                size: self.size,
            })
        }
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let border = format!("+{}", "------+".repeat(self.size));
        writeln!(f, "{border}")?;
        for row in 0..self.size {
            write!(f, "|")?;
            for col in 0..self.size {
                match self.tile_at(Coord::new(col, row)) {
                    Some(tile) => write!(f, "{:^6}|", tile.value)?,
                    None => write!(f, "      |")?,
                }
            }
            writeln!(f)?;
            writeln!(f, "{border}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(4);

        assert_eq!(grid.size(), 4);
        assert_eq!(grid.empty_count(), 16);
        assert_eq!(grid.tile_count(), 0);
        assert!(grid.has_empty_cell());
        assert_eq!(grid.max_value(), None);
    }

    #[test]
    #[should_panic(expected = "Grid must be at least")]
    fn test_grid_too_small() {
        let _ = Grid::new(1);
    }

    #[test]
    fn test_place_and_lookup() {
        let mut grid = Grid::new(3);
        let id = grid.alloc_tile_id();
        grid.place_tile(Tile::new(id, 2, Coord::new(2, 1))).unwrap();

        let tile = grid.tile_at(Coord::new(2, 1)).unwrap();
        assert_eq!(tile.id, id);
        assert_eq!(tile.position, Coord::new(2, 1));
        assert!(grid.tile_at(Coord::new(1, 2)).is_none());
        assert!(grid.tile_at(Coord::new(3, 0)).is_none());
        assert_eq!(grid.empty_count(), 8);
    }

    #[test]
    fn test_place_on_occupied_cell() {
        let mut grid = Grid::from_values(2, &[2, 0, 0, 0]).unwrap();
        let id = grid.alloc_tile_id();
        let err = grid.place_tile(Tile::new(id, 4, Coord::new(0, 0))).unwrap_err();

        assert_eq!(err, GameError::OccupiedCell { coord: Coord::new(0, 0) });
        assert_eq!(grid.tile_at(Coord::new(0, 0)).unwrap().value, 2);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = Grid::new(2);
        let err = grid.remove_tile(Coord::new(0, 2)).unwrap_err();
        assert_eq!(err, GameError::OutOfBounds { coord: Coord::new(0, 2), size: 2 });

        let err = grid
            .place_tile(Tile::new(TileId(0), 2, Coord::new(5, 5)))
            .unwrap_err();
        assert!(matches!(err, GameError::OutOfBounds { .. }));
    }

    #[test]
    fn test_remove_tile() {
        let mut grid = Grid::from_values(2, &[2, 4, 0, 0]).unwrap();

        let removed = grid.remove_tile(Coord::new(1, 0)).unwrap();
        assert_eq!(removed.map(|t| t.value), Some(4));
        assert_eq!(grid.remove_tile(Coord::new(1, 0)).unwrap(), None);
        assert_eq!(grid.values(), vec![2, 0, 0, 0]);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let grid = Grid::from_values(2, &[0, 2, 4, 0]).unwrap();
        assert_eq!(grid.empty_cells(), vec![Coord::new(0, 0), Coord::new(1, 1)]);
    }

    #[test]
    fn test_full_grid_has_no_empty_cell() {
        let grid = Grid::from_values(2, &[2, 4, 8, 16]).unwrap();
        assert!(!grid.has_empty_cell());
        assert!(grid.empty_cells().is_empty());
        assert_eq!(grid.max_value(), Some(16));
    }

    #[test]
    fn test_from_values_assigns_ids_in_order() {
        let grid = Grid::from_values(2, &[2, 0, 4, 8]).unwrap();
        let ids: Vec<_> = grid.tiles().map(|t| t.id.raw()).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(grid.next_tile_id(), TileId(3));
    }

    #[test]
    fn test_from_values_rejects_bad_input() {
        assert_eq!(
            Grid::from_values(2, &[2, 3, 0, 0]).unwrap_err(),
            GameError::InvalidTileValue(3)
        );
        assert!(matches!(
            Grid::from_values(2, &[2, 0, 0]).unwrap_err(),
            GameError::Config(ConfigError::PresetSize { got: 3, expected: 4 })
        ));
        assert!(Grid::from_values(1, &[2]).is_err());
    }

    #[test]
    fn test_place_advances_allocator() {
        let mut grid = Grid::new(2);
        grid.place_tile(Tile::new(TileId(10), 2, Coord::new(0, 0))).unwrap();
        assert_eq!(grid.alloc_tile_id(), TileId(11));
    }

    #[test]
    fn test_place_max_id_saturates_allocator() {
        let mut grid = Grid::new(2);
        grid.place_tile(Tile::new(TileId(5), 2, Coord::new(1, 1))).unwrap();
        grid.place_tile(Tile::new(TileId(u64::MAX), 4, Coord::new(0, 0))).unwrap();

        assert_eq!(grid.next_tile_id(), TileId(u64::MAX));
        assert_eq!(grid.tile_at(Coord::new(0, 0)).map(|t| t.id), Some(TileId(u64::MAX)));
    }

    #[test]
    fn test_clear_keeps_ids_unique() {
        let mut grid = Grid::from_values(2, &[2, 2, 2, 2]).unwrap();
        grid.clear();

        assert_eq!(grid.empty_count(), 4);
        assert_eq!(grid.alloc_tile_id(), TileId(4));
    }

    #[test]
    fn test_snapshot_clone_is_independent() {
        let mut grid = Grid::from_values(2, &[2, 0, 0, 0]).unwrap();
        let snapshot = grid.clone();

        grid.remove_tile(Coord::new(0, 0)).unwrap();

        assert_eq!(snapshot.values(), vec![2, 0, 0, 0]);
        assert_ne!(snapshot, grid);
    }

    #[test]
    fn test_display() {
        let grid = Grid::from_values(2, &[2, 0, 0, 2048]).unwrap();
        let display = format!("{}", grid);
        assert!(display.starts_with("+------+------+"));
        assert!(display.contains("  2   |"));
        assert!(display.contains(" 2048 |"));
    }

    #[test]
    fn test_serialization() {
        let grid = Grid::from_values(2, &[2, 0, 4, 0]).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let deserialized: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, deserialized);
    }
}
