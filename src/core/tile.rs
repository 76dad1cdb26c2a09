//! Tile identification and placement.
//!
//! Every tile ever created on a board gets a unique `TileId`. A tile that
//! only slides keeps its id for the rest of the turn, so a renderer can
//! correlate old and new positions. A merge retires both parents and
//! produces a new tile with a fresh id.
//!
//! ## Usage
//!
//! ```
//! use merge_grid::core::{Coord, Tile, TileId};
//!
//! let tile = Tile::new(TileId(7), 2, Coord::new(0, 3));
//! assert_eq!(tile.value, 2);
//!
//! // Sliding keeps the identity.
//! let slid = tile.moved_to(Coord::new(0, 0));
//! assert_eq!(slid.id, tile.id);
//! assert_eq!(slid.position, Coord::new(0, 0));
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a tile.
///
/// Ids are allocated by the owning [`Grid`](crate::grid::Grid) and never
/// reused within a board's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u64);

impl TileId {
    /// Create a tile ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for TileId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Grid coordinate, 0-indexed. Column first, row second.
///
/// Row 0 is the top edge, column 0 the left edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub col: usize,
    pub row: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Whether this coordinate lies on a `size`×`size` board.
    #[must_use]
    pub const fn in_bounds(self, size: usize) -> bool {
        self.col < size && self.row < size
    }

    /// Row-major index on a `size`×`size` board.
    #[must_use]
    pub const fn index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Inverse of [`Coord::index`].
    #[must_use]
    pub const fn from_index(index: usize, size: usize) -> Self {
        Self {
            col: index % size,
            row: index / size,
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// A numbered tile sitting on the board.
///
/// Values are powers of two, at least 2. The `position` always matches the
/// cell the grid stores the tile under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub value: u64,
    pub position: Coord,
}

impl Tile {
    #[must_use]
    pub const fn new(id: TileId, value: u64, position: Coord) -> Self {
        Self { id, value, position }
    }

    /// The same tile (same identity and value) at a new position.
    #[must_use]
    pub const fn moved_to(self, position: Coord) -> Self {
        Self { position, ..self }
    }

    /// Value of the tile produced by merging two tiles of this value.
    ///
    /// Returns `None` if doubling would overflow, in which case the pair
    /// does not merge.
    #[must_use]
    pub const fn merged_value(&self) -> Option<u64> {
        self.value.checked_mul(2)
    }

    /// Whether `value` is a legal tile value (a power of two, at least 2).
    #[must_use]
    pub const fn is_valid_value(value: u64) -> bool {
        value >= 2 && value.is_power_of_two()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_id() {
        let id = TileId::new(12);
        assert_eq!(id.raw(), 12);
        assert_eq!(TileId::from(12), id);
        assert_eq!(format!("{}", id), "Tile(12)");
    }

    #[test]
    fn test_coord_index_round_trip() {
        let size = 5;
        for index in 0..size * size {
            let coord = Coord::from_index(index, size);
            assert!(coord.in_bounds(size));
            assert_eq!(coord.index(size), index);
        }
        assert_eq!(Coord::new(3, 1).index(4), 7);
    }

    #[test]
    fn test_coord_bounds() {
        assert!(Coord::new(3, 3).in_bounds(4));
        assert!(!Coord::new(4, 0).in_bounds(4));
        assert!(!Coord::new(0, 4).in_bounds(4));
    }

    #[test]
    fn test_moved_to_keeps_identity() {
        let tile = Tile::new(TileId(3), 8, Coord::new(2, 2));
        let moved = tile.moved_to(Coord::new(0, 2));

        assert_eq!(moved.id, TileId(3));
        assert_eq!(moved.value, 8);
        assert_eq!(moved.position, Coord::new(0, 2));
    }

    #[test]
    fn test_merged_value() {
        let tile = Tile::new(TileId(0), 1024, Coord::new(0, 0));
        assert_eq!(tile.merged_value(), Some(2048));

        let huge = Tile::new(TileId(0), 1 << 63, Coord::new(0, 0));
        assert_eq!(huge.merged_value(), None);
    }

    #[test]
    fn test_valid_values() {
        assert!(Tile::is_valid_value(2));
        assert!(Tile::is_valid_value(4096));
        assert!(Tile::is_valid_value(1 << 40));
        assert!(!Tile::is_valid_value(0));
        assert!(!Tile::is_valid_value(1));
        assert!(!Tile::is_valid_value(6));
    }

    #[test]
    fn test_serialization() {
        let tile = Tile::new(TileId(9), 16, Coord::new(1, 2));
        let json = serde_json::to_string(&tile).unwrap();
        let deserialized: Tile = serde_json::from_str(&json).unwrap();
        assert_eq!(tile, deserialized);
    }
}
