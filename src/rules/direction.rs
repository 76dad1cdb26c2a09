//! Swipe directions and line traversal order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Coord;

/// One board line, destination edge first.
pub type Line = SmallVec<[Coord; 8]>;

/// The four swipe directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Direction {
    /// All four directions, in probe order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Convert a u8 (0=Up, 1=Down, 2=Left, 3=Right).
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Direction> {
        Self::ALL.get(usize::from(value)).copied()
    }

    /// Line `index` of a `size`×`size` board, ordered so the edge tiles
    /// slide toward comes first.
    ///
    /// Left/Right lines are rows, Up/Down lines are columns.
    ///
    /// ```
    /// use merge_grid::core::Coord;
    /// use merge_grid::rules::Direction;
    ///
    /// let line = Direction::Right.line(3, 1);
    /// assert_eq!(line.as_slice(), &[Coord::new(2, 1), Coord::new(1, 1), Coord::new(0, 1)]);
    /// ```
    #[must_use]
    pub fn line(self, size: usize, index: usize) -> Line {
        match self {
            Direction::Left => (0..size).map(|col| Coord::new(col, index)).collect(),
            Direction::Right => (0..size).rev().map(|col| Coord::new(col, index)).collect(),
            Direction::Up => (0..size).map(|row| Coord::new(index, row)).collect(),
            Direction::Down => (0..size).rev().map(|row| Coord::new(index, row)).collect(),
        }
    }

    /// Every line of the board for this direction.
    pub fn lines(self, size: usize) -> impl Iterator<Item = Line> {
        (0..size).map(move |index| self.line(size, index))
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}
