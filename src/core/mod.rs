//! Core engine types: tiles, coordinates, configuration, RNG, errors.
//!
//! Everything here is a leaf: no module in `core` depends on the grid,
//! the rules or the history.

pub mod tile;
pub mod config;
pub mod rng;
pub mod error;

pub use tile::{Coord, Tile, TileId};
pub use config::{GameConfig, MIN_SIZE, MIN_WIN_THRESHOLD};
pub use rng::{GameRng, GameRngState};
pub use error::{ConfigError, GameError, Result};
