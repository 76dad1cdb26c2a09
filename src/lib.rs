//! # merge-grid
//!
//! Engine core for a sliding-tile merge puzzle (2048-style).
//!
//! ## Design Principles
//!
//! 1. **Board-Size Agnostic**: Every rule works on any N×N board, N ≥ 2.
//!    Size, win threshold and spawn odds come from `GameConfig`.
//!
//! 2. **Single Owner**: `GameSession` exclusively owns the board. Rules and
//!    history borrow it mutably for one call and never keep it.
//!
//! 3. **Turns Are Atomic**: A swipe and the spawn that follows it form one
//!    `Command::Turn`, undone and redone as a unit.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) board snapshots via `im-rs`, so
//!   swipe commands store whole boards and terminal probes run on copies.
//!
//! - **Deterministic Spawning**: ChaCha8-seeded RNG; same seed and inputs
//!   replay the same game.
//!
//! ## Modules
//!
//! - `core`: Tiles, coordinates, configuration, RNG, errors
//! - `grid`: Board storage and render snapshots
//! - `rules`: Directions, move engine, spawner, win/loss checks
//! - `history`: Reversible commands and the undo/redo stacks
//! - `session`: Turn orchestration, the surface a UI calls

pub mod core;
pub mod grid;
pub mod rules;
pub mod history;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Coord, Tile, TileId,
    GameConfig, GameRng, GameRngState,
    ConfigError, GameError, Result,
};

pub use crate::grid::{BoardSnapshot, Grid, TileView};

pub use crate::rules::{Direction, Merge, SwipeOutcome, TileMotion};

pub use crate::history::{Command, CommandHistory, SpawnCommand, SwipeCommand};

pub use crate::session::{GameSession, MoveResult};
