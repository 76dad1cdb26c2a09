//! Reversible board commands.
//!
//! A [`Command`] records enough to both re-apply and exactly undo one
//! change to a [`Grid`]:
//!
//! - `Swipe` keeps full before/after snapshots. Snapshots are `im`-backed,
//!   so holding them costs O(1) per command and redo reproduces merge ids
//!   exactly instead of recomputing them.
//! - `SpawnTile` keeps the placed tile (which carries its cell).
//! - `Turn` is one player move: a swipe and the spawn that followed it,
//!   undone and redone as a single unit.

use serde::{Deserialize, Serialize};

use crate::core::{Result, Tile};
use crate::grid::Grid;
use crate::rules::Direction;

/// A swipe, captured as board snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwipeCommand {
    pub direction: Direction,
    before: Grid,
    after: Grid,
}

impl SwipeCommand {
    /// Record a swipe from `before` to `after`.
    #[must_use]
    pub fn new(direction: Direction, before: Grid, after: Grid) -> Self {
        Self {
            direction,
            before,
            after,
        }
    }

    /// Board before the swipe.
    #[must_use]
    pub fn before(&self) -> &Grid {
        &self.before
    }

    /// Board after the swipe.
    #[must_use]
    pub fn after(&self) -> &Grid {
        &self.after
    }

    fn apply(&self, grid: &mut Grid) {
        *grid = self.after.clone();
    }

    fn invert(&self, grid: &mut Grid) {
        *grid = self.before.clone();
    }
}

/// A spawned tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnCommand {
    pub tile: Tile,
}

impl SpawnCommand {
    #[must_use]
    pub fn new(tile: Tile) -> Self {
        Self { tile }
    }

    fn apply(&self, grid: &mut Grid) -> Result<()> {
        grid.place_tile(self.tile)
    }

    fn invert(&self, grid: &mut Grid) -> Result<()> {
        let removed = grid.remove_tile(self.tile.position)?;
        debug_assert_eq!(removed, Some(self.tile), "undo removed the wrong tile");
        Ok(())
    }
}

/// One reversible change to the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Swipe(SwipeCommand),
    SpawnTile(SpawnCommand),
    /// A full player turn.
    Turn {
        swipe: SwipeCommand,
        spawn: SpawnCommand,
    },
}

impl Command {
    /// Apply the forward effect.
    ///
    /// On error `grid` may be partially modified; callers that need
    /// atomicity apply to a clone (see [`CommandHistory`](super::CommandHistory)).
    pub fn apply(&self, grid: &mut Grid) -> Result<()> {
        match self {
            Command::Swipe(swipe) => {
                swipe.apply(grid);
                Ok(())
            }
            Command::SpawnTile(spawn) => spawn.apply(grid),
            Command::Turn { swipe, spawn } => {
                swipe.apply(grid);
                spawn.apply(grid)
            }
        }
    }

    /// Apply the reverse effect, restoring the state before [`Command::apply`].
    pub fn invert(&self, grid: &mut Grid) -> Result<()> {
        match self {
            Command::Swipe(swipe) => {
                swipe.invert(grid);
                Ok(())
            }
            Command::SpawnTile(spawn) => spawn.invert(grid),
            Command::Turn { swipe, spawn } => {
                spawn.invert(grid)?;
                swipe.invert(grid);
                Ok(())
            }
        }
    }

    /// Swipe direction, if this command contains a swipe.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Command::Swipe(swipe) | Command::Turn { swipe, .. } => Some(swipe.direction),
            Command::SpawnTile(_) => None,
        }
    }

    /// Spawned tile, if this command contains a spawn.
    #[must_use]
    pub fn spawned(&self) -> Option<Tile> {
        match self {
            Command::SpawnTile(spawn) | Command::Turn { spawn, .. } => Some(spawn.tile),
            Command::Swipe(_) => None,
        }
    }
}
