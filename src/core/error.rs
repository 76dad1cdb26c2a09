//! Error types for the engine.
//!
//! `OccupiedCell`, `OutOfBounds`, `BoardFull` and `InvalidTileValue` are
//! contract violations by the caller. `NothingToUndo` and `NothingToRedo`
//! are expected during normal play and should be treated as no-ops.

use thiserror::Error;

use super::tile::Coord;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;

/// Errors emitted by the grid, the spawner, the history and the session.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GameError {
    /// A tile was placed on a cell that already holds one.
    #[error("cell {coord} is already occupied")]
    OccupiedCell { coord: Coord },

    /// A coordinate outside the board was used.
    #[error("cell {coord} is outside a {size}x{size} board")]
    OutOfBounds { coord: Coord, size: usize },

    /// The spawner was called on a board with no empty cell.
    #[error("no empty cell to spawn a tile into")]
    BoardFull,

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,

    /// A tile value that is not a power of two of at least 2.
    #[error("invalid tile value {0}")]
    InvalidTileValue(u64),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl GameError {
    /// Whether this error is an expected, recoverable condition
    /// (an unavailable undo or redo) rather than a broken contract.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::NothingToUndo | GameError::NothingToRedo)
    }
}

/// Rejected [`GameConfig`](super::GameConfig) values.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid size must be at least {min}, got {got}")]
    InvalidSize { got: usize, min: usize },

    #[error("grid size {0} has more cells than fit in memory")]
    SizeOverflow(usize),

    #[error("win threshold must be at least 2, got {0}")]
    InvalidWinThreshold(u64),

    #[error("four-spawn probability must be within [0, 1], got {0}")]
    InvalidFourProbability(f64),

    #[error("preset has {got} cells, expected {expected}")]
    PresetSize { got: usize, expected: usize },
}
