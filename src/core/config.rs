//! Game configuration.
//!
//! Embedders configure a session at construction:
//! - `size`: grid dimension N (N×N board)
//! - `win_threshold`: tile value that counts as a win
//! - `four_probability`: chance a spawned tile is a 4 instead of a 2
//! - `seed`: RNG seed for reproducible sessions
//!
//! The engine never hard-wires these values; the defaults are the classic
//! 4×4 / 2048 / 10% rules.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Smallest supported board.
pub const MIN_SIZE: usize = 2;

/// Smallest meaningful win threshold (the smallest tile value).
pub const MIN_WIN_THRESHOLD: u64 = 2;

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid dimension (default: 4).
    pub size: usize,

    /// Tile value that triggers a win (default: 2048).
    pub win_threshold: u64,

    /// Probability that a spawned tile is a 4 (default: 0.1).
    pub four_probability: f64,

    /// Seed for the spawn RNG (default: 42).
    /// Same seed and same inputs produce the same game.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: 4,
            win_threshold: 2048,
            four_probability: 0.1,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grid dimension.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the win threshold.
    #[must_use]
    pub fn with_win_threshold(mut self, threshold: u64) -> Self {
        self.win_threshold = threshold;
        self
    }

    /// Set the probability of spawning a 4.
    #[must_use]
    pub fn with_four_probability(mut self, probability: f64) -> Self {
        self.four_probability = probability;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of cells on the board, or `None` if N² overflows.
    #[must_use]
    pub fn cell_count(&self) -> Option<usize> {
        self.size.checked_mul(self.size)
    }

    /// Check every field.
    ///
    /// Any N ≥ 2 whose cell count fits in `usize` is accepted. The win
    /// threshold only has to be reachable: a tile wins once its value is
    /// at least the threshold, so it need not be a power of two.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < MIN_SIZE {
            return Err(ConfigError::InvalidSize {
                got: self.size,
                min: MIN_SIZE,
            });
        }
        if self.cell_count().is_none() {
            return Err(ConfigError::SizeOverflow(self.size));
        }
        if self.win_threshold < MIN_WIN_THRESHOLD {
            return Err(ConfigError::InvalidWinThreshold(self.win_threshold));
        }
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(ConfigError::InvalidFourProbability(self.four_probability));
        }
        Ok(())
    }
}
