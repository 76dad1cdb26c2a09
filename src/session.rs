//! Game session: the surface a UI drives.
//!
//! A session exclusively owns the board, the history and the RNG. One call
//! runs one whole turn:
//!
//! 1. swipe a scratch copy of the board
//! 2. if nothing changed, stop (history untouched)
//! 3. spawn a tile on the scratch copy
//! 4. execute the swipe and spawn as one `Turn` command on the live board
//! 5. evaluate win and loss
//!
//! ```
//! use merge_grid::{Direction, GameConfig, GameSession};
//!
//! let mut session = GameSession::new(GameConfig::default().with_seed(7)).unwrap();
//! assert_eq!(session.snapshot().tiles.len(), 2);
//!
//! let result = session.apply_move(Direction::Left).unwrap();
//! if result.changed {
//!     assert!(session.can_undo());
//!     session.undo_turn().unwrap();
//! }
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, instrument};

use crate::core::{GameConfig, GameRng, GameRngState, Result, Tile};
use crate::grid::{BoardSnapshot, Grid};
use crate::history::{Command, CommandHistory, SpawnCommand, SwipeCommand};
use crate::rules::{self, Direction, SwipeOutcome};

/// Number of tiles on a fresh board.
pub const STARTING_TILES: usize = 2;

/// Result of [`GameSession::apply_move`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// Whether the swipe changed the board (and a tile was spawned).
    pub changed: bool,
    /// No legal move remains.
    pub game_over: bool,
    /// Some tile has reached the win threshold.
    pub won: bool,
    /// Merges and motions, for animation.
    pub outcome: SwipeOutcome,
    /// Tile spawned after the swipe.
    pub spawned: Option<Tile>,
}

/// A single game in progress.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    grid: Grid,
    history: CommandHistory,
    rng: GameRng,
}

impl GameSession {
    /// Validate `config` and start a new game.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;

        let mut session = Self {
            grid: Grid::new(config.size),
            history: CommandHistory::new(),
            rng: GameRng::new(config.seed),
            config,
        };
        session.start_new_game()?;
        Ok(session)
    }

    /// Empty the board, spawn the starting tiles, forget all history.
    pub fn start_new_game(&mut self) -> Result<()> {
        self.grid.clear();
        for _ in 0..STARTING_TILES {
            rules::spawn_tile(&mut self.grid, &mut self.rng, self.config.four_probability)?;
        }
        self.history.clear();

        debug!(size = self.config.size, "new game");
        Ok(())
    }

    /// Replace the board with a preset (row-major values, `0` = empty) and
    /// forget all history. Used for scripted setups such as tutorials.
    pub fn start_with_values(&mut self, values: &[u64]) -> Result<()> {
        self.grid = Grid::from_values(self.config.size, values)?;
        self.history.clear();

        debug!(tiles = self.grid.tile_count(), "preset game");
        Ok(())
    }

    /// Play one turn in `direction`.
    ///
    /// A move that changes nothing spawns nothing and leaves the history
    /// exactly as it was.
    #[instrument(skip(self), level = "debug")]
    pub fn apply_move(&mut self, direction: Direction) -> Result<MoveResult> {
        let mut scratch = self.grid.clone();
        let outcome = rules::swipe(&mut scratch, direction);

        if !outcome.changed {
            debug!("move had no effect");
            return Ok(MoveResult {
                changed: false,
                game_over: self.is_game_over(),
                won: self.has_won(),
                outcome,
                spawned: None,
            });
        }

        let after = scratch.clone();
        let spawned = rules::spawn_tile(&mut scratch, &mut self.rng, self.config.four_probability)?;
        let turn = Command::Turn {
            swipe: SwipeCommand::new(direction, self.grid.clone(), after),
            spawn: SpawnCommand::new(spawned),
        };
        self.history.execute(turn, &mut self.grid)?;
        debug_assert_eq!(self.grid, scratch);

        let game_over = self.is_game_over();
        let won = self.has_won();
        debug!(merges = outcome.merges.len(), game_over, won, "turn played");

        Ok(MoveResult {
            changed: true,
            game_over,
            won,
            outcome,
            spawned: Some(spawned),
        })
    }

    /// Revert the last turn (swipe and spawn together).
    pub fn undo_turn(&mut self) -> Result<()> {
        let direction = self.history.peek_undo().and_then(Command::direction);
        self.history.undo(&mut self.grid)?;
        debug!(?direction, undos_left = self.history.undo_len(), "undo turn");
        Ok(())
    }

    /// Replay the last undone turn.
    pub fn redo_turn(&mut self) -> Result<()> {
        self.history.redo(&mut self.grid)?;
        debug!(redos_left = self.history.redo_len(), "redo turn");
        Ok(())
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.is_undo_available()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.is_redo_available()
    }

    // === Read access ===

    /// Render view of the current board.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::of(&self.grid)
    }

    /// Grid dimension N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// True iff no direction changes the board.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        rules::is_game_over(&self.grid)
    }

    /// True iff a tile has reached the configured threshold.
    #[must_use]
    pub fn has_won(&self) -> bool {
        rules::has_won(&self.grid, self.config.win_threshold)
    }

    /// Directions that would change the board.
    #[must_use]
    pub fn legal_directions(&self) -> SmallVec<[Direction; 4]> {
        rules::legal_directions(&self.grid)
    }

    /// Spawn RNG position, for reproducing a session.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}
