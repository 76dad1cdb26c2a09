//! Undo/redo stacks.

use tracing::trace;

use crate::core::{GameError, Result};
use crate::grid::Grid;

use super::command::Command;

/// Two-stack command history.
///
/// `done` and `undone` are both ordered most-recent-last. Executing a new
/// command invalidates everything on `undone`.
///
/// Every operation applies its command to a clone of the grid first and
/// only commits on success, so a failing command leaves both the grid and
/// the stacks exactly as they were.
#[derive(Clone, Debug, Default)]
pub struct CommandHistory {
    done: Vec<Command>,
    undone: Vec<Command>,
}

impl CommandHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `command` to `grid`, push it on the undo stack, drop redos.
    pub fn execute(&mut self, command: Command, grid: &mut Grid) -> Result<()> {
        let mut scratch = grid.clone();
        command.apply(&mut scratch)?;
        *grid = scratch;

        trace!(direction = ?command.direction(), dropped_redos = self.undone.len(), "execute");
        self.undone.clear();
        self.done.push(command);
        Ok(())
    }

    /// Revert the most recent command.
    pub fn undo(&mut self, grid: &mut Grid) -> Result<()> {
        let command = self.done.last().ok_or(GameError::NothingToUndo)?;
        let mut scratch = grid.clone();
        command.invert(&mut scratch)?;
        *grid = scratch;

        if let Some(command) = self.done.pop() {
            trace!(direction = ?command.direction(), "undo");
            self.undone.push(command);
        }
        Ok(())
    }

    /// Re-apply the most recently undone command.
    pub fn redo(&mut self, grid: &mut Grid) -> Result<()> {
        let command = self.undone.last().ok_or(GameError::NothingToRedo)?;
        let mut scratch = grid.clone();
        command.apply(&mut scratch)?;
        *grid = scratch;

        if let Some(command) = self.undone.pop() {
            trace!(direction = ?command.direction(), "redo");
            self.done.push(command);
        }
        Ok(())
    }

    #[must_use]
    pub fn is_undo_available(&self) -> bool {
        !self.done.is_empty()
    }

    #[must_use]
    pub fn is_redo_available(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Number of commands that can be undone.
    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.done.len()
    }

    /// Number of commands that can be redone.
    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.undone.len()
    }

    /// The command `undo` would revert next.
    #[must_use]
    pub fn peek_undo(&self) -> Option<&Command> {
        self.done.last()
    }

    /// Forget everything that could be undone.
    pub fn clear_undos(&mut self) {
        self.done.clear();
    }

    /// Forget everything that could be redone.
    pub fn clear_redos(&mut self) {
        self.undone.clear();
    }

    /// Forget both stacks.
    pub fn clear(&mut self) {
        self.clear_undos();
        self.clear_redos();
    }
}
