//! Undo/redo command history.
//!
//! Commands are a plain enum with an `apply`/`invert` pair per variant,
//! dispatched by `match`. The history owns its commands; the grid is only
//! borrowed for the duration of each call.

mod command;
mod manager;

pub use command::{Command, SpawnCommand, SwipeCommand};
pub use manager::CommandHistory;
