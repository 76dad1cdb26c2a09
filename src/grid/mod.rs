//! Board storage and read-only views.
//!
//! The [`Grid`] is a plain data container. Sliding, merging and spawning
//! live in [`rules`](crate::rules); they borrow a grid mutably for one call.

mod state;
mod snapshot;

pub use state::Grid;
pub use snapshot::{BoardSnapshot, TileView};
