//! Game rules: swipe directions, the move engine, spawning, terminal checks.
//!
//! Everything here is a free function over a borrowed [`Grid`](crate::grid::Grid).
//! None of it retains the grid past the call.

pub mod direction;
pub mod swipe;
pub mod spawn;
pub mod terminal;

pub use direction::{Direction, Line};
pub use swipe::{swipe, would_change, Merge, SwipeOutcome, TileMotion};
pub use spawn::{spawn_tile, RARE_SPAWN_VALUE, SPAWN_VALUE};
pub use terminal::{has_won, is_game_over, legal_directions};
