//! Game rules.
//!
//! Pure functions over a [`Board`](super::Board). They hold no state, so
//! the engine and the invariant checks share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_line};
