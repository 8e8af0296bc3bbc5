//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! the engine so invariants and contracts can reuse them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, has_line, winner};
