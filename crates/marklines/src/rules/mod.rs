//! Game rules over a [`Grid`](crate::Grid).
//!
//! Pure functions with no match state, so they can be reused by hosts that
//! keep their own turn bookkeeping.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Axis, Line, find_line};
