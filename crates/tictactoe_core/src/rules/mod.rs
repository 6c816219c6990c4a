//! Pure functions that fold a move log into game state.
//!
//! None of these functions store anything or fail. They are recomputed
//! from the log on every query, so the log stays the single source of
//! truth.

mod board;
mod draw;
mod outcome;
mod turn;
mod win;

pub use board::derive_board;
pub use draw::is_draw;
pub use outcome::derive_outcome;
pub use turn::derive_active_player;
pub use win::{WINNING_LINES, derive_winner, winning_symbol};
