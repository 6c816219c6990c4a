//! Tic-tac-toe game state derived from an append-only move log.
//!
//! The log of moves is the only stored game state. Everything else, the
//! board, whose turn it is and whether someone has won, is recomputed from
//! the log on demand by the pure functions in [`rules`].
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameSession, Outcome, Position};
//!
//! let mut session = GameSession::new();
//! session.rename_player(tictactoe_core::Symbol::X, "Alice");
//!
//! for pos in [
//!     Position::TopLeft,
//!     Position::Center,
//!     Position::TopCenter,
//!     Position::BottomLeft,
//!     Position::TopRight,
//! ] {
//!     session.submit_move(pos)?;
//! }
//!
//! assert_eq!(session.winner().as_deref(), Some("Alice"));
//! assert!(matches!(session.outcome(), Outcome::Win { .. }));
//! # Ok::<(), tictactoe_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod log;
mod outcome;
mod position;
mod registry;
pub mod rules;
mod session;
mod symbol;
mod view;

pub use action::{Move, MoveError};
pub use board::{Board, Square};
pub use log::{CAPACITY, MoveLog};
pub use outcome::Outcome;
pub use position::{Position, PositionParseError};
pub use registry::{DEFAULT_O_NAME, DEFAULT_X_NAME, PlayerRegistry};
pub use rules::{
    WINNING_LINES, derive_active_player, derive_board, derive_outcome, derive_winner, is_draw,
    winning_symbol,
};
pub use session::GameSession;
pub use symbol::Symbol;
pub use view::GameView;
