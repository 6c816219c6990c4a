//! Terminal front end for `tictactoe_core`.
//!
//! # Architecture
//!
//! - **Config**: TOML file with player names and the log file location
//! - **CLI**: `play` (interactive) and `replay` (scripted) commands
//! - **TUI**: `ratatui` front end driving a [`GameSession`](tictactoe_core::GameSession)
//! - **Replay**: folds a list of moves and prints the derived state

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod replay;
mod tui;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError};
pub use replay::{ReplayError, Report, apply_moves, render_json, render_text};
pub use tui::{App, Control, Mode, draw, move_cursor, run_tui};
