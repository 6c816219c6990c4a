//! Game outcome.

use super::Symbol;
use serde::{Deserialize, Serialize};

/// Where the game stands, derived from the log and registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Moves can still be made.
    InProgress,
    /// A symbol filled a winning line.
    Win {
        /// Winning symbol.
        symbol: Symbol,
        /// Its registered name when the outcome was derived.
        name: String,
    },
    /// All nine cells played with no winner.
    Draw,
}

impl Outcome {
    /// Returns the winning symbol if there is one.
    pub fn winner(&self) -> Option<Symbol> {
        match self {
            Outcome::Win { symbol, .. } => Some(*symbol),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win { name, .. } => write!(f, "{} won!", name),
            Outcome::Draw => write!(f, "It's a draw!"),
        }
    }
}
