//! Moves and move rejection.

use super::{Position, Symbol};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A single placement of a symbol on the board.
///
/// Moves are immutable once created. The session creates them when a
/// submission is accepted and discards them wholesale on restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Cell the symbol was placed on.
    pub position: Position,
    /// Symbol that was placed.
    pub player: Symbol,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Symbol, position: Position) -> Self {
        Self { position, player }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Symbol {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} selected {}, {}",
            self.player,
            self.position.row(),
            self.position.col()
        )
    }
}

/// Reason a submitted move was not appended to the log.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell already holds a symbol.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game has been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// Coordinates outside the 3x3 grid.
    #[display("({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display_uses_coordinates() {
        let mv = Move::new(Symbol::O, Position::MiddleRight);
        assert_eq!(mv.to_string(), "O selected 1, 2");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::SquareOccupied(Position::Center).to_string(),
            "Center is already occupied"
        );
        assert_eq!(
            MoveError::OutOfBounds { row: 3, col: 1 }.to_string(),
            "(3, 1) is off the board"
        );
    }
}
