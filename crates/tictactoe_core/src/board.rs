//! The derived 3x3 grid.

use super::{Position, Symbol};
use serde::{Deserialize, Serialize};

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// No symbol yet.
    #[default]
    Empty,
    /// Cell holding a symbol.
    Occupied(Symbol),
}

impl Square {
    /// The symbol in this cell, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Square::Empty => None,
            Square::Occupied(symbol) => Some(symbol),
        }
    }

    /// True when no symbol has been placed.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

/// 3x3 tic-tac-toe board, indexed `[row][col]`.
///
/// Boards are derived from a [`MoveLog`](crate::MoveLog) and never stored
/// alongside it. [`Board::EMPTY`] is the shared starting grid; since
/// `Board` is `Copy`, every derivation works on its own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Square; 3]; 3],
}

impl Board {
    /// The board before any move.
    pub const EMPTY: Board = Board {
        cells: [[Square::Empty; 3]; 3],
    };

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.cells[pos.row()][pos.col()]
    }

    /// Puts a symbol on a cell, replacing whatever was there.
    pub fn place(&mut self, pos: Position, symbol: Symbol) {
        self.cells[pos.row()][pos.col()] = Square::Occupied(symbol);
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// True when every cell holds a symbol.
    pub fn is_full(&self) -> bool {
        self.occupied_count() == 9
    }

    /// Number of cells holding a symbol.
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|square| !square.is_empty())
            .count()
    }

    /// Rows of squares, top to bottom.
    pub fn rows(&self) -> &[[Square; 3]; 3] {
        &self.cells
    }

    /// Positions that are still free, in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Renders the board as text, showing keypad digits on empty cells.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
                writeln!(f, "---+---+---")?;
            }
            for (c, square) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, "|")?;
                }
                match square {
                    Square::Empty => write!(f, " {} ", r * 3 + c + 1)?,
                    Square::Occupied(symbol) => write!(f, " {} ", symbol)?,
                }
            }
        }
        Ok(())
    }
}
