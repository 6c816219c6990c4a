//! Player symbols.

use serde::{Deserialize, Serialize};

/// The mark a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Symbol {
    /// Player X (moves first).
    X,
    /// Player O (moves second).
    O,
}

impl Symbol {
    /// Returns the other symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_is_involution() {
        for symbol in Symbol::iter() {
            assert_ne!(symbol.opponent(), symbol);
            assert_eq!(symbol.opponent().opponent(), symbol);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Symbol::X.to_string(), "X");
        assert_eq!(Symbol::O.to_string(), "O");
    }
}
