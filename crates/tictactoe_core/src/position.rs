//! Board positions addressed by row and column.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// One of the nine cells of the board.
///
/// Cells are named rather than numbered so an out-of-range coordinate
/// cannot be constructed. Use [`Position::from_coords`] to go from a
/// `(row, col)` pair and [`Position::row`] / [`Position::col`] to go back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    /// Row 0, column 0.
    TopLeft,
    /// Row 0, column 1.
    TopCenter,
    /// Row 0, column 2.
    TopRight,
    /// Row 1, column 0.
    MiddleLeft,
    /// Row 1, column 1.
    Center,
    /// Row 1, column 2.
    MiddleRight,
    /// Row 2, column 0.
    BottomLeft,
    /// Row 2, column 1.
    BottomCenter,
    /// Row 2, column 2.
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Creates a position from a row and column, each in `0..=2`.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row > 2 || col > 2 {
            return None;
        }
        Self::from_index(row * 3 + col)
    }

    /// Creates a position from its row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Row, 0 at the top.
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Column, 0 at the left.
    pub fn col(self) -> usize {
        self.index() % 3
    }

    /// Human-readable cell name.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Parses `"row,col"`, a keypad digit `"1"`-`"9"`, or a cell name.
    ///
    /// Cell names are matched ignoring case, spaces, hyphens and underscores,
    /// so `"top-left"`, `"TopLeft"` and `"top_left"` are all accepted.
    #[instrument]
    pub fn parse(s: &str) -> Result<Self, PositionParseError> {
        let trimmed = s.trim();
        let err = || PositionParseError {
            input: s.to_string(),
        };

        if let Some((row, col)) = trimmed.split_once(',') {
            let row = row.trim().parse::<usize>().map_err(|_| err())?;
            let col = col.trim().parse::<usize>().map_err(|_| err())?;
            return Self::from_coords(row, col).ok_or_else(err);
        }

        if let Ok(digit) = trimmed.parse::<usize>() {
            return digit
                .checked_sub(1)
                .and_then(Self::from_index)
                .ok_or_else(err);
        }

        let wanted = normalize(trimmed);
        Self::ALL
            .into_iter()
            .find(|pos| normalize(pos.label()) == wanted)
            .ok_or_else(err)
    }

    /// Steps one cell in the given direction, staying put at the edge.
    pub fn step(self, d_row: isize, d_col: isize) -> Self {
        let row = (self.row() as isize + d_row).clamp(0, 2) as usize;
        let col = (self.col() as isize + d_col).clamp(0, 2) as usize;
        Self::from_coords(row, col).unwrap_or(self)
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Position {
    type Err = PositionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Text that does not name a board position.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("unrecognized position {input:?} (expected row,col, a digit 1-9, or a cell name)")]
pub struct PositionParseError {
    /// The rejected input.
    pub input: String,
}

impl std::error::Error for PositionParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coords_round_trip_every_cell() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(Position::from_coords(pos.row(), pos.col()), Some(*pos));
        }
    }

    #[test]
    fn test_out_of_range_coords_rejected() {
        assert_eq!(Position::from_coords(3, 0), None);
        assert_eq!(Position::from_coords(0, 3), None);
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!(Position::parse("0,0"), Ok(Position::TopLeft));
        assert_eq!(Position::parse(" 2 , 1 "), Ok(Position::BottomCenter));
        assert_eq!(Position::parse("5"), Ok(Position::Center));
        assert_eq!(Position::parse("9"), Ok(Position::BottomRight));
        assert_eq!(Position::parse("top-right"), Ok(Position::TopRight));
        assert_eq!(Position::parse("MiddleLeft"), Ok(Position::MiddleLeft));
        assert_eq!(Position::parse("bottom_left"), Ok(Position::BottomLeft));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Position::parse("0").is_err());
        assert!(Position::parse("10").is_err());
        assert!(Position::parse("3,0").is_err());
        assert!(Position::parse("a,b").is_err());
        assert!(Position::parse("top").is_err());
        assert!(Position::parse("").is_err());
    }

    #[test]
    fn test_step_clamps_at_edges() {
        assert_eq!(Position::TopLeft.step(-1, 0), Position::TopLeft);
        assert_eq!(Position::TopLeft.step(0, 1), Position::TopCenter);
        assert_eq!(Position::Center.step(1, 1), Position::BottomRight);
        assert_eq!(Position::BottomRight.step(1, 1), Position::BottomRight);
    }
}
