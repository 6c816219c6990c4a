//! Win detection.

use crate::{Board, PlayerRegistry, Position, Symbol};
use tracing::{debug, instrument};

/// The eight lines that win when filled with one symbol.
///
/// Declared rows first, then columns, then the two diagonals. The order
/// matters for [`winning_symbol`], which reports the last line that matches.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the symbol that fills a winning line, if any.
///
/// All eight lines are scanned and the last match wins. On a board reached
/// by legal play at most one symbol can match, so the tie-break only
/// matters for hand-built boards.
#[instrument(level = "trace", skip_all)]
pub fn winning_symbol(board: &Board) -> Option<Symbol> {
    let mut winner = None;
    for [a, b, c] in WINNING_LINES {
        if let Some(symbol) = board.get(a).symbol() {
            if board.get(b).symbol() == Some(symbol) && board.get(c).symbol() == Some(symbol) {
                winner = Some(symbol);
            }
        }
    }
    winner
}

/// Returns the display name of the winner, or `None` if nobody has won.
///
/// `None` is distinct from `Some("")`: a player renamed to the empty
/// string can still win.
#[instrument(skip_all)]
pub fn derive_winner(board: &Board, registry: &PlayerRegistry) -> Option<String> {
    let symbol = winning_symbol(board)?;
    let name = registry.name(symbol).to_string();
    debug!(%symbol, %name, "Winner found");
    Some(name)
}
