//! Whose turn it is.

use crate::{MoveLog, Symbol};
use tracing::instrument;

/// Returns the symbol that moves next.
///
/// X moves first. Only the newest move is inspected: the next player is
/// the opponent of whoever played last. Alternation is not re-verified.
#[instrument(level = "trace", skip_all, fields(moves = log.len()))]
pub fn derive_active_player(log: &MoveLog) -> Symbol {
    match log.newest() {
        Some(last) if last.player == Symbol::X => Symbol::O,
        _ => Symbol::X,
    }
}
