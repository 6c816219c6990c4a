//! Outcome classification.

use super::{derive_board, derive_winner, is_draw, winning_symbol};
use crate::{MoveLog, Outcome, PlayerRegistry};
use tracing::instrument;

/// Classifies the game: won, drawn, or still going.
#[instrument(level = "trace", skip_all, fields(moves = log.len()))]
pub fn derive_outcome(log: &MoveLog, registry: &PlayerRegistry) -> Outcome {
    let board = derive_board(log);
    let winner = derive_winner(&board, registry);

    match (winning_symbol(&board), winner) {
        (Some(symbol), Some(name)) => Outcome::Win { symbol, name },
        (_, winner) if is_draw(log, winner.as_deref()) => Outcome::Draw,
        _ => Outcome::InProgress,
    }
}
