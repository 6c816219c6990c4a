//! Draw detection.

use crate::{CAPACITY, MoveLog};
use tracing::instrument;

/// True when exactly nine moves have been played and nobody won.
///
/// `winner` is the result of [`derive_winner`](super::derive_winner).
#[instrument(level = "trace", skip(log), fields(moves = log.len()))]
pub fn is_draw(log: &MoveLog, winner: Option<&str>) -> bool {
    log.len() == CAPACITY && winner.is_none()
}
