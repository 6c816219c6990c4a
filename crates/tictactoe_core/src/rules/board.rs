//! Board derivation.

use crate::{Board, MoveLog};
use tracing::instrument;

/// Folds the log onto a copy of [`Board::EMPTY`].
///
/// Each move sets its cell to its player. Moves are folded newest first,
/// so if two moves ever share a cell the older one is left visible.
#[instrument(level = "trace", skip_all, fields(moves = log.len()))]
pub fn derive_board(log: &MoveLog) -> Board {
    log.iter().fold(Board::EMPTY, |mut board, mv| {
        board.place(mv.position, mv.player);
        board
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Position, Square, Symbol};

    #[test]
    fn test_empty_log_gives_empty_board() {
        assert_eq!(derive_board(&MoveLog::new()), Board::EMPTY);
    }

    #[test]
    fn test_single_move() {
        let log = MoveLog::from_newest_first([Move::new(Symbol::X, Position::TopLeft)]);
        let board = derive_board(&log);

        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Symbol::X));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_every_move_lands() {
        let log = MoveLog::from_chronological([
            Move::new(Symbol::X, Position::Center),
            Move::new(Symbol::O, Position::TopRight),
            Move::new(Symbol::X, Position::BottomLeft),
        ]);
        let board = derive_board(&log);

        assert_eq!(board.occupied_count(), 3);
        for mv in &log {
            assert_eq!(board.get(mv.position), Square::Occupied(mv.player));
        }
    }

    #[test]
    fn test_duplicate_cell_keeps_oldest() {
        let log = MoveLog::from_chronological([
            Move::new(Symbol::X, Position::Center),
            Move::new(Symbol::O, Position::Center),
        ]);
        assert_eq!(
            derive_board(&log).get(Position::Center),
            Square::Occupied(Symbol::X)
        );
    }
}
