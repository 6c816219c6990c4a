//! Property tests over arbitrary legal move logs.

use proptest::prelude::*;
use tictactoe_core::{
    derive_active_player, derive_board, derive_winner, is_draw, winning_symbol, Move, MoveLog,
    PlayerRegistry, Position, Square, Symbol, WINNING_LINES,
};

/// Distinct cells in play order, 0 to 9 of them, with alternating players.
fn arb_moves() -> impl Strategy<Value = Vec<Move>> {
    (Just(Position::ALL.to_vec()).prop_shuffle(), 0usize..=9).prop_map(|(cells, n)| {
        cells
            .into_iter()
            .take(n)
            .enumerate()
            .map(|(i, pos)| {
                let player = if i % 2 == 0 { Symbol::X } else { Symbol::O };
                Move::new(player, pos)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn active_player_follows_newest(moves in arb_moves()) {
        let log = MoveLog::from_chronological(moves.clone());
        let expected = match moves.last() {
            None => Symbol::X,
            Some(last) => last.player.opponent(),
        };
        prop_assert_eq!(derive_active_player(&log), expected);
        // Equivalent to the oldest-first parity rule.
        let parity = if log.len() % 2 == 0 { Symbol::X } else { Symbol::O };
        prop_assert_eq!(derive_active_player(&log), parity);
    }

    #[test]
    fn board_has_one_cell_per_move(moves in arb_moves()) {
        let log = MoveLog::from_chronological(moves.clone());
        let board = derive_board(&log);

        prop_assert_eq!(board.occupied_count(), moves.len());
        for mv in &moves {
            prop_assert_eq!(board.get(mv.position), Square::Occupied(mv.player));
        }
    }

    #[test]
    fn board_ignores_fold_order(moves in arb_moves()) {
        let forward = MoveLog::from_newest_first(moves.clone());
        let reversed = MoveLog::from_newest_first(moves.into_iter().rev());
        prop_assert_eq!(derive_board(&forward), derive_board(&reversed));
    }

    #[test]
    fn winner_iff_uniform_line(moves in arb_moves()) {
        let log = MoveLog::from_chronological(moves);
        let board = derive_board(&log);
        let uniform = WINNING_LINES.iter().any(|line| {
            let first = board.get(line[0]);
            !first.is_empty() && line.iter().all(|&pos| board.get(pos) == first)
        });

        let winner = derive_winner(&board, &PlayerRegistry::default());
        prop_assert_eq!(winner.is_some(), uniform);
        prop_assert_eq!(winning_symbol(&board).is_some(), uniform);
    }

    #[test]
    fn draw_iff_full_and_no_winner(moves in arb_moves()) {
        let log = MoveLog::from_chronological(moves);
        let board = derive_board(&log);
        let winner = derive_winner(&board, &PlayerRegistry::default());

        prop_assert_eq!(
            is_draw(&log, winner.as_deref()),
            board.is_full() && winner.is_none()
        );
    }
}
