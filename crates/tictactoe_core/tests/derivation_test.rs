//! End-to-end checks of the derivation functions on concrete games.

use tictactoe_core::{
    derive_active_player, derive_board, derive_outcome, derive_winner, is_draw, Board, GameSession,
    Move, MoveLog, Outcome, PlayerRegistry, Position, Square, Symbol,
};

fn mv(player: Symbol, row: usize, col: usize) -> Move {
    Move::new(player, Position::from_coords(row, col).unwrap())
}

#[test]
fn test_empty_log() {
    let log = MoveLog::new();
    let registry = PlayerRegistry::default();
    let board = derive_board(&log);
    let winner = derive_winner(&board, &registry);

    assert_eq!(derive_active_player(&log), Symbol::X);
    assert_eq!(board, Board::EMPTY);
    assert_eq!(winner, None);
    assert!(!is_draw(&log, winner.as_deref()));
}

#[test]
fn test_single_move_log() {
    let log = MoveLog::from_newest_first([mv(Symbol::X, 0, 0)]);
    let board = derive_board(&log);

    assert_eq!(derive_active_player(&log), Symbol::O);
    assert_eq!(board.get(Position::TopLeft), Square::Occupied(Symbol::X));
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_top_row_win_uses_registry_name() {
    let log = MoveLog::from_chronological([
        mv(Symbol::X, 0, 0),
        mv(Symbol::O, 1, 1),
        mv(Symbol::X, 0, 1),
        mv(Symbol::O, 2, 0),
        mv(Symbol::X, 0, 2),
    ]);
    let registry = PlayerRegistry::default();
    let board = derive_board(&log);

    assert_eq!(derive_winner(&board, &registry).as_deref(), Some("Player 1"));
    assert!(!is_draw(&log, Some("Player 1")));
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X
    // X O O
    // O X X
    let log = MoveLog::from_chronological([
        mv(Symbol::X, 0, 0),
        mv(Symbol::O, 1, 1),
        mv(Symbol::X, 0, 2),
        mv(Symbol::O, 0, 1),
        mv(Symbol::X, 1, 0),
        mv(Symbol::O, 1, 2),
        mv(Symbol::X, 2, 1),
        mv(Symbol::O, 2, 0),
        mv(Symbol::X, 2, 2),
    ]);
    let registry = PlayerRegistry::default();
    let board = derive_board(&log);
    let winner = derive_winner(&board, &registry);

    assert!(board.is_full());
    assert_eq!(winner, None);
    assert!(is_draw(&log, winner.as_deref()));
    assert_eq!(derive_outcome(&log, &registry), Outcome::Draw);
}

#[test]
fn test_renamed_player_wins_by_new_name() {
    let mut session = GameSession::new();
    session.rename_player(Symbol::X, "Alice");

    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        session.submit_coords(row, col).unwrap();
    }

    assert_eq!(
        derive_winner(&session.board(), session.registry()).as_deref(),
        Some("Alice")
    );
    assert_eq!(
        session.outcome(),
        Outcome::Win {
            symbol: Symbol::X,
            name: "Alice".to_string()
        }
    );
}

#[test]
fn test_column_and_diagonal_wins_for_o() {
    let column = MoveLog::from_chronological([
        mv(Symbol::X, 0, 0),
        mv(Symbol::O, 0, 2),
        mv(Symbol::X, 1, 1),
        mv(Symbol::O, 1, 2),
        mv(Symbol::X, 2, 1),
        mv(Symbol::O, 2, 2),
    ]);
    let anti_diagonal = MoveLog::from_chronological([
        mv(Symbol::X, 0, 0),
        mv(Symbol::O, 0, 2),
        mv(Symbol::X, 0, 1),
        mv(Symbol::O, 1, 1),
        mv(Symbol::X, 2, 2),
        mv(Symbol::O, 2, 0),
    ]);
    let registry = PlayerRegistry::new("Ann", "Ben");

    for log in [column, anti_diagonal] {
        assert_eq!(
            derive_winner(&derive_board(&log), &registry).as_deref(),
            Some("Ben")
        );
    }
}
