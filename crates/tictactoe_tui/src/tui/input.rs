//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictactoe_core::Position;

/// Moves cursor based on arrow keys or `hjkl`. Stops at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    match key {
        KeyCode::Up | KeyCode::Char('k') => cursor.step(-1, 0),
        KeyCode::Down | KeyCode::Char('j') => cursor.step(1, 0),
        KeyCode::Left | KeyCode::Char('h') => cursor.step(0, -1),
        KeyCode::Right | KeyCode::Char('l') => cursor.step(0, 1),
        _ => cursor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_move_one_cell() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_vim_keys() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Char('j')), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Char('l')), Position::TopCenter);
    }

    #[test]
    fn test_edges_hold() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Enter), Position::Center);
    }
}
