//! The append-only move log.

use super::Move;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::debug;

/// Number of cells on the board, and so the most moves a game can hold.
pub const CAPACITY: usize = 9;

/// Ordered history of moves, newest first.
///
/// The log is the sole source of truth for game state. Index 0 is the most
/// recent move, which keeps the active-player lookup O(1).
///
/// [`MoveLog::push`] does not check that the target cell is free or that
/// the game is still running. Callers that accept user input should go
/// through [`GameSession::submit_move`](crate::GameSession::submit_move).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLog {
    moves: VecDeque<Move>,
}

impl MoveLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a log from moves listed newest first.
    pub fn from_newest_first(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    /// Builds a log from moves listed in the order they were played.
    pub fn from_chronological(moves: impl IntoIterator<Item = Move>) -> Self {
        let mut log = Self::new();
        for mv in moves {
            log.push(mv);
        }
        log
    }

    /// Records a move as the newest entry.
    pub fn push(&mut self, mv: Move) {
        debug!(%mv, len = self.moves.len() + 1, "Appending move");
        self.moves.push_front(mv);
    }

    /// Discards every move.
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// The most recent move, if any.
    pub fn newest(&self) -> Option<&Move> {
        self.moves.front()
    }

    /// Move at `index`, counting from the newest.
    pub fn get(&self, index: usize) -> Option<&Move> {
        self.moves.get(index)
    }

    /// Number of moves played.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// True before the first move.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// True once every cell has been played.
    pub fn is_full(&self) -> bool {
        self.moves.len() >= CAPACITY
    }

    /// Iterates newest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Move> + ExactSizeIterator {
        self.moves.iter()
    }

    /// Iterates in the order the moves were played.
    pub fn chronological(&self) -> impl DoubleEndedIterator<Item = &Move> + ExactSizeIterator {
        self.moves.iter().rev()
    }
}

impl<'a> IntoIterator for &'a MoveLog {
    type Item = &'a Move;
    type IntoIter = std::collections::vec_deque::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}
