//! Renderer-facing snapshot of a session.

use super::{GameSession, Move, Outcome, Symbol};
use serde::Serialize;

/// Everything a front end needs to draw one frame of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Board rows, top to bottom.
    pub board: [[Option<Symbol>; 3]; 3],
    /// Symbol that moves next.
    pub active_player: Symbol,
    /// Name registered for X.
    pub x_name: String,
    /// Name registered for O.
    pub o_name: String,
    /// Won, drawn, or in progress.
    pub outcome: Outcome,
    /// Moves played, newest first.
    pub history: Vec<Move>,
    /// True once the game is won or drawn.
    pub is_over: bool,
}

impl GameView {
    /// Derives a snapshot from the session's current state.
    pub fn from_session(session: &GameSession) -> Self {
        let rows = *session.board().rows();
        let registry = session.registry();
        let outcome = session.outcome();
        Self {
            board: rows.map(|row| row.map(|square| square.symbol())),
            active_player: session.active_player(),
            x_name: registry.name(Symbol::X).to_string(),
            o_name: registry.name(Symbol::O).to_string(),
            is_over: outcome.is_over(),
            outcome,
            history: session.log().iter().copied().collect(),
        }
    }

    /// Display name for `symbol`.
    pub fn name(&self, symbol: Symbol) -> &str {
        match symbol {
            Symbol::X => &self.x_name,
            Symbol::O => &self.o_name,
        }
    }
}

impl From<&GameSession> for GameView {
    fn from(session: &GameSession) -> Self {
        Self::from_session(session)
    }
}
