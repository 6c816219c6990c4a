//! Non-interactive replay of a scripted game.

use derive_more::{Display, Error};
use std::fmt;
use tictactoe_core::{
    GameSession, GameView, Move, MoveError, Outcome, Position, PositionParseError, Symbol,
};
use tracing::{debug, instrument};

/// Why a scripted move could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ReplayError {
    /// The text did not name a cell.
    #[display("move {}: {}", number, source)]
    Parse {
        /// 1-based move number.
        number: usize,
        /// Parser error.
        source: PositionParseError,
    },

    /// The session refused the move.
    #[display("move {} ({}): {}", number, input, source)]
    Rejected {
        /// 1-based move number.
        number: usize,
        /// Text the move was given as.
        input: String,
        /// Why the session refused it.
        source: MoveError,
    },
}

/// Submits each move, in order, to `session`.
///
/// Stops at the first move that fails to parse or is rejected; moves before
/// it stay applied.
#[instrument(skip(session, moves), fields(count = moves.len()))]
pub fn apply_moves<S: AsRef<str>>(
    session: &mut GameSession,
    moves: &[S],
) -> Result<Vec<Move>, ReplayError> {
    let mut applied = Vec::with_capacity(moves.len());
    for (i, input) in moves.iter().enumerate() {
        let input = input.as_ref();
        let number = i + 1;
        let position =
            Position::parse(input).map_err(|source| ReplayError::Parse { number, source })?;
        let mv = session
            .submit_move(position)
            .map_err(|source| ReplayError::Rejected {
                number,
                input: input.to_string(),
                source,
            })?;
        debug!(number, %mv, "Replayed move");
        applied.push(mv);
    }
    Ok(applied)
}

/// Text report of a session: board, players, history and result.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a>(pub &'a GameSession);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.0;
        let registry = session.registry();

        writeln!(f, "{}", session.board())?;
        writeln!(f)?;
        writeln!(
            f,
            "{} (X) vs {} (O)",
            registry.name(Symbol::X),
            registry.name(Symbol::O)
        )?;

        if !session.log().is_empty() {
            writeln!(f, "History (newest first):")?;
            for mv in session.log() {
                writeln!(f, "  {}", mv)?;
            }
        }

        match session.outcome() {
            Outcome::InProgress => {
                let next = session.active_player();
                writeln!(f, "Next: {} ({})", registry.name(next), next)
            }
            over => writeln!(f, "Game over! {}", over),
        }
    }
}

/// Human-readable summary: board, players, history and result.
pub fn render_text(session: &GameSession) -> String {
    Report(session).to_string()
}

/// The session's [`GameView`] as pretty-printed JSON.
pub fn render_json(session: &GameSession) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&GameView::from_session(session))
}
