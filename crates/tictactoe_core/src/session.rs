//! A single game session: the move log plus player names.

use super::rules::{derive_active_player, derive_board, derive_outcome, derive_winner, is_draw};
use super::{Board, Move, MoveError, MoveLog, Outcome, PlayerRegistry, Position, Symbol};
use derive_getters::Getters;
use tracing::{info, instrument, warn};

/// The two pieces of mutable state behind a game.
///
/// A session is owned by whichever front end is running the game and is
/// changed only through [`submit_move`](Self::submit_move),
/// [`restart`](Self::restart) and [`rename_player`](Self::rename_player).
/// Every read is derived from the log on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct GameSession {
    /// Moves played so far, newest first.
    log: MoveLog,
    /// Display names for X and O.
    registry: PlayerRegistry,
}

impl GameSession {
    /// Creates a session with default player names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with the given player names.
    pub fn with_registry(registry: PlayerRegistry) -> Self {
        Self {
            log: MoveLog::new(),
            registry,
        }
    }

    /// Plays the active player's symbol at `position`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game is won or drawn.
    /// - [`MoveError::SquareOccupied`] if the cell already holds a symbol.
    #[instrument(skip(self), fields(moves = self.log.len()))]
    pub fn submit_move(&mut self, position: Position) -> Result<Move, MoveError> {
        if self.is_over() {
            warn!("Move rejected, game is over");
            return Err(MoveError::GameOver);
        }
        if !self.board().is_empty(position) {
            warn!("Move rejected, square occupied");
            return Err(MoveError::SquareOccupied(position));
        }

        let mv = Move::new(self.active_player(), position);
        self.log.push(mv);
        info!(player = %mv.player, row = position.row(), col = position.col(), "Move played");
        Ok(mv)
    }

    /// Like [`submit_move`](Self::submit_move), addressed by row and column.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] for coordinates outside `0..=2`, otherwise
    /// as `submit_move`.
    pub fn submit_coords(&mut self, row: usize, col: usize) -> Result<Move, MoveError> {
        let position = Position::from_coords(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        self.submit_move(position)
    }

    /// Clears the log. Player names are kept.
    #[instrument(skip(self), fields(moves = self.log.len()))]
    pub fn restart(&mut self) {
        self.log.clear();
        info!("Game restarted");
    }

    /// Replaces one player's display name.
    #[instrument(skip(self, name))]
    pub fn rename_player(&mut self, symbol: Symbol, name: impl Into<String>) {
        self.registry.rename(symbol, name);
    }

    /// Symbol that moves next.
    pub fn active_player(&self) -> Symbol {
        derive_active_player(&self.log)
    }

    /// Current board.
    pub fn board(&self) -> Board {
        derive_board(&self.log)
    }

    /// Winner's display name, or `None` if nobody has won.
    pub fn winner(&self) -> Option<String> {
        derive_winner(&self.board(), &self.registry)
    }

    /// True when the board is full and nobody won.
    pub fn is_draw(&self) -> bool {
        is_draw(&self.log, self.winner().as_deref())
    }

    /// Won, drawn, or in progress.
    pub fn outcome(&self) -> Outcome {
        derive_outcome(&self.log, &self.registry)
    }

    /// True once no more moves are accepted.
    pub fn is_over(&self) -> bool {
        self.outcome().is_over()
    }

    /// Cells a move could go to right now. Empty once the game is over.
    pub fn available_positions(&self) -> Vec<Position> {
        if self.is_over() {
            return Vec::new();
        }
        self.board().empty_positions()
    }
}
