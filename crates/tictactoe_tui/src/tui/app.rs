//! Application state and key handling.

use super::input::move_cursor;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictactoe_core::{GameSession, Outcome, Position, Symbol};
use tracing::{debug, info, instrument};

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Input mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Keys move the cursor and place symbols.
    Playing,
    /// Keys edit a player's name.
    Editing {
        /// Player being renamed.
        symbol: Symbol,
        /// Name typed so far.
        buffer: String,
    },
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    session: GameSession,
    cursor: Position,
    mode: Mode,
    status_message: String,
}

impl App {
    /// Creates an application around a fresh session.
    pub fn new(session: GameSession) -> Self {
        let mut app = Self {
            session,
            cursor: Position::Center,
            mode: Mode::Playing,
            status_message: String::new(),
        };
        app.status_message = app.turn_message();
        app
    }

    /// The game being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Current input mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Applies one key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            info!("Interrupted");
            return Control::Quit;
        }

        match &mut self.mode {
            Mode::Editing { symbol, buffer } => {
                // Ctrl/Alt chords are not text.
                let plain = key.modifiers.difference(KeyModifiers::SHIFT).is_empty();
                match key.code {
                    KeyCode::Enter => {
                        let symbol = *symbol;
                        let name = std::mem::take(buffer);
                        self.mode = Mode::Playing;
                        self.session.rename_player(symbol, name);
                        self.status_message = format!("Saved name for {}.", symbol);
                    }
                    KeyCode::Esc => {
                        self.mode = Mode::Playing;
                        self.status_message = "Rename cancelled.".to_string();
                    }
                    KeyCode::Backspace => {
                        buffer.pop();
                    }
                    KeyCode::Char(c) if plain => buffer.push(c),
                    _ => {}
                }
                Control::Continue
            }
            Mode::Playing => self.handle_play_key(key.code),
        }
    }

    fn handle_play_key(&mut self, code: KeyCode) -> Control {
        match code {
            KeyCode::Char('q') => return Control::Quit,
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                    self.place(pos);
                }
            }
            KeyCode::Char('x') => self.start_editing(Symbol::X),
            KeyCode::Char('o') => self.start_editing(Symbol::O),
            KeyCode::Char('r') => self.restart(),
            other => self.cursor = move_cursor(self.cursor, other),
        }
        Control::Continue
    }

    fn place(&mut self, pos: Position) {
        match self.session.submit_move(pos) {
            Ok(mv) => {
                debug!(%mv, "Move applied to UI state");
                self.status_message = match self.session.outcome() {
                    Outcome::InProgress => self.turn_message(),
                    over => format!("Game over! {} Press 'r' for a rematch.", over),
                };
            }
            Err(e) => self.status_message = e.to_string(),
        }
    }

    fn start_editing(&mut self, symbol: Symbol) {
        let buffer = self.session.registry().name(symbol).to_string();
        self.mode = Mode::Editing { symbol, buffer };
        self.status_message = format!("Editing {}: Enter to save, Esc to cancel.", symbol);
    }

    /// Restarts the game, keeping player names.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.session.restart();
        self.cursor = Position::Center;
        self.status_message = self.turn_message();
    }

    fn turn_message(&self) -> String {
        let next = self.session.active_player();
        format!("{}'s turn ({}).", self.session.registry().name(next), next)
    }
}
