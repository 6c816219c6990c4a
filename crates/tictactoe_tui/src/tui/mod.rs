//! Terminal UI for tic-tac-toe.

mod app;
mod input;
mod ui;

pub use app::{App, Control, Mode};
pub use input::move_cursor;
pub use ui::draw;

use crate::AppConfig;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tictactoe_core::GameSession;
use tracing::{error, info, instrument};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive game until the player quits.
pub fn run_tui(config: &AppConfig) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting tic-tac-toe TUI");

    let mut terminal = setup_terminal()?;

    let mut app = App::new(GameSession::with_registry(config.players().clone()));
    let res = run_app(&mut terminal, &mut app);

    restore_terminal()?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(moves = app.session().log().len(), "TUI exited");
    res
}

/// Raw mode plus the alternate screen. Undone again if any step fails.
fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let terminal = execute!(io::stdout(), EnterAlternateScreen)
        .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));
    undo_on_err(terminal, restore_terminal)
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

/// Runs `undo` when `result` is an error, then passes `result` through.
fn undo_on_err<T>(result: io::Result<T>, undo: impl FnOnce() -> io::Result<()>) -> io::Result<T> {
    if result.is_err() {
        if let Err(err) = undo() {
            error!(error = %err, "Failed to restore terminal");
        }
    }
    result
}

/// Draw, wait for a key, apply it. Repeat until [`Control::Quit`].
#[instrument(skip_all)]
fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key) == Control::Quit {
                info!("User quit");
                return Ok(());
            }
        }
    }
}
