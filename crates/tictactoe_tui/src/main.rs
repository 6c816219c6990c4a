//! tictactoe - two-player tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tictactoe_core::GameSession;
use tictactoe_tui::{AppConfig, Cli, Command, apply_moves, render_json, render_text, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?.with_names(cli.x_name, cli.o_name);

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_tui(&config),
        Command::Replay { moves, json } => {
            initialize_stderr_tracing();
            run_replay(&config, &moves, json)
        }
    }
}

/// Log to stderr so stdout carries only the replay output
fn initialize_stderr_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Apply scripted moves and print the result to stdout
#[instrument(skip_all, fields(count = moves.len(), json = json))]
fn run_replay(config: &AppConfig, moves: &[String], json: bool) -> Result<()> {
    let mut session = GameSession::with_registry(config.players().clone());
    apply_moves(&mut session, moves)?;
    info!(outcome = %session.outcome(), "Replay finished");

    if json {
        println!("{}", render_json(&session)?);
    } else {
        print!("{}", render_text(&session));
    }
    Ok(())
}
