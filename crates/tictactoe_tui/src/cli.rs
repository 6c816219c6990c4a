//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (missing file means defaults)
    #[arg(long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Display name for X, overriding the config file
    #[arg(long, global = true)]
    pub x_name: Option<String>,

    /// Display name for O, overriding the config file
    #[arg(long, global = true)]
    pub o_name: Option<String>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play,

    /// Apply moves in play order and print the resulting game
    Replay {
        /// Moves as `row,col`, a keypad digit 1-9, or a cell name like `top-left`
        #[arg(required = true)]
        moves: Vec<String>,

        /// Print the game as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
    }

    #[test]
    fn test_replay_args() {
        let cli = Cli::try_parse_from([
            "tictactoe", "replay", "0,0", "5", "top-right", "--json", "--x-name", "Alice",
        ])
        .unwrap();

        assert_eq!(cli.x_name.as_deref(), Some("Alice"));
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                moves: vec!["0,0".into(), "5".into(), "top-right".into()],
                json: true,
            })
        );
    }

    #[test]
    fn test_replay_requires_moves() {
        assert!(Cli::try_parse_from(["tictactoe", "replay"]).is_err());
    }
}
