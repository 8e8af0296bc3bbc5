//! Command-line interface for tictac.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(short, long, env = "TICTAC_CONFIG", default_value = "tictac.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `tui`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Tui,

    /// Apply a sequence of steps and print the resulting board
    Play {
        /// Steps: a cell index 0-8, or `r`/`reset`
        steps: Vec<String>,

        /// Print a JSON snapshot instead of the board
        #[arg(long)]
        json: bool,
    },
}
