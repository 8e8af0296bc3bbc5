//! tictac - two-player tic-tac-toe.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictac::{AppConfig, Cli, Command, init_file_tracing, init_stderr_tracing, run_script};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            init_file_tracing(config.logging())?;
            tictac::tui::run_tui(&config)
        }
        Command::Play { steps, json } => {
            init_stderr_tracing(config.logging());
            run_play(&steps, json)
        }
    }
}

/// Runs a script and prints the result.
fn run_play(steps: &[String], json: bool) -> Result<()> {
    let report = run_script(steps)?;
    info!(ignored = report.ignored, over = report.engine.is_over(), "Script finished");

    if json {
        println!("{}", serde_json::to_string_pretty(&report.snapshot())?);
    } else {
        print!("{}", report.view.render());
    }
    Ok(())
}
