//! Tic-tac-toe front-end.
//!
//! Wraps [`tictac_engine`] with the pieces a runnable program needs:
//!
//! - **Config**: TOML file with display and logging settings
//! - **Logging**: `tracing` subscriber setup
//! - **Script**: headless play from a list of steps
//! - **TUI**: terminal view adapter built on ratatui

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod script;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError, DisplayConfig, LoggingConfig};
pub use logging::{init_file_tracing, init_stderr_tracing};
pub use script::{ScriptError, ScriptReport, Snapshot, Step, run_script};
