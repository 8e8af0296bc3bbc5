//! Headless play: apply a list of steps to a fresh engine.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tictac_engine::{EngineError, GameEngine, Marker, PlayOutcome, TextView, View};
use tracing::{debug, instrument, warn};

/// One scripted action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Play at a raw cell index (range-checked by the engine).
    Play(usize),
    /// Start a new round.
    Reset,
}

impl FromStr for Step {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("r") || s.eq_ignore_ascii_case("reset") {
            return Ok(Step::Reset);
        }
        s.parse::<usize>()
            .map(Step::Play)
            .map_err(|_| ScriptError::BadStep {
                step: s.to_string(),
            })
    }
}

/// Errors from scripted play.
#[derive(Debug, Display, Error)]
pub enum ScriptError {
    /// A step was neither an index nor a reset.
    #[display("Unrecognized step {:?} (expected 0-8 or r/reset)", step)]
    BadStep {
        /// The offending input.
        step: String,
    },

    /// The engine refused a step.
    #[display("Step {} ({}) failed: {}", position, step, source)]
    Engine {
        /// 1-based position in the step list.
        position: usize,
        /// The step text.
        step: String,
        /// Underlying engine error.
        source: EngineError,
    },
}

/// JSON-friendly picture of the view and engine after a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Text of each cell, index order.
    pub cells: Vec<String>,
    /// Status text.
    pub status: String,
    /// Player to move, or the winner once won.
    pub current_player: Marker,
    /// Whether the round has ended.
    pub game_over: bool,
}

/// Result of running a script.
#[derive(Debug, Clone)]
pub struct ScriptReport {
    /// Final view contents.
    pub view: TextView,
    /// Final engine.
    pub engine: GameEngine,
    /// Number of plays that were ignored.
    pub ignored: usize,
}

impl ScriptReport {
    /// Builds the JSON snapshot.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: self.view.cells().to_vec(),
            status: self.view.status().to_string(),
            current_player: self.engine.current_player(),
            game_over: self.engine.is_over(),
        }
    }
}

/// Parses and runs `steps` in order against a fresh engine.
///
/// Ignored plays are logged and skipped. The first bad step stops the run.
#[instrument(skip(steps), fields(count = steps.len()))]
pub fn run_script<S: AsRef<str>>(steps: &[S]) -> Result<ScriptReport, ScriptError> {
    let mut engine = GameEngine::new();
    let mut view = TextView::new();
    let mut ignored = 0;

    for (i, raw) in steps.iter().enumerate() {
        let raw = raw.as_ref();
        match raw.parse::<Step>()? {
            Step::Reset => view.apply_all(&engine.reset()),
            Step::Play(index) => {
                let outcome = engine.play(index).map_err(|source| ScriptError::Engine {
                    position: i + 1,
                    step: raw.to_string(),
                    source,
                })?;
                if let PlayOutcome::Ignored(reason) = &outcome {
                    warn!(step = i + 1, index, %reason, "Ignored move");
                    ignored += 1;
                }
                view.apply_all(&outcome.updates());
            }
        }
        debug!(step = i + 1, raw, "Step applied");
    }

    Ok(ScriptReport {
        view,
        engine,
        ignored,
    })
}
