//! Engine error types.

use derive_more::{Display, Error};

/// What went wrong inside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum EngineErrorKind {
    /// A raw cell index outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", index)]
    CellOutOfRange {
        /// The rejected index.
        index: usize,
    },

    /// A postcondition failed after a move was applied.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

/// Engine error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Engine error: {} at {}:{}", kind, file, line)]
pub struct EngineError {
    /// The error kind.
    kind: EngineErrorKind,
    /// Line number where error occurred.
    line: u32,
    /// Source file where error occurred.
    file: &'static str,
}

impl EngineError {
    /// Creates a new engine error with caller location tracking.
    #[track_caller]
    pub fn new(kind: EngineErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &EngineErrorKind {
        &self.kind
    }
}

impl From<EngineErrorKind> for EngineError {
    #[track_caller]
    fn from(kind: EngineErrorKind) -> Self {
        Self::new(kind)
    }
}
