//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} play {Q}. A failed precondition is not an error here; the move is
//! simply ignored. A failed postcondition is a bug in the engine.

use crate::invariants::{GameInvariants, InvariantSet};
use crate::{Cell, CellValue, EngineError, EngineErrorKind, GameState, Ignored};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    ///
    /// Returns the reason the action must be ignored, if any.
    fn pre(state: &S, action: &A) -> Result<(), Ignored>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S, action: &A) -> Result<(), EngineError>;
}

// ─────────────────────────────────────────────────────────────
//  Play Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the round must not be over.
pub struct GameNotOver;

impl GameNotOver {
    /// Checks the precondition.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), Ignored> {
        if state.game_over() {
            Err(Ignored::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Checks the precondition.
    #[instrument(skip(state))]
    pub fn check(cell: Cell, state: &GameState) -> Result<(), Ignored> {
        if state.board().is_empty(cell) {
            Ok(())
        } else {
            Err(Ignored::CellOccupied(cell))
        }
    }
}

/// Composite precondition: a play is legal if the cell is empty and the round is live.
pub struct LegalPlay;

impl LegalPlay {
    /// Validates all preconditions for a play.
    #[instrument(skip(state))]
    pub fn check(cell: Cell, state: &GameState) -> Result<(), Ignored> {
        CellIsEmpty::check(cell, state)?;
        GameNotOver::check(state)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Play Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for `play`.
///
/// Preconditions:
/// - Cell must be empty
/// - Round must not be over
///
/// Postconditions:
/// - Only the target cell changed, from empty to the mover's marker
/// - All [`GameInvariants`] hold
pub struct PlayContract;

impl Contract<GameState, Cell> for PlayContract {
    fn pre(state: &GameState, cell: &Cell) -> Result<(), Ignored> {
        LegalPlay::check(*cell, state)
    }

    fn post(before: &GameState, after: &GameState, cell: &Cell) -> Result<(), EngineError> {
        for other in Cell::ALL {
            let was = before.board().get(other);
            let now = after.board().get(other);
            let expected = if other == *cell {
                CellValue::Marked(before.current_player())
            } else {
                was
            };
            if now != expected {
                warn!(cell = %other, ?was, ?now, "Board changed outside the played cell");
                return Err(EngineError::new(EngineErrorKind::InvariantViolation(
                    format!("Postcondition failed: {} changed from {:?} to {:?}", other, was, now),
                )));
            }
        }

        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            EngineError::new(EngineErrorKind::InvariantViolation(format!(
                "Postcondition failed: {}",
                descriptions
            )))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameEngine, Marker};

    #[test]
    fn test_precondition_empty_cell() {
        let state = GameState::new();
        assert!(PlayContract::pre(&state, &Cell::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let mut engine = GameEngine::new();
        engine.play_cell(Cell::Center).expect("legal move");
        assert_eq!(
            PlayContract::pre(engine.state(), &Cell::Center),
            Err(Ignored::CellOccupied(Cell::Center))
        );
    }

    #[test]
    fn test_precondition_game_over() {
        let mut state = GameState::new();
        state.game_over = true;
        assert_eq!(
            PlayContract::pre(&state, &Cell::Center),
            Err(Ignored::GameOver)
        );
    }

    #[test]
    fn test_postcondition_detects_stray_write() {
        let before = GameState::new();
        let mut after = before.clone();
        after.board.set(Cell::Center, CellValue::Marked(Marker::X));
        after.board.set(Cell::TopLeft, CellValue::Marked(Marker::O));
        after.current_player = Marker::O;

        let err = PlayContract::post(&before, &after, &Cell::Center).unwrap_err();
        assert!(matches!(err.kind(), EngineErrorKind::InvariantViolation(_)));
    }

    #[test]
    fn test_postcondition_accepts_legal_move() {
        let before = GameState::new();
        let mut after = before.clone();
        after.board.set(Cell::Center, CellValue::Marked(Marker::X));
        after.current_player = Marker::O;

        assert!(PlayContract::post(&before, &after, &Cell::Center).is_ok());
    }
}
