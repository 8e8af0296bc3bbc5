//! Mark balance invariant: X is never behind O, and never more than one ahead.

use super::Invariant;
use crate::{GameState, Marker};

/// Invariant: X count equals O count, or exceeds it by one.
///
/// X always moves first and players alternate.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Marker::X);
        let o = state.board().count(Marker::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or exactly one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, CellValue};

    #[test]
    fn test_empty_holds() {
        assert!(MarkBalanceInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_o_ahead_violates() {
        let mut state = GameState::new();
        state.board.set(Cell::Center, CellValue::Marked(Marker::O));
        assert!(!MarkBalanceInvariant::holds(&state));
    }

    #[test]
    fn test_x_two_ahead_violates() {
        let mut state = GameState::new();
        state.board.set(Cell::Center, CellValue::Marked(Marker::X));
        state.board.set(Cell::TopLeft, CellValue::Marked(Marker::X));
        assert!(!MarkBalanceInvariant::holds(&state));
    }
}
