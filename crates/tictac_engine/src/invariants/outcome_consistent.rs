//! Outcome invariant: the game-over flag matches the board.

use super::Invariant;
use crate::GameState;
use crate::rules::{has_line, is_full};

/// Invariant: the round is over exactly when the last mover has a line or
/// the board is full with no line at all.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let mover = state.current_player();

        if state.game_over() {
            has_line(board, mover) || (is_full(board) && !has_line(board, mover.opponent()))
        } else {
            !has_line(board, mover) && !has_line(board, mover.opponent()) && !is_full(board)
        }
    }

    fn description() -> &'static str {
        "Game-over flag matches a completed line or a full board"
    }
}
