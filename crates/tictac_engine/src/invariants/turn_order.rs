//! Turn order invariant: the current player agrees with the marks on the board.

use super::Invariant;
use crate::{GameState, Marker};

/// Invariant: `current_player` follows from the mark counts.
///
/// While the round is live, X moves when the counts are equal and O moves
/// when X is one ahead. Once the round is over the player is not switched,
/// so `current_player` is whoever placed the last mark.
pub struct TurnOrderInvariant;

impl Invariant<GameState> for TurnOrderInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Marker::X);
        let o = state.board().count(Marker::O);
        let next_to_place = if x == o { Marker::X } else { Marker::O };

        if state.game_over() {
            state.current_player() == next_to_place.opponent()
        } else {
            state.current_player() == next_to_place
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
