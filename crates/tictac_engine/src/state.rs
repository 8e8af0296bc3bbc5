//! The mutable state of one round.

use crate::{Board, Marker};
use serde::{Deserialize, Serialize};

/// Complete game state: board, player to move, and the game-over flag.
///
/// Only [`GameEngine`](crate::GameEngine) mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    pub(crate) board: Board,
    /// Marker placed by the next move; after a win, the winner.
    pub(crate) current_player: Marker,
    /// Set by a win or a draw, cleared only by reset.
    pub(crate) game_over: bool,
}

impl GameState {
    /// Creates the initial state: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Marker::X,
            game_over: false,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Marker {
        self.current_player
    }

    /// Returns true once the round has been won or drawn.
    pub fn game_over(&self) -> bool {
        self.game_over
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
