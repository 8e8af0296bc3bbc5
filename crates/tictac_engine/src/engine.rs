//! The game engine: owns one [`GameState`] and drives it through `play` and `reset`.

use crate::contracts::{Contract, PlayContract};
use crate::rules::{has_line, is_full, winner};
use crate::{
    Cell, CellValue, EngineError, GameState, Marker, Placement, PlayOutcome, Status, ViewUpdate,
};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// All mutation goes through [`play`](Self::play), [`play_cell`](Self::play_cell)
/// and [`reset`](Self::reset). Each returns the view updates a front-end
/// needs to mirror the change.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates an engine with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Plays the current player's marker at a raw board index (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`EngineErrorKind::CellOutOfRange`](crate::EngineErrorKind::CellOutOfRange)
    /// for an index above 8; the state is untouched. Occupied cells and moves
    /// after the round ended are not errors, they come back as
    /// [`PlayOutcome::Ignored`].
    #[instrument(skip(self), fields(player = %self.state.current_player))]
    pub fn play(&mut self, index: usize) -> Result<PlayOutcome, EngineError> {
        let cell = Cell::try_from(index)?;
        self.play_cell(cell)
    }

    /// Plays the current player's marker at `cell`.
    ///
    /// # Errors
    ///
    /// Only fails if a postcondition is violated after the move, which
    /// is checked in debug builds.
    #[instrument(skip(self), fields(player = %self.state.current_player))]
    pub fn play_cell(&mut self, cell: Cell) -> Result<PlayOutcome, EngineError> {
        if let Err(reason) = PlayContract::pre(&self.state, &cell) {
            debug!(%reason, "Move ignored");
            return Ok(PlayOutcome::Ignored(reason));
        }

        #[cfg(debug_assertions)]
        let before = self.state.clone();

        let marker = self.state.current_player;
        self.state.board.set(cell, CellValue::Marked(marker));

        let status = if self.check_winner() {
            self.state.game_over = true;
            info!(%marker, "Round won");
            Status::Won(marker)
        } else if is_full(&self.state.board) {
            self.state.game_over = true;
            info!("Round drawn");
            Status::Draw
        } else {
            self.state.current_player = marker.opponent();
            Status::Blank
        };

        #[cfg(debug_assertions)]
        PlayContract::post(&before, &self.state, &cell)?;

        debug!(%cell, %marker, ?status, "Move applied");
        Ok(PlayOutcome::Placed(Placement::new(cell, marker, status)))
    }

    /// Checks whether the current player fills any winning triple.
    ///
    /// Called right after a placement, so the current player is the mover.
    pub fn check_winner(&self) -> bool {
        has_line(&self.state.board, self.state.current_player)
    }

    /// Status text region contents for the current state.
    pub fn status(&self) -> Status {
        if !self.state.game_over {
            return Status::Blank;
        }
        winner(&self.state.board).map_or(Status::Draw, Status::Won)
    }

    /// Current player to move (or the winner, once the round is won).
    pub fn current_player(&self) -> Marker {
        self.state.current_player
    }

    /// Returns true once the round has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.state.game_over
    }

    /// Cells still open for play, in index order.
    pub fn open_cells(&self) -> Vec<Cell> {
        if self.state.game_over {
            return Vec::new();
        }
        Cell::ALL
            .into_iter()
            .filter(|cell| self.state.board.is_empty(*cell))
            .collect()
    }

    /// Starts a new round: empty board, X to move.
    ///
    /// Always succeeds, whatever the current state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Vec<ViewUpdate> {
        self.state = GameState::new();
        debug!("Round reset");
        vec![ViewUpdate::SetStatus(Status::Blank), ViewUpdate::ClearCells]
    }
}
