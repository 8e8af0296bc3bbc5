//! Draw detection logic for tic-tac-toe.

use crate::{Board, CellValue};
use tracing::instrument;

/// Checks if the board is full (no empty cells remain).
///
/// The engine checks this only after a move failed to win, so a full
/// board at that point is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|value| *value != CellValue::Empty)
}
