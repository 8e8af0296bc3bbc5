//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, CellValue, Marker};
use tracing::instrument;

/// The eight winning triples: three rows, three columns, two diagonals.
pub const LINES: [[Cell; 3]; 8] = [
    // Rows
    [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    // Columns
    [Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft],
    [Cell::TopCenter, Cell::Center, Cell::BottomCenter],
    [Cell::TopRight, Cell::MiddleRight, Cell::BottomRight],
    // Diagonals
    [Cell::TopLeft, Cell::Center, Cell::BottomRight],
    [Cell::TopRight, Cell::Center, Cell::BottomLeft],
];

/// Checks whether `marker` fills any winning triple.
///
/// Matching against a concrete marker means an all-empty triple never counts.
#[instrument(skip(board))]
pub fn has_line(board: &Board, marker: Marker) -> bool {
    let target = CellValue::Marked(marker);
    LINES
        .iter()
        .any(|line| line.iter().all(|cell| board.get(*cell) == target))
}

/// Returns the marker that fills a winning triple, if any.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Marker> {
    [Marker::X, Marker::O]
        .into_iter()
        .find(|marker| has_line(board, *marker))
}
