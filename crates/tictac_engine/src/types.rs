//! Core domain types for tic-tac-toe.

use crate::cell::Cell;
use serde::{Deserialize, Serialize};

/// A player's marker.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Marker {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Marker {
    /// Returns the other player's marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// Text shown in a cell holding this marker.
    pub fn text(self) -> &'static str {
        match self {
            Marker::X => "X",
            Marker::O => "O",
        }
    }
}

/// Contents of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellValue {
    /// No marker yet.
    #[default]
    Empty,
    /// Cell claimed by a player.
    Marked(Marker),
}

impl CellValue {
    /// Text shown for this cell; empty cells show nothing.
    pub fn text(self) -> &'static str {
        match self {
            CellValue::Empty => "",
            CellValue::Marked(marker) => marker.text(),
        }
    }

    /// Returns the marker, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            CellValue::Empty => None,
            CellValue::Marked(marker) => Some(marker),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [CellValue; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [CellValue::Empty; 9],
        }
    }

    /// Gets the value at a cell.
    pub fn get(&self, cell: Cell) -> CellValue {
        self.cells[cell.index()]
    }

    /// Sets the value at a cell.
    pub(crate) fn set(&mut self, cell: Cell, value: CellValue) {
        self.cells[cell.index()] = value;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == CellValue::Empty
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[CellValue; 9] {
        &self.cells
    }

    /// Counts the cells holding `marker`.
    pub fn count(&self, marker: Marker) -> usize {
        self.cells
            .iter()
            .filter(|value| **value == CellValue::Marked(marker))
            .count()
    }
}
