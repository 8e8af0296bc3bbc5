//! Named board cells.

use crate::error::{EngineError, EngineErrorKind};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the tic-tac-toe board (index 0-8, row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Cell {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Cell {
    /// All 9 cells in index order.
    pub const ALL: [Cell; 9] = [
        Cell::TopLeft,
        Cell::TopCenter,
        Cell::TopRight,
        Cell::MiddleLeft,
        Cell::Center,
        Cell::MiddleRight,
        Cell::BottomLeft,
        Cell::BottomCenter,
        Cell::BottomRight,
    ];

    /// Label for display.
    pub fn label(self) -> &'static str {
        match self {
            Cell::TopLeft => "Top-left",
            Cell::TopCenter => "Top-center",
            Cell::TopRight => "Top-right",
            Cell::MiddleLeft => "Middle-left",
            Cell::Center => "Center",
            Cell::MiddleRight => "Middle-right",
            Cell::BottomLeft => "Bottom-left",
            Cell::BottomCenter => "Bottom-center",
            Cell::BottomRight => "Bottom-right",
        }
    }

    /// Board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Row (0-2).
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Column (0-2).
    pub fn col(self) -> usize {
        self.index() % 3
    }

    /// Creates a cell from a board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a cell from a row and column.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }
}

impl TryFrom<usize> for Cell {
    type Error = EngineError;

    #[instrument]
    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index)
            .ok_or_else(|| EngineError::new(EngineErrorKind::CellOutOfRange { index }))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_round_trip_matches_all() {
        for (i, cell) in Cell::iter().enumerate() {
            assert_eq!(cell.index(), i);
            assert_eq!(Cell::ALL[i], cell);
        }
    }

    #[test]
    fn test_row_major_layout() {
        assert_eq!((Cell::TopRight.row(), Cell::TopRight.col()), (0, 2));
        assert_eq!((Cell::MiddleLeft.row(), Cell::MiddleLeft.col()), (1, 0));
        assert_eq!((Cell::BottomRight.row(), Cell::BottomRight.col()), (2, 2));
        assert_eq!(Cell::from_row_col(1, 1), Some(Cell::Center));
        assert_eq!(Cell::from_row_col(3, 0), None);
    }

    #[test]
    fn test_try_from_out_of_range() {
        let err = Cell::try_from(9).unwrap_err();
        assert_eq!(err.kind(), &EngineErrorKind::CellOutOfRange { index: 9 });
        assert_eq!(Cell::try_from(8).unwrap(), Cell::BottomRight);
    }
}
