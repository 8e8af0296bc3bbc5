//! Values the engine hands to a view.
//!
//! The engine never draws anything itself. Every visible change is
//! described by a [`ViewUpdate`], and every `play` call reports what
//! happened as a [`PlayOutcome`].

use crate::{Cell, Marker};
use serde::{Deserialize, Serialize};

/// Text of the status region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    /// Round in progress; the status region is empty.
    #[default]
    Blank,
    /// The marker completed a line.
    Won(Marker),
    /// The board filled with no line.
    Draw,
}

impl Status {
    /// Text shown in the status region.
    pub fn text(self) -> String {
        match self {
            Status::Blank => String::new(),
            Status::Won(marker) => format!("{} wins!", marker),
            Status::Draw => "Draw!".to_string(),
        }
    }

    /// Returns true for a win or a draw.
    pub fn is_final(self) -> bool {
        !matches!(self, Status::Blank)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// One change to apply to the rendering target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewUpdate {
    /// Show `marker` in `cell`.
    SetCell {
        /// The cell that changed.
        cell: Cell,
        /// The marker now in it.
        marker: Marker,
    },
    /// Replace the status text.
    SetStatus(Status),
    /// Blank every cell.
    ClearCells,
}

/// Why a `play` call changed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Ignored {
    /// The cell already holds a marker.
    #[display("{} is already occupied", _0)]
    CellOccupied(Cell),
    /// The round is over until reset.
    #[display("game is over")]
    GameOver,
}

/// A move that was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Placement {
    /// Where the marker went.
    pub cell: Cell,
    /// Who moved.
    pub marker: Marker,
    /// Status after the move; `Blank` if the round continues.
    pub status: Status,
}

/// Result of a `play` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayOutcome {
    /// The move was rejected; nothing changed.
    Ignored(Ignored),
    /// The move was applied.
    Placed(Placement),
}

impl PlayOutcome {
    /// View updates for this outcome, in the order they should be applied.
    ///
    /// An ignored move produces no updates. A placement always sets its cell
    /// and sets the status only when the round ended.
    pub fn updates(&self) -> Vec<ViewUpdate> {
        match self {
            PlayOutcome::Ignored(_) => Vec::new(),
            PlayOutcome::Placed(placement) => {
                let mut updates = vec![ViewUpdate::SetCell {
                    cell: placement.cell,
                    marker: placement.marker,
                }];
                if placement.status.is_final() {
                    updates.push(ViewUpdate::SetStatus(placement.status));
                }
                updates
            }
        }
    }

    /// Returns the placement, if the move was applied.
    pub fn placement(&self) -> Option<&Placement> {
        match self {
            PlayOutcome::Placed(placement) => Some(placement),
            PlayOutcome::Ignored(_) => None,
        }
    }

    /// Returns true if the move was rejected.
    pub fn is_ignored(&self) -> bool {
        matches!(self, PlayOutcome::Ignored(_))
    }
}
