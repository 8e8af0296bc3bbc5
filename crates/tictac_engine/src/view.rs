//! The rendering seam.
//!
//! A view is anything with nine text cells and one status line. The engine
//! describes changes as [`ViewUpdate`]s; [`View::apply`] turns each one into
//! plain text writes.

use crate::{Cell, ViewUpdate};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A rendering target for the game.
pub trait View {
    /// Replaces the text shown in `cell`.
    fn set_cell_text(&mut self, cell: Cell, text: &str);

    /// Replaces the status text.
    fn set_status_text(&mut self, text: &str);

    /// Applies one engine update.
    fn apply(&mut self, update: &ViewUpdate) {
        trace!(?update, "Applying view update");
        match update {
            ViewUpdate::SetCell { cell, marker } => self.set_cell_text(*cell, marker.text()),
            ViewUpdate::SetStatus(status) => self.set_status_text(&status.text()),
            ViewUpdate::ClearCells => {
                for cell in Cell::ALL {
                    self.set_cell_text(cell, "");
                }
            }
        }
    }

    /// Applies updates in order.
    fn apply_all(&mut self, updates: &[ViewUpdate]) {
        for update in updates {
            self.apply(update);
        }
    }
}

/// In-memory view: the text of each cell and of the status line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextView {
    cells: [String; 9],
    status: String,
}

impl TextView {
    /// Creates a blank view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text currently shown in `cell`.
    pub fn cell(&self, cell: Cell) -> &str {
        &self.cells[cell.index()]
    }

    /// All cell texts in index order.
    pub fn cells(&self) -> &[String; 9] {
        &self.cells
    }

    /// Current status text.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Renders the cells as a grid followed by the status line.
    ///
    /// Blank cells render as a space. The status line is omitted while empty.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in 0..3 {
            let line = (0..3)
                .map(|col| match self.cells[row * 3 + col].as_str() {
                    "" => " ",
                    text => text,
                })
                .collect::<Vec<_>>()
                .join("|");
            out.push_str(&line);
            out.push('\n');
            if row < 2 {
                out.push_str("-+-+-\n");
            }
        }
        if !self.status.is_empty() {
            out.push('\n');
            out.push_str(&self.status);
            out.push('\n');
        }
        out
    }
}

impl View for TextView {
    fn set_cell_text(&mut self, cell: Cell, text: &str) {
        self.cells[cell.index()] = text.to_string();
    }

    fn set_status_text(&mut self, text: &str) {
        self.status = text.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameEngine, Marker, Status};

    #[test]
    fn test_set_cell_and_status() {
        let mut view = TextView::new();
        view.apply(&ViewUpdate::SetCell {
            cell: Cell::Center,
            marker: Marker::O,
        });
        view.apply(&ViewUpdate::SetStatus(Status::Draw));
        assert_eq!(view.cell(Cell::Center), "O");
        assert_eq!(view.status(), "Draw!");
    }

    #[test]
    fn test_clear_cells_blanks_everything() {
        let mut view = TextView::new();
        for cell in Cell::ALL {
            view.set_cell_text(cell, "X");
        }
        view.apply(&ViewUpdate::ClearCells);
        assert!(view.cells().iter().all(String::is_empty));
    }

    #[test]
    fn test_view_mirrors_engine_board() {
        let mut engine = GameEngine::new();
        let mut view = TextView::new();
        for index in [4, 0, 8, 2] {
            view.apply_all(&engine.play(index).unwrap().updates());
        }
        for cell in Cell::ALL {
            assert_eq!(view.cell(cell), engine.state().board().get(cell).text());
        }
        assert_eq!(view.status(), "");
    }

    #[test]
    fn test_render() {
        let mut engine = GameEngine::new();
        let mut view = TextView::new();
        for index in [0, 3, 1, 4, 2] {
            view.apply_all(&engine.play(index).unwrap().updates());
        }
        assert_eq!(view.render(), "X|X|X\n-+-+-\nO|O| \n-+-+-\n | | \n\nX wins!\n");

        view.apply_all(&engine.reset());
        assert_eq!(view, TextView::new());
    }
}
