//! Application state for the terminal UI.

use super::input::{Action, move_cursor};
use tictac_engine::{Cell, GameEngine, TextView, View};
use tracing::{debug, info, instrument, warn};

/// The engine, the text it has produced, and the cursor.
///
/// Drawing reads only `view` and `cursor`.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    view: TextView,
    cursor: Cell,
    quit: bool,
}

impl App {
    /// Creates an app with a fresh round.
    pub fn new() -> Self {
        Self {
            engine: GameEngine::new(),
            view: TextView::new(),
            cursor: Cell::Center,
            quit: false,
        }
    }

    /// What the engine has told the view so far.
    pub fn view(&self) -> &TextView {
        &self.view
    }

    /// The highlighted cell.
    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Hint line shown under the board.
    pub fn help(&self) -> String {
        if self.engine.is_over() {
            "r: new round   q: quit".to_string()
        } else {
            format!(
                "{} to move, {} open   1-9/arrows+Enter: play   r: reset   q: quit",
                self.engine.current_player(),
                self.engine.open_cells().len()
            )
        }
    }

    /// Applies one user action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Quit => {
                info!("User quit");
                self.quit = true;
            }
            Action::Reset => {
                let updates = self.engine.reset();
                self.view.apply_all(&updates);
            }
            Action::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Action::PlayCursor => self.play(self.cursor),
            Action::Play(cell) => {
                self.cursor = cell;
                self.play(cell);
            }
        }
    }

    fn play(&mut self, cell: Cell) {
        match self.engine.play_cell(cell) {
            Ok(outcome) => {
                debug!(?outcome, "Play handled");
                self.view.apply_all(&outcome.updates());
            }
            Err(e) => warn!(error = %e, "Move failed"),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::Direction;

    #[test]
    fn test_play_updates_view() {
        let mut app = App::new();
        app.handle(Action::Play(Cell::TopLeft));
        assert_eq!(app.view().cell(Cell::TopLeft), "X");
        assert_eq!(app.cursor(), Cell::TopLeft);
    }

    #[test]
    fn test_cursor_play_and_win() {
        let mut app = App::new();
        // X: 0, 1, 2 via cursor; O: 3, 4 via digits.
        app.handle(Action::Play(Cell::TopLeft));
        app.handle(Action::Play(Cell::MiddleLeft));
        app.handle(Action::Play(Cell::TopCenter));
        app.handle(Action::Play(Cell::Center));
        app.handle(Action::MoveCursor(Direction::Up));
        app.handle(Action::MoveCursor(Direction::Right));
        app.handle(Action::PlayCursor);
        assert_eq!(app.view().status(), "X wins!");
        assert_eq!(app.help(), "r: new round   q: quit");
    }

    #[test]
    fn test_reset_clears_view() {
        let mut app = App::new();
        app.handle(Action::Play(Cell::Center));
        app.handle(Action::Reset);
        assert_eq!(app.view(), &TextView::new());
        assert!(app.help().starts_with("X to move, 9 open"));
    }

    #[test]
    fn test_help_counts_open_cells() {
        let mut app = App::new();
        app.handle(Action::Play(Cell::Center));
        app.handle(Action::Play(Cell::Center));
        app.handle(Action::Play(Cell::TopLeft));
        assert!(app.help().starts_with("X to move, 7 open"));
    }

    #[test]
    fn test_quit() {
        let mut app = App::new();
        assert!(!app.should_quit());
        app.handle(Action::Quit);
        assert!(app.should_quit());
    }
}
