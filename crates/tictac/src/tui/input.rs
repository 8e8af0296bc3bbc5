//! Keyboard handling for the terminal UI.

use crossterm::event::KeyCode;
use tictac_engine::Cell;

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play at this cell.
    Play(Cell),
    /// Play at the cursor.
    PlayCursor,
    /// Move the cursor.
    MoveCursor(Direction),
    /// Start a new round.
    Reset,
    /// Leave the program.
    Quit,
}

/// Maps a key to an action. Digits 1-9 name cells in reading order.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayCursor),
        KeyCode::Up => Some(Action::MoveCursor(Direction::Up)),
        KeyCode::Down => Some(Action::MoveCursor(Direction::Down)),
        KeyCode::Left => Some(Action::MoveCursor(Direction::Left)),
        KeyCode::Right => Some(Action::MoveCursor(Direction::Right)),
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(Cell::from_index)
            .map(Action::Play),
        _ => None,
    }
}

/// Moves the cursor one step; edges do not wrap.
pub fn move_cursor(cursor: Cell, direction: Direction) -> Cell {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match direction {
        Direction::Up => row.checked_sub(1).map(|r| (r, col)),
        Direction::Down => Some((row + 1, col)),
        Direction::Left => col.checked_sub(1).map(|c| (row, c)),
        Direction::Right => Some((row, col + 1)),
    };
    target
        .and_then(|(r, c)| Cell::from_row_col(r, c))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_map_to_cells() {
        assert_eq!(action_for(KeyCode::Char('1')), Some(Action::Play(Cell::TopLeft)));
        assert_eq!(action_for(KeyCode::Char('9')), Some(Action::Play(Cell::BottomRight)));
        assert_eq!(action_for(KeyCode::Char('0')), None);
        assert_eq!(action_for(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(action_for(KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(action_for(KeyCode::Esc), Some(Action::Quit));
        assert_eq!(action_for(KeyCode::Char('r')), Some(Action::Reset));
        assert_eq!(action_for(KeyCode::Enter), Some(Action::PlayCursor));
    }

    #[test]
    fn test_arrows_map_to_directions() {
        assert_eq!(action_for(KeyCode::Up), Some(Action::MoveCursor(Direction::Up)));
        assert_eq!(action_for(KeyCode::Down), Some(Action::MoveCursor(Direction::Down)));
        assert_eq!(action_for(KeyCode::Left), Some(Action::MoveCursor(Direction::Left)));
        assert_eq!(action_for(KeyCode::Right), Some(Action::MoveCursor(Direction::Right)));
        assert_eq!(action_for(KeyCode::PageUp), None);
    }

    #[test]
    fn test_cursor_moves_and_stops_at_edges() {
        assert_eq!(move_cursor(Cell::Center, Direction::Up), Cell::TopCenter);
        assert_eq!(move_cursor(Cell::Center, Direction::Right), Cell::MiddleRight);
        assert_eq!(move_cursor(Cell::TopLeft, Direction::Up), Cell::TopLeft);
        assert_eq!(move_cursor(Cell::TopLeft, Direction::Left), Cell::TopLeft);
        assert_eq!(move_cursor(Cell::BottomRight, Direction::Down), Cell::BottomRight);
        assert_eq!(move_cursor(Cell::BottomRight, Direction::Right), Cell::BottomRight);
    }
}
