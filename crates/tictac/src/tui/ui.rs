//! Stateless rendering of the text view.

use super::app::App;
use crate::DisplayConfig;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::str::FromStr;
use tictac_engine::Cell;
use tracing::warn;

/// Resolved display settings.
#[derive(Debug, Clone)]
pub struct Theme {
    title: String,
    show_cell_hints: bool,
    x_color: Color,
    o_color: Color,
}

impl Theme {
    /// Resolves color names; unknown names fall back to the defaults.
    pub fn from_config(config: &DisplayConfig) -> Self {
        Self {
            title: config.title().clone(),
            show_cell_hints: *config.show_cell_hints(),
            x_color: parse_color(config.x_color(), Color::Blue),
            o_color: parse_color(config.o_color(), Color::Red),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&DisplayConfig::default())
    }
}

fn parse_color(name: &str, fallback: Color) -> Color {
    Color::from_str(name).unwrap_or_else(|_| {
        warn!(name, "Unknown color, using fallback");
        fallback
    })
}

/// Renders title, board, status and help.
pub fn draw(frame: &mut Frame, app: &App, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new(theme.title.as_str())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app, theme);

    let status = Paragraph::new(app.view().status())
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(app.help())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, theme, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, theme: &Theme, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(cell) = Cell::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], app, theme, cell);
        }
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, theme: &Theme, cell: Cell) {
    let text = app.view().cell(cell);

    let (symbol, base_style) = match text {
        "" if theme.show_cell_hints => (
            format!(" {} ", cell.index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        "" => ("   ".to_string(), Style::default()),
        "X" => (
            " X ".to_string(),
            Style::default().fg(theme.x_color).add_modifier(Modifier::BOLD),
        ),
        "O" => (
            " O ".to_string(),
            Style::default().fg(theme.o_color).add_modifier(Modifier::BOLD),
        ),
        other => (format!(" {} ", other), Style::default()),
    };

    let style = if cell == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically center the symbol in the 3-line cell.
    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(symbol, style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::Action;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App, theme: &Theme) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal.draw(|f| draw(f, app, theme)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_title_and_hints() {
        let screen = render(&App::new(), &Theme::default());
        assert!(screen.contains("Tic-Tac-Toe"));
        for hint in 1..=9 {
            assert!(screen.contains(&hint.to_string()));
        }
    }

    #[test]
    fn test_renders_status_after_win() {
        let mut app = App::new();
        for cell in [Cell::TopLeft, Cell::MiddleLeft, Cell::TopCenter, Cell::Center, Cell::TopRight] {
            app.handle(Action::Play(cell));
        }
        let screen = render(&app, &Theme::default());
        assert!(screen.contains("X wins!"));
    }

    #[test]
    fn test_hints_can_be_hidden() {
        let config: DisplayConfig =
            toml::from_str("show_cell_hints = false\ntitle = \"Noughts\"").unwrap();
        let screen = render(&App::new(), &Theme::from_config(&config));
        assert!(screen.contains("Noughts"));
        assert!(!screen.contains('5'));
    }

    #[test]
    fn test_unknown_color_falls_back() {
        assert_eq!(parse_color("not-a-color", Color::Red), Color::Red);
        assert_eq!(parse_color("green", Color::Red), Color::Green);
    }
}
