use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::{self, BoardView};
use super::settings_view::{self, SettingsForm};
use crate::game::{self, Engine};

/// What the frame shows beyond the engine itself.
pub struct Screen<'a> {
    pub board: BoardView<'a>,
    pub form: Option<&'a SettingsForm>,
    pub status: Option<&'a str>,
}

pub fn render(frame: &mut Frame, screen: &Screen<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, screen.board.engine, chunks[0]);
    match screen.form {
        Some(form) => settings_view::render(frame, form, chunks[1]),
        None => board_widget::render_board(frame, &screen.board, chunks[1]),
    }
    render_message(frame, screen.status, chunks[2]);
    render_controls(frame, screen.form.is_some(), chunks[3]);
}

fn render_header(frame: &mut Frame, engine: &Engine, area: Rect) {
    let settings = engine.settings();
    let rules = format!(
        "{}x{}, connect {}",
        settings.width, settings.height, settings.match_length
    );

    let (status, color) = if engine.is_terminal() {
        (format!("Game Over  |  {rules}"), Color::White)
    } else {
        let current = engine.current_color();
        let color = match current {
            game::Color::Red => Color::Red,
            game::Color::Yellow => Color::Yellow,
        };
        (
            format!(
                "Current Player: {}  |  Move {}  |  {rules}",
                current.name(),
                engine.move_count() + 1
            ),
            color,
        )
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, editing: bool, area: Rect) {
    let line = if editing {
        Line::from("↑/↓: Field  |  ←/→: Adjust  |  Enter: Start  |  Esc: Cancel")
    } else {
        Line::from("←/→: Move  |  Enter: Drop  |  R: Restart  |  S: Settings  |  Q: Quit")
    };

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
