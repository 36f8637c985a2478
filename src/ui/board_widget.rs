use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::animation::DropAnimation;
use crate::game::{self, Cell, Engine, GameState};

const EMPTY: &str = " . ";
const TOKEN: &str = " ● ";
const WINNING_TOKEN: &str = " ◉ ";

/// Everything the board drawing needs for one frame.
pub struct BoardView<'a> {
    pub engine: &'a Engine,
    pub selected_column: usize,
    pub animation: Option<&'a DropAnimation>,
}

fn token_color(color: game::Color) -> Color {
    match color {
        game::Color::Red => Color::Red,
        game::Color::Yellow => Color::Yellow,
    }
}

fn token_span(color: game::Color, winning: bool) -> Span<'static> {
    if winning {
        Span::styled(
            WINNING_TOKEN,
            Style::default()
                .fg(token_color(color))
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(TOKEN, Style::default().fg(token_color(color)))
    }
}

fn empty_span() -> Span<'static> {
    Span::styled(EMPTY, Style::default().fg(Color::DarkGray))
}

impl BoardView<'_> {
    /// Color drawn at `(column, row)` this frame, accounting for a token
    /// still in flight.
    fn visible_color(&self, column: usize, row: usize) -> Option<game::Color> {
        if let Some(anim) = self.animation {
            if anim.column == column {
                if anim.visual_row() == row {
                    return Some(anim.color);
                }
                if anim.row == row {
                    return None;
                }
            }
        }
        match self.engine.occupant(column as isize, row as isize) {
            Cell::Token(color) => Some(color),
            Cell::Empty | Cell::OutOfRange => None,
        }
    }

    /// Token hovering over the board: the falling token while it is above
    /// the top row, otherwise the next token over the selected column.
    fn preview(&self) -> Option<(usize, game::Color)> {
        let height = self.engine.grid().height();
        match self.animation {
            Some(anim) if anim.visual_row() == height => Some((anim.column, anim.color)),
            Some(_) => None,
            None if self.engine.state() == GameState::InProgress => {
                Some((self.selected_column, self.engine.current_color()))
            }
            None => None,
        }
    }

    /// Build the board as text lines: column numbers, preview line, framed
    /// grid (top row first), and the selection marker.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let width = self.engine.grid().width();
        let height = self.engine.grid().height();
        let show_line = self.animation.is_none();
        let winning = self.engine.winning_line();
        let mut lines = Vec::with_capacity(height + 5);

        let mut number_line = vec![Span::raw("   ")];
        for column in 0..width {
            let label = format!("{:^3}", column + 1);
            if column == self.selected_column {
                number_line.push(Span::styled(
                    label,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                ));
            } else {
                number_line.push(Span::raw(label));
            }
        }
        number_line.push(Span::raw("  "));
        lines.push(Line::from(number_line));

        let preview = self.preview();
        let mut preview_line = vec![Span::raw("   ")];
        for column in 0..width {
            match preview {
                Some((c, color)) if c == column => preview_line.push(token_span(color, false)),
                _ => preview_line.push(Span::raw("   ")),
            }
        }
        preview_line.push(Span::raw("  "));
        lines.push(Line::from(preview_line));

        let rule = "═".repeat(3 * width + 1);
        lines.push(Line::from(format!("  ╔{rule}╗")));

        for row in (0..height).rev() {
            let mut spans = vec![Span::raw("  ║")];
            for column in 0..width {
                let span = match self.visible_color(column, row) {
                    Some(color) => {
                        let on_line = show_line && winning.contains(&(column, row));
                        token_span(color, on_line)
                    }
                    None => empty_span(),
                };
                spans.push(span);
            }
            spans.push(Span::raw(" ║"));
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(format!("  ╚{rule}╝")));

        let mut indicator_line = vec![Span::raw("   ")];
        for column in 0..width {
            if column == self.selected_column {
                indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
            } else {
                indicator_line.push(Span::raw("   "));
            }
        }
        indicator_line.push(Span::raw("  "));
        lines.push(Line::from(indicator_line));

        lines
    }
}

pub fn render_board(frame: &mut Frame, view: &BoardView<'_>, area: Rect) {
    let widget = Paragraph::new(view.lines()).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    /// Line index of grid row `row` on a board of `height` rows.
    fn row_line(height: usize, row: usize) -> usize {
        3 + (height - 1 - row)
    }

    #[test]
    fn test_layout_size() {
        let engine = Engine::new_game(7, 6, 4).unwrap();
        let view = BoardView {
            engine: &engine,
            selected_column: 3,
            animation: None,
        };
        let lines = view.lines();
        assert_eq!(lines.len(), 6 + 5);
        assert_eq!(text(&lines[2]), format!("  ╔{}╗", "═".repeat(22)));
        assert_eq!(text(&lines[0]).trim(), "1  2  3  4  5  6  7");
    }

    #[test]
    fn test_preview_shows_current_color_over_selected_column() {
        let engine = Engine::new_game(5, 4, 3).unwrap();
        let view = BoardView {
            engine: &engine,
            selected_column: 2,
            animation: None,
        };
        let lines = view.lines();
        let preview = &lines[1].spans[3];
        assert_eq!(preview.content, TOKEN);
        assert_eq!(preview.style.fg, Some(Color::Yellow));
    }

    #[test]
    fn test_placed_token_is_drawn_on_its_row() {
        let mut engine = Engine::new_game(7, 6, 4).unwrap();
        engine.drop_token(0).unwrap();
        let view = BoardView {
            engine: &engine,
            selected_column: 0,
            animation: None,
        };
        let lines = view.lines();
        let cell = &lines[row_line(6, 0)].spans[1];
        assert_eq!(cell.content, TOKEN);
        assert_eq!(cell.style.fg, Some(Color::Yellow));
        assert_eq!(lines[row_line(6, 1)].spans[1].content, EMPTY);
    }

    #[test]
    fn test_falling_token_hides_its_target() {
        let mut engine = Engine::new_game(7, 6, 4).unwrap();
        engine.drop_token(4).unwrap();
        let mut anim = DropAnimation::new(4, 0, game::Color::Yellow, 6);
        anim.step();
        anim.step();

        let view = BoardView {
            engine: &engine,
            selected_column: 4,
            animation: Some(&anim),
        };
        let lines = view.lines();
        assert_eq!(lines[row_line(6, 0)].spans[5].content, EMPTY);
        assert_eq!(lines[row_line(6, 4)].spans[5].content, TOKEN);
        // No preview while a token is in flight below the top edge.
        assert!(text(&lines[1]).trim().is_empty());
    }

    #[test]
    fn test_winning_line_is_highlighted() {
        let mut engine = Engine::new_game(7, 6, 4).unwrap();
        for column in [0, 6, 1, 6, 2, 6, 3] {
            engine.drop_token(column).unwrap();
        }
        let view = BoardView {
            engine: &engine,
            selected_column: 3,
            animation: None,
        };
        let lines = view.lines();
        let bottom = &lines[row_line(6, 0)];
        for column in 0..4 {
            assert_eq!(bottom.spans[column + 1].content, WINNING_TOKEN);
        }
        assert_eq!(bottom.spans[7].content, TOKEN);
        assert!(text(&lines[1]).trim().is_empty());
    }
}
