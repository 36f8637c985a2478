use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::game::GameSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    Width,
    Height,
    MatchLength,
}

impl SettingsField {
    const ALL: [SettingsField; 3] = [
        SettingsField::Width,
        SettingsField::Height,
        SettingsField::MatchLength,
    ];

    fn label(self) -> &'static str {
        match self {
            SettingsField::Width => "Board width",
            SettingsField::Height => "Board height",
            SettingsField::MatchLength => "Match length",
        }
    }

    fn index(self) -> usize {
        match self {
            SettingsField::Width => 0,
            SettingsField::Height => 1,
            SettingsField::MatchLength => 2,
        }
    }
}

/// Draft of the next game's settings. Every edit is clamped, so the draft
/// is always a valid engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsForm {
    draft: GameSettings,
    field: SettingsField,
}

impl SettingsForm {
    pub fn new(current: GameSettings) -> Self {
        SettingsForm {
            draft: current.clamped(),
            field: SettingsField::Width,
        }
    }

    pub fn draft(&self) -> GameSettings {
        self.draft
    }

    pub fn field(&self) -> SettingsField {
        self.field
    }

    pub fn next_field(&mut self) {
        self.field = SettingsField::ALL[(self.field.index() + 1) % SettingsField::ALL.len()];
    }

    pub fn previous_field(&mut self) {
        let len = SettingsField::ALL.len();
        self.field = SettingsField::ALL[(self.field.index() + len - 1) % len];
    }

    /// Change the selected value by `delta`, then re-clamp the whole draft.
    pub fn adjust(&mut self, delta: isize) {
        let value = match self.field {
            SettingsField::Width => &mut self.draft.width,
            SettingsField::Height => &mut self.draft.height,
            SettingsField::MatchLength => &mut self.draft.match_length,
        };
        *value = value.saturating_add_signed(delta);
        self.draft = self.draft.clamped();
    }

    fn value(&self, field: SettingsField) -> usize {
        match field {
            SettingsField::Width => self.draft.width,
            SettingsField::Height => self.draft.height,
            SettingsField::MatchLength => self.draft.match_length,
        }
    }
}

pub fn render(frame: &mut Frame, form: &SettingsForm, area: Rect) {
    let mut lines = vec![Line::from("")];

    for field in SettingsField::ALL {
        let text = format!("{:<14}{:>4}", field.label(), form.value(field));
        if field == form.field() {
            lines.push(Line::from(vec![
                Span::styled("▶ ", Style::default().fg(Color::Cyan)),
                Span::styled(
                    text,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
            ]));
        } else {
            lines.push(Line::from(format!("  {text}  ")));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Match length is capped at the smaller board side",
        Style::default().fg(Color::DarkGray),
    )));

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("New game"));
    frame.render_widget(widget, area);
}
