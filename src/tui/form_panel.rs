//! Form panel with the six token inputs.
//!
//! Two rows of three boxes (blue on top, red below). Each box shows the
//! field label as its title, the current value, and the field's error.

use ratatui::{
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{FieldName, TokenColor};

use super::{AppState, Focus, Theme};

/// Form panel widget
pub struct FormPanel;

impl FormPanel {
    /// Height of one field box: borders, value line, error line
    const FIELD_HEIGHT: u16 = 4;

    /// Total height of the panel
    pub const HEIGHT: u16 = Self::FIELD_HEIGHT * 2;

    /// Render both rows of fields
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let rows = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(Self::FIELD_HEIGHT), // Blue fields
                Constraint::Length(Self::FIELD_HEIGHT), // Red fields
            ])
            .split(area);

        for (color, row) in TokenColor::ALL.into_iter().zip(rows.iter()) {
            let boxes = RatatuiLayout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Ratio(1, 3),
                    Constraint::Ratio(1, 3),
                    Constraint::Ratio(1, 3),
                ])
                .split(*row);

            let fields = [color.count_field(), color.prefix_field(), color.per_row_field()];
            for (field, cell) in fields.into_iter().zip(boxes.iter()) {
                Self::render_field(f, *cell, state, field, theme);
            }
        }
    }

    fn render_field(f: &mut Frame, area: Rect, state: &AppState, field: FieldName, theme: &Theme) {
        let focused = state.focus == Focus::Field(field) && state.active_component.is_none();
        let value = state.form.inputs().get(field);
        let error = state.form.errors().message(field);
        let (_, color_bg) = theme.token_colors(field.color());

        let border_style = if focused {
            Style::default().fg(theme.focus_border)
        } else if !error.is_empty() {
            Style::default().fg(theme.error)
        } else {
            Style::default().fg(color_bg)
        };

        let title = if focused {
            format!(" {} ▶ ", field.label())
        } else {
            format!(" {} ", field.label())
        };

        let mut value_spans = vec![Span::styled(value.to_string(), Style::default().fg(theme.text))];
        if focused {
            value_spans.push(Span::styled("█", Style::default().fg(theme.accent)));
        } else if value.is_empty() {
            value_spans.push(Span::styled(
                "(empty)",
                Style::default().fg(theme.text_muted),
            ));
        }

        let lines = vec![
            Line::from(value_spans),
            Line::from(Span::styled(
                error,
                Style::default()
                    .fg(theme.error)
                    .add_modifier(Modifier::ITALIC),
            )),
        ];

        let widget = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(border_style)
                .style(Style::default().bg(theme.background)),
        );
        f.render_widget(widget, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_renders_inline_error() {
        let mut state = AppState::with_theme(Config::default(), Theme::dark());
        state.form.update_field(FieldName::NumberOfBlue, "0");

        let mut terminal = Terminal::new(TestBackend::new(150, FormPanel::HEIGHT)).unwrap();
        terminal
            .draw(|f| FormPanel::render(f, f.area(), &state, &state.theme))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Must be a positive number"));
        assert!(text.contains("Red Tokens per Row"));
    }
}
