//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Instant;

use super::{AppState, Focus, Theme};

/// Shown while the success banner is active
pub const SUCCESS_MESSAGE: &str = "✓ Tokens generated successfully!";

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Height including borders
    pub const HEIGHT: u16 = 4;

    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let status_line = if state.success_visible(Instant::now()) {
            Line::from(Span::styled(
                SUCCESS_MESSAGE,
                Style::default()
                    .fg(theme.success)
                    .add_modifier(Modifier::BOLD),
            ))
        } else if let Some(color) = state.status_color_override {
            Line::from(Span::styled(
                state.status_message.as_str(),
                Style::default().fg(color),
            ))
        } else {
            Line::from(Span::styled(
                state.status_message.as_str(),
                Style::default().fg(theme.text),
            ))
        };

        let status = Paragraph::new(vec![status_line, Self::help_line(state, theme)]).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Status ")
                .style(Style::default().bg(theme.background)),
        );

        f.render_widget(status, area);
    }

    /// Key hints for the current focus
    fn help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let hints: &[(&'static str, &'static str)] = match state.focus {
            Focus::Field(_) => &[
                ("Tab", "Next"),
                ("Enter", "Generate"),
                ("Ctrl+L", "Clear"),
                ("Ctrl+C", "Copy"),
                ("F2/F3", "Tokens"),
                ("F1", "Help"),
                ("Esc", "Quit"),
            ],
            Focus::Tokens(_) => &[
                ("←↑↓→", "Scroll"),
                ("Tab", "Next"),
                ("y", "Copy"),
                ("Ctrl+L", "Clear"),
                ("?", "Help"),
                ("q", "Quit"),
            ],
        };

        let mut spans = Vec::with_capacity(hints.len() * 2);
        for (key, label) in hints {
            spans.push(Span::styled(
                *key,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {label}  "),
                Style::default().fg(theme.text_muted),
            ));
        }
        Line::from(spans)
    }
}
