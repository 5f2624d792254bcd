//! Yes/no confirmation dialog.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::{centered_rect, Component, Theme};

/// Events emitted by the confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmDialogEvent {
    /// User accepted (y / Enter)
    Confirmed,
    /// User declined (n / Esc)
    Cancelled,
}

/// Modal dialog asking a single yes/no question.
#[derive(Debug, Clone)]
pub struct ConfirmDialog {
    title: String,
    message: String,
}

impl ConfirmDialog {
    /// Creates a dialog with the given title and question.
    #[must_use]
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// The dialog shown before clearing generated tokens.
    #[must_use]
    pub fn confirm_clear() -> Self {
        Self::new("Confirm Clear", "Are you sure you want to clear all tokens?")
    }
}

impl Component for ConfirmDialog {
    type Event = ConfirmDialogEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => Some(ConfirmDialogEvent::Confirmed),
            KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(ConfirmDialogEvent::Cancelled),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = centered_rect(50, 30, area);

        f.render_widget(Clear, dialog_area);

        let key_style = Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD);
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.message.as_str(),
                Style::default().fg(theme.text),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("[Y]", key_style),
                Span::raw(" Clear    "),
                Span::styled("[N]", key_style),
                Span::raw(" Cancel"),
            ]),
        ];

        let prompt = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(format!(" {} ", self.title))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.warning))
                    .style(Style::default().bg(theme.popup_bg)),
            );

        f.render_widget(prompt, dialog_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_confirm_keys() {
        let mut dialog = ConfirmDialog::confirm_clear();
        assert_eq!(
            dialog.handle_input(key(KeyCode::Char('y'))),
            Some(ConfirmDialogEvent::Confirmed)
        );
        assert_eq!(
            dialog.handle_input(key(KeyCode::Enter)),
            Some(ConfirmDialogEvent::Confirmed)
        );
    }

    #[test]
    fn test_cancel_keys() {
        let mut dialog = ConfirmDialog::confirm_clear();
        assert_eq!(
            dialog.handle_input(key(KeyCode::Char('N'))),
            Some(ConfirmDialogEvent::Cancelled)
        );
        assert_eq!(
            dialog.handle_input(key(KeyCode::Esc)),
            Some(ConfirmDialogEvent::Cancelled)
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut dialog = ConfirmDialog::confirm_clear();
        assert_eq!(dialog.handle_input(key(KeyCode::Char('x'))), None);
        assert_eq!(dialog.handle_input(key(KeyCode::Tab)), None);
    }

    #[test]
    fn test_confirm_clear_text() {
        let dialog = ConfirmDialog::confirm_clear();
        assert_eq!(dialog.title, "Confirm Clear");
        assert_eq!(dialog.message, "Are you sure you want to clear all tokens?");
    }
}
