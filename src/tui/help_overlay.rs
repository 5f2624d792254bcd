//! Help overlay widget showing all keyboard shortcuts.
//!
//! The shortcut list is built from the `ShortcutRegistry`, so it always
//! matches the active bindings.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::shortcuts::{ShortcutContext, ShortcutRegistry};

use super::{centered_rect, Component, Theme};

/// Events emitted by the help overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpOverlayEvent {
    /// User closed the overlay
    Close,
}

/// One row of the help content.
#[derive(Debug, Clone, PartialEq, Eq)]
enum HelpEntry {
    Section(&'static str),
    Shortcut(String, String),
    Blank,
}

/// Scrollable help overlay.
#[derive(Debug, Clone)]
pub struct HelpOverlay {
    entries: Vec<HelpEntry>,
    /// Current scroll offset (line number)
    pub scroll_offset: usize,
}

impl HelpOverlay {
    /// Builds the overlay from the registered shortcuts.
    #[must_use]
    pub fn new(registry: &ShortcutRegistry) -> Self {
        let mut entries = vec![
            HelpEntry::Section("FORM"),
            HelpEntry::Shortcut("Type".to_string(), "Edit focused field".to_string()),
            HelpEntry::Shortcut("Backspace".to_string(), "Delete last character".to_string()),
        ];
        for (keys, action) in registry.describe(ShortcutContext::Form) {
            entries.push(HelpEntry::Shortcut(keys, action.description().to_string()));
        }

        entries.push(HelpEntry::Blank);
        entries.push(HelpEntry::Section("TOKEN PANELS"));
        for (keys, action) in registry.describe(ShortcutContext::Tokens) {
            // Shared bindings are already listed under FORM
            let shared = entries
                .iter()
                .any(|e| matches!(e, HelpEntry::Shortcut(k, _) if *k == keys));
            if !shared {
                entries.push(HelpEntry::Shortcut(keys, action.description().to_string()));
            }
        }

        Self {
            entries,
            scroll_offset: 0,
        }
    }

    /// Number of content lines
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.entries.len()
    }

    /// Scroll up by one line.
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.entries.len() {
            self.scroll_offset += 1;
        }
    }

    fn lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        self.entries
            .iter()
            .map(|entry| match entry {
                HelpEntry::Section(title) => Line::from(Span::styled(
                    format!("═══ {title} ═══"),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                )),
                HelpEntry::Shortcut(keys, description) => Line::from(vec![
                    Span::styled(format!("  {keys:<22}"), Style::default().fg(theme.success)),
                    Span::styled(description.clone(), Style::default().fg(theme.text)),
                ]),
                HelpEntry::Blank => Line::from(""),
            })
            .collect()
    }
}

impl Component for HelpOverlay {
    type Event = HelpOverlayEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?' | 'q') | KeyCode::F(1) | KeyCode::Enter => {
                Some(HelpOverlayEvent::Close)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_down();
                None
            }
            KeyCode::Home => {
                self.scroll_offset = 0;
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let overlay_area = centered_rect(70, 80, area);
        f.render_widget(Clear, overlay_area);

        let paragraph = Paragraph::new(self.lines(theme))
            .scroll((self.scroll_offset as u16, 0))
            .block(
                Block::default()
                    .title(" Help - Esc to close ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            );
        f.render_widget(paragraph, overlay_area);

        let mut scrollbar_state =
            ScrollbarState::new(self.entries.len()).position(self.scroll_offset);
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            overlay_area,
            &mut scrollbar_state,
        );
    }
}
