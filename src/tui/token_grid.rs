//! Token panel widget.
//!
//! Renders a generated token set as rows of colored chips, `per_row` chips
//! per line, with a scroll offset for sets larger than the panel.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::{TokenColor, TokenSet};

use super::Theme;

/// Shown in a panel before anything has been generated
pub const EMPTY_MESSAGE: &str = "Go ahead and generate some tokens to display here.";

/// Scroll offset of a token panel, in rows and chips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridScroll {
    /// First visible row
    pub row: usize,
    /// First visible chip in each row
    pub col: usize,
}

impl GridScroll {
    /// Moves up one row.
    pub const fn up(&mut self) {
        self.row = self.row.saturating_sub(1);
    }

    /// Moves down one row, stopping at the last row of `set`.
    pub fn down(&mut self, set: &TokenSet) {
        if self.row + 1 < set.row_count() {
            self.row += 1;
        }
    }

    /// Moves left one chip.
    pub const fn left(&mut self) {
        self.col = self.col.saturating_sub(1);
    }

    /// Moves right one chip, stopping at the last chip of a full row.
    pub fn right(&mut self, set: &TokenSet) {
        let widest_row = set.len().min(set.per_row);
        if self.col + 1 < widest_row {
            self.col += 1;
        }
    }
}

/// A token panel ready to render.
pub struct TokenGrid<'a> {
    /// Tokens to display
    pub set: &'a TokenSet,
    /// Which color the panel shows
    pub color: TokenColor,
    /// Current scroll offset
    pub scroll: GridScroll,
    /// Width of one chip in columns, gap included
    pub cell_width: u16,
    /// Whether the panel has keyboard focus
    pub focused: bool,
}

impl TokenGrid<'_> {
    /// Render the panel
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let (chip_fg, chip_bg) = theme.token_colors(self.color);
        let border_style = if self.focused {
            Style::default().fg(theme.focus_border)
        } else {
            Style::default().fg(chip_bg)
        };

        let title = if self.set.is_empty() {
            format!(" {} ", self.color.title())
        } else {
            format!(
                " {} ({} total, {} per row) ",
                self.color.title(),
                self.set.len(),
                self.set.per_row
            )
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style)
            .style(Style::default().bg(theme.background));

        if self.set.is_empty() {
            let empty = Paragraph::new(EMPTY_MESSAGE)
                .style(Style::default().fg(theme.text_muted))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block);
            f.render_widget(empty, area);
            return;
        }

        let chip_style = Style::default()
            .fg(chip_fg)
            .bg(chip_bg)
            .add_modifier(Modifier::BOLD);
        let visible_rows = area.height.saturating_sub(2) as usize;

        let lines: Vec<Line> = self
            .set
            .rows()
            .skip(self.scroll.row)
            .take(visible_rows)
            .map(|row| {
                let mut spans = Vec::with_capacity(row.len() * 2);
                for token in row.iter().skip(self.scroll.col) {
                    spans.push(Span::styled(chip_label(token, self.cell_width), chip_style));
                    spans.push(Span::raw(" "));
                }
                Line::from(spans)
            })
            .collect();

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// Centers `token` in a chip one column narrower than `cell_width`,
/// truncating with an ellipsis when it does not fit.
#[must_use]
pub fn chip_label(token: &str, cell_width: u16) -> String {
    let width = usize::from(cell_width.saturating_sub(1)).max(1);
    let chars = token.chars().count();
    if chars <= width {
        format!("{token:^width$}")
    } else {
        let kept: String = token.chars().take(width.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}
