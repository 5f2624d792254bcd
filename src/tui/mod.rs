//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod clipboard;
pub mod component;
pub mod confirm_dialog;
pub mod form_panel;
pub mod handlers;
pub mod help_overlay;
pub mod status_bar;
pub mod theme;
pub mod token_grid;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::form::{FormPhase, FormState};
use crate::models::{FieldName, TokenColor};
use crate::shortcuts::{ShortcutContext, ShortcutRegistry};

// Re-export commonly used types
pub use component::Component;
pub use confirm_dialog::{ConfirmDialog, ConfirmDialogEvent};
pub use form_panel::FormPanel;
pub use help_overlay::{HelpOverlay, HelpOverlayEvent};
pub use status_bar::StatusBar;
pub use theme::Theme;
pub use token_grid::{GridScroll, TokenGrid};

/// Element that currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// A form input
    Field(FieldName),
    /// A token panel (for scrolling)
    Tokens(TokenColor),
}

impl Focus {
    /// Next focus stop: the six fields in order, then the blue and red panels.
    #[must_use]
    pub const fn next(&self) -> Self {
        match self {
            Self::Field(FieldName::RedPerRow) => Self::Tokens(TokenColor::Blue),
            Self::Field(field) => Self::Field(field.next()),
            Self::Tokens(TokenColor::Blue) => Self::Tokens(TokenColor::Red),
            Self::Tokens(TokenColor::Red) => Self::Field(FieldName::NumberOfBlue),
        }
    }

    /// Previous focus stop (wraps around)
    #[must_use]
    pub const fn previous(&self) -> Self {
        match self {
            Self::Field(FieldName::NumberOfBlue) => Self::Tokens(TokenColor::Red),
            Self::Field(field) => Self::Field(field.previous()),
            Self::Tokens(TokenColor::Blue) => Self::Field(FieldName::RedPerRow),
            Self::Tokens(TokenColor::Red) => Self::Tokens(TokenColor::Blue),
        }
    }

    /// Shortcut context used to interpret keys for this focus
    #[must_use]
    pub const fn context(&self) -> ShortcutContext {
        match self {
            Self::Field(_) => ShortcutContext::Form,
            Self::Tokens(_) => ShortcutContext::Tokens,
        }
    }
}

/// Active component - holds the currently active popup component
///
/// Only one component can be active at a time.
#[derive(Debug)]
pub enum ActiveComponent {
    /// "Confirm Clear" dialog
    ConfirmClear(ConfirmDialog),
    /// Help overlay component
    HelpOverlay(HelpOverlay),
}

/// Application state - single source of truth
///
/// All UI components read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    // Core data
    /// Form inputs, errors and generated tokens
    pub form: FormState,
    /// Application configuration
    pub config: Config,

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Element receiving keyboard input
    pub focus: Focus,
    /// Scroll position of the blue token panel
    pub blue_scroll: GridScroll,
    /// Scroll position of the red token panel
    pub red_scroll: GridScroll,
    /// Currently active component (if any)
    pub active_component: Option<ActiveComponent>,
    /// Status bar message
    pub status_message: String,
    /// Optional color override for status message (warnings/errors rendered via status)
    pub status_color_override: Option<ratatui::style::Color>,
    /// Current error message (if any)
    pub error_message: Option<String>,
    /// Deadline of the success banner shown after generating
    pub success_until: Option<Instant>,

    // System resources
    /// Keyboard shortcut bindings
    pub shortcuts: ShortcutRegistry,

    // Control flags
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the initial state: empty form, first field focused.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);
        Self::with_theme(config, theme)
    }

    /// Creates the initial state with an explicit theme (skips OS detection).
    #[must_use]
    pub fn with_theme(config: Config, theme: Theme) -> Self {
        Self {
            form: FormState::with_max_tokens(config.limits.max_tokens),
            config,
            theme,
            focus: Focus::Field(FieldName::NumberOfBlue),
            blue_scroll: GridScroll::default(),
            red_scroll: GridScroll::default(),
            active_component: None,
            status_message: "Fill in the fields and press Enter to generate tokens".to_string(),
            status_color_override: None,
            error_message: None,
            success_until: None,
            shortcuts: ShortcutRegistry::new(),
            should_quit: false,
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_color_override = None;
    }

    /// Set status message rendered in the warning color
    pub fn set_warning(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_color_override = Some(self.theme.warning);
    }

    /// Show the error overlay
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Dismiss the error overlay
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Close the active popup component
    pub fn close_component(&mut self) {
        self.active_component = None;
    }

    /// Scroll position of a token panel
    #[must_use]
    pub const fn scroll(&self, color: TokenColor) -> GridScroll {
        match color {
            TokenColor::Blue => self.blue_scroll,
            TokenColor::Red => self.red_scroll,
        }
    }

    /// Starts the success banner for the configured duration.
    pub fn show_success(&mut self, now: Instant) {
        self.success_until = Some(now + Duration::from_millis(self.config.ui.success_banner_ms));
    }

    /// Whether the success banner is visible at `now`
    #[must_use]
    pub fn success_visible(&self, now: Instant) -> bool {
        self.success_until.is_some_and(|deadline| now < deadline)
    }

    /// Drops the success banner once its deadline has passed.
    pub fn expire_success(&mut self, now: Instant) {
        if !self.success_visible(now) {
            self.success_until = None;
        }
    }

    /// Resets the form, tokens and panel scroll.
    pub fn clear_form(&mut self) {
        self.form.clear();
        self.blue_scroll = GridScroll::default();
        self.red_scroll = GridScroll::default();
        self.success_until = None;
        self.set_status("Form cleared");
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        state.expire_success(Instant::now());

        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout so the success banner can expire
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key_event(state, key)? {
                        break; // User quit
                    }
                }
                // Resize and everything else re-render on the next loop
                _ => {}
            }
        }

        // Check if should quit
        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
pub fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                 // Title bar
            Constraint::Length(FormPanel::HEIGHT), // Form
            Constraint::Min(6),                    // Token panels
            Constraint::Length(StatusBar::HEIGHT), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    FormPanel::render(f, chunks[1], state, &state.theme);
    render_token_panels(f, chunks[2], state);
    StatusBar::render(f, chunks[3], state, &state.theme);

    // Render popup if active
    match &state.active_component {
        Some(ActiveComponent::ConfirmClear(dialog)) => dialog.render(f, f.area(), &state.theme),
        Some(ActiveComponent::HelpOverlay(help)) => help.render(f, f.area(), &state.theme),
        None => {}
    }

    // Render error overlay on top of everything if error is present
    if let Some(ref error) = state.error_message {
        render_error_overlay(f, error, &state.theme);
    }
}

/// Render title bar with token totals
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let mut spans = vec![Span::styled(
        format!(" {} ", crate::constants::APP_NAME),
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    )];

    if state.form.phase() == FormPhase::Generated {
        for color in TokenColor::ALL {
            let (fg, bg) = theme.token_colors(color);
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!(" {}: {} ", color.title(), state.form.tokens(color).len()),
                Style::default().fg(fg).bg(bg),
            ));
        }
    }

    let title_widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(theme.background)),
    );

    f.render_widget(title_widget, area);
}

/// Render the blue and red token panels side by side
fn render_token_panels(f: &mut Frame, area: Rect, state: &AppState) {
    let columns = RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (color, column) in TokenColor::ALL.into_iter().zip(columns.iter()) {
        let grid = TokenGrid {
            set: state.form.tokens(color),
            color,
            scroll: state.scroll(color),
            cell_width: state.config.ui.token_cell_width,
            focused: state.focus == Focus::Tokens(color),
        };
        grid.render(f, *column, &state.theme);
    }
}

/// Render error overlay on top of all other UI elements
fn render_error_overlay(f: &mut Frame, error: &str, theme: &Theme) {
    let area = centered_rect(70, 40, f.area());

    // Clear the background area first
    f.render_widget(Clear, area);

    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, area);

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Error message
            Constraint::Length(3), // Help text
        ])
        .split(area);

    let title = Paragraph::new("ERROR")
        .style(
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(theme.error).bg(theme.background)),
        );
    f.render_widget(title, chunks[0]);

    let error_text = Paragraph::new(error)
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Details ")
                .style(Style::default().bg(theme.background)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(error_text, chunks[1]);

    let help = Paragraph::new(vec![Line::from(vec![
        Span::styled(
            "Enter/Esc",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Dismiss"),
    ])])
    .style(Style::default().fg(theme.text).bg(theme.background))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(help, chunks[2]);
}

/// Helper to create a centered rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Handle keyboard input events
///
/// Returns `Ok(true)` when the user asked to quit.
pub fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    use crossterm::event::KeyCode;

    // If error overlay is shown, allow dismissing with Enter or Esc
    if state.error_message.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.clear_error();
        }
        // Block all other input while error is shown
        return Ok(false);
    }

    // Route to popup handler if popup is active
    if state.active_component.is_some() {
        return handlers::handle_popup_input(state, key);
    }

    // Main UI key handling
    handlers::handle_main_input(state, key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn state() -> AppState {
        AppState::with_theme(Config::default(), Theme::dark())
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_focus_cycle_visits_fields_then_panels() {
        let mut focus = Focus::Field(FieldName::NumberOfBlue);
        let mut stops = vec![focus];
        for _ in 0..8 {
            focus = focus.next();
            stops.push(focus);
        }
        assert_eq!(stops[6], Focus::Tokens(TokenColor::Blue));
        assert_eq!(stops[7], Focus::Tokens(TokenColor::Red));
        assert_eq!(stops[8], Focus::Field(FieldName::NumberOfBlue));
    }

    #[test]
    fn test_focus_previous_inverts_next() {
        let mut focus = Focus::Tokens(TokenColor::Red);
        for _ in 0..8 {
            assert_eq!(focus.next().previous(), focus);
            focus = focus.next();
        }
    }

    #[test]
    fn test_success_banner_expires() {
        let mut state = state();
        let now = Instant::now();
        state.show_success(now);

        assert!(state.success_visible(now));
        let later = now + Duration::from_millis(state.config.ui.success_banner_ms);
        assert!(!state.success_visible(later));

        state.expire_success(later);
        assert!(state.success_until.is_none());
    }

    #[test]
    fn test_error_overlay_blocks_input() {
        let mut state = state();
        state.set_error("boom");

        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        let quit = handle_key_event(&mut state, key).unwrap();
        assert!(!quit);
        assert!(state.error_message.is_some());

        handle_key_event(&mut state, KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)).unwrap();
        assert!(state.error_message.is_none());
        assert!(!state.should_quit);
    }

    #[test]
    fn test_render_shows_empty_panels() {
        let state = state();
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|f| render(f, &state)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Blue Tokens"));
        assert!(text.contains("Red Tokens"));
        assert!(text.contains("Number of Blue Tokens"));
    }

    #[test]
    fn test_render_shows_generated_tokens() {
        let mut state = state();
        state.form.update_field(FieldName::NumberOfBlue, "3");
        state.form.update_field(FieldName::BluePrefix, "B");
        state.form.update_field(FieldName::BluePerRow, "2");
        state.form.update_field(FieldName::NumberOfRed, "1");
        state.form.update_field(FieldName::RedPrefix, "R");
        state.form.update_field(FieldName::RedPerRow, "1");
        assert!(state.form.generate().is_generated());

        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|f| render(f, &state)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("B1"));
        assert!(text.contains("B3"));
        assert!(text.contains("R1"));
    }
}
