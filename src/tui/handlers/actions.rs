//! Action dispatch for the main UI.

use anyhow::Result;
use std::time::Instant;
use tracing::{debug, warn};

use crate::form::{FormPhase, GenerateOutcome};
use crate::models::TokenColor;
use crate::shortcuts::Action;
use crate::tui::{
    clipboard, ActiveComponent, AppState, ConfirmDialog, Focus, GridScroll, HelpOverlay,
};

/// Dispatch an action to the appropriate handler
///
/// Returns `Ok(true)` when the application should quit.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    debug!(?action, "dispatching action");

    match action {
        Action::NextFocus => state.focus = state.focus.next(),
        Action::PreviousFocus => state.focus = state.focus.previous(),
        Action::FocusBluePanel => state.focus = Focus::Tokens(TokenColor::Blue),
        Action::FocusRedPanel => state.focus = Focus::Tokens(TokenColor::Red),

        Action::Generate => handle_generate(state),
        Action::Clear => handle_clear(state),
        Action::ClearField => {
            if let Focus::Field(field) = state.focus {
                state.form.update_field(field, "");
            }
        }

        Action::ScrollUp | Action::ScrollDown | Action::ScrollLeft | Action::ScrollRight => {
            handle_scroll(state, action);
        }
        Action::CopyTokens => handle_copy(state),

        Action::ToggleHelp => {
            state.active_component = Some(ActiveComponent::HelpOverlay(HelpOverlay::new(
                &state.shortcuts,
            )));
        }
        Action::Quit => {
            state.should_quit = true;
            return Ok(true);
        }
    }

    Ok(false)
}

fn handle_generate(state: &mut AppState) {
    match state.form.generate() {
        GenerateOutcome::Generated => {
            state.blue_scroll = GridScroll::default();
            state.red_scroll = GridScroll::default();
            state.show_success(Instant::now());
            state.set_status(format!(
                "Generated {} blue and {} red tokens",
                state.form.blue().len(),
                state.form.red().len()
            ));
        }
        GenerateOutcome::Rejected => {
            state.success_until = None;
            let count = state.form.errors().len();
            if count == 0 {
                state.set_warning("Fix the errors and press Enter again");
            } else {
                state.set_warning(format!("Cannot generate: {count} field(s) need attention"));
            }
        }
    }
}

/// Clearing generated tokens asks first when configured to.
fn handle_clear(state: &mut AppState) {
    if state.config.ui.confirm_clear && state.form.phase() == FormPhase::Generated {
        state.active_component = Some(ActiveComponent::ConfirmClear(ConfirmDialog::confirm_clear()));
    } else {
        state.clear_form();
    }
}

fn handle_scroll(state: &mut AppState, action: Action) {
    let Focus::Tokens(color) = state.focus else {
        return;
    };
    let set = state.form.tokens(color);
    let scroll = match color {
        TokenColor::Blue => &mut state.blue_scroll,
        TokenColor::Red => &mut state.red_scroll,
    };
    match action {
        Action::ScrollUp => scroll.up(),
        Action::ScrollDown => scroll.down(set),
        Action::ScrollLeft => scroll.left(),
        Action::ScrollRight => scroll.right(set),
        _ => {}
    }
}

fn handle_copy(state: &mut AppState) {
    let Some(text) = clipboard::tokens_text(&state.form) else {
        state.set_warning("No tokens to copy yet");
        return;
    };

    match clipboard::copy_text(text) {
        Ok(()) => state.set_status("Tokens copied to clipboard"),
        Err(e) => {
            warn!("clipboard copy failed: {e:#}");
            state.set_error(format!("{e:#}"));
        }
    }
}
