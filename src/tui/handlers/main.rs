//! Main UI input handler.

use anyhow::Result;
use crossterm::event::{self, KeyCode, KeyModifiers};

use crate::tui::{AppState, Focus};

/// Handle input for main UI
///
/// Bound shortcuts run their action. Unbound keys edit the focused field.
pub fn handle_main_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    if let Some(action) = state.shortcuts.lookup(state.focus.context(), key) {
        return super::dispatch_action(state, action);
    }

    let Focus::Field(field) = state.focus else {
        // No action mapped - ignore key
        return Ok(false);
    };

    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            let mut value = state.form.inputs().get(field).to_string();
            value.push(c);
            state.form.update_field(field, value);
        }
        KeyCode::Backspace => {
            let mut value = state.form.inputs().get(field).to_string();
            if value.pop().is_some() {
                state.form.update_field(field, value);
            }
        }
        _ => {}
    }

    Ok(false)
}
