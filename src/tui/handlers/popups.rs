//! Popup input handlers.

use anyhow::Result;
use crossterm::event;

use crate::tui::{ActiveComponent, AppState, Component, ConfirmDialogEvent, HelpOverlayEvent};

/// Outcome of routing a key to the active component
enum PopupOutcome {
    Pending,
    ConfirmClear(ConfirmDialogEvent),
    HelpClosed,
}

/// Route input to the active popup component
pub fn handle_popup_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let outcome = match &mut state.active_component {
        Some(ActiveComponent::ConfirmClear(dialog)) => dialog
            .handle_input(key)
            .map_or(PopupOutcome::Pending, PopupOutcome::ConfirmClear),
        Some(ActiveComponent::HelpOverlay(help)) => match help.handle_input(key) {
            Some(HelpOverlayEvent::Close) => PopupOutcome::HelpClosed,
            None => PopupOutcome::Pending,
        },
        None => PopupOutcome::Pending,
    };

    match outcome {
        PopupOutcome::Pending => {}
        PopupOutcome::ConfirmClear(ConfirmDialogEvent::Confirmed) => {
            state.close_component();
            state.clear_form();
        }
        PopupOutcome::ConfirmClear(ConfirmDialogEvent::Cancelled) => {
            state.close_component();
            state.set_status("Clear cancelled");
        }
        PopupOutcome::HelpClosed => state.close_component(),
    }

    Ok(false)
}
