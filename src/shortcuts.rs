//! Centralized shortcut and action system.
//!
//! This module maps keyboard shortcuts to actions per input context. Keys
//! that are not bound in the form context are treated as text input by the
//! form handler.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Context in which a key is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutContext {
    /// A form field has focus; printable keys edit the field
    Form,
    /// A token panel has focus; arrow keys scroll
    Tokens,
}

/// All possible actions in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === FOCUS ===
    NextFocus,
    PreviousFocus,

    // === FORM ===
    Generate,
    Clear,
    ClearField,

    // === TOKEN PANELS ===
    FocusBluePanel,
    FocusRedPanel,
    ScrollUp,
    ScrollDown,
    ScrollLeft,
    ScrollRight,
    CopyTokens,

    // === GENERAL ===
    ToggleHelp,
    Quit,
}

impl Action {
    /// Short description shown in the help overlay
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::NextFocus => "Next field / panel",
            Self::PreviousFocus => "Previous field / panel",
            Self::Generate => "Generate tokens",
            Self::Clear => "Clear form and tokens",
            Self::ClearField => "Clear focused field",
            Self::FocusBluePanel => "Focus blue token panel",
            Self::FocusRedPanel => "Focus red token panel",
            Self::ScrollUp => "Scroll tokens up",
            Self::ScrollDown => "Scroll tokens down",
            Self::ScrollLeft => "Scroll tokens left",
            Self::ScrollRight => "Scroll tokens right",
            Self::CopyTokens => "Copy tokens to clipboard",
            Self::ToggleHelp => "Toggle help",
            Self::Quit => "Quit",
        }
    }
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    ///
    /// Shift is dropped for characters, since it is already reflected in the
    /// character itself (`?` arrives as Shift+`?` on most terminals).
    #[must_use]
    pub fn from_event(event: KeyEvent) -> Self {
        let modifiers = match event.code {
            KeyCode::Char(_) => event.modifiers.difference(KeyModifiers::SHIFT),
            _ => event.modifiers,
        };
        Self {
            code: event.code,
            modifiers,
        }
    }

    /// Human-readable key label (e.g. "Ctrl+G").
    #[must_use]
    pub fn label(&self) -> String {
        let key = match self.code {
            KeyCode::Char(c) if self.modifiers.contains(KeyModifiers::CONTROL) => {
                c.to_ascii_uppercase().to_string()
            }
            KeyCode::Char(c) => c.to_string(),
            KeyCode::F(n) => format!("F{n}"),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            other => format!("{other:?}"),
        };
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{key}")
        } else {
            key
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
///
/// This is the central source of truth for all keyboard shortcuts in the application.
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(ShortcutContext, KeyBinding), Action>,
    /// Registration order, for listing in help
    order: Vec<(ShortcutContext, KeyBinding, Action)>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
            order: Vec::new(),
        };

        for ctx in [ShortcutContext::Form, ShortcutContext::Tokens] {
            registry.register_shared_shortcuts(ctx);
        }
        registry.register_token_shortcuts();
        registry
    }

    /// Shortcuts that work regardless of focus.
    fn register_shared_shortcuts(&mut self, ctx: ShortcutContext) {
        use KeyCode as K;
        use KeyModifiers as M;

        // === FOCUS ===
        self.register(ctx, K::Tab, M::NONE, Action::NextFocus);
        self.register(ctx, K::BackTab, M::SHIFT, Action::PreviousFocus);
        self.register(ctx, K::BackTab, M::NONE, Action::PreviousFocus);

        // === FORM ===
        self.register(ctx, K::Enter, M::NONE, Action::Generate);
        self.register(ctx, K::Char('g'), M::CONTROL, Action::Generate);
        self.register(ctx, K::Char('l'), M::CONTROL, Action::Clear);
        self.register(ctx, K::Char('x'), M::CONTROL, Action::Clear);

        // === TOKEN PANELS ===
        self.register(ctx, K::F(2), M::NONE, Action::FocusBluePanel);
        self.register(ctx, K::F(3), M::NONE, Action::FocusRedPanel);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::CopyTokens);

        // === GENERAL ===
        self.register(ctx, K::F(1), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
        self.register(ctx, K::Esc, M::NONE, Action::Quit);

        if ctx == ShortcutContext::Form {
            self.register(ctx, K::Up, M::NONE, Action::PreviousFocus);
            self.register(ctx, K::Down, M::NONE, Action::NextFocus);
            self.register(ctx, K::Char('u'), M::CONTROL, Action::ClearField);
        }
    }

    /// Scrolling inside a focused token panel.
    fn register_token_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = ShortcutContext::Tokens;

        self.register(ctx, K::Up, M::NONE, Action::ScrollUp);
        self.register(ctx, K::Down, M::NONE, Action::ScrollDown);
        self.register(ctx, K::Left, M::NONE, Action::ScrollLeft);
        self.register(ctx, K::Right, M::NONE, Action::ScrollRight);
        self.register(ctx, K::Char('k'), M::NONE, Action::ScrollUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::ScrollDown);
        self.register(ctx, K::Char('h'), M::NONE, Action::ScrollLeft);
        self.register(ctx, K::Char('l'), M::NONE, Action::ScrollRight);
        self.register(ctx, K::Char('y'), M::NONE, Action::CopyTokens);
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
    }

    /// Register a shortcut binding.
    fn register(
        &mut self,
        context: ShortcutContext,
        code: KeyCode,
        modifiers: KeyModifiers,
        action: Action,
    ) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context, binding), action);
        self.order.push((context, binding, action));
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: ShortcutContext, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context, binding)).copied()
    }

    /// Key labels bound to each action in a context, in registration order.
    #[must_use]
    pub fn describe(&self, context: ShortcutContext) -> Vec<(String, Action)> {
        let mut entries: Vec<(String, Action)> = Vec::new();
        for (ctx, binding, action) in &self.order {
            if *ctx != context {
                continue;
            }
            let label = binding.label();
            match entries.iter_mut().find(|(_, a)| a == action) {
                Some((keys, _)) if !keys.contains(&label) => {
                    keys.push_str(" / ");
                    keys.push_str(&label);
                }
                Some(_) => {}
                None => entries.push((label, *action)),
            }
        }
        entries
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
