//! Keyboard shortcut registry.

use crate::input::KeyEvent;

/// What a shortcut does to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutAction {
    DeleteSelection,
    Undo,
    Redo,
    Duplicate,
    SelectAll,
    /// Abandon the current gesture, or clear the selection when idle.
    Cancel,
}

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub shift: bool,
    /// Fire whatever modifiers are held.
    pub any_modifiers: bool,
    pub action: ShortcutAction,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(
        key: &'static str,
        ctrl: bool,
        shift: bool,
        action: ShortcutAction,
        description: &'static str,
    ) -> Self {
        Self {
            key,
            ctrl,
            shift,
            any_modifiers: false,
            action,
            description,
        }
    }

    /// A key that triggers regardless of modifiers.
    pub const fn any(key: &'static str, action: ShortcutAction, description: &'static str) -> Self {
        Self {
            any_modifiers: true,
            ..Self::new(key, false, false, action, description)
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+Shift+Z").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key);
        parts.join("+")
    }

    /// Letters match case-insensitively; Cmd counts as Ctrl.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        event.key.eq_ignore_ascii_case(self.key)
            && (self.any_modifiers
                || (event.modifiers.command() == self.ctrl && event.modifiers.shift == self.shift))
    }
}

static SHORTCUTS: &[Shortcut] = &[
    Shortcut::any("Delete", ShortcutAction::DeleteSelection, "Delete selected elements"),
    Shortcut::any("Backspace", ShortcutAction::DeleteSelection, "Delete selected elements"),
    Shortcut::new("Z", true, false, ShortcutAction::Undo, "Undo"),
    Shortcut::new("Z", true, true, ShortcutAction::Redo, "Redo"),
    Shortcut::new("Y", true, false, ShortcutAction::Redo, "Redo"),
    Shortcut::new("D", true, false, ShortcutAction::Duplicate, "Duplicate selected elements"),
    Shortcut::new("A", true, false, ShortcutAction::SelectAll, "Select all elements"),
    Shortcut::new("Escape", false, false, ShortcutAction::Cancel, "Cancel current action"),
];

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    pub fn all() -> &'static [Shortcut] {
        SHORTCUTS
    }

    /// The action bound to a key press, if any.
    pub fn lookup(event: &KeyEvent) -> Option<ShortcutAction> {
        SHORTCUTS.iter().find(|s| s.matches(event)).map(|s| s.action)
    }

    /// One line per shortcut, for help output.
    pub fn describe() -> Vec<String> {
        SHORTCUTS
            .iter()
            .map(|s| format!("{:20} {}", s.format(), s.description))
            .collect()
    }
}
