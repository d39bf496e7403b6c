//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Only consulted while the search query is not focused; a focused query
/// takes printable keys as text.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}

/// Default key map: `(code, modifiers, action)`.
const DEFAULT_KEYS: &[(KeyCode, KeyModifiers, KeyAction)] = &[
    // Reading
    (KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::ScrollDown),
    (KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::ScrollUp),
    (KeyCode::Down, KeyModifiers::NONE, KeyAction::ScrollDown),
    (KeyCode::Up, KeyModifiers::NONE, KeyAction::ScrollUp),
    (KeyCode::Char('d'), KeyModifiers::CONTROL, KeyAction::PageDown),
    (KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::PageUp),
    (KeyCode::PageDown, KeyModifiers::NONE, KeyAction::PageDown),
    (KeyCode::PageUp, KeyModifiers::NONE, KeyAction::PageUp),
    // Bottom bar
    (KeyCode::Char('l'), KeyModifiers::NONE, KeyAction::ToggleLike),
    (KeyCode::Char('b'), KeyModifiers::NONE, KeyAction::ToggleBookmark),
    (KeyCode::Char('s'), KeyModifiers::NONE, KeyAction::Share),
    (KeyCode::Char('m'), KeyModifiers::NONE, KeyAction::ToggleMenu),
    // Submenu. Some terminals report '+' with SHIFT.
    (KeyCode::Char('+'), KeyModifiers::NONE, KeyAction::TextUp),
    (KeyCode::Char('+'), KeyModifiers::SHIFT, KeyAction::TextUp),
    (KeyCode::Char('-'), KeyModifiers::NONE, KeyAction::TextDown),
    (KeyCode::Char('d'), KeyModifiers::NONE, KeyAction::ToggleDarkMode),
    // Search
    (KeyCode::Char('/'), KeyModifiers::NONE, KeyAction::OpenSearch),
    (KeyCode::Esc, KeyModifiers::NONE, KeyAction::CloseSearch),
    (KeyCode::Char('n'), KeyModifiers::NONE, KeyAction::NextResult),
    (KeyCode::Char('N'), KeyModifiers::SHIFT, KeyAction::PrevResult),
    (KeyCode::Char('a'), KeyModifiers::NONE, KeyAction::NotificationAction),
    (KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit),
    (KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit),
];

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = DEFAULT_KEYS
            .iter()
            .map(|&(code, modifiers, action)| (KeyEvent::new(code, modifiers), action))
            .collect();
        Self { bindings }
    }
}
