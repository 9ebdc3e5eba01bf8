//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings with option to override via configuration.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&KeyEvent::new(key.code, key.modifiers)).copied()
    }

    /// Bind a key, replacing any previous binding for it.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(key, action);
    }

    /// Keys bound to `action`, in no particular order.
    pub fn keys_for(&self, action: KeyAction) -> Vec<KeyEvent> {
        self.bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(key, _)| *key)
            .collect()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut kb = Self {
            bindings: HashMap::new(),
        };
        let plain = |c: char| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        let shifted = |c: char| KeyEvent::new(KeyCode::Char(c), KeyModifiers::SHIFT);
        let code = |code: KeyCode| KeyEvent::new(code, KeyModifiers::NONE);

        // Cursor
        kb.bind(plain('k'), KeyAction::CursorUp);
        kb.bind(code(KeyCode::Up), KeyAction::CursorUp);
        kb.bind(plain('j'), KeyAction::CursorDown);
        kb.bind(code(KeyCode::Down), KeyAction::CursorDown);
        kb.bind(plain('g'), KeyAction::CursorTop);
        kb.bind(code(KeyCode::Home), KeyAction::CursorTop);
        kb.bind(shifted('G'), KeyAction::CursorBottom);
        kb.bind(code(KeyCode::End), KeyAction::CursorBottom);

        // Selection
        kb.bind(plain(' '), KeyAction::ToggleSelection);

        // Filters
        kb.bind(plain('f'), KeyAction::StartFilter);
        kb.bind(plain('/'), KeyAction::StartFilter);
        kb.bind(plain('x'), KeyAction::RemoveLastFilter);
        kb.bind(shifted('X'), KeyAction::ClearFilters);

        // Sorting
        kb.bind(plain('s'), KeyAction::CycleSortField);
        kb.bind(plain('o'), KeyAction::ToggleSortOrder);

        // Action bar
        kb.bind(plain('a'), KeyAction::TriggerAction);
        kb.bind(code(KeyCode::Delete), KeyAction::TriggerAction);

        // Application
        kb.bind(plain('q'), KeyAction::Quit);
        kb.bind(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Quit,
        );
        kb.bind(plain('?'), KeyAction::Help);
        kb.bind(shifted('?'), KeyAction::Help);

        kb
    }
}
