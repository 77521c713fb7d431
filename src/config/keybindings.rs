//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Global bindings apply on every tab and are checked first. Each tab then
/// has its own map, so a plain letter can be a command on the Project tab
/// while being typed text on the Query tab.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    global: HashMap<KeyEvent, KeyAction>,
    query: HashMap<KeyEvent, KeyAction>,
    project: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Action bound on every tab.
    pub fn global(&self, key: KeyEvent) -> Option<KeyAction> {
        self.global.get(&key).copied()
    }

    /// Action bound on the Query tab.
    pub fn query(&self, key: KeyEvent) -> Option<KeyAction> {
        self.query.get(&key).copied()
    }

    /// Action bound on the Project tab.
    pub fn project(&self, key: KeyEvent) -> Option<KeyAction> {
        self.project.get(&key).copied()
    }
}

fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut global = HashMap::new();

        // Application controls
        global.insert(
            key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Quit,
        );
        global.insert(
            key(KeyCode::Char('l'), KeyModifiers::CONTROL),
            KeyAction::ClearChat,
        );

        // Tab navigation
        global.insert(key(KeyCode::Tab, KeyModifiers::NONE), KeyAction::NextTab);
        global.insert(
            key(KeyCode::BackTab, KeyModifiers::SHIFT),
            KeyAction::PrevTab,
        );
        global.insert(key(KeyCode::BackTab, KeyModifiers::NONE), KeyAction::PrevTab);

        let mut query = HashMap::new();

        query.insert(key(KeyCode::Enter, KeyModifiers::NONE), KeyAction::SubmitQuery);

        // Project selector
        query.insert(
            key(KeyCode::Up, KeyModifiers::NONE),
            KeyAction::SelectPrevProject,
        );
        query.insert(
            key(KeyCode::Down, KeyModifiers::NONE),
            KeyAction::SelectNextProject,
        );

        // Message navigation
        query.insert(
            key(KeyCode::Up, KeyModifiers::CONTROL),
            KeyAction::PrevMessage,
        );
        query.insert(
            key(KeyCode::Down, KeyModifiers::CONTROL),
            KeyAction::NextMessage,
        );
        query.insert(key(KeyCode::PageUp, KeyModifiers::NONE), KeyAction::PageUp);
        query.insert(
            key(KeyCode::PageDown, KeyModifiers::NONE),
            KeyAction::PageDown,
        );
        query.insert(
            key(KeyCode::End, KeyModifiers::NONE),
            KeyAction::ScrollToLatest,
        );

        // Collapse
        query.insert(
            key(KeyCode::Char('k'), KeyModifiers::CONTROL),
            KeyAction::ToggleCollapse,
        );
        query.insert(
            key(KeyCode::Char('a'), KeyModifiers::CONTROL),
            KeyAction::ToggleCollapseAll,
        );

        let mut project = HashMap::new();

        project.insert(
            key(KeyCode::Up, KeyModifiers::NONE),
            KeyAction::SelectPrevProject,
        );
        project.insert(
            key(KeyCode::Down, KeyModifiers::NONE),
            KeyAction::SelectNextProject,
        );
        project.insert(
            key(KeyCode::Char('r'), KeyModifiers::NONE),
            KeyAction::RefreshSources,
        );
        project.insert(key(KeyCode::Char('q'), KeyModifiers::NONE), KeyAction::Quit);

        Self {
            global,
            query,
            project,
        }
    }
}
