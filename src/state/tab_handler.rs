//! Tab navigation keyboard action handler.
//!
//! The application has exactly two tabs, so next and previous both toggle.

use crate::model::KeyAction;
use crate::state::AppState;

/// Top-level tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Chat with the assistant about the selected project.
    #[default]
    Query,
    /// Details and information sources of the selected project.
    Project,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 2] = [Tab::Query, Tab::Project];

    /// The other tab.
    pub fn toggled(self) -> Self {
        match self {
            Tab::Query => Tab::Project,
            Tab::Project => Tab::Query,
        }
    }

    /// Position in the tab bar.
    pub fn index(self) -> usize {
        match self {
            Tab::Query => 0,
            Tab::Project => 1,
        }
    }

    /// Tab bar label.
    pub fn title(self) -> &'static str {
        match self {
            Tab::Query => "Query",
            Tab::Project => "Project",
        }
    }
}

/// Handle a tab navigation keyboard action.
///
/// Any other action leaves the state untouched. Entering the Query tab
/// brings the chat up to date with resizes it missed while hidden.
pub fn handle_tab_action(state: &mut AppState, action: KeyAction) {
    match action {
        KeyAction::NextTab | KeyAction::PrevTab => {
            state.active_tab = state.active_tab.toggled();
            tracing::debug!(tab = state.active_tab.title(), "Switched tab");
            if state.active_tab == Tab::Query && state.chat_geometry_stale() {
                tracing::debug!(size = ?state.terminal_size, "Applying resize missed while hidden");
                state.sync_chat_geometry();
            }
        }
        _ => {}
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "tab_handler_tests.rs"]
mod tests;
