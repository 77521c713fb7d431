//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that key bindings map to.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Application
    /// Exit the application. Default: Ctrl+c (any tab), q (Project tab)
    Quit,
    /// Empty the chat history. Default: Ctrl+l
    ClearChat,

    // Tabs
    /// Switch to the other tab. Default: Tab
    NextTab,
    /// Switch to the other tab, backwards. Default: Shift+Tab
    PrevTab,

    // Projects
    /// Select the previous project. Default: ↑
    SelectPrevProject,
    /// Select the next project. Default: ↓
    SelectNextProject,
    /// Re-fetch information sources of the selected project. Default: r (Project tab)
    RefreshSources,

    // Chat navigation
    /// Move the message cursor to the previous pair. Default: Ctrl+↑
    PrevMessage,
    /// Move the message cursor to the next pair. Default: Ctrl+↓
    NextMessage,
    /// Scroll the chat up by one page. Default: Page Up
    PageUp,
    /// Scroll the chat down by one page. Default: Page Down
    PageDown,
    /// Jump to the newest message and resume following. Default: End
    ScrollToLatest,

    // Collapse
    /// Collapse or expand the selected pair. Default: Ctrl+k
    ToggleCollapse,
    /// Collapse all pairs, or expand all when every pair is collapsed. Default: Ctrl+a
    ToggleCollapseAll,

    // Query input
    /// Submit the query in the input line. Default: Enter
    SubmitQuery,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn actions_are_hashable_and_distinct() {
        let set: HashSet<KeyAction> = [
            KeyAction::NextTab,
            KeyAction::PrevTab,
            KeyAction::ToggleCollapse,
            KeyAction::ToggleCollapseAll,
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn copy_equals_original() {
        let action = KeyAction::SubmitQuery;
        let copied = action;
        assert_eq!(action, copied);
    }
}
