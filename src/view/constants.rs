//! Layout dimension constants for TUI rendering.
//!
//! Centralized so the chat viewport's line budget and the drawn layout
//! agree on how many rows the chrome takes.

/// Height of the tab bar in lines.
pub const TAB_BAR_HEIGHT: u16 = 1;

/// Height of the selected-project pane on the Query tab (border + content).
pub const PROJECT_PANE_HEIGHT: u16 = 3;

/// Height of the chat header line.
pub const CHAT_HEADER_HEIGHT: u16 = 1;

/// Height of the query input box (border + content).
pub const INPUT_HEIGHT: u16 = 3;

/// Height of the help / status line at the bottom of the screen.
pub const HELP_LINE_HEIGHT: u16 = 1;

/// Rows of the Query tab not available to chat history.
pub const QUERY_TAB_CHROME_HEIGHT: usize = (TAB_BAR_HEIGHT
    + PROJECT_PANE_HEIGHT
    + CHAT_HEADER_HEIGHT
    + INPUT_HEIGHT
    + HELP_LINE_HEIGHT) as usize;
