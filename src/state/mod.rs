//! UI state machine (pure).
//!
//! All state transitions are plain functions over `&mut AppState`,
//! testable without a terminal.

pub mod app_state;
pub mod dispatcher;
pub mod input;
pub mod project_browser;
pub mod tab_handler;

// Re-export for convenience
pub use app_state::AppState;
pub use dispatcher::{dispatch, AppEvent, Command};
pub use input::{InputLine, QUERY_CHAR_LIMIT};
pub use project_browser::{ProjectBrowser, SourceCache, SourcesOutcome};
pub use tab_handler::{handle_tab_action, Tab};
