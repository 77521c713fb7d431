//! Application state.
//!
//! AppState is the root state type containing all UI state. It is owned by
//! the event loop and handed to the dispatcher by `&mut` for one event at a
//! time; nothing else mutates it.

use crate::config::keybindings::KeyBindings;
use crate::model::TransportError;
use crate::state::dispatcher::Command;
use crate::state::input::InputLine;
use crate::state::project_browser::ProjectBrowser;
use crate::state::tab_handler::Tab;
use crate::view::constants::QUERY_TAB_CHROME_HEIGHT;
use crate::view_state::ChatViewport;

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # State Machine
///
/// - **Tab**: Query ⇄ Project, toggled by next/previous tab only
/// - **Query in flight**: set on submit, cleared by the answer or its failure.
///   A second submit is refused while set.
/// - **Follow mode**: owned by the chat viewport (see `ChatViewport`)
#[derive(Debug, Clone)]
pub struct AppState {
    /// Which tab receives keys and is drawn.
    pub active_tab: Tab,

    /// Last known terminal size (`width`, `height`), `None` before the first resize.
    pub terminal_size: Option<(u16, u16)>,

    /// Chat history and its scroll state.
    pub chat: ChatViewport,

    /// Project list, selection and source cache.
    pub projects: ProjectBrowser,

    /// Query input line.
    pub input: InputLine,

    /// Key to action mapping.
    pub key_bindings: KeyBindings,

    /// Whether a submitted query is waiting for its answer.
    pub query_in_flight: bool,

    /// Whether the project list is being fetched.
    pub projects_loading: bool,

    /// Most recent transport failure, shown in the status line.
    pub last_error: Option<String>,

    /// Set when the user asked to quit.
    pub should_quit: bool,

    // Terminal size last applied to the chat viewport.
    chat_size: Option<(u16, u16)>,
}

impl AppState {
    /// Create state with the Query tab active and nothing loaded.
    pub fn new(key_bindings: KeyBindings) -> Self {
        Self {
            active_tab: Tab::Query,
            terminal_size: None,
            chat: ChatViewport::new(QUERY_TAB_CHROME_HEIGHT),
            projects: ProjectBrowser::new(),
            input: InputLine::default(),
            key_bindings,
            query_in_flight: false,
            projects_loading: false,
            last_error: None,
            should_quit: false,
            chat_size: None,
        }
    }

    /// Commands to issue once at startup.
    pub fn startup_commands(&mut self) -> Vec<Command> {
        self.projects_loading = true;
        vec![Command::FetchProjects]
    }

    /// Apply the current terminal size to the chat if it has not seen it yet.
    pub fn sync_chat_geometry(&mut self) {
        if self.chat_size == self.terminal_size {
            return;
        }
        if let Some((width, height)) = self.terminal_size {
            self.chat.resize(width, height);
            self.chat_size = self.terminal_size;
        }
    }

    /// Whether the chat is behind the terminal size.
    pub fn chat_geometry_stale(&self) -> bool {
        self.chat_size != self.terminal_size
    }

    /// Log a transport failure and surface it in the status line.
    pub fn record_error(&mut self, context: &str, error: &TransportError) {
        tracing::warn!(%error, context, "Data source request failed");
        self.last_error = Some(format!("{context}: {error}"));
    }
}
