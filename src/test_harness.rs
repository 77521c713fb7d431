//! Acceptance Test Harness for TUI testing
//!
//! Wraps `TuiApp<TestBackend>` with a real tokio runtime and the in-process
//! data source, so tests drive the same dispatcher, gateway and renderer
//! the binary uses.

use crate::backend::{CommandGateway, DummyDataSource};
use crate::config::keybindings::KeyBindings;
use crate::state::{AppEvent, AppState};
use crate::view::{ColorConfig, TuiApp, UiStyles};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Runtime;

/// Upper bound for waiting on background completions.
const SETTLE_TIMEOUT: Duration = Duration::from_secs(5);

/// Convert a ratatui buffer to a string representation.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed to keep assertions readable.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    // Owns the worker threads the gateway spawns onto.
    _runtime: Runtime,
}

impl AcceptanceTestHarness {
    /// Start an app on a `width` x `height` test terminal with an instant data source.
    ///
    /// Startup commands are issued but not awaited; use [`Self::wait_for`].
    pub fn start(width: u16, height: u16) -> Self {
        Self::start_with_latency(width, height, Duration::ZERO)
    }

    /// Like [`Self::start`] with a simulated query latency.
    pub fn start_with_latency(width: u16, height: u16, latency: Duration) -> Self {
        let runtime = Runtime::new().expect("tokio runtime");
        let source = Arc::new(DummyDataSource::new(latency));
        let (gateway, completions) = CommandGateway::new(runtime.handle().clone(), source);

        let terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
        let styles = UiStyles::with_color_config(ColorConfig::from_env_and_args(true));
        let mut app = TuiApp::with_terminal(
            terminal,
            AppState::new(KeyBindings::default()),
            gateway,
            completions,
            styles,
        );
        app.start().expect("start app");

        Self {
            app,
            _runtime: runtime,
        }
    }

    /// Start and wait until projects and the first project's sources are loaded.
    pub fn loaded(width: u16, height: u16) -> Self {
        let mut harness = Self::start(width, height);
        harness.wait_for(|state| state.projects.visible_sources().is_some());
        harness
    }

    /// Send a single key event
    ///
    /// Returns whether the app asked to quit.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.is_running() {
            return true; // Already quit
        }
        self.app.handle_event(AppEvent::Key(KeyEvent::new(key, mods)));
        !self.is_running()
    }

    /// Type text (sends individual character key events)
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break; // Quit encountered
            }
        }
    }

    /// Resize the test terminal and tell the app about it.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.app.terminal_mut().backend_mut().resize(width, height);
        self.app.handle_event(AppEvent::Resize { width, height });
    }

    /// Apply completions until `done` holds.
    ///
    /// # Panics
    /// Panics if the condition does not hold within a few seconds.
    pub fn wait_for(&mut self, done: impl Fn(&AppState) -> bool) {
        let deadline = Instant::now() + SETTLE_TIMEOUT;
        loop {
            self.app.drain_completions();
            if done(self.app.state()) {
                return;
            }
            assert!(Instant::now() < deadline, "condition not reached in time");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.state()
    }

    /// Check if app is still running (didn't quit)
    pub fn is_running(&self) -> bool {
        !self.app.state().should_quit
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .draw()
            .expect("Rendering should succeed in test harness");
        buffer_to_string(self.app.terminal().backend().buffer())
    }
}
