//! TUI rendering and event loop (impure shell).

pub mod constants;
pub mod layout;
pub mod project_tab;
pub mod query_tab;
pub mod styles;
pub mod tabs;

pub use styles::{ColorConfig, UiStyles};

use crate::backend::{CommandGateway, Completion};
use crate::model::AppError;
use crate::state::{dispatch, AppEvent, AppState};
use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info};

/// How long to wait for terminal input before checking for completions.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    state: AppState,
    gateway: CommandGateway,
    completions: UnboundedReceiver<Completion>,
    styles: UiStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create the application on the real terminal.
    ///
    /// Sets up terminal in raw mode with alternate screen.
    pub fn new(
        state: AppState,
        gateway: CommandGateway,
        completions: UnboundedReceiver<Completion>,
        styles: UiStyles,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self::with_terminal(terminal, state, gateway, completions, styles))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits. Redraws after every input event and
    /// whenever completions arrive; idle otherwise.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.start()?;
        self.draw()?;

        while !self.state.should_quit {
            let mut dirty = self.drain_completions();

            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    // Release/repeat events arrive on terminals with enhanced keyboard reporting
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_event(AppEvent::Key(key));
                        dirty = true;
                    }
                    Event::Resize(width, height) => {
                        self.handle_event(AppEvent::Resize { width, height });
                        dirty = true;
                    }
                    _ => {}
                }
            }

            if dirty && !self.state.should_quit {
                self.draw()?;
            }
        }

        info!("Event loop finished");
        Ok(())
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build an application around an existing terminal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        state: AppState,
        gateway: CommandGateway,
        completions: UnboundedReceiver<Completion>,
        styles: UiStyles,
    ) -> Self {
        Self {
            terminal,
            state,
            gateway,
            completions,
            styles,
        }
    }

    /// Current application state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Terminal the app draws into.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Mutable terminal access for tests that resize the backend.
    #[cfg(test)]
    pub(crate) fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// Seed the state with the terminal size and issue startup commands.
    pub fn start(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        self.handle_event(AppEvent::Resize {
            width: size.width,
            height: size.height,
        });
        let startup = self.state.startup_commands();
        self.gateway.issue_all(startup);
        Ok(())
    }

    /// Feed one event through the dispatcher and issue the resulting commands.
    pub fn handle_event(&mut self, event: AppEvent) {
        let commands = dispatch(&mut self.state, event);
        if !commands.is_empty() {
            debug!(count = commands.len(), "Issuing commands");
        }
        self.gateway.issue_all(commands);
    }

    /// Apply every completion that has arrived, in delivery order.
    ///
    /// Returns whether anything was applied.
    pub fn drain_completions(&mut self) -> bool {
        let mut applied = false;
        while let Ok(completion) = self.completions.try_recv() {
            self.handle_event(AppEvent::Completion(completion));
            applied = true;
        }
        applied
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.state;
        let styles = &self.styles;
        self.terminal
            .draw(|frame| layout::render_layout(frame, state, styles))?;
        Ok(())
    }
}

/// Initialize and run the TUI application.
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit even when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(
    state: AppState,
    gateway: CommandGateway,
    completions: UnboundedReceiver<Completion>,
    styles: UiStyles,
) -> Result<(), TuiError> {
    let mut app = match TuiApp::new(state, gateway, completions, styles) {
        Ok(app) => app,
        Err(e) => {
            // Raw mode may already be on when entering the alternate screen fails
            let _ = restore_terminal();
            return Err(e);
        }
    };

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves the alternate screen.
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
