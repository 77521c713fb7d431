//! Event dispatcher.
//!
//! `dispatch` is the single entry point for state transitions. Each event is
//! handled first by shared state (terminal size, quit, clear, tab switching,
//! completion results) and then forwarded to the active tab. Side effects
//! are returned as [`Command`]s for the gateway to run.

use crate::backend::Completion;
use crate::model::{InputValidationError, KeyAction, ProjectId};
use crate::state::tab_handler::{handle_tab_action, Tab};
use crate::state::AppState;
use crate::view_state::{CollapseScope, Direction};
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input to the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// A key press.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
    /// A background command finished.
    Completion(Completion),
}

/// Side effect requested by a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load the project list.
    FetchProjects,
    /// Load sources for one project.
    FetchSources {
        /// Project to load.
        project_id: ProjectId,
        /// Freshness tag echoed back in the completion.
        generation: u64,
    },
    /// Ask a question about one project.
    SubmitQuery {
        /// Project the question is about.
        project_id: ProjectId,
        /// Question text.
        text: String,
    },
}

/// Apply `event` to `state` and return the commands it triggers.
pub fn dispatch(state: &mut AppState, event: AppEvent) -> Vec<Command> {
    match event {
        AppEvent::Resize { width, height } => {
            state.terminal_size = Some((width, height));
            if state.active_tab == Tab::Query {
                state.sync_chat_geometry();
            }
            Vec::new()
        }
        AppEvent::Completion(completion) => apply_completion(state, completion),
        AppEvent::Key(key) => handle_key(state, key),
    }
}

// ===== Completions =====

fn apply_completion(state: &mut AppState, completion: Completion) -> Vec<Command> {
    match completion {
        Completion::Projects(Ok(projects)) => {
            tracing::info!(count = projects.len(), "Loaded projects");
            state.projects_loading = false;
            state.last_error = None;
            state.projects.set_projects(projects).into_iter().collect()
        }
        Completion::Projects(Err(error)) => {
            state.projects_loading = false;
            state.record_error("Loading projects", &error);
            Vec::new()
        }
        Completion::Sources {
            project_id,
            generation,
            result: Ok(raw),
        } => {
            let outcome = state.projects.apply_sources(project_id.clone(), generation, raw);
            tracing::debug!(%project_id, generation, ?outcome, "Sources completed");
            Vec::new()
        }
        Completion::Sources {
            project_id,
            result: Err(error),
            ..
        } => {
            state.projects.fail_sources(&project_id);
            state.record_error(&format!("Loading sources for {project_id}"), &error);
            Vec::new()
        }
        Completion::Answer {
            project_id,
            result: Ok(response),
        } => {
            state.query_in_flight = false;
            state.last_error = None;
            if !state
                .chat
                .on_response_received(&response.response_text, response.timestamp)
            {
                tracing::warn!(%project_id, "Answer arrived with no pending query");
            }
            Vec::new()
        }
        Completion::Answer {
            project_id,
            result: Err(error),
        } => {
            state.query_in_flight = false;
            state.record_error(&format!("Query on {project_id}"), &error);
            state
                .chat
                .on_response_received(&format!("⚠ Query failed: {error}"), Utc::now());
            Vec::new()
        }
    }
}

// ===== Keys =====

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Command> {
    if let Some(action) = state.key_bindings.global(key) {
        return handle_shared_action(state, action);
    }
    match state.active_tab {
        Tab::Query => handle_query_key(state, key),
        Tab::Project => handle_project_key(state, key),
    }
}

fn handle_shared_action(state: &mut AppState, action: KeyAction) -> Vec<Command> {
    match action {
        KeyAction::Quit => {
            tracing::info!("Quit requested");
            state.should_quit = true;
        }
        KeyAction::ClearChat => state.chat.clear(),
        KeyAction::NextTab | KeyAction::PrevTab => handle_tab_action(state, action),
        other => return handle_tab_specific_action(state, other),
    }
    Vec::new()
}

fn handle_query_key(state: &mut AppState, key: KeyEvent) -> Vec<Command> {
    if let Some(action) = state.key_bindings.query(key) {
        return handle_tab_specific_action(state, action);
    }
    edit_input(state, key);
    Vec::new()
}

fn handle_project_key(state: &mut AppState, key: KeyEvent) -> Vec<Command> {
    match state.key_bindings.project(key) {
        Some(KeyAction::Quit) => handle_shared_action(state, KeyAction::Quit),
        Some(action) => handle_tab_specific_action(state, action),
        None => Vec::new(),
    }
}

fn handle_tab_specific_action(state: &mut AppState, action: KeyAction) -> Vec<Command> {
    let command = match action {
        KeyAction::SelectPrevProject => state.projects.select_prev(),
        KeyAction::SelectNextProject => state.projects.select_next(),
        KeyAction::RefreshSources => state.projects.refresh(),
        KeyAction::SubmitQuery => match submit_query(state) {
            Ok(command) => Some(command),
            Err(reason) => {
                tracing::debug!(%reason, "Query not submitted");
                None
            }
        },
        KeyAction::PrevMessage => {
            state.chat.navigate(Direction::Up);
            None
        }
        KeyAction::NextMessage => {
            state.chat.navigate(Direction::Down);
            None
        }
        KeyAction::ToggleCollapse => {
            state.chat.toggle_collapse(CollapseScope::Selected);
            None
        }
        KeyAction::ToggleCollapseAll => {
            state.chat.toggle_collapse(CollapseScope::All);
            None
        }
        KeyAction::PageUp => {
            let page = page_size(state);
            state.chat.scroll_by(-page);
            None
        }
        KeyAction::PageDown => {
            let page = page_size(state);
            state.chat.scroll_by(page);
            None
        }
        KeyAction::ScrollToLatest => {
            state.chat.scroll_to_bottom();
            None
        }
        KeyAction::Quit | KeyAction::ClearChat | KeyAction::NextTab | KeyAction::PrevTab => {
            return handle_shared_action(state, action);
        }
    };
    command.into_iter().collect()
}

fn page_size(state: &AppState) -> isize {
    isize::try_from(state.chat.visible_height()).unwrap_or(isize::MAX)
}

/// Validate the input line and move it into the chat.
fn submit_query(state: &mut AppState) -> Result<Command, InputValidationError> {
    let text = state.input.value().trim().to_string();
    if text.is_empty() {
        return Err(InputValidationError::EmptyQuery);
    }
    if state.query_in_flight {
        return Err(InputValidationError::QueryInFlight);
    }
    let project_id = state
        .projects
        .selected()
        .map(|project| project.id.clone())
        .ok_or(InputValidationError::NoProjectSelected)?;
    state
        .chat
        .append_query(&text)
        .ok_or(InputValidationError::ViewportNotReady)?;

    state.input.clear();
    state.query_in_flight = true;
    tracing::info!(%project_id, chars = text.chars().count(), "Submitting query");
    Ok(Command::SubmitQuery { project_id, text })
}

fn edit_input(state: &mut AppState, key: KeyEvent) {
    let input = &mut state.input;
    match key.code {
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            input.insert(c);
        }
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        _ => {}
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
