//! Screen layout rendering.
//!
//! Pure layout logic: tab bar on top, the active tab's body, and a help /
//! status line at the bottom.

use crate::state::{AppState, Tab};
use crate::view::constants::{HELP_LINE_HEIGHT, TAB_BAR_HEIGHT};
use crate::view::styles::UiStyles;
use crate::view::{project_tab, query_tab, tabs};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

const QUERY_HELP: &[&str] = &[
    "enter: submit query",
    "↑/↓: select project",
    "ctrl+↑/↓: navigate messages",
    "ctrl+k: toggle collapse",
    "ctrl+a: toggle collapse all",
    "ctrl+l: clear chat",
    "tab: switch tab",
    "ctrl+c: quit",
];

const PROJECT_HELP: &[&str] = &[
    "↑/↓: select project",
    "r: refresh sources",
    "tab: switch tab",
    "q/ctrl+c: quit",
];

/// Split the frame into tab bar, body and help line.
///
/// Returns `(tab_bar, body, help_line)`.
pub fn split_screen(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TAB_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(HELP_LINE_HEIGHT),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Render the whole screen for the current state.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &UiStyles) {
    let (tab_area, body_area, help_area) = split_screen(frame.area());

    tabs::render_tab_bar(frame, tab_area, state.active_tab, styles);

    match state.active_tab {
        Tab::Query => query_tab::render_query_tab(frame, body_area, state, styles),
        Tab::Project => project_tab::render_project_tab(frame, body_area, state, styles),
    }

    render_help_line(frame, help_area, state, styles);
}

/// Help line, replaced by the most recent transport error while one is shown.
fn render_help_line(frame: &mut Frame, area: Rect, state: &AppState, styles: &UiStyles) {
    let line = match &state.last_error {
        Some(error) => Line::styled(format!("⚠ {error}"), styles.error),
        None => {
            let items = match state.active_tab {
                Tab::Query => QUERY_HELP,
                Tab::Project => PROJECT_HELP,
            };
            Line::styled(items.join(" • "), styles.help)
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
