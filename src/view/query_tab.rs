//! Query tab: selected project, chat history and input line.

use crate::state::AppState;
use crate::view::constants::{CHAT_HEADER_HEIGHT, INPUT_HEIGHT, PROJECT_PANE_HEIGHT};
use crate::view::styles::UiStyles;
use crate::view_state::RenderedLine;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const INPUT_PROMPT: &str = "Query: ";
const PENDING_MARKER: &str = " ⏳";

/// Render the Query tab into `area` (everything between tab bar and help line).
pub fn render_query_tab(frame: &mut Frame, area: Rect, state: &AppState, styles: &UiStyles) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(PROJECT_PANE_HEIGHT),
            Constraint::Length(CHAT_HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(INPUT_HEIGHT),
        ])
        .split(area);

    render_project_pane(frame, chunks[0], state, styles);
    render_chat_header(frame, chunks[1], state, styles);
    render_chat(frame, chunks[2], state, styles);
    render_input(frame, chunks[3], state, styles);
}

fn bordered(styles: &UiStyles) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles.border)
}

fn render_project_pane(frame: &mut Frame, area: Rect, state: &AppState, styles: &UiStyles) {
    let browser = &state.projects;
    let line = match browser.selected() {
        Some(project) => Line::from(vec![
            Span::styled(project.name.clone(), styles.project_name),
            Span::raw(": "),
            Span::raw(project.description.clone()),
            Span::styled(
                format!("  ({}/{})", browser.selected_index() + 1, browser.projects().len()),
                styles.help,
            ),
        ]),
        None if state.projects_loading => Line::styled("Loading projects...", styles.loading),
        None => Line::styled("No projects available", styles.help),
    };
    frame.render_widget(Paragraph::new(line).block(bordered(styles)), area);
}

fn render_chat_header(frame: &mut Frame, area: Rect, state: &AppState, styles: &UiStyles) {
    let mut spans = vec![Span::styled("Chat", styles.header)];
    if state.chat.is_ready() && !state.chat.is_following() {
        spans.push(Span::styled("  (End: jump to latest)", styles.help));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_chat(frame: &mut Frame, area: Rect, state: &AppState, styles: &UiStyles) {
    let chat = &state.chat;
    let lines: Vec<Line> = if !chat.is_ready() {
        vec![Line::raw("Initializing...")]
    } else if chat.is_empty() {
        vec![Line::styled(
            "No messages yet. Ask a question below!",
            styles.help,
        )]
    } else {
        chat.visible_lines()
            .into_iter()
            .map(|line| styled_chat_line(line, styles))
            .collect()
    };
    frame.render_widget(Paragraph::new(lines), area);
}

fn styled_chat_line(line: RenderedLine, styles: &UiStyles) -> Line<'static> {
    let style = styles.for_line(line.kind);
    Line::from(vec![
        Span::styled(line.gutter(), style),
        Span::styled(line.text, style),
    ])
}

fn render_input(frame: &mut Frame, area: Rect, state: &AppState, styles: &UiStyles) {
    let block = bordered(styles);
    let inner = block.inner(area);

    let marker = if state.query_in_flight { PENDING_MARKER } else { "" };
    let prompt_width = INPUT_PROMPT.width();
    let room = (inner.width as usize)
        .saturating_sub(prompt_width + marker.width() + 1)
        .max(1);

    // Keep the cursor in view by dropping leading characters.
    let chars: Vec<char> = state.input.value().chars().collect();
    let cursor = state.input.cursor().min(chars.len());
    let skip = visible_start(&chars, cursor, room);
    let shown: String = chars[skip..].iter().collect();
    let before_cursor: String = chars[skip..cursor].iter().collect();

    let line = Line::from(vec![
        Span::styled(INPUT_PROMPT, styles.input_prompt),
        Span::raw(shown),
        Span::styled(marker, styles.loading),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);

    if inner.width > 0 && inner.height > 0 {
        let offset = (prompt_width + before_cursor.width()).min(inner.width as usize - 1);
        frame.set_cursor_position((inner.x + offset as u16, inner.y));
    }
}

/// First character index to show so that `chars[start..cursor]` fits in `room` columns.
fn visible_start(chars: &[char], cursor: usize, room: usize) -> usize {
    let mut used = 0;
    let mut start = cursor;
    while start > 0 {
        let width = unicode_width::UnicodeWidthChar::width(chars[start - 1]).unwrap_or(0);
        if used + width > room {
            break;
        }
        used += width;
        start -= 1;
    }
    start
}

#[cfg(test)]
#[path = "query_tab_tests.rs"]
mod tests;
