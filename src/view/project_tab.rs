//! Project tab: details of the selected project and its information sources.

use crate::model::InformationSource;
use crate::state::AppState;
use crate::view::styles::UiStyles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Render the Project tab into `area`.
pub fn render_project_tab(frame: &mut Frame, area: Rect, state: &AppState, styles: &UiStyles) {
    let paragraph = Paragraph::new(project_lines(state, styles)).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Styled lines of the Project tab body.
pub fn project_lines(state: &AppState, styles: &UiStyles) -> Vec<Line<'static>> {
    let mut lines = vec![Line::styled("Project Information", styles.header), Line::default()];

    let browser = &state.projects;
    let Some(project) = browser.selected() else {
        let text = if state.projects_loading {
            "Loading projects..."
        } else {
            "No projects available"
        };
        lines.push(Line::styled(text, styles.loading));
        return lines;
    };

    lines.push(Line::styled(project.name.clone(), styles.project_name));
    lines.push(labelled("Description", project.description.clone(), styles));
    lines.push(labelled("ID", project.id.to_string(), styles));
    lines.push(labelled(
        "Created",
        project.created_at.format("%Y-%m-%d").to_string(),
        styles,
    ));
    lines.push(Line::default());
    lines.push(Line::styled(
        format!(
            "↑/↓ to switch projects ({}/{})",
            browser.selected_index() + 1,
            browser.projects().len()
        ),
        styles.help,
    ));
    lines.push(Line::default());

    lines.push(Line::styled("Information Sources", styles.header));
    lines.push(Line::default());

    match browser.visible_sources() {
        None => lines.push(Line::styled("Loading sources...", styles.loading)),
        Some([]) => lines.push(Line::styled(
            "No information sources configured for this project",
            styles.help,
        )),
        Some(sources) => {
            for (position, source) in sources.iter().enumerate() {
                if position > 0 {
                    lines.push(Line::default());
                }
                push_source(&mut lines, position + 1, source, styles);
            }
        }
    }
    lines
}

fn labelled(label: &str, value: String, styles: &UiStyles) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), styles.label),
        Span::raw(value),
    ])
}

fn push_source(
    lines: &mut Vec<Line<'static>>,
    number: usize,
    source: &InformationSource,
    styles: &UiStyles,
) {
    lines.push(Line::styled(
        format!("{number}. {}", source.name),
        styles.source_name,
    ));
    lines.push(Line::styled(
        format!("   {} {}", source.kind.icon(), source.kind.tag()),
        styles.source_kind,
    ));
    for (label, value) in source.kind.display_fields() {
        let mut line = labelled(&label, value, styles);
        line.spans.insert(0, Span::raw("   "));
        lines.push(line);
    }
}
