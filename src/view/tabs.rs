//! Tab bar widget.
//!
//! Displays the Query and Project tabs using ratatui's Tabs widget.
//! Selection state is owned by `AppState::active_tab`.

use crate::state::Tab;
use crate::view::styles::UiStyles;
use ratatui::{layout::Rect, text::Line, widgets::Tabs, Frame};

/// Render the tab bar with `active` highlighted.
pub fn render_tab_bar(frame: &mut Frame, area: Rect, active: Tab, styles: &UiStyles) {
    let titles: Vec<Line> = Tab::ALL.iter().map(|tab| Line::from(tab.title())).collect();

    let tabs = Tabs::new(titles)
        .style(styles.inactive_tab)
        .highlight_style(styles.active_tab)
        .padding("  ", "  ")
        .divider(" ")
        .select(active.index());

    frame.render_widget(tabs, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::styles::ColorConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(active: Tab) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();
        let styles = UiStyles::with_color_config(ColorConfig::from_env_and_args(true));
        terminal
            .draw(|frame| render_tab_bar(frame, frame.area(), active, &styles))
            .unwrap();
        terminal
    }

    fn row(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn render_tab_bar_shows_both_titles() {
        let terminal = draw(Tab::Query);
        let text = row(&terminal);
        assert!(text.contains("Query"), "got {text:?}");
        assert!(text.contains("Project"), "got {text:?}");
    }

    #[test]
    fn render_tab_bar_highlights_active_tab() {
        let terminal = draw(Tab::Project);
        let buffer = terminal.backend().buffer();
        let text = row(&terminal);

        let project_col = text.find("Project").unwrap() as u16;
        let query_col = text.find("Query").unwrap() as u16;

        let styles = UiStyles::with_color_config(ColorConfig::from_env_and_args(true));
        assert!(buffer[(project_col, 0)]
            .modifier
            .contains(ratatui::style::Modifier::REVERSED));
        assert!(!buffer[(query_col, 0)]
            .modifier
            .contains(ratatui::style::Modifier::REVERSED));
        assert_ne!(styles.active_tab, styles.inactive_tab);
    }
}
