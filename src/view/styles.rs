//! Styling configuration.
//!
//! Colors for tabs, chat lines and project details. Bold and italic
//! modifiers survive `NO_COLOR`; only foreground/background colors are dropped.

use crate::view_state::LineKind;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== UiStyles =====

const PRIMARY: Color = Color::Cyan;
const SECONDARY: Color = Color::Magenta;
const MUTED: Color = Color::DarkGray;
const ACCENT: Color = Color::Yellow;
const ERROR: Color = Color::Red;
const TAB_BACKGROUND: Color = Color::Indexed(235);

/// Every style the renderer uses, resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiStyles {
    /// Highlighted tab title.
    pub active_tab: Style,
    /// Other tab titles.
    pub inactive_tab: Style,
    /// Section headers ("Chat", "Information Sources").
    pub header: Style,
    /// Selected project name.
    pub project_name: Style,
    /// Attribute labels in the project view.
    pub label: Style,
    /// Numbered source names.
    pub source_name: Style,
    /// Source kind line.
    pub source_kind: Style,
    /// Query input prompt.
    pub input_prompt: Style,
    /// Loading and pending markers.
    pub loading: Style,
    /// Help line and empty-state hints.
    pub help: Style,
    /// Transport error in the status line.
    pub error: Style,
    /// Box borders.
    pub border: Style,
    query: Style,
    selected_query: Style,
    assistant: Style,
    timestamp: Style,
}

impl UiStyles {
    /// Resolve styles for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let colored = config.colors_enabled();
        let fg = |color: Color| {
            if colored {
                Style::default().fg(color)
            } else {
                Style::default()
            }
        };
        let bold = Modifier::BOLD;

        let active_tab = if colored {
            fg(PRIMARY).bg(TAB_BACKGROUND).add_modifier(bold)
        } else {
            Style::default().add_modifier(bold | Modifier::REVERSED)
        };

        Self {
            active_tab,
            inactive_tab: fg(MUTED),
            header: fg(PRIMARY).add_modifier(bold),
            project_name: fg(SECONDARY).add_modifier(bold),
            label: fg(MUTED),
            source_name: fg(PRIMARY),
            source_kind: fg(SECONDARY).add_modifier(bold),
            input_prompt: fg(PRIMARY).add_modifier(bold),
            loading: fg(ACCENT).add_modifier(Modifier::ITALIC),
            help: fg(MUTED),
            error: fg(ERROR).add_modifier(bold),
            border: fg(PRIMARY),
            query: fg(ACCENT).add_modifier(bold),
            selected_query: fg(PRIMARY).add_modifier(bold),
            assistant: fg(Color::White),
            timestamp: fg(MUTED).add_modifier(Modifier::ITALIC),
        }
    }

    /// Style for one rendered chat line.
    pub fn for_line(&self, kind: LineKind) -> Style {
        match kind {
            LineKind::Query => self.query,
            LineKind::SelectedQuery => self.selected_query,
            LineKind::CollapsedStatus => self.help,
            LineKind::ResponseHeader => self.assistant.add_modifier(Modifier::BOLD),
            LineKind::ResponseBody => self.assistant,
            LineKind::Timestamp => self.timestamp,
            LineKind::Pending => self.loading,
        }
    }
}

impl Default for UiStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
