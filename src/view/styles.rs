//! List styling configuration.
//!
//! Every style the list screen uses comes from [`ListStyles`], so disabling
//! colors is one switch.

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
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Explicit setting.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== ListStyles =====

/// Styles for the list screen.
///
/// Modifiers (bold, reversed) survive when colors are disabled so the
/// cursor row and headers stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListStyles {
    /// Title and column headers.
    pub header: Style,
    /// Row under the cursor.
    pub cursor_row: Style,
    /// Selected rows.
    pub selected_row: Style,
    /// Filter chips.
    pub chip: Style,
    /// Add button.
    pub add_action: Style,
    /// Bulk delete button.
    pub delete_action: Style,
    /// Informational status.
    pub info: Style,
    /// Error status.
    pub error: Style,
    /// Hints and placeholders.
    pub muted: Style,
    /// Focused part of the filter form.
    pub focused: Style,
    /// Borders.
    pub border: Style,
}

impl ListStyles {
    /// Styles with colors as configured.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let reversed = Style::default().add_modifier(Modifier::REVERSED);
        if config.colors_enabled() {
            Self {
                header: bold.fg(Color::Cyan),
                cursor_row: reversed,
                selected_row: Style::default().fg(Color::Yellow),
                chip: Style::default().fg(Color::Black).bg(Color::Cyan),
                add_action: bold.fg(Color::Green),
                delete_action: bold.fg(Color::Red),
                info: Style::default().fg(Color::Green),
                error: Style::default().fg(Color::Red),
                muted: Style::default().fg(Color::DarkGray),
                focused: bold.fg(Color::Yellow),
                border: Style::default().fg(Color::Cyan),
            }
        } else {
            Self {
                header: bold,
                cursor_row: reversed,
                selected_row: Style::default(),
                chip: reversed,
                add_action: bold,
                delete_action: bold,
                info: Style::default(),
                error: bold,
                muted: Style::default(),
                focused: bold.add_modifier(Modifier::UNDERLINED),
                border: Style::default(),
            }
        }
    }
}

impl Default for ListStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
