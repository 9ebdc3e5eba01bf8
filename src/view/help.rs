//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use crate::view::ListStyles;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the help overlay centered on the screen.
///
/// The overlay displays all keyboard shortcuts grouped by category:
/// - Navigation
/// - Selection
/// - Filters
/// - Sorting
/// - Actions
/// - Application
pub fn render_help_overlay(frame: &mut Frame, styles: &ListStyles) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(styles))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(styles.border),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    // Dismissal hint on the bottom border
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        styles.muted.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
///
/// Returns a Rect that is centered on the screen with the specified
/// percentage of width and height.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("j/↓", "Cursor down"),
            ("k/↑", "Cursor up"),
            ("g/Home", "First row"),
            ("G/End", "Last row"),
        ],
    ),
    (
        "Selection",
        &[
            ("Space", "Toggle row"),
            ("Mouse drag", "Paint rows with the first row's new state"),
        ],
    ),
    (
        "Filters",
        &[
            ("f or /", "Open filter form"),
            ("Tab/Shift+Tab", "Next/previous form part"),
            ("←/→", "Choose field or operation"),
            ("Enter", "Add filter"),
            ("x", "Remove last filter"),
            ("X", "Clear filters"),
        ],
    ),
    (
        "Sorting",
        &[("s", "Next sort field"), ("o", "Toggle sort order")],
    ),
    (
        "Actions",
        &[("a/Delete", "Add, or delete selected rows")],
    ),
    (
        "Application",
        &[("q/Ctrl+c", "Quit"), ("?", "Show help overlay")],
    ),
];

/// Build the help content lines grouped by category.
fn build_help_content(styles: &ListStyles) -> Vec<Line<'static>> {
    let key_style = styles.focused;
    let desc_style = Style::default();

    let mut lines = Vec::new();
    for (index, (title, keys)) in SECTIONS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(*title, styles.header)));
        for (key, description) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<14}", key), key_style),
                Span::styled(*description, desc_style),
            ]));
        }
    }
    lines
}

// ===== Tests =====

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
