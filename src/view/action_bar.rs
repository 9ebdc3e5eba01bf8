//! Action bar widget: the selection-dependent button plus the status line.

use crate::state::{ActionBar, AppState, StatusKind};
use crate::view::ListStyles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Button text, e.g. `[ Add ]` or `[ Delete 2 selected ]`.
pub fn button_text(bar: ActionBar) -> String {
    format!("[ {} ]", bar.label())
}

/// Render the action bar.
pub fn render_action_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &ListStyles) {
    let bar = state.list().action_bar();
    let button_style = match bar {
        ActionBar::Add => styles.add_action,
        ActionBar::BulkDelete { .. } => styles.delete_action,
    };

    let mut spans = vec![Span::raw(" "), Span::styled(button_text(bar), button_style)];
    if let Some(status) = &state.status {
        let style = match status.kind {
            StatusKind::Info => styles.info,
            StatusKind::Error => styles.error,
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(status.text.clone(), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
