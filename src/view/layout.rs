//! Screen layout.
//!
//! Pure layout logic: splits the frame into header, filter bar, list pane,
//! optional filter form, action bar and key hints, then delegates each area
//! to its widget.

use crate::model::EntityId;
use crate::state::{AppState, Presentation};
use crate::view::constants::{
    ACTION_BAR_HEIGHT, FILTER_BAR_HEIGHT, FILTER_FORM_HEIGHT, HEADER_HEIGHT, HINT_BAR_HEIGHT,
};
use crate::view::{action_bar, filter_bar, filter_form, help, list_pane, ListStyles};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Rows handed to the list pane: one string per displayed column.
pub type ListRows = Presentation<EntityId, Vec<String>>;

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Title and counts.
    pub header: Rect,
    /// Active filter chips.
    pub filter_bar: Rect,
    /// Bordered list pane.
    pub list: Rect,
    /// Filter form, when open.
    pub form: Option<Rect>,
    /// Action button and status message.
    pub action_bar: Rect,
    /// Key hints.
    pub hints: Rect,
}

/// Split the frame.
pub fn calculate_areas(frame_area: Rect, form_open: bool) -> ScreenAreas {
    let form_height = if form_open { FILTER_FORM_HEIGHT } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(FILTER_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(form_height),
            Constraint::Length(ACTION_BAR_HEIGHT),
            Constraint::Length(HINT_BAR_HEIGHT),
        ])
        .split(frame_area);

    ScreenAreas {
        header: chunks[0],
        filter_bar: chunks[1],
        list: chunks[2],
        form: form_open.then_some(chunks[3]),
        action_bar: chunks[4],
        hints: chunks[5],
    }
}

/// Area holding list rows: inside the border, below the column header.
pub fn rows_area(list_area: Rect) -> Rect {
    let inner_height = list_area.height.saturating_sub(2);
    Rect {
        x: list_area.x.saturating_add(1),
        y: list_area.y.saturating_add(2),
        width: list_area.width.saturating_sub(2),
        height: inner_height.saturating_sub(1),
    }
}

/// Render the whole screen.
pub fn render_layout(frame: &mut Frame, state: &AppState, rows: &ListRows, styles: &ListStyles) {
    let areas = calculate_areas(frame.area(), state.form.is_open());

    render_header(frame, areas.header, state, styles);
    filter_bar::render_filter_bar(frame, areas.filter_bar, state.list().filters(), styles);
    list_pane::render_list_pane(frame, areas.list, state, rows, styles);
    if let Some(form_area) = areas.form {
        let names = state.filter_field_names();
        filter_form::render_filter_form(frame, form_area, &state.form, &names, styles);
    }
    action_bar::render_action_bar(frame, areas.action_bar, state, styles);
    render_hints(frame, areas.hints, state, styles);

    if state.help_visible {
        help::render_help_overlay(frame, styles);
    }
}

/// Header text: title, visible and total counts, sort indicator, selection size.
pub fn header_text(state: &AppState) -> String {
    let list = state.list();
    let mut text = format!(" exlv | {} of {} entities", list.visible_len(), list.total());
    if let Some(sort) = list.sort() {
        let label = list
            .sort_fields()
            .get(&sort.field)
            .map(|spec| spec.label())
            .unwrap_or(sort.field.as_str());
        text.push_str(&format!(" | sorted by {} {}", label, sort.order.arrow()));
    }
    let selected = list.selection().len();
    if selected > 0 {
        text.push_str(&format!(" | {} selected", selected));
    }
    text
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, styles: &ListStyles) {
    let paragraph = Paragraph::new(Line::from(header_text(state))).style(styles.header);
    frame.render_widget(paragraph, area);
}

/// Key hints for the current mode.
pub fn hint_text(state: &AppState) -> &'static str {
    if state.help_visible {
        "Esc/?: close help | q: quit"
    } else if state.form.is_open() {
        "Tab: next part | ←/→: choose | Enter: add filter | Esc: cancel"
    } else {
        "j/k: move | Space: select | f: filter | x: remove filter | s/o: sort | a: action | ?: help | q: quit"
    }
}

fn render_hints(frame: &mut Frame, area: Rect, state: &AppState, styles: &ListStyles) {
    let paragraph = Paragraph::new(Line::from(Span::styled(hint_text(state), styles.muted)));
    frame.render_widget(paragraph, area);
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
