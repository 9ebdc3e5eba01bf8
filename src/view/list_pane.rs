//! List pane widget: a bordered table with a checkbox column.

use crate::state::{AppState, Presentation};
use crate::view::constants::{CHECKBOX_COLUMN_WIDTH, NO_MATCHES_TEXT};
use crate::view::layout::{rows_area, ListRows};
use crate::view::ListStyles;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

/// Checkbox text for a row.
pub fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Column header labels, with the sort arrow on the sorted column.
pub fn header_labels(state: &AppState) -> Vec<String> {
    let sort = state.list().sort();
    state
        .columns()
        .iter()
        .map(|spec| match sort {
            Some(sort) if sort.field == spec.value() => {
                format!("{} {}", spec.label(), sort.order.arrow())
            }
            _ => spec.label().to_string(),
        })
        .collect()
}

/// Render the list pane.
///
/// Rows are drawn from `state.scroll_offset`; the cursor row is
/// highlighted and selected rows use the selected style.
pub fn render_list_pane(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    rows: &ListRows,
    styles: &ListStyles,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles.border);

    let presented = match rows {
        Presentation::NoMatches => {
            let placeholder = Paragraph::new(Line::from(NO_MATCHES_TEXT))
                .style(styles.muted)
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(placeholder, area);
            return;
        }
        Presentation::Rows(presented) => presented,
    };

    let height = usize::from(rows_area(area).height);
    let table_rows: Vec<Row> = presented
        .iter()
        .enumerate()
        .skip(state.scroll_offset)
        .take(height)
        .map(|(position, row)| {
            let mut cells = Vec::with_capacity(row.content.len() + 1);
            cells.push(Cell::from(checkbox(row.checked)));
            cells.extend(row.content.iter().map(|text| Cell::from(text.as_str())));
            let style = if position == state.cursor {
                styles.cursor_row
            } else if row.checked {
                styles.selected_row
            } else {
                ratatui::style::Style::default()
            };
            Row::new(cells).style(style)
        })
        .collect();

    let mut header_cells = vec![Cell::from("")];
    header_cells.extend(header_labels(state).into_iter().map(Cell::from));

    let column_count = state.columns().len();
    let mut widths = vec![Constraint::Length(CHECKBOX_COLUMN_WIDTH)];
    widths.extend(std::iter::repeat(Constraint::Fill(1)).take(column_count));

    let table = Table::new(table_rows, widths)
        .header(Row::new(header_cells).style(styles.header))
        .block(block);
    frame.render_widget(table, area);
}
