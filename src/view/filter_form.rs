//! Filter form widget.
//!
//! One bordered line: field chooser, operation chooser and value input.
//! The focused part is highlighted and the terminal cursor sits in the
//! value input while it has focus.

use crate::state::{FilterForm, FilterOperation, FormFocus};
use crate::view::ListStyles;
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render the form. Does nothing when it is closed.
pub fn render_filter_form(
    frame: &mut Frame,
    area: Rect,
    form: &FilterForm,
    field_names: &[&str],
    styles: &ListStyles,
) {
    let FilterForm::Open {
        field,
        operation,
        value,
        cursor,
        focus,
    } = form
    else {
        return;
    };

    let style_for = |part: FormFocus| {
        if *focus == part {
            styles.focused
        } else {
            Style::default()
        }
    };

    let field_name = field_names.get(*field).copied().unwrap_or("(no fields)");
    let operation_name = FilterOperation::KNOWN
        .get(*operation)
        .map(|op| op.as_str().to_string())
        .unwrap_or_default();

    let field_text = format!("‹ {} ›", field_name);
    let operation_text = format!("‹ {} ›", operation_name);
    let prefix_width = " Field ".width()
        + field_text.width()
        + "  Operation ".width()
        + operation_text.width()
        + "  Value ".width();

    let line = Line::from(vec![
        Span::styled(" Field ", styles.muted),
        Span::styled(field_text, style_for(FormFocus::Field)),
        Span::styled("  Operation ", styles.muted),
        Span::styled(operation_text, style_for(FormFocus::Operation)),
        Span::styled("  Value ", styles.muted),
        Span::styled(value.clone(), style_for(FormFocus::Value)),
    ]);

    let block = Block::default()
        .title(" Add filter ")
        .borders(Borders::ALL)
        .border_style(styles.border);
    frame.render_widget(Paragraph::new(line).block(block), area);

    if *focus == FormFocus::Value {
        let before_cursor: String = value.chars().take(*cursor).collect();
        let offset = prefix_width + before_cursor.width();
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(u16::try_from(offset).unwrap_or(u16::MAX));
        let max_x = area.right().saturating_sub(2);
        frame.set_cursor_position(Position::new(x.min(max_x), area.y.saturating_add(1)));
    }
}
