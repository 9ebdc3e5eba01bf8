//! Filter bar widget: one chip per active clause.

use crate::state::FilterSet;
use crate::view::ListStyles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

const LABEL: &str = " Filters: ";
const OVERFLOW: &str = " …";

/// Chip spans for the clauses, in insertion order.
///
/// Chips that would not fit in `width` columns are replaced by an ellipsis.
pub fn chip_spans(filters: &FilterSet, width: u16, styles: &ListStyles) -> Vec<Span<'static>> {
    let mut spans = vec![Span::styled(LABEL, styles.muted)];
    if filters.is_empty() {
        spans.push(Span::styled("none", styles.muted));
        return spans;
    }

    let budget = usize::from(width);
    let mut used = LABEL.width();
    for clause in filters.iter() {
        let chip = format!(" {} ", clause);
        let needed = chip.width() + 1;
        if used + needed + OVERFLOW.width() > budget {
            spans.push(Span::styled(OVERFLOW, styles.muted));
            break;
        }
        used += needed;
        spans.push(Span::styled(chip, styles.chip));
        spans.push(Span::raw(" "));
    }
    spans
}

/// Render the filter bar.
pub fn render_filter_bar(frame: &mut Frame, area: Rect, filters: &FilterSet, styles: &ListStyles) {
    let line = Line::from(chip_spans(filters, area.width, styles));
    frame.render_widget(Paragraph::new(line), area);
}
