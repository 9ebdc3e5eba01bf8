//! Mouse event handler.
//!
//! Maps terminal mouse events over the list pane to selection gesture
//! events. The list pane exposes its last rendered row area so coordinates
//! can be resolved to display positions.

use crate::state::selection::PointerEvent;
use crate::state::AppState;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Result of hit-testing a coordinate against the list rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowHit {
    /// Coordinate is on the row at this display position.
    Row(usize),
    /// Coordinate is inside the pane but below the last row.
    EmptySpace,
    /// Coordinate is outside the pane.
    Outside,
}

/// Resolve a coordinate to a row.
///
/// # Arguments
/// * `column`, `row` - Mouse position (0-based)
/// * `rows_area` - Area occupied by list rows (borders and header excluded)
/// * `scroll_offset` - Display position of the first rendered row
/// * `row_count` - Number of visible rows
pub fn hit_row(column: u16, row: u16, rows_area: Rect, scroll_offset: usize, row_count: usize) -> RowHit {
    if column < rows_area.x
        || column >= rows_area.x + rows_area.width
        || row < rows_area.y
        || row >= rows_area.y + rows_area.height
    {
        return RowHit::Outside;
    }
    let position = scroll_offset + usize::from(row - rows_area.y);
    if position < row_count {
        RowHit::Row(position)
    } else {
        RowHit::EmptySpace
    }
}

/// Gesture event for one mouse event, in terms of display positions.
///
/// - left press on a row: `Down`
/// - left drag onto a row: `Enter`
/// - left release anywhere: `Up`
/// - drag or move outside the pane: `LeaveContainer`
///
/// Everything else, including presses on empty space, yields `None`.
pub fn pointer_event(kind: MouseEventKind, hit: RowHit) -> Option<PointerEvent<usize>> {
    match (kind, hit) {
        (MouseEventKind::Down(MouseButton::Left), RowHit::Row(position)) => {
            Some(PointerEvent::Down(position))
        }
        (MouseEventKind::Drag(MouseButton::Left), RowHit::Row(position)) => {
            Some(PointerEvent::Enter(position))
        }
        (MouseEventKind::Up(MouseButton::Left), _) => Some(PointerEvent::Up),
        (MouseEventKind::Drag(_) | MouseEventKind::Moved, RowHit::Outside) => {
            Some(PointerEvent::LeaveContainer)
        }
        _ => None,
    }
}

/// Handle a mouse event and update AppState accordingly.
///
/// Scroll wheel events move the cursor. A press on a row also moves the
/// cursor there.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent, rows_area: Rect) {
    match mouse.kind {
        MouseEventKind::ScrollDown => {
            state.move_cursor(1);
            return;
        }
        MouseEventKind::ScrollUp => {
            state.move_cursor(-1);
            return;
        }
        _ => {}
    }

    let hit = hit_row(
        mouse.column,
        mouse.row,
        rows_area,
        state.scroll_offset,
        state.list().visible_len(),
    );
    let Some(event) = pointer_event(mouse.kind, hit) else {
        return;
    };

    let event = match event {
        PointerEvent::Down(position) => {
            state.cursor = position;
            state.id_at(position).map(PointerEvent::Down)
        }
        PointerEvent::Enter(position) => state.id_at(position).map(PointerEvent::Enter),
        PointerEvent::Up => Some(PointerEvent::Up),
        PointerEvent::LeaveContainer => Some(PointerEvent::LeaveContainer),
    };
    if let Some(event) = event {
        state.list_mut().pointer(event);
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "mouse_handler_tests.rs"]
mod tests;
