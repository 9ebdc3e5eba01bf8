//! Selection engine.
//!
//! Multi-selection driven by explicit toggles and by a drag-paint gesture.
//! The gesture is a two-state machine:
//!
//! ```text
//!            Down(r) / paint r := !selected(r)
//!   Idle ──────────────────────────────────────▶ Dragging { paint }
//!    ▲                                              │  Enter(r') / r' := paint
//!    │        Up  |  LeaveContainer                 │
//!    └──────────────────────────────────────────────┘
//! ```
//!
//! [`transition`] is pure; [`Selection`] applies its paint commands to a
//! [`SelectionState`].

use std::collections::BTreeSet;
use tracing::debug;

// ===== DragState =====

/// Gesture state. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A gesture is painting rows with a value fixed at its start.
    Dragging {
        /// Membership every touched row receives.
        paint: bool,
    },
}

impl DragState {
    /// True while a gesture is in progress.
    pub fn is_dragging(self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// The paint value of the current gesture, if any.
    pub fn paint_value(self) -> Option<bool> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { paint } => Some(paint),
        }
    }
}

// ===== PointerEvent =====

/// Pointer input relevant to selection, already resolved to row ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerEvent<Id> {
    /// Primary button pressed on a row.
    Down(Id),
    /// Pointer moved onto a row.
    Enter(Id),
    /// Primary button released, anywhere.
    Up,
    /// Pointer left the list container.
    LeaveContainer,
}

/// Outcome of one transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<Id> {
    /// State after the event.
    pub next: DragState,
    /// Membership to write, if the event paints a row.
    pub paint: Option<(Id, bool)>,
}

/// Pure gesture transition.
///
/// `is_selected` is consulted only on `Down`, to fix the paint value. A
/// `Down` while already dragging starts a fresh gesture.
pub fn transition<Id, F>(state: DragState, event: PointerEvent<Id>, is_selected: F) -> Step<Id>
where
    F: FnOnce(&Id) -> bool,
{
    match (state, event) {
        (_, PointerEvent::Down(id)) => {
            let paint = !is_selected(&id);
            Step {
                next: DragState::Dragging { paint },
                paint: Some((id, paint)),
            }
        }
        (DragState::Dragging { paint }, PointerEvent::Enter(id)) => Step {
            next: DragState::Dragging { paint },
            paint: Some((id, paint)),
        },
        (DragState::Idle, PointerEvent::Enter(_)) => Step {
            next: DragState::Idle,
            paint: None,
        },
        (_, PointerEvent::Up) | (_, PointerEvent::LeaveContainer) => Step {
            next: DragState::Idle,
            paint: None,
        },
    }
}

// ===== SelectionState =====

/// Set of selected ids. Empty at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState<Id: Ord> {
    selected: BTreeSet<Id>,
}

impl<Id: Ord> Default for SelectionState<Id> {
    fn default() -> Self {
        Self {
            selected: BTreeSet::new(),
        }
    }
}

impl<Id: Ord + Clone> SelectionState<Id> {
    /// Empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` is selected.
    pub fn contains(&self, id: &Id) -> bool {
        self.selected.contains(id)
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// True when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = &Id> {
        self.selected.iter()
    }

    /// Selected ids in ascending order, cloned.
    pub fn to_vec(&self) -> Vec<Id> {
        self.selected.iter().cloned().collect()
    }

    /// Set membership of `id`. Returns true if it changed.
    pub fn set(&mut self, id: Id, member: bool) -> bool {
        if member {
            self.selected.insert(id)
        } else {
            self.selected.remove(&id)
        }
    }

    /// Flip membership of `id`. Returns the new membership.
    pub fn toggle(&mut self, id: Id) -> bool {
        if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    /// Drop every id. Returns how many were selected.
    pub fn clear(&mut self) -> usize {
        let count = self.selected.len();
        self.selected.clear();
        count
    }
}

// ===== Selection =====

/// Selection set plus the gesture driving it.
#[derive(Debug, Clone)]
pub struct Selection<Id: Ord> {
    state: SelectionState<Id>,
    drag: DragState,
}

impl<Id: Ord> Default for Selection<Id> {
    fn default() -> Self {
        Self {
            state: SelectionState::default(),
            drag: DragState::Idle,
        }
    }
}

impl<Id: Ord + Clone + std::fmt::Debug> Selection<Id> {
    /// Empty selection, no gesture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one pointer event. Returns the paint applied, if any.
    pub fn handle(&mut self, event: PointerEvent<Id>) -> Option<(Id, bool)> {
        let was_dragging = self.drag.is_dragging();
        let state = &self.state;
        let step = transition(self.drag, event, |id| state.contains(id));
        self.drag = step.next;

        match (was_dragging, self.drag) {
            (false, DragState::Dragging { paint }) => debug!(paint, "Drag gesture started"),
            (true, DragState::Idle) => debug!(selected = self.state.len(), "Drag gesture ended"),
            _ => {}
        }

        let (id, member) = step.paint?;
        self.state.set(id.clone(), member);
        Some((id, member))
    }

    /// Explicit toggle (keyboard or checkbox). Returns the new membership.
    pub fn toggle(&mut self, id: Id) -> bool {
        self.state.toggle(id)
    }

    /// Drop every id and end any gesture. Returns how many were selected.
    pub fn clear(&mut self) -> usize {
        self.drag = DragState::Idle;
        self.state.clear()
    }

    /// Current gesture state.
    pub fn drag(&self) -> DragState {
        self.drag
    }

    /// Current selection set.
    pub fn state(&self) -> &SelectionState<Id> {
        &self.state
    }

    /// Whether `id` is selected.
    pub fn contains(&self, id: &Id) -> bool {
        self.state.contains(id)
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// True when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
