//! List engine and UI state machine (pure).
//!
//! The engine modules (`filter`, `sort`, `selection`, `action_bar`,
//! `list_view`) are generic over any [`crate::model::Identify`] entity. The
//! remaining modules hold the terminal viewer's state transitions. All of it
//! is testable without a TUI.

pub mod action_bar;
pub mod app_state;
pub mod filter;
pub mod filter_form;
pub mod list_view;
pub mod mouse_handler;
pub mod selection;
pub mod sort;

// Re-export for convenience
pub use action_bar::{ActionBar, ActionOutcome, Hooks, ListActions, NoopActions};
pub use app_state::{AppState, ListFields, ShellActions, StatusKind, StatusMessage};
pub use filter::{
    apply_filters, satisfies_all, ClauseDraft, ClauseId, FilterClause, FilterOperation, FilterSet,
};
pub use filter_form::{FilterForm, FormFocus};
pub use list_view::{ListView, Presentation, PresentedRow};
pub use mouse_handler::{handle_mouse, hit_row, RowHit};
pub use selection::{transition, DragState, PointerEvent, Selection, SelectionState, Step};
pub use sort::{apply_sort, compare_values, locale_compare, SortConfig, SortOrder};
