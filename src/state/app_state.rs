//! Application state and transitions.
//!
//! AppState is the root state of the terminal viewer: one [`ListView`] over
//! the loaded records plus the UI state around it (cursor, scroll, filter
//! form, status line, help overlay). Transitions are plain methods with no
//! terminal I/O, testable without a TUI.

use crate::model::{infer_fields, EntityId, FieldRegistry, FieldSpec, Identify, KeyAction, Record};
use crate::state::action_bar::{ActionOutcome, ListActions};
use crate::state::filter::ClauseDraft;
use crate::state::filter_form::{self, FilterForm};
use crate::state::list_view::ListView;
use tracing::{info, warn};

// ===== ListFields =====

/// Field registries for one list page.
///
/// `columns` are displayed; `filterable` and `sortable` are the subsets
/// exposed to the filter form and the sort controls.
#[derive(Debug, Clone, Default)]
pub struct ListFields {
    /// Displayed columns, in order.
    pub columns: FieldRegistry<Record>,
    /// Fields offered by the filter form.
    pub filterable: FieldRegistry<Record>,
    /// Fields offered for sorting.
    pub sortable: FieldRegistry<Record>,
}

impl ListFields {
    /// No fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one column and expose it as requested.
    pub fn add(&mut self, spec: FieldSpec<Record>, sortable: bool, filterable: bool) {
        if sortable {
            self.sortable.register(spec.clone());
        }
        if filterable {
            self.filterable.register(spec.clone());
        }
        self.columns.register(spec);
    }

    /// Every attribute seen in `records`, sortable and filterable.
    pub fn inferred(records: &[Record]) -> Self {
        let all = infer_fields(records);
        Self {
            columns: all.clone(),
            filterable: all.clone(),
            sortable: all,
        }
    }
}

// ===== Status line =====

/// Severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Confirmation.
    Info,
    /// Rejected input.
    Error,
}

/// One-line feedback shown above the key hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Severity.
    pub kind: StatusKind,
    /// Text.
    pub text: String,
}

// ===== Shell actions =====

/// Action handlers used by the terminal viewer.
///
/// Bulk delete collects the ids so the caller can drop them from the
/// in-memory collection. There is no add form in the terminal.
#[derive(Debug, Default)]
pub struct ShellActions {
    deleted: Vec<EntityId>,
}

impl ShellActions {
    /// Ids handed to the delete handler.
    pub fn deleted(&self) -> &[EntityId] {
        &self.deleted
    }
}

impl ListActions<Record> for ShellActions {
    fn on_bulk_delete(&mut self, ids: &[EntityId]) {
        self.deleted.extend_from_slice(ids);
    }
}

// ===== AppState =====

/// Root state of the terminal viewer.
#[derive(Debug, Clone)]
pub struct AppState {
    list: ListView<Record>,
    columns: FieldRegistry<Record>,
    /// Cursor position among visible rows.
    pub cursor: usize,
    /// First visible row in the list pane.
    pub scroll_offset: usize,
    /// Filter form state.
    pub form: FilterForm,
    /// Feedback from the last action.
    pub status: Option<StatusMessage>,
    /// Whether the help overlay is shown.
    pub help_visible: bool,
}

impl AppState {
    /// Create state over `records`.
    pub fn new(records: Vec<Record>, fields: ListFields) -> Self {
        Self {
            list: ListView::new(records, fields.filterable, fields.sortable),
            columns: fields.columns,
            cursor: 0,
            scroll_offset: 0,
            form: FilterForm::Closed,
            status: None,
            help_visible: false,
        }
    }

    /// The list engine.
    pub fn list(&self) -> &ListView<Record> {
        &self.list
    }

    /// The list engine, mutably.
    pub fn list_mut(&mut self) -> &mut ListView<Record> {
        &mut self.list
    }

    /// Displayed columns.
    pub fn columns(&self) -> &FieldRegistry<Record> {
        &self.columns
    }

    /// Surviving records, in input order.
    pub fn records(&self) -> &[Record] {
        self.list.entities()
    }

    /// Recompute the visible order and keep the cursor on a row.
    pub fn refresh(&mut self) {
        self.list.recompute();
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        let len = self.list.visible_len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
        self.scroll_offset = self.scroll_offset.min(len.saturating_sub(1));
    }

    /// Adjust `scroll_offset` so the cursor row is inside a viewport of
    /// `height` rows.
    pub fn ensure_cursor_visible(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
    }

    /// Id of the row at a display position.
    pub fn id_at(&self, position: usize) -> Option<EntityId> {
        self.list.visible_at(position).map(|record| record.id().clone())
    }

    /// Id of the row under the cursor.
    pub fn cursor_id(&self) -> Option<EntityId> {
        self.id_at(self.cursor)
    }

    /// Move the cursor by `delta` rows, saturating at both ends.
    pub fn move_cursor(&mut self, delta: isize) {
        let last = self.list.visible_len().saturating_sub(1);
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    /// Set a status message.
    pub fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            kind,
            text: text.into(),
        });
    }

    /// Apply a list-level key action.
    ///
    /// `Quit` and `Help` are handled by the shell and are ignored here.
    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::CursorUp => self.move_cursor(-1),
            KeyAction::CursorDown => self.move_cursor(1),
            KeyAction::CursorTop => self.cursor = 0,
            KeyAction::CursorBottom => self.cursor = self.list.visible_len().saturating_sub(1),
            KeyAction::ToggleSelection => self.toggle_cursor_row(),
            KeyAction::StartFilter => self.open_filter_form(),
            KeyAction::RemoveLastFilter => match self.list.remove_last_filter() {
                Some(clause) => self.set_status(StatusKind::Info, format!("Removed filter {}", clause)),
                None => self.set_status(StatusKind::Info, "No filters to remove"),
            },
            KeyAction::ClearFilters => {
                let removed = self.list.clear_filters();
                self.set_status(StatusKind::Info, format!("Cleared {} filter(s)", removed));
            }
            KeyAction::CycleSortField => {
                let label = self
                    .list
                    .cycle_sort_field()
                    .map(|sort| format!("Sorting by {} ({})", sort.field, sort.order));
                if let Some(label) = label {
                    self.set_status(StatusKind::Info, label);
                }
            }
            KeyAction::ToggleSortOrder => {
                if let Some(order) = self.list.toggle_sort_order() {
                    self.set_status(StatusKind::Info, format!("Sort order {}", order));
                }
            }
            KeyAction::TriggerAction => {
                self.trigger_action();
            }
            KeyAction::Quit | KeyAction::Help => {}
        }
        self.refresh();
    }

    /// Toggle the selection of the cursor row.
    pub fn toggle_cursor_row(&mut self) {
        if let Some(id) = self.cursor_id() {
            self.list.toggle(id);
        }
    }

    // ===== Filter form =====

    /// Show the filter form.
    pub fn open_filter_form(&mut self) {
        self.form = filter_form::open_form(std::mem::take(&mut self.form));
    }

    /// Keys of the filterable fields, in registry order.
    pub fn filter_field_names(&self) -> Vec<&str> {
        self.list.filter_fields().iter().map(|spec| spec.value()).collect()
    }

    /// Submit the form. On success the form closes; on rejection it stays
    /// open and the error is shown.
    pub fn submit_filter_form(&mut self) {
        let names = self.filter_field_names();
        let Some(draft) = filter_form::draft(&self.form, &names) else {
            return;
        };
        self.add_filter(draft);
    }

    fn add_filter(&mut self, draft: ClauseDraft) {
        match self.list.add_filter(draft) {
            Ok(_) => {
                self.form = FilterForm::Closed;
                let shown = self
                    .list
                    .filters()
                    .as_slice()
                    .last()
                    .map(|clause| clause.to_string())
                    .unwrap_or_default();
                self.set_status(StatusKind::Info, format!("Added filter {}", shown));
                self.cursor = 0;
                self.scroll_offset = 0;
                self.refresh();
            }
            Err(err) => {
                warn!(error = %err, "Filter clause rejected");
                self.set_status(StatusKind::Error, err.to_string());
            }
        }
    }

    // ===== Action bar =====

    /// Run the action bar's current affordance.
    ///
    /// A bulk delete drops the ids from the in-memory collection.
    pub fn trigger_action(&mut self) -> ActionOutcome<EntityId> {
        let mut actions = ShellActions::default();
        let outcome = self.list.trigger_action(&mut actions);
        match &outcome {
            ActionOutcome::AddRequested => {
                self.set_status(StatusKind::Info, "Add is not available in the terminal viewer");
            }
            ActionOutcome::BulkDeleted(_) => {
                let deleted = actions.deleted();
                let removed = self.list.retain_entities(|record| !deleted.contains(record.id()));
                info!(requested = deleted.len(), removed, "Entities deleted");
                self.set_status(StatusKind::Info, format!("Deleted {} entities", removed));
            }
        }
        self.refresh();
        outcome
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
