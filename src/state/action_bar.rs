//! Action bar.
//!
//! Exactly one contextual action is offered at a time: add when nothing is
//! selected, bulk delete otherwise. Handlers are supplied by the caller; a
//! missing handler degrades to a logged no-op.

use crate::model::Identify;
use crate::state::selection::Selection;
use tracing::{info, warn};

// ===== ActionBar =====

/// The affordance currently offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionBar {
    /// Selection is empty: offer to add an entity.
    Add,
    /// Selection is non-empty: offer to delete it.
    BulkDelete {
        /// Number of selected ids.
        count: usize,
    },
}

impl ActionBar {
    /// Derive the affordance from a selection size.
    pub fn for_selection_len(len: usize) -> Self {
        if len == 0 {
            ActionBar::Add
        } else {
            ActionBar::BulkDelete { count: len }
        }
    }

    /// Derive the affordance from a selection.
    pub fn from_selection<Id: Ord + Clone + std::fmt::Debug>(selection: &Selection<Id>) -> Self {
        Self::for_selection_len(selection.len())
    }

    /// Button text.
    pub fn label(self) -> String {
        match self {
            ActionBar::Add => "Add".to_string(),
            ActionBar::BulkDelete { count } => format!("Delete {} selected", count),
        }
    }
}

// ===== Handlers =====

/// Caller-supplied side effects for the two affordances.
///
/// Both are fire-and-forget from the list's point of view: the list never
/// learns whether a deletion succeeded.
pub trait ListActions<T: Identify> {
    /// Called when the add affordance is triggered.
    fn on_add(&mut self) {
        warn!("Add requested but no add handler is configured");
    }

    /// Called with the selected ids, ascending, when bulk delete is triggered.
    fn on_bulk_delete(&mut self, ids: &[T::Id]) {
        warn!(
            count = ids.len(),
            "Bulk delete requested but no delete handler is configured"
        );
    }
}

/// Handlers that do nothing but log.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopActions;

impl<T: Identify> ListActions<T> for NoopActions {}

type AddHook = Box<dyn FnMut()>;
type DeleteHook<Id> = Box<dyn FnMut(&[Id])>;

/// Closure-based handlers, each optional.
pub struct Hooks<Id> {
    on_add: Option<AddHook>,
    on_bulk_delete: Option<DeleteHook<Id>>,
}

impl<Id> Hooks<Id> {
    /// No handlers.
    pub fn new() -> Self {
        Self {
            on_add: None,
            on_bulk_delete: None,
        }
    }

    /// Set the add handler.
    pub fn on_add(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_add = Some(Box::new(hook));
        self
    }

    /// Set the bulk delete handler.
    pub fn on_bulk_delete(mut self, hook: impl FnMut(&[Id]) + 'static) -> Self {
        self.on_bulk_delete = Some(Box::new(hook));
        self
    }
}

impl<Id> Default for Hooks<Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Identify> ListActions<T> for Hooks<T::Id> {
    fn on_add(&mut self) {
        match self.on_add.as_mut() {
            Some(hook) => hook(),
            None => warn!("Add requested but no add handler is configured"),
        }
    }

    fn on_bulk_delete(&mut self, ids: &[T::Id]) {
        match self.on_bulk_delete.as_mut() {
            Some(hook) => hook(ids),
            None => warn!(
                count = ids.len(),
                "Bulk delete requested but no delete handler is configured"
            ),
        }
    }
}

// ===== Triggering =====

/// What triggering the action bar did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome<Id> {
    /// The add handler ran.
    AddRequested,
    /// The delete handler ran with these ids and the selection was cleared.
    BulkDeleted(Vec<Id>),
}

/// Run the current affordance.
///
/// After a bulk delete the selection is cleared unconditionally, whatever
/// the handler did with the ids.
pub fn trigger<T, A>(selection: &mut Selection<T::Id>, actions: &mut A) -> ActionOutcome<T::Id>
where
    T: Identify,
    A: ListActions<T> + ?Sized,
{
    match ActionBar::from_selection(selection) {
        ActionBar::Add => {
            actions.on_add();
            ActionOutcome::AddRequested
        }
        ActionBar::BulkDelete { count } => {
            let ids = selection.state().to_vec();
            info!(count, "Bulk delete triggered");
            actions.on_bulk_delete(&ids);
            selection.clear();
            ActionOutcome::BulkDeleted(ids)
        }
    }
}

// ===== Tests =====
