//! Presentation adapter.
//!
//! `ListView` owns one entity collection together with its filter clauses,
//! active sort and selection, and composes them per render:
//! entities → filter → sort → caller renderer, each row annotated with its
//! checkbox state.
//!
//! The filtered and sorted order is recomputed only by [`ListView::recompute`]
//! and only when one of its memoization keys has changed:
//!
//! - the entity generation (bumped by `set_entities` / `retain_entities`)
//! - the clause set revision
//! - the sort config

use crate::model::{ClauseError, FieldRegistry, FieldSpec, Identify, SortError};
use crate::state::action_bar::{self, ActionBar, ActionOutcome, ListActions};
use crate::state::filter::{matching_indices, ClauseDraft, ClauseId, FilterClause, FilterSet};
use crate::state::selection::{PointerEvent, Selection};
use crate::state::sort::{sort_indices, SortConfig, SortOrder};
use tracing::debug;

// ===== Presentation =====

/// One rendered row.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentedRow<Id, R> {
    /// Entity id.
    pub id: Id,
    /// Checkbox state.
    pub checked: bool,
    /// Caller-rendered content.
    pub content: R,
}

/// Result of one presentation pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Presentation<Id, R> {
    /// Nothing passed the filters.
    NoMatches,
    /// Rows in display order.
    Rows(Vec<PresentedRow<Id, R>>),
}

impl<Id, R> Presentation<Id, R> {
    /// Number of rows (zero for `NoMatches`).
    pub fn len(&self) -> usize {
        match self {
            Presentation::NoMatches => 0,
            Presentation::Rows(rows) => rows.len(),
        }
    }

    /// True for `NoMatches`.
    pub fn is_empty(&self) -> bool {
        matches!(self, Presentation::NoMatches)
    }
}

// ===== ListView =====

#[derive(Debug, Clone, PartialEq, Eq)]
struct CacheKey {
    generation: u64,
    revision: u64,
    sort: Option<SortConfig>,
}

/// A generic entity list with filtering, sorting and selection.
#[derive(Debug, Clone)]
pub struct ListView<T: Identify> {
    entities: Vec<T>,
    generation: u64,
    filter_fields: FieldRegistry<T>,
    sort_fields: FieldRegistry<T>,
    filters: FilterSet,
    sort: Option<SortConfig>,
    selection: Selection<T::Id>,
    order: Vec<usize>,
    key: CacheKey,
}

impl<T: Identify> ListView<T> {
    /// Build a list. The sort defaults to the first sortable field, ascending.
    pub fn new(entities: Vec<T>, filter_fields: FieldRegistry<T>, sort_fields: FieldRegistry<T>) -> Self {
        let sort = sort_fields
            .first()
            .map(|spec| SortConfig::new(spec.value(), SortOrder::Ascending));
        let mut view = Self {
            entities,
            generation: 0,
            filter_fields,
            sort_fields,
            filters: FilterSet::new(),
            sort,
            selection: Selection::new(),
            order: Vec::new(),
            key: CacheKey {
                generation: u64::MAX,
                revision: u64::MAX,
                sort: None,
            },
        };
        view.recompute();
        view
    }

    fn current_key(&self) -> CacheKey {
        CacheKey {
            generation: self.generation,
            revision: self.filters.revision(),
            sort: self.sort.clone(),
        }
    }

    fn active_sort_spec(&self) -> Option<(&FieldSpec<T>, SortOrder)> {
        let config = self.sort.as_ref()?;
        let spec = self.sort_fields.get(&config.field)?;
        Some((spec, config.order))
    }

    /// Recompute the visible order if any memoization key changed.
    ///
    /// Returns true when work was done.
    pub fn recompute(&mut self) -> bool {
        let key = self.current_key();
        if key == self.key {
            return false;
        }
        let mut order = matching_indices(&self.entities, self.filters.as_slice(), &self.filter_fields);
        if let Some((spec, direction)) = self.active_sort_spec() {
            sort_indices(&self.entities, &mut order, spec, direction);
        }
        debug!(
            total = self.entities.len(),
            visible = order.len(),
            generation = key.generation,
            revision = key.revision,
            "List recomputed"
        );
        self.order = order;
        self.key = key;
        true
    }

    /// True when the cached order reflects the current keys.
    pub fn is_current(&self) -> bool {
        self.key == self.current_key()
    }

    /// Indices into [`ListView::entities`] in display order, as of the last recompute.
    pub fn visible_indices(&self) -> &[usize] {
        &self.order
    }

    /// Visible entities in display order, as of the last recompute.
    pub fn visible(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|&idx| self.entities.get(idx))
    }

    /// Visible entity at a display position, as of the last recompute.
    pub fn visible_at(&self, position: usize) -> Option<&T> {
        self.order.get(position).and_then(|&idx| self.entities.get(idx))
    }

    /// Number of visible entities, as of the last recompute.
    pub fn visible_len(&self) -> usize {
        self.order.len()
    }

    /// Visible ids in display order. Recomputes first.
    pub fn visible_ids(&mut self) -> Vec<T::Id> {
        self.recompute();
        self.visible().map(|entity| entity.id().clone()).collect()
    }

    /// Render the visible entities. Recomputes first.
    pub fn present<R, F>(&mut self, mut render: F) -> Presentation<T::Id, R>
    where
        F: FnMut(&T) -> R,
    {
        self.recompute();
        if self.order.is_empty() {
            return Presentation::NoMatches;
        }
        let rows = self
            .visible()
            .map(|entity| PresentedRow {
                id: entity.id().clone(),
                checked: self.selection.contains(entity.id()),
                content: render(entity),
            })
            .collect();
        Presentation::Rows(rows)
    }

    // ===== Entities =====

    /// Every entity, in input order.
    pub fn entities(&self) -> &[T] {
        &self.entities
    }

    /// Total number of entities.
    pub fn total(&self) -> usize {
        self.entities.len()
    }

    /// Entity generation counter.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the collection and recompute the visible order.
    pub fn set_entities(&mut self, entities: Vec<T>) {
        self.entities = entities;
        self.generation += 1;
        self.recompute();
    }

    /// Keep only entities matching `keep`. Returns how many were removed.
    ///
    /// The visible order is recomputed, since cached indices may point past
    /// the shortened collection.
    pub fn retain_entities<F>(&mut self, keep: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.entities.len();
        self.entities.retain(keep);
        let removed = before - self.entities.len();
        if removed > 0 {
            self.generation += 1;
            self.recompute();
        }
        removed
    }

    // ===== Filters =====

    /// Filterable fields.
    pub fn filter_fields(&self) -> &FieldRegistry<T> {
        &self.filter_fields
    }

    /// Active clauses.
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Validate and add a clause.
    pub fn add_filter(&mut self, draft: ClauseDraft) -> Result<ClauseId, ClauseError> {
        self.filters.add(draft, &self.filter_fields)
    }

    /// Remove a clause by id.
    pub fn remove_filter(&mut self, id: ClauseId) -> Option<FilterClause> {
        self.filters.remove(id)
    }

    /// Remove the newest clause.
    pub fn remove_last_filter(&mut self) -> Option<FilterClause> {
        self.filters.remove_last()
    }

    /// Remove every clause.
    pub fn clear_filters(&mut self) -> usize {
        self.filters.clear()
    }

    // ===== Sort =====

    /// Sortable fields.
    pub fn sort_fields(&self) -> &FieldRegistry<T> {
        &self.sort_fields
    }

    /// Active sort, if any sortable field exists.
    pub fn sort(&self) -> Option<&SortConfig> {
        self.sort.as_ref()
    }

    /// Sort by a registered field.
    pub fn set_sort(&mut self, field: &str, order: SortOrder) -> Result<(), SortError> {
        if self.sort_fields.get(field).is_none() {
            return Err(SortError::UnknownField(field.to_string()));
        }
        self.sort = Some(SortConfig::new(field, order));
        Ok(())
    }

    /// Move to the next sortable field, wrapping. Keeps the direction.
    pub fn cycle_sort_field(&mut self) -> Option<&SortConfig> {
        if self.sort_fields.is_empty() {
            return None;
        }
        let (next, order) = match &self.sort {
            Some(config) => {
                let next = self
                    .sort_fields
                    .position(&config.field)
                    .map(|idx| (idx + 1) % self.sort_fields.len())
                    .unwrap_or(0);
                (next, config.order)
            }
            None => (0, SortOrder::Ascending),
        };
        let field = self.sort_fields.at(next)?.value().to_string();
        self.sort = Some(SortConfig::new(field, order));
        self.sort.as_ref()
    }

    /// Flip the direction of the active sort.
    pub fn toggle_sort_order(&mut self) -> Option<SortOrder> {
        let config = self.sort.as_mut()?;
        config.order = config.order.toggled();
        Some(config.order)
    }

    // ===== Selection =====

    /// Selection state.
    pub fn selection(&self) -> &Selection<T::Id> {
        &self.selection
    }

    /// Feed a pointer event to the selection gesture.
    pub fn pointer(&mut self, event: PointerEvent<T::Id>) -> Option<(T::Id, bool)> {
        self.selection.handle(event)
    }

    /// Toggle one id. Returns the new membership.
    pub fn toggle(&mut self, id: T::Id) -> bool {
        self.selection.toggle(id)
    }

    /// The affordance the action bar currently offers.
    pub fn action_bar(&self) -> ActionBar {
        ActionBar::from_selection(&self.selection)
    }

    /// Run the action bar's current affordance.
    pub fn trigger_action<A>(&mut self, actions: &mut A) -> ActionOutcome<T::Id>
    where
        A: ListActions<T> + ?Sized,
    {
        action_bar::trigger::<T, A>(&mut self.selection, actions)
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "list_view_tests.rs"]
mod tests;
