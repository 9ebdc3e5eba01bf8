//! Property-based tests for the list engine.
//!
//! Tests validate:
//! 1. Filtering with no clauses is the identity
//! 2. An entity passes iff it satisfies every clause (AND, order-independent)
//! 3. Numeric ascending and descending orders mirror each other, and a
//!    field mixing numbers with numeric text still sorts to a permutation
//! 4. Drag law: every touched row ends with the gesture's paint value

use exlv::model::{FieldRegistry, FieldSpec, FieldValue, Identify};
use exlv::state::{
    apply_filters, apply_sort, satisfies_all, ClauseDraft, FilterSet, PointerEvent, Selection,
    SortOrder,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

// ===== Fixture =====

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: u32,
    name: String,
    score: i32,
    score_as_text: bool,
}

impl Identify for Row {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.id
    }
}

fn fields() -> FieldRegistry<Row> {
    FieldRegistry::new()
        .with(FieldSpec::new("name", "Name", |r: &Row| {
            FieldValue::from(r.name.as_str())
        }))
        .with(FieldSpec::new("score", "Score", |r: &Row| {
            FieldValue::Number(f64::from(r.score))
        }))
        .with(FieldSpec::new("loose_score", "Loose score", |r: &Row| {
            if r.score_as_text {
                FieldValue::Text(r.score.to_string())
            } else {
                FieldValue::Number(f64::from(r.score))
            }
        }))
}

fn rows_strategy() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(("[a-c]{0,4}", -50i32..50, any::<bool>()), 0..40).prop_map(|cells| {
        cells
            .into_iter()
            .enumerate()
            .map(|(idx, (name, score, score_as_text))| Row {
                id: idx as u32,
                name,
                score,
                score_as_text,
            })
            .collect()
    })
}

fn draft_strategy() -> impl Strategy<Value = ClauseDraft> {
    prop_oneof![
        "[a-c]{1,2}".prop_map(|v| ClauseDraft::new("name", "contains", v)),
        "[a-c]{1,3}".prop_map(|v| ClauseDraft::new("name", "equals", v)),
        (-50i32..50).prop_map(|v| ClauseDraft::new("score", "greater", v.to_string())),
        (-50i32..50).prop_map(|v| ClauseDraft::new("score", "less", v.to_string())),
        (-50i32..50).prop_map(|v| ClauseDraft::new("loose_score", "greater", v.to_string())),
    ]
}

fn clause_set(drafts: &[ClauseDraft]) -> FilterSet {
    let registry = fields();
    let mut set = FilterSet::new();
    for draft in drafts {
        set.add(draft.clone(), &registry).expect("generated drafts are complete");
    }
    set
}

// ===== Property 1 & 2: Filter laws =====

proptest! {
    #[test]
    fn no_clauses_is_identity(rows in rows_strategy()) {
        let filtered = apply_filters(&rows, &[], &fields());
        let expected: Vec<&Row> = rows.iter().collect();
        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn passes_iff_every_clause_holds(
        rows in rows_strategy(),
        drafts in prop::collection::vec(draft_strategy(), 0..4),
    ) {
        let registry = fields();
        let set = clause_set(&drafts);
        let filtered = apply_filters(&rows, set.as_slice(), &registry);

        for row in &rows {
            let each = set
                .iter()
                .all(|clause| satisfies_all(row, std::slice::from_ref(clause), &registry));
            prop_assert_eq!(filtered.contains(&row), each);
        }
    }

    #[test]
    fn clause_order_does_not_matter(
        rows in rows_strategy(),
        drafts in prop::collection::vec(draft_strategy(), 0..4),
    ) {
        let registry = fields();
        let forward = clause_set(&drafts);
        let reversed_drafts: Vec<ClauseDraft> = drafts.iter().rev().cloned().collect();
        let reversed = clause_set(&reversed_drafts);

        prop_assert_eq!(
            apply_filters(&rows, forward.as_slice(), &registry),
            apply_filters(&rows, reversed.as_slice(), &registry)
        );
    }
}

// ===== Property 3: Numeric mirror law =====

proptest! {
    #[test]
    fn numeric_orders_mirror(rows in rows_strategy()) {
        let registry = fields();
        let score = registry.get("score").expect("score registered");

        let ascending: Vec<i32> = apply_sort(rows.iter().collect(), score, SortOrder::Ascending)
            .into_iter()
            .map(|r| r.score)
            .collect();
        let mut descending: Vec<i32> = apply_sort(rows.iter().collect(), score, SortOrder::Descending)
            .into_iter()
            .map(|r| r.score)
            .collect();
        descending.reverse();

        prop_assert_eq!(ascending, descending);
    }

    #[test]
    fn mixed_numbers_and_text_sort_to_a_permutation(
        rows in rows_strategy(),
        descending in any::<bool>(),
    ) {
        let registry = fields();
        let loose = registry.get("loose_score").expect("loose_score registered");
        let order = if descending { SortOrder::Descending } else { SortOrder::Ascending };

        let mut sorted: Vec<u32> = apply_sort(rows.iter().collect(), loose, order)
            .into_iter()
            .map(|r| r.id)
            .collect();
        sorted.sort_unstable();
        let expected: Vec<u32> = rows.iter().map(|r| r.id).collect();

        prop_assert_eq!(sorted, expected);
    }
}

// ===== Property 4: Drag law =====

proptest! {
    #[test]
    fn touched_rows_take_paint_value(
        preselected in prop::collection::btree_set(0u32..10, 0..6),
        start in 0u32..10,
        visits in prop::collection::vec(0u32..10, 0..20),
        release_outside in any::<bool>(),
    ) {
        let mut selection = Selection::new();
        for id in &preselected {
            selection.toggle(*id);
        }
        let paint = !selection.contains(&start);

        selection.handle(PointerEvent::Down(start));
        for id in &visits {
            selection.handle(PointerEvent::Enter(*id));
        }
        selection.handle(if release_outside {
            PointerEvent::LeaveContainer
        } else {
            PointerEvent::Up
        });

        let touched: BTreeSet<u32> = visits.iter().copied().chain([start]).collect();
        for id in 0u32..10 {
            let expected = if touched.contains(&id) {
                paint
            } else {
                preselected.contains(&id)
            };
            prop_assert_eq!(selection.contains(&id), expected, "row {}", id);
        }
        prop_assert!(!selection.drag().is_dragging());
    }
}
