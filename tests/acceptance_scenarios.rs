//! Acceptance scenarios for the list engine, driven through the public API.
//!
//! A: sort by score descending
//! B: case-insensitive `contains` filter
//! C: drag-paint selection across rows
//! D: bulk delete clears the selection regardless of outcome

use exlv::model::{FieldRegistry, FieldSpec, FieldValue, Identify};
use exlv::state::{
    ActionBar, ActionOutcome, ClauseDraft, Hooks, ListView, PointerEvent, Presentation, SortOrder,
};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
struct Question {
    id: i64,
    name: String,
    score: Option<f64>,
}

impl Identify for Question {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }
}

fn question(id: i64, name: &str, score: Option<f64>) -> Question {
    Question {
        id,
        name: name.to_string(),
        score,
    }
}

fn fields() -> FieldRegistry<Question> {
    FieldRegistry::new()
        .with(FieldSpec::new("name", "Name", |q: &Question| {
            FieldValue::from(q.name.as_str())
        }))
        .with(FieldSpec::new("score", "Score", |q: &Question| {
            FieldValue::from(q.score)
        }))
}

fn list(entities: Vec<Question>) -> ListView<Question> {
    ListView::new(entities, fields(), fields())
}

#[test]
fn scenario_a_sort_by_score_descending() {
    let mut view = list(vec![
        question(1, "a", Some(10.0)),
        question(2, "b", Some(5.0)),
        question(3, "c", Some(20.0)),
    ]);

    view.set_sort("score", SortOrder::Descending)
        .expect("score is sortable");

    assert_eq!(view.visible_ids(), vec![3, 1, 2]);
}

#[test]
fn scenario_b_contains_is_case_insensitive() {
    let mut view = list(vec![
        question(1, "Ana Smith", None),
        question(2, "Bob", None),
    ]);

    view.add_filter(ClauseDraft::new("name", "contains", "ana"))
        .expect("complete clause");

    assert_eq!(view.visible_ids(), vec![1]);
}

#[test]
fn scenario_b_incomplete_clause_is_rejected() {
    let mut view = list(vec![question(1, "Ana Smith", None)]);

    let result = view.add_filter(ClauseDraft::new("name", "", "ana"));

    assert!(result.is_err());
    assert!(view.filters().is_empty());
}

#[test]
fn scenario_c_drag_paints_rows() {
    let mut view = list((5..=8).map(|id| question(id, "q", None)).collect());

    view.pointer(PointerEvent::Down(5));
    view.pointer(PointerEvent::Enter(6));
    view.pointer(PointerEvent::Enter(7));
    view.pointer(PointerEvent::Up);

    assert_eq!(view.selection().state().to_vec(), vec![5, 6, 7]);
    assert_eq!(view.action_bar(), ActionBar::BulkDelete { count: 3 });
}

#[test]
fn scenario_c_release_outside_ends_gesture() {
    let mut view = list((5..=8).map(|id| question(id, "q", None)).collect());

    view.pointer(PointerEvent::Down(5));
    view.pointer(PointerEvent::Enter(6));
    view.pointer(PointerEvent::LeaveContainer);
    view.pointer(PointerEvent::Enter(7));

    assert_eq!(view.selection().state().to_vec(), vec![5, 6]);
}

#[test]
fn scenario_d_bulk_delete_clears_selection() {
    let mut view = list((5..=8).map(|id| question(id, "q", None)).collect());
    for id in [5, 6, 7] {
        view.toggle(id);
    }

    let received = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&received);
    // The handler ignores every id: the backend "failed".
    let mut hooks = Hooks::<i64>::new().on_bulk_delete(move |ids: &[i64]| {
        sink.borrow_mut().extend_from_slice(ids);
    });

    let outcome = view.trigger_action(&mut hooks);

    assert_eq!(outcome, ActionOutcome::BulkDeleted(vec![5, 6, 7]));
    assert_eq!(*received.borrow(), vec![5, 6, 7]);
    assert!(view.selection().is_empty());
    assert_eq!(view.action_bar(), ActionBar::Add);
    assert_eq!(view.total(), 4, "the engine leaves entities to the caller");
}

#[test]
fn empty_selection_requests_add() {
    let mut view = list(vec![question(1, "q", None)]);
    let added = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&added);
    let mut hooks = Hooks::<i64>::new().on_add(move || *counter.borrow_mut() += 1);

    let outcome = view.trigger_action(&mut hooks);

    assert_eq!(outcome, ActionOutcome::AddRequested);
    assert_eq!(*added.borrow(), 1);
}

#[test]
fn no_matches_is_a_distinct_presentation() {
    let mut view = list(vec![question(1, "Ana", None)]);
    view.add_filter(ClauseDraft::new("name", "equals", "nobody"))
        .expect("complete clause");

    let presentation = view.present(|q| q.name.clone());

    assert_eq!(presentation, Presentation::NoMatches);
}

#[test]
fn presented_rows_carry_checkbox_state() {
    let mut view = list(vec![
        question(1, "Ana", Some(1.0)),
        question(2, "Bob", Some(2.0)),
    ]);
    view.toggle(2);

    let Presentation::Rows(rows) = view.present(|q| q.name.clone()) else {
        panic!("rows expected");
    };

    let summary: Vec<(i64, bool, String)> = rows
        .into_iter()
        .map(|row| (row.id, row.checked, row.content))
        .collect();
    assert_eq!(
        summary,
        vec![(1, false, "Ana".to_string()), (2, true, "Bob".to_string())]
    );
}
