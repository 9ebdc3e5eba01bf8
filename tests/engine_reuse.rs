//! The engine works over any `Identify` type: text ids, sparse fields and
//! replaced collections.

use exlv::model::{FieldRegistry, FieldSpec, FieldValue, Identify, SortError};
use exlv::state::{ClauseDraft, ListView, NoopActions, SortOrder};
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct Exam {
    code: String,
    attributes: HashMap<&'static str, FieldValue>,
}

impl Identify for Exam {
    type Id = String;

    fn id(&self) -> &String {
        &self.code
    }
}

fn exam(code: &str, attrs: &[(&'static str, FieldValue)]) -> Exam {
    Exam {
        code: code.to_string(),
        attributes: attrs.iter().cloned().collect(),
    }
}

fn attr(name: &'static str) -> FieldSpec<Exam> {
    FieldSpec::new(name, name, move |e: &Exam| {
        e.attributes.get(name).cloned().unwrap_or(FieldValue::Missing)
    })
}

fn view(exams: Vec<Exam>) -> ListView<Exam> {
    let fields: FieldRegistry<Exam> = [attr("title"), attr("duration")].into_iter().collect();
    ListView::new(exams, fields.clone(), fields)
}

#[test]
fn missing_values_sort_as_empty_text() {
    let mut list = view(vec![
        exam("b", &[("title", FieldValue::from("Biology"))]),
        exam("none", &[]),
        exam("a", &[("title", FieldValue::from("Algebra"))]),
    ]);

    assert_eq!(list.visible_ids(), vec!["none", "a", "b"]);
}

#[test]
fn numbers_sort_numerically() {
    let mut list = view(vec![
        exam("x", &[("duration", FieldValue::Number(90.0))]),
        exam("y", &[("duration", FieldValue::Number(45.0))]),
        exam("z", &[("duration", FieldValue::Number(120.0))]),
    ]);
    list.set_sort("duration", SortOrder::Ascending).expect("sortable");

    assert_eq!(list.visible_ids(), vec!["y", "x", "z"]);
}

#[test]
fn greater_fails_for_values_without_a_number() {
    let mut list = view(vec![
        exam("x", &[("duration", FieldValue::Number(90.0))]),
        exam("y", &[("duration", FieldValue::from("long"))]),
        exam("z", &[]),
    ]);
    list.add_filter(ClauseDraft::new("duration", "greater", "60"))
        .expect("complete clause");

    assert_eq!(list.visible_ids(), vec!["x"]);
}

#[test]
fn unknown_sort_field_is_rejected() {
    let mut list = view(Vec::new());
    assert_eq!(
        list.set_sort("author", SortOrder::Ascending),
        Err(SortError::UnknownField("author".to_string()))
    );
}

#[test]
fn replacing_entities_recomputes() {
    let mut list = view(vec![exam("a", &[("title", FieldValue::from("Algebra"))])]);
    list.add_filter(ClauseDraft::new("title", "contains", "bio"))
        .expect("complete clause");
    assert!(list.visible_ids().is_empty());

    list.set_entities(vec![exam("b", &[("title", FieldValue::from("Biology"))])]);

    assert_eq!(list.visible_ids(), vec!["b"]);
}

#[test]
fn noop_actions_still_clear_selection() {
    let mut list = view(vec![exam("a", &[]), exam("b", &[])]);
    list.toggle("a".to_string());

    list.trigger_action(&mut NoopActions);

    assert!(list.selection().is_empty());
    assert_eq!(list.total(), 2);
}
