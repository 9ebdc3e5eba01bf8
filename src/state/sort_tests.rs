//! Tests for the sort engine.

use super::*;
use crate::model::FieldSpec;
use crate::test_harness::{item, item_fields, Item};

fn ids(items: &[&Item]) -> Vec<i64> {
    items.iter().map(|i| i.id).collect()
}

fn sorted_by(items: &[Item], field: &str, order: SortOrder) -> Vec<i64> {
    let fields = item_fields();
    let spec = fields.get(field).expect("registered field");
    ids(&apply_sort(items.iter().collect(), spec, order))
}

#[test]
fn numbers_sort_numerically_not_lexically() {
    let items = vec![
        item(1, "a", Some(10.0)),
        item(2, "b", Some(9.0)),
        item(3, "c", Some(100.0)),
    ];
    assert_eq!(sorted_by(&items, "score", SortOrder::Ascending), vec![2, 1, 3]);
}

#[test]
fn score_descending_scenario() {
    let items = vec![
        item(1, "a", Some(10.0)),
        item(2, "b", Some(5.0)),
        item(3, "c", Some(20.0)),
    ];
    assert_eq!(sorted_by(&items, "score", SortOrder::Descending), vec![3, 1, 2]);
}

#[test]
fn text_sort_ignores_case_at_first_level() {
    let items = vec![
        item(1, "banana", None),
        item(2, "Apple", None),
        item(3, "cherry", None),
    ];
    assert_eq!(sorted_by(&items, "name", SortOrder::Ascending), vec![2, 1, 3]);
}

#[test]
fn equal_keys_keep_input_order() {
    let items = vec![
        item(4, "same", Some(1.0)),
        item(2, "same", Some(1.0)),
        item(9, "same", Some(1.0)),
    ];
    assert_eq!(sorted_by(&items, "score", SortOrder::Ascending), vec![4, 2, 9]);
    assert_eq!(sorted_by(&items, "score", SortOrder::Descending), vec![4, 2, 9]);
}

#[test]
fn missing_value_compares_as_empty_text() {
    // score missing on 2: "" vs "5" compares as text, empty first.
    let items = vec![item(1, "a", Some(5.0)), item(2, "b", None)];
    assert_eq!(sorted_by(&items, "score", SortOrder::Ascending), vec![2, 1]);
    assert_eq!(sorted_by(&items, "score", SortOrder::Descending), vec![1, 2]);
}

#[test]
fn numeric_text_is_not_a_number_for_sorting() {
    assert_eq!(
        compare_values(&"10".into(), &"9".into()),
        Ordering::Less,
        "text compares as text even when it looks numeric"
    );
    assert_eq!(
        compare_values(&FieldValue::Number(10.0), &FieldValue::Number(9.0)),
        Ordering::Greater
    );
}

#[test]
fn descending_swaps_operands() {
    let a = FieldValue::from("alpha");
    let b = FieldValue::from("beta");
    assert_eq!(
        compare_directed(&a, &b, SortOrder::Descending),
        compare_values(&b, &a)
    );
}

#[test]
fn locale_compare_breaks_case_ties_lowercase_first() {
    assert_eq!(locale_compare("a", "A"), Ordering::Less);
    assert_eq!(locale_compare("A", "a"), Ordering::Greater);
    assert_eq!(locale_compare("abc", "abc"), Ordering::Equal);
    assert_eq!(locale_compare("Zeta", "alpha"), Ordering::Greater);
}

#[test]
fn sort_indices_matches_apply_sort() {
    let items = vec![
        item(1, "d", Some(3.0)),
        item(2, "c", Some(1.0)),
        item(3, "b", Some(2.0)),
    ];
    let fields = item_fields();
    let spec = fields.get("score").expect("registered");
    let mut indices = vec![0, 1, 2];
    sort_indices(&items, &mut indices, spec, SortOrder::Ascending);
    let by_index: Vec<i64> = indices.iter().map(|&i| items[i].id).collect();
    assert_eq!(by_index, sorted_by(&items, "score", SortOrder::Ascending));
}

#[test]
fn order_toggles_and_shows_arrow() {
    assert_eq!(SortOrder::default(), SortOrder::Ascending);
    assert_eq!(SortOrder::Ascending.toggled(), SortOrder::Descending);
    assert_eq!(SortOrder::Descending.arrow(), "▼");
}

fn raw_score() -> FieldSpec<FieldValue> {
    FieldSpec::new("score", "Score", |value: &FieldValue| value.clone())
}

/// Even rows hold numbers, odd rows hold the same numbers as text.
fn mixed_scores(count: usize) -> Vec<FieldValue> {
    (0..count)
        .map(|i| {
            if i % 2 == 0 {
                FieldValue::Number(i as f64)
            } else {
                FieldValue::Text(i.to_string())
            }
        })
        .collect()
}

#[test]
fn mixed_numbers_and_numeric_text_sort_without_panicking() {
    let values = mixed_scores(64);
    let spec = raw_score();

    for order in [SortOrder::Ascending, SortOrder::Descending] {
        let mut indices: Vec<usize> = (0..values.len()).collect();
        sort_indices(&values, &mut indices, &spec, order);

        let mut seen = indices.clone();
        seen.sort_unstable();
        assert_eq!(seen, (0..values.len()).collect::<Vec<_>>(), "{} keeps every row", order);
    }
}

#[test]
fn mixed_sort_is_deterministic() {
    let values = mixed_scores(40);
    let spec = raw_score();
    let sorted = |order| {
        apply_sort(values.iter().collect(), &spec, order)
            .into_iter()
            .map(FieldValue::display_string)
            .collect::<Vec<_>>()
    };
    assert_eq!(sorted(SortOrder::Ascending), sorted(SortOrder::Ascending));
    assert_eq!(sorted(SortOrder::Ascending).len(), 40);
}

#[test]
fn merge_sort_matches_std_stable_sort_for_total_orders() {
    let keys = [5, 3, 9, 3, 1, 5, 7, 0, 3, 9, 2, 5, 8, 1, 4, 6, 3, 0, 9, 7, 5, 2, 1];
    let tagged: Vec<(i32, usize)> = keys.iter().copied().zip(0..).collect();

    let mut expected = tagged.clone();
    expected.sort_by(|a, b| a.0.cmp(&b.0));

    let merged = merge_sort_by(tagged, &mut |a: &(i32, usize), b: &(i32, usize)| a.0.cmp(&b.0));
    assert_eq!(merged, expected);
}
