//! Sort engine.
//!
//! One field, one direction. Numbers compare numerically, everything else
//! compares as text under [`locale_compare`]. Descending order swaps the
//! operands handed to the comparator instead of reversing its result.

use crate::model::{FieldSpec, FieldValue};
use std::cmp::Ordering;
use std::fmt;

// ===== SortOrder =====

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortOrder {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Arrow used in headers.
    pub fn arrow(self) -> &'static str {
        match self {
            SortOrder::Ascending => "▲",
            SortOrder::Descending => "▼",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => f.write_str("ascending"),
            SortOrder::Descending => f.write_str("descending"),
        }
    }
}

// ===== SortConfig =====

/// The single active sort.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortConfig {
    /// Field key from the sortable registry.
    pub field: String,
    /// Direction.
    pub order: SortOrder,
}

impl SortConfig {
    /// Sort by `field` in `order`.
    pub fn new(field: impl Into<String>, order: SortOrder) -> Self {
        Self {
            field: field.into(),
            order,
        }
    }
}

// ===== Comparators =====

/// Compare two field values in ascending sense.
///
/// When both are numbers the result is the sign of `a - b` (a NaN difference
/// counts as equal). Otherwise both sides are stringified, so a missing value
/// compares as the empty string.
pub fn compare_values(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a, b) {
        (FieldValue::Number(x), FieldValue::Number(y)) => {
            let diff = x - y;
            if diff > 0.0 {
                Ordering::Greater
            } else if diff < 0.0 {
                Ordering::Less
            } else {
                Ordering::Equal
            }
        }
        _ => locale_compare(&a.display_string(), &b.display_string()),
    }
}

/// Compare with direction applied by operand order.
pub fn compare_directed(a: &FieldValue, b: &FieldValue, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Ascending => compare_values(a, b),
        SortOrder::Descending => compare_values(b, a),
    }
}

/// Human-oriented string comparison.
///
/// Letters compare without regard to case first; among strings that differ
/// only by case, lowercase sorts before uppercase at the first differing
/// character. Remaining ties fall back to code point order.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);
    folded_a
        .cmp(folded_b)
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

fn case_order(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}

// ===== Sorting =====

/// Sort entity references by one field. Stable.
pub fn apply_sort<'a, T>(entities: Vec<&'a T>, field: &FieldSpec<T>, order: SortOrder) -> Vec<&'a T> {
    let keyed: Vec<(FieldValue, &'a T)> = entities
        .into_iter()
        .map(|entity| (field.read(entity), entity))
        .collect();
    merge_sort_by(keyed, &mut |(a, _), (b, _)| compare_directed(a, b, order))
        .into_iter()
        .map(|(_, entity)| entity)
        .collect()
}

/// Sort a list of indices into `entities` by one field. Stable.
pub fn sort_indices<T>(entities: &[T], indices: &mut Vec<usize>, field: &FieldSpec<T>, order: SortOrder) {
    let keyed: Vec<(FieldValue, usize)> = indices
        .iter()
        .filter_map(|&idx| entities.get(idx).map(|entity| (field.read(entity), idx)))
        .collect();
    *indices = merge_sort_by(keyed, &mut |(a, _), (b, _)| compare_directed(a, b, order))
        .into_iter()
        .map(|(_, idx)| idx)
        .collect();
}

/// Stable top-down merge sort.
///
/// Accepts comparators that are not total orders, such as [`compare_values`]
/// over a field mixing numbers and numeric text (`9 < 10`, `"10" < "5"`,
/// `"5" < "9"`). The result is always a permutation of the input.
fn merge_sort_by<E, F>(items: Vec<E>, compare: &mut F) -> Vec<E>
where
    F: FnMut(&E, &E) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }
    let mut left = items;
    let right = left.split_off(left.len() / 2);
    let left = merge_sort_by(left, compare);
    let right = merge_sort_by(right, compare);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(r, l) == Ordering::Less,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }
    merged
}

// ===== Tests =====

#[cfg(test)]
#[path = "sort_tests.rs"]
mod tests;
