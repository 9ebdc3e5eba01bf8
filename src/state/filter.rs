//! Filter engine.
//!
//! A clause set is a conjunction: an entity passes iff it satisfies every
//! clause. Evaluation is pure; the only state is the [`FilterSet`] that
//! guards which clauses may exist.

use crate::model::{coerce_number, ClauseError, FieldRegistry, FieldValue};
use std::fmt;
use tracing::debug;

// ===== FilterOperation =====

/// Comparison applied by a clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FilterOperation {
    /// Case-insensitive equality of the stringified value.
    Equals,
    /// Case-insensitive substring test on the stringified value.
    Contains,
    /// Numeric `value > operand`.
    Greater,
    /// Numeric `value < operand`.
    Less,
    /// Unrecognised operation name. Always satisfied.
    Other(String),
}

impl FilterOperation {
    /// The operations offered by the filter form, in display order.
    pub const KNOWN: [FilterOperation; 4] = [
        FilterOperation::Equals,
        FilterOperation::Contains,
        FilterOperation::Greater,
        FilterOperation::Less,
    ];

    /// Parse an operation name (case-insensitive). Unknown names map to `Other`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "equals" => FilterOperation::Equals,
            "contains" => FilterOperation::Contains,
            "greater" => FilterOperation::Greater,
            "less" => FilterOperation::Less,
            _ => FilterOperation::Other(raw.trim().to_string()),
        }
    }

    /// Canonical name.
    pub fn as_str(&self) -> &str {
        match self {
            FilterOperation::Equals => "equals",
            FilterOperation::Contains => "contains",
            FilterOperation::Greater => "greater",
            FilterOperation::Less => "less",
            FilterOperation::Other(name) => name,
        }
    }

    /// Short symbol for compact display.
    pub fn symbol(&self) -> &str {
        match self {
            FilterOperation::Equals => "=",
            FilterOperation::Contains => "~",
            FilterOperation::Greater => ">",
            FilterOperation::Less => "<",
            FilterOperation::Other(name) => name,
        }
    }

    /// Evaluate this operation for one field value.
    ///
    /// Numeric operations fail whenever either side has no numeric reading.
    pub fn evaluate(&self, value: &FieldValue, operand: &str) -> bool {
        match self {
            FilterOperation::Equals => {
                value.display_string().to_lowercase() == operand.to_lowercase()
            }
            FilterOperation::Contains => value
                .display_string()
                .to_lowercase()
                .contains(&operand.to_lowercase()),
            FilterOperation::Greater => match (value.as_number(), coerce_number(operand)) {
                (Some(lhs), Some(rhs)) => lhs > rhs,
                _ => false,
            },
            FilterOperation::Less => match (value.as_number(), coerce_number(operand)) {
                (Some(lhs), Some(rhs)) => lhs < rhs,
                _ => false,
            },
            FilterOperation::Other(_) => true,
        }
    }
}

impl fmt::Display for FilterOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== ClauseDraft =====

/// Unvalidated clause as entered by a user or parsed from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClauseDraft {
    /// Field key.
    pub field: String,
    /// Operation name.
    pub operation: String,
    /// Operand.
    pub value: String,
}

impl ClauseDraft {
    /// Create a draft from its three parts.
    pub fn new(
        field: impl Into<String>,
        operation: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            operation: operation.into(),
            value: value.into(),
        }
    }

    /// Parse `field:operation:value`. The value may itself contain colons.
    pub fn parse_spec(spec: &str) -> Result<Self, ClauseError> {
        let mut parts = spec.splitn(3, ':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(field), Some(operation), Some(value)) => Ok(Self::new(field, operation, value)),
            _ => Err(ClauseError::Malformed(spec.to_string())),
        }
    }

    /// Check that all three parts are present and the field is filterable.
    fn validate<T>(self, fields: &FieldRegistry<T>) -> Result<(String, FilterOperation, String), ClauseError> {
        let field = self.field.trim();
        if field.is_empty() {
            return Err(ClauseError::EmptyField);
        }
        if self.operation.trim().is_empty() {
            return Err(ClauseError::EmptyOperation);
        }
        if self.value.is_empty() {
            return Err(ClauseError::EmptyValue);
        }
        if fields.get(field).is_none() {
            return Err(ClauseError::UnknownField(field.to_string()));
        }
        Ok((
            field.to_string(),
            FilterOperation::parse(&self.operation),
            self.value,
        ))
    }
}

// ===== FilterClause =====

/// Identifier of an active clause. Unique within one [`FilterSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClauseId(u64);

impl ClauseId {
    /// Raw value.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// A validated, immutable filter clause.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterClause {
    id: ClauseId,
    field: String,
    operation: FilterOperation,
    value: String,
}

impl FilterClause {
    /// Clause identifier.
    pub fn id(&self) -> ClauseId {
        self.id
    }

    /// Field key.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Operation.
    pub fn operation(&self) -> &FilterOperation {
        &self.operation
    }

    /// Operand.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether `entity` satisfies this clause.
    ///
    /// A field that has since left the registry reads as missing.
    pub fn matches<T>(&self, entity: &T, fields: &FieldRegistry<T>) -> bool {
        let value = fields
            .get(&self.field)
            .map(|spec| spec.read(entity))
            .unwrap_or(FieldValue::Missing);
        self.operation.evaluate(&value, &self.value)
    }
}

impl fmt::Display for FilterClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} \"{}\"", self.field, self.operation, self.value)
    }
}

// ===== FilterSet =====

/// The active clause set.
///
/// Clauses enter only through [`FilterSet::add`], which rejects incomplete
/// drafts, and leave only by removal. `revision` changes on every mutation.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    clauses: Vec<FilterClause>,
    next_id: u64,
    revision: u64,
}

impl FilterSet {
    /// Empty clause set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `draft` against `fields` and add it.
    pub fn add<T>(&mut self, draft: ClauseDraft, fields: &FieldRegistry<T>) -> Result<ClauseId, ClauseError> {
        let (field, operation, value) = draft.validate(fields)?;
        let id = ClauseId(self.next_id);
        self.next_id += 1;
        debug!(clause = id.get(), %field, %operation, %value, "Filter clause added");
        self.clauses.push(FilterClause {
            id,
            field,
            operation,
            value,
        });
        self.revision += 1;
        Ok(id)
    }

    /// Remove a clause by id.
    pub fn remove(&mut self, id: ClauseId) -> Option<FilterClause> {
        let idx = self.clauses.iter().position(|c| c.id == id)?;
        self.revision += 1;
        Some(self.clauses.remove(idx))
    }

    /// Remove the most recently added clause.
    pub fn remove_last(&mut self) -> Option<FilterClause> {
        let clause = self.clauses.pop()?;
        self.revision += 1;
        Some(clause)
    }

    /// Remove every clause. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.clauses.len();
        if removed > 0 {
            self.clauses.clear();
            self.revision += 1;
        }
        removed
    }

    /// Active clauses in insertion order.
    pub fn as_slice(&self) -> &[FilterClause] {
        &self.clauses
    }

    /// Iterate active clauses.
    pub fn iter(&self) -> impl Iterator<Item = &FilterClause> {
        self.clauses.iter()
    }

    /// Number of active clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// True when no clause is active.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Mutation counter, used as a memoization key.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

// ===== Evaluation =====

/// Whether `entity` satisfies every clause.
pub fn satisfies_all<T>(entity: &T, clauses: &[FilterClause], fields: &FieldRegistry<T>) -> bool {
    clauses.iter().all(|clause| clause.matches(entity, fields))
}

/// Indices of the entities that satisfy every clause, in input order.
pub fn matching_indices<T>(entities: &[T], clauses: &[FilterClause], fields: &FieldRegistry<T>) -> Vec<usize> {
    entities
        .iter()
        .enumerate()
        .filter(|(_, entity)| satisfies_all(*entity, clauses, fields))
        .map(|(idx, _)| idx)
        .collect()
}

/// Entities that satisfy every clause, in input order.
///
/// With no clauses this returns every entity.
pub fn apply_filters<'a, T>(
    entities: &'a [T],
    clauses: &[FilterClause],
    fields: &FieldRegistry<T>,
) -> Vec<&'a T> {
    entities
        .iter()
        .filter(|entity| satisfies_all(*entity, clauses, fields))
        .collect()
}

// ===== Tests =====

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
