//! Field values and field registries.
//!
//! Entities have no fixed schema. A list only ever touches the attributes a
//! caller registers, and every registered attribute carries an explicit
//! accessor, so there is no dynamic indexing into the entity.

use std::fmt;
use std::sync::Arc;

// ===== FieldValue =====

/// An attribute value as seen by the filter and sort engines.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// The entity has no such attribute.
    Missing,
    /// The attribute is present but null.
    Null,
    /// Boolean attribute.
    Bool(bool),
    /// Numeric attribute.
    Number(f64),
    /// Textual attribute.
    Text(String),
}

impl FieldValue {
    /// Stringified form used by `equals`/`contains` and by text sorting.
    ///
    /// Missing and null values stringify to the empty string. Numbers use
    /// the shortest representation that round-trips (`10`, `2.5`) and never
    /// switch to exponent form: `1e21` prints as `1000000000000000000000`.
    pub fn display_string(&self) -> String {
        match self {
            FieldValue::Missing | FieldValue::Null => String::new(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s.clone(),
        }
    }

    /// Numeric coercion used by `greater`/`less`.
    ///
    /// Returns `None` when the value has no numeric reading. Text is trimmed
    /// and parsed as a decimal float. Booleans read as 1 and 0.
    ///
    /// `Null` and empty text are not read as 0: like missing values they fail
    /// every `greater`/`less` comparison.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            FieldValue::Text(s) => coerce_number(s),
            FieldValue::Missing | FieldValue::Null => None,
        }
    }

    /// True for values that are numbers in their own right (not numeric text).
    pub fn is_number(&self) -> bool {
        matches!(self, FieldValue::Number(_))
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl<V: Into<FieldValue>> From<Option<V>> for FieldValue {
    fn from(value: Option<V>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Missing)
    }
}

/// Parse text as a number. Empty or whitespace-only text does not coerce.
pub fn coerce_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

// ===== FieldSpec =====

type Accessor<T> = Arc<dyn Fn(&T) -> FieldValue + Send + Sync>;

/// One registered attribute: its key, its human label and how to read it.
pub struct FieldSpec<T> {
    value: String,
    label: String,
    accessor: Accessor<T>,
}

impl<T> FieldSpec<T> {
    /// Register an attribute with an explicit accessor.
    pub fn new<F>(value: impl Into<String>, label: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&T) -> FieldValue + Send + Sync + 'static,
    {
        Self {
            value: value.into(),
            label: label.into(),
            accessor: Arc::new(accessor),
        }
    }

    /// Attribute key (the `value` of a `{value, label}` registry entry).
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Human-readable label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Read this attribute from an entity.
    pub fn read(&self, entity: &T) -> FieldValue {
        (self.accessor)(entity)
    }
}

impl<T> Clone for FieldSpec<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            label: self.label.clone(),
            accessor: Arc::clone(&self.accessor),
        }
    }
}

impl<T> fmt::Debug for FieldSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("value", &self.value)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

// ===== FieldRegistry =====

/// Ordered set of registered attributes.
///
/// Registration order matters: the first sortable field is the default sort.
/// Registering a key twice replaces the earlier entry in place.
pub struct FieldRegistry<T> {
    specs: Vec<FieldSpec<T>>,
}

impl<T> FieldRegistry<T> {
    /// Empty registry.
    pub fn new() -> Self {
        Self { specs: Vec::new() }
    }

    /// Builder-style registration.
    pub fn with(mut self, spec: FieldSpec<T>) -> Self {
        self.register(spec);
        self
    }

    /// Add or replace an attribute.
    pub fn register(&mut self, spec: FieldSpec<T>) {
        match self.position(spec.value()) {
            Some(idx) => self.specs[idx] = spec,
            None => self.specs.push(spec),
        }
    }

    /// Look up an attribute by key.
    pub fn get(&self, value: &str) -> Option<&FieldSpec<T>> {
        self.specs.iter().find(|spec| spec.value == value)
    }

    /// Position of an attribute in registration order.
    pub fn position(&self, value: &str) -> Option<usize> {
        self.specs.iter().position(|spec| spec.value == value)
    }

    /// First registered attribute.
    pub fn first(&self) -> Option<&FieldSpec<T>> {
        self.specs.first()
    }

    /// Attribute at a registration index.
    pub fn at(&self, index: usize) -> Option<&FieldSpec<T>> {
        self.specs.get(index)
    }

    /// Iterate in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec<T>> {
        self.specs.iter()
    }

    /// Number of registered attributes.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<T> Default for FieldRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for FieldRegistry<T> {
    fn clone(&self) -> Self {
        Self {
            specs: self.specs.clone(),
        }
    }
}

impl<T> fmt::Debug for FieldRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.specs.iter()).finish()
    }
}

impl<T> FromIterator<FieldSpec<T>> for FieldRegistry<T> {
    fn from_iter<I: IntoIterator<Item = FieldSpec<T>>>(iter: I) -> Self {
        let mut registry = Self::new();
        for spec in iter {
            registry.register(spec);
        }
        registry
    }
}

// ===== Tests =====
