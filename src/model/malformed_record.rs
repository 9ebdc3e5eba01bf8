//! Collection entries that could not become records.
//!
//! Loading keeps going past a bad entry: it is reported here and skipped.

/// An entry of the input collection that was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRecord {
    index: usize,
    reason: String,
}

impl MalformedRecord {
    /// Create a new malformed record report.
    ///
    /// # Arguments
    ///
    /// * `index` - Array index, or 1-indexed line number for JSON Lines
    /// * `reason` - Human-readable reason
    pub fn new(index: usize, reason: impl Into<String>) -> Self {
        Self {
            index,
            reason: reason.into(),
        }
    }

    /// Position of the entry in the input.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Why the entry was skipped.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl std::fmt::Display for MalformedRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "entry {}: {}", self.index, self.reason)
    }
}
