//! Entity collection input.
//!
//! A collection exported from the dashboard API arrives either as one JSON
//! array or as JSON Lines (one object per line):
//! - File loading for a path argument
//! - Stdin for piped input
//!
//! Content whose first non-whitespace byte is `[` is read as an array.
//! Entries that cannot become records are reported and skipped.

use crate::model::error::InputError;
use crate::model::{EntityId, Identify, MalformedRecord, Record};
use serde_json::Value;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{info, warn};

pub mod file;
pub mod stdin;

pub use file::{read_file, write_records};
pub use stdin::read_stdin;

/// Outcome of loading a collection.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Records in input order.
    pub records: Vec<Record>,
    /// Entries that were skipped.
    pub malformed: Vec<MalformedRecord>,
}

/// Load a collection from a file, or from stdin when no path is given.
///
/// # Errors
///
/// Returns `InputError::NoInput` if no file is provided and stdin is a TTY.
/// Returns `InputError::FileNotFound` if the file does not exist.
/// Returns `InputError::InvalidJson` if an array document does not parse.
pub fn load_records(file: Option<PathBuf>, id_field: &str) -> Result<LoadReport, InputError> {
    let content = match file {
        Some(path) => read_file(path)?,
        None => read_stdin()?,
    };
    parse_records(&content, id_field)
}

/// Parse a collection document.
///
/// Array entries are reported by 0-based index, JSON Lines entries by
/// 1-based line number. Later duplicates of an id are skipped.
pub fn parse_records(content: &str, id_field: &str) -> Result<LoadReport, InputError> {
    let entries: Vec<(usize, Result<Value, String>)> = if content.trim_start().starts_with('[') {
        let values: Vec<Value> = serde_json::from_str(content)
            .map_err(|e| InputError::InvalidJson { reason: e.to_string() })?;
        values.into_iter().enumerate().map(|(idx, v)| (idx, Ok(v))).collect()
    } else {
        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                (
                    idx + 1,
                    serde_json::from_str::<Value>(line).map_err(|e| e.to_string()),
                )
            })
            .collect()
    };

    let mut report = LoadReport::default();
    let mut seen: HashSet<EntityId> = HashSet::new();

    for (index, parsed) in entries {
        let record = parsed.and_then(|value| Record::from_value(value, id_field).map_err(|e| e.to_string()));
        match record {
            Ok(record) if !seen.insert(record.id().clone()) => {
                let malformed = MalformedRecord::new(index, format!("duplicate id {}", record.id()));
                warn!(index, id = %record.id(), "Skipping duplicate record");
                report.malformed.push(malformed);
            }
            Ok(record) => report.records.push(record),
            Err(reason) => {
                warn!(index, %reason, "Skipping malformed record");
                report.malformed.push(MalformedRecord::new(index, reason));
            }
        }
    }

    info!(
        records = report.records.len(),
        malformed = report.malformed.len(),
        "Collection loaded"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(report: &LoadReport) -> Vec<EntityId> {
        report.records.iter().map(|r| r.id().clone()).collect()
    }

    #[test]
    fn parses_json_array() {
        let report = parse_records(r#"[{"id": 1, "name": "A"}, {"id": "q-2"}]"#, "id")
            .expect("valid array");
        assert_eq!(
            ids(&report),
            vec![EntityId::Int(1), EntityId::Text("q-2".to_string())]
        );
        assert!(report.malformed.is_empty());
    }

    #[test]
    fn parses_json_lines_skipping_blank_lines() {
        let content = "{\"id\": 1}\n\n{\"id\": 2}\n";
        let report = parse_records(content, "id").expect("valid lines");
        assert_eq!(ids(&report), vec![EntityId::Int(1), EntityId::Int(2)]);
    }

    #[test]
    fn bad_line_is_reported_and_skipped() {
        let content = "{\"id\": 1}\nnot json\n{\"name\": \"no id\"}\n{\"id\": 4}";
        let report = parse_records(content, "id").expect("lines parse");
        assert_eq!(ids(&report), vec![EntityId::Int(1), EntityId::Int(4)]);
        let lines: Vec<usize> = report.malformed.iter().map(|m| m.index()).collect();
        assert_eq!(lines, vec![2, 3]);
        assert_eq!(report.malformed[1].reason(), "missing id field 'id'");
    }

    #[test]
    fn array_entries_that_are_not_objects_are_skipped() {
        let report = parse_records(r#"[{"id": 1}, 5, {"id": 2}]"#, "id").expect("valid array");
        assert_eq!(ids(&report), vec![EntityId::Int(1), EntityId::Int(2)]);
        assert_eq!(report.malformed[0].index(), 1);
        assert_eq!(report.malformed[0].reason(), "entry is not a JSON object");
    }

    #[test]
    fn later_duplicates_are_skipped() {
        let report = parse_records(r#"[{"id": 1, "v": "a"}, {"id": 1, "v": "b"}]"#, "id")
            .expect("valid array");
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].field("v").display_string(), "a");
        assert_eq!(report.malformed[0].reason(), "duplicate id 1");
    }

    #[test]
    fn broken_array_is_invalid_json() {
        let err = parse_records("[{\"id\": 1},", "id").unwrap_err();
        assert!(matches!(err, InputError::InvalidJson { .. }));
    }

    #[test]
    fn custom_id_field() {
        let report = parse_records(r#"{"code": "EX-9"}"#, "code").expect("valid line");
        assert_eq!(ids(&report), vec![EntityId::Text("EX-9".to_string())]);
    }

    #[test]
    fn empty_input_is_empty_collection() {
        let report = parse_records("  \n", "id").expect("empty is fine");
        assert!(report.records.is_empty());
        assert!(report.malformed.is_empty());
    }
}
