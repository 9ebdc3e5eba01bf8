//! File input and output.

use crate::model::error::InputError;
use crate::model::Record;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::info;

/// Read a whole collection file.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist.
/// Returns `InputError::Io` for other I/O errors.
pub fn read_file(path: impl AsRef<Path>) -> Result<String, InputError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(InputError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    info!(path = %path.display(), bytes = content.len(), "Read input file");
    Ok(content)
}

/// Write records as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns `InputError::Io` if the file cannot be written.
pub fn write_records(path: impl AsRef<Path>, records: &[Record]) -> Result<(), InputError> {
    let path = path.as_ref();
    let array = Value::Array(
        records
            .iter()
            .map(|record| Value::Object(record.attributes().clone()))
            .collect(),
    );
    let text = serde_json::to_string_pretty(&array).map_err(std::io::Error::other)?;
    fs::write(path, text)?;
    info!(path = %path.display(), count = records.len(), "Wrote surviving records");
    Ok(())
}
