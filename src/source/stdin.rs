//! Stdin input for piped collections.
//!
//! `curl .../exams | exlv` reads the whole document from stdin. An
//! interactive stdin is rejected so the viewer never blocks waiting for a
//! user who forgot to pipe data.

use crate::model::error::InputError;
use std::io::{IsTerminal, Read};

/// Read all of stdin.
///
/// # Errors
///
/// Returns `InputError::NoInput` if stdin is a TTY.
/// Returns `InputError::Io` for read errors.
pub fn read_stdin() -> Result<String, InputError> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(InputError::NoInput);
    }
    read_all(stdin.lock())
}

/// Read a reader to the end as UTF-8.
pub fn read_all<R: Read>(mut reader: R) -> Result<String, InputError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(content)
}
