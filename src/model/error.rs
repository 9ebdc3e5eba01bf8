//! Error types for exlv.
//!
//! This module defines the error taxonomy using `thiserror`. Domain errors
//! compose into [`AppError`] via `From`, so call sites propagate with `?`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error for the binary
//!   - [`InputError`] - Reading the entity collection (file, stdin, JSON)
//!   - [`ClauseError`] - A filter clause rejected at the add boundary
//!   - [`SortError`] - A sort field outside the sortable registry
//!   - `std::io::Error` - Terminal failures
//!
//! # Recovery Strategy
//!
//! Malformed entries inside an otherwise readable collection are **non-fatal**:
//! they are logged and skipped (see `source`). Clause and sort errors raised
//! from interactive input are shown in the status line and the list keeps its
//! previous state. Input and terminal errors are fatal.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// The entity collection could not be read at all.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// A filter supplied on the command line was rejected.
    #[error("Invalid filter: {0}")]
    Clause(#[from] ClauseError),

    /// A sort field supplied on the command line was rejected.
    #[error("Invalid sort: {0}")]
    Sort(#[from] SortError),

    /// Terminal or output file error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading the entity collection.
#[derive(Debug, Error)]
pub enum InputError {
    /// The given file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was attempted.
        path: PathBuf,
    },

    /// No file argument and stdin is an interactive terminal.
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// The document looked like a JSON array but did not parse as one.
    #[error("Invalid JSON collection: {reason}")]
    InvalidJson {
        /// Parser message, including line and column.
        reason: String,
    },

    /// Any other I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A filter clause that cannot enter the active clause set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClauseError {
    /// No field was chosen.
    #[error("filter field is required")]
    EmptyField,
    /// No operation was chosen.
    #[error("filter operation is required")]
    EmptyOperation,
    /// No value was entered.
    #[error("filter value is required")]
    EmptyValue,
    /// The field is not in the filterable registry.
    #[error("'{0}' is not a filterable field")]
    UnknownField(String),
    /// Command-line clause text did not have the `field:op:value` shape.
    #[error("expected field:operation:value, got '{0}'")]
    Malformed(String),
}

/// A sort request that cannot be honoured.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// The field is not in the sortable registry.
    #[error("'{0}' is not a sortable field")]
    UnknownField(String),
}
