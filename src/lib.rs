//! Entity List Viewer (exlv)
//!
//! A generic list engine for identifiable entities (multi-field filtering,
//! field-aware sorting, drag-paint multi-selection and a selection-driven
//! action bar) plus a terminal viewer built on it.
//!
//! Follows the Pure Core / Impure Shell architecture: `model` and `state`
//! are pure, `source`, `config`, `logging` and `view` touch the outside world.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
