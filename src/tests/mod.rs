//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests drive the TUI shell end to end through
//! `TuiApp<TestBackend>`.
