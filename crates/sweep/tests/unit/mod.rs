//! # Unit Components
//!
//! Tests grouped by library module.


/// IPC extraction and summary writing.
///
/// Covers the `IPC:` pattern, directory ordering, skipped entries, and
/// idempotent re-runs.
pub mod harvest;
