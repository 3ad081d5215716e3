//! IPC harvesting from simulator logs.
//!
//! Scans a directory of simulator output for `IPC:` lines and flattens the
//! values into a `summary.txt` next to the logs.

/// Regex extraction of `IPC:` values.
pub mod scan;
/// Directory walk and summary file writer.
pub mod summary;

pub use scan::{IpcSample, extract_ipc};
pub use summary::{ListingOrder, LogEntry, SUMMARY_FILE_NAME, collect, render, write_summary};
