//! Directory-wide IPC summary.
//!
//! Every regular file in a log directory is scanned for `IPC:` values. The
//! summary lists each file name on its own line followed by one line per
//! value, and is written as `summary.txt` into the same directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Result, SweepError};
use crate::harvest::scan::{IpcSample, extract_ipc};

/// Name of the summary file written into the scanned directory.
pub const SUMMARY_FILE_NAME: &str = "summary.txt";

/// Order in which log files appear in the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingOrder {
    /// Whatever order the OS lists the directory in.
    #[default]
    AsListed,
    /// Lexicographic by file name; stable across machines.
    ByName,
}

/// IPC values harvested from one log file.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// File name, without the directory.
    pub file_name: String,
    /// Values in the order they occur in the file.
    pub samples: Vec<IpcSample>,
}

impl LogEntry {
    /// Scans `text` and pairs the result with `file_name`.
    pub fn from_text(file_name: impl Into<String>, text: &str) -> Self {
        Self {
            file_name: file_name.into(),
            samples: extract_ipc(text),
        }
    }

    /// Parsed values, in file order.
    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.value).collect()
    }
}

/// Scans every regular file in `dir`.
///
/// Sub-directories and other non-file entries are skipped with a warning,
/// as is an existing `summary.txt`. Files are decoded as UTF-8, replacing
/// invalid sequences.
///
/// # Errors
///
/// Fails if the directory cannot be listed or any file cannot be read; the
/// error names the offending path.
pub fn collect(dir: &Path, order: ListingOrder) -> Result<Vec<LogEntry>> {
    let list_err = |source: io::Error| SweepError::ListDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if file_name == SUMMARY_FILE_NAME {
            continue;
        }
        let path = entry.path();
        let metadata = fs::metadata(&path).map_err(|source| SweepError::Read {
            path: path.clone(),
            source,
        })?;
        if !metadata.is_file() {
            warn!(path = %path.display(), "skipping non-file entry");
            continue;
        }
        files.push((file_name, path));
    }

    if order == ListingOrder::ByName {
        files.sort_by(|a, b| a.0.cmp(&b.0));
    }

    files
        .into_iter()
        .map(|(file_name, path)| {
            let bytes = fs::read(&path).map_err(|source| SweepError::Read {
                path: path.clone(),
                source,
            })?;
            let entry = LogEntry::from_text(file_name, &String::from_utf8_lossy(&bytes));
            debug!(file = %entry.file_name, samples = entry.samples.len(), "scanned log");
            Ok(entry)
        })
        .collect()
}

/// Summary text: each file name followed by its values, one per line.
pub fn render(entries: &[LogEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&entry.file_name);
        out.push('\n');
        for sample in &entry.samples {
            out.push_str(&sample.text);
            out.push('\n');
        }
    }
    out
}

/// Scans `dir` and writes (or overwrites) `dir/summary.txt`.
///
/// Returns the path of the summary file.
///
/// # Errors
///
/// Propagates [`collect`] failures and fails if the summary cannot be written.
pub fn write_summary(dir: &Path, order: ListingOrder) -> Result<PathBuf> {
    let entries = collect(dir, order)?;
    let path = dir.join(SUMMARY_FILE_NAME);
    fs::write(&path, render(&entries)).map_err(|source| SweepError::Write {
        path: path.clone(),
        source,
    })?;
    info!(
        files = entries.len(),
        samples = entries.iter().map(|e| e.samples.len()).sum::<usize>(),
        summary = %path.display(),
        "wrote IPC summary"
    );
    Ok(path)
}
