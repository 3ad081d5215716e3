//! Error definitions for the sweep tooling.
//!
//! Every filesystem failure carries the path that caused it so the CLI can
//! report which file aborted the run. Malformed log text is never an error;
//! it simply yields no samples.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SweepError>;

/// Failures raised while harvesting logs or emitting job scripts.
#[derive(Debug, Error)]
pub enum SweepError {
    /// The log directory could not be listed.
    #[error("could not list directory '{}': {source}", path.display())]
    ListDir {
        /// Directory being listed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A log or configuration file could not be read.
    #[error("could not read '{}': {source}", path.display())]
    Read {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// An output file could not be written.
    #[error("could not write '{}': {source}", path.display())]
    Write {
        /// File being written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The script output directory could not be created.
    #[error("could not create directory '{}': {source}", path.display())]
    CreateDir {
        /// Directory being created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The executable bit could not be set on a generated script.
    #[error("could not mark '{}' executable: {source}", path.display())]
    Permissions {
        /// Script whose mode was being changed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A sweep configuration file is not valid JSON for [`SweepConfig`](crate::SweepConfig).
    #[error("invalid sweep configuration '{}': {source}", path.display())]
    Config {
        /// Configuration file path.
        path: PathBuf,
        /// Parse error with line and column.
        source: serde_json::Error,
    },
}
