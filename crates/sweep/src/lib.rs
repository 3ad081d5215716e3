//! SMTSIM design-space sweep tooling.
//!
//! This crate prepares simulator runs and harvests their results. It provides:
//! 1. **Configuration:** Sweep settings (paths, workloads, core parameter table, scheduler preamble).
//! 2. **Jobs:** Rendering one shell script per (workload, configuration) pair plus a driver script.
//! 3. **Harvest:** Scanning simulator logs for `IPC:` values and writing a flat `summary.txt`.
//!
//! The simulator itself is an external binary; nothing here links against it.

/// Sweep configuration (defaults, JSON loading, scheduler and naming options).
pub mod config;
/// Error type shared by the harvest and job pipelines.
pub mod error;
/// IPC log scanning and summary writing.
pub mod harvest;
/// Core parameter table, script rendering, and batch emission.
pub mod jobs;

/// Root configuration type; use `SweepConfig::default()` or load from JSON.
pub use crate::config::SweepConfig;
/// Crate error and result alias.
pub use crate::error::{Result, SweepError};
/// Simulated-core parameter set; one per configuration variant.
pub use crate::jobs::configuration::CoreConfig;
