//! Configuration for a sweep of simulator jobs.
//!
//! This module defines the settings the job-script generator needs. It provides:
//! 1. **Defaults:** Baseline paths, workload list, and run lengths.
//! 2. **Structures:** [`SweepConfig`] with every location the generated scripts reference.
//! 3. **Enums:** Scheduler preamble selection and output naming scheme.
//!
//! Configuration is loaded from JSON or taken from `SweepConfig::default()`;
//! the CLI overrides individual fields on top of either.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, SweepError};
use crate::jobs::configuration::{CoreConfig, create_configurations};

/// Default configuration constants for a sweep.
///
/// Paths are relative to the directory the generator is run from. Real
/// sweeps normally point them at absolute locations through a config file.
mod defaults {
    /// Directory holding the benchmark binaries and inputs; scripts `cd` here first.
    pub const BENCH_DIR: &str = "benchmarks/alltogether";

    /// Directory the job scripts and the driver script are written to.
    pub const SCRIPT_DIR: &str = "smtsim-scripts/one_core";

    /// Simulator executable invoked by every job script.
    pub const EXE_PATH: &str = "smtsim/build.linux-amd64/smtsim";

    /// Directory receiving the simulator's stats logs and config dumps.
    pub const RESULTS_DIR: &str = "results/one_core";

    /// Workload list passed to the simulator with `-conffile`.
    pub const WORKLOADS_CONF: &str = "smtsim-scripts/workloads-list_ffs0.conf";

    /// Committed instructions simulated per thread.
    pub const THREAD_LENGTH: f64 = 1e6;

    /// Instructions fast-forwarded before detailed simulation starts.
    pub const FF_DIST: f64 = 1e6;

    /// Single-thread workloads swept when none are configured.
    pub const WORKLOADS: &[&str] = &[
        "applu",
        "apsi",
        "art_470",
        "bwaves_06",
        "bzip2_source",
        "cactusADM_06",
    ];

    /// PBS wall-clock limit.
    pub const PBS_WALLTIME: &str = "5:00:00";

    /// PBS queue name.
    pub const PBS_QUEUE: &str = "express";

    /// Shell PBS starts the job under.
    pub const PBS_SHELL: &str = "/bin/bash";
}

/// Job-scheduler preamble emitted after the shebang of every job script.
///
/// Replaces selecting the preamble by inspecting the host name: the choice
/// is explicit and rendering never looks at the machine it runs on.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(tag = "kind", rename_all = "PascalCase")]
pub enum Scheduler {
    /// Plain bash script; run directly or through the driver script.
    #[default]
    None,
    /// PBS/Torque directives (`#PBS -l walltime`, `#PBS -q`, `#PBS -S`).
    #[serde(alias = "PBS")]
    Pbs {
        /// Wall-clock limit, e.g. `5:00:00`.
        #[serde(default = "Scheduler::default_walltime")]
        walltime: String,
        /// Queue to submit to.
        #[serde(default = "Scheduler::default_queue")]
        queue: String,
        /// Shell the job runs under.
        #[serde(default = "Scheduler::default_shell")]
        shell: String,
    },
}

impl Scheduler {
    /// PBS preamble with the default walltime, queue, and shell.
    pub fn pbs() -> Self {
        Self::Pbs {
            walltime: Self::default_walltime(),
            queue: Self::default_queue(),
            shell: Self::default_shell(),
        }
    }

    fn default_walltime() -> String {
        defaults::PBS_WALLTIME.to_string()
    }

    fn default_queue() -> String {
        defaults::PBS_QUEUE.to_string()
    }

    fn default_shell() -> String {
        defaults::PBS_SHELL.to_string()
    }
}

/// How the output base name of a job is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum NamingScheme {
    /// The workload identifier alone (`applu`).
    ///
    /// Sweeping several configurations of the same workload produces the
    /// same name for each; later jobs overwrite earlier ones.
    #[default]
    #[serde(alias = "workload")]
    Workload,
    /// The workload followed by the core parameters
    /// (`applu@iqs=24@fqs=24@...`), unique per configuration.
    #[serde(alias = "parameters")]
    Parameters,
}

/// Root configuration for the job-script generator.
///
/// # Examples
///
/// ```
/// use smtsim_sweep::config::{NamingScheme, Scheduler, SweepConfig};
///
/// let json = r#"{
///     "exe_path": "/opt/smtsim/bin/smtsim",
///     "workloads": ["applu"],
///     "configurations": [
///         { "iqs": 24, "fqs": 24, "ipr": 32, "fpr": 32, "rob": 32, "lsq": 16,
///           "ica": 8, "ics": 32, "dca": 8, "dcs": 32, "mii": 2, "mfi": 1,
///           "mli": 1, "fb": 8, "mci": 4 }
///     ],
///     "scheduler": { "kind": "Pbs", "queue": "general" }
/// }"#;
///
/// let config = SweepConfig::from_json_str(json).unwrap();
/// assert_eq!(config.workloads, vec!["applu".to_string()]);
/// assert_eq!(config.configurations[0].reorder_buffer_size, 32);
/// assert_eq!(config.naming, NamingScheme::Workload);
/// assert!(matches!(config.scheduler, Scheduler::Pbs { ref queue, .. } if queue == "general"));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SweepConfig {
    /// Benchmark directory the scripts change into before running.
    #[serde(default = "SweepConfig::default_bench_dir")]
    pub bench_dir: PathBuf,

    /// Where job scripts and `executeall.sh` are written.
    #[serde(default = "SweepConfig::default_script_dir")]
    pub script_dir: PathBuf,

    /// Simulator executable.
    #[serde(default = "SweepConfig::default_exe_path")]
    pub exe_path: PathBuf,

    /// Directory for stats logs (`AppStatsLog/base_name`) and config dumps.
    #[serde(default = "SweepConfig::default_results_dir")]
    pub results_dir: PathBuf,

    /// Workload list file handed to `-conffile`.
    #[serde(default = "SweepConfig::default_workloads_conf")]
    pub workloads_conf: PathBuf,

    /// Committed instructions per thread (`Global/thread_length`).
    #[serde(default = "SweepConfig::default_thread_length")]
    pub thread_length: f64,

    /// Fast-forward distance (`Workloads/<name>/ff_dist`).
    #[serde(default = "SweepConfig::default_ff_dist")]
    pub ff_dist: f64,

    /// Workload identifiers, swept in order.
    #[serde(default = "SweepConfig::default_workloads")]
    pub workloads: Vec<String>,

    /// Core configurations, swept in order for each workload.
    #[serde(default = "create_configurations")]
    pub configurations: Vec<CoreConfig>,

    /// Scheduler preamble for every job script.
    #[serde(default)]
    pub scheduler: Scheduler,

    /// Output base name derivation.
    #[serde(default)]
    pub naming: NamingScheme,
}

impl SweepConfig {
    /// Parses a configuration from a JSON string; missing fields take defaults.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SweepError::Read`] if the file cannot be read and
    /// [`SweepError::Config`] if it is not a valid configuration.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| SweepError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text).map_err(|source| SweepError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    fn default_bench_dir() -> PathBuf {
        PathBuf::from(defaults::BENCH_DIR)
    }

    fn default_script_dir() -> PathBuf {
        PathBuf::from(defaults::SCRIPT_DIR)
    }

    fn default_exe_path() -> PathBuf {
        PathBuf::from(defaults::EXE_PATH)
    }

    fn default_results_dir() -> PathBuf {
        PathBuf::from(defaults::RESULTS_DIR)
    }

    fn default_workloads_conf() -> PathBuf {
        PathBuf::from(defaults::WORKLOADS_CONF)
    }

    const fn default_thread_length() -> f64 {
        defaults::THREAD_LENGTH
    }

    const fn default_ff_dist() -> f64 {
        defaults::FF_DIST
    }

    fn default_workloads() -> Vec<String> {
        defaults::WORKLOADS.iter().map(|w| (*w).to_string()).collect()
    }
}

impl Default for SweepConfig {
    /// Creates a default sweep: six single-thread workloads against the
    /// built-in parameter table, no scheduler preamble.
    fn default() -> Self {
        Self {
            bench_dir: Self::default_bench_dir(),
            script_dir: Self::default_script_dir(),
            exe_path: Self::default_exe_path(),
            results_dir: Self::default_results_dir(),
            workloads_conf: Self::default_workloads_conf(),
            thread_length: defaults::THREAD_LENGTH,
            ff_dist: defaults::FF_DIST,
            workloads: Self::default_workloads(),
            configurations: create_configurations(),
            scheduler: Scheduler::default(),
            naming: NamingScheme::default(),
        }
    }
}
