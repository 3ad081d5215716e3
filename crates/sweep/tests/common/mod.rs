//! Shared fixtures for the sweep tests.

use std::fs;
use std::path::PathBuf;

use smtsim_sweep::config::SweepConfig;
use smtsim_sweep::jobs::create_configurations;
use tempfile::TempDir;

/// Golden script for `applu` on row `c0` rendered with [`fixture_config`].
pub const APPLU_C0_GOLDEN: &str = include_str!("../fixtures/applu_c0.sh");

/// Installs a test-friendly tracing subscriber once per process.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

/// Sweep of `applu` on the built-in table with fixed absolute paths.
pub fn fixture_config() -> SweepConfig {
    SweepConfig {
        bench_dir: PathBuf::from("/sim/benchmarks/alltogether"),
        script_dir: PathBuf::from("/sim/smtsim-scripts/one_core"),
        exe_path: PathBuf::from("/sim/smtsim/build.linux-amd64/smtsim"),
        results_dir: PathBuf::from("/sim/results/one_core"),
        workloads_conf: PathBuf::from("/sim/smtsim-scripts/workloads-list_ffs0.conf"),
        workloads: vec!["applu".to_string()],
        configurations: create_configurations(),
        ..SweepConfig::default()
    }
}

/// Scratch directory populated with `(name, contents)` files.
pub fn log_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).unwrap();
    }
    dir
}
