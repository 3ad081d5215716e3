//! Job planning, script files, and the driver script.
//!
//! Jobs are enumerated workload-major, configuration-minor. Each job script
//! is written as `<name>.sh` and made executable; `executeall.sh` then runs
//! every job in that order.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::SweepConfig;
use crate::error::{Result, SweepError};
use crate::jobs::configuration::CoreConfig;
use crate::jobs::render::{output_name, render_script};

/// File name of the driver script written next to the job scripts.
pub const DRIVER_SCRIPT_NAME: &str = "executeall.sh";

/// One simulator run: a workload on a core configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// Workload identifier.
    pub workload: String,
    /// Core parameters for this run.
    pub core: CoreConfig,
    /// Output base name; also the script's file stem.
    pub name: String,
    /// Rendered script text.
    pub script: String,
}

impl Job {
    /// Builds and renders the job for `workload` on `core`.
    pub fn new(config: &SweepConfig, workload: &str, core: CoreConfig) -> Self {
        let name = output_name(workload, &core, config.naming);
        let script = render_script(config, workload, &core, &name);
        Self {
            workload: workload.to_string(),
            core,
            name,
            script,
        }
    }

    /// Script file name, `<name>.sh`.
    pub fn file_name(&self) -> String {
        format!("{}.sh", self.name)
    }
}

/// Ordered list of job script file names making up one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchManifest {
    scripts: Vec<String>,
}

impl BatchManifest {
    /// Creates an empty manifest.
    pub const fn new() -> Self {
        Self {
            scripts: Vec::new(),
        }
    }

    /// Appends a script, keeping the first position of a repeated name.
    ///
    /// A repeated name means an earlier script file was overwritten, so
    /// listing it twice would only run the last job twice.
    pub fn push(&mut self, file_name: impl Into<String>) {
        let file_name = file_name.into();
        if !self.scripts.contains(&file_name) {
            self.scripts.push(file_name);
        }
    }

    /// Script file names in execution order.
    pub fn scripts(&self) -> &[String] {
        &self.scripts
    }

    /// Number of scripts in the batch.
    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    /// True when no scripts have been added.
    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    /// Text of the driver script: a shebang, then `./<script>` per job.
    pub fn render_driver(&self) -> String {
        let mut driver = String::from("#!/bin/bash \n\n");
        for script in &self.scripts {
            driver.push_str("./");
            driver.push_str(script);
            driver.push_str(" \n");
        }
        driver
    }
}

/// Enumerates every (workload, configuration) job for a sweep.
///
/// Name collisions are reported but kept: the later job's script replaces
/// the earlier one on disk.
pub fn plan_jobs(config: &SweepConfig) -> Vec<Job> {
    let mut seen = HashSet::new();
    let mut jobs = Vec::with_capacity(config.workloads.len() * config.configurations.len());
    for workload in &config.workloads {
        for core in &config.configurations {
            let job = Job::new(config, workload, *core);
            if !seen.insert(job.name.clone()) {
                warn!(
                    name = %job.name,
                    "job name repeats; the earlier script will be overwritten (use the Parameters naming scheme for unique names)"
                );
            }
            jobs.push(job);
        }
    }
    jobs
}

/// Writes each job's script to `script_dir` and marks it executable.
///
/// # Errors
///
/// Fails on the first script that cannot be written or chmod-ed.
pub fn write_jobs(script_dir: &Path, jobs: &[Job]) -> Result<BatchManifest> {
    let mut manifest = BatchManifest::new();
    for job in jobs {
        let file_name = job.file_name();
        let path = script_dir.join(&file_name);
        write_file(&path, &job.script)?;
        make_executable(&path)?;
        info!(script = %file_name, workload = %job.workload, "wrote job script");
        manifest.push(file_name);
    }
    Ok(manifest)
}

/// Writes `executeall.sh` for `manifest` into `script_dir` and marks it executable.
///
/// # Errors
///
/// Fails if the driver cannot be written or chmod-ed.
pub fn write_driver(script_dir: &Path, manifest: &BatchManifest) -> Result<PathBuf> {
    let path = script_dir.join(DRIVER_SCRIPT_NAME);
    write_file(&path, &manifest.render_driver())?;
    make_executable(&path)?;
    debug!(scripts = ?manifest.scripts(), "driver script lists jobs");
    Ok(path)
}

/// Runs a whole sweep: plans jobs, writes their scripts and the driver.
///
/// The script directory is created if it does not exist.
///
/// # Errors
///
/// Any filesystem failure aborts the sweep; scripts already written stay on disk.
pub fn generate(config: &SweepConfig) -> Result<BatchManifest> {
    let dir = &config.script_dir;
    fs::create_dir_all(dir).map_err(|source| SweepError::CreateDir {
        path: dir.clone(),
        source,
    })?;

    let jobs = plan_jobs(config);
    let manifest = write_jobs(dir, &jobs)?;
    let driver = write_driver(dir, &manifest)?;
    info!(
        jobs = manifest.len(),
        driver = %driver.display(),
        "sweep scripts generated"
    );
    Ok(manifest)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| SweepError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Adds the owner-execute bit, like `chmod u+x`.
#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::io;
    use std::os::unix::fs::PermissionsExt;

    let fail = |source: io::Error| SweepError::Permissions {
        path: path.to_path_buf(),
        source,
    };
    let mut permissions = fs::metadata(path).map_err(fail)?.permissions();
    permissions.set_mode(permissions.mode() | 0o100);
    fs::set_permissions(path, permissions).map_err(fail)
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
