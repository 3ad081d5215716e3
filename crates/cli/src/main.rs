//! SMTSIM sweep CLI.
//!
//! This binary provides a single entry point for the sweep utilities. It performs:
//! 1. **Summarize:** Harvest `IPC:` values from a directory of simulator logs into `summary.txt`.
//! 2. **Generate:** Write one job script per (workload, configuration) plus `executeall.sh`.
//! 3. **Configs:** Print the core configuration table a sweep would use, as JSON.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use smtsim_sweep::config::{NamingScheme, Scheduler, SweepConfig};
use smtsim_sweep::harvest::{self, ListingOrder};
use smtsim_sweep::jobs;

#[derive(Parser, Debug)]
#[command(
    name = "smtsweep",
    author,
    version,
    about = "Job-script generation and IPC harvesting for SMTSIM sweeps",
    long_about = "Generate simulator job scripts for a workload x configuration sweep, or harvest IPC values from the resulting logs.\n\nLog verbosity follows RUST_LOG (default: info).\n\nExamples:\n  smtsweep generate --config sweep.json\n  smtsweep generate --workload applu --workload apsi --pbs\n  smtsweep summarize results/one_core --sorted\n  smtsweep configs --config sweep.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write summary.txt listing every log file and its IPC values.
    Summarize {
        /// Directory of simulator logs; summary.txt is written here too.
        dir: PathBuf,

        /// Order files by name instead of directory listing order.
        #[arg(long)]
        sorted: bool,
    },

    /// Write job scripts and the executeall.sh driver.
    Generate {
        /// JSON sweep configuration; built-in defaults when omitted.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output directory for the scripts (overrides the config file).
        #[arg(long)]
        script_dir: Option<PathBuf>,

        /// Workload to sweep; repeat for several (overrides the config file).
        #[arg(short, long = "workload")]
        workloads: Vec<String>,

        /// Add the default PBS preamble to every script.
        #[arg(long)]
        pbs: bool,

        /// Name outputs after workload and core parameters instead of the workload alone.
        #[arg(long)]
        unique_names: bool,
    },

    /// Print the core configuration table as JSON.
    Configs {
        /// JSON sweep configuration; built-in table when omitted.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Summarize { dir, sorted } => cmd_summarize(&dir, sorted),
        Commands::Generate {
            config,
            script_dir,
            workloads,
            pbs,
            unique_names,
        } => cmd_generate(config.as_deref(), script_dir, workloads, pbs, unique_names),
        Commands::Configs { config } => cmd_configs(config.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Loads the sweep configuration from `path`, or the defaults.
fn load_config(path: Option<&Path>) -> Result<SweepConfig, Box<dyn Error>> {
    match path {
        Some(path) => Ok(SweepConfig::from_json_file(path)?),
        None => Ok(SweepConfig::default()),
    }
}

fn cmd_summarize(dir: &Path, sorted: bool) -> Result<(), Box<dyn Error>> {
    let order = if sorted {
        ListingOrder::ByName
    } else {
        ListingOrder::AsListed
    };
    let path = harvest::write_summary(dir, order)?;
    println!("{}", path.display());
    Ok(())
}

/// Applies CLI overrides on top of the loaded configuration, then generates.
fn cmd_generate(
    config: Option<&Path>,
    script_dir: Option<PathBuf>,
    workloads: Vec<String>,
    pbs: bool,
    unique_names: bool,
) -> Result<(), Box<dyn Error>> {
    let mut config = load_config(config)?;
    if let Some(dir) = script_dir {
        config.script_dir = dir;
    }
    if !workloads.is_empty() {
        config.workloads = workloads;
    }
    if pbs {
        config.scheduler = Scheduler::pbs();
    }
    if unique_names {
        config.naming = NamingScheme::Parameters;
    }

    let manifest = jobs::generate(&config)?;
    for script in manifest.scripts() {
        println!("{script}");
    }
    Ok(())
}

fn cmd_configs(config: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let config = load_config(config)?;
    println!("{}", serde_json::to_string_pretty(&config.configurations)?);
    Ok(())
}
