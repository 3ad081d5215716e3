//! Job-script generation for simulator sweeps.
//!
//! A sweep crosses every workload with every core configuration. For each
//! pair this module renders a bash script that runs the simulator, writes it
//! to the script directory, and finally emits a driver script running all
//! of them in order.

/// Job enumeration, script files, and the driver script.
pub mod batch;
/// Core parameter table and derived capacities.
pub mod configuration;
/// Pure script rendering.
pub mod render;

pub use batch::{BatchManifest, DRIVER_SCRIPT_NAME, Job, generate, plan_jobs, write_driver, write_jobs};
pub use configuration::{CoreConfig, PARAMETER_TABLE, active_list_size, create_configurations};
pub use render::{format_exponent, output_name, render_script};
