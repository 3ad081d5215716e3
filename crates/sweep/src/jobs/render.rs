//! Job script rendering.
//!
//! Turns one (workload, core configuration) pair into the text of a bash
//! script that runs the simulator with a fixed set of `-confexpr`
//! overrides. The option text is an external contract with the simulator
//! and is reproduced byte for byte; only the substituted values vary.
//!
//! Rendering is pure: no filesystem access, no environment lookups.

use crate::config::{NamingScheme, Scheduler, SweepConfig};
use crate::jobs::configuration::CoreConfig;

/// Output base name for a job.
///
/// With [`NamingScheme::Workload`] this is the workload identifier
/// unchanged. [`NamingScheme::Parameters`] appends the core parameters so
/// each configuration of the same workload gets its own files.
pub fn output_name(workload: &str, core: &CoreConfig, scheme: NamingScheme) -> String {
    match scheme {
        NamingScheme::Workload => workload.to_string(),
        NamingScheme::Parameters => format!(
            "{workload}@iqs={}@fqs={}@ipr={}@fpr={}@rob={}@lsq={}@ics={}@dcs={}_{}{}{}@fb={}@mci={}@l3=8MB",
            core.int_queue_size,
            core.float_queue_size,
            core.int_rename_regs,
            core.float_rename_regs,
            core.reorder_buffer_size,
            core.loadstore_queue_size,
            core.icache_size_kb,
            core.dcache_size_kb,
            core.max_int_issue,
            core.max_float_issue,
            core.max_ldst_issue,
            core.fetch_width,
            core.commit_width,
        ),
    }
}

/// Formats a value the way C's `%e` does: six fraction digits and a signed,
/// at least two-digit exponent (`1e6` becomes `1.000000e+06`).
pub fn format_exponent(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value}").to_lowercase();
    }
    let formatted = format!("{value:.6e}");
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// Scheduler directives placed right after the shebang.
fn preamble(scheduler: &Scheduler) -> String {
    match scheduler {
        Scheduler::None => String::new(),
        Scheduler::Pbs {
            walltime,
            queue,
            shell,
        } => format!("#PBS -l walltime={walltime}\n#PBS -q {queue}\n#PBS -S {shell}\n"),
    }
}

/// Renders the complete job script for one workload and configuration.
///
/// # Arguments
///
/// * `config` - Sweep settings: paths, run lengths, scheduler preamble.
/// * `workload` - Workload identifier as known to the simulator's workload list.
/// * `core` - Core parameters substituted into the `Core/` and `Thread/` options.
/// * `name` - Output base name, used for the stats log and the config dump.
pub fn render_script(config: &SweepConfig, workload: &str, core: &CoreConfig, name: &str) -> String {
    let mut script = String::from("#!/bin/bash\n");
    script.push_str(&preamble(&config.scheduler));

    let output = config.results_dir.join(name);
    script.push_str(&format!(
        r#"

cd "{bench_dir}"
{exe} -conffile "{workloads_conf}" \
                              -confexpr "Syscall/root_paths_at_cwd = t;" \
                              -confexpr "Syscall/ForceUniqueNames = {{ \"fort.11\"; }};" \
                              -confexpr "AppStatsLog/enable = t;" \
                              -confexpr "AppStatsLog/interval = 10e3;" \
                              -confexpr "AppStatsLog/base_name = \"{output}\";" \
                              -confexpr "AppStatsLog/stat_mask/all = f;" \
                              -confexpr "AppStatsLog/stat_mask/cyc = t;" \
                              -confexpr "AppStatsLog/stat_mask/commits = t;" \
                              -confexpr "AppStatsLog/stat_mask/l3cache_hr = t;" \
                              -confexpr "AppStatsLog/stat_mask/mem_delay = t;" \
                              -confexpr "AppStatsLog/stat_mask/itlb_acc = t;" \
                              -confexpr "AppStatsLog/stat_mask/dtlb_acc = t;" \
                              -confexpr "AppStatsLog/stat_mask/icache_acc = t;" \
                              -confexpr "AppStatsLog/stat_mask/dcache_acc = t;" \
                              -confexpr "AppStatsLog/stat_mask/l2cache_acc = t;" \
                              -confexpr "AppStatsLog/stat_mask/l3cache_acc = t;" \
                              -confexpr "AppStatsLog/stat_mask/bpred_acc = t;" \
                              -confexpr "AppStatsLog/stat_mask/fpalu_acc = t;" \
                              -confexpr "AppStatsLog/stat_mask/intalu_acc = t;" \
                              -confexpr "AppStatsLog/stat_mask/ldst_acc = t;" \
                              -confexpr "AppStatsLog/stat_mask/lsq_acc = t;" \
                              -confexpr "AppStatsLog/stat_mask/iq_acc = t;" \
                              -confexpr "AppStatsLog/stat_mask/fq_acc = t;" \
                              -confexpr "AppStatsLog/stat_mask/ireg_acc = t;" \
                              -confexpr "AppStatsLog/stat_mask/freg_acc = t;" \
                              -confexpr "AppStatsLog/stat_mask/iren_acc = t;" \
                              -confexpr "AppStatsLog/stat_mask/fren_acc = t;" \
                              -confexpr "AppStatsLog/stat_mask/rob_acc = t;" \
                              -confexpr "AppStatsLog/stat_mask/lsq_occ = t;" \
                              -confexpr "AppStatsLog/stat_mask/iq_occ = t;" \
                              -confexpr "AppStatsLog/stat_mask/fq_occ = t;" \
                              -confexpr "AppStatsLog/stat_mask/ireg_occ = t;" \
                              -confexpr "AppStatsLog/stat_mask/freg_occ = t;" \
                              -confexpr "AppStatsLog/stat_mask/iren_occ = t;" \
                              -confexpr "AppStatsLog/stat_mask/fren_occ = t;" \
                              -confexpr "AppStatsLog/stat_mask/rob_occ = t;" \
                              -confexpr "Workloads/{workload}/ff_dist = {ff_dist};" \
                              -confexpr "WorkQueue/Jobs/job_1 = {{ start_time = 0.; workload = \"{workload}\"}};"\
                              -confexpr "WorkQueue/max_running_jobs = 1;"\
                              -confexpr "Global/thread_length = {thread_length};" \
                              -confexpr "Global/num_cores = 1;" \
                              -confexpr "Global/num_contexts = 1;" \
                              -confexpr "Global/ThreadCoreMap/t0 = 0;" \
                              -confexpr "Global/Mem/private_l2caches = t;" \
                              -confexpr "Global/Mem/L2Cache/size_kb = 512;" \
                              -confexpr "Global/Mem/L2Cache/access_time = {{ latency = 10; interval = 2; }};" \
                              -confexpr "Global/Mem/L2Cache/access_time_wb = {{ latency = 10; interval = 2; }};" \
                              -confexpr "Global/Mem/use_l3cache = t;" \
                              -confexpr "Global/Mem/L3Cache/size_kb = 8192;" \
                              -confexpr "Global/Mem/L3Cache/assoc = 8;" \
                              -confexpr "Global/Mem/L3Cache/access_time = {{ latency = 20; interval = 8; }};" \
                              -confexpr "Global/Mem/L3Cache/access_time_wb = {{ latency = 20; interval = 8; }};" \
                              -confexpr "Global/Mem/MainMem/read_time = {{ latency = 250; interval = 100; }};" \
                              -confexpr "Global/Mem/MainMem/write_time = {{ latency = 250; interval = 100; }};" \
                              -confexpr "Core/ICache/size_kb = {ics};" \
                              -confexpr "Core/ICache/assoc = {ica};" \
                              -confexpr "Core/ICache/access_time = {{ latency = 2; interval = latency; }};"  \
                              -confexpr "Core/ICache/access_time_wb = {{ latency = 3; interval = latency; }};"  \
                              -confexpr "Core/DCache/size_kb = {dcs};" \
                              -confexpr "Core/DCache/assoc = {dca};" \
                              -confexpr "Core/DCache/access_time = {{ latency = 2; interval = latency; }};"  \
                              -confexpr "Core/DCache/access_time_wb = {{ latency = 3; interval = latency; }};"  \
                              -confexpr "Core/loadstore_queue_size = {lsq};" \
                              -confexpr "Core/Queue/int_queue_size = {iqs};" \
                              -confexpr "Core/Queue/float_queue_size = {fqs};" \
                              -confexpr "Core/Fetch/single_limit = {fetch};" \
                              -confexpr "Core/Fetch/total_limit = {fetch};" \
                              -confexpr "Core/Commit/single_limit = {commit};" \
                              -confexpr "Core/Commit/total_limit = {commit};" \
                              -confexpr "Core/Queue/max_int_issue = {mii};" \
                              -confexpr "Core/Queue/max_float_issue = {mfi};" \
                              -confexpr "Core/Queue/max_ldst_issue = {mli};" \
                              -confexpr "Core/Rename/int_rename_regs = {ipr};" \
                              -confexpr "Core/Rename/float_rename_regs = {fpr};" \
                              -confexpr "Thread/reorder_buffer_size = {rob};" \
                              -confexpr "Thread/active_list_size = {active_list};" \
                              -confexpr "ResourcePooling/enable = f;" \
                              -confdump - > "{output}"
[ $? -eq 0 ]||echo "Error: App did not exit normally"
"#,
        bench_dir = config.bench_dir.display(),
        exe = config.exe_path.display(),
        workloads_conf = config.workloads_conf.display(),
        output = output.display(),
        workload = workload,
        ff_dist = format_exponent(config.ff_dist),
        thread_length = format_exponent(config.thread_length),
        ics = core.icache_size_kb,
        ica = core.icache_assoc,
        dcs = core.dcache_size_kb,
        dca = core.dcache_assoc,
        lsq = core.loadstore_queue_size,
        iqs = core.int_queue_size,
        fqs = core.float_queue_size,
        fetch = core.fetch_width,
        commit = core.commit_width,
        mii = core.max_int_issue,
        mfi = core.max_float_issue,
        mli = core.max_ldst_issue,
        ipr = core.int_rename_regs,
        fpr = core.float_rename_regs,
        rob = core.reorder_buffer_size,
        active_list = core.active_list_size(),
    ));
    script
}
