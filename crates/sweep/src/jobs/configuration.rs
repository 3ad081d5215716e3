//! Simulated-core parameter sets.
//!
//! Each row of [`PARAMETER_TABLE`] is one configuration variant; its fifteen
//! integers map positionally onto the fields of [`CoreConfig`]. No range
//! checking is done: the values are passed to the simulator as written.

use serde::{Deserialize, Serialize};

/// Number of parameters in a configuration row.
const ROW_LEN: usize = 15;

/// Built-in configuration rows, one per variant, in sweep order.
///
/// Column order: iqs, fqs, ipr, fpr, rob, lsq, ica, ics, dca, dcs, mii, mfi, mli, fb, mci.
pub const PARAMETER_TABLE: &[[u32; ROW_LEN]] = &[
    // c0: baseline 4-wide-commit core
    [24, 24, 32, 32, 64, 16, 8, 32, 8, 32, 2, 1, 1, 8, 4],
];

/// Structural parameters of one simulated core.
///
/// Field aliases are the short keys used in configuration rows and in
/// parameter-based output names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Integer instruction queue size
    #[serde(alias = "iqs")]
    pub int_queue_size: u32,
    /// Floating-point instruction queue size
    #[serde(alias = "fqs")]
    pub float_queue_size: u32,
    /// Integer physical (rename) registers
    #[serde(alias = "ipr")]
    pub int_rename_regs: u32,
    /// Floating-point physical (rename) registers
    #[serde(alias = "fpr")]
    pub float_rename_regs: u32,
    /// Reorder buffer size
    #[serde(alias = "rob")]
    pub reorder_buffer_size: u32,
    /// Load/store queue size
    #[serde(alias = "lsq")]
    pub loadstore_queue_size: u32,
    /// L1 instruction cache associativity
    #[serde(alias = "ica")]
    pub icache_assoc: u32,
    /// L1 instruction cache size in KiB
    #[serde(alias = "ics")]
    pub icache_size_kb: u32,
    /// L1 data cache associativity
    #[serde(alias = "dca")]
    pub dcache_assoc: u32,
    /// L1 data cache size in KiB
    #[serde(alias = "dcs")]
    pub dcache_size_kb: u32,
    /// Integer issue limit per cycle
    #[serde(alias = "mii")]
    pub max_int_issue: u32,
    /// Floating-point issue limit per cycle
    #[serde(alias = "mfi")]
    pub max_float_issue: u32,
    /// Load/store issue limit per cycle
    #[serde(alias = "mli")]
    pub max_ldst_issue: u32,
    /// Fetch width (single and total fetch limit)
    #[serde(alias = "fb")]
    pub fetch_width: u32,
    /// Commit width (single and total commit limit)
    #[serde(alias = "mci")]
    pub commit_width: u32,
}

impl CoreConfig {
    /// Maps a positional row onto named parameters.
    pub const fn from_row(row: &[u32; ROW_LEN]) -> Self {
        Self {
            int_queue_size: row[0],
            float_queue_size: row[1],
            int_rename_regs: row[2],
            float_rename_regs: row[3],
            reorder_buffer_size: row[4],
            loadstore_queue_size: row[5],
            icache_assoc: row[6],
            icache_size_kb: row[7],
            dcache_assoc: row[8],
            dcache_size_kb: row[9],
            max_int_issue: row[10],
            max_float_issue: row[11],
            max_ldst_issue: row[12],
            fetch_width: row[13],
            commit_width: row[14],
        }
    }

    /// Active list capacity the simulator needs for this reorder buffer.
    pub const fn active_list_size(&self) -> u64 {
        active_list_size(self.reorder_buffer_size)
    }
}

/// Builds one [`CoreConfig`] per row of [`PARAMETER_TABLE`], in table order.
pub fn create_configurations() -> Vec<CoreConfig> {
    PARAMETER_TABLE.iter().map(CoreConfig::from_row).collect()
}

/// Smallest power of two that is at least `8 * reorder_buffer_size`.
///
/// The simulator requires `Thread/active_list_size` to be a power of two.
/// A zero-sized reorder buffer yields 1.
pub const fn active_list_size(reorder_buffer_size: u32) -> u64 {
    let target = 8 * reorder_buffer_size as u64;
    let mut size = 1;
    while size < target {
        size <<= 1;
    }
    size
}
