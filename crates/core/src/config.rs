//! Hierarchy configuration.
//!
//! This module defines the explicit sizing, timing, and power parameters of
//! the simulated memory system. It provides:
//! 1. **Defaults:** The baseline 32 KiB + 32 KiB L1, 256 KiB 4-way L2,
//!    64-byte-block configuration with its published timing/power figures.
//! 2. **Deserialization:** Every field individually defaultable, so a JSON
//!    config may override only what it cares about.
//! 3. **Validation:** Fail-fast geometry checks before any cache state is
//!    built — a non-power-of-two parameter would silently corrupt address
//!    decoding.
//! 4. **Unit helpers:** Times are configured in nanoseconds and transfer
//!    costs in picojoules; the accounting runs on seconds and watts.

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants.
///
/// These are the published parameters of the modeled memory system; override
/// any of them via JSON or struct update syntax.
mod defaults {
    /// L1 instruction cache capacity (32 KiB).
    pub const L1_INSTRUCTION_BYTES: usize = 32 * 1024;

    /// L1 data cache capacity (32 KiB).
    pub const L1_DATA_BYTES: usize = 32 * 1024;

    /// Unified L2 cache capacity (256 KiB).
    pub const L2_BYTES: usize = 256 * 1024;

    /// L2 associativity (4-way).
    pub const L2_ASSOCIATIVITY: usize = 4;

    /// Block size shared by every level (64 bytes).
    pub const BLOCK_SIZE: usize = 64;

    /// L1 read/write time in nanoseconds.
    pub const L1_TIME_NS: f64 = 0.5;

    /// L2 read/write time in nanoseconds.
    pub const L2_TIME_NS: f64 = 5.0;

    /// DRAM read/write time in nanoseconds.
    pub const DRAM_TIME_NS: f64 = 50.0;

    /// L1 active power in watts.
    pub const L1_ACTIVE_W: f64 = 1.0;

    /// L1 idle power in watts.
    pub const L1_IDLE_W: f64 = 0.5;

    /// L2 active power in watts.
    pub const L2_ACTIVE_W: f64 = 2.0;

    /// L2 idle power in watts.
    pub const L2_IDLE_W: f64 = 0.8;

    /// L2 per-access transfer cost in picojoules.
    pub const L2_TRANSFER_PJ: f64 = 5.0;

    /// DRAM active power in watts.
    pub const DRAM_ACTIVE_W: f64 = 4.0;

    /// DRAM idle power in watts.
    pub const DRAM_IDLE_W: f64 = 0.8;

    /// DRAM per-access transfer cost in picojoules.
    pub const DRAM_TRANSFER_PJ: f64 = 640.0;
}

/// Complete configuration of the L1/L2/DRAM hierarchy.
///
/// All sizes, the associativity, and the block size must be powers of two;
/// `validate` (called by `Hierarchy::new`) rejects anything else.
#[derive(Debug, Clone, Deserialize)]
pub struct HierarchyConfig {
    /// L1 instruction cache capacity in bytes (direct-mapped).
    #[serde(default = "HierarchyConfig::default_l1_instruction_bytes")]
    pub l1_instruction_bytes: usize,

    /// L1 data cache capacity in bytes (direct-mapped).
    #[serde(default = "HierarchyConfig::default_l1_data_bytes")]
    pub l1_data_bytes: usize,

    /// Unified L2 capacity in bytes.
    #[serde(default = "HierarchyConfig::default_l2_bytes")]
    pub l2_bytes: usize,

    /// L2 associativity (number of ways).
    #[serde(default = "HierarchyConfig::default_l2_associativity")]
    pub l2_associativity: usize,

    /// Block size in bytes, shared by every level.
    #[serde(default = "HierarchyConfig::default_block_size")]
    pub block_size: usize,

    /// L1 read/write time in nanoseconds.
    #[serde(default = "HierarchyConfig::default_l1_time_ns")]
    pub l1_time_ns: f64,

    /// L2 read/write time in nanoseconds.
    #[serde(default = "HierarchyConfig::default_l2_time_ns")]
    pub l2_time_ns: f64,

    /// DRAM read/write time in nanoseconds.
    #[serde(default = "HierarchyConfig::default_dram_time_ns")]
    pub dram_time_ns: f64,

    /// L1 active power in watts.
    #[serde(default = "HierarchyConfig::default_l1_active_w")]
    pub l1_active_w: f64,

    /// L1 idle power in watts.
    #[serde(default = "HierarchyConfig::default_l1_idle_w")]
    pub l1_idle_w: f64,

    /// L2 active power in watts.
    #[serde(default = "HierarchyConfig::default_l2_active_w")]
    pub l2_active_w: f64,

    /// L2 idle power in watts.
    #[serde(default = "HierarchyConfig::default_l2_idle_w")]
    pub l2_idle_w: f64,

    /// L2 per-access transfer cost in picojoules.
    #[serde(default = "HierarchyConfig::default_l2_transfer_pj")]
    pub l2_transfer_pj: f64,

    /// DRAM active power in watts.
    #[serde(default = "HierarchyConfig::default_dram_active_w")]
    pub dram_active_w: f64,

    /// DRAM idle power in watts.
    #[serde(default = "HierarchyConfig::default_dram_idle_w")]
    pub dram_idle_w: f64,

    /// DRAM per-access transfer cost in picojoules.
    #[serde(default = "HierarchyConfig::default_dram_transfer_pj")]
    pub dram_transfer_pj: f64,
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            l1_instruction_bytes: defaults::L1_INSTRUCTION_BYTES,
            l1_data_bytes: defaults::L1_DATA_BYTES,
            l2_bytes: defaults::L2_BYTES,
            l2_associativity: defaults::L2_ASSOCIATIVITY,
            block_size: defaults::BLOCK_SIZE,
            l1_time_ns: defaults::L1_TIME_NS,
            l2_time_ns: defaults::L2_TIME_NS,
            dram_time_ns: defaults::DRAM_TIME_NS,
            l1_active_w: defaults::L1_ACTIVE_W,
            l1_idle_w: defaults::L1_IDLE_W,
            l2_active_w: defaults::L2_ACTIVE_W,
            l2_idle_w: defaults::L2_IDLE_W,
            l2_transfer_pj: defaults::L2_TRANSFER_PJ,
            dram_active_w: defaults::DRAM_ACTIVE_W,
            dram_idle_w: defaults::DRAM_IDLE_W,
            dram_transfer_pj: defaults::DRAM_TRANSFER_PJ,
        }
    }
}

impl HierarchyConfig {
    fn default_l1_instruction_bytes() -> usize {
        defaults::L1_INSTRUCTION_BYTES
    }

    fn default_l1_data_bytes() -> usize {
        defaults::L1_DATA_BYTES
    }

    fn default_l2_bytes() -> usize {
        defaults::L2_BYTES
    }

    fn default_l2_associativity() -> usize {
        defaults::L2_ASSOCIATIVITY
    }

    fn default_block_size() -> usize {
        defaults::BLOCK_SIZE
    }

    fn default_l1_time_ns() -> f64 {
        defaults::L1_TIME_NS
    }

    fn default_l2_time_ns() -> f64 {
        defaults::L2_TIME_NS
    }

    fn default_dram_time_ns() -> f64 {
        defaults::DRAM_TIME_NS
    }

    fn default_l1_active_w() -> f64 {
        defaults::L1_ACTIVE_W
    }

    fn default_l1_idle_w() -> f64 {
        defaults::L1_IDLE_W
    }

    fn default_l2_active_w() -> f64 {
        defaults::L2_ACTIVE_W
    }

    fn default_l2_idle_w() -> f64 {
        defaults::L2_IDLE_W
    }

    fn default_l2_transfer_pj() -> f64 {
        defaults::L2_TRANSFER_PJ
    }

    fn default_dram_active_w() -> f64 {
        defaults::DRAM_ACTIVE_W
    }

    fn default_dram_idle_w() -> f64 {
        defaults::DRAM_IDLE_W
    }

    fn default_dram_transfer_pj() -> f64 {
        defaults::DRAM_TRANSFER_PJ
    }

    /// Checks that the configured geometry permits lossless address
    /// decomposition.
    ///
    /// Every size, the associativity, and the block size must be a power of
    /// two; the block must fit in each cache; and each capacity must be an
    /// exact multiple of `associativity × block_size` so that
    /// `size = ways × block × sets` holds.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pow2 = |field: &'static str, value: usize| {
            if value.is_power_of_two() {
                Ok(())
            } else {
                Err(ConfigError::NotPowerOfTwo { field, value })
            }
        };
        pow2("l1_instruction_bytes", self.l1_instruction_bytes)?;
        pow2("l1_data_bytes", self.l1_data_bytes)?;
        pow2("l2_bytes", self.l2_bytes)?;
        pow2("l2_associativity", self.l2_associativity)?;
        pow2("block_size", self.block_size)?;

        let fits = |field: &'static str, capacity: usize| {
            if self.block_size > capacity {
                Err(ConfigError::BlockTooLarge {
                    field,
                    block_size: self.block_size,
                    capacity,
                })
            } else {
                Ok(())
            }
        };
        fits("l1_instruction_bytes", self.l1_instruction_bytes)?;
        fits("l1_data_bytes", self.l1_data_bytes)?;
        fits("l2_bytes", self.l2_bytes)?;

        if self.l2_bytes % (self.l2_associativity * self.block_size) != 0
            || self.l2_bytes < self.l2_associativity * self.block_size
        {
            return Err(ConfigError::Geometry {
                field: "l2_bytes",
                capacity: self.l2_bytes,
                ways: self.l2_associativity,
                block_size: self.block_size,
            });
        }
        Ok(())
    }

    /// L1 access time in seconds.
    pub fn l1_time_s(&self) -> f64 {
        self.l1_time_ns * 1e-9
    }

    /// L2 access time in seconds.
    pub fn l2_time_s(&self) -> f64 {
        self.l2_time_ns * 1e-9
    }

    /// DRAM access time in seconds.
    pub fn dram_time_s(&self) -> f64 {
        self.dram_time_ns * 1e-9
    }

    /// L2 transfer cost as a power-equivalent term in watts.
    pub fn l2_transfer_w(&self) -> f64 {
        self.l2_transfer_pj * 1e-12
    }

    /// DRAM transfer cost as a power-equivalent term in watts.
    pub fn dram_transfer_w(&self) -> f64 {
        self.dram_transfer_pj * 1e-12
    }
}
