//! The L1/L2/DRAM composition and the per-access protocol.
//!
//! [`Hierarchy`] exclusively owns all three level objects for the duration of
//! a run; one access is fully resolved — including any nested fills and
//! write-backs — before the next begins. The protocol is:
//! 1. **Read / Fetch:** probe L1; on miss probe L2; on L2 miss go to DRAM,
//!    fill L2 (plus a second DRAM access if the evicted victim was dirty),
//!    and finally fill L1.
//! 2. **Write:** probe L1, then *always* forward to L2 (write-through); an L2
//!    hit absorbs the write as a dirty line, an L2 miss goes to DRAM and
//!    fills L2 dirty; if L1 missed, fill it last (clean — L1 is only a lookup
//!    accelerator for writes).
//!
//! Every step taken charges its level one energy/time unit; totals are the
//! exact sums of the per-level accumulators.
//!
//! No inclusion is enforced between the levels: L1 and L2 hit and miss
//! independently, and evicting a line from L2 does not invalidate its L1
//! copy.

/// DRAM backing store.
pub mod dram;
/// Split direct-mapped L1 (instruction + data).
pub mod l1;
/// Unified N-way write-back L2.
pub mod l2;

pub use dram::Dram;
pub use l1::L1Cache;
pub use l2::L2Cache;

use crate::common::data::AccessKind;
use crate::common::error::ConfigError;
use crate::config::HierarchyConfig;
use crate::stats::HierarchyStats;
use crate::trace::TraceRecord;

/// The two-level cache hierarchy backed by DRAM.
///
/// All state (set contents, dirty flags, accumulators) is cumulative for the
/// lifetime of the instance; comparing configurations means constructing a
/// fresh hierarchy per configuration, never reusing one.
#[derive(Debug)]
pub struct Hierarchy {
    l1: L1Cache,
    l2: L2Cache,
    dram: Dram,
}

impl Hierarchy {
    /// Builds an empty hierarchy from `config` with the default replacement
    /// seed.
    ///
    /// # Errors
    ///
    /// Fails fast with a [`ConfigError`] if the geometry is invalid; no cache
    /// state is constructed in that case.
    pub fn new(config: &HierarchyConfig) -> Result<Self, ConfigError> {
        Self::with_seed(config, 0)
    }

    /// As [`Hierarchy::new`], seeding the random-replacement source so the
    /// eviction sequence is reproducible (zero selects the default seed).
    ///
    /// # Errors
    ///
    /// Fails fast with a [`ConfigError`] if the geometry is invalid.
    pub fn with_seed(config: &HierarchyConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            l1: L1Cache::new(config, seed),
            l2: L2Cache::new(config, seed),
            dram: Dram::new(config),
        })
    }

    /// Resolves one trace record through the hierarchy.
    pub fn process(&mut self, record: &TraceRecord) {
        self.access(record.kind, record.address);
    }

    /// Resolves one access of `kind` at `addr` through the hierarchy,
    /// updating every touched level's accumulators.
    pub fn access(&mut self, kind: AccessKind, addr: u64) {
        match kind {
            AccessKind::Read | AccessKind::Fetch => {
                if self.l1.probe(kind, addr) {
                    return;
                }
                if !self.l2.probe(AccessKind::Read, addr) {
                    self.dram.access(addr);
                    if self.l2.fill(AccessKind::Read, addr) {
                        self.dram.access(addr);
                    }
                }
                self.l1.fill(kind, addr);
            }
            AccessKind::Write => {
                let l1_hit = self.l1.probe(AccessKind::Write, addr);
                // Write-through: every L1 write, hit or miss, reaches L2.
                if !self.l2.probe(AccessKind::Write, addr) {
                    self.dram.access(addr);
                    if self.l2.fill(AccessKind::Write, addr) {
                        self.dram.access(addr);
                    }
                }
                if !l1_hit {
                    self.l1.fill(AccessKind::Write, addr);
                }
            }
        }
    }

    /// Total energy consumed, in joules: the exact sum of the per-level
    /// accumulators.
    pub fn total_energy_j(&self) -> f64 {
        self.l1.instruction_stats().energy_j
            + self.l1.data_stats().energy_j
            + self.l2.stats().energy_j
            + self.dram.stats().energy_j
    }

    /// Total elapsed time, in seconds: the exact sum of the per-level
    /// accumulators.
    pub fn total_time_s(&self) -> f64 {
        self.l1.instruction_stats().busy_time_s
            + self.l1.data_stats().busy_time_s
            + self.l2.stats().busy_time_s
            + self.dram.stats().busy_time_s
    }

    /// Snapshots every counter plus the derived totals.
    pub fn stats(&self) -> HierarchyStats {
        HierarchyStats {
            l1_instruction: self.l1.instruction_stats(),
            l1_data: self.l1.data_stats(),
            l2: self.l2.stats(),
            dram: self.dram.stats(),
            total_energy_j: self.total_energy_j(),
            total_time_s: self.total_time_s(),
        }
    }

    /// The L1 level.
    pub fn l1(&self) -> &L1Cache {
        &self.l1
    }

    /// The L2 level.
    pub fn l2(&self) -> &L2Cache {
        &self.l2
    }

    /// The DRAM level.
    pub fn dram(&self) -> &Dram {
        &self.dram
    }
}
