//! Unified N-way L2 cache.
//!
//! One set-associative [`CacheLevel`] with dirty tracking (write-back):
//! writes are absorbed here and marked dirty; the dirty copy is only pushed
//! to DRAM when its line is evicted. `fill` reports that condition so the
//! hierarchy can issue the write-back access.
//!
//! Each probe or fill charges one energy/time unit:
//! `time × (active + transfer + l1_idle + dram_idle)`, where the transfer
//! term is the configured per-access inter-level cost folded in as a
//! power-equivalent constant.

use tracing::trace;

use crate::cache::CacheLevel;
use crate::common::data::AccessKind;
use crate::config::HierarchyConfig;
use crate::stats::LevelStats;

/// The unified L2 cache level.
#[derive(Debug)]
pub struct L2Cache {
    level: CacheLevel,
    access_time_s: f64,
    access_energy_j: f64,
    stats: LevelStats,
}

impl L2Cache {
    /// Builds the level from a validated configuration; `seed` feeds the
    /// replacement source (zero selects the default seed).
    pub fn new(config: &HierarchyConfig, seed: u64) -> Self {
        let time = config.l2_time_s();
        let energy = time
            * (config.l2_active_w
                + config.l2_transfer_w()
                + config.l1_idle_w
                + config.dram_idle_w);
        Self {
            level: CacheLevel::with_seed(
                config.l2_bytes,
                config.l2_associativity,
                config.block_size,
                seed,
            ),
            access_time_s: time,
            access_energy_j: energy,
            stats: LevelStats::default(),
        }
    }

    /// Looks up `addr`, marking the line dirty on a write hit.
    ///
    /// Always charges one access-energy/time unit and updates the
    /// access/miss counters.
    pub fn probe(&mut self, kind: AccessKind, addr: u64) -> bool {
        let hit = if kind.is_write() {
            self.level.lookup_write(addr)
        } else {
            self.level.lookup(addr)
        };
        self.stats
            .record_probe(hit, self.access_energy_j, self.access_time_s);
        hit
    }

    /// Installs the line for `addr` after a miss, charging one more unit.
    ///
    /// The new line is dirty when the access was a write. Returns whether the
    /// evicted victim was dirty, in which case the caller must issue a DRAM
    /// access for its write-back.
    pub fn fill(&mut self, kind: AccessKind, addr: u64) -> bool {
        let write_back = self.level.install(addr, kind.is_write());
        self.stats.charge(self.access_energy_j, self.access_time_s);
        if write_back {
            trace!(addr, "l2 evicted dirty victim");
        }
        write_back
    }

    /// Checks presence of `addr`, with no accounting.
    pub fn contains(&self, addr: u64) -> bool {
        self.level.lookup(addr)
    }

    /// Checks whether `addr` is present and its line is dirty.
    pub fn is_dirty(&self, addr: u64) -> bool {
        self.level.is_dirty(addr)
    }

    /// Accumulators of this level.
    pub fn stats(&self) -> LevelStats {
        self.stats
    }
}
