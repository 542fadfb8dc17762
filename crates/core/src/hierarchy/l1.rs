//! Split L1 cache (instruction + data).
//!
//! Two independent direct-mapped [`CacheLevel`]s, selected by access kind:
//! instruction fetches hit the instruction sub-cache, reads and writes hit
//! the data sub-cache. L1 is write-through — every write is forwarded to L2
//! by the hierarchy protocol, so L1 never holds a dirty line and installs
//! never set the dirty bit.
//!
//! Each probe or fill charges one energy/time unit. The unit models
//! whole-system draw for the duration of the access: the L1 active power plus
//! the idle power of the levels that sit waiting (L2 and DRAM).

use tracing::trace;

use crate::cache::CacheLevel;
use crate::common::data::AccessKind;
use crate::config::HierarchyConfig;
use crate::stats::LevelStats;

/// The split L1 cache level.
#[derive(Debug)]
pub struct L1Cache {
    instruction: CacheLevel,
    data: CacheLevel,
    access_time_s: f64,
    access_energy_j: f64,
    instruction_stats: LevelStats,
    data_stats: LevelStats,
}

impl L1Cache {
    /// Builds both sub-caches from a validated configuration.
    ///
    /// `seed` feeds the replacement source (unused at associativity 1 but
    /// kept uniform across levels); zero selects the default seed.
    pub fn new(config: &HierarchyConfig, seed: u64) -> Self {
        let time = config.l1_time_s();
        let energy = time * (config.l1_active_w + config.l2_idle_w + config.dram_idle_w);
        Self {
            instruction: CacheLevel::with_seed(
                config.l1_instruction_bytes,
                1,
                config.block_size,
                seed,
            ),
            data: CacheLevel::with_seed(config.l1_data_bytes, 1, config.block_size, seed),
            access_time_s: time,
            access_energy_j: energy,
            instruction_stats: LevelStats::default(),
            data_stats: LevelStats::default(),
        }
    }

    fn parts(&mut self, kind: AccessKind) -> (&mut CacheLevel, &mut LevelStats) {
        match kind {
            AccessKind::Fetch => (&mut self.instruction, &mut self.instruction_stats),
            AccessKind::Read | AccessKind::Write => (&mut self.data, &mut self.data_stats),
        }
    }

    /// Looks up `addr` in the sub-cache selected by `kind`.
    ///
    /// Always charges one access-energy/time unit and bumps the matching
    /// access counter; on a miss, bumps the matching miss counter too.
    pub fn probe(&mut self, kind: AccessKind, addr: u64) -> bool {
        let (energy, time) = (self.access_energy_j, self.access_time_s);
        let (level, stats) = self.parts(kind);
        let hit = level.lookup(addr);
        stats.record_probe(hit, energy, time);
        if !hit {
            trace!(?kind, addr, "l1 miss");
        }
        hit
    }

    /// Installs the line for `addr` after a miss, charging one more unit.
    ///
    /// Direct-mapped and write-through: the single way is overwritten
    /// unconditionally once populated, and the dirty bit is never set.
    pub fn fill(&mut self, kind: AccessKind, addr: u64) {
        let (energy, time) = (self.access_energy_j, self.access_time_s);
        let (level, stats) = self.parts(kind);
        let _ = level.install(addr, false);
        stats.charge(energy, time);
    }

    /// Checks presence of `addr` in the sub-cache selected by `kind`, with no
    /// accounting.
    pub fn contains(&self, kind: AccessKind, addr: u64) -> bool {
        match kind {
            AccessKind::Fetch => self.instruction.lookup(addr),
            AccessKind::Read | AccessKind::Write => self.data.lookup(addr),
        }
    }

    /// Accumulators of the instruction sub-cache.
    pub fn instruction_stats(&self) -> LevelStats {
        self.instruction_stats
    }

    /// Accumulators of the data sub-cache.
    pub fn data_stats(&self) -> LevelStats {
        self.data_stats
    }
}
