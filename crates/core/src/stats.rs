//! Per-level accumulators and report formatting.
//!
//! Every cache level owns a [`LevelStats`] that only that level's operations
//! update; counters increase monotonically and are never reset mid-run.
//! Hierarchy-wide totals are derived as exact sums of the per-level figures,
//! so `total_energy == l1_i + l1_d + l2 + dram` holds without drift.

/// Monotonic accumulators for one cache level (or one L1 sub-cache).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LevelStats {
    /// Number of probes served by this level.
    pub accesses: u64,
    /// Number of probes that missed.
    pub misses: u64,
    /// Energy consumed by this level, in joules.
    pub energy_j: f64,
    /// Cumulative busy time of this level, in seconds.
    pub busy_time_s: f64,
}

impl LevelStats {
    /// Records one probe: bumps the access counter, the miss counter when
    /// `hit` is false, and charges one energy/time unit.
    pub(crate) fn record_probe(&mut self, hit: bool, energy_j: f64, time_s: f64) {
        self.accesses += 1;
        if !hit {
            self.misses += 1;
        }
        self.charge(energy_j, time_s);
    }

    /// Charges one energy/time unit without counting an access.
    ///
    /// Used for miss fills, which are billed as a second slot cycle of the
    /// probe that missed.
    pub(crate) fn charge(&mut self, energy_j: f64, time_s: f64) {
        self.energy_j += energy_j;
        self.busy_time_s += time_s;
    }

    /// Fraction of probes that missed, or zero before the first probe.
    pub fn miss_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.misses as f64 / self.accesses as f64
        }
    }
}

/// Snapshot of every counter in the hierarchy plus derived totals.
///
/// Obtained from `Hierarchy::stats`; totals are computed at snapshot time as
/// the exact sum of the per-level accumulators.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HierarchyStats {
    /// L1 instruction sub-cache accumulators.
    pub l1_instruction: LevelStats,
    /// L1 data sub-cache accumulators.
    pub l1_data: LevelStats,
    /// Unified L2 accumulators.
    pub l2: LevelStats,
    /// DRAM accumulators (misses are always zero).
    pub dram: LevelStats,
    /// Total energy across all levels, in joules.
    pub total_energy_j: f64,
    /// Total elapsed (busy) time across all levels, in seconds.
    pub total_time_s: f64,
}

impl HierarchyStats {
    /// Prints the report table to stdout.
    pub fn print_report(&self) {
        let print_level = |name: &str, s: &LevelStats| {
            println!(
                "  {:<6} accesses: {:<10} | misses: {:<10} | miss_rate: {:>6.2}% | energy: {:.6e} J",
                name,
                s.accesses,
                s.misses,
                s.miss_rate() * 100.0,
                s.energy_j
            );
        };
        println!("==========================================================");
        println!("CACHE HIERARCHY SIMULATION STATISTICS");
        println!("==========================================================");
        println!("total_energy             {:.6e} J", self.total_energy_j);
        println!("total_time               {:.6e} s", self.total_time_s);
        println!("----------------------------------------------------------");
        println!("MEMORY HIERARCHY");
        print_level("L1-I", &self.l1_instruction);
        print_level("L1-D", &self.l1_data);
        print_level("L2", &self.l2);
        print_level("DRAM", &self.dram);
        println!("==========================================================");
    }
}
