//! DRAM backing store.
//!
//! The terminal level: every access is a guaranteed hit, so there is no
//! replacement, no capacity limit, and no state beyond the accumulators.
//! Each access charges `time × (active + transfer + l1_idle + l2_idle)`.

use crate::config::HierarchyConfig;
use crate::stats::LevelStats;

/// The DRAM model.
#[derive(Debug)]
pub struct Dram {
    access_time_s: f64,
    access_energy_j: f64,
    stats: LevelStats,
}

impl Dram {
    /// Builds the model from a configuration's DRAM timing/power figures.
    pub fn new(config: &HierarchyConfig) -> Self {
        let time = config.dram_time_s();
        let energy = time
            * (config.dram_active_w
                + config.dram_transfer_w()
                + config.l1_idle_w
                + config.l2_idle_w);
        Self {
            access_time_s: time,
            access_energy_j: energy,
            stats: LevelStats::default(),
        }
    }

    /// Serves one access (always a hit), charging one energy/time unit.
    pub fn access(&mut self, _addr: u64) {
        self.stats
            .record_probe(true, self.access_energy_j, self.access_time_s);
    }

    /// Accumulators of this level (`misses` is always zero).
    pub fn stats(&self) -> LevelStats {
        self.stats
    }
}
