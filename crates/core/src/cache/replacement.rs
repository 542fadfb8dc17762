//! Random replacement victim source.
//!
//! Victim selection among the ways of a full set is uniformly random. A
//! xorshift64 generator keeps the choice cheap and, because the stream is
//! fully determined by its seed, replaying a trace against an identically
//! seeded hierarchy reproduces the exact same eviction sequence.

/// Seed used when none is supplied.
const DEFAULT_SEED: u64 = 123_456_789;

/// Seedable uniform victim source for one cache level.
#[derive(Clone, Debug)]
pub struct RandomReplacement {
    ways: usize,
    state: u64,
}

impl RandomReplacement {
    /// Creates a victim source over `ways` ways with the default seed.
    pub fn new(ways: usize) -> Self {
        Self::with_seed(ways, DEFAULT_SEED)
    }

    /// Creates a victim source over `ways` ways from an explicit seed.
    ///
    /// A zero seed would pin xorshift at zero forever, so it is replaced with
    /// the default seed.
    pub fn with_seed(ways: usize, seed: u64) -> Self {
        Self {
            ways,
            state: if seed == 0 { DEFAULT_SEED } else { seed },
        }
    }

    /// Selects the way to evict from a full set.
    pub fn victim(&mut self) -> usize {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        (x as usize) % self.ways
    }
}
