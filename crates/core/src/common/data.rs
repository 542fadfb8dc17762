//! Memory access kinds.
//!
//! Classifies the operations appearing in a trace. The kind decides which L1
//! sub-cache serves an access and whether L2 lines are dirtied:
//! 1. **Routing:** `Fetch` targets the L1 instruction cache; `Read` and
//!    `Write` target the L1 data cache.
//! 2. **Coherence:** `Write` marks L2 lines dirty (write-back); L1 is
//!    write-through and never holds a dirty line.
//! 3. **Statistics:** Accesses and misses are counted per sub-cache.

/// Kind of memory access operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessKind {
    /// Instruction fetch.
    ///
    /// Served by the L1 instruction cache; read-only at every level.
    Fetch,

    /// Data read.
    ///
    /// Served by the L1 data cache.
    Read,

    /// Data write.
    ///
    /// Served by the L1 data cache. Written through to L2, where the line is
    /// held dirty until eviction.
    Write,
}

impl AccessKind {
    /// Returns `true` for `Write` accesses.
    #[inline]
    pub fn is_write(self) -> bool {
        matches!(self, Self::Write)
    }
}
