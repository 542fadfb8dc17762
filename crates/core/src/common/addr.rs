//! Address decomposition for set-associative lookup.
//!
//! A 64-bit address splits losslessly into `tag ‖ index ‖ offset`: the offset
//! selects a byte within a block, the index selects a set, and the remaining
//! high bits form the tag that identifies which block occupies a line. The
//! split is only well-defined when both the block size and the set count are
//! powers of two; configuration validation enforces that before a layout is
//! ever constructed.

/// Precomputed tag/index/offset split for one cache level.
///
/// Constructed once per level from its set count and block size; `decode` is
/// then pure bit arithmetic on the access path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetLayout {
    offset_bits: u32,
    index_bits: u32,
    index_mask: u64,
}

impl SetLayout {
    /// Creates a layout for a level with `num_sets` sets of `block_size`-byte
    /// blocks.
    ///
    /// Both arguments must be powers of two; callers validate this at
    /// configuration time (see `HierarchyConfig::validate`).
    pub fn new(num_sets: usize, block_size: usize) -> Self {
        debug_assert!(num_sets.is_power_of_two());
        debug_assert!(block_size.is_power_of_two());
        Self {
            offset_bits: block_size.trailing_zeros(),
            index_bits: num_sets.trailing_zeros(),
            index_mask: (num_sets as u64) - 1,
        }
    }

    /// Splits an address into its `(tag, index)` pair.
    ///
    /// The block offset is masked away; it plays no part in hit/miss
    /// determination. Every address decodes to some valid set index, so there
    /// is no error path.
    #[inline]
    pub fn decode(&self, addr: u64) -> (u64, usize) {
        let index = (addr >> self.offset_bits) & self.index_mask;
        let tag = addr >> (self.offset_bits + self.index_bits);
        (tag, index as usize)
    }

    /// Byte offset of `addr` within its block.
    #[inline]
    pub fn offset(&self, addr: u64) -> u64 {
        addr & ((1u64 << self.offset_bits) - 1)
    }

    /// Number of block-offset bits.
    pub fn offset_bits(&self) -> u32 {
        self.offset_bits
    }

    /// Number of set-index bits.
    pub fn index_bits(&self) -> u32 {
        self.index_bits
    }
}
