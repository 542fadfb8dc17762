//! Address Decomposition Unit Tests.
//!
//! Verifies the tag/index/offset split of `SetLayout`: known-value checks
//! against hand-computed decompositions, edge addresses (zero, all-ones),
//! and a property test that the split is lossless for every geometry.

use cachesim_core::common::addr::SetLayout;
use proptest::prelude::*;

// ──────────────────────────────────────────────────────────
// Known-value decompositions
// ──────────────────────────────────────────────────────────

/// 2 sets of 64-byte blocks: offset = addr % 64, index = (addr / 64) % 2,
/// tag = addr / 128.
#[test]
fn decode_two_sets_of_64_byte_blocks() {
    let layout = SetLayout::new(2, 64);
    assert_eq!(layout.offset_bits(), 6);
    assert_eq!(layout.index_bits(), 1);

    assert_eq!(layout.decode(0), (0, 0));
    assert_eq!(layout.decode(63), (0, 0)); // same block
    assert_eq!(layout.decode(64), (0, 1)); // next set
    assert_eq!(layout.decode(128), (1, 0)); // wraps back, new tag
    assert_eq!(layout.decode(0x1234), (0x24, 0));
}

/// A single set degenerates to index 0 for every address.
#[test]
fn decode_single_set_has_no_index_bits() {
    let layout = SetLayout::new(1, 1);
    assert_eq!(layout.offset_bits(), 0);
    assert_eq!(layout.index_bits(), 0);
    assert_eq!(layout.decode(0), (0, 0));
    assert_eq!(layout.decode(u64::MAX), (u64::MAX, 0));
}

/// Offset bits never leak into the index or tag.
#[test]
fn offset_is_masked_out_of_hit_logic() {
    let layout = SetLayout::new(8, 16);
    let (tag_a, idx_a) = layout.decode(0x400);
    let (tag_b, idx_b) = layout.decode(0x400 + 15); // last byte of the block
    assert_eq!((tag_a, idx_a), (tag_b, idx_b));
    assert_eq!(layout.offset(0x400 + 15), 15);
}

/// Address zero and address all-ones are ordinary inputs.
#[test]
fn extreme_addresses_decode_without_bounds_issues() {
    let layout = SetLayout::new(1024, 64);
    assert_eq!(layout.decode(0), (0, 0));
    let (tag, index) = layout.decode(u64::MAX);
    assert_eq!(index, 1023);
    assert_eq!(tag, u64::MAX >> 16);
}

// ──────────────────────────────────────────────────────────
// Lossless reconstruction property
// ──────────────────────────────────────────────────────────

proptest! {
    /// `tag ‖ index ‖ offset` reconstructs the address bit-exactly for any
    /// power-of-two geometry.
    #[test]
    fn decode_is_lossless(
        addr in any::<u64>(),
        index_bits in 0u32..12,
        offset_bits in 0u32..10,
    ) {
        let num_sets = 1usize << index_bits;
        let block_size = 1usize << offset_bits;
        let layout = SetLayout::new(num_sets, block_size);

        let (tag, index) = layout.decode(addr);
        let rebuilt = (tag << (index_bits + offset_bits))
            | ((index as u64) << offset_bits)
            | layout.offset(addr);
        prop_assert_eq!(rebuilt, addr);
    }
}
