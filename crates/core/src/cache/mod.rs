//! Generic set-associative cache level.
//!
//! This module implements the storage structure shared by every cache in the
//! hierarchy: a fixed number of sets, each holding up to `ways` lines. It
//! models only presence and dirtiness — no data is stored. It provides:
//! 1. **Lookup:** Tag scan within a set, with an optional dirty-marking
//!    variant for write hits.
//! 2. **Installation:** Miss fill into an empty way, or random-replacement
//!    eviction with a dirty-victim report for the caller's write-back.
//! 3. **Introspection:** Read-only presence and dirtiness queries.
//!
//! Direct-mapped levels are the degenerate case with one way per set.

/// Random replacement victim selection.
pub mod replacement;

use self::replacement::RandomReplacement;
use crate::common::addr::SetLayout;

/// One cache line: the tag of the occupying block, or `None` if the line has
/// never been used, plus a dirty flag for write-back levels.
///
/// Lines are created empty at construction and overwritten in place for the
/// lifetime of the cache; they are never individually destroyed.
#[derive(Clone, Debug, Default)]
struct CacheLine {
    tag: Option<u64>,
    dirty: bool,
}

/// A set-associative cache level.
///
/// Lines are stored as a flat `num_sets × ways` vector; set `s` occupies
/// `lines[s * ways .. (s + 1) * ways]`. The invariant
/// `size_bytes = ways × block_size × num_sets` holds at construction and
/// never changes.
#[derive(Debug)]
pub struct CacheLevel {
    lines: Vec<CacheLine>,
    layout: SetLayout,
    ways: usize,
    policy: RandomReplacement,
}

impl CacheLevel {
    /// Creates an empty level of `size_bytes` capacity, `ways` ways, and
    /// `block_size`-byte blocks, with the default replacement seed.
    ///
    /// Geometry must already be validated (powers of two, exact division);
    /// see `HierarchyConfig::validate`.
    pub fn new(size_bytes: usize, ways: usize, block_size: usize) -> Self {
        Self::with_seed(size_bytes, ways, block_size, 0)
    }

    /// As `new`, with an explicit replacement seed (zero means default).
    pub fn with_seed(size_bytes: usize, ways: usize, block_size: usize, seed: u64) -> Self {
        debug_assert_eq!(size_bytes % (ways * block_size), 0);
        let num_sets = size_bytes / (ways * block_size);
        Self {
            lines: vec![CacheLine::default(); num_sets * ways],
            layout: SetLayout::new(num_sets, block_size),
            ways,
            policy: RandomReplacement::with_seed(ways, seed),
        }
    }

    /// Index of the way holding `tag` in set `set`, if present.
    fn find(&self, set: usize, tag: u64) -> Option<usize> {
        let base = set * self.ways;
        (0..self.ways).find(|&way| self.lines[base + way].tag == Some(tag))
    }

    /// Checks whether the block containing `addr` is present.
    ///
    /// Pure tag scan; no replacement or accounting side effects.
    pub fn lookup(&self, addr: u64) -> bool {
        let (tag, set) = self.layout.decode(addr);
        self.find(set, tag).is_some()
    }

    /// As `lookup`, additionally marking the matched line dirty.
    ///
    /// Used by write-back levels on write hits.
    pub fn lookup_write(&mut self, addr: u64) -> bool {
        let (tag, set) = self.layout.decode(addr);
        match self.find(set, tag) {
            Some(way) => {
                self.lines[set * self.ways + way].dirty = true;
                true
            }
            None => false,
        }
    }

    /// Installs the block containing `addr` after a miss.
    ///
    /// An empty way in the set is filled first; once the set is full, the
    /// victim is chosen uniformly at random among the ways. Returns whether
    /// the evicted victim was dirty — the caller is responsible for issuing
    /// the resulting write-back to the next level.
    pub fn install(&mut self, addr: u64, mark_dirty: bool) -> bool {
        let (tag, set) = self.layout.decode(addr);
        let base = set * self.ways;

        let way = match (0..self.ways).find(|&w| self.lines[base + w].tag.is_none()) {
            Some(empty) => empty,
            None => self.policy.victim(),
        };

        let line = &mut self.lines[base + way];
        let evicted_dirty = line.dirty;
        *line = CacheLine {
            tag: Some(tag),
            dirty: mark_dirty,
        };
        evicted_dirty
    }

    /// Checks whether the line holding `addr` is present and dirty.
    pub fn is_dirty(&self, addr: u64) -> bool {
        let (tag, set) = self.layout.decode(addr);
        self.find(set, tag)
            .is_some_and(|way| self.lines[set * self.ways + way].dirty)
    }

    /// Number of sets in this level.
    pub fn num_sets(&self) -> usize {
        self.lines.len() / self.ways
    }

    /// Number of ways per set.
    pub fn ways(&self) -> usize {
        self.ways
    }

    /// The address layout used by this level.
    pub fn layout(&self) -> SetLayout {
        self.layout
    }
}
