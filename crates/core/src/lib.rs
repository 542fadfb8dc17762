//! Cache hierarchy energy/latency simulator library.
//!
//! This crate estimates the energy and time cost of memory traffic through a
//! two-level cache hierarchy backed by DRAM, driven by a trace of memory
//! accesses. It provides the following:
//! 1. **Cache model:** Generic set-associative levels with random replacement
//!    and dirty-line tracking.
//! 2. **Hierarchy:** Split L1 (instruction/data, direct-mapped, write-through)
//!    over a unified N-way write-back L2 over an always-hit DRAM.
//! 3. **Accounting:** Per-level access/miss counters and energy/time
//!    accumulators, with exact hierarchy-wide totals.
//! 4. **Trace input:** Parser for dinero-style `kind address data` text traces.
//! 5. **Configuration:** Explicit, validated sizing/timing/power parameters.

/// Set-associative cache level and replacement policy.
pub mod cache;
/// Common types (address layout, access kinds, error types).
pub mod common;
/// Hierarchy configuration (defaults, validation, unit conversion).
pub mod config;
/// The L1/L2/DRAM composition and the per-access protocol.
pub mod hierarchy;
/// Per-level accumulators and report formatting.
pub mod stats;
/// Trace-file reader.
pub mod trace;

/// Kind of memory access (instruction fetch, data read, data write).
pub use crate::common::data::AccessKind;
/// Root configuration type; use `HierarchyConfig::default()` or deserialize from JSON.
pub use crate::config::HierarchyConfig;
/// Top-level simulator state; construct with `Hierarchy::new`, drive with `process`.
pub use crate::hierarchy::Hierarchy;
/// Snapshot of all counters and totals; obtain via `Hierarchy::stats`.
pub use crate::stats::HierarchyStats;
/// One trace entry (kind, address, data).
pub use crate::trace::TraceRecord;
