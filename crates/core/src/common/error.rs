//! Error types for configuration and trace input.
//!
//! The access protocol itself has no failure modes: every address and access
//! kind is handled unconditionally. The only contract violations are:
//! 1. **Misconfiguration:** Non-power-of-two sizes or inconsistent geometry,
//!    rejected at hierarchy construction before any address decoding happens.
//! 2. **Trace input:** I/O failures and unparsable trace lines.

use thiserror::Error;

/// A hierarchy configuration that would corrupt address decoding.
///
/// Returned by `HierarchyConfig::validate` (and therefore `Hierarchy::new`);
/// a rejected configuration never constructs any cache state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A size, associativity, or block-size parameter is not a power of two.
    #[error("{field} must be a power of two, got {value}")]
    NotPowerOfTwo {
        /// Name of the offending configuration field.
        field: &'static str,
        /// The rejected value.
        value: usize,
    },

    /// The block size exceeds a cache capacity, leaving zero sets.
    #[error("block_size ({block_size} B) exceeds {field} ({capacity} B)")]
    BlockTooLarge {
        /// Name of the capacity field the block size was checked against.
        field: &'static str,
        /// Configured block size in bytes.
        block_size: usize,
        /// Configured capacity in bytes.
        capacity: usize,
    },

    /// A capacity is not an exact multiple of `associativity × block_size`,
    /// so `size = ways × block × sets` cannot hold.
    #[error("{field} ({capacity} B) is not divisible by associativity * block_size ({ways} * {block_size})")]
    Geometry {
        /// Name of the capacity field.
        field: &'static str,
        /// Configured capacity in bytes.
        capacity: usize,
        /// Configured associativity.
        ways: usize,
        /// Configured block size in bytes.
        block_size: usize,
    },
}

/// Failure while reading or parsing a trace file.
#[derive(Debug, Error)]
pub enum TraceError {
    /// Underlying I/O failure.
    #[error("failed to read trace: {0}")]
    Io(#[from] std::io::Error),

    /// A three-field trace line whose fields did not parse.
    #[error("trace line {line}: {reason}")]
    Malformed {
        /// 1-based line number in the trace input.
        line: usize,
        /// What failed to parse.
        reason: String,
    },
}
