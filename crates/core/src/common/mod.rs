//! Common types shared across the simulator.
//!
//! This module provides the building blocks used by every cache level:
//! 1. **Address Layout:** Tag/index/offset decomposition for a set-associative level.
//! 2. **Access Kinds:** Classification of memory operations (Fetch/Read/Write).
//! 3. **Error Handling:** Configuration and trace-parsing error types.

/// Address decomposition for set-associative lookup.
pub mod addr;

/// Memory access kind definitions.
pub mod data;

/// Error types for configuration and trace input.
pub mod error;

pub use addr::SetLayout;
pub use data::AccessKind;
pub use error::{ConfigError, TraceError};
