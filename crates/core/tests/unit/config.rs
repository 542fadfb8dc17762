//! Configuration Unit Tests.
//!
//! Verifies the baseline defaults, fail-fast geometry validation, JSON
//! partial overrides, and the ns→s / pJ→W unit helpers.

use cachesim_core::HierarchyConfig;
use cachesim_core::common::error::ConfigError;

// ──────────────────────────────────────────────────────────
// Defaults
// ──────────────────────────────────────────────────────────

#[test]
fn default_configuration_is_valid() {
    let config = HierarchyConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.l1_instruction_bytes, 32 * 1024);
    assert_eq!(config.l1_data_bytes, 32 * 1024);
    assert_eq!(config.l2_bytes, 256 * 1024);
    assert_eq!(config.l2_associativity, 4);
    assert_eq!(config.block_size, 64);
}

// ──────────────────────────────────────────────────────────
// Validation
// ──────────────────────────────────────────────────────────

#[test]
fn non_power_of_two_sizes_are_rejected() {
    let cases: [(&str, fn(&mut HierarchyConfig)); 5] = [
        ("l1_instruction_bytes", |c| c.l1_instruction_bytes = 3000),
        ("l1_data_bytes", |c| c.l1_data_bytes = 48 * 1024),
        ("l2_bytes", |c| c.l2_bytes = 100_000),
        ("l2_associativity", |c| c.l2_associativity = 3),
        ("block_size", |c| c.block_size = 48),
    ];
    for (field, poison) in cases {
        let mut config = HierarchyConfig::default();
        poison(&mut config);
        match config.validate() {
            Err(ConfigError::NotPowerOfTwo { field: got, .. }) => assert_eq!(got, field),
            other => panic!("{field}: expected NotPowerOfTwo, got {other:?}"),
        }
    }
}

#[test]
fn block_larger_than_capacity_is_rejected() {
    let config = HierarchyConfig {
        l1_data_bytes: 64,
        block_size: 128,
        ..HierarchyConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::BlockTooLarge {
            field: "l1_data_bytes",
            ..
        })
    ));
}

/// `size = ways × block × sets` must hold exactly for L2.
#[test]
fn l2_capacity_smaller_than_one_full_set_is_rejected() {
    let config = HierarchyConfig {
        l2_bytes: 128,
        l2_associativity: 4,
        block_size: 64,
        ..HierarchyConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Geometry { .. })
    ));
}

#[test]
fn zero_sized_caches_are_rejected() {
    let config = HierarchyConfig {
        l1_data_bytes: 0,
        ..HierarchyConfig::default()
    };
    assert!(config.validate().is_err());
}

// ──────────────────────────────────────────────────────────
// Deserialization
// ──────────────────────────────────────────────────────────

/// A JSON config may override only the fields it cares about.
#[test]
fn json_partial_override_keeps_defaults() {
    let config: HierarchyConfig =
        serde_json::from_str(r#"{ "l2_associativity": 8, "dram_time_ns": 60.0 }"#)
            .expect("valid partial config");
    assert_eq!(config.l2_associativity, 8);
    assert_eq!(config.dram_time_ns, 60.0);
    assert_eq!(config.l2_bytes, 256 * 1024);
    assert_eq!(config.l1_time_ns, 0.5);
}

// ──────────────────────────────────────────────────────────
// Unit helpers
// ──────────────────────────────────────────────────────────

#[test]
fn unit_conversions() {
    let close = |a: f64, b: f64| (a - b).abs() <= b * 1e-12;
    let config = HierarchyConfig::default();
    assert!(close(config.l1_time_s(), 0.5e-9));
    assert!(close(config.l2_time_s(), 5.0e-9));
    assert!(close(config.dram_time_s(), 50.0e-9));
    assert!(close(config.l2_transfer_w(), 5.0e-12));
    assert!(close(config.dram_transfer_w(), 640.0e-12));
}
