//! Tests for the fluent builder and packer configuration.
//!
//! ## Test Organization
//!
//! 1. **Defaults** - Unset parameters
//! 2. **Setters** - Each parameter reaches the packer
//! 3. **Validation** - Duplicate parameters and error display

use binpack::prelude::*;

// ============================================================================
// Defaults
// ============================================================================

/// Test default configuration values.
#[test]
fn test_builder_defaults() {
    let packer = Packer::<i64>::new().build().expect("defaults should build");

    assert_eq!(packer.target_weight(), i64::MAX);
    assert_eq!(packer.lookback(), 1);
    assert_eq!(packer.eviction(), Fifo);
    assert_eq!(packer, WindowedPacker::default());
}

/// Test that the unlimited default target puts everything in one bin.
#[test]
fn test_default_target_packs_everything() {
    let packer = Packer::new().build().unwrap();
    let bins: Vec<Vec<i64>> = packer.pack(vec![1_000, 2_000, 3_000], |w| *w).collect();

    assert_eq!(bins, vec![vec![1_000, 2_000, 3_000]]);
}

// ============================================================================
// Setters
// ============================================================================

/// Test that every setter is reflected in the built packer.
#[test]
fn test_builder_setters() {
    let packer = Packer::new()
        .target_weight(64_u32)
        .lookback(8)
        .largest_bin_first(true)
        .build()
        .unwrap();

    assert_eq!(
        *packer.config(),
        PackConfig {
            target_weight: 64,
            lookback: 8,
            eviction: LargestFirst,
        }
    );
}

/// Test that the builder and the direct constructor agree.
#[test]
fn test_builder_matches_constructor() {
    let built = Packer::new()
        .target_weight(10_i64)
        .lookback(0)
        .eviction(Fifo)
        .build()
        .unwrap();

    assert_eq!(built, WindowedPacker::new(10, 0, Fifo));
    assert_eq!(
        built,
        WindowedPacker::from_config(PackConfig::new(10, 0, EvictionPolicy::from(false)))
    );
}

/// Test that out-of-range values are accepted as given.
#[test]
fn test_builder_accepts_degenerate_values() {
    let packer = Packer::new().target_weight(-5_i64).lookback(0).build();

    assert!(packer.is_ok());
}

// ============================================================================
// Validation
// ============================================================================

/// Test duplicate parameter detection.
#[test]
fn test_duplicate_parameters() {
    let result = Packer::new().target_weight(1_i64).target_weight(2).build();
    assert_eq!(
        result,
        Err(PackError::DuplicateParameter {
            parameter: "target_weight"
        })
    );

    let result = Packer::<i64>::new().lookback(1).lookback(1).build();
    assert!(matches!(
        result,
        Err(PackError::DuplicateParameter {
            parameter: "lookback"
        })
    ));
}

/// Test that `largest_bin_first` and `eviction` configure the same parameter.
#[test]
fn test_eviction_aliases_conflict() {
    let result = Packer::<i64>::new()
        .eviction(Fifo)
        .largest_bin_first(true)
        .build();

    assert!(matches!(
        result,
        Err(PackError::DuplicateParameter {
            parameter: "eviction"
        })
    ));
}

/// Test error message formatting.
#[test]
fn test_error_display() {
    let err = PackError::DuplicateParameter {
        parameter: "lookback",
    };

    assert_eq!(
        err.to_string(),
        "Parameter 'lookback' was set multiple times. Each parameter can only be configured once."
    );

    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert!(boxed.source().is_none());
}
