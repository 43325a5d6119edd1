//! Tests for the centralized configuration constants.

use crate::constants::*;

#[test]
fn epsilon_is_positive_and_small() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn default_resolution_produces_samples() {
    assert!(DEFAULT_RESOLUTION >= 1);
}

#[test]
fn default_texture_stretch_is_positive() {
    assert!(DEFAULT_TEXTURE_STRETCH > 0.0);
}

#[test]
fn approx_equal_within_epsilon() {
    let small_diff = EPSILON / 2.0;
    assert!(approx_equal(1.0, 1.0 + small_diff));
    assert!(approx_equal(1.0, 1.0 - small_diff));
    assert!(!approx_equal(1.0, 1.0 + EPSILON * 2.0));
}

#[test]
fn approx_zero_within_epsilon() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(EPSILON / 2.0));
    assert!(!approx_zero(EPSILON * 2.0));
}

#[test]
fn default_constants_are_valid() {
    let cfg = GlobalConfig::default();
    assert!(cfg.tolerance > 0.0);
    assert!(cfg.resolution >= 1);
}

#[test]
fn new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(0.0, 8).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        GlobalConfig::new(1.0e-9, 0).unwrap_err(),
        ConfigError::InvalidResolution(0)
    );
}
