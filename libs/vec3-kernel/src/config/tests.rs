//! Tests covering kernel configuration behavior.

use super::*;
use crate::access::Vec3;
use crate::error::KernelError;
use config::constants::ZERO_TOLERANCE;

#[test]
fn default_matches_constants() {
    let cfg = KernelConfig::default();
    assert_eq!(cfg.tolerance(), ZERO_TOLERANCE);
    assert_eq!(KernelConfig::epsilon().tolerance(), EPSILON_TOLERANCE);
}

#[test]
fn builder_validates_input() {
    assert_eq!(
        KernelConfig::new(-1e-3).unwrap_err(),
        KernelError::InvalidTolerance(-1e-3)
    );
    assert!(KernelConfig::new(f64::NAN).is_err());
    assert_eq!(KernelConfig::new(0.0), Ok(KernelConfig::default()));
}

#[test]
fn from_global_config() {
    let global = GlobalConfig::new(0.25).unwrap();
    assert_eq!(KernelConfig::from(global).tolerance(), 0.25);
}

#[test]
fn band_drives_delegated_operations() {
    let cfg = KernelConfig::new(1e-6).unwrap();
    let tiny = [5e-7, -5e-7, 0.0];
    assert!(cfg.is_zero(tiny));
    assert_eq!(cfg.length(tiny), 0.0);
    assert_eq!(cfg.inverse_length(tiny), 0.0);

    let mut out = Vec3::ONE;
    cfg.normalize(tiny, &mut out);
    assert_eq!(out, Vec3::ZERO);

    cfg.normalize([0.0, 0.0, 8.0], &mut out);
    assert_eq!(out, Vec3::Z);
    assert_eq!(cfg.length([0.0, 0.0, 8.0]), 8.0);
}

#[test]
fn default_band_only_catches_exact_zero() {
    let cfg = KernelConfig::default();
    assert!(cfg.is_zero(Vec3::ZERO));
    assert!(!cfg.is_zero([f64::MIN_POSITIVE, 0.0, 0.0]));
}
