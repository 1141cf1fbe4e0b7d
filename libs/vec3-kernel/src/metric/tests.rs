//! Tests covering lengths, distances and the zero-handling twins.

use super::*;
use crate::access::{Slot, Vec3};
use approx::assert_relative_eq;

#[test]
fn length_of_pythagorean_triple() {
    assert_eq!(length([3.0, 4.0, 0.0]), 5.0);
    assert_eq!(length_unsafe([3.0, 4.0, 0.0]), 5.0);
    assert_eq!(length_squared((1.0, 2.0, 2.0)), 9.0);
}

#[test]
fn length_twins_agree_on_zero() {
    assert_eq!(length(Vec3::ZERO), 0.0);
    assert_eq!(length_unsafe(Vec3::ZERO), 0.0);
    assert_eq!(length_with_tolerance(Vec3::ZERO, 0.0), 0.0);
    assert_eq!(length(Vec3::new(-0.0, 0.0, -0.0)), 0.0);
}

#[test]
fn length_with_tolerance_snaps_small_vectors() {
    let tiny = [1e-10, -1e-10, 5e-11];
    assert_eq!(length_with_tolerance(tiny, 1e-9), 0.0);
    assert!(length(tiny) > 0.0);
    assert_eq!(length_with_tolerance([3.0, 4.0, 0.0], 1e-9), 5.0);
}

#[test]
fn tolerance_band_is_componentwise() {
    // one component outside the band keeps the true length
    let v = [1e-12, 1e-12, 2e-9];
    assert!(length_with_tolerance(v, 1e-9) > 0.0);
    assert!(!is_zero_with_tolerance(v, 1e-9));
}

#[test]
fn inverse_length_unsafe_rejects_zero() {
    assert_eq!(
        inverse_length_unsafe(Vec3::ZERO),
        Err(KernelError::DivisionByZero {
            operation: "inverse_length_unsafe"
        })
    );
    assert_eq!(inverse_length_unsafe([0.0, 0.0, 2.0]), Ok(0.5));
}

#[test]
fn lengths_of_extreme_magnitudes() {
    assert_eq!(length([1e200, 0.0, 0.0]), 1e200);
    assert_eq!(length([0.0, -1e-200, 0.0]), 1e-200);
    assert_relative_eq!(length([3e300, 4e300, 0.0]), 5e300, max_relative = 1e-15);
    assert_relative_eq!(length([3e-300, 0.0, 4e-300]), 5e-300, max_relative = 1e-15);
    assert_eq!(length([f64::INFINITY, 1.0, 0.0]), f64::INFINITY);
}

#[test]
fn reciprocals_of_tiny_and_huge_vectors() {
    let tiny = [1e-200, 0.0, 0.0];
    assert_relative_eq!(inverse_length_unsafe(tiny).unwrap(), 1e200, max_relative = 1e-15);
    assert_relative_eq!(inverse_length(tiny), 1e200, max_relative = 1e-15);
    assert_relative_eq!(inverse_length_with_tolerance(tiny, 0.0), 1e200, max_relative = 1e-15);
    assert_relative_eq!(inverse_length([0.0, 3e200, 4e200]), 2e-201, max_relative = 1e-15);

    let origin = Vec3::ZERO;
    let near = inverse_distance_unsafe(origin, [0.0, 0.0, 1e-180]).unwrap();
    assert_relative_eq!(near, 1e180, max_relative = 1e-15);
    assert_relative_eq!(inverse_distance(origin, [0.0, 0.0, -1e180]), 1e-180, max_relative = 1e-15);
}

#[test]
fn inverse_length_tolerant_twins() {
    assert_eq!(inverse_length(Vec3::ZERO), 0.0);
    assert_eq!(inverse_length([0.0, 4.0, 0.0]), 0.25);
    assert_eq!(inverse_length_with_tolerance([1e-10, 0.0, 0.0], 1e-9), 0.0);
    assert_eq!(inverse_length_with_tolerance([0.0, 4.0, 0.0], 1e-9), 0.25);
}

#[test]
fn distance_between_points() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(4.0, 6.0, 3.0);
    assert_eq!(distance(a, b), 5.0);
    assert_eq!(distance_unsafe(a, b), 5.0);
    assert_eq!(distance_squared(a, b), 25.0);
    assert_eq!(inverse_distance(a, b), 0.2);
    assert_eq!(inverse_distance_unsafe(a, b), Ok(0.2));
}

#[test]
fn distance_is_bitwise_symmetric() {
    let a = Vec3::new(0.1, -7.3, 1e-3);
    let b = Vec3::new(-2.9, 0.77, 13.0);
    assert_eq!(distance(a, b).to_bits(), distance(b, a).to_bits());
    assert_eq!(
        distance_squared(a, b).to_bits(),
        distance_squared(b, a).to_bits()
    );
}

#[test]
fn coincident_points() {
    let p = Vec3::new(1.5, 2.5, 3.5);
    assert_eq!(distance(p, p), 0.0);
    assert!(inverse_distance_unsafe(p, p).is_err());
    assert_eq!(inverse_distance(p, p), 0.0);

    let q = p + Vec3::splat(1e-12);
    assert_eq!(distance_with_tolerance(p, q, 1e-9), 0.0);
    assert_eq!(inverse_distance_with_tolerance(p, q, 1e-9), 0.0);
    assert!(distance(p, q) > 0.0);
}

#[test]
fn distance_over_packed_buffer() {
    let packed = [1.0, 1.0, 1.0, 2.0, 3.0, 7.0];
    let d = distance(Slot::new(&packed, 0), Slot::new(&packed, 3));
    assert_relative_eq!(d, 41.0_f64.sqrt());
}

#[test]
fn is_zero_accepts_negative_zero() {
    assert!(is_zero([-0.0, 0.0, -0.0]));
    assert!(!is_zero([0.0, f64::MIN_POSITIVE, 0.0]));
}
