//! Tests for axis-aligned and Rodrigues rotations.

use super::*;
use crate::access::Vec3;
use crate::direction::normalize;
use crate::metric::length;
use std::f64::consts::{FRAC_PI_2, PI};

const EPS: f64 = 1e-12;

fn assert_close(actual: Vec3, expected: Vec3) {
    assert!(
        (actual - expected).length() < EPS,
        "expected {expected:?}, got {actual:?}"
    );
}

#[test]
fn quarter_turns_cycle_the_basis() {
    let mut out = Vec3::ZERO;
    rotate_x_rad(Vec3::Y, FRAC_PI_2, &mut out);
    assert_close(out, Vec3::Z);
    rotate_y_rad(Vec3::Z, FRAC_PI_2, &mut out);
    assert_close(out, Vec3::X);
    rotate_z_rad(Vec3::X, FRAC_PI_2, &mut out);
    assert_close(out, Vec3::Y);
}

#[test]
fn axis_component_is_untouched() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    let mut out = Vec3::ZERO;
    rotate_x_rad(v, 0.4, &mut out);
    assert_eq!(out.x, v.x);
    rotate_y_rad(v, 0.4, &mut out);
    assert_eq!(out.y, v.y);
    rotate_z_rad(v, 0.4, &mut out);
    assert_eq!(out.z, v.z);
}

#[test]
fn degree_variants_match_radians() {
    let v = Vec3::new(0.5, -1.5, 2.0);
    let mut deg = Vec3::ZERO;
    let mut rad = Vec3::ZERO;

    rotate_x_deg(v, 30.0, &mut deg);
    rotate_x_rad(v, PI / 6.0, &mut rad);
    assert_close(deg, rad);

    rotate_y_deg(v, -45.0, &mut deg);
    rotate_y_rad(v, -PI / 4.0, &mut rad);
    assert_close(deg, rad);

    rotate_z_deg(v, 180.0, &mut deg);
    assert_close(deg, Vec3::new(-0.5, 1.5, 2.0));
}

#[test]
fn precomputed_sin_cos_is_reusable() {
    let (sin, cos) = (FRAC_PI_2.sin(), FRAC_PI_2.cos());
    let mut out = [0.0; 3];
    rotate_z_sin_cos([0.0, 1.0, 0.0], sin, cos, &mut out);
    assert_close(Vec3::from_array(out), Vec3::NEG_X);
}

#[test]
fn rotations_preserve_length() {
    let v = Vec3::new(-2.0, 0.3, 4.1);
    let mut out = Vec3::ZERO;
    rotate_axis_rad(v, Vec3::new(0.0, 0.6, 0.8), 1.234, &mut out);
    assert!((length(out) - length(v)).abs() < EPS);
}

#[test]
fn rodrigues_matches_axis_aligned_rotation() {
    let v = Vec3::new(0.7, -0.2, 1.9);
    let mut expected = Vec3::ZERO;
    let mut actual = Vec3::ZERO;

    rotate_x_rad(v, 0.9, &mut expected);
    rotate_axis_rad(v, Vec3::X, 0.9, &mut actual);
    assert_close(actual, expected);

    rotate_y_rad(v, -2.1, &mut expected);
    rotate_axis_rad(v, Vec3::Y, -2.1, &mut actual);
    assert_close(actual, expected);

    rotate_z_deg(v, 75.0, &mut expected);
    rotate_axis_deg(v, Vec3::Z, 75.0, &mut actual);
    assert_close(actual, expected);
}

#[test]
fn rotating_about_own_axis_is_identity() {
    let mut axis = Vec3::ZERO;
    normalize([1.0, 1.0, 1.0], &mut axis);
    let v = axis * 3.0;
    let mut out = Vec3::ZERO;
    rotate_axis_rad(v, axis, 2.0, &mut out);
    assert_close(out, v);
}

#[test]
fn third_turn_about_diagonal_permutes_axes() {
    let mut axis = Vec3::ZERO;
    normalize([1.0, 1.0, 1.0], &mut axis);
    let mut out = Vec3::ZERO;
    rotate_axis_deg(Vec3::X, axis, 120.0, &mut out);
    assert_close(out, Vec3::Y);
}
