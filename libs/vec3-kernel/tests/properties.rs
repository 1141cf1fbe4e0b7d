use std::f64::consts::PI;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use vec3_kernel::{angle, arithmetic, direction, metric, product, reduction, KernelError, Vec3};

fn samples() -> Vec<Vec3> {
    vec![
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(-4.5, 0.25, 9.0),
        Vec3::new(1e-4, -3e-5, 2e-4),
        Vec3::new(7e6, 1.0, -2e6),
        Vec3::new(0.0, 0.0, -1.0),
    ]
}

#[test]
fn normalized_vectors_have_unit_length() {
    let mut n = Vec3::ZERO;
    for v in samples() {
        direction::normalize(v, &mut n);
        assert_relative_eq!(metric::length(n), 1.0, epsilon = 1e-15);
    }
}

#[test]
fn nonzero_vectors_normalize_at_any_magnitude() {
    let mut n = Vec3::ZERO;
    for scale in [1e-300, 1e-200, 1e-160, 1e160, 1e200, 1e300] {
        for v in samples() {
            let v = v * scale;
            if metric::is_zero(v) || !v.is_finite() {
                continue;
            }
            direction::normalize_unsafe(v, &mut n).unwrap();
            assert_relative_eq!(metric::length(n), 1.0, epsilon = 1e-14);
        }
    }
}

#[test]
fn dot_with_self_equals_squared_length() {
    for v in samples() {
        assert_eq!(product::dot(v, v), metric::length_squared(v));
    }
}

#[test]
fn cross_is_orthogonal_to_both_operands() {
    let vs = samples();
    let mut c = Vec3::ZERO;
    for a in &vs {
        for b in &vs {
            product::cross(a, b, &mut c);
            let scale = metric::length(a) * metric::length(b) * metric::length(c);
            assert_abs_diff_eq!(product::dot(c, a), 0.0, epsilon = 1e-12 * scale.max(1.0));
            assert_abs_diff_eq!(product::dot(c, b), 0.0, epsilon = 1e-12 * scale.max(1.0));
        }
    }
}

#[test]
fn reflection_is_an_involution_for_unit_normals() {
    let mut n = Vec3::ZERO;
    let mut once = Vec3::ZERO;
    let mut twice = Vec3::ZERO;
    for normal in samples() {
        direction::normalize(normal, &mut n);
        for v in samples() {
            product::reflect(v, n, &mut once);
            product::reflect(once, n, &mut twice);
            let tol = 1e-12 * metric::length(v).max(1.0);
            assert!((twice - v).length() <= tol, "{v:?} -> {twice:?}");
        }
    }
}

#[test]
fn distance_is_symmetric() {
    let vs = samples();
    for a in &vs {
        for b in &vs {
            assert_eq!(metric::distance(a, b), metric::distance(b, a));
        }
    }
}

#[test]
fn angle_to_self_and_opposite() {
    for v in samples() {
        assert_eq!(angle::angle_to_rad(v, v), 0.0);
        assert_eq!(angle::angle_to_rad(v, -v), PI);
    }
}

#[test]
fn concrete_scenarios() {
    let mut out = Vec3::ZERO;

    arithmetic::add((1.0, 2.0, 3.0), (4.0, 5.0, 6.0), &mut out);
    assert_eq!(out, Vec3::new(5.0, 7.0, 9.0));

    product::cross((1.0, 0.0, 0.0), (0.0, 1.0, 0.0), &mut out);
    assert_eq!(out, Vec3::new(0.0, 0.0, 1.0));

    assert_eq!(product::dot((1.0, 0.0, 0.0), (0.0, 1.0, 0.0)), 0.0);
    assert_eq!(metric::length((3.0, 4.0, 0.0)), 5.0);

    direction::normalize((0.0, 0.0, 0.0), &mut out);
    assert_eq!(out, Vec3::ZERO);
    assert!(matches!(
        direction::normalize_unsafe((0.0, 0.0, 0.0), &mut out),
        Err(KernelError::DivisionByZero { .. })
    ));

    assert_eq!(reduction::min_component((5.0, 1.0, 3.0)), 1.0);
    assert_eq!(reduction::min_component_index((5.0, 1.0, 3.0)), 1);
}
