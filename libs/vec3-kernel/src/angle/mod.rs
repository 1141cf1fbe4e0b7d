//! Angles between vectors.
//!
//! The `_unsafe` forms assume unit-length inputs and apply the arccosine to
//! the raw dot product. The general forms normalize through
//! `sqrt(|v1|² |v2|²)`, return early for zero vectors, identical vectors and
//! exact opposites, and only then call the clamped [`acos`]. When that product
//! leaves the normal `f64` range each operand is first divided by its largest
//! component magnitude, which leaves the cosine unchanged.
//!
//! [`angle_between_rad`] and [`signed_angle_rad`] use
//! `atan2(|v1 × v2|, v1 · v2)`, which keeps full precision near `0` and `π`
//! where the arccosine flattens out.

use std::f64::consts::PI;

use crate::access::VectorSource;
use crate::metric::{all_zero, norm, norm_squared, rescaled, square_in_range};
use crate::product::{cross_xyz, dot_xyz};
use crate::scalar::{acos, atan2, sqrt, to_degrees};

/// Cosine of the angle between two unit vectors: their dot product.
#[inline]
pub fn cos_angle_to_unsafe<A: VectorSource, B: VectorSource>(v1: A, v2: B) -> f64 {
    dot_xyz(v1.xyz(), v2.xyz())
}

#[inline]
fn cos_between(a: (f64, f64, f64), b: (f64, f64, f64)) -> f64 {
    if all_zero(a.0, a.1, a.2) || all_zero(b.0, b.1, b.2) {
        return 0.0;
    }
    let len_product = norm_squared(a.0, a.1, a.2) * norm_squared(b.0, b.1, b.2);
    if square_in_range(len_product) {
        return dot_xyz(a, b) / sqrt(len_product);
    }
    let (_, a) = rescaled(a.0, a.1, a.2);
    let (_, b) = rescaled(b.0, b.1, b.2);
    dot_xyz(a, b) / sqrt(norm_squared(a.0, a.1, a.2) * norm_squared(b.0, b.1, b.2))
}

/// Cosine of the angle between two vectors of any length.
///
/// Returns `0` when either vector is the zero vector instead of dividing by
/// zero.
#[inline]
pub fn cos_angle_to<A: VectorSource, B: VectorSource>(v1: A, v2: B) -> f64 {
    cos_between(v1.xyz(), v2.xyz())
}

/// Angle in radians between two vectors of any length, in `[0, π]`.
///
/// # Examples
/// ```
/// use std::f64::consts::{FRAC_PI_2, PI};
/// use vec3_kernel::{angle, Vec3};
///
/// assert_eq!(angle::angle_to_rad(Vec3::X, Vec3::X * 3.0), 0.0);
/// assert_eq!(angle::angle_to_rad(Vec3::X, Vec3::NEG_X), PI);
/// assert!((angle::angle_to_rad(Vec3::X, Vec3::Y) - FRAC_PI_2).abs() < 1e-15);
/// ```
pub fn angle_to_rad<A: VectorSource, B: VectorSource>(v1: A, v2: B) -> f64 {
    let a = v1.xyz();
    let b = v2.xyz();
    if a == b {
        return 0.0;
    }
    if a == (-b.0, -b.1, -b.2) {
        return PI;
    }
    acos(cos_between(a, b))
}

/// Angle in degrees between two vectors of any length, in `[0, 180]`.
pub fn angle_to_deg<A: VectorSource, B: VectorSource>(v1: A, v2: B) -> f64 {
    to_degrees(angle_to_rad(v1, v2))
}

/// Angle in radians between two unit vectors.
#[inline]
pub fn angle_to_unsafe_rad<A: VectorSource, B: VectorSource>(v1: A, v2: B) -> f64 {
    acos(cos_angle_to_unsafe(v1, v2))
}

/// Angle in degrees between two unit vectors.
#[inline]
pub fn angle_to_unsafe_deg<A: VectorSource, B: VectorSource>(v1: A, v2: B) -> f64 {
    to_degrees(angle_to_unsafe_rad(v1, v2))
}

/// Operand with squares kept in range; the direction is unchanged.
#[inline]
fn in_range(v: (f64, f64, f64)) -> (f64, f64, f64) {
    if all_zero(v.0, v.1, v.2) || square_in_range(norm_squared(v.0, v.1, v.2)) {
        return v;
    }
    rescaled(v.0, v.1, v.2).1
}

#[inline]
fn atan2_angle(a: (f64, f64, f64), b: (f64, f64, f64)) -> (f64, (f64, f64, f64)) {
    let (a, b) = (in_range(a), in_range(b));
    let c = cross_xyz(a, b);
    (atan2(norm(c.0, c.1, c.2), dot_xyz(a, b)), c)
}

/// Unsigned angle in radians, `atan2(|v1 × v2|, v1 · v2)`.
///
/// Accepts vectors of any length; zero vectors give `0`.
#[inline]
pub fn angle_between_rad<A: VectorSource, B: VectorSource>(v1: A, v2: B) -> f64 {
    atan2_angle(v1.xyz(), v2.xyz()).0
}

/// Unsigned angle in degrees, see [`angle_between_rad`].
#[inline]
pub fn angle_between_deg<A: VectorSource, B: VectorSource>(v1: A, v2: B) -> f64 {
    to_degrees(angle_between_rad(v1, v2))
}

/// Angle in radians from `v1` to `v2`, in `[-π, π]`.
///
/// The magnitude is `atan2(|v1 × v2|, v1 · v2)`. The result is negative when
/// `v1 × v2` points away from `reference`, the axis the rotation is viewed
/// along (typically the plane normal).
///
/// # Examples
/// ```
/// use std::f64::consts::FRAC_PI_2;
/// use vec3_kernel::{angle, Vec3};
///
/// let ccw = angle::signed_angle_rad(Vec3::X, Vec3::Y, Vec3::Z);
/// let cw = angle::signed_angle_rad(Vec3::Y, Vec3::X, Vec3::Z);
/// assert!((ccw - FRAC_PI_2).abs() < 1e-15);
/// assert_eq!(cw, -ccw);
/// ```
pub fn signed_angle_rad<A: VectorSource, B: VectorSource, R: VectorSource>(
    v1: A,
    v2: B,
    reference: R,
) -> f64 {
    let (angle, axis) = atan2_angle(v1.xyz(), v2.xyz());
    if dot_xyz(axis, reference.xyz()) < 0.0 {
        -angle
    } else {
        angle
    }
}

/// Signed angle in degrees, see [`signed_angle_rad`].
#[inline]
pub fn signed_angle_deg<A: VectorSource, B: VectorSource, R: VectorSource>(
    v1: A,
    v2: B,
    reference: R,
) -> f64 {
    to_degrees(signed_angle_rad(v1, v2, reference))
}
