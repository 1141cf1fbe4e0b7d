//! Lengths, distances and their reciprocals.
//!
//! Each divisor-sensitive metric exists as three twins:
//!
//! | form | zero operand |
//! |------|--------------|
//! | `*_unsafe` | [`KernelError::DivisionByZero`] (reciprocals only) |
//! | tolerant | returns `0` |
//! | `*_with_tolerance` | returns `0` when every component is in `[-tol, tol]` |
//!
//! A zero operand means the exact zero vector. Lengths whose squares leave
//! the normal `f64` range (components beyond roughly `1e154` or below
//! `1e-154`) are recomputed after dividing by the largest magnitude, so
//! huge and tiny vectors still get finite, non-zero lengths.
//!
//! Distances are measured on `v2 - v1`; swapping the arguments negates the
//! differences and leaves their squares unchanged, so every distance here is
//! bit-for-bit symmetric.

use crate::access::VectorSource;
use crate::error::{KernelError, KernelResult};
use crate::scalar::{abs, is_within, max, sqrt};

#[inline]
pub(crate) fn norm_squared(x: f64, y: f64, z: f64) -> f64 {
    x * x + y * y + z * z
}

#[inline]
pub(crate) fn all_zero(x: f64, y: f64, z: f64) -> bool {
    x == 0.0 && y == 0.0 && z == 0.0
}

#[inline]
pub(crate) fn all_within(x: f64, y: f64, z: f64, tolerance: f64) -> bool {
    is_within(x, tolerance) && is_within(y, tolerance) && is_within(z, tolerance)
}

/// Whether a squared length is finite, normal and so safe to take a root of.
#[inline]
pub(crate) fn square_in_range(len_sq: f64) -> bool {
    (f64::MIN_POSITIVE..=f64::MAX).contains(&len_sq)
}

/// Largest component magnitude and the components divided by it.
///
/// The caller guarantees a non-zero vector.
#[inline]
pub(crate) fn rescaled(x: f64, y: f64, z: f64) -> (f64, (f64, f64, f64)) {
    let m = max(abs(x), max(abs(y), abs(z)));
    (m, (x / m, y / m, z / m))
}

/// Euclidean norm that survives squares overflowing or underflowing.
#[inline]
pub(crate) fn norm(x: f64, y: f64, z: f64) -> f64 {
    let len_sq = norm_squared(x, y, z);
    if square_in_range(len_sq) || len_sq.is_nan() || all_zero(x, y, z) {
        return sqrt(len_sq);
    }
    let (m, (sx, sy, sz)) = rescaled(x, y, z);
    if m.is_infinite() {
        return m;
    }
    m * sqrt(norm_squared(sx, sy, sz))
}

#[inline]
fn difference<A: VectorSource, B: VectorSource>(v1: A, v2: B) -> (f64, f64, f64) {
    let (x1, y1, z1) = v1.xyz();
    let (x2, y2, z2) = v2.xyz();
    (x2 - x1, y2 - y1, z2 - z1)
}

// =============================================================================
// ZERO TESTS
// =============================================================================

/// Whether every component is exactly zero (either sign).
#[inline]
pub fn is_zero<S: VectorSource>(v: S) -> bool {
    let (x, y, z) = v.xyz();
    all_zero(x, y, z)
}

/// Whether every component lies in `[-tolerance, tolerance]`.
///
/// # Examples
/// ```
/// use vec3_kernel::metric::is_zero_with_tolerance;
///
/// assert!(is_zero_with_tolerance([1e-12, -1e-12, 0.0], 1e-9));
/// assert!(!is_zero_with_tolerance([1e-12, 0.0, 1e-3], 1e-9));
/// ```
#[inline]
pub fn is_zero_with_tolerance<S: VectorSource>(v: S, tolerance: f64) -> bool {
    let (x, y, z) = v.xyz();
    all_within(x, y, z, tolerance)
}

// =============================================================================
// LENGTH
// =============================================================================

/// `x² + y² + z²`.
#[inline]
pub fn length_squared<S: VectorSource>(v: S) -> f64 {
    let (x, y, z) = v.xyz();
    norm_squared(x, y, z)
}

/// Euclidean length computed directly from the squared length.
#[inline]
pub fn length_unsafe<S: VectorSource>(v: S) -> f64 {
    sqrt(length_squared(v))
}

/// Euclidean length, `0` for the exact zero vector.
#[inline]
pub fn length<S: VectorSource>(v: S) -> f64 {
    let (x, y, z) = v.xyz();
    if all_zero(x, y, z) {
        return 0.0;
    }
    norm(x, y, z)
}

/// Euclidean length, `0` when the vector is zero within `tolerance`.
#[inline]
pub fn length_with_tolerance<S: VectorSource>(v: S, tolerance: f64) -> f64 {
    let (x, y, z) = v.xyz();
    if all_within(x, y, z, tolerance) {
        return 0.0;
    }
    norm(x, y, z)
}

/// `1 / |v|`, failing on the zero vector.
///
/// # Examples
/// ```
/// use vec3_kernel::{metric, KernelError};
///
/// assert_eq!(metric::inverse_length_unsafe([0.0, 4.0, 0.0]), Ok(0.25));
/// assert!(matches!(
///     metric::inverse_length_unsafe([0.0, 0.0, 0.0]),
///     Err(KernelError::DivisionByZero { .. })
/// ));
/// ```
#[inline]
pub fn inverse_length_unsafe<S: VectorSource>(v: S) -> KernelResult<f64> {
    let (x, y, z) = v.xyz();
    if all_zero(x, y, z) {
        return Err(KernelError::division_by_zero("inverse_length_unsafe"));
    }
    Ok(1.0 / norm(x, y, z))
}

/// `1 / |v|`, or `0` for the zero vector.
#[inline]
pub fn inverse_length<S: VectorSource>(v: S) -> f64 {
    let (x, y, z) = v.xyz();
    if all_zero(x, y, z) {
        return 0.0;
    }
    1.0 / norm(x, y, z)
}

/// `1 / |v|`, or `0` when the vector is zero within `tolerance`.
#[inline]
pub fn inverse_length_with_tolerance<S: VectorSource>(v: S, tolerance: f64) -> f64 {
    let (x, y, z) = v.xyz();
    if all_zero(x, y, z) || all_within(x, y, z, tolerance) {
        return 0.0;
    }
    1.0 / norm(x, y, z)
}

// =============================================================================
// DISTANCE
// =============================================================================

/// Squared distance between two points.
#[inline]
pub fn distance_squared<A: VectorSource, B: VectorSource>(v1: A, v2: B) -> f64 {
    let (dx, dy, dz) = difference(v1, v2);
    norm_squared(dx, dy, dz)
}

/// Distance computed directly from the squared distance.
#[inline]
pub fn distance_unsafe<A: VectorSource, B: VectorSource>(v1: A, v2: B) -> f64 {
    sqrt(distance_squared(v1, v2))
}

/// Distance between two points, `0` when they coincide exactly.
#[inline]
pub fn distance<A: VectorSource, B: VectorSource>(v1: A, v2: B) -> f64 {
    length(difference(v1, v2))
}

/// Distance, `0` when every component difference is within `tolerance`.
#[inline]
pub fn distance_with_tolerance<A: VectorSource, B: VectorSource>(
    v1: A,
    v2: B,
    tolerance: f64,
) -> f64 {
    length_with_tolerance(difference(v1, v2), tolerance)
}

/// `1 / distance`, failing when the points coincide.
#[inline]
pub fn inverse_distance_unsafe<A: VectorSource, B: VectorSource>(
    v1: A,
    v2: B,
) -> KernelResult<f64> {
    let (dx, dy, dz) = difference(v1, v2);
    if all_zero(dx, dy, dz) {
        return Err(KernelError::division_by_zero("inverse_distance_unsafe"));
    }
    Ok(1.0 / norm(dx, dy, dz))
}

/// `1 / distance`, or `0` when the points coincide.
#[inline]
pub fn inverse_distance<A: VectorSource, B: VectorSource>(v1: A, v2: B) -> f64 {
    inverse_length(difference(v1, v2))
}

/// `1 / distance`, or `0` when the points coincide within `tolerance`.
#[inline]
pub fn inverse_distance_with_tolerance<A: VectorSource, B: VectorSource>(
    v1: A,
    v2: B,
    tolerance: f64,
) -> f64 {
    inverse_length_with_tolerance(difference(v1, v2), tolerance)
}

#[cfg(test)]
mod tests;
