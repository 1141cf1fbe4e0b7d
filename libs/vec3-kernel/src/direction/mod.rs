//! Normalization and per-component direction maps.
//!
//! Normalization follows the metric twins: `normalize_unsafe` fails on the
//! zero vector and leaves the destination untouched, `normalize` writes the
//! zero vector, `normalize_with_tolerance` writes the zero vector for
//! anything inside the tolerance band. Any other vector, however large or
//! small its components, comes out with the requested length.

use crate::access::{emit, VectorSink, VectorSource};
use crate::error::{KernelError, KernelResult};
use crate::metric::{all_within, all_zero, norm_squared, rescaled, square_in_range};
use crate::scalar::{self, inv_sqrt};

/// Writes the non-zero `(x, y, z)` rescaled to `length`.
#[inline]
fn scaled_to<D: VectorSink + ?Sized>(x: f64, y: f64, z: f64, length: f64, dest: &mut D) -> &mut D {
    let len_sq = norm_squared(x, y, z);
    let (x, y, z, len_sq) = if square_in_range(len_sq) {
        (x, y, z, len_sq)
    } else {
        let (_, (sx, sy, sz)) = rescaled(x, y, z);
        (sx, sy, sz, norm_squared(sx, sy, sz))
    };
    let factor = inv_sqrt(len_sq) * length;
    emit(dest, x * factor, y * factor, z * factor)
}

/// Writes `v / |v|`, failing on the zero vector.
///
/// # Examples
/// ```
/// use vec3_kernel::{direction, Vec3};
///
/// let mut out = Vec3::ZERO;
/// direction::normalize_unsafe([0.0, 0.0, 5.0], &mut out).unwrap();
/// assert_eq!(out, Vec3::Z);
/// ```
pub fn normalize_unsafe<S: VectorSource, D: VectorSink + ?Sized>(
    v: S,
    dest: &mut D,
) -> KernelResult<&mut D> {
    let (x, y, z) = v.xyz();
    if all_zero(x, y, z) {
        return Err(KernelError::division_by_zero("normalize_unsafe"));
    }
    Ok(scaled_to(x, y, z, 1.0, dest))
}

/// Writes `v / |v|`, or the zero vector for the zero vector.
pub fn normalize<S: VectorSource, D: VectorSink + ?Sized>(v: S, dest: &mut D) -> &mut D {
    let (x, y, z) = v.xyz();
    if all_zero(x, y, z) {
        return emit(dest, 0.0, 0.0, 0.0);
    }
    scaled_to(x, y, z, 1.0, dest)
}

/// Writes `v / |v|`, or the zero vector when `v` is zero within `tolerance`.
pub fn normalize_with_tolerance<S: VectorSource, D: VectorSink + ?Sized>(
    v: S,
    tolerance: f64,
    dest: &mut D,
) -> &mut D {
    let (x, y, z) = v.xyz();
    if all_zero(x, y, z) || all_within(x, y, z, tolerance) {
        return emit(dest, 0.0, 0.0, 0.0);
    }
    scaled_to(x, y, z, 1.0, dest)
}

/// Writes `v` rescaled to `length`, failing on the zero vector.
pub fn normalize_to_length_unsafe<S: VectorSource, D: VectorSink + ?Sized>(
    v: S,
    length: f64,
    dest: &mut D,
) -> KernelResult<&mut D> {
    let (x, y, z) = v.xyz();
    if all_zero(x, y, z) {
        return Err(KernelError::division_by_zero("normalize_to_length_unsafe"));
    }
    Ok(scaled_to(x, y, z, length, dest))
}

/// Writes `v` rescaled to `length`, or the zero vector for the zero vector.
pub fn normalize_to_length<S: VectorSource, D: VectorSink + ?Sized>(
    v: S,
    length: f64,
    dest: &mut D,
) -> &mut D {
    let (x, y, z) = v.xyz();
    if all_zero(x, y, z) {
        return emit(dest, 0.0, 0.0, 0.0);
    }
    scaled_to(x, y, z, length, dest)
}

/// Writes `(-x, -y, -z)`.
pub fn negate<S: VectorSource, D: VectorSink + ?Sized>(v: S, dest: &mut D) -> &mut D {
    let (x, y, z) = v.xyz();
    emit(dest, -x, -y, -z)
}

/// Writes `(1/x, 1/y, 1/z)`.
///
/// Plain IEEE division per axis: a zero component yields a signed infinity,
/// never an error.
pub fn inverse<S: VectorSource, D: VectorSink + ?Sized>(v: S, dest: &mut D) -> &mut D {
    let (x, y, z) = v.xyz();
    emit(dest, 1.0 / x, 1.0 / y, 1.0 / z)
}

/// Writes the componentwise absolute value.
pub fn abs<S: VectorSource, D: VectorSink + ?Sized>(v: S, dest: &mut D) -> &mut D {
    let (x, y, z) = v.xyz();
    emit(dest, scalar::abs(x), scalar::abs(y), scalar::abs(z))
}

/// Writes the componentwise sign, with zero components kept as zero.
pub fn signum<S: VectorSource, D: VectorSink + ?Sized>(v: S, dest: &mut D) -> &mut D {
    let (x, y, z) = v.xyz();
    emit(dest, scalar::sign(x), scalar::sign(y), scalar::sign(z))
}
