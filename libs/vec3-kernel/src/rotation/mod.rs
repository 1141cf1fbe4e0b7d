//! Rotations about the coordinate axes and about an arbitrary unit axis.
//!
//! All rotations are right-handed: a positive angle turns counter-clockwise
//! when looking down the axis towards the origin. Angles are radians unless
//! the function name ends in `_deg`; the degree forms convert once and
//! delegate. The `_sin_cos` forms take a precomputed `(sin, cos)` pair so a
//! fixed rotation can be applied to many vectors without re-evaluating the
//! trigonometry.

use crate::access::{emit, VectorSink, VectorSource};
use crate::product::{cross_xyz, dot_xyz};
use crate::scalar::{sin_cos, to_radians};

// =============================================================================
// AXIS-ALIGNED
// =============================================================================

/// Rotates about the X axis using a precomputed `sin`/`cos` pair.
pub fn rotate_x_sin_cos<S: VectorSource, D: VectorSink + ?Sized>(
    v: S,
    sin: f64,
    cos: f64,
    dest: &mut D,
) -> &mut D {
    let (x, y, z) = v.xyz();
    emit(dest, x, y * cos - z * sin, y * sin + z * cos)
}

/// Rotates about the Y axis using a precomputed `sin`/`cos` pair.
pub fn rotate_y_sin_cos<S: VectorSource, D: VectorSink + ?Sized>(
    v: S,
    sin: f64,
    cos: f64,
    dest: &mut D,
) -> &mut D {
    let (x, y, z) = v.xyz();
    emit(dest, x * cos + z * sin, y, -x * sin + z * cos)
}

/// Rotates about the Z axis using a precomputed `sin`/`cos` pair.
pub fn rotate_z_sin_cos<S: VectorSource, D: VectorSink + ?Sized>(
    v: S,
    sin: f64,
    cos: f64,
    dest: &mut D,
) -> &mut D {
    let (x, y, z) = v.xyz();
    emit(dest, x * cos - y * sin, x * sin + y * cos, z)
}

/// Rotates about the X axis by `angle` radians.
pub fn rotate_x_rad<S: VectorSource, D: VectorSink + ?Sized>(
    v: S,
    angle: f64,
    dest: &mut D,
) -> &mut D {
    let (sin, cos) = sin_cos(angle);
    rotate_x_sin_cos(v, sin, cos, dest)
}

/// Rotates about the Y axis by `angle` radians.
pub fn rotate_y_rad<S: VectorSource, D: VectorSink + ?Sized>(
    v: S,
    angle: f64,
    dest: &mut D,
) -> &mut D {
    let (sin, cos) = sin_cos(angle);
    rotate_y_sin_cos(v, sin, cos, dest)
}

/// Rotates about the Z axis by `angle` radians.
///
/// # Examples
/// ```
/// use std::f64::consts::FRAC_PI_2;
/// use vec3_kernel::{rotation, Vec3};
///
/// let mut out = Vec3::ZERO;
/// rotation::rotate_z_rad(Vec3::X, FRAC_PI_2, &mut out);
/// assert!((out - Vec3::Y).length() < 1e-15);
/// ```
pub fn rotate_z_rad<S: VectorSource, D: VectorSink + ?Sized>(
    v: S,
    angle: f64,
    dest: &mut D,
) -> &mut D {
    let (sin, cos) = sin_cos(angle);
    rotate_z_sin_cos(v, sin, cos, dest)
}

/// Rotates about the X axis by `angle` degrees.
pub fn rotate_x_deg<S: VectorSource, D: VectorSink + ?Sized>(
    v: S,
    angle: f64,
    dest: &mut D,
) -> &mut D {
    rotate_x_rad(v, to_radians(angle), dest)
}

/// Rotates about the Y axis by `angle` degrees.
pub fn rotate_y_deg<S: VectorSource, D: VectorSink + ?Sized>(
    v: S,
    angle: f64,
    dest: &mut D,
) -> &mut D {
    rotate_y_rad(v, to_radians(angle), dest)
}

/// Rotates about the Z axis by `angle` degrees.
pub fn rotate_z_deg<S: VectorSource, D: VectorSink + ?Sized>(
    v: S,
    angle: f64,
    dest: &mut D,
) -> &mut D {
    rotate_z_rad(v, to_radians(angle), dest)
}

// =============================================================================
// ARBITRARY AXIS
// =============================================================================

/// Rotates `v` about the unit vector `axis` by `angle` radians (Rodrigues).
///
/// `v cosθ + (axis × v) sinθ + axis (axis · v)(1 − cosθ)`. The axis is not
/// normalized here; a non-unit axis skews the result.
pub fn rotate_axis_rad<S: VectorSource, A: VectorSource, D: VectorSink + ?Sized>(
    v: S,
    axis: A,
    angle: f64,
    dest: &mut D,
) -> &mut D {
    let v = v.xyz();
    let k = axis.xyz();
    let (sin, cos) = sin_cos(angle);
    let kxv = cross_xyz(k, v);
    let along = dot_xyz(k, v) * (1.0 - cos);
    emit(
        dest,
        v.0 * cos + kxv.0 * sin + k.0 * along,
        v.1 * cos + kxv.1 * sin + k.1 * along,
        v.2 * cos + kxv.2 * sin + k.2 * along,
    )
}

/// Rotates `v` about the unit vector `axis` by `angle` degrees.
pub fn rotate_axis_deg<S: VectorSource, A: VectorSource, D: VectorSink + ?Sized>(
    v: S,
    axis: A,
    angle: f64,
    dest: &mut D,
) -> &mut D {
    rotate_axis_rad(v, axis, to_radians(angle), dest)
}

#[cfg(test)]
mod tests;
