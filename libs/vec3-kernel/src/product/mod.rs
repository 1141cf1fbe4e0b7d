//! Dot and cross products, projection and reflection.
//!
//! [`project`] and [`reflect`] expect a unit-length direction and do not
//! check it; a non-unit direction scales the result instead of failing.

use crate::access::{emit, VectorSink, VectorSource};

#[inline]
pub(crate) fn dot_xyz(a: (f64, f64, f64), b: (f64, f64, f64)) -> f64 {
    a.0 * b.0 + a.1 * b.1 + a.2 * b.2
}

#[inline]
pub(crate) fn cross_xyz(a: (f64, f64, f64), b: (f64, f64, f64)) -> (f64, f64, f64) {
    (
        a.1 * b.2 - a.2 * b.1,
        a.2 * b.0 - a.0 * b.2,
        a.0 * b.1 - a.1 * b.0,
    )
}

/// `x1·x2 + y1·y2 + z1·z2`.
#[inline]
pub fn dot<A: VectorSource, B: VectorSource>(v1: A, v2: B) -> f64 {
    dot_xyz(v1.xyz(), v2.xyz())
}

/// Writes the right-handed cross product `v1 × v2`.
///
/// Anticommutative: `cross(a, b) == -cross(b, a)`.
///
/// # Examples
/// ```
/// use vec3_kernel::{product, Vec3};
///
/// let mut out = Vec3::ZERO;
/// product::cross(Vec3::Y, Vec3::Z, &mut out);
/// assert_eq!(out, Vec3::X);
/// ```
pub fn cross<A: VectorSource, B: VectorSource, D: VectorSink + ?Sized>(
    v1: A,
    v2: B,
    dest: &mut D,
) -> &mut D {
    let (x, y, z) = cross_xyz(v1.xyz(), v2.xyz());
    emit(dest, x, y, z)
}

/// Writes the projection of `v` onto the unit direction `t`: `t · dot(v, t)`.
pub fn project<A: VectorSource, B: VectorSource, D: VectorSink + ?Sized>(
    v: A,
    t: B,
    dest: &mut D,
) -> &mut D {
    let t = t.xyz();
    let d = dot_xyz(v.xyz(), t);
    emit(dest, t.0 * d, t.1 * d, t.2 * d)
}

/// Writes `v` reflected about the plane with unit normal `n`:
/// `n · (-2 dot(v, n)) + v`.
pub fn reflect<A: VectorSource, B: VectorSource, D: VectorSink + ?Sized>(
    v: A,
    n: B,
    dest: &mut D,
) -> &mut D {
    let v = v.xyz();
    let n = n.xyz();
    let factor = -2.0 * dot_xyz(v, n);
    emit(
        dest,
        n.0 * factor + v.0,
        n.1 * factor + v.1,
        n.2 * factor + v.2,
    )
}
