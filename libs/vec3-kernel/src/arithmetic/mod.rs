//! Componentwise arithmetic.
//!
//! The `rev_` forms swap operand order (`v2 - v1`, `v2 / v1`) so callers can
//! keep the destination-defining vector first. Division is plain IEEE
//! division; zero divisors produce infinities or NaN, not errors.

use crate::access::{emit, VectorSink, VectorSource};

/// Writes `v1 + v2`.
///
/// # Examples
/// ```
/// use vec3_kernel::arithmetic::add;
///
/// let mut out = [0.0; 3];
/// add([1.0, 2.0, 3.0], [4.0, 5.0, 6.0], &mut out);
/// assert_eq!(out, [5.0, 7.0, 9.0]);
/// ```
pub fn add<A: VectorSource, B: VectorSource, D: VectorSink + ?Sized>(
    v1: A,
    v2: B,
    dest: &mut D,
) -> &mut D {
    let (x1, y1, z1) = v1.xyz();
    let (x2, y2, z2) = v2.xyz();
    emit(dest, x1 + x2, y1 + y2, z1 + z2)
}

/// Writes `v1 - v2`.
pub fn sub<A: VectorSource, B: VectorSource, D: VectorSink + ?Sized>(
    v1: A,
    v2: B,
    dest: &mut D,
) -> &mut D {
    let (x1, y1, z1) = v1.xyz();
    let (x2, y2, z2) = v2.xyz();
    emit(dest, x1 - x2, y1 - y2, z1 - z2)
}

/// Writes `v2 - v1`.
pub fn rev_sub<A: VectorSource, B: VectorSource, D: VectorSink + ?Sized>(
    v1: A,
    v2: B,
    dest: &mut D,
) -> &mut D {
    sub(v2, v1, dest)
}

/// Writes the componentwise product `v1 * v2`.
pub fn mul<A: VectorSource, B: VectorSource, D: VectorSink + ?Sized>(
    v1: A,
    v2: B,
    dest: &mut D,
) -> &mut D {
    let (x1, y1, z1) = v1.xyz();
    let (x2, y2, z2) = v2.xyz();
    emit(dest, x1 * x2, y1 * y2, z1 * z2)
}

/// Writes `v * factor`.
pub fn scale<S: VectorSource, D: VectorSink + ?Sized>(v: S, factor: f64, dest: &mut D) -> &mut D {
    let (x, y, z) = v.xyz();
    emit(dest, x * factor, y * factor, z * factor)
}

/// Writes the componentwise quotient `v1 / v2`.
pub fn div<A: VectorSource, B: VectorSource, D: VectorSink + ?Sized>(
    v1: A,
    v2: B,
    dest: &mut D,
) -> &mut D {
    let (x1, y1, z1) = v1.xyz();
    let (x2, y2, z2) = v2.xyz();
    emit(dest, x1 / x2, y1 / y2, z1 / z2)
}

/// Writes the componentwise quotient `v2 / v1`.
pub fn rev_div<A: VectorSource, B: VectorSource, D: VectorSink + ?Sized>(
    v1: A,
    v2: B,
    dest: &mut D,
) -> &mut D {
    div(v2, v1, dest)
}

/// Writes `v / divisor`.
pub fn div_scalar<S: VectorSource, D: VectorSink + ?Sized>(
    v: S,
    divisor: f64,
    dest: &mut D,
) -> &mut D {
    let (x, y, z) = v.xyz();
    emit(dest, x / divisor, y / divisor, z / divisor)
}

/// Writes `v1 * v2 + v3`, componentwise.
pub fn mul_add<A: VectorSource, B: VectorSource, C: VectorSource, D: VectorSink + ?Sized>(
    v1: A,
    v2: B,
    v3: C,
    dest: &mut D,
) -> &mut D {
    let (x1, y1, z1) = v1.xyz();
    let (x2, y2, z2) = v2.xyz();
    let (x3, y3, z3) = v3.xyz();
    emit(dest, x1 * x2 + x3, y1 * y2 + y3, z1 * z2 + z3)
}

/// Writes `v1 + (v2 - v1) * t`.
pub fn lerp<A: VectorSource, B: VectorSource, D: VectorSink + ?Sized>(
    v1: A,
    v2: B,
    t: f64,
    dest: &mut D,
) -> &mut D {
    let (x1, y1, z1) = v1.xyz();
    let (x2, y2, z2) = v2.xyz();
    emit(
        dest,
        x1 + (x2 - x1) * t,
        y1 + (y2 - y1) * t,
        z1 + (z2 - z1) * t,
    )
}
