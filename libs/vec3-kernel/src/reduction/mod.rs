//! Componentwise min/max and extremal-component queries.
//!
//! Component queries scan `x`, `y`, `z` in that order and only move on a
//! strictly better value, so ties resolve to the lowest index. Indices are
//! `0` for x, `1` for y, `2` for z.

use crate::access::{emit, VectorSink, VectorSource};
use crate::scalar;

/// Writes the per-axis minimum of two vectors.
pub fn min<A: VectorSource, B: VectorSource, D: VectorSink + ?Sized>(
    v1: A,
    v2: B,
    dest: &mut D,
) -> &mut D {
    let (x1, y1, z1) = v1.xyz();
    let (x2, y2, z2) = v2.xyz();
    emit(
        dest,
        scalar::min(x1, x2),
        scalar::min(y1, y2),
        scalar::min(z1, z2),
    )
}

/// Writes the per-axis maximum of two vectors.
pub fn max<A: VectorSource, B: VectorSource, D: VectorSink + ?Sized>(
    v1: A,
    v2: B,
    dest: &mut D,
) -> &mut D {
    let (x1, y1, z1) = v1.xyz();
    let (x2, y2, z2) = v2.xyz();
    emit(
        dest,
        scalar::max(x1, x2),
        scalar::max(y1, y2),
        scalar::max(z1, z2),
    )
}

#[inline]
fn extremal<S: VectorSource>(v: S, better: fn(f64, f64) -> bool) -> (f64, usize) {
    let (x, y, z) = v.xyz();
    let mut best = (x, 0);
    if better(y, best.0) {
        best = (y, 1);
    }
    if better(z, best.0) {
        best = (z, 2);
    }
    best
}

/// Smallest component value together with its index.
///
/// # Examples
/// ```
/// use vec3_kernel::reduction::min_component_with_index;
///
/// assert_eq!(min_component_with_index([5.0, 1.0, 3.0]), (1.0, 1));
/// assert_eq!(min_component_with_index([2.0, 2.0, 2.0]), (2.0, 0));
/// ```
#[inline]
pub fn min_component_with_index<S: VectorSource>(v: S) -> (f64, usize) {
    extremal(v, |candidate, best| candidate < best)
}

/// Largest component value together with its index.
#[inline]
pub fn max_component_with_index<S: VectorSource>(v: S) -> (f64, usize) {
    extremal(v, |candidate, best| candidate > best)
}

/// Smallest component value.
#[inline]
pub fn min_component<S: VectorSource>(v: S) -> f64 {
    min_component_with_index(v).0
}

/// Largest component value.
#[inline]
pub fn max_component<S: VectorSource>(v: S) -> f64 {
    max_component_with_index(v).0
}

/// Index of the smallest component, lowest index on ties.
#[inline]
pub fn min_component_index<S: VectorSource>(v: S) -> usize {
    min_component_with_index(v).1
}

/// Index of the largest component, lowest index on ties.
#[inline]
pub fn max_component_index<S: VectorSource>(v: S) -> usize {
    max_component_with_index(v).1
}

/// `x + y + z`.
#[inline]
pub fn component_sum<S: VectorSource>(v: S) -> f64 {
    let (x, y, z) = v.xyz();
    x + y + z
}
