//! Scalar helpers shared by the vector operations.
//!
//! Thin wrappers over `f64` intrinsics plus the two guarded forms the
//! kernel relies on: [`acos`] clamps its argument into `[-1, 1]`, and
//! [`sign`] keeps zero as zero.

use config::constants::{DEGREES_TO_RADIANS, RADIANS_TO_DEGREES};

/// Square root.
#[inline]
pub fn sqrt(v: f64) -> f64 {
    v.sqrt()
}

/// Reciprocal square root, `1 / sqrt(v)`. Infinite for `v == 0`.
#[inline]
pub fn inv_sqrt(v: f64) -> f64 {
    1.0 / v.sqrt()
}

/// Sine of an angle in radians.
#[inline]
pub fn sin(rad: f64) -> f64 {
    rad.sin()
}

/// Cosine of an angle in radians.
#[inline]
pub fn cos(rad: f64) -> f64 {
    rad.cos()
}

/// Sine and cosine of an angle in radians, computed together.
#[inline]
pub fn sin_cos(rad: f64) -> (f64, f64) {
    rad.sin_cos()
}

/// Four-quadrant arctangent of `y / x`.
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    y.atan2(x)
}

/// Arccosine with the argument clamped into `[-1, 1]`.
///
/// Cosines assembled from products drift slightly outside the domain; the
/// clamp maps them to `0` or `π` instead of NaN. NaN input stays NaN.
///
/// # Examples
/// ```
/// use vec3_kernel::scalar::acos;
///
/// assert_eq!(acos(1.0 + 1e-15), 0.0);
/// assert_eq!(acos(-1.0 - 1e-15), std::f64::consts::PI);
/// ```
#[inline]
pub fn acos(v: f64) -> f64 {
    v.clamp(-1.0, 1.0).acos()
}

/// Absolute value.
#[inline]
pub fn abs(v: f64) -> f64 {
    v.abs()
}

/// Sign of `v`: `1` or `-1`, with signed zeros and NaN passed through.
///
/// Unlike [`f64::signum`], `sign(0.0)` is `0.0`.
#[inline]
pub fn sign(v: f64) -> f64 {
    if v == 0.0 || v.is_nan() {
        v
    } else {
        v.signum()
    }
}

/// Smaller of two values.
#[inline]
pub fn min(a: f64, b: f64) -> f64 {
    a.min(b)
}

/// Larger of two values.
#[inline]
pub fn max(a: f64, b: f64) -> f64 {
    a.max(b)
}

/// Whether `v` lies in the inclusive band `[-tolerance, tolerance]`.
///
/// A negative tolerance describes an empty band.
#[inline]
pub fn is_within(v: f64, tolerance: f64) -> bool {
    -tolerance <= v && v <= tolerance
}

/// Degrees to radians.
#[inline]
pub fn to_radians(deg: f64) -> f64 {
    deg * DEGREES_TO_RADIANS
}

/// Radians to degrees.
#[inline]
pub fn to_degrees(rad: f64) -> f64 {
    rad * RADIANS_TO_DEGREES
}
