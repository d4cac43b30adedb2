//! GLSL-style scalar helpers.
//!
//! Free functions that mirror the shading language built-ins used alongside
//! the vector types: floor-wrapping modulo, interpolation, signed powers and
//! smooth minimum blends.

use std::ops::{Add, Mul, Sub};

use glsm_core::{Real, Scalar};

use crate::vector::Vec2;
use crate::vector::Vec3;

/// Floating modulo that wraps toward negative infinity: `x - floor(x/y)*y`.
///
/// The result has the sign of `y`, so `ufmod(-0.25, 1.0) == 0.75`.
#[inline]
pub fn ufmod<T: Real>(x: T, y: T) -> T {
    x - (x / y).floor() * y
}

/// Integer modulo that wraps negative values continuously.
///
/// For `y > 0` the result is in `[0, y)` for every `x`, including
/// `i32::MIN`. Panics if `y` is zero.
///
/// ```rust
/// use glsm_math::func::uimod;
///
/// assert_eq!(uimod(-1, 256), 255);
/// assert_eq!(uimod(257, 256), 1);
/// ```
#[inline]
pub fn uimod(x: i32, y: i32) -> i32 {
    x.rem_euclid(y)
}

/// `x * x`
#[inline]
pub fn pow2<T: Scalar>(x: T) -> T {
    x * x
}

/// `x * x * x`
#[inline]
pub fn pow3<T: Scalar>(x: T) -> T {
    x * x * x
}

/// Sign of `x`: `0` for zero, otherwise `1` or `-1`.
#[inline]
pub fn sign<T: Scalar>(x: T) -> T {
    if x == T::ZERO {
        T::ZERO
    } else if x > T::ZERO {
        T::ONE
    } else {
        -T::ONE
    }
}

/// Linear interpolation `x + (y - x) * t`.
///
/// Works for scalars and for vectors with a scalar factor.
#[inline]
pub fn mix<V, F>(x: V, y: V, t: F) -> V
where
    V: Copy + Add<Output = V> + Sub<Output = V> + Mul<F, Output = V>,
{
    x + (y - x) * t
}

/// Clamps `x` into `[lo, hi]`.
#[inline]
pub fn clamp<T: Scalar>(x: T, lo: T, hi: T) -> T {
    x.maximum(lo).minimum(hi)
}

/// Polynomial smooth minimum of `a` and `b` with blend radius `r`.
#[inline]
pub fn smoothmin<T: Real>(a: T, b: T, r: T) -> T {
    let f = (T::ONE - (b - a).abs() / r).maximum(T::ZERO);
    a.minimum(b) - r * T::from_f64(0.25) * f * f
}

/// Smooth absolute value, equal to `-smoothmin(a, -a, r)`.
#[inline]
pub fn smoothabs<T: Real>(a: T, r: T) -> T {
    let f = (T::ONE - (a + a).abs() / r).maximum(T::ZERO);
    a.abs() + r * T::from_f64(0.25) * f * f
}

/// Barycentric weights of `v` in the triangle `p0, p1, p2`.
///
/// The weights sum to one. A degenerate triangle yields Inf/NaN.
pub fn barycentric<T: Real>(v: Vec2<T>, p0: Vec2<T>, p1: Vec2<T>, p2: Vec2<T>) -> Vec3<T> {
    let d0 = p0 - v;
    let d1 = p1 - v;
    let d2 = p2 - v;
    let b01 = d1.cross(d0);
    let b12 = d2.cross(d1);
    let b20 = d0.cross(d2);
    Vec3::new(b12, b20, b01) * (T::ONE / (b01 + b12 + b20))
}
