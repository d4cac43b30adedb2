//! Numeric element types for vectors and matrices.
//!
//! [`Scalar`] covers every element type a vector or matrix can hold (signed
//! integers and floats) and is built on the `num-traits` hierarchy. [`Real`]
//! adds [`num_traits::Float`] for lengths, rotations and projections and is
//! implemented for `f32` and `f64`.
//!
//! # Supported Types
//!
//! - `i32`, `i64` (and the other signed integers) - integer vectors, pixel
//!   coordinates
//! - `f32` - single precision, the upload format for shaders
//! - `f64` - double precision, the default for camera math
//!
//! # Example
//!
//! ```
//! use glsm_core::{Real, Scalar};
//!
//! fn hypot<T: Real>(a: T, b: T) -> T {
//!     (a * a + b * b).sqrt()
//! }
//!
//! assert_eq!(hypot(3.0f32, 4.0), 5.0);
//! assert_eq!(Scalar::cast::<i32>(2.9f64), 2);
//! ```

use std::fmt;

use num_traits::{Bounded, ConstOne, ConstZero, Float, NumAssign, NumCast, Signed};

/// Element type of a vector or matrix.
///
/// `T::ZERO` and `T::ONE` come from [`ConstZero`] / [`ConstOne`], so they
/// are usable in constants. Implemented for every type that satisfies the
/// bounds.
pub trait Scalar:
    Copy
    + Default
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
    + NumAssign
    + NumCast
    + Signed
    + Bounded
    + ConstZero
    + ConstOne
{
    /// Static numeric conversion to another element type.
    ///
    /// Exact whenever the value is representable in `U`. Floats truncate
    /// toward zero when converted to integers; out-of-range values saturate
    /// at the bounds of `U` and NaN becomes zero, as with `as`.
    #[inline]
    fn cast<U: Scalar>(self) -> U {
        match <U as NumCast>::from(self) {
            Some(v) => v,
            None if self.partial_cmp(&self).is_none() => U::ZERO,
            None if self > Self::ZERO => <U as Bounded>::max_value(),
            None => <U as Bounded>::min_value(),
        }
    }

    /// Converts a literal constant, see [`cast`](Self::cast).
    #[inline]
    fn from_f64(v: f64) -> Self {
        v.cast()
    }

    /// Smaller of two values (returns `other` when unordered).
    #[inline]
    fn minimum(self, other: Self) -> Self {
        if self < other { self } else { other }
    }

    /// Larger of two values (returns `other` when unordered).
    #[inline]
    fn maximum(self, other: Self) -> Self {
        if self > other { self } else { other }
    }
}

impl<T> Scalar for T where
    T: Copy
        + Default
        + PartialOrd
        + fmt::Debug
        + fmt::Display
        + Send
        + Sync
        + 'static
        + NumAssign
        + NumCast
        + Signed
        + Bounded
        + ConstZero
        + ConstOne
{
}

/// Floating-point element type.
///
/// Square roots, trigonometry, rounding and degree conversion come from
/// [`Float`].
pub trait Real: Scalar + Float {
    /// Archimedes' constant.
    const PI: Self;
}

impl Real for f32 {
    const PI: Self = std::f32::consts::PI;
}

impl Real for f64 {
    const PI: Self = std::f64::consts::PI;
}
