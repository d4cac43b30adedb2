//! Swizzled component access.
//!
//! A swizzle is described by an array of [`Axis`] selectors. The output
//! length is the array length, so one generic function covers every
//! `xy`, `zyx`, `wzyx`, `xxyy` style pattern on every vector size.
//!
//! ```rust
//! use glsm_core::Axis::{W, X, Y, Z};
//! use glsm_math::{Vec3, Vec4};
//!
//! let v = Vec4::new(1, 2, 3, 4);
//! assert_eq!(v.swizzle([Z, Y, X]), Vec3::new(3, 2, 1));
//!
//! let mut u = Vec4::new(0, 0, 0, 0);
//! u.set_swizzle([W, X], v.swizzle([X, Y]));
//! assert_eq!(u, Vec4::new(2, 0, 0, 1));
//! ```
//!
//! # Duplicate destinations
//!
//! [`Vector::set_swizzle`] applies the writes left to right, so when an axis
//! appears twice the right-most source component wins.
//! [`Vector::try_set_swizzle`] rejects such patterns instead.

use glsm_core::{Axis, Error, Result, Scalar};

use crate::vector::Vector;

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Gathers the selected components into a new vector.
    ///
    /// Axes may repeat. Panics if an axis is not present in this vector
    /// (e.g. `Axis::Z` on a 2-vector); use [`try_swizzle`](Self::try_swizzle)
    /// to get an error instead.
    #[inline]
    pub fn swizzle<const M: usize>(&self, axes: [Axis; M]) -> Vector<T, M> {
        Vector::from_array(axes.map(|a| self[a]))
    }

    /// Checked form of [`swizzle`](Self::swizzle).
    pub fn try_swizzle<const M: usize>(&self, axes: [Axis; M]) -> Result<Vector<T, M>> {
        check_range::<N>(&axes)?;
        Ok(self.swizzle(axes))
    }

    /// Scatters the components of `src` into the selected axes.
    ///
    /// `src[i]` is written to `self[axes[i]]` for `i` in order; with a repeated
    /// axis the last write wins. Panics on an axis this vector does not have.
    #[inline]
    pub fn set_swizzle<const M: usize>(&mut self, axes: [Axis; M], src: Vector<T, M>) {
        for (axis, v) in axes.into_iter().zip(src.data) {
            self[axis] = v;
        }
    }

    /// Checked form of [`set_swizzle`](Self::set_swizzle).
    ///
    /// Fails without modifying `self` if an axis is out of range or repeated.
    pub fn try_set_swizzle<const M: usize>(
        &mut self,
        axes: [Axis; M],
        src: Vector<T, M>,
    ) -> Result<()> {
        check_range::<N>(&axes)?;
        for (i, a) in axes.iter().enumerate() {
            if axes[..i].contains(a) {
                return Err(Error::duplicate_axis(*a));
            }
        }
        self.set_swizzle(axes, src);
        Ok(())
    }
}

fn check_range<const N: usize>(axes: &[Axis]) -> Result<()> {
    match axes.iter().find(|a| a.index() >= N) {
        Some(&axis) => Err(Error::axis_out_of_range(axis, N)),
        None => Ok(()),
    }
}
