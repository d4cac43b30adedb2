//! Rank-2 specifics: determinant, inverse, planar rotation.

use glsm_core::{Error, Real, Result, Scalar};

use super::Mat2;
use crate::vector::Vec2;

impl<T: Scalar> Mat2<T> {
    /// Creates a matrix from two column vectors.
    #[inline]
    pub fn from_columns(c0: Vec2<T>, c1: Vec2<T>) -> Self {
        Self::from_col_vecs([c0, c1])
    }

    /// Determinant `a*d - b*c` where `(a, b)` is the first column.
    #[inline]
    pub fn determinant(&self) -> T {
        let [a, b] = self.cols[0].data;
        let [c, d] = self.cols[1].data;
        a * d - b * c
    }

    /// Composes a 1D translation on the right: `col1 += col0 * x`.
    pub fn translate(&mut self, x: T) {
        let c0 = self.cols[0];
        self.cols[1] += c0 * x;
    }

    /// Elements in column-major order, converted to `U`.
    #[inline]
    pub fn to_cols_array<U: Scalar>(&self) -> [U; 4] {
        let mut out = [U::ZERO; 4];
        self.write_cols(&mut out);
        out
    }
}

impl<T: Real> Mat2<T> {
    /// Inverse via the closed-form adjugate.
    ///
    /// The determinant is not checked: a singular matrix yields Inf/NaN
    /// elements. Use [`try_inverse`](Self::try_inverse) to detect that case.
    #[inline]
    pub fn inverse(&self) -> Self {
        let [a, b] = self.cols[0].data;
        let [c, d] = self.cols[1].data;
        let f = T::ONE / (a * d - b * c);
        Self::from_cols([[d * f, -b * f], [-c * f, a * f]])
    }

    /// Inverse, or [`Error::SingularMatrix`] when the determinant is zero or
    /// not finite.
    pub fn try_inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det == T::ZERO || !det.is_finite() {
            return Err(Error::singular(det.cast::<f64>()));
        }
        Ok(self.inverse())
    }

    /// Counter-clockwise rotation by `angle` degrees.
    ///
    /// ```rust
    /// use glsm_math::{Mat2, Vec2};
    ///
    /// let v = Mat2::rotation(90.0) * Vec2::new(1.0, 0.0);
    /// assert!((v.y() - 1.0f64).abs() < 1e-12);
    /// ```
    pub fn rotation(angle: T) -> Self {
        let a = angle.to_radians();
        let co = a.cos();
        let si = a.sin();
        Self::from_cols([[co, si], [-si, co]])
    }

    /// Composes [`rotation`](Self::rotation) on the right.
    #[inline]
    pub fn rotate(&mut self, angle: T) {
        *self *= Self::rotation(angle);
    }
}

impl From<Mat2<f32>> for glam::Mat2 {
    #[inline]
    fn from(m: Mat2<f32>) -> Self {
        glam::Mat2::from_cols_array(&m.to_cols_array())
    }
}

impl From<glam::Mat2> for Mat2<f32> {
    #[inline]
    fn from(m: glam::Mat2) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}

impl From<Mat2<f64>> for glam::DMat2 {
    #[inline]
    fn from(m: Mat2<f64>) -> Self {
        glam::DMat2::from_cols_array(&m.to_cols_array())
    }
}

impl From<glam::DMat2> for Mat2<f64> {
    #[inline]
    fn from(m: glam::DMat2) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}
