//! Rank-4 specifics: full cofactor inverse, affine builders, slerp.
//!
//! A 4x4 matrix is a 3D affine or projective transform. The builders here
//! compose on the right (`m = m * op`), so the last operation applied is
//! the first one a vertex sees.

use glsm_core::{Error, Real, Result, Scalar};

use super::{Mat3, Mat4};
use crate::vector::{Vec3, Vec4};

impl<T: Scalar> Mat4<T> {
    /// Creates a matrix from four column vectors.
    #[inline]
    pub fn from_columns(c0: Vec4<T>, c1: Vec4<T>, c2: Vec4<T>, c3: Vec4<T>) -> Self {
        Self::from_col_vecs([c0, c1, c2, c3])
    }

    /// Pure translation matrix.
    #[inline]
    pub fn translation(x: T, y: T, z: T) -> Self {
        let mut m = Self::identity();
        m.cols[3] = Vec4::new(x, y, z, T::ONE);
        m
    }

    /// Transposed cofactor matrix (column-major) and determinant.
    ///
    /// Works on the transposed elements so that the cofactors come out in
    /// the adjugate order directly.
    fn adjugate(&self) -> ([T; 16], T) {
        let s: [T; 16] = std::array::from_fn(|i| self.cols[i % 4].data[i / 4]);
        let [s0, s1, s2, s3, s4, s5, s6, s7, s8, s9, s10, s11, s12, s13, s14, s15] = s;

        // Pairs for the first 8 cofactors
        let p0 = s10 * s15;
        let p1 = s11 * s14;
        let p2 = s9 * s15;
        let p3 = s11 * s13;
        let p4 = s9 * s14;
        let p5 = s10 * s13;
        let p6 = s8 * s15;
        let p7 = s11 * s12;
        let p8 = s8 * s14;
        let p9 = s10 * s12;
        let p10 = s8 * s13;
        let p11 = s9 * s12;

        let d0 = (p0 * s5 + p3 * s6 + p4 * s7) - (p1 * s5 + p2 * s6 + p5 * s7);
        let d1 = (p1 * s4 + p6 * s6 + p9 * s7) - (p0 * s4 + p7 * s6 + p8 * s7);
        let d2 = (p2 * s4 + p7 * s5 + p10 * s7) - (p3 * s4 + p6 * s5 + p11 * s7);
        let d3 = (p5 * s4 + p8 * s5 + p11 * s6) - (p4 * s4 + p9 * s5 + p10 * s6);
        let d4 = (p1 * s1 + p2 * s2 + p5 * s3) - (p0 * s1 + p3 * s2 + p4 * s3);
        let d5 = (p0 * s0 + p7 * s2 + p8 * s3) - (p1 * s0 + p6 * s2 + p9 * s3);
        let d6 = (p3 * s0 + p6 * s1 + p11 * s3) - (p2 * s0 + p7 * s1 + p10 * s3);
        let d7 = (p4 * s0 + p9 * s1 + p10 * s2) - (p5 * s0 + p8 * s1 + p11 * s2);

        // Pairs for the second 8 cofactors
        let q0 = s2 * s7;
        let q1 = s3 * s6;
        let q2 = s1 * s7;
        let q3 = s3 * s5;
        let q4 = s1 * s6;
        let q5 = s2 * s5;
        let q6 = s0 * s7;
        let q7 = s3 * s4;
        let q8 = s0 * s6;
        let q9 = s2 * s4;
        let q10 = s0 * s5;
        let q11 = s1 * s4;

        let d8 = (q0 * s13 + q3 * s14 + q4 * s15) - (q1 * s13 + q2 * s14 + q5 * s15);
        let d9 = (q1 * s12 + q6 * s14 + q9 * s15) - (q0 * s12 + q7 * s14 + q8 * s15);
        let d10 = (q2 * s12 + q7 * s13 + q10 * s15) - (q3 * s12 + q6 * s13 + q11 * s15);
        let d11 = (q5 * s12 + q8 * s13 + q11 * s14) - (q4 * s12 + q9 * s13 + q10 * s14);
        let d12 = (q2 * s10 + q5 * s11 + q1 * s9) - (q4 * s11 + q0 * s9 + q3 * s10);
        let d13 = (q8 * s11 + q0 * s8 + q7 * s10) - (q6 * s10 + q9 * s11 + q1 * s8);
        let d14 = (q6 * s9 + q11 * s11 + q3 * s8) - (q10 * s11 + q2 * s8 + q7 * s9);
        let d15 = (q10 * s10 + q4 * s8 + q9 * s9) - (q8 * s9 + q11 * s10 + q5 * s8);

        let det = s0 * d0 + s1 * d1 + s2 * d2 + s3 * d3;
        (
            [
                d0, d1, d2, d3, d4, d5, d6, d7, d8, d9, d10, d11, d12, d13, d14, d15,
            ],
            det,
        )
    }

    /// Determinant by cofactor expansion.
    #[inline]
    pub fn determinant(&self) -> T {
        self.adjugate().1
    }

    /// Composes a translation on the right: the xyz part of the last column
    /// gains `col0 * x + col1 * y + col2 * z`.
    ///
    /// ```rust
    /// use glsm_math::{Mat4, Vec4};
    ///
    /// let mut m = Mat4::<f64>::from_scalar(2.0);
    /// m.translate(1.0, 2.0, 3.0);
    /// assert_eq!(m.col(3), Vec4::new(2.0, 4.0, 6.0, 2.0));
    /// ```
    pub fn translate(&mut self, x: T, y: T, z: T) {
        let [c0, c1, c2, _] = self.cols;
        let c3 = &mut self.cols[3].data;
        for i in 0..3 {
            c3[i] += c0.data[i] * x + c1.data[i] * y + c2.data[i] * z;
        }
    }

    /// Elements in column-major order, converted to `U`.
    ///
    /// This is the 16-float block uploaded as a `mat4` uniform.
    #[inline]
    pub fn to_cols_array<U: Scalar>(&self) -> [U; 16] {
        let mut out = [U::ZERO; 16];
        self.write_cols(&mut out);
        out
    }
}

impl<T: Real> Mat4<T> {
    /// Inverse via the adjugate.
    ///
    /// The determinant is not checked: a singular matrix yields Inf/NaN
    /// elements. Use [`try_inverse`](Self::try_inverse) to detect that case.
    pub fn inverse(&self) -> Self {
        let (dst, det) = self.adjugate();
        let d = T::ONE / det;
        Self::from_cols(std::array::from_fn(|j| {
            std::array::from_fn(|i| dst[j * 4 + i] * d)
        }))
    }

    /// Inverse, or [`Error::SingularMatrix`] when the determinant is zero or
    /// not finite.
    pub fn try_inverse(&self) -> Result<Self> {
        let (dst, det) = self.adjugate();
        if det == T::ZERO || !det.is_finite() {
            return Err(Error::singular(det.cast::<f64>()));
        }
        let d = T::ONE / det;
        Ok(Self::from_cols(std::array::from_fn(|j| {
            std::array::from_fn(|i| dst[j * 4 + i] * d)
        })))
    }

    /// Rotation by `angle` degrees about `axis`, see [`Mat3::rotation`].
    #[inline]
    pub fn rotation(angle: T, axis: Vec3<T>) -> Self {
        Mat3::rotation(angle, axis).into()
    }

    /// Composes a rotation by `angle` degrees about `axis` on the right.
    #[inline]
    pub fn rotate(&mut self, angle: T, axis: Vec3<T>) {
        *self *= Self::rotation(angle, axis);
    }

    /// Re-orthonormalizes the upper-left 3x3 block, keeping the `w` row of
    /// the first three columns and the whole last column.
    pub fn orthonormalize(&mut self) {
        let mut r = Mat3::from(*self);
        r.orthonormalize();
        for j in 0..3 {
            let w = self.cols[j].w();
            self.cols[j] = r.cols[j].extend(w);
        }
    }

    /// Interpolates between two view matrices.
    ///
    /// The rotation blocks are slerped with [`Mat3::slerp`] and the camera
    /// positions (not the raw translation columns) are interpolated
    /// linearly. Both rotation blocks are assumed orthonormal. The result
    /// has a `(0, 0, 0, 1)` bottom row.
    pub fn slerp(&self, b: &Self, t: T) -> Self {
        let apos = self.camera_position();
        let bpos = b.camera_position();
        let m = Mat3::from(*self).slerp(&Mat3::from(*b), t);
        let mut ret = Self::from_col_vecs([
            m.cols[0].extend(T::ZERO),
            m.cols[1].extend(T::ZERO),
            m.cols[2].extend(T::ZERO),
            Vec4::W,
        ]);
        ret.set_camera_position(apos.mix(bpos, t));
        ret
    }

    /// Matrix that transforms normals: `transpose(inverse(mat3(self)))`.
    #[inline]
    pub fn normal_matrix(&self) -> Mat3<T> {
        Mat3::from(*self).inverse().transpose()
    }
}

impl From<Mat4<f32>> for glam::Mat4 {
    #[inline]
    fn from(m: Mat4<f32>) -> Self {
        glam::Mat4::from_cols_array(&m.to_cols_array())
    }
}

impl From<glam::Mat4> for Mat4<f32> {
    #[inline]
    fn from(m: glam::Mat4) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}

impl From<Mat4<f64>> for glam::DMat4 {
    #[inline]
    fn from(m: Mat4<f64>) -> Self {
        glam::DMat4::from_cols_array(&m.to_cols_array())
    }
}

impl From<glam::DMat4> for Mat4<f64> {
    #[inline]
    fn from(m: glam::DMat4) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}
