//! Rank-3 specifics: inverse, axis-angle rotation, Gram-Schmidt and slerp.
//!
//! A 3x3 matrix doubles as a 2D affine transform (`rotate`, `translate`
//! act on the xy plane and the third column) and as a 3D rotation block.

use glsm_core::{Error, Real, Result, Scalar};

use super::{Mat2, Mat3};
use crate::vector::Vec3;

/// Re-orthonormalizes three basis vectors in place (Gram-Schmidt).
///
/// `v0` is normalized, `v1` has its `v0` component removed and is
/// normalized, and `v2` is replaced by `v0 x v1`. Zero-length input vectors
/// produce NaN; there is no fallback.
pub fn orthonormalize_basis<T: Real>(v0: &mut Vec3<T>, v1: &mut Vec3<T>, v2: &mut Vec3<T>) {
    *v0 *= T::ONE / v0.length();
    let t = v1.dot(*v0);
    *v1 -= *v0 * t;
    *v1 *= T::ONE / v1.length();
    *v2 = v0.cross(*v1);
}

impl<T: Scalar> Mat3<T> {
    /// Creates a matrix from three column vectors.
    #[inline]
    pub fn from_columns(c0: Vec3<T>, c1: Vec3<T>, c2: Vec3<T>) -> Self {
        Self::from_col_vecs([c0, c1, c2])
    }

    /// Determinant by expansion along the first column.
    pub fn determinant(&self) -> T {
        let [ax, ay, az] = self.cols[0].data;
        let [bx, by, bz] = self.cols[1].data;
        let [cx, cy, cz] = self.cols[2].data;
        ax * (by * cz - bz * cy) + bx * (cy * az - cz * ay) + cx * (ay * bz - az * by)
    }

    /// Composes a 2D translation on the right: the third column gains
    /// `col0 * x + col1 * y` in its xy components.
    pub fn translate(&mut self, x: T, y: T) {
        let (c0, c1) = (self.cols[0], self.cols[1]);
        let c2 = &mut self.cols[2].data;
        c2[0] += c0.data[0] * x + c1.data[0] * y;
        c2[1] += c0.data[1] * x + c1.data[1] * y;
    }

    /// Elements in column-major order, converted to `U`.
    #[inline]
    pub fn to_cols_array<U: Scalar>(&self) -> [U; 9] {
        let mut out = [U::ZERO; 9];
        self.write_cols(&mut out);
        out
    }
}

impl<T: Real> Mat3<T> {
    /// Inverse by cofactor expansion along the first column.
    ///
    /// The determinant is not checked: a singular matrix yields Inf/NaN
    /// elements. Use [`try_inverse`](Self::try_inverse) to detect that case.
    pub fn inverse(&self) -> Self {
        let [ax, ay, az] = self.cols[0].data;
        let [bx, by, bz] = self.cols[1].data;
        let [cx, cy, cz] = self.cols[2].data;
        let dax = by * cz - bz * cy;
        let dbx = cy * az - cz * ay;
        let dcx = ay * bz - az * by;
        let d = T::ONE / (ax * dax + bx * dbx + cx * dcx);
        // Transposed cofactors scaled by 1/det
        Self::from_cols([
            [dax * d, dbx * d, dcx * d],
            [(bz * cx - bx * cz) * d, (cz * ax - cx * az) * d, (az * bx - ax * bz) * d],
            [(bx * cy - by * cx) * d, (cx * ay - cy * ax) * d, (ax * by - ay * bx) * d],
        ])
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

    /// Rotation by `angle` degrees about `axis` (Rodrigues' formula).
    ///
    /// The axis is normalized here. A zero-length axis returns the identity.
    ///
    /// ```rust
    /// use glsm_math::{Mat3, Vec3};
    ///
    /// let r = Mat3::rotation(90.0, Vec3::Z);
    /// let v = r * Vec3::X;
    /// assert!((v - Vec3::Y).length() < 1e-12);
    /// ```
    pub fn rotation(angle: T, axis: Vec3<T>) -> Self {
        let ad = axis.length();
        let [ax, ay, az] = if ad > T::ZERO {
            (axis * (T::ONE / ad)).data
        } else {
            return Self::identity();
        };

        let a = -angle.to_radians();
        let si = a.sin();
        let co = a.cos();
        let ti = T::ONE - co;

        let (tx, ty, tz) = (ti * ax, ti * ay, ti * az);
        let (sx, sy, sz) = (si * ax, si * ay, si * az);

        Self::from_cols([
            [tx * ax + co, tx * ay - sz, tx * az + sy],
            [tx * ay + sz, ty * ay + co, ty * az - sx],
            [tx * az - sy, ty * az + sx, tz * az + co],
        ])
    }

    /// Composes a 2D rotation by `angle` degrees on the right.
    pub fn rotate(&mut self, angle: T) {
        *self *= Mat3::from(Mat2::rotation(angle));
    }

    /// Composes [`rotation`](Self::rotation) about `axis` on the right.
    #[inline]
    pub fn rotate_axis(&mut self, angle: T, axis: Vec3<T>) {
        *self *= Self::rotation(angle, axis);
    }

    /// Re-orthonormalizes the columns in place, see [`orthonormalize_basis`].
    pub fn orthonormalize(&mut self) {
        let [c0, c1, c2] = &mut self.cols;
        orthonormalize_basis(c0, c1, c2);
    }

    /// Spherical interpolation between the orthonormal bases `self` and `b`.
    ///
    /// `rat = 0` yields `self`, `rat = 1` yields `b`. The rotation axis is
    /// the sum of the cross products of corresponding columns; the angle is
    /// recovered from whichever of the first two columns is further from
    /// that axis. If the combined axis is zero, or the angle ratio is
    /// undefined, `self` is returned unchanged.
    pub fn slerp(&self, b: &Self, rat: T) -> Self {
        let [irig, idow, ifor] = self.cols;
        let [irig2, idow2, ifor2] = b.cols;

        let ax = Vec3::new(
            irig.y() * irig2.z() - irig.z() * irig2.y() + idow.y() * idow2.z()
                - idow.z() * idow2.y()
                + ifor.y() * ifor2.z()
                - ifor.z() * ifor2.y(),
            irig.z() * irig2.x() - irig.x() * irig2.z() + idow.z() * idow2.x()
                - idow.x() * idow2.z()
                + ifor.z() * ifor2.x()
                - ifor.x() * ifor2.z(),
            irig.x() * irig2.y() - irig.y() * irig2.x() + idow.x() * idow2.y()
                - idow.y() * idow2.x()
                + ifor.x() * ifor2.y()
                - ifor.y() * ifor2.x(),
        );
        let t = ax.length_squared();
        if t == T::ZERO {
            return *self;
        }

        let ox = irig.dot(ax);
        let oy = idow.dot(ax);
        let (c, s) = if ox.abs() < oy.abs() {
            (irig.dot(irig2), ox * ox)
        } else {
            (idow.dot(idow2), oy * oy)
        };
        if t == s {
            return *self;
        }

        let mut c = (c * t - s) / (t - s);
        if c < -T::ONE {
            c = -T::ONE;
        }
        if c > T::ONE {
            c = T::ONE;
        }
        let angle = c.acos() * rat;
        let s = angle.sin();
        let c = angle.cos();

        let [x, y, z] = (ax * (T::ONE / t.sqrt())).data;
        let t = T::ONE - c;
        let (tx, ty, tz) = (x * t, y * t, z * t);
        let (sx, sy, sz) = (x * s, y * s, z * s);
        let (xy, xz, yz) = (y * tx, z * tx, z * ty);

        // Row-major rotation applied to every column of self
        let k = [
            x * tx + c,
            xy - sz,
            sy + xz,
            sz + xy,
            y * ty + c,
            yz - sx,
            xz - sy,
            sx + yz,
            z * tz + c,
        ];
        let turn = |v: Vec3<T>| {
            let [ox, oy, oz] = v.data;
            Vec3::new(
                ox * k[0] + oy * k[1] + oz * k[2],
                ox * k[3] + oy * k[4] + oz * k[5],
                ox * k[6] + oy * k[7] + oz * k[8],
            )
        };
        Self::from_col_vecs(self.cols.map(turn))
    }
}

impl From<Mat3<f32>> for glam::Mat3 {
    #[inline]
    fn from(m: Mat3<f32>) -> Self {
        glam::Mat3::from_cols_array(&m.to_cols_array())
    }
}

impl From<glam::Mat3> for Mat3<f32> {
    #[inline]
    fn from(m: glam::Mat3) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}

impl From<Mat3<f64>> for glam::DMat3 {
    #[inline]
    fn from(m: Mat3<f64>) -> Self {
        glam::DMat3::from_cols_array(&m.to_cols_array())
    }
}

impl From<glam::DMat3> for Mat3<f64> {
    #[inline]
    fn from(m: glam::DMat3) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}
