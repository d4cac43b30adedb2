//! Square column-major matrices of rank 2, 3 and 4.
//!
//! [`Matrix<T, N>`] stores `N` column vectors. The rank-independent parts
//! (construction, products, transpose, rank conversion, flattening) live
//! here; determinant, inversion and the rotation builders are implemented
//! per rank in the submodules.
//!
//! # Convention
//!
//! Storage is **column-major** and vectors are **columns**:
//!
//! ```text
//! | c0.x c1.x c2.x |   | x |
//! | c0.y c1.y c2.y | * | y | = c0*x + c1*y + c2*z
//! | c0.z c1.z c2.z |   | z |
//! ```
//!
//! `vector * matrix` treats the vector as a row, which equals
//! `transpose(matrix) * vector`. The two products are deliberately not the
//! same operation.
//!
//! # Usage
//!
//! ```rust
//! use glsm_math::{Mat2, Vec2};
//!
//! let m = Mat2::from_cols([[1.0, 2.0], [4.0, 3.0]]);
//! let a = Vec2::new(1.0, 2.0);
//! assert_eq!(m * a, Vec2::new(9.0, 8.0));
//! assert_eq!(a * m, Vec2::new(5.0, 10.0));
//! ```

mod mat2;
mod mat3;
mod mat4;

pub use mat3::orthonormalize_basis;

use std::ops::{Add, Index, IndexMut, Mul, MulAssign, Neg, Sub};

use glsm_core::{Real, Scalar};

use crate::vector::Vector;

/// A square `N`x`N` matrix stored as `N` columns.
///
/// # Example
///
/// ```rust
/// use glsm_math::{Mat3, Vec3};
///
/// let m = Mat3::<f64>::from_scalar(2.0);
/// assert_eq!(m * Vec3::new(1.0, 2.0, 3.0), Vec3::new(2.0, 4.0, 6.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Matrix<T, const N: usize> {
    pub(crate) cols: [Vector<T, N>; N],
}

/// 2x2 matrix.
pub type Mat2<T = f64> = Matrix<T, 2>;
/// 3x3 matrix.
pub type Mat3<T = f64> = Matrix<T, 3>;
/// 4x4 matrix.
pub type Mat4<T = f64> = Matrix<T, 4>;

/// Single precision 2x2 matrix.
pub type Mat2f = Mat2<f32>;
/// Single precision 3x3 matrix.
pub type Mat3f = Mat3<f32>;
/// Single precision 4x4 matrix.
pub type Mat4f = Mat4<f32>;

impl<T: Scalar, const N: usize> Matrix<T, N> {
    /// All elements zero.
    pub const ZERO: Self = Self {
        cols: [Vector::ZERO; N],
    };

    /// Creates a matrix from column vectors.
    #[inline]
    pub const fn from_col_vecs(cols: [Vector<T, N>; N]) -> Self {
        Self { cols }
    }

    /// Creates a matrix from column arrays.
    ///
    /// This is the element-list order: `from_cols([[a, b], [c, d]])` has
    /// first column `(a, b)`.
    #[inline]
    pub fn from_cols(cols: [[T; N]; N]) -> Self {
        Self {
            cols: cols.map(Vector::from_array),
        }
    }

    /// Creates a matrix from row arrays, as the matrix is written on paper.
    ///
    /// ```rust
    /// use glsm_math::Mat2;
    ///
    /// let m = Mat2::from_rows([[1, 4], [2, 3]]);
    /// assert_eq!(m, Mat2::from_cols([[1, 2], [4, 3]]));
    /// ```
    #[inline]
    pub fn from_rows(rows: [[T; N]; N]) -> Self {
        Self::from_cols(rows).transpose()
    }

    /// Diagonal matrix with `v` on the diagonal and zero elsewhere.
    ///
    /// `from_scalar(1)` is the identity.
    #[inline]
    pub fn from_scalar(v: T) -> Self {
        Self::from_diagonal(Vector::splat(v))
    }

    /// Diagonal matrix from a vector of diagonal entries.
    #[inline]
    pub fn from_diagonal(d: Vector<T, N>) -> Self {
        let mut m = Self::ZERO;
        for i in 0..N {
            m.cols[i].data[i] = d.data[i];
        }
        m
    }

    /// Multiplicative identity of this rank.
    #[inline]
    pub fn identity() -> Self {
        Self::from_scalar(T::ONE)
    }

    /// Overwrites `self` with the identity.
    #[inline]
    pub fn set_identity(&mut self) {
        *self = Self::identity();
    }

    /// Returns column `i`.
    #[inline]
    pub fn col(&self, i: usize) -> Vector<T, N> {
        self.cols[i]
    }

    /// Returns row `i`.
    #[inline]
    pub fn row(&self, i: usize) -> Vector<T, N> {
        Vector::from_array(self.cols.map(|c| c.data[i]))
    }

    /// All columns.
    #[inline]
    pub const fn cols(&self) -> &[Vector<T, N>; N] {
        &self.cols
    }

    /// Element at `row`, `col`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.cols[col].data[row]
    }

    /// Swaps rows and columns.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self {
            cols: std::array::from_fn(|i| self.row(i)),
        }
    }

    /// Applies `f` to every element.
    #[inline]
    pub fn map<U, F: FnMut(T) -> U + Copy>(self, f: F) -> Matrix<U, N> {
        Matrix {
            cols: self.cols.map(|c| c.map(f)),
        }
    }

    /// Converts every element to another element type (`as` semantics).
    #[inline]
    pub fn cast<U: Scalar>(self) -> Matrix<U, N> {
        Matrix {
            cols: self.cols.map(|c| c.cast::<U>()),
        }
    }

    /// Embeds into, or truncates to, a matrix of rank `M`.
    ///
    /// Widening keeps `self` in the upper-left block and fills the new rows
    /// and columns with the identity pattern. Narrowing keeps the upper-left
    /// block.
    pub fn resize<const M: usize>(&self) -> Matrix<T, M> {
        let mut out = Matrix::<T, M>::identity();
        for j in 0..M.min(N) {
            for i in 0..M.min(N) {
                out.cols[j].data[i] = self.cols[j].data[i];
            }
        }
        out
    }

    /// Elements in column-major order.
    ///
    /// This is the layout expected by shader uniform uploads.
    #[inline]
    pub fn iter_elements(&self) -> impl Iterator<Item = T> + '_ {
        self.cols.iter().flat_map(|c| c.data.iter().copied())
    }

    /// Writes all elements, converted to `U`, into `out` in column-major order.
    ///
    /// # Panics
    ///
    /// Panics if `out` holds fewer than `N * N` elements.
    pub fn write_cols<U: Scalar>(&self, out: &mut [U]) {
        assert!(
            out.len() >= N * N,
            "output slice holds {} elements, {} needed",
            out.len(),
            N * N
        );
        for (dst, v) in out.iter_mut().zip(self.iter_elements()) {
            *dst = v.cast();
        }
    }

    /// Flattens into a `Vec` in column-major order.
    pub fn to_cols_vec<U: Scalar>(&self) -> Vec<U> {
        self.iter_elements().map(|v| v.cast()).collect()
    }
}

impl<T: Real, const N: usize> Matrix<T, N> {
    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.cols.iter().all(|c| c.is_finite())
    }

    /// Largest absolute element difference between two matrices.
    pub fn max_abs_diff(&self, other: &Self) -> T {
        let mut d = T::ZERO;
        for (a, b) in self.iter_elements().zip(other.iter_elements()) {
            d = d.maximum((a - b).abs());
        }
        d
    }
}

impl<T: Scalar, const N: usize> Default for Matrix<T, N> {
    fn default() -> Self {
        Self::identity()
    }
}

// Rank conversions

macro_rules! impl_rank_from {
    ($($from:literal => $to:literal),*) => {$(
        impl<T: Scalar> From<Matrix<T, $from>> for Matrix<T, $to> {
            #[inline]
            fn from(m: Matrix<T, $from>) -> Self {
                m.resize()
            }
        }
    )*};
}

impl_rank_from!(2 => 3, 2 => 4, 3 => 4, 3 => 2, 4 => 2, 4 => 3);

// Indexing by column

impl<T, const N: usize> Index<usize> for Matrix<T, N> {
    type Output = Vector<T, N>;

    #[inline]
    fn index(&self, i: usize) -> &Vector<T, N> {
        &self.cols[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Matrix<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Vector<T, N> {
        &mut self.cols[i]
    }
}

// Matrix * Vector (column vector)
impl<T: Scalar, const N: usize> Mul<Vector<T, N>> for Matrix<T, N> {
    type Output = Vector<T, N>;

    #[inline]
    fn mul(self, v: Vector<T, N>) -> Vector<T, N> {
        let mut out = self.cols[0] * v.data[0];
        for j in 1..N {
            out += self.cols[j] * v.data[j];
        }
        out
    }
}

// Vector * Matrix (row vector)
impl<T: Scalar, const N: usize> Mul<Matrix<T, N>> for Vector<T, N> {
    type Output = Vector<T, N>;

    #[inline]
    fn mul(self, m: Matrix<T, N>) -> Vector<T, N> {
        Vector::from_array(m.cols.map(|c| c.dot(self)))
    }
}

// Matrix * Matrix
impl<T: Scalar, const N: usize> Mul for Matrix<T, N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            cols: rhs.cols.map(|c| self * c),
        }
    }
}

// Matrix * T
impl<T: Scalar, const N: usize> Mul<T> for Matrix<T, N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self {
            cols: self.cols.map(|c| c * rhs),
        }
    }
}

impl<T: Scalar, const N: usize> MulAssign for Matrix<T, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Matrix<T, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar, const N: usize> Add for Matrix<T, N> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            cols: std::array::from_fn(|j| self.cols[j] + rhs.cols[j]),
        }
    }
}

impl<T: Scalar, const N: usize> Sub for Matrix<T, N> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            cols: std::array::from_fn(|j| self.cols[j] - rhs.cols[j]),
        }
    }
}

impl<T: Scalar, const N: usize> Neg for Matrix<T, N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            cols: self.cols.map(|c| -c),
        }
    }
}

// T * Matrix
macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {$(
        impl<const N: usize> Mul<Matrix<$t, N>> for $t {
            type Output = Matrix<$t, N>;

            #[inline]
            fn mul(self, rhs: Matrix<$t, N>) -> Matrix<$t, N> {
                rhs * self
            }
        }
    )*};
}

impl_scalar_lhs!(i32, i64, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IVec2, IVec3, IVec4};

    #[test]
    fn test_products_mat2() {
        let m = Mat2::from_cols([[1, 2], [4, 3]]);
        let a = IVec2::new(1, 2);
        assert_eq!(m * a, IVec2::new(9, 8));
        assert_eq!(a * m, IVec2::new(5, 10));
        assert_eq!(a * m, m.transpose() * a);
    }

    #[test]
    fn test_products_mat3() {
        let m = Mat3::from_cols([[1, 2, 3], [6, 5, 4], [7, 9, 8]]);
        let a = IVec3::new(1, 2, 3);
        assert_eq!(m * a, IVec3::new(34, 39, 35));
        assert_eq!(a * m, IVec3::new(14, 28, 49));
    }

    #[test]
    fn test_products_mat4() {
        let m = Mat4::from_cols([[1, 2, 3, 4], [6, 5, 4, 3], [7, 9, 8, 6], [9, 6, 3, 2]]);
        let a = IVec4::new(1, 2, 3, 4);
        assert_eq!(m * a, IVec4::new(70, 63, 47, 36));
        assert_eq!(a * m, IVec4::new(30, 40, 73, 38));
    }

    #[test]
    fn test_compose() {
        let a = Mat2::from_rows([[1, 2], [3, 4]]);
        let b = Mat2::from_rows([[0, 1], [1, 0]]);
        // Column j of a*b is a applied to column j of b
        assert_eq!(a * b, Mat2::from_rows([[2, 1], [4, 3]]));
        let mut c = a;
        c *= b;
        assert_eq!(c, a * b);
        assert_eq!(a * Mat2::identity(), a);
    }

    #[test]
    fn test_from_rows_transposes() {
        let m = Mat3::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert_eq!(m.col(0), IVec3::new(1, 4, 7));
        assert_eq!(m.row(0), IVec3::new(1, 2, 3));
        assert_eq!(m.get(1, 2), 6);
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn test_diagonal() {
        let m = Mat4::from_scalar(3);
        assert_eq!(m.col(2), IVec4::new(0, 0, 3, 0));
        assert_eq!(Mat4::<i32>::default(), Mat4::identity());
        let mut n = m;
        n.set_identity();
        assert_eq!(n, Mat4::from_scalar(1));
    }

    #[test]
    fn test_rank_widening() {
        let m2 = Mat2::from_cols([[1, 2], [3, 4]]);
        let m4: Mat4<i32> = m2.into();
        assert_eq!(
            m4,
            Mat4::from_cols([[1, 2, 0, 0], [3, 4, 0, 0], [0, 0, 1, 0], [0, 0, 0, 1]])
        );
        let m3: Mat3<i32> = m2.into();
        assert_eq!(m3.col(2), IVec3::new(0, 0, 1));
        let back: Mat2<i32> = m4.into();
        assert_eq!(back, m2);
        let m3b: Mat3<i32> = m4.into();
        assert_eq!(m3b, m3);
    }

    #[test]
    fn test_scalar_mul() {
        let m = Mat2::<f64>::from_cols([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(2.0 * m, Mat2::from_cols([[2.0, 4.0], [6.0, 8.0]]));
        assert_eq!(m * 2.0 - m, m);
        assert_eq!(-m + m, Mat2::ZERO);
    }

    #[test]
    fn test_flatten_column_major() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let mut out = [0.0f32; 9];
        m.write_cols(&mut out);
        assert_eq!(out, [1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0]);
        assert_eq!(m.to_cols_vec::<i32>(), vec![1, 4, 7, 2, 5, 8, 3, 6, 9]);
    }

    #[test]
    #[should_panic(expected = "9 needed")]
    fn test_flatten_short_buffer() {
        let mut out = [0.0f32; 4];
        Mat3::<f64>::identity().write_cols(&mut out);
    }

    #[test]
    fn test_cast() {
        let m = Mat2::<f64>::from_cols([[1.5, -2.5], [3.0, 4.75]]);
        assert_eq!(m.cast::<i32>(), Mat2::from_cols([[1, -2], [3, 4]]));
        assert_eq!(m.cast::<f32>().cast::<f64>(), m);
    }
}
