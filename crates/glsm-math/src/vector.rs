//! Fixed-size vectors of length 2, 3 and 4.
//!
//! [`Vector<T, N>`] is a plain value type over any [`Scalar`] element.
//! The aliases [`Vec2`], [`Vec3`], [`Vec4`] name the common sizes.
//!
//! # Usage
//!
//! ```rust
//! use glsm_math::{Vec3, Vec4};
//!
//! let n = Vec3::new(1.0, 2.0, 2.0).normalize();
//! assert!((n.length() - 1.0f64).abs() < 1e-12);
//!
//! // Homogeneous widening appends w = 1
//! let p: Vec4<f64> = Vec3::new(1.0, 2.0, 3.0).into();
//! assert_eq!(p, Vec4::new(1.0, 2.0, 3.0, 1.0));
//! ```
//!
//! # Equality
//!
//! `==` is exact componentwise comparison; no epsilon is applied.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use glsm_core::{Axis, Real, Scalar};
use num_traits::Float;

/// A vector of `N` components of type `T`.
///
/// Components are addressed by position (`v[0]`), by [`Axis`] (`v[Axis::Y]`),
/// or through the typed accessors (`v.x()`, `v.set_z(..)`) that exist only for
/// the dimensions that have them.
///
/// # Example
///
/// ```rust
/// use glsm_core::Axis;
/// use glsm_math::Vec3;
///
/// let v = Vec3::new(1, 2, 3);
/// assert_eq!(v.y(), 2);
/// assert_eq!(v[Axis::Z], 3);
/// assert_eq!(v.dot(v), 14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Vector<T, const N: usize> {
    pub(crate) data: [T; N],
}

/// 2-component vector.
pub type Vec2<T = f64> = Vector<T, 2>;
/// 3-component vector.
pub type Vec3<T = f64> = Vector<T, 3>;
/// 4-component vector.
pub type Vec4<T = f64> = Vector<T, 4>;

/// Single precision aliases, the layout uploaded to shaders.
pub type Vec2f = Vec2<f32>;
/// Single precision 3-vector.
pub type Vec3f = Vec3<f32>;
/// Single precision 4-vector.
pub type Vec4f = Vec4<f32>;
/// Integer 2-vector.
pub type IVec2 = Vec2<i32>;
/// Integer 3-vector.
pub type IVec3 = Vec3<i32>;
/// Integer 4-vector.
pub type IVec4 = Vec4<i32>;

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// All components zero.
    pub const ZERO: Self = Self { data: [T::ZERO; N] };

    /// All components one.
    pub const ONE: Self = Self { data: [T::ONE; N] };

    /// Number of components.
    pub const DIM: usize = N;

    /// Creates a vector from an array.
    #[inline]
    pub const fn from_array(data: [T; N]) -> Self {
        Self { data }
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [T; N] {
        self.data
    }

    /// Borrows the components as an array.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.data
    }

    /// Creates a vector with all components set to `v`.
    ///
    /// ```rust
    /// use glsm_math::Vec4;
    ///
    /// assert_eq!(Vec4::splat(0.5), Vec4::new(0.5, 0.5, 0.5, 0.5));
    /// ```
    #[inline]
    pub fn splat(v: T) -> Self {
        Self { data: [v; N] }
    }

    /// Applies `f` to every component.
    #[inline]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Vector<U, N> {
        Vector {
            data: self.data.map(f),
        }
    }

    /// Combines two vectors component by component.
    #[inline]
    pub fn zip_map<F: FnMut(T, T) -> T>(self, rhs: Self, mut f: F) -> Self {
        Self {
            data: std::array::from_fn(|i| f(self.data[i], rhs.data[i])),
        }
    }

    /// Component at `axis`, or `None` if the vector is too short for it.
    ///
    /// The non-panicking form of `v[axis]`.
    #[inline]
    pub fn get_axis(&self, axis: Axis) -> Option<T> {
        self.data.get(axis.index()).copied()
    }

    /// Converts every component to another element type, see [`Scalar::cast`].
    ///
    /// ```rust
    /// use glsm_math::{IVec2, Vec2};
    ///
    /// let v = Vec2::new(1.9, -2.5).cast::<i32>();
    /// assert_eq!(v, IVec2::new(1, -2));
    /// ```
    #[inline]
    pub fn cast<U: Scalar>(self) -> Vector<U, N> {
        self.map(|c| c.cast::<U>())
    }

    /// Sum of componentwise products.
    #[inline]
    pub fn dot(self, rhs: Self) -> T {
        let mut sum = self.data[0] * rhs.data[0];
        for i in 1..N {
            sum += self.data[i] * rhs.data[i];
        }
        sum
    }

    /// Squared length (avoids sqrt).
    #[inline]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    /// Squared distance between two points.
    #[inline]
    pub fn square_distance(self, rhs: Self) -> T {
        let d = self - rhs;
        d.dot(d)
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        self.map(|c| c.abs())
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, rhs: Self) -> Self {
        self.zip_map(rhs, Scalar::minimum)
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, rhs: Self) -> Self {
        self.zip_map(rhs, Scalar::maximum)
    }

    /// Smallest component.
    #[inline]
    pub fn min_element(self) -> T {
        self.data.into_iter().fold(self.data[0], Scalar::minimum)
    }

    /// Largest component.
    #[inline]
    pub fn max_element(self) -> T {
        self.data.into_iter().fold(self.data[0], Scalar::maximum)
    }
}

impl<T: Real, const N: usize> Vector<T, N> {
    /// Length (magnitude) of the vector: `sqrt(dot(v, v))`.
    #[inline]
    pub fn length(self) -> T {
        self.dot(self).sqrt()
    }

    /// Distance between two points.
    #[inline]
    pub fn distance(self, rhs: Self) -> T {
        (self - rhs).length()
    }

    /// Normalizes the vector to unit length.
    ///
    /// Returns the zero vector if the length is exactly zero. There is no
    /// fallback direction.
    ///
    /// ```rust
    /// use glsm_math::Vec3;
    ///
    /// assert_eq!(Vec3::<f64>::ZERO.normalize(), Vec3::ZERO);
    /// ```
    #[inline]
    pub fn normalize(self) -> Self {
        let d = self.length();
        if d == T::ZERO {
            return Self::ZERO;
        }
        self * (T::ONE / d)
    }

    /// Reflects `self` about the plane with normal `n`: `v - 2*dot(v, n)*n`.
    ///
    /// `n` is expected to be unit length; this is not checked.
    #[inline]
    pub fn reflect(self, n: Self) -> Self {
        self - n * (T::from_f64(2.0) * self.dot(n))
    }

    /// Linear interpolation: `self + (rhs - self) * t`.
    #[inline]
    pub fn mix(self, rhs: Self, t: T) -> Self {
        self + (rhs - self) * t
    }

    /// Component-wise floor.
    #[inline]
    pub fn floor(self) -> Self {
        self.map(Float::floor)
    }

    /// Component-wise ceiling.
    #[inline]
    pub fn ceil(self) -> Self {
        self.map(Float::ceil)
    }

    /// Fractional part `x - floor(x)` of every component.
    #[inline]
    pub fn fract(self) -> Self {
        self - self.floor()
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.data.iter().all(|c| c.is_finite())
    }
}

macro_rules! impl_accessors {
    ($n:literal: $($get:ident / $set:ident => $i:literal),+) => {
        impl<T: Scalar> Vector<T, $n> {
            $(
                #[doc = concat!("Returns the `", stringify!($get), "` component.")]
                #[inline]
                pub fn $get(&self) -> T {
                    self.data[$i]
                }

                #[doc = concat!("Sets the `", stringify!($get), "` component.")]
                #[inline]
                pub fn $set(&mut self, v: T) {
                    self.data[$i] = v;
                }
            )+
        }
    };
}

impl_accessors!(2: x / set_x => 0, y / set_y => 1);
impl_accessors!(3: x / set_x => 0, y / set_y => 1, z / set_z => 2);
impl_accessors!(4: x / set_x => 0, y / set_y => 1, z / set_z => 2, w / set_w => 3);

impl<T: Scalar> Vector<T, 2> {
    /// Unit X vector.
    pub const X: Self = Self::new(T::ONE, T::ZERO);
    /// Unit Y vector.
    pub const Y: Self = Self::new(T::ZERO, T::ONE);

    /// Creates a new 2-vector.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { data: [x, y] }
    }

    /// Z component of the 3D cross product: `a.x*b.y - a.y*b.x`.
    #[inline]
    pub fn cross(self, rhs: Self) -> T {
        self.data[0] * rhs.data[1] - self.data[1] * rhs.data[0]
    }

    /// Appends a `z` component.
    #[inline]
    pub fn extend(self, z: T) -> Vector<T, 3> {
        Vector::<T, 3>::new(self.data[0], self.data[1], z)
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Unit X vector.
    pub const X: Self = Self::new(T::ONE, T::ZERO, T::ZERO);
    /// Unit Y vector.
    pub const Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO);
    /// Unit Z vector.
    pub const Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE);

    /// Creates a new 3-vector.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { data: [x, y, z] }
    }

    /// Cross product.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = rhs.data;
        Self::new(ay * bz - by * az, az * bx - bz * ax, ax * by - bx * ay)
    }

    /// Appends a `w` component.
    #[inline]
    pub fn extend(self, w: T) -> Vector<T, 4> {
        Vector::<T, 4>::new(self.data[0], self.data[1], self.data[2], w)
    }

    /// Drops the `z` component.
    #[inline]
    pub fn truncate(self) -> Vector<T, 2> {
        Vector::<T, 2>::new(self.data[0], self.data[1])
    }
}

impl<T: Scalar> Vector<T, 4> {
    /// Unit X vector.
    pub const X: Self = Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO);
    /// Unit Y vector.
    pub const Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO, T::ZERO);
    /// Unit Z vector.
    pub const Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE, T::ZERO);
    /// Unit W vector.
    pub const W: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE);

    /// Creates a new 4-vector.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Drops the `w` component.
    #[inline]
    pub fn truncate(self) -> Vector<T, 3> {
        Vector::<T, 3>::new(self.data[0], self.data[1], self.data[2])
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::ZERO
    }
}

// Dimension conversions follow homogeneous-coordinate conventions.

impl<T: Scalar> From<Vector<T, 4>> for Vector<T, 3> {
    #[inline]
    fn from(v: Vector<T, 4>) -> Self {
        v.truncate()
    }
}

impl<T: Scalar> From<Vector<T, 4>> for Vector<T, 2> {
    #[inline]
    fn from(v: Vector<T, 4>) -> Self {
        Vector::<T, 2>::new(v.data[0], v.data[1])
    }
}

impl<T: Scalar> From<Vector<T, 3>> for Vector<T, 2> {
    #[inline]
    fn from(v: Vector<T, 3>) -> Self {
        v.truncate()
    }
}

impl<T: Scalar> From<Vector<T, 3>> for Vector<T, 4> {
    #[inline]
    fn from(v: Vector<T, 3>) -> Self {
        v.extend(T::ONE)
    }
}

impl<T: Scalar> From<Vector<T, 2>> for Vector<T, 3> {
    #[inline]
    fn from(v: Vector<T, 2>) -> Self {
        v.extend(T::ZERO)
    }
}

impl<T: Scalar> From<Vector<T, 2>> for Vector<T, 4> {
    #[inline]
    fn from(v: Vector<T, 2>) -> Self {
        Vector::<T, 4>::new(v.data[0], v.data[1], T::ZERO, T::ONE)
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(a: [T; N]) -> Self {
        Self::from_array(a)
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> [T; N] {
        v.data
    }
}

// Indexing

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T, const N: usize> Index<Axis> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, axis: Axis) -> &T {
        match self.data.get(axis.index()) {
            Some(c) => c,
            None => panic!("{}-component vector has no {} component", N, axis),
        }
    }
}

impl<T, const N: usize> IndexMut<Axis> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        match self.data.get_mut(axis.index()) {
            Some(c) => c,
            None => panic!("{}-component vector has no {} component", N, axis),
        }
    }
}

// Arithmetic: vector (op) vector and vector (op) scalar, all componentwise.

macro_rules! impl_binary_op {
    ($tr:ident, $f:ident, $atr:ident, $af:ident, $op:tt) => {
        impl<T: Scalar, const N: usize> $tr for Vector<T, N> {
            type Output = Self;

            #[inline]
            fn $f(self, rhs: Self) -> Self {
                self.zip_map(rhs, |a, b| a $op b)
            }
        }

        impl<T: Scalar, const N: usize> $tr<T> for Vector<T, N> {
            type Output = Self;

            #[inline]
            fn $f(self, rhs: T) -> Self {
                self.map(|a| a $op rhs)
            }
        }

        impl<T: Scalar, const N: usize> $atr for Vector<T, N> {
            #[inline]
            fn $af(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }

        impl<T: Scalar, const N: usize> $atr<T> for Vector<T, N> {
            #[inline]
            fn $af(&mut self, rhs: T) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, +);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, -);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, *);
impl_binary_op!(Div, div, DivAssign, div_assign, /);

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

// scalar * vector
macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {$(
        impl<const N: usize> Mul<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            #[inline]
            fn mul(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                rhs * self
            }
        }
    )*};
}

impl_scalar_lhs!(i32, i64, f32, f64);

// glam interop

macro_rules! impl_glam_vec {
    ($t:ty, $n:literal, $g:ty) => {
        impl From<Vector<$t, $n>> for $g {
            #[inline]
            fn from(v: Vector<$t, $n>) -> $g {
                <$g>::from_array(v.data)
            }
        }

        impl From<$g> for Vector<$t, $n> {
            #[inline]
            fn from(v: $g) -> Self {
                Self::from_array(v.to_array())
            }
        }
    };
}

impl_glam_vec!(f32, 2, glam::Vec2);
impl_glam_vec!(f32, 3, glam::Vec3);
impl_glam_vec!(f32, 4, glam::Vec4);
impl_glam_vec!(f64, 2, glam::DVec2);
impl_glam_vec!(f64, 3, glam::DVec3);
impl_glam_vec!(f64, 4, glam::DVec4);
