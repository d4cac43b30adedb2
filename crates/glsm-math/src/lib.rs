//! # glsm-math
//!
//! GLSL-style linear algebra for CPU-side graphics code.
//!
//! This crate provides the numeric kernel shared by the rest of the workspace:
//!
//! - [`Vector`] ([`Vec2`], [`Vec3`], [`Vec4`]) - fixed-size vectors with
//!   componentwise arithmetic and swizzles
//! - [`Matrix`] ([`Mat2`], [`Mat3`], [`Mat4`]) - column-major matrices with
//!   inversion, rotation builders, Gram-Schmidt and slerp
//! - [`camera`] - view matrices, projections and ray unprojection
//! - [`func`] - scalar helpers (`mix`, `ufmod`, `smoothmin`, ...)
//!
//! # Design
//!
//! Matrices are stored **column-major** and multiply **column vectors**, as
//! in GLSL:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Degenerate inputs never panic: `normalize` of a zero vector is zero, a
//! rotation about a zero axis is the identity, and inverting a singular
//! matrix yields Inf/NaN. The `try_*` variants report these cases as
//! [`glsm_core::Error`] instead.
//!
//! # Usage
//!
//! ```rust
//! use glsm_math::{Mat4, Vec3, Vec4};
//!
//! let mut model = Mat4::identity();
//! model.translate(1.0, 0.0, 0.0);
//! model.rotate(90.0, Vec3::Z);
//!
//! let p = model * Vec4::new(1.0, 0.0, 0.0, 1.0);
//! assert!((p.x() - 1.0f64).abs() < 1e-12);
//! assert!((p.y() - 1.0f64).abs() < 1e-12);
//!
//! // Uniform upload
//! let floats: [f32; 16] = model.to_cols_array();
//! assert_eq!(floats[12], 1.0);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - interop conversions and cross-checks
//! - `glsm-core` - element traits, axes, errors
//!
//! # Used By
//!
//! - `glsm-mesh` - vertex construction
//! - `glsm-cli` - camera replay and ray queries

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod func;
mod matrix;
mod swizzle;
mod vector;

pub use camera::{Ray, Viewport};
pub use matrix::*;
pub use vector::*;

pub use glsm_core::{Axis, Error, Real, Result, Scalar};
