//! Error types for glsm operations.
//!
//! The numeric kernel has no recoverable-error channel by default: degenerate
//! inputs follow fixed fallback policies (zero vector, identity, Inf/NaN
//! propagation). The variants here back the opt-in strict entry points
//! (`try_inverse`, `try_swizzle`, `try_set_swizzle`, `try_aspect`) and the mesh builder.
//!
//! # Usage
//!
//! ```rust
//! use glsm_core::{Axis, Error, Result};
//!
//! fn pick(dim: usize, axis: Axis) -> Result<usize> {
//!     if axis.index() >= dim {
//!         return Err(Error::axis_out_of_range(axis, dim));
//!     }
//!     Ok(axis.index())
//! }
//!
//! assert!(pick(2, Axis::Z).is_err());
//! ```

use thiserror::Error;

use crate::Axis;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the strict variants of glsm operations.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// A swizzle selected an axis the vector does not have (e.g. `z` on a 2-vector).
    #[error("axis {axis} is out of range for a {dim}-component vector")]
    AxisOutOfRange {
        /// Requested axis
        axis: Axis,
        /// Number of components of the vector
        dim: usize,
    },

    /// A scatter swizzle named the same destination axis twice.
    #[error("axis {axis} appears more than once in a scatter swizzle")]
    DuplicateAxis {
        /// Repeated axis
        axis: Axis,
    },

    /// Matrix inversion was requested for a matrix with zero or non-finite determinant.
    #[error("matrix is singular (determinant {determinant})")]
    SingularMatrix {
        /// Determinant that was computed
        determinant: f64,
    },

    /// A viewport with a non-positive width or height.
    #[error("viewport has no area ({width}x{height})")]
    EmptyViewport {
        /// Width in pixels
        width: i32,
        /// Height in pixels
        height: i32,
    },

    /// A mesh batch ended with a vertex count that cannot form whole primitives.
    #[error("{mode} batch of {vertices} vertices does not form whole primitives")]
    IncompletePrimitive {
        /// Primitive mode name
        mode: &'static str,
        /// Vertices in the batch
        vertices: usize,
    },

    /// Generic error with custom message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates an [`Error::AxisOutOfRange`] error.
    #[inline]
    pub fn axis_out_of_range(axis: Axis, dim: usize) -> Self {
        Self::AxisOutOfRange { axis, dim }
    }

    /// Creates an [`Error::DuplicateAxis`] error.
    #[inline]
    pub fn duplicate_axis(axis: Axis) -> Self {
        Self::DuplicateAxis { axis }
    }

    /// Creates an [`Error::SingularMatrix`] error.
    #[inline]
    pub fn singular(determinant: f64) -> Self {
        Self::SingularMatrix { determinant }
    }

    /// Creates an [`Error::Other`] error.
    #[inline]
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Returns `true` if this is a swizzle-related error.
    #[inline]
    pub fn is_swizzle_error(&self) -> bool {
        matches!(self, Self::AxisOutOfRange { .. } | Self::DuplicateAxis { .. })
    }
}
