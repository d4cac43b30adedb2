//! # glsm-core
//!
//! Core types for GLSL-style vector and matrix math.
//!
//! This crate provides the foundation shared by the rest of the workspace:
//!
//! - [`Scalar`] / [`Real`] - element types for vectors and matrices
//! - [`Axis`] - component selectors for swizzled access
//! - [`Error`] / [`Result`] - error type for the strict (opt-in) entry points
//!
//! ## Crate Structure
//!
//! ```text
//! glsm-core (this crate)
//!    ^
//!    |
//!    +-- glsm-math (vectors, matrices, camera)
//!    +-- glsm-noise (gradient noise)
//!    +-- glsm-mesh (vertex construction)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod axis;
pub mod error;
pub mod scalar;

pub use axis::Axis;
pub use error::{Error, Result};
pub use scalar::{Real, Scalar};

/// Prelude module for convenient imports.
///
/// ```
/// use glsm_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::axis::Axis;
    pub use crate::error::{Error, Result};
    pub use crate::scalar::{Real, Scalar};
}
