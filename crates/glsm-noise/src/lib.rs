//! # glsm-noise
//!
//! Deterministic gradient noise for procedural content.
//!
//! - [`Perlin`] - generator owning a seeded 768-entry permutation table
//! - [`noise1d`], [`noise2d`], [`noise3d`] - samples from the shared table
//! - [`Fbm`] - octave sums ([`fbm2`], [`fbm3`])
//!
//! The field is periodic with period [`PERIOD`] along every axis, is zero
//! on integer lattice points and stays roughly within `[-1, 1]`. All math is
//! done in `f32`.
//!
//! # Usage
//!
//! ```rust
//! use glsm_noise::{Fbm, Perlin, noise2d};
//!
//! let h = noise2d(3.25, -1.5);
//! assert_eq!(h, noise2d(3.25 + 256.0, -1.5));
//!
//! let terrain = Perlin::new(42);
//! let v = terrain.fbm2(0.1, 0.2, &Fbm::new(5));
//! assert!(v.abs() <= Fbm::new(5).amplitude_sum());
//! ```
//!
//! # Thread safety
//!
//! The shared table is built on first use behind a `OnceLock` and is
//! read-only afterwards; sampling is safe from any number of threads.

#![warn(missing_docs)]

mod fractal;
mod perlin;

pub use fractal::{Fbm, fbm2, fbm3};
pub use perlin::{DEFAULT_SEED, Lcg, PERIOD, Perlin, TABLE_LEN, noise1d, noise2d, noise3d};
