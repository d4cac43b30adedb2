//! # glsm-mesh
//!
//! CPU-side geometry for the glsm math kernel.
//!
//! - [`MeshBuilder`] - immediate-style `begin`/`vertex`/`end` assembly into
//!   interleaved buffers for any [`VertexFormat`]
//! - [`grid_indices`], [`grid_vertices`], [`terrain_vertices`] - procedural
//!   grids, the terrain sampled from `glsm-noise`
//! - [`checker_rgba8`] - checkerboard texture
//! - [`MeshData::write_obj`] - Wavefront OBJ export
//!
//! Nothing here touches a graphics API: buffers are plain `Vec<f32>` /
//! `Vec<u32>` and [`PtncVertex`] is `bytemuck::Pod` for zero-copy upload.
//!
//! # Usage
//!
//! ```rust
//! use glsm_mesh::{MeshData, grid_indices, grid_vertices};
//!
//! let res = 8;
//! let mesh = MeshData::from_ptnc(&grid_vertices(res, 0.0), grid_indices(res));
//! assert_eq!(mesh.vertex_count(), 81);
//! assert_eq!(mesh.primitive_count(), 128);
//! ```

#![warn(missing_docs)]

mod builder;
mod grid;
mod mesh;
mod texture;
mod vertex;

pub use builder::{MeshBuilder, Mode};
pub use grid::{TerrainParams, grid_indices, grid_vertices, terrain_vertices};
pub use mesh::{MeshData, Primitive};
pub use texture::{CHECKER_PALETTE, checker_rgba8};
pub use vertex::{Attribute, AttributeKind, PtncVertex, VertexFormat};
