//! Procedural grids over `[-1, 1]^2`.
//!
//! A grid of resolution `res` has `res * res` cells and `(res + 1)^2`
//! vertices laid out row by row, `x` fastest. Vertex rows are sampled in
//! parallel.

use glsm_math::Vec3f;
use glsm_noise::{Fbm, Perlin};
use rayon::prelude::*;

use crate::vertex::PtncVertex;

/// Triangle indices for a `res x res` grid, six per cell.
///
/// Each cell `(x, y)` with lower-left vertex `vi` becomes
/// `vi, vi+1, vi+res+1` and `vi+1, vi+res+2, vi+res+1`.
pub fn grid_indices(res: u32) -> Vec<u32> {
    let mut out = Vec::with_capacity(res as usize * res as usize * 6);
    let row = res + 1;
    for y in 0..res {
        for x in 0..res {
            let vi = y * row + x;
            out.extend([vi, vi + 1, vi + row, vi + 1, vi + row + 1, vi + row]);
        }
    }
    out
}

/// Animated wave grid.
///
/// Vertex `(u, v)` sits at `(2u-1, 2v-1, sin(8u + sin(8v + time)) * 0.3)`,
/// with texcoord `(u, v, 0, 1)`, normal `+z` and white color.
/// A resolution of zero yields no vertices.
pub fn grid_vertices(res: u32, time: f32) -> Vec<PtncVertex> {
    let out = sample_grid(res, |u, v| PtncVertex {
        position: [
            u * 2.0 - 1.0,
            v * 2.0 - 1.0,
            (u * 8.0 + (v * 8.0 + time).sin()).sin() * 0.3,
            1.0,
        ],
        texcoord: [u, v, 0.0, 1.0],
        normal: [0.0, 0.0, 1.0],
        color: [1.0; 4],
    });
    tracing::debug!(res, vertices = out.len(), time, "generated wave grid");
    out
}

/// Height field parameters for [`terrain_vertices`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainParams {
    /// Noise frequency across the unit square
    pub scale: f32,
    /// Height multiplier
    pub height: f32,
    /// Octave settings
    pub fbm: Fbm,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            scale: 4.0,
            height: 0.3,
            fbm: Fbm::default(),
        }
    }
}

impl TerrainParams {
    /// Height at grid parameter `(u, v)`.
    pub fn height_at(&self, noise: &Perlin, u: f32, v: f32) -> f32 {
        self.fbm.sample2(noise, u * self.scale, v * self.scale) * self.height
    }
}

/// Noise terrain grid.
///
/// Heights come from fractal noise; normals from central differences of
/// the height field, one grid step on each side.
pub fn terrain_vertices(res: u32, noise: &Perlin, params: &TerrainParams) -> Vec<PtncVertex> {
    let step = if res > 0 { 1.0 / res as f32 } else { 0.0 };
    // uv spans 1, world spans 2
    let span = 4.0 * step;

    let out = sample_grid(res, |u, v| {
        let h = |u, v| params.height_at(noise, u, v);
        let dx = (h(u + step, v) - h(u - step, v)) / span;
        let dy = (h(u, v + step) - h(u, v - step)) / span;
        let n = Vec3f::new(-dx, -dy, 1.0).normalize();

        PtncVertex {
            position: [u * 2.0 - 1.0, v * 2.0 - 1.0, h(u, v), 1.0],
            texcoord: [u, v, 0.0, 1.0],
            normal: n.to_array(),
            color: [1.0; 4],
        }
    });
    tracing::debug!(
        res,
        vertices = out.len(),
        octaves = params.fbm.octaves,
        seed = noise.seed(),
        "generated terrain grid"
    );
    out
}

/// Evaluates `f(u, v)` on every grid vertex, rows in parallel.
fn sample_grid<F>(res: u32, f: F) -> Vec<PtncVertex>
where
    F: Fn(f32, f32) -> PtncVertex + Sync,
{
    if res == 0 {
        return Vec::new();
    }
    let row = res as usize + 1;
    let inv = 1.0 / res as f32;

    let mut out = vec![PtncVertex::default(); row * row];
    out.par_chunks_mut(row).enumerate().for_each(|(y, line)| {
        let v = y as f32 * inv;
        for (x, vert) in line.iter_mut().enumerate() {
            *vert = f(x as f32 * inv, v);
        }
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_indices_layout() {
        assert_eq!(grid_indices(1), [0, 1, 2, 1, 3, 2]);
        let idx = grid_indices(2);
        assert_eq!(idx.len(), 24);
        // Second row, first cell
        assert_eq!(idx[12..18], [3, 4, 6, 4, 7, 6]);
        assert_eq!(*idx.iter().max().unwrap(), 8);
        assert!(grid_indices(0).is_empty());
    }

    #[test]
    fn test_wave_grid() {
        let res = 4;
        let verts = grid_vertices(res, 0.0);
        assert_eq!(verts.len(), 25);

        let first = verts[0];
        assert_eq!(first.position[..2], [-1.0, -1.0]);
        assert_eq!(first.position[2], 0.0);
        assert_eq!(first.texcoord, [0.0, 0.0, 0.0, 1.0]);

        let last = verts[24];
        assert_eq!(last.position[..2], [1.0, 1.0]);
        assert_relative_eq!(last.position[2], (8.0f32 + 8.0f32.sin()).sin() * 0.3);

        // x advances fastest
        assert_eq!(verts[1].texcoord[..2], [0.25, 0.0]);
        assert_eq!(verts[5].texcoord[..2], [0.0, 0.25]);
        assert!(grid_vertices(0, 1.0).is_empty());
    }

    #[test]
    fn test_wave_time() {
        let a = grid_vertices(3, 0.0);
        let b = grid_vertices(3, 1.5);
        assert_ne!(a[5].position[2], b[5].position[2]);
        assert_eq!(a[5].position[..2], b[5].position[..2]);
    }

    #[test]
    fn test_flat_terrain() {
        let params = TerrainParams {
            height: 0.0,
            ..Default::default()
        };
        for v in terrain_vertices(3, Perlin::global(), &params) {
            assert_eq!(v.position[2], 0.0);
            assert_eq!(v.normal, [0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn test_terrain_normals() {
        let noise = Perlin::new(3);
        let params = TerrainParams::default();
        let verts = terrain_vertices(16, &noise, &params);
        assert_eq!(verts.len(), 17 * 17);
        for v in &verts {
            let n = Vec3f::from_array(v.normal);
            assert_relative_eq!(n.length(), 1.0, epsilon = 1e-5);
            assert!(n.z() > 0.0);
        }
        let mid = verts[8 * 17 + 8];
        assert_eq!(mid.position[2], params.height_at(&noise, 0.5, 0.5));
    }
}
