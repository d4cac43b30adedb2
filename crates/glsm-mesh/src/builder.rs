//! Immediate-style mesh assembly.
//!
//! [`MeshBuilder`] records vertices one at a time between `begin`/`end`
//! pairs, carrying the current texcoord, normal and color like fixed-function
//! GL did. `end` turns the batch into indices for the requested [`Mode`].

use glsm_core::{Error, Result};
use glsm_math::{Vec3, Vec4};

use crate::mesh::{MeshData, Primitive};
use crate::vertex::VertexFormat;

/// How a batch of vertices is assembled into primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Independent segments, two vertices each
    Lines,
    /// Connected segments
    LineStrip,
    /// Connected segments closed back to the first vertex
    LineLoop,
    /// Independent triangles, three vertices each
    #[default]
    Triangles,
    /// Triangles sharing the first vertex
    TriangleFan,
    /// Quads, four vertices each, split into two triangles
    Quads,
}

impl Mode {
    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lines => "lines",
            Self::LineStrip => "line strip",
            Self::LineLoop => "line loop",
            Self::Triangles => "triangles",
            Self::TriangleFan => "triangle fan",
            Self::Quads => "quads",
        }
    }

    /// Primitive the generated indices describe.
    #[inline]
    pub const fn primitive(self) -> Primitive {
        match self {
            Self::Lines | Self::LineStrip | Self::LineLoop => Primitive::Lines,
            _ => Primitive::Triangles,
        }
    }

    /// Returns true if `count` vertices form whole primitives.
    fn accepts(self, count: usize) -> bool {
        match self {
            Self::Lines => count % 2 == 0,
            Self::LineStrip | Self::LineLoop => count != 1,
            Self::Triangles => count % 3 == 0,
            Self::TriangleFan => count == 0 || count >= 3,
            Self::Quads => count % 4 == 0,
        }
    }
}

/// Accumulates interleaved vertices and indices.
///
/// # Example
///
/// ```rust
/// use glsm_mesh::{MeshBuilder, Mode, VertexFormat};
/// use glsm_math::Vec3;
///
/// let mut b = MeshBuilder::new(VertexFormat::XyzUv);
/// b.begin(Mode::Quads);
/// for (x, y) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
///     b.texcoord(glsm_math::Vec2::new(x, y));
///     b.vertex(Vec3::new(x, y, 0.0));
/// }
/// b.end().unwrap();
///
/// let mesh = b.build();
/// assert_eq!(mesh.indices, [0, 1, 3, 1, 2, 3]);
/// assert_eq!(mesh.vertex_count(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct MeshBuilder {
    format: VertexFormat,
    mode: Mode,
    normal: Vec3,
    texcoord: Vec4,
    color: Vec4,
    begin_offset: usize,
    vertices: Vec<f32>,
    indices: Vec<u32>,
}

impl MeshBuilder {
    /// Creates an empty builder for `format`.
    pub fn new(format: VertexFormat) -> Self {
        Self {
            format,
            mode: Mode::Triangles,
            normal: Vec3::Z,
            texcoord: Vec4::ZERO,
            color: Vec4::ONE,
            begin_offset: 0,
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Drops all data and resets the current attributes.
    pub fn clear(&mut self) {
        *self = Self::new(self.format);
    }

    /// Vertex layout being written.
    #[inline]
    pub fn format(&self) -> VertexFormat {
        self.format
    }

    /// Vertices written so far, including an open batch.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / self.format.floats()
    }

    /// Starts a batch.
    pub fn begin(&mut self, mode: Mode) {
        self.mode = mode;
        self.begin_offset = self.vertices.len();
    }

    /// Closes the current batch and emits its indices.
    ///
    /// A batch whose vertex count does not form whole primitives is
    /// discarded and reported as [`Error::IncompletePrimitive`].
    pub fn end(&mut self) -> Result<()> {
        let floats = self.format.floats();
        let first = self.begin_offset / floats;
        let last = self.vertices.len() / floats;
        let count = last - first;

        if !self.mode.accepts(count) {
            self.vertices.truncate(self.begin_offset);
            return Err(Error::IncompletePrimitive {
                mode: self.mode.name(),
                vertices: count,
            });
        }

        let (first, last) = (first as u32, last as u32);
        let out = &mut self.indices;
        match self.mode {
            Mode::LineStrip => {
                for it in first + 1..last {
                    out.extend([it - 1, it]);
                }
            }
            Mode::LineLoop => {
                if first + 1 < last {
                    for it in first + 1..last {
                        out.extend([it - 1, it]);
                    }
                    out.extend([last - 1, first]);
                }
            }
            Mode::Lines | Mode::Triangles => out.extend(first..last),
            Mode::TriangleFan => {
                for it in first + 2..last {
                    out.extend([first, it - 1, it]);
                }
            }
            Mode::Quads => {
                // 0 1
                // 3 2
                for it in (first..last).step_by(4) {
                    out.extend([it, it + 1, it + 3, it + 1, it + 2, it + 3]);
                }
            }
        }
        self.begin_offset = self.vertices.len();
        Ok(())
    }

    /// Sets the current normal.
    #[inline]
    pub fn normal(&mut self, n: Vec3) {
        self.normal = n;
    }

    /// Sets the current texcoord. 2D coordinates are widened to `(u, v, 0, 1)`.
    #[inline]
    pub fn texcoord(&mut self, t: impl Into<Vec4>) {
        self.texcoord = t.into();
    }

    /// Sets the current color. RGB is widened with alpha 1.
    #[inline]
    pub fn color(&mut self, c: impl Into<Vec4>) {
        self.color = c.into();
    }

    /// Emits a vertex with the current attributes.
    ///
    /// 2D and 3D positions are widened to `w = 1` (and `z = 0`).
    pub fn vertex(&mut self, v: impl Into<Vec4>) {
        let (t, n, c) = (self.texcoord, self.normal, self.color);
        self.vertex_with(v, t, n, c);
    }

    /// Emits a vertex with explicit attributes, leaving the current ones as is.
    pub fn vertex_with(
        &mut self,
        v: impl Into<Vec4>,
        t: impl Into<Vec4>,
        n: Vec3,
        c: impl Into<Vec4>,
    ) {
        let (v, t, c) = (v.into(), t.into(), c.into());
        let wide = self.format == VertexFormat::Ptnc;
        let out = &mut self.vertices;

        out.extend([v.x(), v.y(), v.z()].map(|e| e as f32));
        if wide {
            out.push(v.w() as f32);
        }
        if self.format.has_texcoord() {
            out.extend([t.x(), t.y()].map(|e| e as f32));
            if wide {
                out.extend([t.z(), t.w()].map(|e| e as f32));
            }
        }
        if self.format.has_normal() {
            out.extend(n.to_array().map(|e| e as f32));
        }
        if self.format.has_color() {
            out.extend(c.to_array().map(|e| e as f32));
        }
    }

    /// Snapshot of everything written so far.
    ///
    /// The primitive follows the mode of the last batch.
    pub fn build(&self) -> MeshData {
        let mesh = MeshData {
            format: self.format,
            vertices: self.vertices.clone(),
            indices: self.indices.clone(),
            primitive: self.mode.primitive(),
        };
        tracing::debug!(
            format = ?self.format,
            vertices = mesh.vertex_count(),
            indices = mesh.indices.len(),
            "built mesh"
        );
        mesh
    }
}
