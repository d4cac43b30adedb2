//! Finished vertex/index buffers and Wavefront OBJ export.

use std::io::{self, Write};

use crate::vertex::{AttributeKind, PtncVertex, VertexFormat};

/// Primitive type of an index buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// Index pairs
    Lines,
    /// Index triples
    Triangles,
}

impl Primitive {
    /// Indices per primitive.
    #[inline]
    pub const fn arity(self) -> usize {
        match self {
            Self::Lines => 2,
            Self::Triangles => 3,
        }
    }
}

/// Interleaved vertices plus indices, ready for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    /// Layout of `vertices`
    pub format: VertexFormat,
    /// Interleaved `f32` attributes
    pub vertices: Vec<f32>,
    /// Vertex indices
    pub indices: Vec<u32>,
    /// How `indices` are grouped
    pub primitive: Primitive,
}

impl MeshData {
    /// Wraps PTNC vertices and triangle indices.
    pub fn from_ptnc(vertices: &[PtncVertex], indices: Vec<u32>) -> Self {
        Self {
            format: VertexFormat::Ptnc,
            vertices: bytemuck::cast_slice(vertices).to_vec(),
            indices,
            primitive: Primitive::Triangles,
        }
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / self.format.floats()
    }

    /// Number of whole primitives.
    #[inline]
    pub fn primitive_count(&self) -> usize {
        self.indices.len() / self.primitive.arity()
    }

    /// Vertex buffer as raw bytes.
    #[inline]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer as raw bytes.
    #[inline]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Components of attribute `kind` of vertex `i`, if the format has it.
    pub fn attribute(&self, i: usize, kind: AttributeKind) -> Option<&[f32]> {
        let a = self.format.attribute(kind)?;
        let start = i * self.format.floats() + a.offset / 4;
        self.vertices.get(start..start + a.components)
    }

    /// Writes the mesh as Wavefront OBJ.
    ///
    /// Positions are divided by `w` when the format carries one. Faces
    /// reference texcoords and normals when present.
    pub fn write_obj<W: Write>(&self, mut out: W) -> io::Result<()> {
        let n = self.vertex_count();
        let has_uv = self.format.has_texcoord();
        let has_n = self.format.has_normal();

        writeln!(out, "# {} vertices, {} primitives", n, self.primitive_count())?;
        for i in 0..n {
            if let Some(p) = self.attribute(i, AttributeKind::Position) {
                let w = p.get(3).copied().filter(|w| *w != 0.0).unwrap_or(1.0);
                writeln!(out, "v {} {} {}", p[0] / w, p[1] / w, p[2] / w)?;
            }
        }
        if has_uv {
            for i in 0..n {
                if let Some(t) = self.attribute(i, AttributeKind::TexCoord) {
                    writeln!(out, "vt {} {}", t[0], t[1])?;
                }
            }
        }
        if has_n {
            for i in 0..n {
                if let Some(v) = self.attribute(i, AttributeKind::Normal) {
                    writeln!(out, "vn {} {} {}", v[0], v[1], v[2])?;
                }
            }
        }

        let tag = match self.primitive {
            Primitive::Lines => "l",
            Primitive::Triangles => "f",
        };
        for prim in self.indices.chunks_exact(self.primitive.arity()) {
            write!(out, "{tag}")?;
            for &ix in prim {
                let k = ix + 1;
                match (self.primitive, has_uv, has_n) {
                    (Primitive::Triangles, true, true) => write!(out, " {k}/{k}/{k}")?,
                    (Primitive::Triangles, false, true) => write!(out, " {k}//{k}")?,
                    (_, true, _) => write!(out, " {k}/{k}")?,
                    _ => write!(out, " {k}")?,
                }
            }
            writeln!(out)?;
        }
        Ok(())
    }
}
