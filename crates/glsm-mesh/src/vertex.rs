//! Interleaved vertex layouts.
//!
//! Every layout is a run of `f32` attributes in the fixed order
//! position, texcoord, normal, color. Shorter formats drop attributes from
//! the tail; [`VertexFormat::Ptnc`] widens position and texcoord to four
//! components.
//!
//! | Format    | Position | Texcoord | Normal | Color | Stride |
//! |-----------|----------|----------|--------|-------|--------|
//! | `Xyz`     | 3        | -        | -      | -     | 12     |
//! | `XyzUv`   | 3        | 2        | -      | -     | 20     |
//! | `XyzUvN`  | 3        | 2        | 3      | -     | 32     |
//! | `XyzUvNC` | 3        | 2        | 3      | 4     | 48     |
//! | `Ptnc`    | 4        | 4        | 3      | 4     | 60     |

use bytemuck::{Pod, Zeroable};

/// Vertex attribute slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// Vertex position
    Position,
    /// Texture coordinate
    TexCoord,
    /// Surface normal
    Normal,
    /// RGBA color
    Color,
}

impl AttributeKind {
    /// Conventional shader binding location.
    #[inline]
    pub const fn location(self) -> u32 {
        match self {
            Self::Position => 0,
            Self::TexCoord => 1,
            Self::Normal => 2,
            Self::Color => 3,
        }
    }
}

/// One attribute inside an interleaved vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute {
    /// Slot
    pub kind: AttributeKind,
    /// Number of `f32` components
    pub components: usize,
    /// Byte offset from the start of the vertex
    pub offset: usize,
}

/// Interleaved vertex layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VertexFormat {
    /// Position only
    Xyz,
    /// Position, 2D texcoord
    XyzUv,
    /// Position, 2D texcoord, normal
    XyzUvN,
    /// Position, 2D texcoord, normal, color
    XyzUvNC,
    /// 4D position, 4D texcoord, normal, color
    Ptnc,
}

impl VertexFormat {
    /// Bytes per vertex.
    #[inline]
    pub const fn stride(self) -> usize {
        self.floats() * 4
    }

    /// `f32` values per vertex.
    #[inline]
    pub const fn floats(self) -> usize {
        match self {
            Self::Xyz => 3,
            Self::XyzUv => 5,
            Self::XyzUvN => 8,
            Self::XyzUvNC => 12,
            Self::Ptnc => 15,
        }
    }

    /// Returns true if vertices carry a texcoord.
    #[inline]
    pub fn has_texcoord(self) -> bool {
        self >= Self::XyzUv
    }

    /// Returns true if vertices carry a normal.
    #[inline]
    pub fn has_normal(self) -> bool {
        self >= Self::XyzUvN
    }

    /// Returns true if vertices carry a color.
    #[inline]
    pub fn has_color(self) -> bool {
        self >= Self::XyzUvNC
    }

    /// Attribute list in memory order.
    pub fn attributes(self) -> Vec<Attribute> {
        let wide = self == Self::Ptnc;
        let mut out = Vec::with_capacity(4);
        let mut offset = 0;
        let mut push = |kind, components: usize| {
            out.push(Attribute {
                kind,
                components,
                offset,
            });
            offset += components * 4;
        };

        push(AttributeKind::Position, if wide { 4 } else { 3 });
        if self.has_texcoord() {
            push(AttributeKind::TexCoord, if wide { 4 } else { 2 });
        }
        if self.has_normal() {
            push(AttributeKind::Normal, 3);
        }
        if self.has_color() {
            push(AttributeKind::Color, 4);
        }
        out
    }

    /// Finds one attribute of this layout.
    pub fn attribute(self, kind: AttributeKind) -> Option<Attribute> {
        self.attributes().into_iter().find(|a| a.kind == kind)
    }
}

/// Vertex in the [`VertexFormat::Ptnc`] layout.
///
/// Plain old data: a slice of these can be handed to a GPU upload with
/// `bytemuck::cast_slice` without copying.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PtncVertex {
    /// Homogeneous position
    pub position: [f32; 4],
    /// Texture coordinate
    pub texcoord: [f32; 4],
    /// Surface normal
    pub normal: [f32; 3],
    /// RGBA color
    pub color: [f32; 4],
}

impl Default for PtncVertex {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0, 1.0],
            texcoord: [0.0; 4],
            normal: [0.0, 0.0, 1.0],
            color: [1.0; 4],
        }
    }
}
