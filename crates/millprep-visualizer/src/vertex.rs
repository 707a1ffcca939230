//! GPU vertex layout.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Primitive a vertex belongs to, stored as `u32` in [`VertexData::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum VertexKind {
    Line = 0,
    Triangle = 1,
    Point = 2,
}

impl VertexKind {
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Self::Line),
            1 => Some(Self::Triangle),
            2 => Some(Self::Point),
            _ => None,
        }
    }
}

/// One interleaved vertex: position, colour, shader data, kind.
///
/// `#[repr(C)]` and `Pod` so a `&[VertexData]` can be handed to the GPU with
/// `bytemuck::cast_slice`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct VertexData {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub data: [f32; 3],
    pub kind: u32,
}

impl VertexData {
    pub fn new(position: Vec3, color: Vec3, data: Vec3, kind: VertexKind) -> Self {
        Self {
            position: position.to_array(),
            color: color.to_array(),
            data: data.to_array(),
            kind: kind as u32,
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn color(&self) -> Vec3 {
        Vec3::from_array(self.color)
    }

    pub fn kind(&self) -> Option<VertexKind> {
        VertexKind::from_raw(self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_has_no_padding() {
        assert_eq!(std::mem::size_of::<VertexData>(), 40);
    }

    #[test]
    fn test_cast_to_bytes() {
        let verts = [VertexData::new(Vec3::X, Vec3::ONE, Vec3::ZERO, VertexKind::Triangle); 2];
        let bytes: &[u8] = bytemuck::cast_slice(&verts);
        assert_eq!(bytes.len(), 80);
        let back: &[VertexData] = bytemuck::cast_slice(bytes);
        assert_eq!(back[1].kind(), Some(VertexKind::Triangle));
        assert_eq!(back[1].position(), Vec3::X);
    }

    #[test]
    fn test_kind_from_raw() {
        assert_eq!(VertexKind::from_raw(0), Some(VertexKind::Line));
        assert_eq!(VertexKind::from_raw(7), None);
    }
}
