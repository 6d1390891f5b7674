//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    /// Bytes per vertex in an interleaved buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
    /// Byte offset of `color` (attribute 1; `position` is attribute 0)
    pub const COLOR_OFFSET: usize = std::mem::size_of::<[f32; 2]>();

    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_tightly_packed() {
        assert_eq!(Vertex::STRIDE, 24);
        assert_eq!(Vertex::COLOR_OFFSET, 8);
        let vertices = [Vertex::new(1.0, 2.0, [0.1, 0.2, 0.3, 0.4]); 3];
        assert_eq!(bytemuck::cast_slice::<Vertex, u8>(&vertices).len(), 72);
    }
}
