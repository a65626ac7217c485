use glshapes_common::MeshError;
use serde::{Deserialize, Serialize};

use crate::mesh::Mesh;
use crate::vertex::Vertex;

/// Two triangles over the corners bottom-left, top-left, top-right,
/// bottom-right.
pub const SQUARE_INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

/// An axis-aligned square.
///
/// When `centered`, `(x, y)` is the middle of the square; otherwise it is
/// the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquareShape {
    pub side_length: f32,
    /// Emit per-corner texture coordinates alongside positions.
    pub textured: bool,
    pub centered: bool,
    pub x: f32,
    pub y: f32,
}

impl Default for SquareShape {
    fn default() -> Self {
        Self {
            side_length: 1.0,
            textured: false,
            centered: true,
            x: 0.0,
            y: 0.0,
        }
    }
}

impl SquareShape {
    pub fn new(side_length: f32) -> Self {
        Self {
            side_length,
            ..Self::default()
        }
    }

    pub fn build(&self) -> Result<Mesh, MeshError> {
        let side = self.side_length;
        if !(side.is_finite() && side > 0.0) {
            return Err(MeshError::InvalidSideLength(side));
        }

        let (left, bottom) = if self.centered {
            (self.x - side / 2.0, self.y - side / 2.0)
        } else {
            (self.x, self.y)
        };
        let (right, top) = (left + side, bottom + side);

        let positions = vec![
            Vertex::new(left, bottom),
            Vertex::new(left, top),
            Vertex::new(right, top),
            Vertex::new(right, bottom),
        ];
        let mesh = Mesh::new(positions, SQUARE_INDICES.to_vec());

        if !self.textured {
            return Ok(mesh);
        }

        // Texture space spans the side length, so sampling repeats past 1.0.
        let tex_coords = vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(0.0, side),
            Vertex::new(side, side),
            Vertex::new(side, 0.0),
        ];
        Ok(mesh.with_tex_coords(tex_coords))
    }
}
