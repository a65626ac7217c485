//! Indexed triangle mesh produced by the shape builders.

use std::borrow::Cow;

use serde::Serialize;

use crate::layout::VertexBufferLayout;
use crate::vertex::Vertex;

/// An immutable indexed triangle list.
///
/// `indices` are grouped in triples, one per triangle. Every index refers
/// to an entry of `positions`. When `tex_coords` is present it holds one
/// entry per position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mesh {
    positions: Vec<Vertex>,
    indices: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tex_coords: Option<Vec<Vertex>>,
}

impl Mesh {
    pub(crate) fn new(positions: Vec<Vertex>, indices: Vec<u32>) -> Self {
        debug_assert_eq!(indices.len() % 3, 0);
        debug_assert!(indices.iter().all(|&i| (i as usize) < positions.len()));
        Self {
            positions,
            indices,
            tex_coords: None,
        }
    }

    pub(crate) fn with_tex_coords(mut self, tex_coords: Vec<Vertex>) -> Self {
        debug_assert_eq!(tex_coords.len(), self.positions.len());
        self.tex_coords = Some(tex_coords);
        self
    }

    pub fn positions(&self) -> &[Vertex] {
        &self.positions
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn tex_coords(&self) -> Option<&[Vertex]> {
        self.tex_coords.as_deref()
    }

    pub fn triangle_count(&self) -> u32 {
        (self.indices.len() / 3) as u32
    }

    pub fn vertex_count(&self) -> u32 {
        self.positions.len() as u32
    }

    /// Number of indices one draw of the whole mesh consumes.
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Triangles as index triples, in generation order.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Raw position bytes (two `f32` per vertex).
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Vertex buffer contents matching [`Mesh::layout`].
    ///
    /// Positions only, or position followed by tex coord per vertex.
    pub fn vertex_data(&self) -> Cow<'_, [u8]> {
        match &self.tex_coords {
            None => Cow::Borrowed(self.position_bytes()),
            Some(tex_coords) => {
                let interleaved: Vec<Vertex> = self
                    .positions
                    .iter()
                    .zip(tex_coords)
                    .flat_map(|(p, t)| [*p, *t])
                    .collect();
                Cow::Owned(bytemuck::cast_slice::<Vertex, u8>(&interleaved).to_vec())
            }
        }
    }

    pub fn layout(&self) -> VertexBufferLayout {
        let mut layout = VertexBufferLayout::new();
        layout.push_f32(2);
        if self.tex_coords.is_some() {
            layout.push_f32(2);
        }
        layout
    }
}
