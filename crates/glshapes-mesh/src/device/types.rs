//! The narrow GPU interface meshes are uploaded through.

use glshapes_common::DeviceError;

use crate::layout::VertexBufferLayout;
use crate::mesh::Mesh;

/// Opaque id of a buffer created by a [`GpuDevice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferHandle(pub u32);

/// What a graphics backend must provide to draw a mesh: accept vertex
/// bytes with their layout, accept indices, and draw indexed triangles.
pub trait GpuDevice {
    fn create_vertex_buffer(
        &mut self,
        data: &[u8],
        layout: &VertexBufferLayout,
    ) -> Result<BufferHandle, DeviceError>;

    fn create_index_buffer(&mut self, indices: &[u32]) -> Result<BufferHandle, DeviceError>;

    /// Draw `index_count` indices as a triangle list.
    fn draw_indexed(
        &mut self,
        vertices: BufferHandle,
        indices: BufferHandle,
        index_count: u32,
    ) -> Result<(), DeviceError>;
}

/// A mesh whose buffers live on a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpuMesh {
    pub vertex_buffer: BufferHandle,
    pub index_buffer: BufferHandle,
    pub index_count: u32,
}

impl GpuMesh {
    /// One indexed draw covering every triangle.
    pub fn draw(&self, device: &mut dyn GpuDevice) -> Result<(), DeviceError> {
        device.draw_indexed(self.vertex_buffer, self.index_buffer, self.index_count)
    }
}

/// Upload a mesh's vertex data and indices.
pub fn upload_mesh(device: &mut dyn GpuDevice, mesh: &Mesh) -> Result<GpuMesh, DeviceError> {
    let vertex_buffer = device.create_vertex_buffer(&mesh.vertex_data(), &mesh.layout())?;
    let index_buffer = device.create_index_buffer(mesh.indices())?;
    tracing::debug!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "uploaded mesh"
    );
    Ok(GpuMesh {
        vertex_buffer,
        index_buffer,
        index_count: 3 * mesh.triangle_count(),
    })
}
