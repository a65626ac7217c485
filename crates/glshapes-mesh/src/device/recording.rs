//! In-memory device that validates and records instead of drawing.

use glshapes_common::DeviceError;

use super::types::{BufferHandle, GpuDevice};
use crate::layout::VertexBufferLayout;

/// One recorded `draw_indexed` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    pub vertices: BufferHandle,
    pub indices: BufferHandle,
    pub index_count: u32,
}

#[derive(Debug, Clone)]
enum Buffer {
    Vertex { data: Vec<u8>, layout: VertexBufferLayout },
    Index(Vec<u32>),
}

/// A headless [`GpuDevice`].
///
/// Buffers are copied into memory on creation; draws are checked against
/// them the way a real driver would and then appended to a log.
#[derive(Debug, Default)]
pub struct RecordingDevice {
    buffers: Vec<Buffer>,
    draw_calls: Vec<DrawCall>,
}

impl RecordingDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw_calls(&self) -> &[DrawCall] {
        &self.draw_calls
    }

    pub fn buffer_count(&self) -> usize {
        self.buffers.len()
    }

    /// Number of whole vertices in a vertex buffer.
    pub fn vertex_count(&self, handle: BufferHandle) -> Result<u32, DeviceError> {
        match self.buffer(handle)? {
            Buffer::Vertex { data, layout } => Ok((data.len() / layout.stride() as usize) as u32),
            Buffer::Index(_) => Err(DeviceError::WrongBufferKind(handle.0)),
        }
    }

    pub fn vertex_bytes(&self, handle: BufferHandle) -> Result<&[u8], DeviceError> {
        match self.buffer(handle)? {
            Buffer::Vertex { data, .. } => Ok(data),
            Buffer::Index(_) => Err(DeviceError::WrongBufferKind(handle.0)),
        }
    }

    pub fn indices(&self, handle: BufferHandle) -> Result<&[u32], DeviceError> {
        match self.buffer(handle)? {
            Buffer::Index(indices) => Ok(indices),
            Buffer::Vertex { .. } => Err(DeviceError::WrongBufferKind(handle.0)),
        }
    }

    fn buffer(&self, handle: BufferHandle) -> Result<&Buffer, DeviceError> {
        self.buffers
            .get(handle.0 as usize)
            .ok_or(DeviceError::UnknownBuffer(handle.0))
    }

    fn insert(&mut self, buffer: Buffer) -> BufferHandle {
        self.buffers.push(buffer);
        BufferHandle((self.buffers.len() - 1) as u32)
    }
}

impl GpuDevice for RecordingDevice {
    fn create_vertex_buffer(
        &mut self,
        data: &[u8],
        layout: &VertexBufferLayout,
    ) -> Result<BufferHandle, DeviceError> {
        if data.is_empty() {
            return Err(DeviceError::EmptyVertexData);
        }
        let stride = layout.stride();
        if stride == 0 {
            return Err(DeviceError::InvalidStride);
        }
        if data.len() % stride as usize != 0 {
            return Err(DeviceError::MisalignedVertexData {
                len: data.len(),
                stride,
            });
        }

        let handle = self.insert(Buffer::Vertex {
            data: data.to_vec(),
            layout: layout.clone(),
        });
        tracing::trace!(handle = handle.0, bytes = data.len(), "vertex buffer created");
        Ok(handle)
    }

    fn create_index_buffer(&mut self, indices: &[u32]) -> Result<BufferHandle, DeviceError> {
        let handle = self.insert(Buffer::Index(indices.to_vec()));
        tracing::trace!(handle = handle.0, count = indices.len(), "index buffer created");
        Ok(handle)
    }

    fn draw_indexed(
        &mut self,
        vertices: BufferHandle,
        indices: BufferHandle,
        index_count: u32,
    ) -> Result<(), DeviceError> {
        let vertex_count = self.vertex_count(vertices)?;
        let bound = self.indices(indices)?;

        let available = bound.len() as u32;
        if index_count > available {
            return Err(DeviceError::IndexCountOutOfRange {
                requested: index_count,
                available,
            });
        }
        if let Some(&index) = bound[..index_count as usize]
            .iter()
            .find(|&&i| i >= vertex_count)
        {
            return Err(DeviceError::IndexOutOfBounds {
                index,
                vertex_count,
            });
        }

        self.draw_calls.push(DrawCall {
            vertices,
            indices,
            index_count,
        });
        Ok(())
    }
}
