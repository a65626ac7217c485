//! 2D shape geometry for indexed triangle rendering.
//!
//! Shapes build into a [`Mesh`] (positions plus triangle indices), which is
//! uploaded through the [`GpuDevice`] trait and drawn with a single indexed
//! draw call. The circle is a triangle fan grown by repeated rotation; see
//! [`tessellate()`].

pub mod device;
pub mod layout;
pub mod mesh;
pub mod shape;
pub mod tessellate;
pub mod vertex;

pub use device::{upload_mesh, BufferHandle, DrawCall, GpuDevice, GpuMesh, RecordingDevice};
pub use layout::{ElementType, VertexAttribute, VertexBufferElement, VertexBufferLayout};
pub use mesh::Mesh;
pub use shape::{CircleShape, Shape, SquareShape};
pub use tessellate::{tessellate, tessellate_with, RotationMode};
pub use vertex::{Vertex, VERTEX_TOLERANCE};
