//! Vertex buffer layout description.
//!
//! Describes how the interleaved bytes of a vertex buffer split into
//! attributes. Devices use it to compute per-vertex stride and offsets.

/// Component type of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    Float,
    UnsignedInt,
    UnsignedByte,
}

impl ElementType {
    /// Size in bytes of one component.
    pub const fn size_of(self) -> u32 {
        match self {
            ElementType::Float => 4,
            ElementType::UnsignedInt => 4,
            ElementType::UnsignedByte => 1,
        }
    }
}

/// One attribute: `count` components of `element_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexBufferElement {
    pub element_type: ElementType,
    pub count: u32,
    pub normalized: bool,
}

/// A resolved attribute with its location and byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    pub location: u32,
    pub count: u32,
    pub element_type: ElementType,
    pub normalized: bool,
    pub stride: u32,
    pub offset: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexBufferLayout {
    elements: Vec<VertexBufferElement>,
    stride: u32,
}

impl VertexBufferLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_f32(&mut self, count: u32) -> &mut Self {
        self.push(ElementType::Float, count, false)
    }

    pub fn push_u32(&mut self, count: u32) -> &mut Self {
        self.push(ElementType::UnsignedInt, count, false)
    }

    /// Bytes are normalized to `0.0..=1.0` when read by the shader.
    pub fn push_u8(&mut self, count: u32) -> &mut Self {
        self.push(ElementType::UnsignedByte, count, true)
    }

    fn push(&mut self, element_type: ElementType, count: u32, normalized: bool) -> &mut Self {
        self.elements.push(VertexBufferElement {
            element_type,
            count,
            normalized,
        });
        self.stride += count * element_type.size_of();
        self
    }

    pub fn elements(&self) -> &[VertexBufferElement] {
        &self.elements
    }

    /// Size of one vertex in bytes.
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Attributes in declaration order with running byte offsets.
    pub fn attributes(&self) -> Vec<VertexAttribute> {
        let mut offset = 0;
        self.elements
            .iter()
            .enumerate()
            .map(|(location, element)| {
                let attribute = VertexAttribute {
                    location: location as u32,
                    count: element.count,
                    element_type: element.element_type,
                    normalized: element.normalized,
                    stride: self.stride,
                    offset,
                };
                offset += element.count * element.element_type.size_of();
                attribute
            })
            .collect()
    }
}
