use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    #[error("invalid radius: {0} (must be finite and greater than zero)")]
    InvalidRadius(f32),

    #[error("invalid rotation step: {0} (must be finite and nonzero)")]
    InvalidRotationStep(f32),

    #[error(
        "non-terminating tessellation: rotation step {rotation_step} did not return \
         to the starting vertex within {max_rotations} rotations"
    )]
    NonConvergentTessellation {
        rotation_step: f32,
        max_rotations: u32,
    },

    #[error("invalid side length: {0} (must be finite and greater than zero)")]
    InvalidSideLength(f32),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeviceError {
    #[error("vertex data is empty")]
    EmptyVertexData,

    #[error("vertex layout has zero stride")]
    InvalidStride,

    #[error("vertex data length {len} is not a multiple of the layout stride {stride}")]
    MisalignedVertexData { len: usize, stride: u32 },

    #[error("unknown buffer handle: {0}")]
    UnknownBuffer(u32),

    #[error("buffer {0} is bound to the wrong target")]
    WrongBufferKind(u32),

    #[error("draw requested {requested} indices but only {available} are uploaded")]
    IndexCountOutOfRange { requested: u32, available: u32 },

    #[error("index {index} out of bounds for {vertex_count} vertices")]
    IndexOutOfBounds { index: u32, vertex_count: u32 },
}

#[derive(Debug, thiserror::Error)]
pub enum GlShapesError {
    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Device(#[from] DeviceError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
