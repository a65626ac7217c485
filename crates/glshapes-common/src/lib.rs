pub mod errors;

pub use errors::{ConfigError, DeviceError, GlShapesError, MeshError};

pub type Result<T> = std::result::Result<T, GlShapesError>;
