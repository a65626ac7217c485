//! Configuration schema types for glshapes.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod output;

pub use logging::*;
pub use output::*;

pub use glshapes_mesh::{CircleShape, RotationMode, Shape, SquareShape};

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// `shape` is the mesh the driver builds, tagged by `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct GlShapesConfig {
    pub shape: Shape,
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

// =============================================================================
// Tests
// =============================================================================
