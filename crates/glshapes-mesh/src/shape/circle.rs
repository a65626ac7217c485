use std::f32::consts::PI;

use glshapes_common::MeshError;
use serde::{Deserialize, Serialize};

use crate::mesh::Mesh;
use crate::tessellate::{tessellate_with, RotationMode};

/// Half a degree: 720 triangles per circle.
pub const DEFAULT_ROTATION_STEP: f32 = PI / 360.0;

/// A circle centered on the origin, tessellated as a triangle fan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleShape {
    pub radius: f32,
    /// Radians per perimeter vertex.
    pub rotation_step: f32,
    pub mode: RotationMode,
}

impl Default for CircleShape {
    fn default() -> Self {
        Self {
            radius: 0.5,
            rotation_step: DEFAULT_ROTATION_STEP,
            mode: RotationMode::Compounding,
        }
    }
}

impl CircleShape {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            ..Self::default()
        }
    }

    pub fn build(&self) -> Result<Mesh, MeshError> {
        tessellate_with(self.radius, self.rotation_step, self.mode)
    }
}
