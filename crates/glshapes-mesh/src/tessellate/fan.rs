use glshapes_common::MeshError;
use tracing::{debug, warn};

use super::types::{max_rotations, rotations_per_turn, RotationMode};
use crate::mesh::Mesh;
use crate::vertex::Vertex;

const CENTER: u32 = 0;
const FIRST_PERIMETER: u32 = 1;

/// Tessellate a circle of `radius` into a triangle fan, rotating by
/// `rotation_step` radians per perimeter vertex.
///
/// Equivalent to [`tessellate_with`] in [`RotationMode::Compounding`].
pub fn tessellate(radius: f32, rotation_step: f32) -> Result<Mesh, MeshError> {
    tessellate_with(radius, rotation_step, RotationMode::Compounding)
}

/// Tessellate a circle into a triangle fan centered on the origin.
///
/// Index 0 is the center and index 1 is `(0, radius)`. Each rotation that
/// does not land back on index 1 adds one vertex and one triangle
/// `(0, previous, new)`; the closing triangle is `(0, last, 1)`.
///
/// Fails with [`MeshError::NonConvergentTessellation`] when no rotation
/// within [`max_rotations`] returns to the first perimeter vertex, or when
/// the first return takes more than [`rotations_per_turn`] rotations.
pub fn tessellate_with(
    radius: f32,
    rotation_step: f32,
    mode: RotationMode,
) -> Result<Mesh, MeshError> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(MeshError::InvalidRadius(radius));
    }
    if !rotation_step.is_finite() || rotation_step == 0.0 {
        return Err(MeshError::InvalidRotationStep(rotation_step));
    }

    let limit = max_rotations(rotation_step);
    let one_turn = rotations_per_turn(rotation_step);
    let seed = Vertex::new(0.0, radius);
    let (sin, cos) = rotation_step.sin_cos();

    let expected = (limit / 4) as usize;
    let mut positions = Vec::with_capacity(expected.saturating_add(1).min(1 << 16));
    let mut indices = Vec::with_capacity(expected.saturating_mul(3).min(3 << 16));
    positions.push(Vertex::ORIGIN);
    positions.push(seed);

    let mut last = FIRST_PERIMETER;
    let mut rotations: u32 = 0;

    loop {
        if rotations == limit {
            warn!(
                radius,
                rotation_step, limit, "tessellation did not return to its starting vertex"
            );
            return Err(MeshError::NonConvergentTessellation {
                rotation_step,
                max_rotations: limit,
            });
        }
        rotations += 1;

        let candidate = match mode {
            RotationMode::Compounding => positions[last as usize].rotated_by(sin, cos),
            RotationMode::Analytic => {
                seed.rotated((f64::from(rotations) * f64::from(rotation_step)) as f32)
            }
        };

        if candidate.approx_eq(&seed) {
            if rotations > one_turn {
                warn!(
                    radius,
                    rotation_step,
                    rotations,
                    one_turn,
                    "tessellation only closed after wrapping past a full turn"
                );
                return Err(MeshError::NonConvergentTessellation {
                    rotation_step,
                    max_rotations: limit,
                });
            }
            indices.extend_from_slice(&[CENTER, last, FIRST_PERIMETER]);
            break;
        }

        positions.push(candidate);
        let next = (positions.len() - 1) as u32;
        indices.extend_from_slice(&[CENTER, last, next]);
        last = next;
    }

    let mesh = Mesh::new(positions, indices);
    debug!(
        radius,
        rotation_step,
        ?mode,
        triangles = mesh.triangle_count(),
        vertices = mesh.vertex_count(),
        "tessellated circle"
    );
    Ok(mesh)
}
