use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

/// How each perimeter vertex is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum RotationMode {
    /// Rotate the previously generated vertex by one step. Rounding error
    /// accumulates across the fan.
    #[default]
    Compounding,
    /// Rotate the first perimeter vertex by `k * step` for the k-th vertex.
    Analytic,
}

/// Number of steps needed to sweep one full turn, rounded up.
///
/// A fan that only closes after more rotations than this has wrapped
/// over itself.
pub fn rotations_per_turn(rotation_step: f32) -> u32 {
    let steps = (TAU / f64::from(rotation_step).abs()).ceil();
    steps.min(f64::from(u32::MAX)) as u32
}

/// Upper bound on rotations before a step is declared non-convergent:
/// four full turns' worth of steps.
pub fn max_rotations(rotation_step: f32) -> u32 {
    rotations_per_turn(rotation_step).saturating_mul(4)
}
