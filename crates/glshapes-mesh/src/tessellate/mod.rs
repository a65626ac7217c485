//! Circle tessellation into a triangle fan.
//!
//! The fan is grown one perimeter vertex at a time by rotating the most
//! recent vertex by a fixed step, until the rotation lands back on the
//! first perimeter vertex. The step alone controls the polygon resolution.
//!
//! Closure is tested against an absolute tolerance, so large radii amplify
//! rounding error past it. A fan that only lands on its first vertex after
//! sweeping more than one full turn is reported as non-convergent rather
//! than returned wound over itself.

mod fan;
mod types;


pub use fan::{tessellate, tessellate_with};
pub use types::{max_rotations, rotations_per_turn, RotationMode};
