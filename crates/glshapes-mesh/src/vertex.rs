//! 2D vertex type shared by every shape.

use serde::{Deserialize, Serialize};

/// Absolute per-axis tolerance used by [`Vertex::approx_eq`].
pub const VERTEX_TOLERANCE: f32 = 1e-4;

/// A 2D position.
///
/// Layout: x(f32) + y(f32) = 8 bytes, so `&[Vertex]` can be handed to a
/// vertex buffer as-is through `bytemuck::cast_slice`.
#[repr(C)]
#[derive(
    Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, bytemuck::Pod, bytemuck::Zeroable,
)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
}

impl Vertex {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Componentwise comparison within [`VERTEX_TOLERANCE`].
    pub fn approx_eq(&self, other: &Vertex) -> bool {
        (self.x - other.x).abs() < VERTEX_TOLERANCE && (self.y - other.y).abs() < VERTEX_TOLERANCE
    }

    /// Rotate around the origin by `angle` radians (counter-clockwise).
    pub fn rotated(&self, angle: f32) -> Vertex {
        let (sin, cos) = angle.sin_cos();
        self.rotated_by(sin, cos)
    }

    /// Rotate with a precomputed sine/cosine pair.
    pub(crate) fn rotated_by(&self, sin: f32, cos: f32) -> Vertex {
        Vertex {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    /// Distance from the origin.
    pub fn length(&self) -> f32 {
        self.x.hypot(self.y)
    }
}

impl From<[f32; 2]> for Vertex {
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Vertex> for [f32; 2] {
    fn from(v: Vertex) -> Self {
        [v.x, v.y]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn vertex_size_is_8_bytes() {
        assert_eq!(std::mem::size_of::<Vertex>(), 8);
        assert_eq!(std::mem::align_of::<Vertex>(), 4);
    }

    #[test]
    fn approx_eq_within_tolerance() {
        let a = Vertex::new(1.0, 2.0);
        assert!(a.approx_eq(&Vertex::new(1.00005, 1.99995)));
        assert!(!a.approx_eq(&Vertex::new(1.0002, 2.0)));
        assert!(!a.approx_eq(&Vertex::new(1.0, 2.0002)));
    }

    #[test]
    fn approx_eq_checks_both_axes_independently() {
        // x of one against x of the other, never crossed
        let a = Vertex::new(0.5, 0.0);
        let b = Vertex::new(0.0, 0.5);
        assert!(!a.approx_eq(&b));
    }

    #[test]
    fn rotate_quarter_turn_is_counter_clockwise() {
        let v = Vertex::new(0.0, 0.5).rotated(FRAC_PI_2);
        assert!(v.approx_eq(&Vertex::new(-0.5, 0.0)), "got {v:?}");
    }

    #[test]
    fn rotate_half_turn() {
        let v = Vertex::new(1.0, 0.0).rotated(PI);
        assert!(v.approx_eq(&Vertex::new(-1.0, 0.0)), "got {v:?}");
    }

    #[test]
    fn rotate_preserves_length() {
        let v = Vertex::new(3.0, 4.0);
        let r = v.rotated(0.3);
        assert!((r.length() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn array_conversions() {
        let v: Vertex = [1.5, -2.0].into();
        assert_eq!(v, Vertex::new(1.5, -2.0));
        let arr: [f32; 2] = v.into();
        assert_eq!(arr, [1.5, -2.0]);
    }

    #[test]
    fn bytemuck_cast_works() {
        let vs = [Vertex::new(1.0, 2.0), Vertex::new(3.0, 4.0)];
        let floats: &[f32] = bytemuck::cast_slice(&vs);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0]);
    }
}
