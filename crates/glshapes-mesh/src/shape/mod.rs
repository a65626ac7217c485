//! Closed set of buildable shapes.
//!
//! Every variant turns its parameters into a [`Mesh`] through
//! [`Shape::build`]. The enum is serde-tagged by `kind` so a shape can be
//! written directly in a config file.

mod circle;
mod square;

pub use circle::*;
pub use square::*;

use glshapes_common::MeshError;
use serde::{Deserialize, Serialize};

use crate::mesh::Mesh;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Circle(CircleShape),
    Square(SquareShape),
}

impl Shape {
    pub fn build(&self) -> Result<Mesh, MeshError> {
        match self {
            Shape::Circle(circle) => circle.build(),
            Shape::Square(square) => square.build(),
        }
    }

    /// Lowercase variant name, as used in the `kind` tag.
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Circle(_) => "circle",
            Shape::Square(_) => "square",
        }
    }
}

impl Default for Shape {
    fn default() -> Self {
        Shape::Circle(CircleShape::default())
    }
}

impl From<CircleShape> for Shape {
    fn from(circle: CircleShape) -> Self {
        Shape::Circle(circle)
    }
}

impl From<SquareShape> for Shape {
    fn from(square: SquareShape) -> Self {
        Shape::Square(square)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_shape_is_circle() {
        let shape = Shape::default();
        assert_eq!(shape.name(), "circle");
        assert_eq!(shape.build().unwrap().triangle_count(), 720);
    }

    #[test]
    fn build_dispatches_to_variant() {
        let square: Shape = SquareShape::default().into();
        let mesh = square.build().unwrap();
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(square.name(), "square");
    }

    #[test]
    fn shape_deserializes_by_kind() {
        let shape: Shape =
            serde_json::from_str(r#"{"kind":"circle","radius":2.0,"rotation_step":0.5}"#).unwrap();
        match shape {
            Shape::Circle(c) => {
                assert_eq!(c.radius, 2.0);
                assert_eq!(c.rotation_step, 0.5);
            }
            other => panic!("expected circle, got {other:?}"),
        }

        let shape: Shape =
            serde_json::from_str(r#"{"kind":"square","side_length":1.5,"textured":true}"#).unwrap();
        match shape {
            Shape::Square(s) => {
                assert_eq!(s.side_length, 1.5);
                assert!(s.textured);
                assert!(s.centered);
            }
            other => panic!("expected square, got {other:?}"),
        }
    }

    #[test]
    fn shape_serialization_round_trip() {
        let shape = Shape::Square(SquareShape {
            side_length: 2.0,
            centered: false,
            ..SquareShape::default()
        });
        let json = serde_json::to_string(&shape).unwrap();
        assert!(json.contains("\"kind\":\"square\""));
        let parsed: Shape = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, shape);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let result: Result<Shape, _> = serde_json::from_str(r#"{"kind":"hexagon"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn build_propagates_errors() {
        let shape = Shape::Circle(CircleShape {
            radius: -1.0,
            ..CircleShape::default()
        });
        assert!(matches!(shape.build(), Err(MeshError::InvalidRadius(_))));
    }
}
