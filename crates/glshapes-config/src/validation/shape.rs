//! Shape parameter validation.

use std::f32::consts::TAU;

use crate::schema::{GlShapesConfig, Shape};

use super::helpers::validate_range_exclusive_min;

/// Largest accepted radius or side length. Circles must also close.
const MAX_EXTENT: f32 = 1000.0;

pub(crate) fn validate_shape(errors: &mut Vec<String>, config: &GlShapesConfig) {
    match &config.shape {
        Shape::Circle(circle) => {
            let before = errors.len();
            validate_range_exclusive_min(errors, "shape.radius", circle.radius, 0.0, MAX_EXTENT);
            // Direction is free; only the magnitude is bounded.
            validate_range_exclusive_min(
                errors,
                "shape.rotation_step",
                circle.rotation_step.abs(),
                0.0,
                TAU,
            );
            // Whether a radius closes depends on the step and the mode, so
            // in-range parameters are checked by building the fan.
            if errors.len() == before {
                if let Err(e) = circle.build() {
                    errors.push(format!(
                        "shape.radius = {} with shape.rotation_step = {} does not tessellate: {e}",
                        circle.radius, circle.rotation_step
                    ));
                }
            }
        }
        Shape::Square(square) => {
            validate_range_exclusive_min(
                errors,
                "shape.side_length",
                square.side_length,
                0.0,
                MAX_EXTENT,
            );
            if !(square.x.is_finite() && square.y.is_finite()) {
                errors.push(format!(
                    "shape position ({}, {}) must be finite",
                    square.x, square.y
                ));
            }
        }
    }
}
