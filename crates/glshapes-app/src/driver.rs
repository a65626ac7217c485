//! Builds the configured shape and pushes it through a GPU device.

use glshapes_common::{GlShapesError, Result};
use glshapes_config::GlShapesConfig;
use glshapes_mesh::{upload_mesh, CircleShape, GpuDevice, Mesh, RotationMode, Shape, SquareShape};
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::{Args, ShapeKind};

/// Outcome of one driver run.
#[derive(Debug, Serialize)]
pub struct Report {
    pub shape: &'static str,
    pub triangles: u32,
    pub vertices: u32,
    pub mesh: Mesh,
}

impl Report {
    pub fn summary(&self) -> String {
        format!(
            "{}: {} triangles, {} vertices",
            self.shape, self.triangles, self.vertices
        )
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GlShapesError::Other(format!("failed to serialize mesh: {e}")))
    }
}

/// Layer command-line overrides on top of the loaded config.
pub fn apply_overrides(config: &mut GlShapesConfig, args: &Args) {
    match args.shape {
        Some(ShapeKind::Circle) if !matches!(config.shape, Shape::Circle(_)) => {
            config.shape = CircleShape::default().into();
        }
        Some(ShapeKind::Square) if !matches!(config.shape, Shape::Square(_)) => {
            config.shape = SquareShape::default().into();
        }
        _ => {}
    }

    match &mut config.shape {
        Shape::Circle(circle) => {
            if let Some(radius) = args.radius {
                circle.radius = radius;
            }
            if let Some(degrees) = args.step_degrees {
                circle.rotation_step = degrees.to_radians();
            }
            if args.analytic {
                circle.mode = RotationMode::Analytic;
            }
            if args.side.is_some() || args.textured {
                warn!("--side/--textured only apply to squares, ignoring");
            }
        }
        Shape::Square(square) => {
            if let Some(side) = args.side {
                square.side_length = side;
            }
            if args.textured {
                square.textured = true;
            }
            if args.radius.is_some() || args.step_degrees.is_some() || args.analytic {
                warn!("--radius/--step-degrees/--analytic only apply to circles, ignoring");
            }
        }
    }

    if args.json {
        config.output.json = true;
    }
}

/// Build the configured mesh, upload it, and issue one indexed draw.
pub fn run(config: &GlShapesConfig, device: &mut dyn GpuDevice) -> Result<Report> {
    let mesh = config.shape.build()?;
    info!(
        "built {} with {} triangles to draw",
        config.shape.name(),
        mesh.triangle_count()
    );

    let gpu_mesh = upload_mesh(device, &mesh)?;
    gpu_mesh.draw(device)?;

    Ok(Report {
        shape: config.shape.name(),
        triangles: mesh.triangle_count(),
        vertices: mesh.vertex_count(),
        mesh,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glshapes_common::MeshError;
    use glshapes_mesh::RecordingDevice;

    #[test]
    fn default_config_draws_720_triangle_circle() {
        let mut device = RecordingDevice::new();
        let report = run(&GlShapesConfig::default(), &mut device).unwrap();
        assert_eq!(report.shape, "circle");
        assert_eq!(report.triangles, 720);
        assert_eq!(report.vertices, 721);
        assert_eq!(device.draw_calls().len(), 1);
        assert_eq!(device.draw_calls()[0].index_count, 3 * 720);
        assert_eq!(report.summary(), "circle: 720 triangles, 721 vertices");
    }

    #[test]
    fn square_override_switches_shape() {
        let mut config = GlShapesConfig::default();
        let args = Args {
            shape: Some(ShapeKind::Square),
            side: Some(2.0),
            textured: true,
            ..Args::default()
        };
        apply_overrides(&mut config, &args);
        assert_eq!(
            config.shape,
            Shape::Square(SquareShape {
                side_length: 2.0,
                textured: true,
                ..SquareShape::default()
            })
        );

        let mut device = RecordingDevice::new();
        let report = run(&config, &mut device).unwrap();
        assert_eq!(report.summary(), "square: 2 triangles, 4 vertices");
    }

    #[test]
    fn circle_overrides_convert_degrees() {
        let mut config = GlShapesConfig::default();
        let args = Args {
            radius: Some(0.5),
            step_degrees: Some(90.0),
            analytic: true,
            json: true,
            ..Args::default()
        };
        apply_overrides(&mut config, &args);
        match &config.shape {
            Shape::Circle(circle) => {
                assert_eq!(circle.radius, 0.5);
                assert!((circle.rotation_step - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
                assert_eq!(circle.mode, RotationMode::Analytic);
            }
            other => panic!("expected circle, got {other:?}"),
        }
        assert!(config.output.json);

        let mut device = RecordingDevice::new();
        let report = run(&config, &mut device).unwrap();
        assert_eq!(report.triangles, 4);
        assert_eq!(report.mesh.indices(), &[0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 1]);
    }

    #[test]
    fn circle_flags_are_ignored_for_squares() {
        let mut config = GlShapesConfig {
            shape: SquareShape::new(1.5).into(),
            ..GlShapesConfig::default()
        };
        let args = Args {
            radius: Some(9.0),
            ..Args::default()
        };
        apply_overrides(&mut config, &args);
        assert_eq!(config.shape, Shape::Square(SquareShape::new(1.5)));
    }

    #[test]
    fn same_kind_override_keeps_configured_parameters() {
        let mut config = GlShapesConfig {
            shape: CircleShape::new(0.3).into(),
            ..GlShapesConfig::default()
        };
        let args = Args {
            shape: Some(ShapeKind::Circle),
            ..Args::default()
        };
        apply_overrides(&mut config, &args);
        assert_eq!(config.shape, Shape::Circle(CircleShape::new(0.3)));
    }

    #[test]
    fn non_convergent_step_fails_without_drawing() {
        let config = GlShapesConfig {
            shape: CircleShape {
                radius: 1.0,
                rotation_step: 1.0,
                mode: RotationMode::Compounding,
            }
            .into(),
            ..GlShapesConfig::default()
        };
        let mut device = RecordingDevice::new();
        let err = run(&config, &mut device).unwrap_err();
        assert!(matches!(
            err,
            GlShapesError::Mesh(MeshError::NonConvergentTessellation { .. })
        ));
        assert_eq!(device.buffer_count(), 0);
        assert!(device.draw_calls().is_empty());
    }

    #[test]
    fn json_report_contains_mesh() {
        let config = GlShapesConfig {
            shape: SquareShape::new(1.0).into(),
            ..GlShapesConfig::default()
        };
        let mut device = RecordingDevice::new();
        let json = run(&config, &mut device).unwrap().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["shape"], "square");
        assert_eq!(value["triangles"], 2);
        assert_eq!(value["mesh"]["indices"], serde_json::json!([0, 1, 3, 1, 2, 3]));
        assert_eq!(value["mesh"]["positions"].as_array().unwrap().len(), 4);
    }
}
