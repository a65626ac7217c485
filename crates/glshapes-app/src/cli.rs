use clap::{Parser, ValueEnum};

/// glshapes: build a 2D shape mesh and push it through a headless GPU device.
#[derive(Parser, Debug, Default)]
#[command(name = "glshapes", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log filter directive override (e.g. debug, glshapes_mesh=trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Shape to build, replacing the configured one.
    #[arg(long, value_enum)]
    pub shape: Option<ShapeKind>,

    /// Circle radius.
    #[arg(long)]
    pub radius: Option<f32>,

    /// Circle rotation step in degrees.
    #[arg(long)]
    pub step_degrees: Option<f32>,

    /// Derive each circle vertex from its index instead of the previous vertex.
    #[arg(long)]
    pub analytic: bool,

    /// Square side length.
    #[arg(long)]
    pub side: Option<f32>,

    /// Emit texture coordinates for the square.
    #[arg(long)]
    pub textured: bool,

    /// Print the mesh as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShapeKind {
    Circle,
    Square,
}

pub fn parse() -> Args {
    Args::parse()
}
