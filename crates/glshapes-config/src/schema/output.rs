use serde::{Deserialize, Serialize};

/// How the driver reports the built mesh.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct OutputConfig {
    /// Print the whole mesh as JSON instead of a one-line summary.
    pub json: bool,
}
