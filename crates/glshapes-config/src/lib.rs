//! glshapes configuration system.
//!
//! TOML-based configuration describing which shape the driver builds and
//! how it reports. All sections have defaults, so partial configs work
//! out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use glshapes_config::{config_to_json, load_config};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{GlShapesConfig, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{load_default, load_from_path, load_from_str};

use glshapes_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path and validate it strictly.
pub fn load_config() -> Result<GlShapesConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it strictly.
pub fn load_config_from(path: &Path) -> Result<GlShapesConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &GlShapesConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
