//! Reading and parsing config files.

use std::io::ErrorKind;
use std::path::Path;

use glshapes_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};
use crate::schema::GlShapesConfig;
use crate::validation;

/// Parse config text. Missing tables and fields take their defaults.
pub fn load_from_str(content: &str) -> Result<GlShapesConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(format!("invalid config: {e}")))
}

/// Load the config file at `path`.
///
/// A missing file is `FileNotFound`; any other read failure, and any
/// syntax or type error, is `ParseError`. Out-of-range values only log a
/// warning, because the shape builder rejects them again with the exact
/// mesh error when the shape is built.
pub fn load_from_path(path: &Path) -> Result<GlShapesConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "cannot read {}: {e}",
                path.display()
            )));
        }
    };

    let config = load_from_str(&content)?;
    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), "config has invalid values: {e}");
    }
    info!(path = %path.display(), shape = config.shape.name(), "config loaded");
    Ok(config)
}

/// Load the config at [`default_config_path`], writing the documented
/// template there first when no file exists yet.
pub fn load_default() -> Result<GlShapesConfig, ConfigError> {
    let path = default_config_path()?;
    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            create_default_config(&path)?;
            Ok(GlShapesConfig::default())
        }
        loaded => loaded,
    }
}
