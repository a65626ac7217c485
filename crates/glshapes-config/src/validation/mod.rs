//! Full configuration validation.
//!
//! Checks numeric ranges and collects every problem into a single
//! `ConfigError` instead of stopping at the first one.

mod helpers;
mod shape;


use crate::schema::GlShapesConfig;
use glshapes_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GlShapesConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    shape::validate_shape(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
