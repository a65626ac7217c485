//! Where the config file lives.

use std::path::{Path, PathBuf};

use glshapes_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "glshapes";
const FILE_NAME: &str = "config.toml";

/// Config file location under a given base directory.
pub fn config_path_in(base: &Path) -> PathBuf {
    base.join(APP_DIR).join(FILE_NAME)
}

/// `<platform config dir>/glshapes/config.toml`, e.g.
/// `~/.config/glshapes/config.toml` on Linux.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|base| config_path_in(&base))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

/// Write the documented template to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_failed =
        |e: std::io::Error| ConfigError::ParseError(format!("cannot write {}: {e}", path.display()));

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(write_failed)?;
    }
    std::fs::write(path, default_config_toml()).map_err(write_failed)?;

    info!(path = %path.display(), "wrote default config");
    Ok(())
}
