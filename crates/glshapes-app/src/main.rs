mod cli;
mod driver;

use std::path::Path;
use std::process::ExitCode;

use glshapes_common::ConfigError;
use glshapes_config::GlShapesConfig;
use glshapes_mesh::RecordingDevice;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

fn read_config(path: Option<&str>) -> Result<GlShapesConfig, ConfigError> {
    match path {
        Some(path) => glshapes_config::load_from_path(Path::new(path)),
        None => glshapes_config::load_default(),
    }
}

/// Filter used when neither the CLI nor a loaded config names one.
const DEFAULT_LOG_DIRECTIVE: &str = "glshapes=info";

fn log_directive(
    cli_directive: Option<&str>,
    loaded: &Result<GlShapesConfig, ConfigError>,
) -> String {
    match (cli_directive, loaded) {
        (Some(directive), _) => directive.to_string(),
        (None, Ok(config)) => config.logging.level.as_directive().to_string(),
        (None, Err(_)) => DEFAULT_LOG_DIRECTIVE.to_string(),
    }
}

fn init_logging(directive: &str) {
    let directive: Directive = directive.parse().unwrap_or_else(|_| {
        eprintln!("invalid log directive '{directive}', using {DEFAULT_LOG_DIRECTIVE}");
        DEFAULT_LOG_DIRECTIVE
            .parse()
            .unwrap_or_else(|_| LevelFilter::INFO.into())
    });
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Read before the subscriber exists so the configured level can seed it.
    let loaded = read_config(args.config.as_deref());

    init_logging(&log_directive(args.log_level.as_deref(), &loaded));

    tracing::info!("glshapes v{} starting", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }

    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        GlShapesConfig::default()
    });
    driver::apply_overrides(&mut config, &args);

    let mut device = RecordingDevice::new();
    let report = match driver::run(&config, &mut device) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if config.output.json {
        match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", report.summary());
    }

    tracing::info!(draw_calls = device.draw_calls().len(), "done");
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use glshapes_config::schema::LogLevel;
    use std::path::PathBuf;

    #[test]
    fn cli_directive_wins() {
        let loaded = Ok(GlShapesConfig::default());
        assert_eq!(log_directive(Some("trace"), &loaded), "trace");
    }

    #[test]
    fn configured_level_used_without_cli_directive() {
        let mut config = GlShapesConfig::default();
        config.logging.level = LogLevel::Warn;
        assert_eq!(log_directive(None, &Ok(config)), "warn");
    }

    #[test]
    fn failed_config_load_falls_back_to_crate_scoped_info() {
        let loaded = Err(ConfigError::FileNotFound(PathBuf::from("missing.toml")));
        assert_eq!(log_directive(None, &loaded), "glshapes=info");
    }

    #[test]
    fn default_directive_parses() {
        assert!(DEFAULT_LOG_DIRECTIVE.parse::<Directive>().is_ok());
    }
}
