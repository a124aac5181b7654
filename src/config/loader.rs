//! Engine config loading

use std::fs;
use std::path::Path;

use super::schema::EngineConfig;
use super::validate::validate_config;
use crate::error::{Error, Result};

/// Load, resolve and validate an engine config file
///
/// Relative registry paths are taken relative to the config file.
///
/// # Example
///
/// ```no_run
/// use son_explain::config::load_config;
///
/// let config = load_config("son-explain.yaml")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<EngineConfig> {
    let config_path = config_path.as_ref();

    let yaml_content = fs::read_to_string(config_path).map_err(|e| {
        Error::ConfigError(format!("Failed to read config file {}: {e}", config_path.display()))
    })?;

    let mut config = parse_config(&yaml_content)?;
    if let Some(base) = config_path.parent() {
        config.resolve_paths(base);
    }

    validate_config(&config)?;
    tracing::debug!(path = %config_path.display(), "loaded engine config");
    Ok(config)
}

/// Parse a config document without touching the filesystem
pub fn parse_config(yaml: &str) -> Result<EngineConfig> {
    // An empty file parses as YAML null
    if yaml.trim().is_empty() {
        return Ok(EngineConfig::default());
    }
    serde_yaml::from_str(yaml).map_err(|e| Error::ConfigError(format!("Failed to parse YAML config: {e}")))
}
