//! Configuration validation logic

use std::path::Path;

use super::error::ValidationError;
use crate::config::schema::EngineConfig;

/// Validate an engine configuration
///
/// Checks:
/// - Registry override paths exist and are files
/// - Registry overrides are YAML files
pub fn validate_config(config: &EngineConfig) -> Result<(), ValidationError> {
    if let Some(path) = &config.registry.es {
        validate_registry_path("ES", path)?;
    }
    if let Some(path) = &config.registry.mro {
        validate_registry_path("MRO", path)?;
    }
    Ok(())
}

fn validate_registry_path(intent: &'static str, path: &Path) -> Result<(), ValidationError> {
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
    if !is_yaml {
        return Err(ValidationError::RegistryNotYaml { intent, path: path.to_path_buf() });
    }

    if !path.exists() {
        return Err(ValidationError::RegistryFileNotFound { intent, path: path.to_path_buf() });
    }

    if !path.is_file() {
        return Err(ValidationError::RegistryPathNotFile { intent, path: path.to_path_buf() });
    }

    Ok(())
}
