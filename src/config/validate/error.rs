//! Validation error types
//!
//! Defines all validation error variants for the engine configuration.

use std::path::PathBuf;

/// Validation error type
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("{intent} registry file does not exist: {}", path.display())]
    RegistryFileNotFound { intent: &'static str, path: PathBuf },

    #[error("{intent} registry path is not a file: {}", path.display())]
    RegistryPathNotFile { intent: &'static str, path: PathBuf },

    #[error("{intent} registry file must be YAML (.yaml or .yml): {}", path.display())]
    RegistryNotYaml { intent: &'static str, path: PathBuf },
}
