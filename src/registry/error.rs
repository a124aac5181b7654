//! Registry loading errors

use std::path::PathBuf;

use crate::trace::IntentLabel;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Failed to read registry file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse registry YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Feature key '{key}' is claimed by both '{first}' and '{second}'")]
    DuplicateKey { key: String, first: String, second: String },

    #[error("Feature name normalizes to an empty key: '{0}'")]
    EmptyKey(String),

    #[error("No registry exists for intent '{0}' (must be ES or MRO)")]
    UnsupportedIntent(IntentLabel),

    #[error("Registry file declares intent '{found}' but was configured for '{expected}'")]
    IntentMismatch { expected: IntentLabel, found: IntentLabel },
}
