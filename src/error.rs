//! Crate-level error type.
//!
//! Per-module errors (`TraceError`, `RegistryError`, `ValidationError`) carry
//! the detail; this enum is what the façade and the CLI propagate.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ValidationError;
use crate::registry::RegistryError;
use crate::trace::TraceError;

/// Result type alias for son-explain operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the explanation engine.
#[derive(Error, Debug)]
pub enum Error {
    /// The trace violates the path contract.
    #[error("Malformed trace: {0}")]
    Trace(#[from] TraceError),

    /// A feature registry could not be loaded.
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// The engine configuration is invalid.
    #[error("Invalid config: {0}")]
    Validation(#[from] ValidationError),

    /// The engine configuration could not be read or parsed.
    #[error("Config error: {0}")]
    ConfigError(String),

    /// Input file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input JSON does not match the trace contract.
    #[error("Failed to parse {what}: {source}")]
    Json {
        what: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an IO error with the offending path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// Create a JSON error naming what was being parsed.
    pub fn json(what: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json { what: what.into(), source }
    }
}
