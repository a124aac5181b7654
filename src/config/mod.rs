//! Engine configuration
//!
//! A small YAML file selects registry overrides, batch parallelism and the
//! default output format:
//!
//! ```yaml
//! registry:
//!   es: registries/es.yaml
//! explain:
//!   parallel_batch: true
//! output:
//!   format: json
//! ```

mod cli;
mod loader;
mod schema;
mod validate;

#[cfg(test)]
mod tests;

pub use cli::{parse_args, BatchArgs, Cli, Command, ExplainArgs, LevelArgs, RegistryArgs, ViewArg};
pub use loader::{load_config, parse_config};
pub use schema::{EngineConfig, ExplainSection, OutputFormat, OutputSection, RegistryPaths};
pub use validate::{validate_config, ValidationError};
