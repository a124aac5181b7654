//! Feature Context Registry
//!
//! Static domain knowledge: what a high, medium or low value of each
//! network feature means, and how it bears on the ES or MRO decision.
//!
//! One registry exists per intent. The built-in ones are process-wide and
//! immutable; alternative tables can be loaded from YAML.

mod context;
mod error;
mod es;
mod mro;
mod set;
mod table;

#[cfg(test)]
mod tests;

pub use context::{normalize_feature_name, FeatureContext, LevelTexts};
pub use error::RegistryError;
pub use set::RegistrySet;
pub use table::{FeatureRegistry, RegistryFile};
