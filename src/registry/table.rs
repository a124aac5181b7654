//! Per-intent lookup table

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use super::context::{normalize_feature_name, FeatureContext};
use super::error::RegistryError;
use super::{es, mro};
use crate::trace::IntentLabel;

static ES_REGISTRY: LazyLock<FeatureRegistry> = LazyLock::new(|| {
    FeatureRegistry::new(IntentLabel::Es, es::ENTRIES.iter().map(FeatureContext::from).collect())
        .expect("built-in ES registry has unique keys")
});

static MRO_REGISTRY: LazyLock<FeatureRegistry> = LazyLock::new(|| {
    FeatureRegistry::new(IntentLabel::Mro, mro::ENTRIES.iter().map(FeatureContext::from).collect())
        .expect("built-in MRO registry has unique keys")
});

/// On-disk registry format
///
/// ```yaml
/// intent: ES
/// features:
///   - name: Persistent Low Load
///     aliases: [Persistent Low Load Score]
///     intent: Measures how consistently the cell carries low traffic.
///     interpretation: { high: ..., medium: ..., low: ... }
///     decision_impact: { high: Strongly supports ES, medium: ..., low: ... }
///     role: Primary benefit indicator
///     is_hard_block: false
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegistryFile {
    pub intent: IntentLabel,
    pub features: Vec<FeatureContext>,
}

/// Feature contexts for one intent, indexed by normalized name
#[derive(Clone, Debug)]
pub struct FeatureRegistry {
    intent: IntentLabel,
    contexts: Vec<FeatureContext>,
    index: HashMap<String, usize>,
}

impl FeatureRegistry {
    /// Build a registry, rejecting keys claimed by two entries.
    pub fn new(intent: IntentLabel, contexts: Vec<FeatureContext>) -> Result<Self, RegistryError> {
        let mut index = HashMap::new();

        for (i, context) in contexts.iter().enumerate() {
            for key in context.keys() {
                if key.is_empty() {
                    return Err(RegistryError::EmptyKey(context.name.clone()));
                }
                match index.insert(key.clone(), i) {
                    Some(prev) if prev != i => {
                        return Err(RegistryError::DuplicateKey {
                            key,
                            first: contexts[prev].name.clone(),
                            second: context.name.clone(),
                        });
                    }
                    _ => {}
                }
            }
        }

        Ok(Self { intent, contexts, index })
    }

    /// Built-in registry for ES
    pub fn es() -> &'static FeatureRegistry {
        &ES_REGISTRY
    }

    /// Built-in registry for MRO
    pub fn mro() -> &'static FeatureRegistry {
        &MRO_REGISTRY
    }

    /// Parse a registry from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self, RegistryError> {
        let file: RegistryFile = serde_yaml::from_str(yaml)?;
        if !file.intent.is_known() {
            return Err(RegistryError::UnsupportedIntent(file.intent));
        }
        Self::new(file.intent, file.features)
    }

    /// Load a registry from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Export in the on-disk format
    pub fn to_file(&self) -> RegistryFile {
        RegistryFile { intent: self.intent.clone(), features: self.contexts.clone() }
    }

    /// Find the context for a raw feature name; `None` means unmapped.
    pub fn lookup(&self, feature_name: &str) -> Option<&FeatureContext> {
        let key = normalize_feature_name(feature_name);
        self.index.get(&key).map(|&i| &self.contexts[i])
    }

    pub fn intent(&self) -> &IntentLabel {
        &self.intent
    }

    /// Contexts in declaration order
    pub fn contexts(&self) -> &[FeatureContext] {
        &self.contexts
    }

    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}
