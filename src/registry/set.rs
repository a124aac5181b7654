//! Registry selection by intent

use std::borrow::Cow;

use super::error::RegistryError;
use super::table::FeatureRegistry;
use crate::trace::IntentLabel;

/// The ES and MRO registries used by one explainer
#[derive(Clone, Debug)]
pub struct RegistrySet {
    es: Cow<'static, FeatureRegistry>,
    mro: Cow<'static, FeatureRegistry>,
}

impl Default for RegistrySet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RegistrySet {
    /// Built-in registries (shared statics, no copy)
    pub fn builtin() -> Self {
        Self { es: Cow::Borrowed(FeatureRegistry::es()), mro: Cow::Borrowed(FeatureRegistry::mro()) }
    }

    /// Replace the registry for `expected` with `registry`.
    pub fn with_registry(
        mut self,
        expected: IntentLabel,
        registry: FeatureRegistry,
    ) -> Result<Self, RegistryError> {
        if registry.intent() != &expected {
            return Err(RegistryError::IntentMismatch {
                expected,
                found: registry.intent().clone(),
            });
        }
        match expected {
            IntentLabel::Es => self.es = Cow::Owned(registry),
            IntentLabel::Mro => self.mro = Cow::Owned(registry),
            other @ IntentLabel::Other(_) => return Err(RegistryError::UnsupportedIntent(other)),
        }
        Ok(self)
    }

    /// Registry for an intent; `None` for intents without one.
    pub fn for_intent(&self, intent: &IntentLabel) -> Option<&FeatureRegistry> {
        match intent {
            IntentLabel::Es => Some(&*self.es),
            IntentLabel::Mro => Some(&*self.mro),
            IntentLabel::Other(_) => None,
        }
    }
}
