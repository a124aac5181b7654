//! Feature context entries and name normalization.

use serde::{Deserialize, Serialize};

use crate::level::QualitativeLevel;

/// One sentence per qualitative level
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelTexts {
    pub high: String,
    pub medium: String,
    pub low: String,
}

impl LevelTexts {
    pub fn new(high: impl Into<String>, medium: impl Into<String>, low: impl Into<String>) -> Self {
        Self { high: high.into(), medium: medium.into(), low: low.into() }
    }

    /// Text for `level`
    pub fn get(&self, level: QualitativeLevel) -> &str {
        match level {
            QualitativeLevel::High => &self.high,
            QualitativeLevel::Medium => &self.medium,
            QualitativeLevel::Low => &self.low,
        }
    }
}

/// Business metadata for one feature under one intent
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureContext {
    /// Display label; its normalized form is the registry key
    pub name: String,
    /// Other raw names the upstream model may use for this feature
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    /// One-sentence purpose of the feature
    pub intent: String,
    /// Observation sentence per level
    pub interpretation: LevelTexts,
    /// Effect-on-decision sentence per level
    pub decision_impact: LevelTexts,
    /// Categorical tag, e.g. "Hard safety constraint"
    pub role: String,
    /// Can veto the action regardless of other evidence
    #[serde(default)]
    pub is_hard_block: bool,
}

impl FeatureContext {
    /// Normalized registry key
    pub fn key(&self) -> String {
        normalize_feature_name(&self.name)
    }

    /// Normalized keys this context answers to (name first, then aliases)
    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        std::iter::once(&self.name)
            .chain(self.aliases.iter())
            .map(|raw| normalize_feature_name(raw))
    }
}

/// Compile-time form of a registry entry
pub(super) struct ContextEntry {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub intent: &'static str,
    /// high, medium, low
    pub interpretation: [&'static str; 3],
    /// high, medium, low
    pub impact: [&'static str; 3],
    pub role: &'static str,
    pub hard_block: bool,
}

impl From<&ContextEntry> for FeatureContext {
    fn from(entry: &ContextEntry) -> Self {
        let [ih, im, il] = entry.interpretation;
        let [dh, dm, dl] = entry.impact;
        Self {
            name: entry.name.to_string(),
            aliases: entry.aliases.iter().map(|a| a.to_string()).collect(),
            intent: entry.intent.to_string(),
            interpretation: LevelTexts::new(ih, im, il),
            decision_impact: LevelTexts::new(dh, dm, dl),
            role: entry.role.to_string(),
            is_hard_block: entry.hard_block,
        }
    }
}

/// Normalize a raw feature name into registry-key form.
///
/// Lowercases, collapses every run of spaces, hyphens and underscores into a
/// single `_`, and drops separators at either end:
/// `"Congestion-Induced  HO_Risk"` → `"congestion_induced_ho_risk"`.
pub fn normalize_feature_name(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    let mut pending_separator = false;

    for ch in name.chars() {
        if ch == '-' || ch == '_' || ch.is_whitespace() {
            pending_separator = true;
            continue;
        }
        if pending_separator && !key.is_empty() {
            key.push('_');
        }
        pending_separator = false;
        key.extend(ch.to_lowercase());
    }

    key
}
