//! Explanation record

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::narrative::{Narrative, NarrativeReport};
use crate::render::PathTree;
use crate::trace::{CounterfactualHint, IntentLabel, TopFeature};

/// Everything needed to present one decision
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    pub intent_id: String,
    pub intent_label: IntentLabel,
    /// Resolved verdict, `None` when undetermined
    pub decision: Option<bool>,
    /// Display label, e.g. "Apply ES"
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(flatten)]
    pub report: NarrativeReport,
    pub tree: PathTree,
    #[serde(default)]
    pub top_features: Vec<TopFeature>,
    #[serde(default)]
    pub counterfactual: Vec<CounterfactualHint>,
    #[serde(default)]
    pub feature_snapshot: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl Explanation {
    pub fn narratives(&self) -> &[Narrative] {
        &self.report.narratives
    }

    /// "N key factors considered"
    pub fn key_factor_count(&self) -> usize {
        self.report.key_factor_count()
    }

    pub fn is_undetermined(&self) -> bool {
        self.decision.is_none()
    }
}
