//! Batch prediction response shape.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::node::DecisionNode;
use super::record::{CounterfactualHint, DecisionTreeTrace, IntentLabel, TopFeature};

/// One batch entry: either a trace or the upstream failure for that item
///
/// Failed items usually carry nothing but `intentId` and `error`, so every
/// trace field is optional here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItem {
    #[serde(default)]
    pub intent_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent_label: Option<IntentLabel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub path: Vec<DecisionNode>,
    #[serde(default)]
    pub top_features: Vec<TopFeature>,
    #[serde(default)]
    pub counterfactual: Vec<CounterfactualHint>,
    #[serde(default)]
    pub feature_snapshot: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Upstream model failure for this item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchItem {
    /// Wrap a successful trace
    pub fn from_trace(trace: DecisionTreeTrace) -> Self {
        Self {
            intent_id: trace.intent_id,
            intent_label: Some(trace.intent_label),
            decision: trace.decision,
            confidence: trace.confidence,
            path: trace.path,
            top_features: trace.top_features,
            counterfactual: trace.counterfactual,
            feature_snapshot: trace.feature_snapshot,
            timestamp: trace.timestamp,
            error: None,
        }
    }

    /// Record an upstream failure
    pub fn failed(intent_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            intent_id: intent_id.into(),
            intent_label: None,
            decision: None,
            confidence: None,
            path: Vec::new(),
            top_features: Vec::new(),
            counterfactual: Vec::new(),
            feature_snapshot: BTreeMap::new(),
            timestamp: None,
            error: Some(error.into()),
        }
    }

    /// The explainable trace, or the reason this item must not be interpreted.
    ///
    /// A present `error` always wins, whatever partial path came with it.
    pub fn to_trace(&self) -> Result<DecisionTreeTrace, String> {
        if let Some(error) = &self.error {
            return Err(error.clone());
        }
        let intent_label = self
            .intent_label
            .clone()
            .ok_or_else(|| "missing intentLabel".to_string())?;

        Ok(DecisionTreeTrace {
            intent_id: self.intent_id.clone(),
            intent_label,
            decision: self.decision,
            confidence: self.confidence,
            path: self.path.clone(),
            top_features: self.top_features.clone(),
            counterfactual: self.counterfactual.clone(),
            feature_snapshot: self.feature_snapshot.clone(),
            timestamp: self.timestamp.clone(),
        })
    }
}

/// Batch response: per-item results plus upstream aggregates
///
/// Upstream aggregates are accepted but the engine recomputes its own.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResponse {
    pub results: Vec<BatchItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_applied: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_count: Option<usize>,
}

impl BatchResponse {
    /// Build a response from items, without upstream aggregates
    pub fn new(results: Vec<BatchItem>) -> Self {
        Self { results, ..Self::default() }
    }
}
