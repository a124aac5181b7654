//! Full explanation record for one cell decision.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::error::TraceError;
use super::node::DecisionNode;

/// Optimization objective a decision pertains to
///
/// Unrecognized labels are kept verbatim so newer upstream intents pass
/// through instead of failing deserialization.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IntentLabel {
    /// Energy Saving
    Es,
    /// Mobility Robustness Optimization
    Mro,
    /// Any other upstream intent
    Other(String),
}

impl IntentLabel {
    /// Wire/display form of the label
    pub fn as_str(&self) -> &str {
        match self {
            IntentLabel::Es => "ES",
            IntentLabel::Mro => "MRO",
            IntentLabel::Other(label) => label,
        }
    }

    /// True for the intents this engine carries registries for
    pub fn is_known(&self) -> bool {
        !matches!(self, IntentLabel::Other(_))
    }
}

/// Known labels match case-insensitively; other labels keep their spelling.
impl From<String> for IntentLabel {
    fn from(label: String) -> Self {
        if label.eq_ignore_ascii_case("ES") {
            IntentLabel::Es
        } else if label.eq_ignore_ascii_case("MRO") {
            IntentLabel::Mro
        } else {
            IntentLabel::Other(label)
        }
    }
}

impl From<&str> for IntentLabel {
    fn from(label: &str) -> Self {
        IntentLabel::from(label.to_string())
    }
}

impl From<IntentLabel> for String {
    fn from(label: IntentLabel) -> Self {
        match label {
            IntentLabel::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl std::str::FromStr for IntentLabel {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(IntentLabel::from(s))
    }
}

impl fmt::Display for IntentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upstream feature importance entry (pass-through)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopFeature {
    pub name: String,
    pub value: f64,
    pub importance: f64,
}

/// Upstream boundary hint: how far a feature sits from flipping the intent (pass-through)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterfactualHint {
    pub feature: String,
    pub current_value: f64,
    pub threshold_value: f64,
    pub alternative_intent: String,
}

/// Decision tree trace for one cell (or one batch item)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionTreeTrace {
    /// Subject identifier (cell or batch item)
    pub intent_id: String,
    /// Selects the feature registry
    pub intent_label: IntentLabel,
    /// Authoritative verdict, when the classifier supplied one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision: Option<bool>,
    /// Classifier confidence in [0, 1]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Traversed nodes, root to leaf
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
}

impl DecisionTreeTrace {
    /// Create a trace with no pass-through payloads
    pub fn new(
        intent_id: impl Into<String>,
        intent_label: IntentLabel,
        path: Vec<DecisionNode>,
    ) -> Self {
        Self {
            intent_id: intent_id.into(),
            intent_label,
            decision: None,
            confidence: None,
            path,
            top_features: Vec::new(),
            counterfactual: Vec::new(),
            feature_snapshot: BTreeMap::new(),
            timestamp: None,
        }
    }

    /// Set the authoritative decision
    pub fn with_decision(mut self, decision: bool) -> Self {
        self.decision = Some(decision);
        self
    }

    /// Set the classifier confidence
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Check the path contract: non-empty, at most one LEAF, LEAF last.
    pub fn validate(&self) -> Result<(), TraceError> {
        let len = self.path.len();
        if len == 0 {
            return Err(TraceError::EmptyPath);
        }

        let leaves: Vec<usize> = self
            .path
            .iter()
            .enumerate()
            .filter(|(_, node)| node.is_leaf())
            .map(|(i, _)| i)
            .collect();

        match leaves.as_slice() {
            [] => Ok(()),
            [index] if *index == len - 1 => Ok(()),
            [index] => Err(TraceError::LeafNotLast { index: *index, len }),
            many => Err(TraceError::MultipleLeaves { count: many.len() }),
        }
    }

    /// The terminal LEAF node, if present
    pub fn leaf(&self) -> Option<&DecisionNode> {
        self.path.iter().find(|node| node.is_leaf())
    }

    /// Path nodes carrying feature semantics (LEAF excluded), in order
    pub fn split_nodes(&self) -> impl Iterator<Item = &DecisionNode> {
        self.path.iter().filter(|node| !node.is_leaf())
    }
}
