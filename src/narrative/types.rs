//! Narrative records

use serde::{Deserialize, Serialize};

use crate::level::QualitativeLevel;
use crate::registry::FeatureContext;

/// One interpreted decision-path step
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Narrative {
    /// 1-based position in the path with the LEAF removed
    pub step: usize,
    pub node_id: i64,
    /// Raw upstream feature name
    pub feature_name: String,
    pub condition: String,
    pub threshold: f64,
    pub feature_value: f64,
    pub context: FeatureContext,
    pub level: QualitativeLevel,
    /// `context.interpretation[level]`
    pub interpretation: String,
    /// `context.decision_impact[level]`
    pub impact: String,
    /// Branch taken at this node
    pub passed: bool,
}

impl Narrative {
    /// The feature can veto the action
    pub fn is_hard_block(&self) -> bool {
        self.context.is_hard_block
    }
}

/// Narratives for one trace plus what was left out and why
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NarrativeReport {
    /// Surviving narratives in path order
    pub narratives: Vec<Narrative>,
    /// Feature names with no registry entry (steps dropped)
    pub unmapped: Vec<String>,
    /// Steps dropped for a neutral impact
    pub neutral_dropped: usize,
}

impl NarrativeReport {
    /// Number of key factors considered
    pub fn key_factor_count(&self) -> usize {
        self.narratives.len()
    }

    /// No notable factors
    pub fn is_empty(&self) -> bool {
        self.narratives.is_empty()
    }

    /// Surviving narratives on hard safety constraints
    pub fn hard_constraints(&self) -> impl Iterator<Item = &Narrative> {
        self.narratives.iter().filter(|n| n.is_hard_block())
    }
}
