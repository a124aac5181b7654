//! A single traversed node.

use serde::{Deserialize, Serialize};

/// Feature name reserved for the terminal node.
pub const LEAF_FEATURE: &str = "LEAF";

/// One evaluated split on the decision path
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionNode {
    /// Tree-internal node id (display only)
    pub node_id: i64,
    /// Feature compared at this node, or `LEAF` for the terminal node
    pub feature_name: String,
    /// Free-text comparison, e.g. `Traffic Volatility Index > 0.40`
    pub condition: String,
    /// Threshold the feature was compared against
    pub threshold: f64,
    /// Observed feature value at decision time
    pub feature_value: f64,
    /// Whether the comparison evaluated true
    pub passed: bool,
}

impl DecisionNode {
    /// Create a split node
    pub fn split(
        node_id: i64,
        feature_name: impl Into<String>,
        condition: impl Into<String>,
        threshold: f64,
        feature_value: f64,
        passed: bool,
    ) -> Self {
        Self {
            node_id,
            feature_name: feature_name.into(),
            condition: condition.into(),
            threshold,
            feature_value,
            passed,
        }
    }

    /// Create the terminal node carrying the encoded verdict
    pub fn leaf(node_id: i64, condition: impl Into<String>) -> Self {
        Self {
            node_id,
            feature_name: LEAF_FEATURE.to_string(),
            condition: condition.into(),
            threshold: 0.0,
            feature_value: 0.0,
            passed: true,
        }
    }

    /// True for the terminal marker node
    pub fn is_leaf(&self) -> bool {
        self.feature_name == LEAF_FEATURE
    }
}
