//! Comparison direction recovered from free-text conditions.

use serde::{Deserialize, Serialize};

/// Direction of the split comparison
///
/// Upstream traces only carry the condition as text, so the direction is
/// recovered by substring matching. This is the single place that parses it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// `>` (also matches `>=`)
    GreaterThan,
    /// `<=` (also matches a bare `<`)
    LessOrEqual,
    /// No directional marker found
    Unknown,
}

impl Comparison {
    /// Recover the direction from a condition such as `PRB_Utilization > 80.0`.
    ///
    /// `>` is checked first, so a text carrying both markers counts as
    /// greater-than.
    pub fn from_condition(condition: &str) -> Self {
        if condition.contains('>') {
            Comparison::GreaterThan
        } else if condition.contains('<') {
            Comparison::LessOrEqual
        } else {
            Comparison::Unknown
        }
    }

    /// Operator as displayed
    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::GreaterThan => ">",
            Comparison::LessOrEqual => "<=",
            Comparison::Unknown => "?",
        }
    }
}
