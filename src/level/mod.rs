//! Qualitative Level Resolution
//!
//! Discretizes a feature value into high / medium / low relative to the
//! threshold it was compared against and the direction of that comparison.

mod comparison;
mod resolver;

#[cfg(test)]
mod tests;

pub use comparison::Comparison;
pub use resolver::{resolve_level, threshold_ratio};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete feature level
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualitativeLevel {
    High,
    Medium,
    Low,
}

impl QualitativeLevel {
    /// All levels, high first
    pub const ALL: [QualitativeLevel; 3] =
        [QualitativeLevel::High, QualitativeLevel::Medium, QualitativeLevel::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            QualitativeLevel::High => "high",
            QualitativeLevel::Medium => "medium",
            QualitativeLevel::Low => "low",
        }
    }
}

impl fmt::Display for QualitativeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
