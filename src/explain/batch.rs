//! Batch explanation results

use serde::{Deserialize, Serialize};

use super::explanation::Explanation;

/// Result for one batch item
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchOutcome {
    Explained(Explanation),
    /// Upstream error or malformed trace; never interpreted
    Failed {
        #[serde(rename = "intentId")]
        intent_id: String,
        error: String,
    },
}

impl BatchOutcome {
    pub fn intent_id(&self) -> &str {
        match self {
            BatchOutcome::Explained(explanation) => &explanation.intent_id,
            BatchOutcome::Failed { intent_id, .. } => intent_id,
        }
    }

    pub fn explanation(&self) -> Option<&Explanation> {
        match self {
            BatchOutcome::Explained(explanation) => Some(explanation),
            BatchOutcome::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            BatchOutcome::Explained(_) => None,
            BatchOutcome::Failed { error, .. } => Some(error),
        }
    }
}

/// Aggregate counts, recomputed from the outcomes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchTotals {
    pub total: usize,
    pub applied: usize,
    pub not_applied: usize,
    pub undetermined: usize,
    pub errors: usize,
}

impl BatchTotals {
    pub fn from_outcomes(outcomes: &[BatchOutcome]) -> Self {
        let mut totals = Self { total: outcomes.len(), ..Self::default() };
        for outcome in outcomes {
            match outcome {
                BatchOutcome::Explained(e) => match e.decision {
                    Some(true) => totals.applied += 1,
                    Some(false) => totals.not_applied += 1,
                    None => totals.undetermined += 1,
                },
                BatchOutcome::Failed { .. } => totals.errors += 1,
            }
        }
        totals
    }
}

/// Per-item outcomes in input order plus totals
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub outcomes: Vec<BatchOutcome>,
    pub totals: BatchTotals,
}

impl BatchReport {
    pub fn new(outcomes: Vec<BatchOutcome>) -> Self {
        let totals = BatchTotals::from_outcomes(&outcomes);
        Self { outcomes, totals }
    }

    pub fn explanations(&self) -> impl Iterator<Item = &Explanation> {
        self.outcomes.iter().filter_map(BatchOutcome::explanation)
    }

    pub fn failures(&self) -> impl Iterator<Item = &BatchOutcome> {
        self.outcomes.iter().filter(|o| o.error().is_some())
    }
}
