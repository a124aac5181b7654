//! Narrative construction from a trace

use tracing::{debug, warn};

use super::types::{Narrative, NarrativeReport};
use crate::level::resolve_level;
use crate::registry::RegistrySet;
use crate::trace::DecisionTreeTrace;

const NEUTRAL_MARKER: &str = "neutral";

/// True when an impact text takes no stance on the decision
pub fn is_neutral_impact(impact: &str) -> bool {
    impact.to_lowercase().contains(NEUTRAL_MARKER)
}

/// Builds narratives against a set of registries
#[derive(Clone, Copy, Debug)]
pub struct NarrativeBuilder<'a> {
    registries: &'a RegistrySet,
}

impl<'a> NarrativeBuilder<'a> {
    pub fn new(registries: &'a RegistrySet) -> Self {
        Self { registries }
    }

    /// Interpret every split on the path.
    ///
    /// LEAF nodes are skipped before numbering. Steps whose feature has no
    /// registry entry are dropped and listed in `unmapped`; steps with a
    /// neutral impact are dropped and counted.
    pub fn build(&self, trace: &DecisionTreeTrace) -> NarrativeReport {
        let registry = self.registries.for_intent(&trace.intent_label);
        let mut report = NarrativeReport::default();

        for (i, node) in trace.split_nodes().enumerate() {
            let step = i + 1;

            let Some(context) = registry.and_then(|r| r.lookup(&node.feature_name)) else {
                warn!(
                    intent_id = %trace.intent_id,
                    intent = %trace.intent_label,
                    feature = %node.feature_name,
                    step,
                    "no feature context registered; step dropped"
                );
                report.unmapped.push(node.feature_name.clone());
                continue;
            };

            let level =
                resolve_level(node.feature_value, node.threshold, node.passed, &node.condition);
            let impact = context.decision_impact.get(level);
            debug!(step, feature = %node.feature_name, %level, impact, "resolved step");

            if is_neutral_impact(impact) {
                report.neutral_dropped += 1;
                continue;
            }

            report.narratives.push(Narrative {
                step,
                node_id: node.node_id,
                feature_name: node.feature_name.clone(),
                condition: node.condition.clone(),
                threshold: node.threshold,
                feature_value: node.feature_value,
                context: context.clone(),
                level,
                interpretation: context.interpretation.get(level).to_string(),
                impact: impact.to_string(),
                passed: node.passed,
            });
        }

        report
    }
}
