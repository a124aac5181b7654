//! Explainer

use tracing::{debug, info};

use super::batch::{BatchOutcome, BatchReport};
use super::explanation::Explanation;
use crate::config::EngineConfig;
use crate::decision::{decision_label, resolve_decision};
use crate::error::Result;
use crate::narrative::NarrativeBuilder;
use crate::registry::{FeatureRegistry, RegistrySet};
use crate::render::PathTree;
use crate::trace::{BatchItem, BatchResponse, DecisionTreeTrace, IntentLabel};

/// Explains traces against a fixed set of registries
#[derive(Clone, Debug, Default)]
pub struct Explainer {
    registries: RegistrySet,
    /// Explain batch items in parallel (requires the `parallel` feature)
    parallel: bool,
}

impl Explainer {
    /// Explainer over the built-in ES and MRO registries
    pub fn builtin() -> Self {
        Self::new(RegistrySet::builtin())
    }

    pub fn new(registries: RegistrySet) -> Self {
        Self { registries, parallel: false }
    }

    /// Build from a validated config, loading any registry overrides.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let mut registries = RegistrySet::builtin();

        for (intent, path) in [
            (IntentLabel::Es, config.registry.es.as_ref()),
            (IntentLabel::Mro, config.registry.mro.as_ref()),
        ] {
            if let Some(path) = path {
                let registry = FeatureRegistry::load(path)?;
                info!(intent = %intent, path = %path.display(), features = registry.len(), "loaded registry override");
                registries = registries.with_registry(intent, registry)?;
            }
        }

        Ok(Self::new(registries).with_parallel(config.explain.parallel_batch))
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn registries(&self) -> &RegistrySet {
        &self.registries
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Explain one trace.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Trace`] when the path is empty or its LEAF is
    /// misplaced. Unmapped features are not errors.
    pub fn explain(&self, trace: &DecisionTreeTrace) -> Result<Explanation> {
        trace.validate()?;

        let report = NarrativeBuilder::new(&self.registries).build(trace);
        let decision = resolve_decision(trace);
        let label = decision_label(&trace.intent_label, decision);
        let tree = PathTree::build(&trace.path, decision);

        debug!(
            intent_id = %trace.intent_id,
            label = %label,
            key_factors = report.key_factor_count(),
            "explained trace"
        );

        Ok(Explanation {
            intent_id: trace.intent_id.clone(),
            intent_label: trace.intent_label.clone(),
            decision,
            label,
            confidence: trace.confidence,
            report,
            tree,
            top_features: trace.top_features.clone(),
            counterfactual: trace.counterfactual.clone(),
            feature_snapshot: trace.feature_snapshot.clone(),
            timestamp: trace.timestamp.clone(),
        })
    }

    /// Explain every batch item; failures stay local to their item.
    ///
    /// Outcomes are in input order whether or not items run in parallel.
    pub fn explain_batch(&self, batch: &BatchResponse) -> BatchReport {
        let outcomes = self.explain_items(&batch.results);
        let report = BatchReport::new(outcomes);

        info!(
            total = report.totals.total,
            applied = report.totals.applied,
            not_applied = report.totals.not_applied,
            undetermined = report.totals.undetermined,
            errors = report.totals.errors,
            "explained batch"
        );
        report
    }

    fn explain_item(&self, item: &BatchItem) -> BatchOutcome {
        let explained = item
            .to_trace()
            .and_then(|trace| self.explain(&trace).map_err(|e| e.to_string()));

        match explained {
            Ok(explanation) => BatchOutcome::Explained(explanation),
            Err(error) => {
                debug!(intent_id = %item.intent_id, error = %error, "batch item not explained");
                BatchOutcome::Failed { intent_id: item.intent_id.clone(), error }
            }
        }
    }

    #[cfg(feature = "parallel")]
    fn explain_items(&self, items: &[BatchItem]) -> Vec<BatchOutcome> {
        use rayon::prelude::*;

        if self.parallel {
            items.par_iter().map(|item| self.explain_item(item)).collect()
        } else {
            items.iter().map(|item| self.explain_item(item)).collect()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn explain_items(&self, items: &[BatchItem]) -> Vec<BatchOutcome> {
        if self.parallel {
            debug!("parallel batch requested without the parallel feature; running sequentially");
        }
        items.iter().map(|item| self.explain_item(item)).collect()
    }
}
