//! Batch command implementation

use tracing::warn;

use super::{read_input, to_json};
use crate::config::{BatchArgs, EngineConfig, OutputFormat};
use crate::error::{Error, Result};
use crate::explain::{BatchOutcome, BatchReport, Explainer};
use crate::panel::{ExplanationPanel, PanelState};
use crate::trace::BatchResponse;

/// Explain a batch response file and return the rendered output
pub fn run_batch(args: &BatchArgs, config: &EngineConfig) -> Result<String> {
    let input = read_input(&args.batch)?;
    let batch: BatchResponse = serde_json::from_str(&input).map_err(|e| Error::json("batch", e))?;

    let report = Explainer::from_config(config)?.explain_batch(&batch);
    check_upstream_totals(&batch, &report);

    match args.format.unwrap_or(config.output.format) {
        OutputFormat::Json => to_json(&report, "batch report"),
        OutputFormat::Text => Ok(format_batch(&report)),
    }
}

/// Upstream aggregates are informational; disagreement is only reported.
fn check_upstream_totals(batch: &BatchResponse, report: &BatchReport) {
    let totals = &report.totals;
    let checks = [
        ("total", batch.total, totals.total),
        ("applied", batch.applied, totals.applied),
        ("notApplied", batch.not_applied, totals.not_applied),
        ("errorCount", batch.error_count, totals.errors),
    ];
    for (field, upstream, computed) in checks {
        if let Some(upstream) = upstream.filter(|&u| u != computed) {
            warn!(field, upstream, computed, "upstream batch aggregate disagrees with recomputed count");
        }
    }
}

/// Summary line, the failed item ids, then one collapsed panel per item
pub fn format_batch(report: &BatchReport) -> String {
    let t = &report.totals;
    let mut out = format!(
        "Batch: {} items ({} apply, {} do not apply, {} undetermined, {} errors)\n",
        t.total, t.applied, t.not_applied, t.undetermined, t.errors
    );

    let failed: Vec<_> = report.failures().map(BatchOutcome::intent_id).collect();
    if !failed.is_empty() {
        out.push_str(&format!("Failed: {}\n", failed.join(", ")));
    }

    let state = PanelState::new();
    for outcome in &report.outcomes {
        out.push_str(&format!("\n=== {} ===\n", outcome.intent_id()));
        match outcome {
            BatchOutcome::Explained(explanation) => {
                out.push_str(&ExplanationPanel::render(explanation, &state));
            }
            BatchOutcome::Failed { error, .. } => {
                out.push_str(&format!("Error: {error}\n"));
            }
        }
    }
    out
}
