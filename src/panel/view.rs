//! Text views

use super::state::{PanelState, PanelTab};
use crate::explain::Explanation;
use crate::narrative::Narrative;

/// Renders the active view of an explanation
#[derive(Clone, Copy, Debug)]
pub struct ExplanationPanel<'a> {
    explanation: &'a Explanation,
}

impl<'a> ExplanationPanel<'a> {
    pub fn new(explanation: &'a Explanation) -> Self {
        Self { explanation }
    }

    /// Text of the tab selected in `state`
    pub fn render(explanation: &Explanation, state: &PanelState) -> String {
        let panel = ExplanationPanel::new(explanation);
        match state.active_tab {
            PanelTab::Explanation => panel.explanation_view(state),
            PanelTab::RawPath => panel.raw_path_view(),
        }
    }

    /// Verdict, key factors and pass-through hints
    pub fn explanation_view(&self, state: &PanelState) -> String {
        let e = self.explanation;
        let mut out = format!("Decision: {}", e.label);
        if e.is_undetermined() && !e.label.to_lowercase().contains("undetermined") {
            out.push_str(" (undetermined)");
        }
        out.push('\n');
        out.push_str(&format!("Cell: {} [{}]\n", e.intent_id, e.intent_label));
        if let Some(confidence) = e.confidence {
            out.push_str(&format!("Confidence: {:.1}%\n", confidence * 100.0));
        }

        let count = e.key_factor_count();
        let noun = if count == 1 { "factor" } else { "factors" };
        out.push_str(&format!("\n{count} key {noun} considered\n"));

        if e.narratives().is_empty() {
            out.push_str("  No notable factors\n");
        }
        for narrative in e.narratives() {
            push_narrative(&mut out, narrative, state.is_expanded(narrative.step));
        }

        if !e.report.unmapped.is_empty() {
            out.push_str(&format!("\nNot interpreted: {}\n", e.report.unmapped.join(", ")));
        }

        if !e.top_features.is_empty() {
            out.push_str("\nTop features:\n");
            for feature in &e.top_features {
                out.push_str(&format!(
                    "  {}: {:.4} (importance {:.3})\n",
                    feature.name, feature.value, feature.importance
                ));
            }
        }

        if !e.counterfactual.is_empty() {
            out.push_str("\nWhat would change the decision:\n");
            for hint in &e.counterfactual {
                out.push_str(&format!(
                    "  {}: {:.4} -> {:.4} flips toward {}\n",
                    hint.feature, hint.current_value, hint.threshold_value, hint.alternative_intent
                ));
            }
        }

        out
    }

    /// The traversed path as a tree
    pub fn raw_path_view(&self) -> String {
        let e = self.explanation;
        let mut out = format!("Decision path for {} ({} nodes):\n", e.intent_id, e.tree.len());
        out.push_str(&e.tree.render_text());
        out
    }
}

fn push_narrative(out: &mut String, narrative: &Narrative, expanded: bool) {
    let marker = if expanded { "-" } else { "+" };
    let block = if narrative.is_hard_block() { " [HARD CONSTRAINT]" } else { "" };
    out.push_str(&format!(
        "  {marker} {}. {}{block}: {} -> {}\n",
        narrative.step, narrative.context.name, narrative.level, narrative.impact
    ));

    if expanded {
        out.push_str(&format!("       {}\n", narrative.interpretation));
        out.push_str(&format!("       Role: {}\n", narrative.context.role));
        out.push_str(&format!(
            "       Value {:.4} vs threshold {:.4} ({})\n",
            narrative.feature_value, narrative.threshold, narrative.condition
        ));
        out.push_str(&format!("       Measures: {}\n", narrative.context.intent));
    }
}
