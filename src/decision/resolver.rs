//! Verdict resolution and labeling

use crate::trace::{DecisionTreeTrace, IntentLabel};

/// Read the verdict encoded in a LEAF condition such as `LEAF: ES = True`.
///
/// Case-insensitive; `= true` is checked before `= false`.
pub fn parse_leaf_condition(condition: &str) -> Option<bool> {
    let condition = condition.to_lowercase();
    if condition.contains("= true") {
        Some(true)
    } else if condition.contains("= false") {
        Some(false)
    } else {
        None
    }
}

/// Final verdict of a trace, `None` when undeterminable.
pub fn resolve_decision(trace: &DecisionTreeTrace) -> Option<bool> {
    if let Some(decision) = trace.decision {
        return Some(decision);
    }
    trace.leaf().and_then(|leaf| parse_leaf_condition(&leaf.condition))
}

/// Display label for a verdict.
///
/// Intents without a registry are echoed unchanged.
pub fn decision_label(intent: &IntentLabel, decision: Option<bool>) -> String {
    if !intent.is_known() {
        return intent.to_string();
    }
    match decision {
        Some(true) => format!("Apply {intent}"),
        Some(false) => format!("Do not apply {intent}"),
        None => format!("Undetermined {intent} decision"),
    }
}
