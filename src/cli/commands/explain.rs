//! Explain command implementation

use super::{read_input, to_json};
use crate::config::{EngineConfig, ExplainArgs, OutputFormat};
use crate::error::{Error, Result};
use crate::explain::{Explainer, Explanation};
use crate::panel::{ExplanationPanel, PanelState};
use crate::trace::DecisionTreeTrace;

/// Explain one trace file and return the rendered output
pub fn run_explain(args: &ExplainArgs, config: &EngineConfig) -> Result<String> {
    let input = read_input(&args.trace)?;
    let trace: DecisionTreeTrace = serde_json::from_str(&input).map_err(|e| Error::json("trace", e))?;

    let explanation = Explainer::from_config(config)?.explain(&trace)?;

    match args.format.unwrap_or(config.output.format) {
        OutputFormat::Json => to_json(&explanation, "explanation"),
        OutputFormat::Text => Ok(format_explanation(&explanation, args)),
    }
}

/// Render the panel view selected by the arguments
pub fn format_explanation(explanation: &Explanation, args: &ExplainArgs) -> String {
    let mut state = PanelState::new().with_tab(args.view.into());
    if args.expand_all {
        state.expand_all(explanation.narratives().iter().map(|n| n.step));
    }
    ExplanationPanel::render(explanation, &state)
}
