//! Registry command implementation

use super::to_json;
use crate::config::{EngineConfig, OutputFormat, RegistryArgs};
use crate::error::{Error, Result};
use crate::explain::Explainer;
use crate::level::QualitativeLevel;
use crate::registry::{FeatureContext, FeatureRegistry};
use crate::trace::IntentLabel;

/// List registries, or describe the entry one feature name resolves to
pub fn run_registry(args: &RegistryArgs, config: &EngineConfig) -> Result<String> {
    let explainer = Explainer::from_config(config)?;
    let registries = explainer.registries();

    let intents = match &args.intent {
        Some(raw) => match raw.parse::<IntentLabel>() {
            Ok(intent) if intent.is_known() => vec![intent],
            _ => return Err(Error::ConfigError(format!("Unknown intent: {raw}. Valid intents: ES, MRO"))),
        },
        None => vec![IntentLabel::Es, IntentLabel::Mro],
    };
    let selected: Vec<&FeatureRegistry> =
        intents.iter().filter_map(|intent| registries.for_intent(intent)).collect();

    let format = args.format.unwrap_or(config.output.format);

    if let Some(feature) = &args.feature {
        let matches: Vec<(&IntentLabel, &FeatureContext)> = selected
            .iter()
            .filter_map(|registry| registry.lookup(feature).map(|ctx| (registry.intent(), ctx)))
            .collect();
        if matches.is_empty() {
            return Ok(format!("No registry entry for {feature:?}\n"));
        }
        return match format {
            OutputFormat::Json => {
                let contexts: Vec<_> = matches.iter().map(|(_, ctx)| *ctx).collect();
                to_json(&contexts, "feature context")
            }
            OutputFormat::Text => {
                Ok(matches.iter().map(|(intent, ctx)| format_context(intent, ctx)).collect())
            }
        };
    }

    match format {
        OutputFormat::Json => {
            let files: Vec<_> = selected.iter().map(|registry| registry.to_file()).collect();
            to_json(&files, "registry")
        }
        OutputFormat::Text => Ok(selected.iter().map(|registry| format_registry(registry)).collect()),
    }
}

fn format_registry(registry: &FeatureRegistry) -> String {
    let mut out = format!("{} registry ({} features):\n", registry.intent(), registry.len());
    for ctx in registry.contexts() {
        let block = if ctx.is_hard_block { " [HARD CONSTRAINT]" } else { "" };
        out.push_str(&format!("  {}{block} - {}\n", ctx.name, ctx.role));
        if !ctx.aliases.is_empty() {
            out.push_str(&format!("    aliases: {}\n", ctx.aliases.join(", ")));
        }
    }
    out
}

fn format_context(intent: &IntentLabel, ctx: &FeatureContext) -> String {
    let mut out = format!("{} / {} ({})\n", intent, ctx.name, ctx.role);
    out.push_str(&format!("  {}\n", ctx.intent));
    if ctx.is_hard_block {
        out.push_str("  Hard safety constraint: can veto the action\n");
    }
    for level in QualitativeLevel::ALL {
        out.push_str(&format!(
            "  {level:<6} {} | {}\n",
            ctx.interpretation.get(level),
            ctx.decision_impact.get(level)
        ));
    }
    out
}
