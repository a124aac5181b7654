//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::ViewArg;
use crate::config::OutputFormat;

/// son-explain: decision explanations for ES/MRO self-optimization
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "son-explain")]
#[command(version)]
#[command(
    about = "Explain Energy Saving and Mobility Robustness decisions from decision tree traces"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Engine configuration file (YAML)
    #[arg(short, long, global = true, value_name = "YAML")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Explain a single decision trace
    Explain(ExplainArgs),

    /// Explain every item of a batch response
    Batch(BatchArgs),

    /// List feature registry entries
    Registry(RegistryArgs),

    /// Resolve the qualitative level of one observation
    Level(LevelArgs),
}

/// Arguments for the explain command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ExplainArgs {
    /// Trace JSON file ("-" reads stdin)
    #[arg(value_name = "TRACE")]
    pub trace: PathBuf,

    /// Panel view (explanation, path)
    #[arg(long, default_value = "explanation")]
    pub view: ViewArg,

    /// Show details for every key factor
    #[arg(short, long)]
    pub expand_all: bool,

    /// Output format (text, json); defaults to the config value
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the batch command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct BatchArgs {
    /// Batch response JSON file ("-" reads stdin)
    #[arg(value_name = "BATCH")]
    pub batch: PathBuf,

    /// Output format (text, json); defaults to the config value
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the registry command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct RegistryArgs {
    /// Only this intent (ES, MRO)
    #[arg(short, long)]
    pub intent: Option<String>,

    /// Look up one raw feature name
    #[arg(long, value_name = "NAME")]
    pub feature: Option<String>,

    /// Output format (text, json); defaults to the config value
    #[arg(long)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the level command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct LevelArgs {
    /// Observed feature value
    #[arg(long, allow_hyphen_values = true)]
    pub value: f64,

    /// Split threshold
    #[arg(long, allow_hyphen_values = true)]
    pub threshold: f64,

    /// Split condition text, e.g. "Load > 0.6"
    #[arg(long)]
    pub condition: String,

    /// The comparison held (branch taken)
    #[arg(long)]
    pub passed: bool,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
