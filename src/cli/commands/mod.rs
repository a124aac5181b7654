//! CLI command implementations

mod batch;
mod explain;
mod level;
mod registry;


use std::io::Read;
use std::path::Path;

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, Cli, Command, EngineConfig};
use crate::error::{Error, Result};

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> std::result::Result<(), String> {
    let log_level = LogLevel::from_flags(cli.quiet, cli.verbose);

    let config = match &cli.config {
        Some(path) => {
            let config = load_config(path).map_err(|e| e.to_string())?;
            log(log_level, LogLevel::Verbose, &format!("✓ Config loaded: {}", path.display()));
            config
        }
        None => EngineConfig::default(),
    };

    let output = match cli.command {
        Command::Explain(args) => explain::run_explain(&args, &config),
        Command::Batch(args) => batch::run_batch(&args, &config),
        Command::Registry(args) => registry::run_registry(&args, &config),
        Command::Level(args) => Ok(level::run_level(&args)),
    }
    .map_err(|e| e.to_string())?;

    print!("{output}");
    Ok(())
}

/// Read a JSON input file, or stdin for `-`
fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(|e| Error::io(path, e))?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).map_err(|e| Error::io(path, e))
    }
}

/// Serialize command output as pretty JSON with a trailing newline
fn to_json<T: serde::Serialize>(value: &T, what: &str) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).map_err(|e| Error::json(what, e))?;
    json.push('\n');
    Ok(json)
}
