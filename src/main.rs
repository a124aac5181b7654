//! son-explain CLI
//!
//! Turns decision tree traces from the ES/MRO intent models into operator
//! explanations.
//!
//! # Usage
//!
//! ```bash
//! # Explain one decision
//! son-explain explain trace.json
//!
//! # Show the traversed path instead
//! son-explain explain trace.json --view path
//!
//! # Explain a batch response as JSON
//! son-explain batch batch.json --format json
//!
//! # Inspect the feature registries
//! son-explain registry --intent MRO
//! ```

use clap::Parser;
use son_explain::cli::{init_tracing, run_command, Cli, LogLevel};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(LogLevel::from_flags(cli.quiet, cli.verbose));

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
