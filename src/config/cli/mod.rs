//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! son-explain explain trace.json
//! son-explain explain trace.json --view path
//! son-explain batch batch.json --format json
//! son-explain registry --intent ES --feature "Persistent Low Load Score"
//! son-explain level --value 0.9 --threshold 0.4 --condition "Traffic_Volatility_Index <= 0.4"
//! ```

mod core;
mod types;


pub use core::{parse_args, BatchArgs, Cli, Command, ExplainArgs, LevelArgs, RegistryArgs};
pub use types::ViewArg;
