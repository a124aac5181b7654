//! Level command implementation

use crate::config::LevelArgs;
use crate::level::{resolve_level, threshold_ratio, Comparison};

/// Resolve and describe one observation
pub fn run_level(args: &LevelArgs) -> String {
    let comparison = Comparison::from_condition(&args.condition);
    let level = resolve_level(args.value, args.threshold, args.passed, &args.condition);
    let ratio = threshold_ratio(args.value, args.threshold);

    format!(
        "Level: {level}\n  Comparison: {}\n  Ratio: {ratio:.4}\n  Passed: {}\n",
        comparison.symbol(),
        args.passed
    )
}
