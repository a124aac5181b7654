//! Level resolution rules

use super::comparison::Comparison;
use super::QualitativeLevel;

/// Greater-than miss: above this ratio the value was "close" to the threshold
const GT_MISS_MEDIUM_RATIO: f64 = 0.7;
/// Less-or-equal miss: below this ratio the overshoot is moderate
const LE_MISS_MEDIUM_RATIO: f64 = 1.5;
/// Directionless fallback bands
const FALLBACK_HIGH_RATIO: f64 = 1.2;
const FALLBACK_MEDIUM_RATIO: f64 = 0.8;

/// `value / threshold`, with `+inf` for a zero threshold.
///
/// Mixed-sign inputs are divided as-is. NaN inputs give NaN, which fails
/// every band comparison in [`resolve_level`].
pub fn threshold_ratio(value: f64, threshold: f64) -> f64 {
    if threshold == 0.0 {
        f64::INFINITY
    } else {
        value / threshold
    }
}

/// Resolve the qualitative level of a feature at one split.
///
/// | comparison   | passed | level                                  |
/// |--------------|--------|----------------------------------------|
/// | `>`          | yes    | high                                   |
/// | `>`          | no     | medium if ratio > 0.7, else low        |
/// | `<=`         | yes    | low                                    |
/// | `<=`         | no     | medium if ratio < 1.5, else high       |
/// | none         | -      | high if ratio >= 1.2, medium if >= 0.8 |
///
/// The last row ignores `passed`. It is a legacy fallback for conditions
/// without a recognizable operator.
pub fn resolve_level(
    value: f64,
    threshold: f64,
    passed: bool,
    condition: &str,
) -> QualitativeLevel {
    let ratio = threshold_ratio(value, threshold);

    match Comparison::from_condition(condition) {
        Comparison::GreaterThan if passed => QualitativeLevel::High,
        Comparison::GreaterThan => {
            if ratio > GT_MISS_MEDIUM_RATIO {
                QualitativeLevel::Medium
            } else {
                QualitativeLevel::Low
            }
        }
        Comparison::LessOrEqual if passed => QualitativeLevel::Low,
        Comparison::LessOrEqual => {
            if ratio < LE_MISS_MEDIUM_RATIO {
                QualitativeLevel::Medium
            } else {
                QualitativeLevel::High
            }
        }
        Comparison::Unknown => {
            if ratio >= FALLBACK_HIGH_RATIO {
                QualitativeLevel::High
            } else if ratio >= FALLBACK_MEDIUM_RATIO {
                QualitativeLevel::Medium
            } else {
                QualitativeLevel::Low
            }
        }
    }
}
