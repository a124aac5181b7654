//! Tests for qualitative level resolution

use super::*;
use approx::assert_abs_diff_eq;
use proptest::prelude::*;

#[test]
fn test_comparison_from_condition() {
    assert_eq!(Comparison::from_condition("PRB_Utilization > 80.0"), Comparison::GreaterThan);
    assert_eq!(Comparison::from_condition("x >= 1"), Comparison::GreaterThan);
    assert_eq!(Comparison::from_condition("Traffic_Volatility_Index <= 0.4"), Comparison::LessOrEqual);
    assert_eq!(Comparison::from_condition("x < 2"), Comparison::LessOrEqual);
    assert_eq!(Comparison::from_condition("x == 2"), Comparison::Unknown);
    assert_eq!(Comparison::from_condition(""), Comparison::Unknown);
}

#[test]
fn test_greater_than_passed_is_high() {
    let level = resolve_level(0.85, 0.6, true, "Persistent_Low_Load_Score > 0.6");
    assert_eq!(level, QualitativeLevel::High);
}

#[test]
fn test_greater_than_failed_near_threshold_is_medium() {
    // 0.5 / 0.6 = 0.833 > 0.7
    assert_eq!(resolve_level(0.5, 0.6, false, "x > 0.6"), QualitativeLevel::Medium);
}

#[test]
fn test_greater_than_failed_far_below_is_low() {
    // 0.3 / 0.6 = 0.5
    assert_eq!(resolve_level(0.3, 0.6, false, "x > 0.6"), QualitativeLevel::Low);
}

#[test]
fn test_greater_than_failed_exactly_at_ratio_boundary_is_low() {
    // ratio must be strictly above 0.7
    assert_eq!(resolve_level(0.7, 1.0, false, "x > 1.0"), QualitativeLevel::Low);
}

#[test]
fn test_less_or_equal_passed_is_low() {
    assert_eq!(resolve_level(0.1, 0.4, true, "x <= 0.4"), QualitativeLevel::Low);
}

#[test]
fn test_less_or_equal_failed_large_overshoot_is_high() {
    // 0.9 / 0.4 = 2.25 >= 1.5
    assert_abs_diff_eq!(threshold_ratio(0.9, 0.4), 2.25, epsilon = 1e-12);
    let level = resolve_level(0.9, 0.4, false, "Traffic_Volatility_Index <= 0.4");
    assert_eq!(level, QualitativeLevel::High);
}

#[test]
fn test_less_or_equal_failed_small_overshoot_is_medium() {
    // 0.5 / 0.4 = 1.25 < 1.5
    assert_eq!(resolve_level(0.5, 0.4, false, "x <= 0.4"), QualitativeLevel::Medium);
}

#[test]
fn test_less_or_equal_failed_exactly_at_boundary_is_high() {
    assert_eq!(resolve_level(1.5, 1.0, false, "x <= 1.0"), QualitativeLevel::High);
}

// The directionless fallback has no known upstream condition format. These
// pin its behavior so any change to it is deliberate.

#[test]
fn test_fallback_ignores_passed_flag() {
    for passed in [true, false] {
        assert_eq!(resolve_level(1.2, 1.0, passed, "x ~ 1.0"), QualitativeLevel::High);
        assert_eq!(resolve_level(0.8, 1.0, passed, "x ~ 1.0"), QualitativeLevel::Medium);
        assert_eq!(resolve_level(0.79, 1.0, passed, "x ~ 1.0"), QualitativeLevel::Low);
    }
}

#[test]
fn test_zero_threshold_ratio_is_positive_infinity() {
    assert!(threshold_ratio(3.0, 0.0).is_infinite());
    assert!(threshold_ratio(3.0, 0.0) > 0.0);
    assert!(threshold_ratio(-3.0, 0.0) > 0.0);
    assert!(threshold_ratio(0.0, 0.0) > 0.0);
    assert!(threshold_ratio(0.0, -0.0) > 0.0);
}

#[test]
fn test_zero_threshold_takes_high_branch_of_each_rule() {
    // n_alarm > 0.0 with no alarms: failed greater-than, ratio +inf > 0.7
    assert_eq!(resolve_level(0.0, 0.0, false, "n_alarm > 0.00"), QualitativeLevel::Medium);
    assert_eq!(resolve_level(2.0, 0.0, true, "n_alarm > 0.00"), QualitativeLevel::High);
    assert_eq!(resolve_level(2.0, 0.0, false, "n_alarm <= 0.00"), QualitativeLevel::High);
    assert_eq!(resolve_level(0.0, 0.0, false, "n_alarm"), QualitativeLevel::High);
}

#[test]
fn test_negative_threshold_uses_formula_unmodified() {
    // Weather Sensitivity Score ranges over [-1, 1]. A value well below a
    // negative threshold still yields a ratio above 0.7: -0.8 / -0.5 = 1.6.
    // Medium is the documented (counter-intuitive) outcome.
    let level = resolve_level(-0.8, -0.5, false, "Weather Sensitivity Score > -0.50");
    assert_eq!(level, QualitativeLevel::Medium);
}

#[test]
fn test_mixed_sign_ratio_is_negative() {
    // 0.3 / -0.2 = -1.5: below every band
    assert_abs_diff_eq!(threshold_ratio(0.3, -0.2), -1.5, epsilon = 1e-12);
    assert_eq!(resolve_level(0.3, -0.2, false, "x <= -0.2"), QualitativeLevel::Medium);
    assert_eq!(resolve_level(0.3, -0.2, false, "x ~ -0.2"), QualitativeLevel::Low);
}

#[test]
fn test_nan_value_is_deterministic() {
    assert_eq!(resolve_level(f64::NAN, 1.0, false, "x > 1"), QualitativeLevel::Low);
    assert_eq!(resolve_level(f64::NAN, 1.0, false, "x <= 1"), QualitativeLevel::High);
    assert_eq!(resolve_level(f64::NAN, 1.0, false, "x"), QualitativeLevel::Low);
}

#[test]
fn test_level_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&QualitativeLevel::Medium).unwrap(), "\"medium\"");
    assert_eq!(QualitativeLevel::High.to_string(), "high");
}

proptest! {
    #[test]
    fn prop_greater_than_passed_always_high(
        value in -1000.0f64..1000.0,
        threshold in -1000.0f64..1000.0,
        prefix in "[A-Za-z_ ]{0,20}",
    ) {
        let condition = format!("{prefix} > {threshold:.2}");
        prop_assert_eq!(resolve_level(value, threshold, true, &condition), QualitativeLevel::High);
    }

    #[test]
    fn prop_less_or_equal_passed_always_low(
        value in -1000.0f64..1000.0,
        threshold in -1000.0f64..1000.0,
        prefix in "[A-Za-z_ ]{0,20}",
    ) {
        let condition = format!("{prefix} <= {threshold:.2}");
        prop_assert_eq!(resolve_level(value, threshold, true, &condition), QualitativeLevel::Low);
    }

    #[test]
    fn prop_greater_than_failed_never_high(
        value in -1000.0f64..1000.0,
        threshold in -1000.0f64..1000.0,
    ) {
        let level = resolve_level(value, threshold, false, "x > t");
        prop_assert_ne!(level, QualitativeLevel::High);
    }

    #[test]
    fn prop_less_or_equal_failed_never_low(
        value in -1000.0f64..1000.0,
        threshold in -1000.0f64..1000.0,
    ) {
        let level = resolve_level(value, threshold, false, "x <= t");
        prop_assert_ne!(level, QualitativeLevel::Low);
    }
}
