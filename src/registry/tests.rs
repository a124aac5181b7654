//! Tests for the feature context registries

use super::*;
use crate::level::QualitativeLevel;
use crate::trace::IntentLabel;
use std::io::Write;

#[test]
fn test_normalize_feature_name() {
    assert_eq!(normalize_feature_name("Persistent Low Load"), "persistent_low_load");
    assert_eq!(normalize_feature_name("Traffic_Volatility_Index"), "traffic_volatility_index");
    assert_eq!(normalize_feature_name("Congestion-Induced HO Risk"), "congestion_induced_ho_risk");
    assert_eq!(normalize_feature_name("  weather -_ sensitivity  "), "weather_sensitivity");
    assert_eq!(normalize_feature_name("__n_alarm__"), "n_alarm");
    assert_eq!(normalize_feature_name("- _"), "");
}

#[test]
fn test_normalize_trims_edge_separators() {
    assert_eq!(normalize_feature_name(" Persistent Low Load"), "persistent_low_load");
    assert_eq!(normalize_feature_name("Persistent Low Load_ "), "persistent_low_load");
    assert_eq!(normalize_feature_name("-Persistent--Low  Load-"), "persistent_low_load");

    let es = FeatureRegistry::es();
    for raw in [" Persistent Low Load", "_persistent low load", "Persistent Low Load Score -"] {
        let ctx = es.lookup(raw).unwrap_or_else(|| panic!("{raw:?} should resolve"));
        assert_eq!(ctx.name, "Persistent Low Load");
    }
}

#[test]
fn test_normalize_is_idempotent() {
    for raw in ["Post-Handover QoE Degradation", "ES  Opportunity", "n_alarm"] {
        let once = normalize_feature_name(raw);
        assert_eq!(normalize_feature_name(&once), once);
    }
}

#[test]
fn test_builtin_registries_load() {
    assert_eq!(FeatureRegistry::es().intent(), &IntentLabel::Es);
    assert_eq!(FeatureRegistry::es().len(), 10);
    assert_eq!(FeatureRegistry::mro().intent(), &IntentLabel::Mro);
    assert_eq!(FeatureRegistry::mro().len(), 9);
}

#[test]
fn test_lookup_tolerates_formatting() {
    let es = FeatureRegistry::es();
    for raw in [
        "Persistent Low Load",
        "persistent_low_load",
        "PERSISTENT-LOW-LOAD",
        "Persistent Low Load Score",
        "Persistent_Low_Load_Score",
    ] {
        let ctx = es.lookup(raw).unwrap_or_else(|| panic!("{raw} should resolve"));
        assert_eq!(ctx.name, "Persistent Low Load");
    }
}

#[test]
fn test_lookup_upstream_feature_names() {
    let es_features = [
        "Persistent Low Load Score",
        "Energy Inefficiency Score",
        "Stable QoS Confidence",
        "Mobility Safety Index",
        "Social Event Score",
        "Traffic Volatility Index",
        "Weather Sensitivity Score",
        "n_alarm",
    ];
    for name in es_features {
        assert!(FeatureRegistry::es().lookup(name).is_some(), "ES {name}");
    }

    let mro_features = [
        "Handover Failure Pressure",
        "Handover Success Stability",
        "Congestion-Induced HO Risk",
        "Mobility Volatility Index",
        "Weather-Driven Mobility Risk",
        "n_alarm",
        "Social Event Score",
    ];
    for name in mro_features {
        assert!(FeatureRegistry::mro().lookup(name).is_some(), "MRO {name}");
    }
}

#[test]
fn test_lookup_miss_is_none() {
    assert!(FeatureRegistry::es().lookup("Unknown_Metric_X").is_none());
    assert!(FeatureRegistry::es().lookup("").is_none());
    // MRO-only feature is not in the ES table
    assert!(FeatureRegistry::es().lookup("Handover Failure Pressure").is_none());
}

#[test]
fn test_anchor_texts() {
    let pll = FeatureRegistry::es().lookup("Persistent Low Load").unwrap();
    assert_eq!(pll.decision_impact.get(QualitativeLevel::High), "Strongly supports ES");

    let volatility = FeatureRegistry::es().lookup("Traffic Volatility Index").unwrap();
    assert_eq!(volatility.decision_impact.get(QualitativeLevel::High), "Opposes ES");
}

#[test]
fn test_every_registry_has_neutral_impacts() {
    for registry in [FeatureRegistry::es(), FeatureRegistry::mro()] {
        let neutral = registry
            .contexts()
            .iter()
            .flat_map(|c| QualitativeLevel::ALL.map(|l| c.decision_impact.get(l).to_lowercase()))
            .filter(|impact| impact.contains("neutral"))
            .count();
        assert!(neutral > 0, "{} registry has no neutral impacts", registry.intent());
    }
}

#[test]
fn test_hard_blocks() {
    let es = FeatureRegistry::es();
    assert!(es.lookup("Stable QoS Confidence").unwrap().is_hard_block);
    assert!(es.lookup("Mobility Safety Index").unwrap().is_hard_block);
    assert!(es.lookup("n_alarm").unwrap().is_hard_block);
    assert!(!es.lookup("Persistent Low Load").unwrap().is_hard_block);
    assert!(FeatureRegistry::mro().lookup("n_alarm").unwrap().is_hard_block);
}

#[test]
fn test_registry_texts_are_complete() {
    for registry in [FeatureRegistry::es(), FeatureRegistry::mro()] {
        for ctx in registry.contexts() {
            assert!(!ctx.intent.is_empty(), "{}", ctx.name);
            assert!(!ctx.role.is_empty(), "{}", ctx.name);
            for level in QualitativeLevel::ALL {
                assert!(!ctx.interpretation.get(level).is_empty(), "{} {level}", ctx.name);
                assert!(!ctx.decision_impact.get(level).is_empty(), "{} {level}", ctx.name);
            }
        }
    }
}

#[test]
fn test_duplicate_key_rejected() {
    let a = FeatureRegistry::es().lookup("Traffic Volatility").unwrap().clone();
    let mut b = a.clone();
    b.name = "Traffic-Volatility".to_string();
    b.aliases.clear();

    let err = FeatureRegistry::new(IntentLabel::Es, vec![a, b]).unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateKey { ref key, .. } if key == "traffic_volatility"));
}

#[test]
fn test_empty_key_rejected() {
    let mut ctx = FeatureRegistry::es().lookup("Traffic Volatility").unwrap().clone();
    ctx.name = " - ".to_string();
    let err = FeatureRegistry::new(IntentLabel::Es, vec![ctx]).unwrap_err();
    assert!(matches!(err, RegistryError::EmptyKey(_)));
}

#[test]
fn test_yaml_round_trip_preserves_lookup() {
    let yaml = serde_yaml::to_string(&FeatureRegistry::mro().to_file()).unwrap();
    let loaded = FeatureRegistry::from_yaml_str(&yaml).unwrap();
    assert_eq!(loaded.intent(), &IntentLabel::Mro);
    assert_eq!(loaded.contexts(), FeatureRegistry::mro().contexts());
}

#[test]
fn test_load_custom_registry_file() {
    let yaml = r#"
intent: ES
features:
  - name: PRB Utilization
    aliases: [TU PRB DL]
    intent: Downlink resource usage.
    interpretation: { high: Busy., medium: Moderate., low: Idle. }
    decision_impact: { high: Opposes ES, medium: Neutral for ES, low: Supports ES }
    role: Load indicator
"#;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let registry = FeatureRegistry::load(file.path()).unwrap();
    let ctx = registry.lookup("tu-prb-dl").unwrap();
    assert_eq!(ctx.name, "PRB Utilization");
    assert!(!ctx.is_hard_block);
}

#[test]
fn test_load_missing_file() {
    let err = FeatureRegistry::load("/nonexistent/registry.yaml").unwrap_err();
    assert!(matches!(err, RegistryError::Io { .. }));
}

#[test]
fn test_yaml_with_unknown_intent_rejected() {
    let err = FeatureRegistry::from_yaml_str("intent: LB\nfeatures: []\n").unwrap_err();
    assert!(matches!(err, RegistryError::UnsupportedIntent(_)));
}

#[test]
fn test_registry_set_selects_by_intent() {
    let set = RegistrySet::builtin();
    assert_eq!(set.for_intent(&IntentLabel::Es).unwrap().intent(), &IntentLabel::Es);
    assert_eq!(set.for_intent(&IntentLabel::Mro).unwrap().intent(), &IntentLabel::Mro);
    assert!(set.for_intent(&IntentLabel::Other("LB".into())).is_none());
}

#[test]
fn test_registry_set_override() {
    let custom = FeatureRegistry::new(IntentLabel::Mro, vec![]).unwrap();
    let set = RegistrySet::builtin().with_registry(IntentLabel::Mro, custom).unwrap();
    assert!(set.for_intent(&IntentLabel::Mro).unwrap().is_empty());
    assert_eq!(set.for_intent(&IntentLabel::Es).unwrap().len(), 10);
}

#[test]
fn test_registry_set_override_intent_mismatch() {
    let custom = FeatureRegistry::new(IntentLabel::Es, vec![]).unwrap();
    let err = RegistrySet::builtin().with_registry(IntentLabel::Mro, custom).unwrap_err();
    assert!(matches!(err, RegistryError::IntentMismatch { .. }));
}
