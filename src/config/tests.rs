//! Tests for config loading

use super::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_empty_document_is_default() {
    assert_eq!(parse_config("").unwrap(), EngineConfig::default());
    assert_eq!(parse_config("   \n").unwrap(), EngineConfig::default());
}

#[test]
fn test_parse_full_document() {
    let yaml = r#"
registry:
  es: es.yaml
  mro: mro.yml
explain:
  parallel_batch: true
output:
  format: json
"#;
    let config = parse_config(yaml).unwrap();
    assert_eq!(config.registry.es.as_deref(), Some(std::path::Path::new("es.yaml")));
    assert!(config.explain.parallel_batch);
    assert_eq!(config.output.format, OutputFormat::Json);
}

#[test]
fn test_parse_partial_document() {
    let config = parse_config("output:\n  format: text\n").unwrap();
    assert_eq!(config.registry, RegistryPaths::default());
    assert!(!config.explain.parallel_batch);
}

#[test]
fn test_quoted_bool() {
    let config = parse_config("explain:\n  parallel_batch: \"true\"\n").unwrap();
    assert!(config.explain.parallel_batch);
    assert!(parse_config("explain:\n  parallel_batch: \"yes\"\n").is_err());
}

#[test]
fn test_unknown_format_rejected() {
    let err = parse_config("output:\n  format: xml\n").unwrap_err();
    assert!(matches!(err, crate::Error::ConfigError(_)));
}

#[test]
fn test_output_format_from_str() {
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert!("yaml".parse::<OutputFormat>().is_err());
}

#[test]
fn test_load_resolves_relative_registry() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("es.yaml"), "intent: ES\nfeatures: []\n").unwrap();
    let config_path = dir.path().join("engine.yaml");
    fs::write(&config_path, "registry:\n  es: es.yaml\n").unwrap();

    let config = load_config(&config_path).unwrap();
    assert_eq!(config.registry.es, Some(dir.path().join("es.yaml")));
}

#[test]
fn test_load_rejects_missing_registry() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("engine.yaml");
    fs::write(&config_path, "registry:\n  mro: missing.yaml\n").unwrap();

    let err = load_config(&config_path).unwrap_err();
    assert!(matches!(err, crate::Error::Validation(ValidationError::RegistryFileNotFound { .. })));
}

#[test]
fn test_load_missing_config_file() {
    let err = load_config("/nonexistent/engine.yaml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}
