//! Tests for resolver settings, source specs and ingestion configs.

use crate::builder::IngestBuilder;
use crate::config::{IngestConfig, ResolverConfig, SourceConfig, SourceSpec};
use crate::error::{ConfigError, ErrorPolicy};

#[test]
fn resolver_config_defaults_to_utf8_and_locale() {
    let config = ResolverConfig::default();
    assert_eq!(config.default_encoding, "utf-8");
    assert_eq!(config.fallback_encoding, None);
    assert!(config.validate().is_ok());
}

#[test]
fn resolver_config_deserializes_with_defaults() {
    let config: ResolverConfig = serde_yaml::from_str("fallback_encoding: latin-1\n").unwrap();
    assert_eq!(config.default_encoding, "utf-8");
    assert_eq!(config.fallback_encoding.as_deref(), Some("latin-1"));
}

#[test]
fn source_spec_ids() {
    assert_eq!(SourceSpec::file("src/a.py").id(), "src/a.py");
    assert_eq!(SourceSpec::inline("buf.py", "x = 1").id(), "buf.py");
}

#[test]
fn parse_ingest_config() {
    let yaml = r#"
resolver:
  fallback_encoding: cp1252
error_policy: fast_fail
sources:
  - kind: file
    path: legacy.py
  - kind: inline
    name: buf.py
    contents: "x = 1\n"
"#;

    let cfg: IngestConfig = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(cfg.sources.len(), 2);

    let engine = IngestBuilder::from_ingest_config(cfg)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(engine.error_policy(), ErrorPolicy::FastFail);
    assert_eq!(engine.resolver().fallback_encoding(), "cp1252");
    assert_eq!(
        engine.sources(),
        &[
            SourceSpec::file("legacy.py"),
            SourceSpec::inline("buf.py", "x = 1\n"),
        ]
    );
}

#[test]
fn invalid_sources_are_rejected() {
    let missing_path = IngestConfig::new().add_source(SourceConfig {
        kind: "file".into(),
        path: None,
        name: None,
        contents: None,
    });
    assert!(matches!(
        IngestBuilder::from_ingest_config(missing_path),
        Err(ConfigError::InvalidSource { .. })
    ));

    let unknown_kind = IngestConfig::new().add_source(SourceConfig {
        kind: "http".into(),
        path: Some("x".into()),
        name: None,
        contents: None,
    });
    assert!(matches!(
        IngestBuilder::from_ingest_config(unknown_kind),
        Err(ConfigError::InvalidSource { .. })
    ));
}

#[test]
fn unknown_error_policy_is_rejected() {
    let cfg = IngestConfig::new()
        .add_source(SourceConfig::file("a.py"))
        .with_error_policy("sometimes");
    assert!(matches!(
        IngestBuilder::from_ingest_config(cfg),
        Err(ConfigError::UnknownErrorPolicy(p)) if p == "sometimes"
    ));
}

#[test]
fn unknown_default_encoding_fails_build() {
    let cfg = IngestConfig::new()
        .with_resolver(ResolverConfig::new().with_default_encoding("klingon"))
        .add_source(SourceConfig::inline("buf.py", ""));
    let builder = IngestBuilder::from_ingest_config(cfg).unwrap();
    assert!(matches!(
        builder.build(),
        Err(ConfigError::UnknownEncoding(_))
    ));
}

#[cfg(feature = "yaml")]
#[test]
fn ingest_config_from_yaml_str() {
    let yaml = "error_policy: fast_fail\nresolver:\n  fallback_encoding: latin-1\nsources:\n  - kind: file\n    path: a.py\n";
    let config = IngestConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.error_policy.as_deref(), Some("fast_fail"));
    assert_eq!(config.resolver.fallback_encoding.as_deref(), Some("latin-1"));
    assert_eq!(config.sources.len(), 1);
    assert_eq!(config.sources[0].path.as_deref(), Some("a.py"));
}

#[cfg(feature = "yaml")]
#[test]
fn malformed_yaml_is_a_parse_error() {
    let err = IngestConfig::from_yaml_str("sources: [kind: file\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("failed to parse configuration: "));
}

#[cfg(feature = "json")]
#[test]
fn ingest_config_from_json_str() {
    let json = r#"{
        "sources": [
            {"kind": "inline", "name": "buf.py", "contents": "x = 1\n"}
        ]
    }"#;
    let config = IngestConfig::from_json_str(json).unwrap();
    assert_eq!(config.error_policy, None);
    assert_eq!(config.resolver.default_encoding, "utf-8");
    assert_eq!(config.sources[0].kind, "inline");
    assert_eq!(config.sources[0].contents.as_deref(), Some("x = 1\n"));
}

#[cfg(feature = "json")]
#[test]
fn malformed_json_is_a_parse_error() {
    let err = IngestConfig::from_json_str(r#"{"sources": 3"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[cfg(feature = "json")]
#[test]
fn json_source_missing_kind_is_a_parse_error() {
    let err = IngestConfig::from_json_str(r#"{"sources": [{"path": "a.py"}]}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}
