//! Ingestion configuration documents.

use serde::Deserialize;

use super::ResolverConfig;
#[cfg(any(feature = "yaml", feature = "json"))]
use crate::error::ConfigError;

/// Configuration for an entire ingestion run.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IngestConfig {
    /// Resolver settings
    #[serde(default)]
    pub resolver: ResolverConfig,
    /// Sources to ingest
    #[serde(default)]
    pub sources: Vec<SourceConfig>,
    /// Error policy: "fast_fail" or "accumulate"
    #[serde(default)]
    pub error_policy: Option<String>,
}

/// Configuration for a single source.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Kind of source: "file" or "inline"
    pub kind: String,
    /// File path (for file sources)
    #[serde(default)]
    pub path: Option<String>,
    /// Synthetic name (for inline sources)
    #[serde(default)]
    pub name: Option<String>,
    /// Text (for inline sources)
    #[serde(default)]
    pub contents: Option<String>,
}

impl SourceConfig {
    /// A file source.
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            kind: "file".into(),
            path: Some(path.into()),
            name: None,
            contents: None,
        }
    }

    /// An inline source.
    pub fn inline(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            kind: "inline".into(),
            path: None,
            name: Some(name.into()),
            contents: Some(contents.into()),
        }
    }
}

impl IngestConfig {
    /// Create a new empty ingestion configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a source configuration.
    pub fn add_source(mut self, source: SourceConfig) -> Self {
        self.sources.push(source);
        self
    }

    /// Set the error policy.
    pub fn with_error_policy(mut self, policy: impl Into<String>) -> Self {
        self.error_policy = Some(policy.into());
        self
    }

    /// Set the resolver settings.
    pub fn with_resolver(mut self, resolver: ResolverConfig) -> Self {
        self.resolver = resolver;
        self
    }

    /// Parse a configuration from a YAML document.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(s).map_err(|e| ConfigError::Parse(Box::new(e)))
    }

    /// Parse a configuration from a JSON document.
    #[cfg(feature = "json")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(|e| ConfigError::Parse(Box::new(e)))
    }
}
