//! Builder for creating IngestEngine instances.

use std::path::PathBuf;

use crate::config::{IngestConfig, ResolverConfig, SourceConfig, SourceSpec};
use crate::engine::IngestEngine;
use crate::error::{ConfigError, ErrorPolicy};
use crate::resolver::Resolver;

#[derive(Debug, Clone, Default)]
pub struct IngestBuilder {
    sources: Vec<SourceSpec>,
    config: ResolverConfig,
    error_policy: ErrorPolicy,
}

impl IngestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources.push(SourceSpec::file(path));
        self
    }

    pub fn add_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.sources.extend(paths.into_iter().map(SourceSpec::file));
        self
    }

    pub fn add_contents(mut self, name: impl Into<String>, contents: impl Into<String>) -> Self {
        self.sources.push(SourceSpec::inline(name, contents));
        self
    }

    pub fn add_source(mut self, spec: SourceSpec) -> Self {
        self.sources.push(spec);
        self
    }

    pub fn with_mode(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<IngestEngine, ConfigError> {
        let resolver = Resolver::with_config(self.config)?;
        Ok(IngestEngine::new(resolver, self.error_policy, self.sources))
    }

    /// Create a builder from a parsed [`IngestConfig`].
    ///
    /// Invalid sources are reported immediately, regardless of error policy.
    pub fn from_ingest_config(config: IngestConfig) -> Result<Self, ConfigError> {
        let mut builder = IngestBuilder::new().with_config(config.resolver);

        if let Some(policy_str) = config.error_policy.as_deref() {
            let policy = ErrorPolicy::from_str(policy_str)
                .ok_or_else(|| ConfigError::UnknownErrorPolicy(policy_str.to_string()))?;
            builder = builder.with_mode(policy);
        }

        for source_cfg in &config.sources {
            builder.sources.push(source_from_config(source_cfg)?);
        }

        Ok(builder)
    }
}

fn source_from_config(cfg: &SourceConfig) -> Result<SourceSpec, ConfigError> {
    let missing = |field: &str| ConfigError::InvalidSource {
        kind: cfg.kind.clone(),
        reason: format!("missing '{field}'"),
    };

    match cfg.kind.as_str() {
        "file" => {
            let path = cfg.path.as_ref().ok_or_else(|| missing("path"))?;
            Ok(SourceSpec::file(path))
        }
        "inline" => {
            let name = cfg.name.as_ref().ok_or_else(|| missing("name"))?;
            let contents = cfg.contents.as_ref().ok_or_else(|| missing("contents"))?;
            Ok(SourceSpec::inline(name.clone(), contents.clone()))
        }
        _ => Err(ConfigError::InvalidSource {
            kind: cfg.kind.clone(),
            reason: "expected 'file' or 'inline'".into(),
        }),
    }
}
