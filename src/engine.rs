//! Batch ingestion of many sources under one error policy.

use crate::config::SourceSpec;
use crate::error::{AggregateError, ErrorPolicy, SourceError};
use crate::io::SourceHandle;
use crate::resolver::Resolver;

/// Opens a set of sources with a shared resolver.
#[derive(Debug, Clone)]
pub struct IngestEngine {
    resolver: Resolver,
    error_policy: ErrorPolicy,
    sources: Vec<SourceSpec>,
}

impl IngestEngine {
    /// Create a new ingestion engine.
    pub fn new(resolver: Resolver, error_policy: ErrorPolicy, sources: Vec<SourceSpec>) -> Self {
        Self {
            resolver,
            error_policy,
            sources,
        }
    }

    /// Get the resolver.
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Get the error policy.
    pub fn error_policy(&self) -> ErrorPolicy {
        self.error_policy
    }

    /// Get the source specifications.
    pub fn sources(&self) -> &[SourceSpec] {
        &self.sources
    }

    /// Open every source.
    ///
    /// Returns one handle per source, in order.
    /// If error_policy is FastFail, stops at the first error.
    /// If error_policy is Accumulate, collects all errors.
    pub fn read_all(&self) -> Result<Vec<SourceHandle>, AggregateError> {
        let mut handles = Vec::with_capacity(self.sources.len());
        let mut errors = Vec::new();

        for spec in &self.sources {
            match self.read_one(spec) {
                Ok(handle) => handles.push(handle),
                Err(e) => {
                    log::warn!("skipping {}: {e}", spec.id());
                    errors.push(e);
                    if matches!(self.error_policy, ErrorPolicy::FastFail) {
                        return Err(AggregateError { errors });
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(handles)
        } else {
            Err(AggregateError { errors })
        }
    }

    /// Resolve the encoding of every source without keeping the streams.
    ///
    /// Each entry pairs the source id with its outcome; the error policy does
    /// not apply since no source depends on another.
    pub fn resolve_all(&self) -> Vec<(String, Result<String, SourceError>)> {
        self.sources
            .iter()
            .map(|spec| {
                let outcome = match spec {
                    SourceSpec::File(path) => self
                        .resolver
                        .read_file(path)
                        .map(|resolution| resolution.encoding),
                    SourceSpec::Inline { contents, .. } => {
                        Ok(self.resolver.determine_content_encoding(contents))
                    }
                };
                (spec.id(), outcome)
            })
            .collect()
    }

    /// Open a single source.
    pub fn read_one(&self, spec: &SourceSpec) -> Result<SourceHandle, SourceError> {
        match spec {
            SourceSpec::File(path) => SourceHandle::read_with(path, &self.resolver),
            SourceSpec::Inline { name, contents } => Ok(SourceHandle::from_contents_with(
                contents.as_str(),
                name,
                &self.resolver,
            )),
        }
    }
}
