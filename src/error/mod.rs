//! Error types and policies for source ingestion.
//!
//! This module provides:
//! - `ErrorPolicy`: Controls whether batch ingestion fails fast or accumulates errors
//! - `SourceError`: A single source that could not be opened or decoded
//! - `AggregateError`: A collection of errors when using `Accumulate` policy
//! - `ConfigError`: Invalid resolver configuration

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop at the first source that fails
    FastFail,
    /// Collect all errors and return them together
    #[default]
    Accumulate,
}

impl ErrorPolicy {
    /// Parse a policy from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "fast_fail" | "fastfail" => Some(ErrorPolicy::FastFail),
            "accumulate" => Some(ErrorPolicy::Accumulate),
            _ => None,
        }
    }
}

/// Failure to ingest a single source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Neither the declared (or default) encoding nor the locale fallback
    /// could decode the file.
    #[error(
        "unable to determine encoding for {}: neither {encoding} nor {fallback} decodes it",
        .path.display()
    )]
    EncodingUndeterminable {
        path: PathBuf,
        /// Encoding tried first (declared, or the default)
        encoding: String,
        /// Locale-preferred encoding tried second
        fallback: String,
    },

    /// The file could not be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SourceError::Io {
            path: path.into(),
            source,
        }
    }

    /// Path of the source this error refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            SourceError::EncodingUndeterminable { path, .. } | SourceError::Io { path, .. } => path,
        }
    }

    /// Whether this is an encoding failure rather than a filesystem one.
    pub fn is_undeterminable(&self) -> bool {
        matches!(self, SourceError::EncodingUndeterminable { .. })
    }
}

/// Invalid resolver or ingestion configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown encoding '{0}'")]
    UnknownEncoding(String),

    #[error("unknown error policy '{0}'")]
    UnknownErrorPolicy(String),

    #[error("invalid source '{kind}': {reason}")]
    InvalidSource { kind: String, reason: String },

    #[error("failed to parse configuration: {0}")]
    Parse(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// An aggregate of multiple source errors.
///
/// This is returned when using `ErrorPolicy::Accumulate` and multiple errors occurred.
#[derive(Debug, Error)]
pub struct AggregateError {
    /// Collection of individual errors
    pub errors: Vec<SourceError>,
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ingestion encountered {} error(s):", self.errors.len())?;
        for (i, e) in self.errors.iter().enumerate() {
            writeln!(f, "  #{}: {}", i + 1, e)?;
        }
        Ok(())
    }
}

impl AggregateError {
    /// Create a new aggregate error with a single error.
    pub fn single(error: SourceError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Check if there are no errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

impl From<SourceError> for AggregateError {
    fn from(error: SourceError) -> Self {
        Self::single(error)
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
