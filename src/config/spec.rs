//! Source specifications.

use std::path::PathBuf;

/// Specification for a single source to ingest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSpec {
    /// A file on disk
    File(PathBuf),
    /// Text already in memory, reported under a synthetic name
    Inline { name: String, contents: String },
}

impl SourceSpec {
    /// Create a file source.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        SourceSpec::File(path.into())
    }

    /// Create an in-memory source.
    pub fn inline(name: impl Into<String>, contents: impl Into<String>) -> Self {
        SourceSpec::Inline {
            name: name.into(),
            contents: contents.into(),
        }
    }

    /// Identifier used in logs and errors.
    pub fn id(&self) -> String {
        match self {
            SourceSpec::File(path) => path.to_string_lossy().into_owned(),
            SourceSpec::Inline { name, .. } => name.clone(),
        }
    }
}
