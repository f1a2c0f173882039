//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{AggregateError, SourceError};

/// A diagnostic wrapper for source errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct SourceDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

impl From<SourceError> for SourceDiagnostic {
    fn from(e: SourceError) -> Self {
        let help = match &e {
            SourceError::EncodingUndeterminable { .. } => {
                "Add a `# -*- coding: <name> -*-` comment to the first line, or re-save the file as UTF-8"
            }
            SourceError::Io { .. } => "Check that the path exists and is readable",
        };
        SourceDiagnostic {
            message: format!("cannot ingest '{}'", e.path().display()),
            source: Some(Box::new(e)),
            help: Some(help.into()),
            severity: Severity::Error,
        }
    }
}

impl From<AggregateError> for SourceDiagnostic {
    fn from(agg: AggregateError) -> Self {
        let first = agg.errors.into_iter().next();
        if let Some(e) = first {
            SourceDiagnostic::from(e)
        } else {
            SourceDiagnostic {
                message: "Unknown ingestion error".into(),
                source: None,
                help: None,
                severity: Severity::Error,
            }
        }
    }
}

impl From<AggregateError> for miette::Report {
    fn from(agg: AggregateError) -> Self {
        miette::Report::new(SourceDiagnostic::from(agg))
    }
}
