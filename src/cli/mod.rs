//! CLI integration helpers for srcenc.
//!
//! This module provides utilities to integrate srcenc with CLI argument parsers
//! like `clap` or `sarge`. It converts parsed arguments into an
//! [`IngestBuilder`](crate::IngestBuilder).
//!
//! # Example
//!
//! ```rust,no_run
//! use srcenc::{IngestBuilder, cli::SourceArgs};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let args = SourceArgs::new()
//!         .with_path("src/legacy.py")
//!         .with_fallback("latin-1")
//!         .with_fast_fail();
//!
//!     let engine = IngestBuilder::new().with_source_args(&args).build()?;
//!     for handle in engine.read_all()? {
//!         println!("{}: {}", handle.path().display(), handle.encoding());
//!     }
//!     Ok(())
//! }
//! ```

use crate::builder::IngestBuilder;
use crate::config::ResolverConfig;
use crate::error::ErrorPolicy;

/// Common source arguments for CLI applications.
#[derive(Debug, Clone, Default)]
pub struct SourceArgs {
    /// Paths of the files to open.
    pub paths: Vec<String>,
    /// Fallback encoding overriding the locale.
    pub fallback_encoding: Option<String>,
    /// Stop at the first file that cannot be opened.
    pub fast_fail: bool,
}

impl SourceArgs {
    /// Create new empty source arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.paths.push(path.into());
        self
    }

    /// Set the fallback encoding.
    pub fn with_fallback(mut self, encoding: impl Into<String>) -> Self {
        self.fallback_encoding = Some(encoding.into());
        self
    }

    /// Enable fail-fast mode.
    pub fn with_fast_fail(mut self) -> Self {
        self.fast_fail = true;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Get the error policy based on flags.
    pub fn error_policy(&self) -> ErrorPolicy {
        if self.fast_fail {
            ErrorPolicy::FastFail
        } else {
            ErrorPolicy::Accumulate
        }
    }

    /// Resolver settings implied by the arguments.
    pub fn resolver_config(&self) -> ResolverConfig {
        let config = ResolverConfig::default();
        match &self.fallback_encoding {
            Some(encoding) => config.with_fallback_encoding(encoding.clone()),
            None => config,
        }
    }
}

impl IngestBuilder {
    /// Apply parsed CLI arguments.
    pub fn with_source_args(self, args: &SourceArgs) -> Self {
        self.add_paths(args.paths.iter().map(String::as_str))
            .with_mode(args.error_policy())
            .with_config(args.resolver_config())
    }
}

#[cfg(feature = "sarge")]
mod sarge;
