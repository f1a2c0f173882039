//! # srcenc
//!
//! Open source files and in-memory text with the encoding they declare.
//!
//! ## Overview
//!
//! srcenc provides:
//! - **Declaration scanning**: Honors `# -*- coding: <name> -*-` style comments on
//!   the first two lines of a file
//! - **Layered fallback**: Declared (or default `utf-8`) encoding first, then the
//!   locale-preferred encoding, then a descriptive error
//! - **Source handles**: A UTF-8 text stream with raw line endings, the absolute
//!   path and the encoding that decoded it
//! - **Null sink**: A write destination that discards everything
//! - **Batch ingestion**: Open many sources under a FastFail or Accumulate policy
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use srcenc::SourceHandle;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut handle = SourceHandle::read("legacy.py")?;
//!     println!("{} is {}", handle.path().display(), handle.encoding());
//!     let text = handle.read_to_string()?;
//!     println!("{} bytes of text", text.len());
//!
//!     let inline = SourceHandle::from_contents("x = 1\n", "buf.py");
//!     assert_eq!(inline.extension(), "py");
//!     Ok(())
//! }
//! ```
//!
//! ## Resolution rules
//!
//! - Only the first two lines are scanned. A declaration on line three or later
//!   is ignored.
//! - Decoding is strict. Malformed bytes, or a declared name no decoder knows,
//!   move resolution on to the locale-preferred encoding.
//! - If that fails too, [`SourceError::EncodingUndeterminable`] names the path and
//!   both encodings that were tried.
//! - In-memory text is already decoded; its declaration is reported as-is.
//!
//! ## Features
//!
//! - `json` - Load [`IngestConfig`] from JSON
//! - `yaml` - Load [`IngestConfig`] from YAML
//! - `miette` - Pretty error reporting with miette
//! - `sarge` - The `srcenc` command-line tool

// Core modules
pub mod builder;
pub mod cli;
pub mod config;
pub mod encoding;
pub mod engine;
pub mod error;
pub mod io;
pub mod resolver;

// Re-exports for convenience
pub use builder::IngestBuilder;
pub use config::{IngestConfig, ResolverConfig, SourceConfig, SourceSpec};
pub use encoding::{Codec, DEFAULT_ENCODING};
pub use engine::IngestEngine;
pub use error::{AggregateError, ConfigError, ErrorPolicy, SourceError};
pub use io::{DecodeReader, EMPTY, NullSink, SourceHandle};
pub use resolver::{Resolution, Resolver};

/// Build an IngestEngine from an IngestConfig.
pub fn build_engine_from_config(config: IngestConfig) -> Result<IngestEngine, ConfigError> {
    builder::IngestBuilder::from_ingest_config(config)?.build()
}

/// Build an IngestEngine from an IngestConfig, allowing the caller to
/// further customize the IngestBuilder before it is built.
pub fn build_engine_from_config_with<F>(
    config: IngestConfig,
    customize: F,
) -> Result<IngestEngine, ConfigError>
where
    F: FnOnce(builder::IngestBuilder) -> builder::IngestBuilder,
{
    let builder = builder::IngestBuilder::from_ingest_config(config)?;
    let builder = customize(builder);
    builder.build()
}

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::SourceDiagnostic;

// Internal test modules (see src/tests)
#[cfg(test)]
mod tests;
