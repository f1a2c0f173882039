//! Configuration types for encoding resolution and batch ingestion.
//!
//! This module provides:
//! - `ResolverConfig`: Default and fallback encodings used by the resolver
//! - `SourceSpec`: Specification for a single source (file or inline text)
//! - `IngestConfig`: Configuration for a complete ingestion run

mod pipeline;
mod resolver;
mod spec;

pub use pipeline::{IngestConfig, SourceConfig};
pub use resolver::ResolverConfig;
pub use spec::SourceSpec;
