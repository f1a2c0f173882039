//! I/O abstractions for opened sources.
//!
//! This module provides:
//! - `SourceHandle`: A decoded text stream with its path and resolved encoding
//! - `DecodeReader`: Streaming decode of raw bytes under a resolved codec
//! - `NullSink`: A writable destination that discards everything

mod decode;
mod sink;
mod source;

pub use decode::DecodeReader;
pub use sink::{EMPTY, NullSink};
pub use source::SourceHandle;
