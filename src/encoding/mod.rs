//! Encoding names, declarations and decoders.
//!
//! This module provides:
//! - `declaration`: scanning the first two lines for a `coding:` comment
//! - `Codec`: strict decoders selected by encoding name
//! - `locale`: the process's locale-preferred encoding

mod codec;
pub mod declaration;
pub mod locale;

pub use codec::{Codec, StreamDecoder};
pub use declaration::{scan_bytes, scan_lines, scan_reader};
pub use locale::preferred_encoding;

/// Encoding assumed when a source declares none.
pub const DEFAULT_ENCODING: &str = "utf-8";
