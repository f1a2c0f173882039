//! A write destination that discards everything.

use std::fmt;
use std::io;

/// Writable stream that accepts and drops all input.
///
/// Every write succeeds and reports the whole buffer as written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullSink;

/// Shared discard destination.
pub const EMPTY: NullSink = NullSink;

impl NullSink {
    pub fn new() -> Self {
        NullSink
    }
}

impl io::Write for NullSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn write_all(&mut self, _buf: &[u8]) -> io::Result<()> {
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Write for NullSink {
    fn write_str(&mut self, _s: &str) -> fmt::Result {
        Ok(())
    }
}
