//! Streaming decode of a byte reader into UTF-8 text.

use std::io::{self, BufRead, Read};

use crate::encoding::{Codec, StreamDecoder};

const CHUNK_SIZE: usize = 8 * 1024;

/// Reader adapter that decodes bytes under a [`Codec`] and yields UTF-8.
///
/// Line endings pass through untouched. Malformed input surfaces as an
/// `InvalidData` error from the read that reaches it.
pub struct DecodeReader<R> {
    inner: R,
    codec: Codec,
    decoder: StreamDecoder,
    chunk: Box<[u8]>,
    decoded: Vec<u8>,
    pos: usize,
    finished: bool,
}

impl<R> std::fmt::Debug for DecodeReader<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodeReader")
            .field("codec", &self.codec.canonical_name())
            .field("buffered", &(self.decoded.len() - self.pos))
            .field("finished", &self.finished)
            .finish()
    }
}

impl<R: Read> DecodeReader<R> {
    pub fn new(inner: R, codec: Codec) -> Self {
        Self {
            inner,
            codec,
            decoder: codec.new_decoder(),
            chunk: vec![0u8; CHUNK_SIZE].into_boxed_slice(),
            decoded: Vec::new(),
            pos: 0,
            finished: false,
        }
    }

    /// Consume the adapter, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Decode until at least one byte of output is available or input ends.
    fn refill(&mut self) -> io::Result<()> {
        self.decoded.clear();
        self.pos = 0;
        while self.decoded.is_empty() && !self.finished {
            let n = match self.inner.read(&mut self.chunk) {
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            let last = n == 0;
            if last {
                self.finished = true;
            }
            if !self
                .decoder
                .decode_chunk(&self.chunk[..n], &mut self.decoded, last)
            {
                self.finished = true;
                self.decoded.clear();
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("stream is not valid {}", self.codec.canonical_name()),
                ));
            }
        }
        Ok(())
    }
}

impl<R: Read> BufRead for DecodeReader<R> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if self.pos >= self.decoded.len() {
            self.refill()?;
        }
        Ok(&self.decoded[self.pos..])
    }

    fn consume(&mut self, amt: usize) {
        self.pos = (self.pos + amt).min(self.decoded.len());
    }
}

impl<R: Read> Read for DecodeReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let available = self.fill_buf()?;
        let n = available.len().min(buf.len());
        buf[..n].copy_from_slice(&available[..n]);
        self.consume(n);
        Ok(n)
    }
}
