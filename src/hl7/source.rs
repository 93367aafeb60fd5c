//! Buffered byte source with bounded lookahead.
//!
//! `std::io::BufReader` cannot guarantee a peek of N bytes across a refill,
//! which the boundary detector needs, so this keeps its own window.

use std::io::{self, ErrorKind, Read};

/// Default size of the read window.
pub(crate) const DEFAULT_BUFFER_SIZE: usize = 8192;

/// The window never shrinks below the longest lookahead used by the reader.
const MIN_BUFFER_SIZE: usize = 8;

#[derive(Debug)]
pub(crate) struct ByteSource<R> {
    inner: R,
    buffer: Vec<u8>,
    pos: usize,
    end: usize,
    eof: bool,
}

impl<R: Read> ByteSource<R> {
    pub(crate) fn with_capacity(inner: R, capacity: usize) -> Self {
        Self {
            inner,
            buffer: vec![0u8; capacity.max(MIN_BUFFER_SIZE)],
            pos: 0,
            end: 0,
            eof: false,
        }
    }

    /// Returns the next byte, or `None` once the source is exhausted.
    pub(crate) fn next_byte(&mut self) -> io::Result<Option<u8>> {
        if self.pos == self.end && !self.fill_buffer()? {
            return Ok(None);
        }
        let byte = self.buffer[self.pos];
        self.pos += 1;
        Ok(Some(byte))
    }

    /// Returns up to `n` upcoming bytes without consuming them. Fewer than
    /// `n` bytes are returned only when the source runs out first.
    pub(crate) fn peek(&mut self, n: usize) -> io::Result<&[u8]> {
        if self.buffer.len() < n {
            self.buffer.resize(n, 0);
        }
        while self.end - self.pos < n && self.fill_buffer()? {}
        let available = (self.end - self.pos).min(n);
        Ok(&self.buffer[self.pos..self.pos + available])
    }

    /// Skips `n` bytes that were previously peeked.
    pub(crate) fn consume(&mut self, n: usize) {
        self.pos += n.min(self.end - self.pos);
    }

    pub(crate) fn into_inner(self) -> R {
        self.inner
    }

    /// Pulls more data into the window. Returns `false` at end of input.
    fn fill_buffer(&mut self) -> io::Result<bool> {
        if self.eof {
            return Ok(false);
        }

        // Compact: move remaining data to start
        if self.pos > 0 {
            self.buffer.copy_within(self.pos..self.end, 0);
            self.end -= self.pos;
            self.pos = 0;
        }
        if self.end == self.buffer.len() {
            return Ok(true);
        }

        loop {
            match self.inner.read(&mut self.buffer[self.end..]) {
                Ok(0) => {
                    self.eof = true;
                    return Ok(false);
                }
                Ok(read) => {
                    self.end += read;
                    return Ok(true);
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}
