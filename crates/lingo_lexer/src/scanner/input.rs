//! Fixed-size refillable byte buffer over a reader.
//!
//! The buffer is filled with whatever one `read` call returns. A read of zero
//! bytes is end of input; `Interrupted` reads are retried.

use std::io::{self, Read};

use tracing::trace;

pub(super) struct ByteInput<R> {
    reader: R,
    buf: Box<[u8]>,
    /// Next unread byte in `buf`.
    pos: usize,
    /// Bytes of `buf` holding data from the last read.
    filled: usize,
    /// Bytes handed out so far.
    consumed: u64,
}

impl<R: Read> ByteInput<R> {
    /// `size` must be non-zero; the scanner checks it.
    pub(super) fn new(reader: R, size: usize) -> Self {
        debug_assert!(size > 0);
        ByteInput {
            reader,
            buf: vec![0; size].into_boxed_slice(),
            pos: 0,
            filled: 0,
            consumed: 0,
        }
    }

    /// Next byte, or `None` at end of input.
    pub(super) fn next_byte(&mut self) -> io::Result<Option<u8>> {
        if self.pos == self.filled && !self.refill()? {
            return Ok(None);
        }
        let byte = self.buf[self.pos];
        self.pos += 1;
        self.consumed += 1;
        Ok(Some(byte))
    }

    /// Number of bytes returned by `next_byte` so far.
    pub(super) fn consumed(&self) -> u64 {
        self.consumed
    }

    pub(super) fn capacity(&self) -> usize {
        self.buf.len()
    }

    fn refill(&mut self) -> io::Result<bool> {
        loop {
            match self.reader.read(&mut self.buf) {
                Ok(0) => {
                    trace!(consumed = self.consumed, "end of input");
                    return Ok(false);
                }
                Ok(read) => {
                    trace!(read, "buffer refilled");
                    self.pos = 0;
                    self.filled = read;
                    return Ok(true);
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
    }
}
