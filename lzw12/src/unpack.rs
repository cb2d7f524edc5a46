//! Code unpacker: splits the packed byte stream into 12-bit codes.
//!
//! Codes are packed MSB-first, two codes per three bytes:
//!
//! ```text
//!  byte 0   byte 1   byte 2
//! AAAAAAAA AAAABBBB BBBBBBBB
//! ```
//!
//! An odd final code is padded to 16 bits and stored in two bytes; the top
//! four bits of the padding byte are ignored.

use crate::config::{CHUNK_SIZE, Code, CODE_MASK};
use crate::error::{LzwError, Result};
use std::io::{self, Read};
use tracing::debug;

/// Iterator over the codes packed in a byte source.
///
/// Reads the source three bytes at a time. After the first error the
/// iterator is exhausted.
#[derive(Debug)]
pub struct CodeReader<R> {
    /// Byte source.
    inner: R,
    /// Second code of the last full chunk, not yet yielded.
    pending: Option<Code>,
    /// Total bytes consumed from the source.
    bytes_read: u64,
    /// Set once the source is exhausted or an error was returned.
    done: bool,
}

impl<R: Read> CodeReader<R> {
    /// Create a new code reader over `inner`.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pending: None,
            bytes_read: 0,
            done: false,
        }
    }

    /// Get total bytes consumed from the source.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Read up to one chunk, returning fewer bytes only at end of stream.
    fn fill_chunk(&mut self, chunk: &mut [u8; CHUNK_SIZE]) -> io::Result<usize> {
        let mut filled = 0;
        while filled < CHUNK_SIZE {
            match self.inner.read(&mut chunk[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }

    fn next_code(&mut self) -> Result<Option<Code>> {
        if let Some(code) = self.pending.take() {
            return Ok(Some(code));
        }
        if self.done {
            return Ok(None);
        }

        let offset = self.bytes_read;
        let mut chunk = [0u8; CHUNK_SIZE];
        let filled = self.fill_chunk(&mut chunk)?;
        self.bytes_read += filled as u64;

        match filled {
            CHUNK_SIZE => {
                let (first, second) = split_chunk(chunk);
                self.pending = Some(second);
                Ok(Some(first))
            }
            2 => {
                self.done = true;
                Ok(Some(padded_code(chunk[0], chunk[1])))
            }
            0 => {
                self.done = true;
                Ok(None)
            }
            _ => Err(LzwError::invalid_data(
                offset,
                "a single trailing byte cannot hold a 12-bit code",
            )),
        }
    }
}

impl<R: Read> Iterator for CodeReader<R> {
    type Item = Result<Code>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_code() {
            Ok(code) => code.map(Ok),
            Err(e) => {
                self.done = true;
                self.pending = None;
                Some(Err(e))
            }
        }
    }
}

/// Split a full chunk into its two codes.
#[inline]
fn split_chunk([b0, b1, b2]: [u8; CHUNK_SIZE]) -> (Code, Code) {
    let first = (Code::from(b0) << 4) | (Code::from(b1) >> 4);
    let second = ((Code::from(b1) & 0x0F) << 8) | Code::from(b2);
    (first, second)
}

/// Decode the final padded code of an odd-length sequence.
#[inline]
fn padded_code(b0: u8, b1: u8) -> Code {
    ((Code::from(b0) << 8) | Code::from(b1)) & CODE_MASK
}

/// Unpack every code in `reader`.
///
/// Fails with [`LzwError::InvalidData`] if the stream ends with a single
/// dangling byte.
pub fn unpack<R: Read>(reader: R) -> Result<Vec<Code>> {
    let mut codes_reader = CodeReader::new(reader);
    let mut codes = Vec::new();
    for code in codes_reader.by_ref() {
        codes.push(code?);
    }

    debug!(
        codes = codes.len(),
        bytes = codes_reader.bytes_read(),
        "unpacked archive"
    );
    Ok(codes)
}
