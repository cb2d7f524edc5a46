//! Error types for 12-bit LZW decoding.

use crate::config::Code;
use std::io;
use thiserror::Error;

/// Errors produced while unpacking or decoding an archive.
///
/// Every variant is fatal for the archive being processed: nothing decoded
/// before the failure is returned to the caller.
#[derive(Debug, Error)]
pub enum LzwError {
    /// The byte stream cannot be split into 12-bit codes, or holds no codes.
    #[error("Invalid data at byte offset {offset}: {message}")]
    InvalidData {
        /// Byte offset in the archive where the problem was detected.
        offset: u64,
        /// Description of the problem.
        message: String,
    },

    /// A code that is neither in the dictionary nor the next code to define.
    #[error("Unknown LZW code {code} at index {index} (next code is {next_code})")]
    UnknownCode {
        /// The offending code.
        code: Code,
        /// Position of the code in the code sequence.
        index: usize,
        /// The only not-yet-defined code that would have been accepted.
        next_code: Code,
    },

    /// I/O error from the underlying reader or writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for LZW operations.
pub type Result<T> = std::result::Result<T, LzwError>;

impl LzwError {
    /// Create an invalid data error.
    pub fn invalid_data(offset: u64, message: impl Into<String>) -> Self {
        Self::InvalidData {
            offset,
            message: message.into(),
        }
    }

    /// Create an unknown code error.
    pub fn unknown_code(code: Code, index: usize, next_code: Code) -> Self {
        Self::UnknownCode {
            code,
            index,
            next_code,
        }
    }
}
