//! # LZW12: Fixed-Width LZW Decompression
//!
//! This crate reconstructs text from archives compressed with LZW at a fixed
//! 12-bit code width.
//!
//! ## Archive Format
//!
//! - **Raw code stream**: no header, no length, no end-of-information code
//! - **12-bit codes**: packed MSB-first, two codes per three bytes
//! - **Odd tail**: a final lone code is stored in two bytes, high nibble
//!   ignored
//! - **256 base entries**: codes 0-255 are the single bytes
//! - **Wraparound**: once code 4095 is assigned, new entries start again at
//!   256; the base alphabet is never cleared
//!
//! ## Pipeline
//!
//! ```text
//! bytes ──unpack──▶ codes ──decode──▶ text
//! ```
//!
//! ## Example
//!
//! ```rust
//! use lzw12::{decode, decompress, unpack};
//!
//! // Codes [65, 65, 256] packed as 0x041 0x041 | 0x100
//! let archive = [0x04u8, 0x10, 0x41, 0x01, 0x00];
//!
//! let codes = unpack(&archive[..]).unwrap();
//! assert_eq!(codes, vec![65, 65, 256]);
//! assert_eq!(decode(&codes).unwrap(), b"AAAA");
//!
//! assert_eq!(decompress(&archive[..]).unwrap(), b"AAAA");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod decoder;
mod dictionary;
mod error;
mod unpack;

pub use config::{BASE_DICT_SIZE, CODE_BITS, CODE_MASK, Code, MAX_DICT_SIZE};
pub use decoder::LzwDecoder;
pub use dictionary::CodeTable;
pub use error::{LzwError, Result};
pub use unpack::{CodeReader, unpack};

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::debug;

/// Decode a code sequence into the original bytes.
///
/// Each call uses its own dictionary. See [`LzwDecoder::decode`] for the
/// error conditions.
///
/// # Example
///
/// ```rust
/// let text = lzw12::decode(&[72, 105]).unwrap();
/// assert_eq!(text, b"Hi");
/// ```
pub fn decode(codes: &[Code]) -> Result<Vec<u8>> {
    LzwDecoder::new().decode(codes)
}

/// Decompress a whole archive read from `reader`.
///
/// The archive is fully unpacked before decoding starts; nothing is
/// returned unless the entire archive is valid.
pub fn decompress<R: Read>(reader: R) -> Result<Vec<u8>> {
    decode(&unpack(reader)?)
}

/// Decompress an archive from `reader` and write the text to `writer`.
///
/// The decoded text is written with a single `write_all`, only after the
/// whole archive decoded successfully.
pub fn extract<R: Read, W: Write>(reader: R, mut writer: W) -> Result<()> {
    let text = decompress(reader)?;
    writer.write_all(&text)?;
    writer.flush()?;
    Ok(())
}

/// Decompress the archive at `path`.
pub fn decompress_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    debug!(archive = %path.display(), "reading archive");
    let reader = BufReader::new(File::open(path)?);
    decompress(reader)
}

/// Decompress the archive at `archive` into the file at `output`.
///
/// The output file is created only after decoding succeeded, so a corrupt
/// archive leaves no partial output behind.
pub fn extract_file(archive: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
    let text = decompress_file(archive)?;

    let output = output.as_ref();
    let mut writer = BufWriter::new(File::create(output)?);
    writer.write_all(&text)?;
    writer.flush()?;

    debug!(output = %output.display(), bytes = text.len(), "wrote decoded text");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompress_bytes() {
        // [84, 79, 256] -> "TOTO"
        let archive = [0x05u8, 0x40, 0x4F, 0x01, 0x00];
        assert_eq!(decompress(&archive[..]).unwrap(), b"TOTO");
    }

    #[test]
    fn test_decompress_empty_archive() {
        assert!(matches!(
            decompress(&[0u8; 0][..]),
            Err(LzwError::InvalidData { .. })
        ));
    }

    #[test]
    fn test_extract_writes_text() {
        let archive = [0x04u8, 0x10, 0x41, 0x01, 0x00];
        let mut sink = Vec::new();
        extract(&archive[..], &mut sink).unwrap();
        assert_eq!(sink, b"AAAA");
    }

    #[test]
    fn test_extract_writes_nothing_on_error() {
        // 65, then 0x300 (undefined), then a padded 65
        let archive = [0x04u8, 0x13, 0x00, 0x00, 0x41];
        let mut sink = Vec::new();
        assert!(matches!(
            extract(&archive[..], &mut sink),
            Err(LzwError::UnknownCode { code: 0x300, .. })
        ));
        assert!(sink.is_empty());
    }
}
