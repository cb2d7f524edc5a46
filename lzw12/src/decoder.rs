//! LZW decoder: rebuilds text from a code sequence.

use crate::config::Code;
use crate::dictionary::CodeTable;
use crate::error::{LzwError, Result};
use std::mem;
use tracing::debug;

/// LZW decoder for 12-bit code sequences.
///
/// The decoder owns its dictionary. Every call to [`decode`](Self::decode)
/// starts from a freshly seeded dictionary, so one decoder can process any
/// number of archives independently while reusing its allocations.
#[derive(Debug, Default)]
pub struct LzwDecoder {
    /// Dictionary for code lookup.
    table: CodeTable,
}

impl LzwDecoder {
    /// Create a new decoder.
    pub fn new() -> Self {
        Self {
            table: CodeTable::new(),
        }
    }

    /// Decode a code sequence into the original bytes.
    ///
    /// # Errors
    ///
    /// - [`LzwError::InvalidData`] if `codes` is empty.
    /// - [`LzwError::UnknownCode`] if a code is neither defined nor the next
    ///   code the dictionary would assign. The first code must belong to the
    ///   base alphabet.
    pub fn decode(&mut self, codes: &[Code]) -> Result<Vec<u8>> {
        self.table.reset();

        let Some((&first, rest)) = codes.split_first() else {
            return Err(LzwError::invalid_data(0, "archive contains no codes"));
        };

        let mut previous = self
            .table
            .get(first)
            .ok_or_else(|| LzwError::unknown_code(first, 0, self.table.next_code()))?
            .to_vec();

        let mut output = Vec::with_capacity(codes.len() * 2);
        output.extend_from_slice(&previous);

        let mut current = Vec::new();
        for (offset, &code) in rest.iter().enumerate() {
            current.clear();

            if let Some(entry) = self.table.get(code) {
                current.extend_from_slice(entry);
            } else if code == self.table.next_code() {
                // The encoder defined this code on the step that emitted it,
                // so it must be previous + previous[0].
                current.extend_from_slice(&previous);
                current.push(previous[0]);
            } else {
                return Err(LzwError::unknown_code(
                    code,
                    offset + 1,
                    self.table.next_code(),
                ));
            }

            self.table.push(&previous, current[0]);
            output.extend_from_slice(&current);
            mem::swap(&mut previous, &mut current);
        }

        debug!(
            codes = codes.len(),
            bytes = output.len(),
            resets = self.table.resets(),
            "decoded code sequence"
        );
        Ok(output)
    }

    /// Number of dictionary wraparounds during the last decode.
    pub fn resets(&self) -> usize {
        self.table.resets()
    }

    /// Next code the dictionary would assign after the last decode.
    pub fn next_code(&self) -> Code {
        self.table.next_code()
    }
}
