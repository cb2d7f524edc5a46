//! LZW dictionary (code table) with fixed capacity and wraparound.

use crate::config::{BASE_DICT_SIZE, Code, MAX_DICT_SIZE};
use tracing::debug;

/// Decoder dictionary.
///
/// Holds [`MAX_DICT_SIZE`] slots allocated once. Codes `0..256` always map
/// to their single byte. Codes from 256 up to [`next_code`](Self::next_code)
/// are the entries added since the last reset; higher slots hold stale
/// entries that are not resolvable and get overwritten in place.
#[derive(Debug)]
pub struct CodeTable {
    /// Code table: code -> byte sequence.
    entries: Vec<Vec<u8>>,
    /// Next code that will be assigned (`dict_size`).
    next_code: usize,
    /// Number of times the table wrapped since the last `reset`.
    resets: usize,
}

impl CodeTable {
    /// Create a new table seeded with the 256 single-byte entries.
    pub fn new() -> Self {
        let mut entries: Vec<Vec<u8>> = (0..=u8::MAX).map(|b| vec![b]).collect();
        entries.resize_with(MAX_DICT_SIZE, Vec::new);

        Self {
            entries,
            next_code: BASE_DICT_SIZE,
            resets: 0,
        }
    }

    /// Forget every entry above the base alphabet.
    ///
    /// Slot allocations are kept for reuse.
    pub fn reset(&mut self) {
        self.next_code = BASE_DICT_SIZE;
        self.resets = 0;
    }

    /// Get the byte sequence for a code, if the code is currently defined.
    pub fn get(&self, code: Code) -> Option<&[u8]> {
        let index = usize::from(code);
        if index < self.next_code {
            Some(self.entries[index].as_slice())
        } else {
            None
        }
    }

    /// Define `next_code` as `prefix` followed by `last`.
    ///
    /// Returns `true` if the table was full and wrapped back to the base
    /// alphabet.
    pub fn push(&mut self, prefix: &[u8], last: u8) -> bool {
        let slot = &mut self.entries[self.next_code];
        slot.clear();
        slot.extend_from_slice(prefix);
        slot.push(last);

        self.next_code += 1;
        if self.next_code == MAX_DICT_SIZE {
            self.next_code = BASE_DICT_SIZE;
            self.resets += 1;
            debug!(resets = self.resets, "dictionary full, wrapping to base");
            return true;
        }
        false
    }

    /// Get the next code that will be assigned.
    pub fn next_code(&self) -> Code {
        // Always below MAX_DICT_SIZE, so it fits in 12 bits.
        self.next_code as Code
    }

    /// Number of wraparounds since the last reset.
    pub fn resets(&self) -> usize {
        self.resets
    }
}

impl Default for CodeTable {
    fn default() -> Self {
        Self::new()
    }
}
