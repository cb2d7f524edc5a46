//! Fixed parameters of the 12-bit archive format.

/// A single dictionary code. Only the low 12 bits are ever set.
pub type Code = u16;

/// Width of every code in the archive.
pub const CODE_BITS: u32 = 12;

/// Mask selecting the bits of a code.
pub const CODE_MASK: Code = (1 << CODE_BITS) - 1;

/// Number of base (single-byte) dictionary entries.
pub const BASE_DICT_SIZE: usize = 256;

/// Dictionary capacity. Reaching it rewinds the insertion point to
/// [`BASE_DICT_SIZE`].
pub const MAX_DICT_SIZE: usize = 1 << CODE_BITS;

/// Bytes holding a pair of packed codes.
pub const CHUNK_SIZE: usize = 3;
