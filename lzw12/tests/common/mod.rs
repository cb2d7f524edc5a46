//! Reference 12-bit LZW encoder used to produce test archives.

#![allow(dead_code)]

use std::collections::HashMap;

const BASE_DICT_SIZE: u16 = 256;
const MAX_DICT_SIZE: u16 = 4096;

fn base_table() -> HashMap<Vec<u8>, u16> {
    (0..BASE_DICT_SIZE).map(|code| (vec![code as u8], code)).collect()
}

/// Encode `data` into 12-bit codes, clearing the table once it holds 4096
/// entries.
pub fn encode(data: &[u8]) -> Vec<u16> {
    let mut table = base_table();
    let mut next_code = BASE_DICT_SIZE;
    let mut codes = Vec::new();
    let mut word: Vec<u8> = Vec::new();

    for &byte in data {
        let mut candidate = word.clone();
        candidate.push(byte);

        if table.contains_key(&candidate) {
            word = candidate;
            continue;
        }

        codes.push(table[&word]);
        table.insert(candidate, next_code);
        next_code += 1;
        if next_code == MAX_DICT_SIZE {
            table = base_table();
            next_code = BASE_DICT_SIZE;
        }
        word = vec![byte];
    }

    if !word.is_empty() {
        codes.push(table[&word]);
    }
    codes
}

/// Pack codes two per three bytes; an odd final code takes two bytes.
pub fn pack(codes: &[u16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(codes.len() * 3 / 2 + 2);
    for pair in codes.chunks(2) {
        match *pair {
            [first, second] => {
                out.push((first >> 4) as u8);
                out.push((((first & 0x0F) << 4) | (second >> 8)) as u8);
                out.push(second as u8);
            }
            [last] => {
                out.push((last >> 8) as u8);
                out.push(last as u8);
            }
            _ => unreachable!("chunks(2) yields one or two codes"),
        }
    }
    out
}

/// Encode and pack `data` into an archive.
pub fn compress(data: &[u8]) -> Vec<u8> {
    pack(&encode(data))
}

/// Deterministic pseudo-random bytes (linear congruential generator).
pub fn random_bytes(size: usize, mut seed: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    for _ in 0..size {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        data.push((seed >> 32) as u8);
    }
    data
}

/// Text-like data built by repeating a pangram.
pub fn text_like(size: usize) -> Vec<u8> {
    let text = b"The quick brown fox jumps over the lazy dog. \
                 Pack my box with five dozen liquor jugs. \
                 How vexingly quick daft zebras jump! ";
    text.iter().copied().cycle().take(size).collect()
}
