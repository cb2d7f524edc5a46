//! Throughput benchmarks for the unpacker and the decoder.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lzw12::{LzwDecoder, decode, unpack};
use std::hint::black_box;

const SIZES: [usize; 3] = [1024, 16 * 1024, 256 * 1024];

/// Deterministic pseudo-random bytes.
fn random_packed(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut seed: u64 = 0x123456789ABCDEF0;
    for _ in 0..size {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        data.push((seed >> 32) as u8);
    }
    data
}

/// Codes that only reference the base alphabet.
fn literal_codes(count: usize) -> Vec<u16> {
    let text = b"The quick brown fox jumps over the lazy dog. ";
    text.iter().copied().cycle().take(count).map(u16::from).collect()
}

/// Codes that always hit the self-referential case, producing long entries
/// and repeated wraparounds.
fn run_codes(count: usize) -> Vec<u16> {
    let mut codes = vec![u16::from(b'A')];
    let mut next = 256u16;
    for _ in 1..count {
        codes.push(next);
        next = if next == 4095 { 256 } else { next + 1 };
    }
    codes
}

fn bench_unpack(c: &mut Criterion) {
    let mut group = c.benchmark_group("unpack");
    for size in SIZES {
        let data = random_packed(size - size % 3);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| unpack(black_box(&data[..])).unwrap())
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for count in SIZES {
        let codes = literal_codes(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("literal", count), &codes, |b, codes| {
            b.iter(|| decode(black_box(codes)).unwrap())
        });
    }

    // Output grows quadratically with the run length; keep it short.
    let codes = run_codes(4096);
    group.throughput(Throughput::Elements(codes.len() as u64));
    group.bench_function("self_referential_4096", |b| {
        let mut decoder = LzwDecoder::new();
        b.iter(|| decoder.decode(black_box(&codes)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_unpack, bench_decode);
criterion_main!(benches);
