use criterion::{black_box, criterion_group, criterion_main, Criterion};
use postwire::prelude::*;
use std::collections::BTreeMap;

const N_BIG_ARR: usize = 2000;
const N_ARR: usize = 10;
const N_MAP: usize = 10;

#[derive(SerDe, Clone, Debug, PartialEq)]
struct Reading {
    sensor: String,
    values: Vec<i64>,
    scale: Option<f64>,
}

#[derive(SerDe, Clone, Debug, PartialEq)]
enum Frame {
    Idle,
    Batch(BTreeMap<u64, Reading>),
}

fn big_arr() -> Vec<i64> { (0..N_BIG_ARR).map(|i| i as i64 - 1000).collect() }

fn big_frames() -> Vec<Frame> {
    let values: Vec<i64> = (0..N_ARR).map(|i| (i as i64) << 20).collect();
    let m: BTreeMap<u64, Reading> = (0..N_MAP)
        .map(|i| {
            (i as u64, Reading {
                sensor: format!("sensor-{}", i),
                values: values.clone(),
                scale: if i % 2 == 0 { Some(0.5) } else { None },
            })
        })
        .collect();
    std::iter::repeat(Frame::Batch(m))
        .take(N_ARR)
        .chain(std::iter::once(Frame::Idle))
        .collect()
}

fn bench_enc(c: &mut Criterion) {
    let frames = big_frames();
    let enc_len = encode_full(&frames).len();
    c.bench_function(
        &format!("Encoding frames, output size of {} bytes", enc_len),
        move |b| b.iter(|| encode_full(black_box(&frames))),
    );
}

fn bench_enc_single_alloc(c: &mut Criterion) {
    let frames = big_frames();
    let enc_len = encode_full(&frames).len();
    c.bench_function(
        &format!(
            "Encoding frames, output size of {} bytes, buffer preallocated",
            enc_len
        ),
        move |b| {
            b.iter(|| {
                let mut out = OutputBuffer::with_capacity(enc_len * 2);
                encode(black_box(&frames), &mut out);
                out.finalize()
            })
        },
    );
}

fn bench_dec(c: &mut Criterion) {
    let enc = encode_full(&big_frames());
    c.bench_function(
        &format!("Decoding frames, input size of {} bytes", enc.len()),
        move |b| b.iter(|| decode_full::<Vec<Frame>>(black_box(&enc)).unwrap()),
    );
}

fn bench_enc_flat(c: &mut Criterion) {
    let arr = big_arr();
    let enc_len = encode_full(&arr).len();
    c.bench_function(
        &format!("Encoding a vector, output size of {} bytes", enc_len),
        move |b| b.iter(|| encode_full(black_box(&arr))),
    );
}

fn bench_dec_flat(c: &mut Criterion) {
    let enc = encode_full(&big_arr());
    c.bench_function(
        &format!("Decoding a vector, input size of {} bytes", enc.len()),
        move |b| b.iter(|| decode_full::<Vec<i64>>(black_box(&enc)).unwrap()),
    );
}

criterion_group!(
    benches,
    bench_enc,
    bench_enc_single_alloc,
    bench_dec,
    bench_enc_flat,
    bench_dec_flat
);
criterion_main!(benches);
