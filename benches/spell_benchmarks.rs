//! Benchmarks for the speller
//!
//! Measures spelling cost by magnitude, mode and region.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use nombres::prelude::*;
use std::hint::black_box;

fn bench_magnitudes(c: &mut Criterion) {
    let mut group = c.benchmark_group("spell_magnitude");
    let options = Options::new();

    let values: [(&str, u128); 6] = [
        ("small", 16),
        ("tens", 97),
        ("thousands", 80_200),
        ("u32_max", u32::MAX as u128),
        ("u64_max", u64::MAX as u128),
        ("u128_max", u128::MAX),
    ];

    for (name, value) in values {
        group.bench_with_input(BenchmarkId::from_parameter(name), &value, |b, &value| {
            b.iter(|| spell_out(black_box(value), &options).unwrap())
        });
    }

    group.finish();
}

fn bench_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("spell_mode");
    let value = 1_999_999u32;

    for mode in [
        Mode::Cardinal,
        Mode::Ordinal,
        Mode::CardinalAsOrdinal,
        Mode::OrdinalSuffix,
    ] {
        let options = Options::new().mode(mode);
        group.bench_function(mode.as_str(), |b| {
            b.iter(|| spell_out(black_box(value), &options).unwrap())
        });
    }

    group.finish();
}

fn bench_regions(c: &mut Criterion) {
    let mut group = c.benchmark_group("spell_region");
    group.throughput(Throughput::Elements(100));

    for region in [Region::France, Region::Belgium, Region::Switzerland] {
        let options = Options::from(region);
        group.bench_function(format!("{:?}", region), |b| {
            b.iter(|| {
                for value in 0..100u8 {
                    black_box(spell_out(black_box(value), &options).unwrap());
                }
            })
        });
    }

    group.finish();
}

fn bench_options(c: &mut Criterion) {
    let mut group = c.benchmark_group("options");

    group.bench_function("parse_flags", |b| {
        b.iter(|| black_box("feminine | ordinal | belgium").parse::<Options>().unwrap())
    });

    group.bench_function("abbreviate", |b| {
        b.iter(|| abbreviate(black_box(1u8), &Options::new().feminine()).unwrap())
    });

    group.finish();
}

criterion_group!(
    spell_benches,
    bench_magnitudes,
    bench_modes,
    bench_regions,
    bench_options,
);

criterion_main!(spell_benches);
