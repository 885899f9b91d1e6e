// Copyright 2025 Cowboy AI, LLC.

//! Benchmarks for the composition pipeline

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vinovocab::{
    compose_visual_vocabulary, generate_evolution_sequence, resolve_regional_preset,
    Region, TastingParams,
};

fn compose_benchmark(c: &mut Criterion) {
    let params = Region::BurgundyRed.preset();
    c.bench_function("compose_visual_vocabulary", |b| {
        b.iter(|| compose_visual_vocabulary(black_box(&params)).unwrap())
    });
}

fn preset_benchmark(c: &mut Criterion) {
    c.bench_function("resolve_regional_preset", |b| {
        b.iter(|| resolve_regional_preset(black_box("barolo")).unwrap())
    });
}

fn evolution_benchmark(c: &mut Criterion) {
    let params = TastingParams {
        varietal: "nebbiolo".to_string(),
        acidity: 8.5,
        tannin: 9.0,
        ..TastingParams::default()
    };
    c.bench_function("generate_evolution_sequence", |b| {
        b.iter(|| generate_evolution_sequence(black_box(&params)).unwrap())
    });
}

criterion_group!(
    benches,
    compose_benchmark,
    preset_benchmark,
    evolution_benchmark
);
criterion_main!(benches);
