//! Benchmarks for table interpolation and the full formula chain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tablecalc::{interpolate, Engine, Inputs, Policy, T, U};

// ============================================================================
// Benchmark: single interpolation
// ============================================================================

fn bench_interpolate(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolate");
    group.throughput(Throughput::Elements(1));

    group.bench_function("u_table_hit", |b| {
        b.iter(|| black_box(interpolate(&U, black_box(0.0), Policy::Strict)));
    });

    group.bench_function("u_between_keys", |b| {
        b.iter(|| black_box(interpolate(&U, black_box(-0.25), Policy::Strict)));
    });

    group.bench_function("t_between_keys", |b| {
        b.iter(|| black_box(interpolate(&T, black_box(7.3), Policy::Strict)));
    });

    group.bench_function("u_clamped", |b| {
        b.iter(|| black_box(interpolate(&U, black_box(9.0), Policy::Lenient)));
    });

    group.finish();
}

// ============================================================================
// Benchmark: full evaluation per policy
// ============================================================================

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    group.throughput(Throughput::Elements(1));

    let inputs = Inputs::new(1.0, 0.5, 0.5, "set");
    for policy in [Policy::Strict, Policy::Lenient] {
        let engine = Engine::new(policy);
        group.bench_with_input(BenchmarkId::from_parameter(policy), &inputs, |b, inputs| {
            b.iter(|| black_box(engine.evaluate(black_box(inputs))));
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: sweep across the U span
// ============================================================================

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    let points: Vec<f64> = (0..=1000).map(|i| -5.0 + i as f64 * 0.01).collect();
    group.throughput(Throughput::Elements(points.len() as u64));

    group.bench_function("u_1001_points", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &points {
                acc += interpolate(&U, x, Policy::Strict).unwrap_or(0.0);
            }
            black_box(acc)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_interpolate, bench_evaluate, bench_sweep);
criterion_main!(benches);
