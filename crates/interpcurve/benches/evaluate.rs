//! Benchmarks for curve evaluation across modes and control-point counts.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use interpcurve::{Bounds, ControlPoints, CurveEvaluator, CurveMode, HermiteParams, mode::MODES};
use rand::{SeedableRng, rngs::StdRng};

/// Random control points with a fixed seed.
fn points(count: usize) -> ControlPoints {
    let mut rng = StdRng::seed_from_u64(42);
    ControlPoints::random(count, Bounds::default(), &mut rng).expect("valid points")
}

/// Evaluate the demo-sized curve in every mode.
fn bench_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("modes");
    let pts = points(6);

    for entry in MODES {
        let eval = CurveEvaluator::new(entry.mode);
        group.bench_function(BenchmarkId::new(entry.key, "6x20"), |b| {
            b.iter(|| eval.evaluate(black_box(&pts)))
        });
    }

    group.finish();
}

/// How Hermite evaluation scales with the number of control points.
fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");
    let eval = CurveEvaluator::new(CurveMode::Hermite).with_hermite(HermiteParams {
        tension: 0.3,
        bias: -0.2,
    });

    for count in [4, 16, 64, 256] {
        let pts = points(count);
        group.bench_function(BenchmarkId::new("hermite", count), |b| {
            b.iter(|| eval.evaluate(black_box(&pts)))
        });
    }

    group.finish();
}

#[allow(missing_docs, clippy::missing_docs_in_private_items)]
mod bench_defs {
    use super::*;
    criterion_group!(benches, bench_modes, bench_scaling);
}

pub use bench_defs::benches;
criterion_main!(benches);
