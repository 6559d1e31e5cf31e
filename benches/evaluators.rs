use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use taylorsin::{sin_series_naive, Evaluator};

fn bench_evaluators(c: &mut Criterion) {
    let mut group = c.benchmark_group("sin");
    for evaluator in Evaluator::ALL {
        group.bench_with_input(BenchmarkId::new("f64", evaluator), &evaluator, |b, e| {
            b.iter(|| e.sin(black_box(0.5f64)))
        });
        group.bench_with_input(BenchmarkId::new("f32", evaluator), &evaluator, |b, e| {
            b.iter(|| e.sin(black_box(0.5f32)))
        });
    }
    group.finish();
}

fn bench_naive_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("naive_depth");
    for n in [1, 6, 17, 40] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| sin_series_naive(black_box(0.5f64), n))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_evaluators, bench_naive_depth);
criterion_main!(benches);
