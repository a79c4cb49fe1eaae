use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sample_sizer::constants::DEFAULT_SIGNIFICANCE_THRESHOLD;
use sample_sizer::fisher::{fisher_exact, Alternative};
use sample_sizer::table::ContingencyTable;
use sample_sizer::evaluate;

pub fn evaluate_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Evaluate");
    for n in [150u64, 1_000, 10_000] {
        group.bench_function(format!("n = {}", n), |b| {
            b.iter(|| {
                evaluate(
                    black_box(n),
                    black_box(10.0),
                    black_box(12.0),
                    DEFAULT_SIGNIFICANCE_THRESHOLD,
                )
            })
        });
    }
    group.finish();

    let table = ContingencyTable::new([[1200, 1000], [8800, 9000]]);
    c.bench_function("fisher two-sided", |b| {
        b.iter(|| fisher_exact(black_box(&table), Alternative::TwoSided))
    });
}

criterion_group!(benches, evaluate_benchmarks);
criterion_main!(benches);
