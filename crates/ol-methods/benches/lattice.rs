use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ol_methods::{convert_to_discrete, BinomialModel};

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("lattice_build");
    for steps in [100usize, 500, 1000] {
        let p = convert_to_discrete(1.0, 100.0, 0.05, 0.2, 0.01, steps).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(steps), &p, |b, p| {
            b.iter(|| BinomialModel::from_parameters(black_box(p)).unwrap())
        });
    }
    group.finish();
}

fn bench_american_put(c: &mut Criterion) {
    let mut group = c.benchmark_group("american_put");
    for steps in [100usize, 500, 1000] {
        let p = convert_to_discrete(1.0, 100.0, 0.05, 0.2, 0.01, steps).unwrap();
        let mut model = BinomialModel::from_parameters(&p).unwrap();
        group.bench_function(BenchmarkId::from_parameter(steps), |b| {
            b.iter(|| model.american_put(black_box(100.0), None).unwrap())
        });
    }
    group.finish();
}

fn bench_futures_option(c: &mut Criterion) {
    let p = convert_to_discrete(1.0, 100.0, 0.05, 0.2, 0.01, 500).unwrap();
    let mut model = BinomialModel::from_parameters(&p).unwrap();
    c.bench_function("american_call_on_futures_500", |b| {
        b.iter(|| model.american_call(black_box(100.0), Some(250)).unwrap())
    });
}

criterion_group!(benches, bench_build, bench_american_put, bench_futures_option);
criterion_main!(benches);
