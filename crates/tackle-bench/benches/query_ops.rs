//! Criterion benchmarks for each lookup query on the reference profile.

use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use tackle_bench::{boundary_fixture, reference_fixture};
use tackle_query::{Complexity, LookupQuery, QuerySuite};

/// Benchmark: every query below cubic cost on the N=999 profile.
fn bench_reference_queries(c: &mut Criterion) {
    let fixture = reference_fixture().unwrap();
    let suite = QuerySuite::standard();
    let mut group = c.benchmark_group("query/reference");

    for query in suite.bounded_by(Complexity::Quadratic) {
        group.bench_function(query.name(), |b| {
            b.iter(|| black_box(query.run(&fixture)));
        });
    }
    group.finish();
}

/// Benchmark: the cubic nested scan on the N=999 profile.
///
/// Each iteration takes a substantial fraction of a second, so the sample
/// count is Criterion's minimum.
fn bench_reference_nested_scan(c: &mut Criterion) {
    let fixture = reference_fixture().unwrap();
    let suite = QuerySuite::standard();
    let mut group = c.benchmark_group("query/reference_cubic");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(30));

    for query in suite
        .queries()
        .iter()
        .filter(|q| q.complexity() == Complexity::Cubic)
    {
        group.bench_function(query.name(), |b| {
            b.iter(|| black_box(query.run(&fixture)));
        });
    }
    group.finish();
}

/// Benchmark: all six queries on the N=3 profile (harness overhead floor).
fn bench_boundary_queries(c: &mut Criterion) {
    let fixture = boundary_fixture().unwrap();
    let suite = QuerySuite::standard();
    let mut group = c.benchmark_group("query/boundary");

    for query in suite.queries() {
        group.bench_function(query.name(), |b| {
            b.iter(|| black_box(query.run(&fixture)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_reference_queries,
    bench_reference_nested_scan,
    bench_boundary_queries
);
criterion_main!(benches);
