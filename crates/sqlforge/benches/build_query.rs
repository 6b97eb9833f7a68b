use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlforge::{ClauseOperator, QueryBuilder};

/// Build a SELECT with `n` projected columns and `n` WHERE predicates:
/// SELECT [col0], [col1], ... FROM [t] WHERE [col0] = @col0 AND ...
fn build_select(n: usize) -> QueryBuilder {
    let columns: Vec<String> = (0..n).map(|i| format!("col{i}")).collect();
    let mut qb = QueryBuilder::new();
    qb.select(columns.iter().map(String::as_str)).from(["t"]);
    for (i, column) in columns.iter().enumerate() {
        qb.where_equals(column, i as i64, None, ClauseOperator::And)
            .unwrap();
    }
    qb
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_builder/build");

    for n in [1, 5, 10, 50, 100] {
        let qb = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &qb, |b, qb| {
            b.iter(|| black_box(qb.build()));
        });
    }

    group.finish();
}

fn bench_assemble_and_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_builder/assemble_and_build");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let qb = build_select(n);
                black_box(qb.build());
            });
        });
    }

    group.finish();
}

fn bench_where_in(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_builder/where_in");

    for n in [5, 20, 100, 500] {
        let values: Vec<i64> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| {
                let mut qb = QueryBuilder::new();
                qb.select_all().from(["t"]);
                qb.where_in("id", values.iter().copied(), ClauseOperator::And)
                    .unwrap();
                black_box(qb.build());
            });
        });
    }

    group.finish();
}

fn bench_add_count_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_builder/add_count_query");

    for n in [1, 10, 50] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut qb = build_select(n);
                qb.order_by("col0", true);
                qb.paginate(2, 25).unwrap();
                qb.add_count_query();
                black_box(qb.build());
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_assemble_and_build,
    bench_where_in,
    bench_add_count_query
);
criterion_main!(benches);
