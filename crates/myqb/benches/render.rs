use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use myqb::{QueryBuilder, Value};

/// Build a SELECT over `n` columns with `n` WHERE conditions.
fn build_select(n: usize) -> QueryBuilder {
    let mut qb = QueryBuilder::new("app_");
    let fields: Vec<String> = (0..n).map(|i| format!("col{i}")).collect();
    qb.select(fields, "t");
    for i in 0..n {
        qb.filter(&format!("col{i}"), i as i64);
    }
    qb
}

fn bench_render_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/select");

    for n in [1, 5, 10, 50, 100] {
        let qb = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &qb, |b, qb| {
            b.iter(|| black_box(qb.to_sql().unwrap()));
        });
    }

    group.finish();
}

fn bench_build_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/build_and_render");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let qb = build_select(n);
                black_box(qb.to_sql().unwrap());
            });
        });
    }

    group.finish();
}

fn bench_render_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/insert");

    for n in [1, 5, 20, 100] {
        let mut qb = QueryBuilder::new("app_");
        let data: Vec<(String, Value)> = (0..n)
            .map(|i| (format!("col{i}"), Value::from(i as i64)))
            .collect();
        qb.insert("t", data);
        group.bench_with_input(BenchmarkId::from_parameter(n), &qb, |b, qb| {
            b.iter(|| black_box(qb.to_sql().unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_render_select,
    bench_build_and_render,
    bench_render_insert
);
criterion_main!(benches);
