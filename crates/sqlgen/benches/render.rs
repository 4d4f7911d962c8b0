use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlgen::{Row, SqlGenerator};

/// SELECT col0, col1, ... FROM t WHERE col0 = 0 AND col1 = 1 ...
fn build_select(n: usize) -> SqlGenerator {
    let mut sql = SqlGenerator::new();
    sql.from("t");
    for i in 0..n {
        let col = format!("col{i}");
        sql.select(col.as_str()).where_(&col, &format!("= {i}"));
    }
    sql
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/select");

    for n in [1, 5, 10, 50, 100] {
        let sql = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &sql, |b, sql| {
            b.iter(|| black_box(sql.render()));
        });
    }

    group.finish();
}

fn bench_build_and_get_sql(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/build_and_get_sql");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut sql = build_select(n);
                black_box(sql.get_sql(true));
            });
        });
    }

    group.finish();
}

fn bench_multi_row_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/insert_rows");

    for n in [5, 20, 100, 500] {
        let rows: Vec<Row> = (0..n)
            .map(|i| Row::new().value("id", i).value("name", format!("'user{i}'")))
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &rows, |b, rows| {
            b.iter(|| {
                let mut sql = SqlGenerator::new();
                sql.insert(rows.clone()).into_table("users");
                black_box(sql.get_sql(false));
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_render,
    bench_build_and_get_sql,
    bench_multi_row_insert
);
criterion_main!(benches);
