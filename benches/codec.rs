use bsv::{bsv, decode, encode, Table, Value};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn sample_table(lines: usize) -> Table {
    (0..lines)
        .map(|i| {
            vec![
                Value::from(format!("row-{i}")),
                Value::from("some text payload with spaces"),
                Value::Null,
                Value::Empty,
                Value::from("🌎 unicode"),
            ]
        })
        .collect()
}

fn benchmark_encode_small(c: &mut Criterion) {
    let table = bsv![["Hello", "🌎", null, ""], ["Test"]];

    c.bench_function("encode_small_table", |b| {
        b.iter(|| encode(black_box(&table)))
    });
}

fn benchmark_decode_small(c: &mut Criterion) {
    let bytes = encode(&bsv![["Hello", "🌎", null, ""], ["Test"]]);

    c.bench_function("decode_small_table", |b| {
        b.iter(|| decode(black_box(&bytes)))
    });
}

fn benchmark_encode_growing(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_table");

    for size in [10, 50, 100, 500].iter() {
        let table = sample_table(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &table, |b, table| {
            b.iter(|| encode(black_box(table)))
        });
    }

    group.finish();
}

fn benchmark_decode_growing(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_table");

    for size in [10, 50, 100, 500].iter() {
        let bytes = encode(&sample_table(*size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &bytes, |b, bytes| {
            b.iter(|| decode(black_box(bytes)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_encode_small,
    benchmark_decode_small,
    benchmark_encode_growing,
    benchmark_decode_growing
);
criterion_main!(benches);
