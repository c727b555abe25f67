#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Comparison benchmarks: arq vs url::form_urlencoded
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use url::form_urlencoded;

fn bench_decode_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    let input = "key1=value1&key2=value+with+spaces&item=s%23e&key1=value2&flag";

    group.bench_function("arq", |b| {
        b.iter(|| arq::decode_query(black_box(input)));
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| {
            form_urlencoded::parse(black_box(input).as_bytes()).collect::<Vec<_>>()
        });
    });

    group.finish();
}

fn bench_encode_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    let mut map = arq::QueryMultiMap::new();
    map.append("key1", "value1");
    map.append("key2", "value with spaces");
    map.append("item", "s#e");
    map.append("key1", "value2");

    group.bench_function("arq", |b| {
        b.iter(|| arq::encode_query(black_box(&map)));
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| {
            form_urlencoded::Serializer::new(String::new())
                .append_pair("key1", "value1")
                .append_pair("key2", "value with spaces")
                .append_pair("item", "s#e")
                .append_pair("key1", "value2")
                .finish()
        });
    });

    group.finish();
}

fn bench_view_mutation(c: &mut Criterion) {
    use arq::QueryStoreExt;

    let mut group = c.benchmark_group("view_mutation");

    group.bench_function("add_remove", |b| {
        b.iter(|| {
            let mut query = String::from("key1=value1&key2=value2");
            query
                .query_view()
                .add("key3", &["value3", "value4"])
                .unwrap()
                .remove("key1")
                .unwrap();
            black_box(query)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_decode_all,
    bench_encode_all,
    bench_view_mutation
);

criterion_main!(benches);
