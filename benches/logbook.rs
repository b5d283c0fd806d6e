#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::collections::HashMap;

use criterion::{criterion_group, criterion_main, Criterion};
use logbook::LogbookMap;
use proptest::{prelude::{any, Strategy}, strategy::ValueTree, test_runner::TestRunner};

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;

fn map_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items = any::<[(String, String); ITEMS_AMOUNT]>()
    .new_tree(&mut runner)
    .unwrap()
    .current();


    let mut group = c.benchmark_group("Hash map comparison benchmark");
    group.sample_size(SAMPLE_SIZE);
    let mut logbook_map = LogbookMap::new();
    let mut rust_map = HashMap::new();
    group.bench_function("logbook set", |b| {
        b.iter(
            || {
            for (key, value) in items.clone() {
                logbook_map.set(key, value);
            }

        });
    });
    group.bench_function("rust std insert", |b| {
        b.iter(
            || {
            for (key, value) in items.clone() {
                rust_map.insert(key, value);
            }

        });
    });
    group.bench_function("logbook get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = logbook_map.get(key).is_ok();
            }
        });
    });
    group.bench_function("rust std get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = rust_map.get(key);
            }
        });
    });
    group.finish();
}

criterion_group!(benches, map_benches);

criterion_main!(benches);
