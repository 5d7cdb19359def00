// Copyright 2023-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Benchmarks for scoring receipts and for the in-memory receipt store.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use receipt_core::{
    manager::{context::memory::InMemoryReceiptStore, Manager},
    points, Item, Receipt,
};

fn create_receipt(item_count: usize) -> Receipt {
    Receipt {
        retailer: "M&M Corner Market".to_owned(),
        purchase_date: "2022-03-21".to_owned(),
        purchase_time: "14:33".to_owned(),
        total: "9.00".to_owned(),
        items: (0..item_count)
            .map(|idx| Item::new(format!("Item number {idx}"), "2.25"))
            .collect(),
    }
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let small = create_receipt(4);
    let large = create_receipt(1_000);

    c.bench_function("Score Receipt (4 items)", |b| {
        b.iter(|| points::score(black_box(&small)))
    });

    c.bench_function("Score Receipt (1000 items)", |b| {
        b.iter(|| points::score(black_box(&large)))
    });

    let manager = Manager::new(InMemoryReceiptStore::default());
    let receipt_id = manager.process_receipt(small.clone()).unwrap();

    c.bench_function("Process Receipt", |b| {
        b.iter(|| manager.process_receipt(black_box(small.clone())).unwrap())
    });

    c.bench_function("Score Stored Receipt", |b| {
        b.iter(|| manager.points(black_box(&receipt_id)).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
