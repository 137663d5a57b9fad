//! Benchmarks for the snapshot codec and cart mutations.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use trolley_core::snapshot::{decode, encode};
use trolley_core::{Cart, CartItem};
use trolley_testkit::sample_products;

fn cart_with_items(count: usize) -> Cart {
    let items = sample_products(count)
        .into_iter()
        .enumerate()
        .map(|(i, product)| CartItem::new(product, (i as u32 % 9) + 1))
        .collect();
    Cart::from_items(items).expect("sample products have unique ids")
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot_encode");

    for count in [1usize, 10, 50] {
        let cart = cart_with_items(count);
        group.bench_with_input(BenchmarkId::new("items", count), &cart, |b, cart| {
            b.iter(|| encode(black_box(cart)));
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot_decode");

    for count in [1usize, 10, 50] {
        let text = encode(&cart_with_items(count)).expect("sample cart encodes");
        group.bench_with_input(BenchmarkId::new("items", count), &text, |b, text| {
            b.iter(|| decode(black_box(text)));
        });
    }

    group.finish();
}

fn bench_cart_mutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("cart_mutation");

    let cart = cart_with_items(50);
    let last = cart.items()[49].id();

    group.bench_function("amount_of_last_of_50", |b| {
        b.iter(|| black_box(&cart).amount_of(black_box(last)));
    });

    group.bench_function("clone_and_increment_last_of_50", |b| {
        b.iter(|| {
            let mut cart = cart.clone();
            cart.increment(black_box(last)).expect("product is in the cart");
            cart
        });
    });

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_cart_mutation);
criterion_main!(benches);
