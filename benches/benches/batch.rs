// Copyright 2026 the Keyhole Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `keyhole_property` + `keyhole_batch`.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use keyhole_batch::Batch;
use keyhole_property::Property;

#[derive(Clone, Debug, Default, PartialEq)]
struct Street {
    name: Option<String>,
    number: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Address {
    street: Option<Street>,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Person {
    address: Option<Address>,
}

fn address() -> Property<Person, Address> {
    Property::of(|p: &Person| p.address.clone(), |p, a| p.address = Some(a))
}

fn street() -> Property<Address, Street> {
    Property::of(|a: &Address| a.street.clone(), |a, s| a.street = Some(s))
}

fn number() -> Property<Street, i32> {
    Property::of(|s: &Street| s.number, |s, n| s.number = Some(n))
}

fn full_person() -> Person {
    Person {
        address: Some(Address {
            street: Some(Street {
                name: Some("High Street".to_string()),
                number: Some(7),
            }),
        }),
    }
}

#[derive(Clone, Debug, Default)]
struct Container {
    value: i32,
    label: Option<String>,
}

fn value() -> Property<Container, i32> {
    Property::of(|c: &Container| Some(c.value), |c, n| c.value = n)
}

fn label() -> Property<Container, String> {
    Property::of(|c: &Container| c.label.clone(), |c, s| c.label = Some(s))
}

/// Enough work per entry for the worker pool to matter.
fn churn(n: i32) -> i32 {
    (0..512).fold(n, |acc, _| acc.wrapping_mul(31).wrapping_add(7))
}

fn bench_accessors(c: &mut Criterion) {
    let mut group = c.benchmark_group("property/access");

    group.bench_function("get_flat", |b| {
        let value = value();
        let container = Container {
            value: 7,
            label: None,
        };
        b.iter(|| black_box(value.get(&container)))
    });

    group.bench_function("get_composed", |b| {
        let person_number = address().to(&street()).to(&number());
        let person = full_person();
        b.iter(|| black_box(person_number.get(&person)))
    });

    group.bench_function("mutate_flat", |b| {
        let value = value();
        let mut container = Container {
            value: 7,
            label: None,
        };
        b.iter(|| black_box(value.mutate(&mut container, |n| n.map(|n| n + 1))))
    });

    group.bench_function("mutate_composed", |b| {
        let person_number = address().to(&street()).to(&number());
        let mut person = full_person();
        b.iter(|| black_box(person_number.mutate(&mut person, |n| n.map(|n| n + 1))))
    });

    group.bench_function("compose_three_levels", |b| {
        let address = address();
        let street = street();
        let number = number();
        b.iter(|| black_box(address.to(&street).to(&number)))
    });

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch/apply");

    // The mixed batch from the walkthroughs: two assignments, two transforms.
    let value = value();
    let label = label();
    let mut mixed = Batch::new();
    mixed.set(&value, 4);
    mixed.set(&label, "depot".to_string());
    mixed.transform(&value, |n| n * n);
    mixed.transform(&label, |s| s.to_uppercase());

    group.bench_function("sequential", |b| {
        b.iter_batched(
            Container::default,
            |mut container| {
                mixed.apply(&mut container);
                black_box(container);
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("sequential_with_hook", |b| {
        b.iter_batched(
            Container::default,
            |mut container| {
                mixed.apply_with_hook(&mut container, |c| {
                    black_box(c.value);
                });
                black_box(container);
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("parallel", |b| {
        b.iter_batched(
            Container::default,
            |mut container| {
                mixed.apply_parallel(&mut container);
                black_box(container);
            },
            BatchSize::SmallInput,
        )
    });

    for entries in [4_usize, 64] {
        let mut wide = Batch::new();
        for _ in 0..entries {
            wide.transform(&value, churn);
        }

        group.bench_function(BenchmarkId::new("sequential_transforms", entries), |b| {
            b.iter_batched(
                Container::default,
                |mut container| {
                    wide.apply(&mut container);
                    black_box(container);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(BenchmarkId::new("parallel_transforms", entries), |b| {
            b.iter_batched(
                Container::default,
                |mut container| {
                    wide.apply_parallel(&mut container);
                    black_box(container);
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_accessors, bench_batch);
criterion_main!(benches);
