// Copyright 2026 the Keyhole Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Batched mutation basics.
//!
//! Accumulate assignments and transformations against one whole, then apply
//! them sequentially, under a hook, and in parallel.
//!
//! Run:
//! - `cargo run -p keyhole_demos --example batch_basics`

use keyhole_batch::Batch;
use keyhole_property::Property;

#[derive(Clone, Debug, Default, PartialEq)]
struct Inventory {
    stock: i32,
    site: Option<String>,
}

fn main() {
    let stock: Property<Inventory, i32> =
        Property::named("stock", |i: &Inventory| Some(i.stock), |i, n| i.stock = n);
    let site: Property<Inventory, String> = Property::named(
        "site",
        |i: &Inventory| i.site.clone(),
        |i, s| i.site = Some(s),
    );

    let mut batch = Batch::new();
    // Interleave freely: assignments still apply before transformations.
    batch.transform(&stock, |n| n * 2);
    batch.set(&stock, 4);
    batch.set(&site, "riverside depot".to_string());
    batch.transform_chain(
        &site,
        vec![
            Box::new(|s: String| s.to_uppercase()),
            Box::new(|s: String| format!("[{s}]")),
        ],
    );
    println!(
        "batch holds {} assignments and {} transformation entries",
        batch.assignment_count(),
        batch.transform_count(),
    );

    let mut inventory = Inventory::default();
    batch.apply(&mut inventory);
    println!("sequential apply: {inventory:?}");

    // The hook sees the whole after each entry; the chained pair counts as
    // one entry, so its intermediate is never observed.
    let mut inventory = Inventory::default();
    batch.apply_with_hook(&mut inventory, |i| println!("  after entry: {i:?}"));
    println!("with hook: {inventory:?}");

    // Batches replay: the same batch applies to as many wholes as needed.
    let mut other = Inventory {
        stock: 100,
        site: None,
    };
    batch.apply_parallel(&mut other);
    println!("parallel apply to a second whole: {other:?}");
}
