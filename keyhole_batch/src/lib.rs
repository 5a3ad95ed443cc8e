// Copyright 2026 the Keyhole Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyhole Batch: replayable batches of property mutations.
//!
//! A [`Batch`] accumulates pending work against a single whole type `A`:
//! assignments (store this value) and transformations (rewrite the current
//! part), each addressed through a [`Property`](keyhole_property::Property).
//! The batch is heterogeneous over part types, but every entry is statically
//! typed at the call that appends it; entries are erased internally, so
//! applying a batch never involves a downcast.
//!
//! ## Ordering
//!
//! Every apply variant runs all assignments before any transformation, no
//! matter how the `set` and `transform` calls were interleaved while the
//! batch was built. Assignments always keep their insertion order.
//! Transformations keep theirs in the sequential variants; the parallel
//! variants run them in no particular order.
//!
//! ## Apply Variants
//!
//! | Variant | Transformation phase | Hook |
//! |---------|----------------------|------|
//! | [`Batch::apply`] | in order | none |
//! | [`Batch::apply_with_hook`] | in order | after every entry, in order |
//! | [`Batch::apply_parallel`] | worker pool, unordered | none |
//! | [`Batch::apply_parallel_with_hook`] | worker pool, unordered | once per entry, unordered |
//!
//! The parallel variants are available with the `parallel` feature (enabled
//! by default). They keep each entry atomic by running it under a short
//! exclusive lock on the whole; see [`Batch::apply_parallel`] for the exact
//! contract.
//!
//! ## Quick Start
//!
//! ```rust
//! use keyhole_batch::Batch;
//! use keyhole_property::Property;
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct Counter {
//!     value: i32,
//! }
//!
//! let value: Property<Counter, i32> =
//!     Property::of(|c: &Counter| Some(c.value), |c, v| c.value = v);
//!
//! let mut batch = Batch::new();
//! batch.set(&value, 4);
//! batch.transform(&value, |v| v * v);
//! batch.transform(&value, |v| 2 * v);
//!
//! let mut counter = Counter::default();
//! let mut trace = Vec::new();
//! batch.apply_with_hook(&mut counter, |c| trace.push(c.value));
//! assert_eq!(trace, [4, 16, 32]);
//! assert_eq!(counter.value, 32);
//! ```
//!
//! ## `no_std` Support
//!
//! The sequential API is `no_std` and uses `alloc`. The `parallel` feature
//! (and the `std` feature it implies) brings in the worker pool.

#![no_std]

extern crate alloc;

mod batch;
mod entry;
#[cfg(feature = "parallel")]
mod parallel;

pub use batch::Batch;
pub use entry::Operator;
