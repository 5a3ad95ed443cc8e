// Copyright 2026 the Keyhole Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyhole Property: composable partial accessors.
//!
//! This crate provides [`Property`], a getter/setter pair focused on one part
//! of a larger value. Reads are partial, so incomplete data answers with
//! `None` instead of panicking, and writes rework the whole in place through
//! `&mut`. Batching of assignments and transformations over a shared whole is
//! provided by `keyhole_batch`.
//!
//! ## Core Concepts
//!
//! ### Accessors
//!
//! A [`Property<A, B>`] reads and rewrites a `B`-typed part of an `A`-typed
//! whole:
//!
//! - **get** - reads the current part, `None` when it is absent
//! - **mutate** - rewrites the part in place from its current value
//!
//! Both halves are plain closures supplied to [`Property::of`], so a property
//! can focus on a struct field, a map entry, the front of a queue, or
//! anything else with a read-one/store-one shape.
//!
//! ### Composition
//!
//! [`Property::to`] chains an accessor for `B`-in-`A` with an accessor for
//! `C`-in-`B` into an accessor for `C`-in-`A`. Absence at any level makes the
//! composite read `None` and turns its write into a no-op, so a whole chain
//! of optional structure can be traversed without any absence checks at the
//! call site.
//!
//! ## Quick Start
//!
//! ```rust
//! use keyhole_property::Property;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Address {
//!     city: Option<String>,
//! }
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Person {
//!     address: Option<Address>,
//! }
//!
//! let address: Property<Person, Address> = Property::of(
//!     |p: &Person| p.address.clone(),
//!     |p, a| p.address = Some(a),
//! );
//! let city: Property<Address, String> = Property::of(
//!     |a: &Address| a.city.clone(),
//!     |a, c| a.city = Some(c),
//! );
//! let person_city = address.to(&city);
//!
//! let mut person = Person { address: None };
//! assert_eq!(person_city.get(&person), None);
//!
//! // A missing address leaves the write with nowhere to land.
//! assert!(!person_city.mutate(&mut person, |_| Some("Lyon".to_string())));
//! assert_eq!(person_city.get(&person), None);
//!
//! // Once the address exists, the composed accessor reaches through it.
//! person.address = Some(Address { city: None });
//! assert!(person_city.mutate(&mut person, |_| Some("Lyon".to_string())));
//! assert_eq!(person_city.get(&person), Some("Lyon".to_string()));
//! ```
//!
//! ## Accessor Discipline
//!
//! The getter and setter of a property are expected to agree with each other:
//!
//! - storing a part and reading it back yields the stored part;
//! - storing back a part that was just read leaves the whole unchanged;
//! - of two consecutive stores, only the second one survives.
//!
//! Nothing in this crate checks these round-trip rules at runtime. Accessors
//! that bend them still work mechanically, but composites built from them
//! inherit the bent behavior.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod property;

pub use property::Property;
