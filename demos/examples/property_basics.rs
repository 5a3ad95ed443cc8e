// Copyright 2026 the Keyhole Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Partial accessor basics.
//!
//! Build properties over a small personnel model, then read and rework
//! nested parts through composed accessors.
//!
//! Run:
//! - `cargo run -p keyhole_demos --example property_basics`

use keyhole_property::Property;

#[derive(Clone, Debug, Default, PartialEq)]
struct Street {
    name: Option<String>,
    number: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Address {
    city: Option<String>,
    street: Option<Street>,
}

#[derive(Clone, Debug, PartialEq)]
struct Company {
    name: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Person {
    name: Option<String>,
    address: Option<Address>,
    work_history: Vec<Company>,
}

fn main() {
    let name: Property<Person, String> = Property::named(
        "name",
        |p: &Person| p.name.clone(),
        |p, n| p.name = Some(n),
    );
    let address: Property<Person, Address> = Property::named(
        "address",
        |p: &Person| p.address.clone(),
        |p, a| p.address = Some(a),
    );
    let street: Property<Address, Street> = Property::named(
        "street",
        |a: &Address| a.street.clone(),
        |a, s| a.street = Some(s),
    );
    let street_name: Property<Street, String> = Property::named(
        "street_name",
        |s: &Street| s.name.clone(),
        |s, n| s.name = Some(n),
    );

    // Reading through a composed accessor never panics on incomplete data.
    let person_street_name = address.to(&street).to(&street_name);
    let mut person = Person::default();
    println!(
        "street name before any data: {:?}",
        person_street_name.get(&person)
    );

    // A store with a missing intermediate has nowhere to land.
    let stored = person_street_name.mutate(&mut person, |_| Some("Sidney Street".to_string()));
    println!("store into an empty person landed: {stored}");

    // Fill the chain, then store again.
    name.mutate(&mut person, |_| Some("Ada".to_string()));
    address.mutate(&mut person, |_| {
        Some(Address {
            city: Some("Cambridge".to_string()),
            street: Some(Street::default()),
        })
    });
    let stored = person_street_name.mutate(&mut person, |_| Some("Sidney Street".to_string()));
    println!("store after filling the chain landed: {stored}");
    println!("street name now: {:?}", person_street_name.get(&person));

    // Rework the part from its current value.
    person_street_name.mutate(&mut person, |n| n.map(|n| n.to_uppercase()));
    println!("after uppercasing: {:?}", person_street_name.get(&person));

    // A list-valued part works like any other: read, rework, store.
    let employers: Property<Person, Vec<Company>> = Property::named(
        "employers",
        |p: &Person| Some(p.work_history.clone()),
        |p, w| p.work_history = w,
    );
    employers.mutate(&mut person, |history| {
        let mut history = history.unwrap_or_default();
        history.push(Company {
            name: "Acme Signals".to_string(),
        });
        Some(history)
    });
    println!("employers: {:?}", employers.get(&person));

    println!("final person: {person:?}");
}
