// Copyright 2026 the Keyhole Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Type-erased batch entries.
//!
//! A batch is heterogeneous over part types: one entry may assign a string
//! while the next transforms an integer. Each pending mutation is pinned to
//! its concrete part type by a generic adapter ([`Assign`] or [`Transform`])
//! and then erased behind [`Entry`], so the batch stores a homogeneous
//! sequence of `Box<dyn Entry<A>>`.

use alloc::boxed::Box;

use keyhole_property::Property;

/// A boxed part-to-part operator, as stored by a transformation entry.
pub type Operator<B> = Box<dyn Fn(B) -> B + Send + Sync>;

/// One pending mutation of an `A`-typed whole.
///
/// `Send + Sync` is a supertrait so that erased entries can fan out across
/// worker threads in the parallel apply variants.
pub(crate) trait Entry<A>: Send + Sync {
    /// Applies this entry's mutation to `whole`.
    fn apply(&self, whole: &mut A);
}

/// An assignment entry: replaces the part with a fixed value.
pub(crate) struct Assign<A, B> {
    property: Property<A, B>,
    value: B,
}

impl<A, B> Assign<A, B> {
    pub(crate) fn new(property: Property<A, B>, value: B) -> Self {
        Self { property, value }
    }
}

impl<A, B: Clone + Send + Sync> Entry<A> for Assign<A, B> {
    fn apply(&self, whole: &mut A) {
        // Cloned per application, so the entry can replay.
        let value = self.value.clone();
        self.property.mutate(whole, move |_| Some(value));
    }
}

/// A transformation entry: rewrites the part with a unary operator.
pub(crate) struct Transform<A, B> {
    property: Property<A, B>,
    operator: Operator<B>,
}

impl<A, B> Transform<A, B> {
    pub(crate) fn new(property: Property<A, B>, operator: Operator<B>) -> Self {
        Self { property, operator }
    }
}

impl<A, B> Entry<A> for Transform<A, B> {
    fn apply(&self, whole: &mut A) {
        // An absent part stays absent; the operator only sees real values.
        self.property
            .mutate(whole, |part| part.map(|b| (self.operator)(b)));
    }
}
