// Copyright 2026 the Keyhole Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Batch`] accumulator and its sequential apply variants.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use keyhole_property::Property;
use smallvec::SmallVec;

use crate::entry::{Assign, Entry, Operator, Transform};

/// How many entries each batch list holds before spilling to the heap.
///
/// Batches are typically assembled from a handful of pending mutations, so a
/// small inline capacity avoids allocating for the common case.
const INLINE_ENTRIES: usize = 4;

type EntryList<A> = SmallVec<[Box<dyn Entry<A>>; INLINE_ENTRIES]>;

/// An accumulated batch of pending mutations against one whole type.
///
/// A batch owns two ordered lists: assignments (store a fixed value) and
/// transformations (rewrite the current part with an operator). Entries keep
/// their insertion order within each list, and every apply variant runs all
/// assignments before any transformation, regardless of how the `set` and
/// `transform` calls were interleaved while the batch was built.
///
/// Applying a batch does not consume or clear it: the same batch can be
/// replayed against many wholes, and entries appended between applications
/// take part in later ones. The batch itself is populated through `&mut
/// self`, so concurrent population is ruled out statically.
///
/// ```rust
/// use keyhole_batch::Batch;
/// use keyhole_property::Property;
///
/// #[derive(Clone, Debug, Default, PartialEq)]
/// struct Container {
///     number: i32,
/// }
///
/// let number: Property<Container, i32> =
///     Property::of(|c: &Container| Some(c.number), |c, n| c.number = n);
///
/// let mut batch = Batch::new();
/// batch.transform(&number, |n| n + 1);
/// batch.set(&number, 40);
///
/// let mut container = Container::default();
/// batch.apply(&mut container);
/// assert_eq!(container.number, 41);
/// ```
pub struct Batch<A> {
    pub(crate) assignments: EntryList<A>,
    pub(crate) transforms: EntryList<A>,
}

impl<A> Batch<A> {
    /// Creates an empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self {
            assignments: SmallVec::new(),
            transforms: SmallVec::new(),
        }
    }

    /// Appends an assignment: replace `property`'s part with `value`.
    ///
    /// Assignments land even when the part is currently absent, as long as
    /// the property's own setter can make room for it. The value is cloned
    /// at each application, so the entry replays.
    pub fn set<B>(&mut self, property: &Property<A, B>, value: B)
    where
        A: 'static,
        B: Clone + Send + Sync + 'static,
    {
        self.assignments
            .push(Box::new(Assign::new(property.clone(), value)));
    }

    /// Appends a transformation: rewrite `property`'s part with `operator`.
    ///
    /// The operator only runs when the part is present; an absent part is
    /// left absent.
    pub fn transform<B, F>(&mut self, property: &Property<A, B>, operator: F)
    where
        A: 'static,
        B: 'static,
        F: Fn(B) -> B + Send + Sync + 'static,
    {
        self.push_transform(property.clone(), Box::new(operator));
    }

    /// Appends the left-to-right composition of `operators` as a single
    /// transformation entry.
    ///
    /// The part goes through the first operator, its result through the
    /// second, and so on, all within one entry: a hook passed to
    /// [`Batch::apply_with_hook`] observes only the final result, never an
    /// intermediate value. An empty sequence appends nothing.
    pub fn transform_chain<B>(&mut self, property: &Property<A, B>, operators: Vec<Operator<B>>)
    where
        A: 'static,
        B: 'static,
    {
        let chained = operators
            .into_iter()
            .reduce(|first, second| Box::new(move |part| second(first(part))));
        if let Some(operator) = chained {
            self.push_transform(property.clone(), operator);
        }
    }

    fn push_transform<B>(&mut self, property: Property<A, B>, operator: Operator<B>)
    where
        A: 'static,
        B: 'static,
    {
        self.transforms
            .push(Box::new(Transform::new(property, operator)));
    }

    /// Applies every entry to `whole`: assignments in insertion order, then
    /// transformations in insertion order.
    ///
    /// Entries already applied stay applied if a later entry panics; there
    /// is no rollback.
    pub fn apply(&self, whole: &mut A) {
        for entry in self.assignments.iter().chain(&self.transforms) {
            entry.apply(whole);
        }
    }

    /// Applies every entry in the same order as [`Batch::apply`], invoking
    /// `hook` with the whole immediately after each individual entry.
    ///
    /// A bulk entry appended by [`Batch::transform_chain`] counts as one
    /// entry, so the hook fires once for it, after all its composed
    /// operators have run. The hook also fires after an entry whose
    /// mutation was skipped because the part was absent.
    pub fn apply_with_hook<F>(&self, whole: &mut A, mut hook: F)
    where
        F: FnMut(&A),
    {
        for entry in self.assignments.iter().chain(&self.transforms) {
            entry.apply(whole);
            hook(whole);
        }
    }

    /// Returns the total number of entries in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len() + self.transforms.len()
    }

    /// Returns `true` when the batch holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty() && self.transforms.is_empty()
    }

    /// Returns the number of assignment entries.
    #[must_use]
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Returns the number of transformation entries.
    ///
    /// A chain appended by [`Batch::transform_chain`] counts as one.
    #[must_use]
    pub fn transform_count(&self) -> usize {
        self.transforms.len()
    }
}

impl<A> Default for Batch<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for Batch<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Batch")
            .field("whole", &core::any::type_name::<A>())
            .field("assignments", &self.assignments.len())
            .field("transforms", &self.transforms.len())
            .finish_non_exhaustive()
    }
}
