// Copyright 2026 the Keyhole Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Property`] accessor type and its composition.

use alloc::sync::Arc;
use core::fmt;

/// Shared getter half of a [`Property`]: reads the part out of the whole.
type Getter<A, B> = Arc<dyn Fn(&A) -> Option<B> + Send + Sync>;

/// Shared setter half of a [`Property`]: stores a part into the whole,
/// reporting whether the store landed.
type Setter<A, B> = Arc<dyn Fn(&mut A, B) -> bool + Send + Sync>;

/// A partial accessor for one part of a larger value.
///
/// A `Property<A, B>` pairs a getter and a setter focused on a `B`-typed part
/// of an `A`-typed whole. The getter is partial: a part that is currently
/// absent reads as `None` instead of panicking on incomplete data. The setter
/// stores a replacement part into the whole in place, through `&mut A`.
///
/// Properties are built from plain closures with [`Property::of`] and chained
/// into deeper accessors with [`Property::to`]. Cloning a `Property` is
/// cheap: the accessor closures are shared, not re-created.
pub struct Property<A, B> {
    get: Getter<A, B>,
    set: Setter<A, B>,
    name: Option<&'static str>,
}

impl<A, B> Property<A, B> {
    /// Creates a property from a getter and a setter.
    ///
    /// The getter returns `None` when the part is currently absent; it must
    /// not fail on incomplete wholes. The setter must accept a replacement
    /// part unconditionally, making room for it if the slot is empty, so
    /// that a value stored through [`Property::mutate`] can be read back.
    pub fn of<G, S>(get: G, set: S) -> Self
    where
        G: Fn(&A) -> Option<B> + Send + Sync + 'static,
        S: Fn(&mut A, B) + Send + Sync + 'static,
    {
        Self {
            get: Arc::new(get),
            set: Arc::new(move |whole: &mut A, part: B| {
                set(whole, part);
                true
            }),
            name: None,
        }
    }

    /// Creates a property that carries a diagnostic name.
    ///
    /// The name shows up in the [`Debug`] output and is otherwise
    /// uninterpreted.
    pub fn named<G, S>(name: &'static str, get: G, set: S) -> Self
    where
        G: Fn(&A) -> Option<B> + Send + Sync + 'static,
        S: Fn(&mut A, B) + Send + Sync + 'static,
    {
        Self {
            name: Some(name),
            ..Self::of(get, set)
        }
    }

    /// Returns the diagnostic name, if one was attached at construction.
    ///
    /// Composed properties are anonymous.
    #[must_use]
    #[inline]
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// Reads the current part out of `whole`.
    ///
    /// Returns `None` when the part is absent at any level the accessor
    /// traverses.
    #[must_use]
    pub fn get(&self, whole: &A) -> Option<B> {
        (*self.get)(whole)
    }

    /// Rewrites the part in place.
    ///
    /// Reads the current part exactly once and hands it to `mutator`, with
    /// absence passed through as `None`. When the mutator produces a
    /// replacement, the setter stores it; when it returns `None`, the whole
    /// is left untouched. The setter runs at most once per call.
    ///
    /// Returns `true` when a replacement was produced and stored. Returns
    /// `false` when the mutator declined, or when a composed accessor found
    /// an intermediate part absent and the store had nowhere to land.
    ///
    /// ```rust
    /// use keyhole_property::Property;
    ///
    /// let front: Property<Vec<i32>, i32> = Property::of(
    ///     |v: &Vec<i32>| v.first().copied(),
    ///     |v, n| {
    ///         if v.is_empty() {
    ///             v.push(n);
    ///         } else {
    ///             v[0] = n;
    ///         }
    ///     },
    /// );
    ///
    /// let mut values = vec![4, 5];
    /// assert!(front.mutate(&mut values, |n| n.map(|n| n * 10)));
    /// assert_eq!(values, [40, 5]);
    ///
    /// // Absence is handed to the mutator; `None` out means "do not store".
    /// assert!(!front.mutate(&mut Vec::new(), |n| n.map(|n| n * 10)));
    /// ```
    pub fn mutate<F>(&self, whole: &mut A, mutator: F) -> bool
    where
        F: FnOnce(Option<B>) -> Option<B>,
    {
        match mutator((*self.get)(whole)) {
            Some(part) => (*self.set)(whole, part),
            None => false,
        }
    }

    /// Composes this property with one that focuses deeper into its part.
    ///
    /// The result reads and writes `other`'s part through `self`'s part.
    /// Reading short-circuits to `None` as soon as either level is absent.
    /// Writing pulls the intermediate part out, lets `other` store into it,
    /// and stores the reworked intermediate back; when the intermediate is
    /// absent the write has nowhere to land, the whole is left untouched,
    /// and [`Property::mutate`] reports `false`.
    ///
    /// Composition is associative: `a.to(&b).to(&c)` behaves exactly like
    /// `a.to(&b.to(&c))` for every whole and every stored value.
    #[must_use]
    pub fn to<C>(&self, other: &Property<B, C>) -> Property<A, C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
    {
        let outer_read = Arc::clone(&self.get);
        let inner_read = Arc::clone(&other.get);
        let outer_get = Arc::clone(&self.get);
        let outer_set = Arc::clone(&self.set);
        let inner_set = Arc::clone(&other.set);
        Property {
            get: Arc::new(move |whole: &A| {
                (*outer_read)(whole).and_then(|part| (*inner_read)(&part))
            }),
            set: Arc::new(move |whole: &mut A, value: C| {
                let Some(mut part) = (*outer_get)(whole) else {
                    return false;
                };
                (*inner_set)(&mut part, value) && (*outer_set)(whole, part)
            }),
            name: None,
        }
    }
}

// Manual trait implementations to avoid requiring A: Clone, etc.

impl<A, B> Clone for Property<A, B> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            get: Arc::clone(&self.get),
            set: Arc::clone(&self.set),
            name: self.name,
        }
    }
}

impl<A, B> fmt::Debug for Property<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("name", &self.name)
            .field("whole", &core::any::type_name::<A>())
            .field("part", &core::any::type_name::<B>())
            .finish_non_exhaustive()
    }
}
