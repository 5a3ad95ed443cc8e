// Copyright 2026 the Keyhole Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parallel apply variants, gated behind the `parallel` feature.

use parking_lot::Mutex;
use rayon::prelude::*;

use crate::Batch;

impl<A: Send> Batch<A> {
    /// Applies assignments sequentially and in order, then fans the
    /// transformation entries out across the worker pool, blocking until
    /// every entry has run.
    ///
    /// Transformation entries run in no particular order, but each entry is
    /// atomic: it holds a short exclusive lock on the whole while it reads,
    /// rewrites, and stores its part. Entries targeting disjoint properties
    /// therefore produce the same final whole as a sequential application.
    /// Entries touching overlapping storage apply in an unspecified
    /// serialization order, so for same-property entries the surviving
    /// write is schedule-dependent.
    ///
    /// A panic from an operator or accessor propagates to the caller once
    /// the phase has drained; entries that already ran stay applied.
    pub fn apply_parallel(&self, whole: &mut A) {
        for entry in &self.assignments {
            entry.apply(whole);
        }
        let shared = Mutex::new(whole);
        self.transforms.as_slice().par_iter().for_each(|entry| {
            let mut guard = shared.lock();
            entry.apply(&mut **guard);
        });
    }

    /// Like [`Batch::apply_parallel`], but invokes `hook` once per entry.
    ///
    /// During the assignment phase the hook fires in order, after each
    /// assignment. During the transformation phase it fires from whichever
    /// worker ran the entry, while that entry's lock on the whole is still
    /// held, so the hook always observes the entry's mutation fully applied
    /// with no other entry mid-flight. Hook calls from different entries
    /// are unordered.
    ///
    /// Keep the hook cheap: it runs under the entry lock, so a slow hook
    /// serializes the phase.
    pub fn apply_parallel_with_hook<F>(&self, whole: &mut A, hook: F)
    where
        F: Fn(&A) + Send + Sync,
    {
        for entry in &self.assignments {
            entry.apply(whole);
            hook(whole);
        }
        let shared = Mutex::new(whole);
        self.transforms.as_slice().par_iter().for_each(|entry| {
            let mut guard = shared.lock();
            entry.apply(&mut **guard);
            hook(&**guard);
        });
    }
}
