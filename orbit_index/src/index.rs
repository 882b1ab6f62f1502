// Copyright 2026 the Orbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `Index` API and generic implementation over a pluggable backend.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::backend::Backend;
use crate::backends::{FlatVec, Grid};
use crate::types::Aabb2D;

/// Handle for an entry, valid until the index is cleared.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(u32);

impl Key {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Index keys are 32-bit; a canvas never holds that many boxes."
    )]
    const fn new(idx: usize) -> Self {
        Self(idx as u32)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Entry<P> {
    aabb: Aabb2D,
    payload: P,
}

/// An insert-only AABB index with user payloads, parameterized by a spatial backend.
///
/// Built once from a snapshot of boxes and then queried many times.
#[derive(Clone, Debug)]
pub struct Index<P, B: Backend = FlatVec> {
    entries: Vec<Entry<P>>,
    backend: B,
}

impl<P> Index<P, FlatVec> {
    /// Create an empty index using a linear-scan backend.
    pub fn new() -> Self {
        Self::with_backend(FlatVec::default())
    }
}

impl<P> Default for Index<P, FlatVec> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Index<P, Grid> {
    /// Create a grid-backed index with the given cell size and origin offset.
    pub fn with_uniform_grid(cell_w: f64, cell_h: f64, origin_x: f64, origin_y: f64) -> Self {
        Self::with_backend(Grid::new(cell_w, cell_h, origin_x, origin_y))
    }
}

impl<P, B: Backend> Index<P, B> {
    /// Create an empty index over an explicit backend.
    pub fn with_backend(backend: B) -> Self {
        Self {
            entries: Vec::new(),
            backend,
        }
    }

    /// Reserve space for at least `n` more entries.
    pub fn reserve(&mut self, n: usize) {
        self.entries.reserve(n);
    }

    /// Insert a new AABB with payload. Returns its `Key`.
    pub fn insert(&mut self, aabb: Aabb2D, payload: P) -> Key {
        let key = Key::new(self.entries.len());
        self.backend.push(aabb);
        self.entries.push(Entry { aabb, payload });
        key
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all entries. Previously issued keys become invalid.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.backend.clear();
    }

    /// The AABB stored for `key`.
    pub fn aabb(&self, key: Key) -> Option<Aabb2D> {
        self.entries.get(key.idx()).map(|e| e.aabb)
    }

    /// The payload stored for `key`.
    pub fn payload(&self, key: Key) -> Option<&P> {
        self.entries.get(key.idx()).map(|e| &e.payload)
    }

    /// Entries whose AABB overlaps `rect`, in insertion order.
    pub fn query_rect(&self, rect: Aabb2D) -> impl Iterator<Item = (Key, &P)> + '_ {
        let mut slots = Vec::new();
        self.backend.query_overlapping(rect, &mut slots);
        slots.into_iter().filter_map(move |i| {
            self.entries
                .get(i)
                .map(|e| (Key::new(i), &e.payload))
        })
    }

    /// Whether any entry's AABB overlaps `rect`.
    pub fn any_overlapping(&self, rect: Aabb2D) -> bool {
        self.backend.any_overlapping(rect)
    }
}
