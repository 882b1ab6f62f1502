// Copyright 2026 the Orbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat vector backend with linear scans. Small and simple; good for tiny sets.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::backend::Backend;
use crate::types::Aabb2D;

/// Flat vector backend with linear scans.
#[derive(Clone, Default)]
pub struct FlatVec {
    entries: Vec<Aabb2D>,
}

impl Debug for FlatVec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlatVec")
            .field("slots", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl Backend for FlatVec {
    fn push(&mut self, aabb: Aabb2D) {
        self.entries.push(aabb);
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn query_overlapping(&self, rect: Aabb2D, out: &mut Vec<usize>) {
        for (i, a) in self.entries.iter().enumerate() {
            if a.overlaps(&rect) {
                out.push(i);
            }
        }
    }

    fn any_overlapping(&self, rect: Aabb2D) -> bool {
        self.entries.iter().any(|a| a.overlaps(&rect))
    }
}
