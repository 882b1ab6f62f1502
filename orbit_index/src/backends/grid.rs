// Copyright 2026 the Orbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform grid backend. Buckets boxes by the cells they cover.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::backend::Backend;
use crate::types::Aabb2D;

/// Boxes covering more cells than this are kept in a side list and scanned linearly.
const MAX_CELLS_PER_BOX: i128 = 1024;

/// Uniform grid backend.
///
/// Coordinates are mapped to integer cell indices by floor-division of
/// `(x - origin_x) / cell_w` and `(y - origin_y) / cell_h`, so negative
/// coordinates are supported without an explicit origin.
/// Choose a cell size close to the typical box size so most boxes fall within a handful of cells.
#[derive(Clone)]
pub struct Grid {
    cell_w: f64,
    cell_h: f64,
    origin_x: f64,
    origin_y: f64,
    entries: Vec<Aabb2D>,
    cells: BTreeMap<(i64, i64), Vec<usize>>,
    oversized: Vec<usize>,
}

#[derive(Copy, Clone, Debug)]
struct CellSpan {
    min: (i64, i64),
    max: (i64, i64),
}

impl Grid {
    /// Create a grid backend with the given cell size and origin offset.
    pub fn new(cell_w: f64, cell_h: f64, origin_x: f64, origin_y: f64) -> Self {
        debug_assert!(cell_w > 0.0 && cell_h > 0.0, "cell sizes must be positive");
        Self {
            cell_w,
            cell_h,
            origin_x,
            origin_y,
            entries: Vec::new(),
            cells: BTreeMap::new(),
            oversized: Vec::new(),
        }
    }

    #[inline]
    fn floor_to_i64(v: f64) -> i64 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "the cast saturates; `span_for` bounds the resulting cell count."
        )]
        let i = v as i64;
        // Below `i64::MIN` the cast already saturated, so there is nothing to round down.
        if (i as f64) > v { i.saturating_sub(1) } else { i }
    }

    fn key_for(&self, x: f64, y: f64) -> (i64, i64) {
        let cx = Self::floor_to_i64((x - self.origin_x) / self.cell_w);
        let cy = Self::floor_to_i64((y - self.origin_y) / self.cell_h);
        (cx, cy)
    }

    /// Cell range covered by `a`, or `None` when it is non-finite or too large to bucket.
    fn span_for(&self, a: &Aabb2D) -> Option<CellSpan> {
        let finite = [a.min_x, a.min_y, a.max_x, a.max_y]
            .iter()
            .all(|v| v.is_finite());
        if !finite || a.is_empty() {
            return None;
        }
        let min = self.key_for(a.min_x, a.min_y);
        let max = self.key_for(a.max_x, a.max_y);
        let cols = i128::from(max.0) - i128::from(min.0) + 1;
        let rows = i128::from(max.1) - i128::from(min.1) + 1;
        cols.checked_mul(rows)
            .is_some_and(|cells| cells <= MAX_CELLS_PER_BOX)
            .then_some(CellSpan { min, max })
    }
}

impl Backend for Grid {
    fn push(&mut self, aabb: Aabb2D) {
        let slot = self.entries.len();
        self.entries.push(aabb);
        let Some(span) = self.span_for(&aabb) else {
            self.oversized.push(slot);
            return;
        };
        for y in span.min.1..=span.max.1 {
            for x in span.min.0..=span.max.0 {
                self.cells.entry((x, y)).or_default().push(slot);
            }
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.cells.clear();
        self.oversized.clear();
    }

    fn query_overlapping(&self, rect: Aabb2D, out: &mut Vec<usize>) {
        let Some(span) = self.span_for(&rect) else {
            for (i, a) in self.entries.iter().enumerate() {
                if a.overlaps(&rect) {
                    out.push(i);
                }
            }
            return;
        };
        let mut candidates: BTreeSet<usize> = self.oversized.iter().copied().collect();
        for y in span.min.1..=span.max.1 {
            for x in span.min.0..=span.max.0 {
                if let Some(slots) = self.cells.get(&(x, y)) {
                    candidates.extend(slots.iter().copied());
                }
            }
        }
        for slot in candidates {
            if let Some(a) = self.entries.get(slot)
                && a.overlaps(&rect)
            {
                out.push(slot);
            }
        }
    }
}

impl Debug for Grid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Grid")
            .field("cell_w", &self.cell_w)
            .field("cell_h", &self.cell_h)
            .field("origin_x", &self.origin_x)
            .field("origin_y", &self.origin_y)
            .field("slots", &self.entries.len())
            .field("cells", &self.cells.len())
            .field("oversized", &self.oversized.len())
            .finish_non_exhaustive()
    }
}
