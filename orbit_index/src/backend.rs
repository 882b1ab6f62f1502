// Copyright 2026 the Orbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend trait for spatial indexing implementations.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::types::Aabb2D;

/// Spatial backend abstraction used by [`Index`](crate::Index).
///
/// Slots are dense indices in insertion order: the `n`th box pushed is slot `n`.
pub trait Backend: Debug {
    /// Append a box as the next slot.
    fn push(&mut self, aabb: Aabb2D);

    /// Clear all spatial structures.
    fn clear(&mut self);

    /// Append every slot whose AABB overlaps `rect` to `out`, in ascending slot order.
    fn query_overlapping(&self, rect: Aabb2D, out: &mut Vec<usize>);

    /// Whether any slot's AABB overlaps `rect`.
    ///
    /// The default collects the full result; backends override it to stop at the first hit.
    fn any_overlapping(&self, rect: Aabb2D) -> bool {
        let mut out = Vec::new();
        self.query_overlapping(rect, &mut out);
        !out.is_empty()
    }
}
