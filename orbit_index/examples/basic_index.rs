// Copyright 2026 the Orbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Orbit Index: insert boxes, then probe for overlaps with a margin.

use orbit_index::{Aabb2D, Index};

fn main() {
    let mut idx: Index<&str> = Index::new();
    idx.insert(Aabb2D::from_center(100.0, 0.0, 150.0, 80.0), "note");
    idx.insert(Aabb2D::from_center(0.0, 100.0, 150.0, 80.0), "event");

    // Probe a spot between the two, requiring an 8px gap.
    let probe = Aabb2D::from_center(80.0, 80.0, 150.0, 80.0).inflate(8.0);
    let blockers: Vec<_> = idx.query_rect(probe).map(|(_, name)| *name).collect();
    println!("blockers at (80,80): {blockers:?}");

    let far = Aabb2D::from_center(400.0, 400.0, 150.0, 80.0).inflate(8.0);
    println!("(400,400) occupied: {}", idx.any_overlapping(far));
}
