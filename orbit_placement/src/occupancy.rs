// Copyright 2026 the Orbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Occupancy checks: does a box at a candidate polar position collide with any placed item?
//!
//! An [`Occupancy`] is a snapshot of the placed items' boxes, built once per
//! placement call and probed many times by the free-slot search.
//!
//! Collision rule: the probe box is inflated by the collision margin on every
//! side and tested for strict overlap with each item's box. Two boxes exactly
//! `margin` apart are therefore free.

use kurbo::{Point, Size};
use orbit_index::{Aabb2D, Backend, FlatVec, Grid, Index};

use crate::config::{PlacementConfig, SizeTable};
use crate::polar::to_cartesian;
use crate::types::{ItemId, PlacedItem, PolarPosition};

/// Box of `size` centered on the Cartesian projection of `position`.
pub fn box_at(position: PolarPosition, size: Size, center: Point) -> Aabb2D {
    let p = to_cartesian(position, center);
    Aabb2D::from_center(p.x, p.y, size.width, size.height)
}

/// Box of a placed item, using its own size or the kind default.
pub fn item_box(item: &PlacedItem, sizes: &SizeTable, center: Point) -> Aabb2D {
    let size = item.size.unwrap_or_else(|| sizes.get(item.kind));
    box_at(item.position(), size, center)
}

/// Snapshot of placed item boxes for repeated occupancy queries.
#[derive(Clone, Debug)]
pub struct Occupancy<B: Backend = FlatVec> {
    index: Index<ItemId, B>,
    center: Point,
    probe: Size,
    margin: f64,
}

impl Occupancy<FlatVec> {
    /// Snapshot `items` with a linear-scan backend, skipping `exclude`.
    pub fn new(
        items: &[PlacedItem],
        exclude: Option<ItemId>,
        center: Point,
        config: &PlacementConfig,
    ) -> Self {
        Self::with_index(Index::new(), items, exclude, center, config)
    }
}

impl Occupancy<Grid> {
    /// Snapshot `items` into a uniform grid, skipping `exclude`.
    ///
    /// Cells are sized to the inflated probe box and anchored at `center`.
    pub fn with_grid(
        items: &[PlacedItem],
        exclude: Option<ItemId>,
        center: Point,
        config: &PlacementConfig,
    ) -> Self {
        let cell_w = config.probe_size.width + 2.0 * config.collision_margin;
        let cell_h = config.probe_size.height + 2.0 * config.collision_margin;
        let index = Index::with_uniform_grid(cell_w, cell_h, center.x, center.y);
        Self::with_index(index, items, exclude, center, config)
    }
}

impl<B: Backend> Occupancy<B> {
    /// Snapshot `items` into a caller-provided (empty) index, skipping `exclude`.
    pub fn with_index(
        mut index: Index<ItemId, B>,
        items: &[PlacedItem],
        exclude: Option<ItemId>,
        center: Point,
        config: &PlacementConfig,
    ) -> Self {
        index.reserve(items.len());
        for item in items {
            if Some(item.id) == exclude {
                continue;
            }
            index.insert(item_box(item, &config.sizes, center), item.id);
        }
        Self {
            index,
            center,
            probe: config.probe_size,
            margin: config.collision_margin,
        }
    }

    /// Use a different probe size for the incoming item.
    pub fn with_probe(mut self, probe: Size) -> Self {
        self.probe = probe;
        self
    }

    /// Inflated probe box tested against the snapshot for `position`.
    pub fn probe_box(&self, position: PolarPosition) -> Aabb2D {
        box_at(position, self.probe, self.center).inflate(self.margin)
    }

    /// True if nothing in the snapshot collides with a probe at `position`.
    pub fn is_free(&self, position: PolarPosition) -> bool {
        !self.index.any_overlapping(self.probe_box(position))
    }

    /// Ids of the items blocking a probe at `position`, in snapshot order.
    pub fn colliding(&self, position: PolarPosition) -> impl Iterator<Item = ItemId> + '_ {
        self.index
            .query_rect(self.probe_box(position))
            .map(|(_, id)| *id)
    }

    /// Number of items in the snapshot.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True if the snapshot holds no items.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// One-shot occupancy check: is `position` free of every item except `exclude`?
pub fn is_free(
    position: PolarPosition,
    items: &[PlacedItem],
    exclude: Option<ItemId>,
    center: Point,
    config: &PlacementConfig,
) -> bool {
    Occupancy::new(items, exclude, center, config).is_free(position)
}
