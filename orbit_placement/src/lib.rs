// Copyright 2026 the Orbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orbit Placement: drop-to-slot placement for items on a rotating circular dial.
//!
//! Items (notes, tasks, events, files) live at canvas-local polar positions around
//! the dial's center. When one is dropped, the engine:
//!
//! - maps the drop point to `(angle, distance)`, removing the dial's current rotation
//!   and clamping the distance inside the rim ([`to_polar`]);
//! - checks the item's box against every placed item's box with a fixed margin ([`Occupancy`]);
//! - if the spot is taken, searches outward in angle and then inward in radius for the
//!   first free slot ([`search()`]);
//! - appends a new item or relocates the dragged one ([`Placer::commit`]).
//!
//! No slot found is a normal outcome: the collection comes back untouched and the
//! outcome says why.
//!
//! ## Not a renderer
//!
//! This crate stores positions and nothing else. Drawing, persistence, and item
//! content editing belong to the caller.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use orbit_placement::{
//!     Canvas, DropEvent, ItemKind, Outcome, PlacementConfig, Placer, PolarPosition,
//!     SequentialIds,
//! };
//!
//! let canvas = Canvas::new(Point::new(400.0, 300.0), 0.0, 300.0);
//! let placer = Placer::new(canvas, PlacementConfig::default()).unwrap();
//! let mut ids = SequentialIds::default();
//!
//! // Drop a note 100px east of the center.
//! let event = DropEvent::palette(ItemKind::Note, Point::new(500.0, 300.0));
//! let done = placer.commit(&event, Vec::new(), &mut ids);
//! assert!(matches!(done.outcome, Outcome::Created(_)));
//! assert_eq!(done.items[0].position(), PolarPosition::new(0.0, 100.0));
//!
//! // Dropping a second note on the same spot pushes it around the ring.
//! let done = placer.commit(&event, done.items, &mut ids);
//! assert_eq!(done.items[1].position(), PolarPosition::new(65.0, 100.0));
//! ```
//!
//! ## Occupancy backends
//!
//! Occupancy snapshots are built on [`orbit_index`]. [`Occupancy::new`] uses a linear
//! scan, which suits the few dozen items a dial usually holds; [`Occupancy::with_grid`]
//! buckets boxes into a uniform grid for crowded canvases. Both give the same answers.
//!
//! ## Features
//!
//! - `std` (default) and `libm`: forwarded to `kurbo`.
//! - `serde` (default): serialization for items, drop events, and configuration.
//! - `v4` (default): [`RandomIds`], random UUID item identifiers.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod commit;
pub mod config;
pub mod occupancy;
pub mod polar;
pub mod search;
pub mod types;

#[cfg(feature = "v4")]
pub use commit::RandomIds;
pub use commit::{
    Committed, DropEvent, DropSource, IdSource, Outcome, Placer, Rejection, SequentialIds,
};
pub use config::{ConfigError, DEFAULT_ITEM_SIZE, PlacementConfig, SearchPasses, SizeTable};
pub use occupancy::{Occupancy, box_at, is_free, item_box};
pub use polar::{normalize_degrees, to_cartesian, to_polar, to_screen};
pub use search::{SlotSearch, Stage, Sweep, find_free_slot, search};
pub use types::{Canvas, ItemId, ItemKind, PlacedItem, PolarPosition};
