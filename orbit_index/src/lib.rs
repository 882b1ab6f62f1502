// Copyright 2026 the Orbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orbit Index: an insert-only 2D AABB occupancy index.
//!
//! Orbit Index is the spatial building block under the radial placement engine.
//!
//! - Insert axis-aligned bounding boxes (AABBs) with user payloads.
//! - Query for every box overlapping a rectangle, or just ask whether any does.
//!
//! Overlap is strict: boxes that only touch along an edge do not overlap.
//! To require a minimum gap between boxes, inflate the query rectangle by that gap.
//!
//! It works in `f64` and does not depend on any geometry crate.
//! Higher layers (like the placement engine) compute boxes and feed them here.
//!
//! Backends are pluggable via a simple trait so you can swap the spatial strategy without API churn.
//! The default backend is a flat vector (linear scan).
//! A uniform grid backend is available for crowded scenes.
//!
//! # Example
//!
//! ```rust
//! use orbit_index::{Aabb2D, Index};
//!
//! let mut idx: Index<&str> = Index::new();
//! idx.insert(Aabb2D::from_center(100.0, 0.0, 150.0, 80.0), "note");
//! idx.insert(Aabb2D::from_center(-100.0, 0.0, 150.0, 80.0), "task");
//!
//! // A probe box next to the note, with an 8px gap required.
//! let probe = Aabb2D::from_center(100.0, 84.0, 150.0, 80.0).inflate(8.0);
//! let hits: Vec<_> = idx.query_rect(probe).map(|(_, name)| *name).collect();
//! assert_eq!(hits, ["note"]);
//! ```
//!
//! Opting into the grid backend only changes construction:
//!
//! ```rust
//! use orbit_index::{Aabb2D, Grid, Index};
//!
//! let mut idx: Index<u32, Grid> = Index::with_uniform_grid(160.0, 90.0, 0.0, 0.0);
//! idx.insert(Aabb2D::new(0.0, 0.0, 100.0, 100.0), 1);
//! assert!(idx.any_overlapping(Aabb2D::new(10.0, 10.0, 20.0, 20.0)));
//! ```
//!
//! ## Choosing a backend
//!
//! - `FlatVec` (default): simplest and smallest, linear scans. Good for the few dozen items a dial usually holds.
//! - `Grid`: uniform grid; great locality and simple tuning. Choose the cell size so most boxes
//!   fall within a handful of cells.
//!
//! ### Float semantics
//!
//! NaN coordinates never overlap anything.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod backend;
pub mod backends;
pub mod index;
pub mod types;

pub use backend::Backend;
pub use backends::{FlatVec, Grid};
pub use index::{Index, Key};
pub use types::Aabb2D;
